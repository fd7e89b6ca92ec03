//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one 1/60 s step)
//! - Seeded RNG only, owned by `GameState`
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod machine;
pub mod spawner;
pub mod state;
pub mod tick;

pub use bounds::Rect;
pub use collision::{HitSummary, first_hit, resolve_bullet_hits};
pub use machine::{Flow, InputEvent, Key, handle_input, handle_inputs};
pub use spawner::{Edge, EnemySpawner, EnemyVariant};
pub use state::{
    Bullet, Difficulty, DrawHint, Enemy, EnemyKind, Explosion, GamePhase, GameState, Player,
    ScreenShake, Shape, Tint,
};
pub use tick::{TickEvents, tick};
