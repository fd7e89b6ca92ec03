//! Orbit Shooter - A ring-orbit arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state machine)
//! - `renderer`: Frame building and software rasterization (read-only over `sim`)
//! - `platform`: Terminal window, input and timing
//! - `settings`: User configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Visible play field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    pub const CENTER: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);

    /// Ring the player orbits
    pub const RING_RADIUS: f32 = 200.0;
    pub const RING_THICKNESS: f32 = 2.0;
    /// An enemy this close to the ring (beyond its radius) ends the round
    pub const RING_BREACH_MARGIN: f32 = 30.0;

    /// Player
    pub const PLAYER_RADIUS: f32 = 15.0;
    /// Degrees per tick
    pub const PLAYER_ANGULAR_SPEED: f32 = 2.0;

    /// Bullet
    pub const BULLET_SPEED: f32 = 5.0;

    /// Enemies
    pub const BASIC_ENEMY_SIZE: f32 = 30.0;
    pub const CIRCLE_ENEMY_SIZE: f32 = 25.0;
    pub const BOSS_ENEMY_SIZE: f32 = 60.0;
    pub const BOSS_HEALTH: i32 = 10;
    pub const BASIC_KILL_SCORE: u32 = 1;
    pub const BOSS_KILL_SCORE: u32 = 5;
    /// Enemies spawn this far outside a field edge
    pub const SPAWN_OFFSET: f32 = 30.0;
    /// Enemies whose center drifts this far outside the field are dropped
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Spawn cadence at difficulty level 1 (ticks)
    pub const BASE_SPAWN_INTERVAL: u32 = 60;

    /// Explosion
    pub const EXPLOSION_START_RADIUS: f32 = 5.0;
    pub const EXPLOSION_GROWTH: f32 = 1.0;
    pub const EXPLOSION_FADE: u8 = 5;
    pub const EXPLOSION_DURATION: u32 = 30;

    /// Screen shake triggered by every hit
    pub const SHAKE_DURATION: u32 = 10;
    pub const SHAKE_MAGNITUDE: f32 = 5.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn wrap_degrees(mut angle: f32) -> f32 {
    while angle >= 360.0 {
        angle -= 360.0;
    }
    while angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Point at `radius` from `center` in direction `angle_deg`
#[inline]
pub fn polar_to_cartesian(angle_deg: f32, radius: f32, center: Vec2) -> Vec2 {
    let theta = deg_to_rad(angle_deg);
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Unit vector pointing at `angle_deg`
#[inline]
pub fn heading(angle_deg: f32) -> Vec2 {
    let theta = deg_to_rad(angle_deg);
    Vec2::new(theta.cos(), theta.sin())
}
