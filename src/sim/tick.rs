//! Fixed timestep simulation tick
//!
//! Core game loop that advances the round by one tick. The order of the
//! steps matters: enemies are moved and culled before the collision pass
//! sees them.

use super::collision::{HitSummary, resolve_bullet_hits};
use super::state::{GamePhase, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// An enemy entered the field
    pub spawned: bool,
    /// Bullets that left the field
    pub bullets_expired: u32,
    /// Enemies dropped for drifting too far outside the field
    pub enemies_despawned: u32,
    /// An enemy reached the ring; the round is over
    pub breached: bool,
    pub hits: HitSummary,
}

impl TickEvents {
    /// Fold a later tick's events into this one
    pub fn merge(&mut self, other: TickEvents) {
        self.spawned |= other.spawned;
        self.bullets_expired += other.bullets_expired;
        self.enemies_despawned += other.enemies_despawned;
        self.breached |= other.breached;
        self.hits.merge(other.hits);
    }
}

/// Advance the game state by one fixed timestep
///
/// Does nothing outside `GamePhase::Play`. A breach moves the game to
/// `GameOver` immediately but the rest of the tick still runs, so hits
/// landed on the same tick still count.
pub fn tick(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();
    if state.phase != GamePhase::Play {
        return events;
    }

    state.time_ticks += 1;
    let (width, height) = (state.field_size.x, state.field_size.y);

    // 1. Player
    state.player.advance();

    // 2. Bullets
    let before = state.bullets.len();
    state.bullets.retain_mut(|bullet| {
        bullet.advance();
        !bullet.is_off_screen(width, height)
    });
    events.bullets_expired = (before - state.bullets.len()) as u32;

    // 3. Spawning
    if let Some(enemy) = state.spawner.tick(&mut state.rng) {
        state.enemies.push(enemy);
        events.spawned = true;
    }

    // 4. Enemies: breach check first, then culling
    let center = state.center;
    let ring_radius = state.ring_radius;
    let mut breached = false;
    let before = state.enemies.len();
    state.enemies.retain_mut(|enemy| {
        enemy.advance();
        if enemy.has_breached(center, ring_radius) {
            breached = true;
            return true;
        }
        !enemy.is_out_of_field(width, height)
    });
    events.enemies_despawned = (before - state.enemies.len()) as u32;

    if breached {
        log::debug!("Ring breached on tick {}", state.time_ticks);
        state.phase = GamePhase::GameOver;
        events.breached = true;
    }

    // 5. Collisions
    events.hits = resolve_bullet_hits(state);

    // 6. Explosions
    state.explosions.retain_mut(|explosion| {
        explosion.advance();
        !explosion.is_finished()
    });

    // 7. Screen shake
    state.shake.advance(&mut state.rng);

    events
}
