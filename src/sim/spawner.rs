//! Edge spawning of enemies
//!
//! A plain tick counter: every `spawn_interval` ticks one enemy appears
//! just outside a random field edge, aimed at the ring center. The
//! difficulty level sets the cadence, the speed and whether bosses can
//! show up.

use glam::Vec2;
use rand::Rng;

use super::state::{Difficulty, Enemy};
use crate::consts::SPAWN_OFFSET;

/// Field edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Variants the spawner can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyVariant {
    Basic,
    Circle,
    Boss,
}

const STANDARD_MIX: [EnemyVariant; 2] = [EnemyVariant::Basic, EnemyVariant::Circle];
const BOSS_MIX: [EnemyVariant; 3] = [
    EnemyVariant::Basic,
    EnemyVariant::Circle,
    EnemyVariant::Boss,
];

/// Spawn cadence and placement for one difficulty
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    difficulty: Difficulty,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    spawn_interval: u32,
    /// Point every enemy is aimed at
    target: Vec2,
    /// Visible field size
    field: Vec2,
}

impl EnemySpawner {
    pub fn new(difficulty: Difficulty, target: Vec2, field: Vec2) -> Self {
        Self {
            difficulty,
            spawn_timer: 0,
            spawn_interval: difficulty.spawn_interval(),
            target,
            field,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn spawn_interval(&self) -> u32 {
        self.spawn_interval
    }

    /// Speed every enemy from this spawner travels at
    pub fn enemy_speed(&self) -> f32 {
        self.difficulty.enemy_speed()
    }

    /// Variants eligible at this difficulty (bosses only from level 3)
    pub fn variant_mix(&self) -> &'static [EnemyVariant] {
        if self.difficulty.boss_eligible() {
            &BOSS_MIX
        } else {
            &STANDARD_MIX
        }
    }

    /// Count one tick; returns the spawned enemy when the interval elapses
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<Enemy> {
        self.spawn_timer += 1;
        if self.spawn_timer < self.spawn_interval {
            return None;
        }
        self.spawn_timer = 0;
        Some(self.spawn(rng))
    }

    /// Place one enemy outside a random edge, heading for the target
    pub fn spawn<R: Rng>(&self, rng: &mut R) -> Enemy {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let pos = self.spawn_point(edge, rng);
        let vel = self.velocity_from(pos);

        let mix = self.variant_mix();
        let variant = mix[rng.random_range(0..mix.len())];

        log::debug!("Spawning {:?} from {:?} at ({:.0}, {:.0})", variant, edge, pos.x, pos.y);

        match variant {
            EnemyVariant::Basic => Enemy::basic(pos, vel),
            EnemyVariant::Circle => Enemy::circle(pos, vel),
            EnemyVariant::Boss => Enemy::boss(pos, vel),
        }
    }

    /// Uniform point along `edge`, `SPAWN_OFFSET` outside the field
    pub fn spawn_point<R: Rng>(&self, edge: Edge, rng: &mut R) -> Vec2 {
        match edge {
            Edge::Top => Vec2::new(rng.random_range(0.0..self.field.x), -SPAWN_OFFSET),
            Edge::Bottom => Vec2::new(
                rng.random_range(0.0..self.field.x),
                self.field.y + SPAWN_OFFSET,
            ),
            Edge::Left => Vec2::new(-SPAWN_OFFSET, rng.random_range(0.0..self.field.y)),
            Edge::Right => Vec2::new(
                self.field.x + SPAWN_OFFSET,
                rng.random_range(0.0..self.field.y),
            ),
        }
    }

    /// Unit direction toward the target scaled by the difficulty speed
    pub fn velocity_from(&self, pos: Vec2) -> Vec2 {
        (self.target - pos).normalize_or_zero() * self.enemy_speed()
    }
}
