//! Game state and core simulation types
//!
//! Entities own their position and motion; the `GameState` owns every
//! entity collection exclusively. Removing an entry from a collection is
//! the only way an entity dies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Deserialize;

use super::bounds::Rect;
use super::spawner::EnemySpawner;
use crate::consts::*;
use crate::{heading, polar_to_cartesian, wrap_degrees};

/// Which update/render behavior is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, difficulty selection
    Menu,
    /// Active round
    Play,
    /// Round ended by a ring breach
    GameOver,
}

/// Selectable difficulty; the discriminant is the difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    /// Menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Difficulty level (1-3)
    pub fn level(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self.level() as usize - 1
    }

    /// Next entry in menu order, wrapping Hard -> Easy
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous entry in menu order, wrapping Easy -> Hard
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Ticks between spawns (60 / level)
    pub fn spawn_interval(self) -> u32 {
        BASE_SPAWN_INTERVAL / self.level()
    }

    /// Enemy speed in units per tick
    pub fn enemy_speed(self) -> f32 {
        1.0 + self.level() as f32 * 0.5
    }

    /// Bosses only join the mix at level 3
    pub fn boss_eligible(self) -> bool {
        self.level() >= 3
    }
}

/// The player: a point locked to the ring
#[derive(Debug, Clone)]
pub struct Player {
    center: Vec2,
    ring_radius: f32,
    /// Degrees, always in [0, 360)
    angle: f32,
    /// +1 or -1
    direction: i32,
    pos: Vec2,
}

impl Player {
    pub fn new(center: Vec2, ring_radius: f32) -> Self {
        Self {
            center,
            ring_radius,
            angle: 0.0,
            direction: 1,
            pos: polar_to_cartesian(0.0, ring_radius, center),
        }
    }

    /// Advance one tick along the ring
    pub fn advance(&mut self) {
        self.angle = wrap_degrees(self.angle + PLAYER_ANGULAR_SPEED * self.direction as f32);
        self.pos = polar_to_cartesian(self.angle, self.ring_radius, self.center);
    }

    pub fn reverse_direction(&mut self) {
        self.direction = -self.direction;
    }

    /// Spawn a bullet at the player heading outward along the current angle
    pub fn fire(&self) -> Bullet {
        Bullet::new(self.pos, self.angle)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }
}

/// Triangle outline of a bullet in local space (tip forward along +x)
const BULLET_POINTS: [Vec2; 3] = [
    Vec2::new(10.0, 0.0),
    Vec2::new(-5.0, 5.0),
    Vec2::new(-5.0, -5.0),
];
/// Local pivot the triangle rotates and is placed around
const BULLET_ORIGIN: Vec2 = Vec2::new(5.0, 5.0);

/// A projectile flying in a straight line
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    vel: Vec2,
    /// Heading in degrees
    angle: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            vel: heading(angle) * BULLET_SPEED,
            angle,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// True once the bullet has left [0, width] x [0, height]
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.x < 0.0 || self.pos.x > width || self.pos.y < 0.0 || self.pos.y > height
    }

    /// World-space triangle
    pub fn vertices(&self) -> [Vec2; 3] {
        let rot = heading(self.angle);
        BULLET_POINTS.map(|p| self.pos + rot.rotate(p - BULLET_ORIGIN))
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(&self.vertices())
    }
}

/// Color hint handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Yellow,
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Square
    Basic,
    /// Circle
    Circle,
    /// Large square with a health pool
    Boss { health: i32 },
}

/// Outline the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
}

/// Everything the renderer needs to draw an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawHint {
    pub shape: Shape,
    pub center: Vec2,
    pub size: f32,
    pub tint: Tint,
    /// Boss only: remaining health in [0, 1]
    pub health_fraction: Option<f32>,
}

/// An enemy drifting toward the ring at constant velocity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub tint: Tint,
}

impl Enemy {
    pub fn basic(pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind: EnemyKind::Basic,
            pos,
            vel,
            size: BASIC_ENEMY_SIZE,
            tint: Tint::Red,
        }
    }

    pub fn circle(pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind: EnemyKind::Circle,
            pos,
            vel,
            size: CIRCLE_ENEMY_SIZE,
            tint: Tint::Red,
        }
    }

    pub fn boss(pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind: EnemyKind::Boss {
                health: BOSS_HEALTH,
            },
            pos,
            vel,
            size: BOSS_ENEMY_SIZE,
            tint: Tint::Yellow,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Every variant's shape is centered on `pos` and `size` across
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(self.size))
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss { .. })
    }

    /// Boss loses one health point; other variants are unaffected
    pub fn take_damage(&mut self) {
        if let EnemyKind::Boss { health } = &mut self.kind {
            *health -= 1;
        }
    }

    /// Bosses die at zero health; other variants live until removed
    pub fn is_alive(&self) -> bool {
        match self.kind {
            EnemyKind::Boss { health } => health > 0,
            _ => true,
        }
    }

    pub fn health(&self) -> Option<i32> {
        match self.kind {
            EnemyKind::Boss { health } => Some(health),
            _ => None,
        }
    }

    pub fn health_fraction(&self) -> Option<f32> {
        self.health()
            .map(|h| (h as f32 / BOSS_HEALTH as f32).clamp(0.0, 1.0))
    }

    /// Kill reward
    pub fn score_value(&self) -> u32 {
        if self.is_boss() {
            BOSS_KILL_SCORE
        } else {
            BASIC_KILL_SCORE
        }
    }

    /// Bounds center closer to `center` than `ring_radius` + breach margin
    pub fn has_breached(&self, center: Vec2, ring_radius: f32) -> bool {
        self.bounds().center().distance(center) <= ring_radius + RING_BREACH_MARGIN
    }

    /// Bounds center more than the despawn margin outside the field
    pub fn is_out_of_field(&self, width: f32, height: f32) -> bool {
        let c = self.bounds().center();
        c.x < -DESPAWN_MARGIN
            || c.x > width + DESPAWN_MARGIN
            || c.y < -DESPAWN_MARGIN
            || c.y > height + DESPAWN_MARGIN
    }

    pub fn draw_hint(&self) -> DrawHint {
        DrawHint {
            shape: match self.kind {
                EnemyKind::Circle => Shape::Circle,
                EnemyKind::Basic | EnemyKind::Boss { .. } => Shape::Square,
            },
            center: self.bounds().center(),
            size: self.size,
            tint: self.tint,
            health_fraction: self.health_fraction(),
        }
    }
}

/// Expanding, fading ring left where an enemy was hit
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    /// 0-255
    pub alpha: u8,
    frame: u32,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: EXPLOSION_START_RADIUS,
            alpha: u8::MAX,
            frame: 0,
        }
    }

    pub fn advance(&mut self) {
        self.frame += 1;
        self.radius += EXPLOSION_GROWTH;
        if self.alpha > EXPLOSION_FADE {
            self.alpha -= EXPLOSION_FADE;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame > EXPLOSION_DURATION
    }
}

/// Camera jitter after hits
#[derive(Debug, Clone, Default)]
pub struct ScreenShake {
    /// Ticks remaining
    pub duration: u32,
    pub magnitude: f32,
    /// Offset to apply to the play field this frame
    pub offset: Vec2,
}

impl ScreenShake {
    pub fn trigger(&mut self) {
        self.duration = SHAKE_DURATION;
        self.magnitude = SHAKE_MAGNITUDE;
    }

    pub fn is_active(&self) -> bool {
        self.duration > 0
    }

    /// Roll a new offset and count down; zero offset once expired
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        if self.is_active() && self.magnitude > 0.0 {
            let m = self.magnitude;
            self.offset = Vec2::new(rng.random_range(-m..m), rng.random_range(-m..m));
            self.duration -= 1;
        } else {
            self.duration = 0;
            self.offset = Vec2::ZERO;
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Single source of randomness for spawning and shake
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Difficulty highlighted on the menu and used for the next round
    pub difficulty: Difficulty,
    pub score: u32,
    /// Ticks simulated in Play since the round started
    pub time_ticks: u64,
    pub field_size: Vec2,
    pub center: Vec2,
    pub ring_radius: f32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub spawner: EnemySpawner,
    pub shake: ScreenShake,
}

impl GameState {
    /// Create a new game on the menu with the given seed
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            difficulty,
            score: 0,
            time_ticks: 0,
            field_size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            center: CENTER,
            ring_radius: RING_RADIUS,
            player: Player::new(CENTER, RING_RADIUS),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            spawner: EnemySpawner::new(difficulty, CENTER, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)),
            shake: ScreenShake::default(),
        }
    }

    /// Change the selected difficulty; the spawner follows immediately
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset_spawner();
    }

    pub fn reset_spawner(&mut self) {
        self.spawner = EnemySpawner::new(self.difficulty, self.center, self.field_size);
    }

    /// Fresh round: zero score, empty collections, spawner at the selected difficulty
    pub fn start_round(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.bullets.clear();
        self.enemies.clear();
        self.explosions.clear();
        self.shake = ScreenShake::default();
        self.reset_spawner();
        self.phase = GamePhase::Play;
    }
}
