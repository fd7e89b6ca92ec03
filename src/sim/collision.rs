//! Bullet/enemy collision detection and resolution
//!
//! Each enemy scans the bullet list in order and reacts to the first bullet
//! whose bounds overlap its own. A bullet is consumed by the hit, so it can
//! take out at most one enemy per tick.

use super::bounds::Rect;
use super::state::{Bullet, Explosion, GameState};

/// What one collision pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitSummary {
    /// Bullets consumed by hits
    pub hits: u32,
    /// Enemies removed
    pub kills: u32,
    /// Hits on bosses that survived them
    pub boss_hits: u32,
    /// Score awarded this pass
    pub score: u32,
}

impl HitSummary {
    pub fn merge(&mut self, other: HitSummary) {
        self.hits += other.hits;
        self.kills += other.kills;
        self.boss_hits += other.boss_hits;
        self.score += other.score;
    }
}

/// Index of the first bullet overlapping `target`, in collection order
pub fn first_hit(target: &Rect, bullets: &[Bullet]) -> Option<usize> {
    bullets.iter().position(|b| b.bounds().intersects(target))
}

/// Resolve every bullet/enemy overlap for this tick
///
/// On a hit: explosion at the enemy's center, screen shake, bullet removed.
/// Non-boss enemies die on the spot. Bosses lose one health point and are
/// only removed (for the bigger reward) once their health runs out.
pub fn resolve_bullet_hits(state: &mut GameState) -> HitSummary {
    let mut summary = HitSummary::default();

    let mut i = 0;
    while i < state.enemies.len() {
        let bounds = state.enemies[i].bounds();
        let Some(bullet_idx) = first_hit(&bounds, &state.bullets) else {
            i += 1;
            continue;
        };

        state.bullets.remove(bullet_idx);
        state.explosions.push(Explosion::new(bounds.center()));
        state.shake.trigger();
        summary.hits += 1;

        let enemy = &mut state.enemies[i];
        if enemy.is_boss() {
            enemy.take_damage();
            if enemy.is_alive() {
                log::debug!("Boss hit, health {:?}", enemy.health());
                summary.boss_hits += 1;
                i += 1;
                continue;
            }
        }

        let enemy = state.enemies.remove(i);
        let reward = enemy.score_value();
        state.score += reward;
        summary.kills += 1;
        summary.score += reward;
        log::debug!("{:?} destroyed (+{}), score {}", enemy.kind, reward, state.score);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Difficulty, Enemy};
    use glam::Vec2;

    fn playing() -> GameState {
        let mut state = GameState::new(42, Difficulty::Easy);
        state.start_round();
        state
    }

    /// A bullet whose bounds sit on `target`
    fn bullet_at(target: Vec2) -> Bullet {
        // Heading 0 puts the triangle box over target + (-5..10, -5..5)
        Bullet::new(target + Vec2::new(5.0, 5.0), 0.0)
    }

    #[test]
    fn test_first_hit_in_order() {
        let target = Rect::centered(Vec2::new(100.0, 100.0), Vec2::splat(30.0));
        let bullets = vec![
            bullet_at(Vec2::new(300.0, 300.0)),
            bullet_at(Vec2::new(100.0, 100.0)),
            bullet_at(Vec2::new(95.0, 100.0)),
        ];
        assert_eq!(first_hit(&target, &bullets), Some(1));
        assert_eq!(first_hit(&target, &bullets[2..]), Some(0));
        assert_eq!(first_hit(&target, &bullets[..1]), None);
    }

    #[test]
    fn test_basic_enemy_dies_on_one_hit() {
        let mut state = playing();
        let pos = Vec2::new(100.0, 100.0);
        state.enemies.push(Enemy::basic(pos, Vec2::ZERO));
        state.bullets.push(bullet_at(pos));

        let summary = resolve_bullet_hits(&mut state);
        assert_eq!(summary.kills, 1);
        assert_eq!(state.score, 1);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].pos, pos);
        assert_eq!(state.shake.duration, SHAKE_DURATION);
        assert_eq!(state.shake.magnitude, SHAKE_MAGNITUDE);
    }

    #[test]
    fn test_boss_needs_ten_hits() {
        let mut state = playing();
        let pos = Vec2::new(100.0, 100.0);
        state.enemies.push(Enemy::boss(pos, Vec2::ZERO));

        for hit in 1..=9 {
            state.bullets.push(bullet_at(pos));
            let summary = resolve_bullet_hits(&mut state);
            assert_eq!(summary.boss_hits, 1);
            assert_eq!(state.enemies.len(), 1, "boss removed after {} hits", hit);
            assert_eq!(state.score, 0);
            assert_eq!(
                state.enemies[0].health_fraction(),
                Some((10 - hit) as f32 / 10.0)
            );
        }

        state.bullets.push(bullet_at(pos));
        let summary = resolve_bullet_hits(&mut state);
        assert_eq!(summary.kills, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 5);
        assert_eq!(state.explosions.len(), 10);
    }

    #[test]
    fn test_bullet_kills_at_most_one_enemy() {
        let mut state = playing();
        let pos = Vec2::new(100.0, 100.0);
        // Two overlapping enemies, one bullet
        state.enemies.push(Enemy::basic(pos, Vec2::ZERO));
        state.enemies.push(Enemy::circle(pos + Vec2::new(2.0, 0.0), Vec2::ZERO));
        state.bullets.push(bullet_at(pos));

        let summary = resolve_bullet_hits(&mut state);
        assert_eq!(summary.kills, 1);
        assert_eq!(state.enemies.len(), 1);
        assert!(matches!(
            state.enemies[0].kind,
            crate::sim::state::EnemyKind::Circle
        ));
    }

    #[test]
    fn test_enemy_stops_at_first_bullet() {
        let mut state = playing();
        let pos = Vec2::new(100.0, 100.0);
        state.enemies.push(Enemy::boss(pos, Vec2::ZERO));
        state.bullets.push(bullet_at(pos));
        state.bullets.push(bullet_at(pos + Vec2::new(3.0, 0.0)));

        resolve_bullet_hits(&mut state);
        // Only one bullet consumed in a single pass
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies[0].health(), Some(BOSS_HEALTH - 1));
    }

    #[test]
    fn test_mixed_kills_score() {
        let mut state = playing();
        let a = Vec2::new(100.0, 100.0);
        let b = Vec2::new(700.0, 100.0);
        let c = Vec2::new(400.0, 550.0);
        state.enemies.push(Enemy::basic(a, Vec2::ZERO));
        state.enemies.push(Enemy::circle(b, Vec2::ZERO));
        state.enemies.push(Enemy::boss(c, Vec2::ZERO));
        state.bullets.push(bullet_at(a));
        state.bullets.push(bullet_at(b));

        resolve_bullet_hits(&mut state);
        for _ in 0..BOSS_HEALTH {
            state.bullets.push(bullet_at(c));
            resolve_bullet_hits(&mut state);
        }
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 2 * BASIC_KILL_SCORE + BOSS_KILL_SCORE);
        assert_eq!(state.score, 7);
    }

    #[test]
    fn test_miss_leaves_everything() {
        let mut state = playing();
        state.enemies.push(Enemy::basic(Vec2::new(100.0, 100.0), Vec2::ZERO));
        state.bullets.push(bullet_at(Vec2::new(500.0, 500.0)));
        let summary = resolve_bullet_hits(&mut state);
        assert_eq!(summary, HitSummary::default());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.bullets.len(), 1);
        assert!(!state.shake.is_active());
    }
}
