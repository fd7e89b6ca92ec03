//! Menu / Play / GameOver state machine
//!
//! Discrete input events drive every phase change except the automatic
//! Play -> GameOver transition, which `tick` performs on a ring breach.
//! Events that mean nothing in the current phase are ignored.

use super::state::{Difficulty, GamePhase, GameState};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Start on the menu, fire while playing
    Action,
    Restart,
    Quit,
}

/// Input coming from the window/terminal collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    /// Window closed / interrupt
    CloseRequested,
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Apply one input event to the game
pub fn handle_input(state: &mut GameState, event: InputEvent) -> Flow {
    let key = match event {
        InputEvent::CloseRequested => {
            log::info!("Close requested");
            return Flow::Exit;
        }
        InputEvent::Pressed(key) => key,
    };

    match (state.phase, key) {
        (GamePhase::Menu, Key::Action) => {
            state.start_round();
            log::info!("Round started on {}", state.difficulty.as_str());
        }
        (GamePhase::Menu, Key::Up) => {
            state.select_difficulty(state.difficulty.prev());
            log::info!("Difficulty: {}", state.difficulty.as_str());
        }
        (GamePhase::Menu, Key::Down) => {
            state.select_difficulty(state.difficulty.next());
            log::info!("Difficulty: {}", state.difficulty.as_str());
        }
        (GamePhase::Play, Key::Left | Key::Right) => {
            state.player.reverse_direction();
        }
        (GamePhase::Play, Key::Action) => {
            // Every shot also flips the orbit direction
            let bullet = state.player.fire();
            state.bullets.push(bullet);
            state.player.reverse_direction();
        }
        (GamePhase::GameOver, Key::Restart) => {
            state.phase = GamePhase::Menu;
            state.select_difficulty(Difficulty::Easy);
            log::info!("Back to menu");
        }
        (GamePhase::GameOver, Key::Quit) => {
            log::info!("Quit from game over, final score {}", state.score);
            return Flow::Exit;
        }
        _ => {}
    }

    Flow::Continue
}

/// Apply a batch of events; stops at the first one that exits
pub fn handle_inputs<I>(state: &mut GameState, events: I) -> Flow
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        if handle_input(state, event) == Flow::Exit {
            return Flow::Exit;
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Bullet, Enemy, Explosion};
    use crate::sim::tick::tick;
    use glam::Vec2;

    fn press(state: &mut GameState, key: Key) -> Flow {
        handle_input(state, InputEvent::Pressed(key))
    }

    fn game_over_state() -> GameState {
        let mut state = GameState::new(7, Difficulty::Easy);
        press(&mut state, Key::Action);
        state.phase = GamePhase::GameOver;
        state
    }

    #[test]
    fn test_menu_starts_round() {
        let mut state = GameState::new(7, Difficulty::Easy);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(press(&mut state, Key::Action), Flow::Continue);
        assert_eq!(state.phase, GamePhase::Play);
    }

    #[test]
    fn test_menu_cycles_difficulty() {
        let mut state = GameState::new(7, Difficulty::Easy);
        press(&mut state, Key::Down);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.spawner.difficulty(), Difficulty::Medium);
        press(&mut state, Key::Down);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.spawner.spawn_interval(), 20);
        press(&mut state, Key::Down);
        assert_eq!(state.difficulty, Difficulty::Easy);
        press(&mut state, Key::Up);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.spawner.difficulty(), Difficulty::Hard);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_play_turn_reverses() {
        let mut state = GameState::new(7, Difficulty::Easy);
        press(&mut state, Key::Action);
        assert_eq!(state.player.direction(), 1);
        press(&mut state, Key::Left);
        assert_eq!(state.player.direction(), -1);
        press(&mut state, Key::Right);
        assert_eq!(state.player.direction(), 1);
    }

    #[test]
    fn test_fire_spawns_bullet_and_reverses() {
        let mut state = GameState::new(7, Difficulty::Easy);
        press(&mut state, Key::Action);
        press(&mut state, Key::Action);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, state.player.pos());
        assert_eq!(state.player.direction(), -1);
    }

    #[test]
    fn test_ignored_inputs() {
        let mut state = GameState::new(7, Difficulty::Easy);
        // Gameplay and game-over keys do nothing on the menu
        for key in [Key::Left, Key::Right, Key::Restart, Key::Quit] {
            assert_eq!(press(&mut state, key), Flow::Continue);
        }
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.direction(), 1);

        // Menu keys do nothing while playing
        press(&mut state, Key::Action);
        press(&mut state, Key::Up);
        press(&mut state, Key::Restart);
        press(&mut state, Key::Quit);
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.difficulty, Difficulty::Easy);

        // Only restart/quit matter after the round ends
        let mut state = game_over_state();
        let bullets = state.bullets.len();
        for key in [Key::Action, Key::Left, Key::Up, Key::Down] {
            press(&mut state, key);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bullets.len(), bullets);
    }

    #[test]
    fn test_game_over_restart_resets_difficulty() {
        let mut state = GameState::new(7, Difficulty::Hard);
        press(&mut state, Key::Action);
        state.phase = GamePhase::GameOver;
        assert_eq!(press(&mut state, Key::Restart), Flow::Continue);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.spawner.spawn_interval(), 60);
    }

    #[test]
    fn test_game_over_quit_exits() {
        let mut state = game_over_state();
        assert_eq!(press(&mut state, Key::Quit), Flow::Exit);
    }

    #[test]
    fn test_close_exits_anywhere() {
        let mut state = GameState::new(7, Difficulty::Easy);
        assert_eq!(handle_input(&mut state, InputEvent::CloseRequested), Flow::Exit);
        press(&mut state, Key::Action);
        assert_eq!(handle_input(&mut state, InputEvent::CloseRequested), Flow::Exit);
    }

    #[test]
    fn test_second_round_starts_clean() {
        let mut state = GameState::new(7, Difficulty::Easy);
        press(&mut state, Key::Action);

        // Leave debris from the first round
        state.score = 9;
        state.bullets.push(Bullet::new(CENTER, 0.0));
        state.enemies.push(Enemy::basic(Vec2::new(50.0, 50.0), Vec2::ZERO));
        state.explosions.push(Explosion::new(CENTER));
        state.phase = GamePhase::GameOver;

        press(&mut state, Key::Restart);
        press(&mut state, Key::Action);
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.score, 0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.explosions.is_empty());
    }

    #[test]
    fn test_no_events_leaves_phase() {
        for phase in [GamePhase::Menu, GamePhase::Play, GamePhase::GameOver] {
            let mut state = GameState::new(7, Difficulty::Easy);
            state.phase = phase;
            assert_eq!(handle_inputs(&mut state, Vec::new()), Flow::Continue);
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_batch_stops_at_exit() {
        let mut state = GameState::new(7, Difficulty::Easy);
        let events = [
            InputEvent::CloseRequested,
            InputEvent::Pressed(Key::Action),
        ];
        assert_eq!(handle_inputs(&mut state, events), Flow::Exit);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_breach_then_full_cycle() {
        let mut state = GameState::new(7, Difficulty::Medium);
        press(&mut state, Key::Action);
        state.enemies.push(Enemy::basic(CENTER, Vec2::ZERO));
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        press(&mut state, Key::Restart);
        assert_eq!(state.phase, GamePhase::Menu);
        press(&mut state, Key::Action);
        assert_eq!(state.phase, GamePhase::Play);
        assert_eq!(state.spawner.difficulty(), Difficulty::Easy);
    }
}
