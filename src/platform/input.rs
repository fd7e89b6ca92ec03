//! Keyboard input from the terminal
//!
//! A dedicated thread blocks on terminal events and forwards them through a
//! channel, so the frame loop only ever drains what is already there.

use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::{InputEvent, Key};

/// Translate one key event into a game input
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Some(InputEvent::CloseRequested);
    }

    let key = match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Key::Down,
        KeyCode::Char(' ') | KeyCode::Enter => Key::Action,
        KeyCode::Char('r') | KeyCode::Char('R') => Key::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Key::Quit,
        _ => return None,
    };
    Some(InputEvent::Pressed(key))
}

/// Translate any terminal event; non-key events are ignored
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Start the reader thread
///
/// The thread exits when the receiver is dropped or the terminal stops
/// producing events.
pub fn spawn_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("Terminal event read failed: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Collect every game input waiting in the channel
pub fn drain(rx: &mpsc::Receiver<Event>) -> Vec<InputEvent> {
    rx.try_iter().filter_map(|ev| map_event(&ev)).collect()
}
