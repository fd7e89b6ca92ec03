//! Platform abstraction layer
//!
//! Handles the terminal side of the game:
//! - Time/ticks
//! - Input events
//! - Raw-mode output

pub mod input;
pub mod terminal;
pub mod time;

pub use terminal::TerminalSession;
pub use time::FixedTimestep;
