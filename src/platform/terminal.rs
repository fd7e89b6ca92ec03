//! Terminal output
//!
//! Owns raw mode and the alternate screen, and draws a `PixelGrid` using
//! upper-half blocks: foreground is the top pixel, background the bottom
//! one, so every character cell shows two roughly square pixels.

use std::io::{self, Write};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Color, Colors, Print},
    terminal,
};
use glam::Vec2;

use crate::renderer::{PixelGrid, TextLabel};

const HALF_BLOCK: char = '▀';

/// Largest pixel grid with the field's aspect ratio that fits in
/// `cols x rows` character cells
pub fn fit_grid(cols: u16, rows: u16, field: Vec2) -> (usize, usize) {
    let max_w = cols as f32;
    let max_h = rows as f32 * 2.0;
    let aspect = field.x / field.y;

    let (w, h) = if max_w / max_h > aspect {
        (max_h * aspect, max_h)
    } else {
        (max_w, max_w / aspect)
    };
    // Even height so pixel rows pair up into cells
    let h = (h as usize) & !1;
    (w as usize, h)
}

/// Where a grid of the given size sits when centered in the terminal
fn grid_origin(cols: u16, rows: u16, grid: &PixelGrid) -> (u16, u16) {
    let col = (cols as usize).saturating_sub(grid.width()) / 2;
    let row = (rows as usize).saturating_sub(grid.height() / 2) / 2;
    (col as u16, row as u16)
}

fn to_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

fn label_color(color: [f32; 4]) -> Color {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb {
        r: c(color[0]),
        g: c(color[1]),
        b: c(color[2]),
    }
}

/// Raw-mode alternate-screen session; restores the terminal on drop
pub struct TerminalSession<W: Write> {
    out: W,
    keyboard_enhanced: bool,
    active: bool,
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Release events where the terminal supports them; others fall back
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        log::debug!("Terminal session started (keyboard enhancement: {})", keyboard_enhanced);

        Ok(Self {
            out,
            keyboard_enhanced,
            active: true,
        })
    }

    /// Current terminal size in character cells
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Draw one frame
    pub fn present(&mut self, grid: &PixelGrid, labels: &[TextLabel]) -> io::Result<()> {
        let (cols, rows) = self.size()?;
        let (origin_col, origin_row) = grid_origin(cols, rows, grid);
        let out = &mut self.out;

        let mut current: Option<Colors> = None;
        for cell_row in 0..grid.height() / 2 {
            out.queue(cursor::MoveTo(origin_col, origin_row + cell_row as u16))?;
            for x in 0..grid.width() {
                let colors = Colors::new(
                    to_color(grid.rgb8(x, cell_row * 2)),
                    to_color(grid.rgb8(x, cell_row * 2 + 1)),
                );
                if current != Some(colors) {
                    out.queue(style::SetColors(colors))?;
                    current = Some(colors);
                }
                out.queue(Print(HALF_BLOCK))?;
            }
        }

        out.queue(style::SetBackgroundColor(Color::Black))?;
        for label in labels {
            let p = grid.world_to_pixel(label.position);
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let col = p.x as usize;
            let row = (p.y / 2.0) as usize;
            if col >= grid.width() || row >= grid.height() / 2 {
                continue;
            }
            let room = grid.width() - col;
            let text: String = label.text.chars().take(room).collect();
            out.queue(cursor::MoveTo(origin_col + col as u16, origin_row + row as u16))?;
            out.queue(style::SetForegroundColor(label_color(label.color)))?;
            out.queue(Print(text))?;
        }

        out.queue(style::ResetColor)?;
        out.flush()
    }

    /// Wipe the screen (after a resize)
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Leave raw mode and the alternate screen
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        self.out.queue(style::ResetColor)?;
        self.out.execute(cursor::Show)?;
        self.out.execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        log::debug!("Terminal restored");
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}
