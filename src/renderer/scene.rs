//! Frame building
//!
//! Turns a `GameState` snapshot into backend-neutral draw data: a triangle
//! list in world units plus text labels. Nothing here touches the
//! simulation, so rendering can never change gameplay.

use glam::Vec2;

use super::font::FontMetrics;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{DrawHint, GamePhase, GameState, Shape};

const RING_SEGMENTS: u32 = 96;
const CIRCLE_SEGMENTS: u32 = 24;

pub const TITLE_TEXT_SIZE: f32 = 48.0;
pub const BODY_TEXT_SIZE: f32 = 24.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;
const HEALTH_BAR_GAP: f32 = 10.0;

/// A line of text positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything needed to present one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl Frame {
    fn label(&mut self, text: String, position: Vec2, size: f32, color: [f32; 4]) {
        self.labels.push(TextLabel {
            text,
            position,
            size,
            color,
        });
    }

    /// Label centered horizontally on the field
    fn centered(
        &mut self,
        font: &FontMetrics,
        text: String,
        y: f32,
        size: f32,
        color: [f32; 4],
    ) {
        let width = font.measure(&text, size).x;
        let x = FIELD_WIDTH / 2.0 - width / 2.0;
        self.label(text, Vec2::new(x, y), size, color);
    }
}

/// Build the frame for the current phase
///
/// Without font metrics the frame carries geometry only.
pub fn build_frame(state: &GameState, font: Option<&FontMetrics>, settings: &Settings) -> Frame {
    let mut frame = Frame::default();

    match state.phase {
        GamePhase::Menu => {
            if let Some(font) = font {
                menu_labels(&mut frame, state, font);
            }
        }
        GamePhase::Play => {
            let offset = if settings.effective_screen_shake() {
                state.shake.offset
            } else {
                Vec2::ZERO
            };
            play_field(&mut frame, state);
            shapes::translate(&mut frame.vertices, offset);
            if font.is_some() {
                frame.label(
                    format!("Score: {}", state.score),
                    Vec2::new(10.0, 10.0) + offset,
                    BODY_TEXT_SIZE,
                    colors::WHITE,
                );
            }
        }
        GamePhase::GameOver => {
            if let Some(font) = font {
                game_over_labels(&mut frame, state, font);
            }
        }
    }

    frame
}

fn play_field(frame: &mut Frame, state: &GameState) {
    let v = &mut frame.vertices;

    // Outline grows outward from the ring radius
    v.extend(shapes::ring(
        state.center,
        state.ring_radius,
        state.ring_radius + RING_THICKNESS,
        colors::RING,
        RING_SEGMENTS,
    ));

    v.extend(shapes::circle(
        state.player.pos(),
        PLAYER_RADIUS,
        colors::PLAYER,
        CIRCLE_SEGMENTS,
    ));

    for bullet in &state.bullets {
        v.extend(shapes::triangle(bullet.vertices(), colors::BULLET));
    }

    for enemy in &state.enemies {
        enemy_vertices(v, &enemy.draw_hint());
    }

    for explosion in &state.explosions {
        v.extend(shapes::circle(
            explosion.pos,
            explosion.radius,
            colors::with_alpha(colors::EXPLOSION, explosion.alpha),
            CIRCLE_SEGMENTS,
        ));
    }
}

fn enemy_vertices(v: &mut Vec<Vertex>, hint: &DrawHint) {
    let color = colors::tint(hint.tint);
    let half = Vec2::splat(hint.size / 2.0);
    match hint.shape {
        Shape::Square => v.extend(shapes::rect(hint.center - half, Vec2::splat(hint.size), color)),
        Shape::Circle => v.extend(shapes::circle(
            hint.center,
            hint.size / 2.0,
            color,
            CIRCLE_SEGMENTS,
        )),
    }

    if let Some(fraction) = hint.health_fraction {
        let origin = hint.center - half - Vec2::new(0.0, HEALTH_BAR_GAP);
        v.extend(shapes::rect(
            origin,
            Vec2::new(hint.size, HEALTH_BAR_HEIGHT),
            colors::HEALTH_BACK,
        ));
        v.extend(shapes::rect(
            origin,
            Vec2::new(hint.size * fraction.clamp(0.0, 1.0), HEALTH_BAR_HEIGHT),
            colors::HEALTH_FRONT,
        ));
    }
}

fn menu_labels(frame: &mut Frame, state: &GameState, font: &FontMetrics) {
    frame.centered(
        font,
        "Orbit Shooter".into(),
        100.0,
        TITLE_TEXT_SIZE,
        colors::WHITE,
    );
    frame.centered(
        font,
        "Press SPACE to Start".into(),
        200.0,
        BODY_TEXT_SIZE,
        colors::WHITE,
    );
    frame.centered(
        font,
        "Select Difficulty (Up/Down):".into(),
        300.0,
        BODY_TEXT_SIZE,
        colors::WHITE,
    );
    frame.centered(
        font,
        state.difficulty.as_str().into(),
        350.0,
        BODY_TEXT_SIZE,
        colors::YELLOW,
    );
}

fn game_over_labels(frame: &mut Frame, state: &GameState, font: &FontMetrics) {
    frame.centered(font, "Game Over!".into(), 150.0, TITLE_TEXT_SIZE, colors::RED);
    frame.centered(
        font,
        format!("Enemies Defeated: {}", state.score),
        250.0,
        BODY_TEXT_SIZE,
        colors::WHITE,
    );
    frame.centered(
        font,
        "Press R to Restart or Q to Quit".into(),
        350.0,
        BODY_TEXT_SIZE,
        colors::WHITE,
    );
}
