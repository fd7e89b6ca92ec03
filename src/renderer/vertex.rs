//! Vertex types for 2D rendering

/// Simple 2D vertex with position and color
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::Tint;

    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RING: [f32; 4] = WHITE;
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BULLET: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const HEALTH_BACK: [f32; 4] = RED;
    pub const HEALTH_FRONT: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const EXPLOSION: [f32; 4] = YELLOW;

    pub fn tint(tint: Tint) -> [f32; 4] {
        match tint {
            Tint::Red => RED,
            Tint::Yellow => YELLOW,
        }
    }

    /// Same color with a 0-255 alpha
    pub fn with_alpha(color: [f32; 4], alpha: u8) -> [f32; 4] {
        [color[0], color[1], color[2], alpha as f32 / 255.0]
    }
}
