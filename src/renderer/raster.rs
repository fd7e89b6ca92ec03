//! Software rasterizer for terminal output
//!
//! Fills the frame's triangle list into a small RGB grid. Each pixel is
//! tested at a few sub-sample points and painted when any of them is
//! covered, so the two-unit ring outline survives the heavy downscale.

use glam::Vec2;

use super::vertex::{Vertex, colors};

/// Sub-samples per pixel along each axis
const SUBSAMPLES: u32 = 4;

/// RGB pixel buffer mapped onto the world rectangle `[0, world]`
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    world: Vec2,
    pixels: Vec<[f32; 3]>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, world: Vec2) -> Self {
        let background = [colors::BACKGROUND[0], colors::BACKGROUND[1], colors::BACKGROUND[2]];
        Self {
            width,
            height,
            world,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        let background = [colors::BACKGROUND[0], colors::BACKGROUND[1], colors::BACKGROUND[2]];
        self.pixels.fill(background);
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 / self.world.x,
            self.height as f32 / self.world.y,
        )
    }

    /// World position to (fractional) pixel coordinates
    pub fn world_to_pixel(&self, p: Vec2) -> Vec2 {
        p * self.scale()
    }

    /// Color at a pixel, `None` outside the grid
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// 8-bit color at a pixel (black outside the grid)
    pub fn rgb8(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let [r, g, b] = self.pixel(x, y).unwrap_or([0.0; 3]);
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Fill a triangle list (three vertices per triangle, flat colored by
    /// the first vertex)
    pub fn fill_triangles(&mut self, vertices: &[Vertex]) {
        let scale = self.scale();
        for tri in vertices.chunks_exact(3) {
            let a = Vec2::from(tri[0].position) * scale;
            let b = Vec2::from(tri[1].position) * scale;
            let c = Vec2::from(tri[2].position) * scale;
            self.fill_triangle(a, b, c, tri[0].color);
        }
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        let area = edge(a, b, c);
        if area == 0.0 || color[3] <= 0.0 {
            return;
        }

        let min = a.min(b).min(c).floor().max(Vec2::ZERO);
        let max = a.max(b).max(c).ceil();
        let x_end = (max.x.max(0.0) as usize).min(self.width);
        let y_end = (max.y.max(0.0) as usize).min(self.height);

        for y in (min.y as usize)..y_end {
            for x in (min.x as usize)..x_end {
                if covers(a, b, c, area, x, y) {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn blend(&mut self, x: usize, y: usize, color: [f32; 4]) {
        let alpha = color[3].clamp(0.0, 1.0);
        let dst = &mut self.pixels[y * self.width + x];
        for i in 0..3 {
            dst[i] = color[i] * alpha + dst[i] * (1.0 - alpha);
        }
    }
}

/// Twice the signed area of (a, b, p)
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

fn covers(a: Vec2, b: Vec2, c: Vec2, area: f32, x: usize, y: usize) -> bool {
    let step = 1.0 / SUBSAMPLES as f32;
    for sy in 0..SUBSAMPLES {
        for sx in 0..SUBSAMPLES {
            let p = Vec2::new(
                x as f32 + (sx as f32 + 0.5) * step,
                y as f32 + (sy as f32 + 0.5) * step,
            );
            let w0 = edge(b, c, p) * area.signum();
            let w1 = edge(c, a, p) * area.signum();
            let w2 = edge(a, b, p) * area.signum();
            if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                return true;
            }
        }
    }
    false
}
