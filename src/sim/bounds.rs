//! Axis-aligned bounding boxes
//!
//! Every entity exposes its visual shape as a `Rect`. Collision and
//! ring-proximity checks work on these boxes only, never on exact shapes.

use glam::Vec2;

/// Axis-aligned rectangle, `min` is the top-left corner (screen y grows down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square or rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box holding every point (empty input gives a zero box at the origin)
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::new(Vec2::ZERO, Vec2::ZERO);
        };
        rest.iter().fold(Self::new(first, first), |rect, &p| Self {
            min: rect.min.min(p),
            max: rect.max.max(p),
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(100.0, 50.0), Vec2::splat(30.0));
        assert_eq!(r.min, Vec2::new(85.0, 35.0));
        assert_eq!(r.max, Vec2::new(115.0, 65.0));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
        assert_eq!(r.width(), 30.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::centered(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::centered(Vec2::new(8.0, 8.0), Vec2::splat(10.0));
        let c = Rect::centered(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Touching edges only
        let d = Rect::centered(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_from_points() {
        let r = Rect::from_points(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(4.0, -1.0),
        ]);
        assert_eq!(r.min, Vec2::new(-3.0, -1.0));
        assert_eq!(r.max, Vec2::new(4.0, 5.0));
        assert!(r.contains_point(Vec2::ZERO));
    }
}
