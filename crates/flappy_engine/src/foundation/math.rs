//! Math utilities and types
//!
//! Provides fundamental math types for 2D game development.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned rectangle defined by its center and full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center of the rectangle
    pub center: Vec2,

    /// Full width
    pub width: f32,

    /// Full height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its center point and full extents
    pub fn from_center_extents(center: Vec2, width: f32, height: f32) -> Self {
        Self { center, width, height }
    }

    /// Check whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        (point.x - self.center.x).abs() <= half_w && (point.y - self.center.y).abs() <= half_h
    }

    /// Return a copy scaled about its center by the given ratio
    pub fn scaled(&self, ratio: f32) -> Self {
        Self {
            center: self.center,
            width: self.width * ratio,
            height: self.height * ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_contains_center_and_edges() {
        let rect = Rect::from_center_extents(Vec2::new(10.0, 20.0), 4.0, 2.0);

        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(12.0, 21.0))); // corner, edges inclusive
        assert!(!rect.contains(Vec2::new(12.1, 20.0)));
        assert!(!rect.contains(Vec2::new(10.0, 18.9)));
    }

    #[test]
    fn test_rect_scaled_keeps_center() {
        let rect = Rect::from_center_extents(Vec2::new(5.0, 5.0), 100.0, 50.0);
        let scaled = rect.scaled(0.95);

        assert_eq!(scaled.center, rect.center);
        assert_relative_eq!(scaled.width, 95.0);
        assert_relative_eq!(scaled.height, 47.5);
    }
}
