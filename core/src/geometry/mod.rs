//! Value types: vectors and the three shape primitives.

pub mod vector;
pub use vector::Vector2;

pub mod corner;
pub use corner::Corner;

pub mod aabb;
pub use aabb::Aabb;

pub mod circle;
pub use circle::Circle;

pub mod segment;
pub use segment::LineSegment;

/// Tolerance used by [`ApproxEq`]. Nothing else in the crate uses a tolerance.
pub const EPSILON: f64 = 1e-6;

/// Opt-in approximate comparison for callers that want one.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).magnitude_squared() < EPSILON * EPSILON
    }
}

impl ApproxEq for Aabb {
    fn approx_eq(&self, other: &Self) -> bool {
        self.pos.approx_eq(&other.pos) && self.size.approx_eq(&other.size)
    }
}

impl ApproxEq for Circle {
    fn approx_eq(&self, other: &Self) -> bool {
        self.pos.approx_eq(&other.pos) && self.radius.approx_eq(&other.radius)
    }
}
