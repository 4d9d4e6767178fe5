use super::{Aabb, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A circle given by its center and radius.
///
/// A zero radius is a valid (degenerate) circle. Negative radii are not
/// rejected but none of the queries give meaningful answers for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: Vector2,
    pub radius: f64,
}

impl Circle {
    pub const fn new(pos: Vector2, radius: f64) -> Self {
        Self { pos, radius }
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Smallest box containing the circle.
    pub fn enclosing_aabb(&self) -> Aabb {
        Aabb::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// Gap between the two outlines; negative when the circles overlap.
    pub fn distance_to(&self, other: &Circle) -> f64 {
        (self.pos - other.pos).magnitude() - self.radius - other.radius
    }

    /// Strict: a point on the outline is not contained.
    ///
    /// Note the asymmetry with [`Aabb::contains`], which is inclusive.
    pub fn contains(&self, point: Vector2) -> bool {
        (self.pos - point).magnitude_squared() < self.radius * self.radius
    }

    /// Strict: tangent circles do not intersect.
    pub fn intersects(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        (self.pos - other.pos).magnitude_squared() < reach * reach
    }

    /// True when `other` lies entirely inside this circle.
    ///
    /// Internally tangent circles count as contained, so every circle
    /// strictly contains itself.
    pub fn strictly_contains(&self, other: &Circle) -> bool {
        if other.radius > self.radius {
            return false;
        }
        let slack = self.radius - other.radius;
        (self.pos - other.pos).magnitude_squared() <= slack * slack
    }
}
