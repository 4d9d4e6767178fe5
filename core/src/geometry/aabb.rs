use super::{Corner, Vector2};
use crate::error::GeometryResult;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box stored as its top-left corner and its size.
///
/// Sizes are not validated. A negative width or height describes a box that
/// extends left or up from `pos`. The predicates work on the covered area, so
/// `Aabb::new(0.0, 0.0, -2.0, -2.0)` and `Aabb::new(-2.0, -2.0, 2.0, 2.0)`
/// answer them the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner.
    pub pos: Vector2,
    /// Width and height.
    pub size: Vector2,
}

impl Aabb {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub const fn from_pos_size(pos: Vector2, size: Vector2) -> Self {
        Self { pos, size }
    }

    pub fn move_by(&mut self, movement: Vector2) {
        self.pos += movement;
    }

    pub fn center(&self) -> Vector2 {
        self.pos + self.size * 0.5
    }

    pub fn corner(&self, corner: Corner) -> Vector2 {
        match corner {
            Corner::TopLeft => self.pos,
            Corner::TopRight => Vector2::new(self.pos.x + self.size.x, self.pos.y),
            Corner::BottomLeft => Vector2::new(self.pos.x, self.pos.y + self.size.y),
            Corner::BottomRight => self.pos + self.size,
        }
    }

    /// Corner lookup by raw index, in [`Corner::ALL`] order.
    pub fn corner_at(&self, index: usize) -> GeometryResult<Vector2> {
        Ok(self.corner(Corner::try_from(index)?))
    }

    /// All four corners, indexed like [`Corner::ALL`].
    pub fn corners(&self) -> [Vector2; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Multiplies the size by `factor` without moving the center.
    pub fn scale_relative_to_center(&mut self, factor: f64) {
        let center = self.center();
        self.size *= factor;
        self.pos = center - self.size * 0.5;
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.size.x + self.size.y)
    }

    pub fn area(&self) -> f64 {
        self.size.x * self.size.y
    }

    pub fn diagonal_length(&self) -> f64 {
        self.size.magnitude()
    }

    /// Same area with `pos` on the top-left and a non-negative size.
    pub fn normalized(&self) -> Aabb {
        let far = self.pos + self.size;
        Aabb::new(
            self.pos.x.min(far.x),
            self.pos.y.min(far.y),
            self.size.x.abs(),
            self.size.y.abs(),
        )
    }

    /// Inclusive on every edge: points on the boundary are contained.
    pub fn contains(&self, point: Vector2) -> bool {
        let far = self.pos + self.size;
        point.x >= self.pos.x.min(far.x)
            && point.y >= self.pos.y.min(far.y)
            && point.x <= self.pos.x.max(far.x)
            && point.y <= self.pos.y.max(far.y)
    }

    /// Overlap test. Touching edges count as intersecting.
    ///
    /// Grows `other` by our size towards the top-left so the question becomes
    /// whether the grown box contains our top-left corner.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let ours = self.normalized();
        let mut extended = other.normalized();
        extended.size += ours.size;
        extended.pos -= ours.size;
        extended.contains(ours.pos)
    }

    /// True when `other` lies entirely inside this box (boundaries included).
    pub fn strictly_contains(&self, other: &Aabb) -> bool {
        if self.size.magnitude_squared() < other.size.magnitude_squared() {
            return false;
        }
        let inner = other.normalized();
        let mut zone = self.normalized();
        zone.size -= inner.size;
        // A wider or taller `other` leaves no room on that axis.
        zone.size.x >= 0.0 && zone.size.y >= 0.0 && zone.contains(inner.pos)
    }
}
