//! Cross-shape containment and overlap tests.
//!
//! Same-shape predicates live on the shapes themselves
//! ([`Aabb::intersects`], [`Circle::strictly_contains`], ...).

use crate::geometry::{Aabb, Circle, Corner, LineSegment, Vector2};

// =============================================================================
// Derived Shapes
// =============================================================================

/// Circle passing through all four corners of the box.
pub fn enclosing_circle(aabb: &Aabb) -> Circle {
    Circle::new(aabb.center(), aabb.diagonal_length() / 2.0)
}

/// Largest circle centered in the box that fits inside it.
pub fn inscribed_circle(aabb: &Aabb) -> Circle {
    Circle::new(aabb.center(), aabb.size.x.min(aabb.size.y) / 2.0)
}

pub fn enclosing_aabb(circle: &Circle) -> Aabb {
    circle.enclosing_aabb()
}

pub fn segment_enclosing_aabb(segment: &LineSegment) -> Aabb {
    segment.enclosing_aabb()
}

/// Largest square centered on the circle whose corners lie on the outline.
pub fn inscribed_aabb(circle: &Circle) -> Aabb {
    let half_side = (circle.radius * circle.radius / 2.0).sqrt();
    let half_size = Vector2::new(half_side, half_side);
    Aabb::from_pos_size(circle.pos - half_size, half_size * 2.0)
}

// =============================================================================
// Containment
// =============================================================================

/// True when the circle's enclosing box fits inside `aabb`.
pub fn aabb_contains_circle(aabb: &Aabb, circle: &Circle) -> bool {
    aabb.strictly_contains(&circle.enclosing_aabb())
}

/// True when every corner of `aabb` is inside the circle (outline excluded).
pub fn circle_contains_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    aabb.corners().iter().all(|corner| circle.contains(*corner))
}

// =============================================================================
// Intersection
// =============================================================================

/// Approximate box/circle overlap test.
///
/// Rejects when the bounding boxes are apart, then accepts if the circle holds
/// a box corner or the box holds one of the circle's four axis extremities.
/// Contact on the boundary inherits the mixed rules of the two `contains`:
/// a circle tangent to an edge intersects, one touching only a corner doesn't.
pub fn aabb_intersects_circle(aabb: &Aabb, circle: &Circle) -> bool {
    if !aabb.intersects(&circle.enclosing_aabb()) {
        return false;
    }

    if Corner::ALL
        .iter()
        .any(|&corner| circle.contains(aabb.corner(corner)))
    {
        return true;
    }

    [Vector2::LEFT, Vector2::RIGHT, Vector2::UP, Vector2::DOWN]
        .iter()
        .any(|&dir| aabb.contains(circle.pos + dir * circle.radius))
}

pub fn circle_intersects_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    aabb_intersects_circle(aabb, circle)
}

/// Gap between two circle outlines; negative when they overlap.
pub fn circles_distance(a: &Circle, b: &Circle) -> f64 {
    a.distance_to(b)
}
