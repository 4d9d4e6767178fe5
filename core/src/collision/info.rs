//! Collision info: normal and penetration depth for overlapping pairs.

use super::types::{AabbCollision, CircleAabbCollision, CirclesCollision, Penetration};
use crate::geometry::{Aabb, Circle, Corner, Vector2};
use tracing::trace;

/// Collision between two boxes.
///
/// The normal is the axis direction in which `other` has to be pushed out of
/// `first`. Returns [`AabbCollision::NONE`] when the boxes do not intersect.
///
/// The corner of `first` nearest to the center of `other` is paired with the
/// diagonally opposite corner of `other`; the larger component of their
/// distance picks the axis. Nearest-corner ties resolve in [`Corner::ALL`]
/// order, and equal components resolve to a horizontal normal.
pub fn aabb_collision_info(first: &Aabb, other: &Aabb) -> AabbCollision {
    if !first.intersects(other) {
        return AabbCollision::NONE;
    }

    let first_corners = first.corners();
    let other_corners = other.corners();
    let other_center = other.center();

    let mut closest = Corner::TopLeft;
    let mut closest_distance = f64::INFINITY;
    for corner in Corner::ALL {
        let distance = (first_corners[corner.index()] - other_center).magnitude();
        // Strict: the earliest corner keeps a tie.
        if distance < closest_distance {
            closest_distance = distance;
            closest = corner;
        }
    }

    let opposite = closest.diagonally_opposed();
    let delta = (first_corners[closest.index()] - other_corners[opposite.index()]).abs();

    let normal = if delta.x > delta.y {
        if closest.is_top() {
            Vector2::UP
        } else {
            Vector2::DOWN
        }
    } else if closest.is_left() {
        Vector2::LEFT
    } else {
        Vector2::RIGHT
    };

    let collision = AabbCollision { normal, delta };
    trace!(?closest, %normal, depth = collision.penetration_depth(), "aabb collision");
    collision
}

/// Collision between two circles.
///
/// The normal points from `first`'s center to `other`'s. Concentric circles
/// collide with a zero normal, which reads the same as "no collision".
pub fn circles_collision_info(first: &Circle, other: &Circle) -> CirclesCollision {
    if !first.intersects(other) {
        return Penetration::NONE;
    }

    let collision = Penetration {
        normal: (other.pos - first.pos).normalize(),
        depth: first.distance_to(other).abs(),
    };
    trace!(normal = %collision.normal, depth = collision.depth, "circles collision");
    collision
}

/// Collision between a box and a circle; the normal is where the circle goes.
///
/// A circle whose center is level with a side of the box (strictly inside
/// its x range or its y range) is treated as its enclosing box and resolved
/// like two boxes. Otherwise it faces a corner and is pushed away from the
/// first box corner it contains.
pub fn circle_aabb_collision_info(aabb: &Aabb, circle: &Circle) -> CircleAabbCollision {
    let circle_box = circle.enclosing_aabb();
    if !aabb.intersects(&circle_box) {
        return Penetration::NONE;
    }

    let within_x = circle.pos.x > aabb.pos.x && circle.pos.x < aabb.pos.x + aabb.size.x;
    let within_y = circle.pos.y > aabb.pos.y && circle.pos.y < aabb.pos.y + aabb.size.y;

    if within_x || within_y {
        let boxes = aabb_collision_info(aabb, &circle_box);
        return Penetration {
            normal: boxes.normal,
            depth: boxes.penetration_depth(),
        };
    }

    for corner in aabb.corners() {
        if circle.contains(corner) {
            let offset = circle.pos - corner;
            let collision = Penetration {
                normal: offset.normalize(),
                depth: circle.radius - offset.magnitude(),
            };
            trace!(%corner, normal = %collision.normal, depth = collision.depth, "circle/aabb corner collision");
            return collision;
        }
    }

    Penetration::NONE
}
