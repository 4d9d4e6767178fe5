//! Keeping a shape inside a container box.

use crate::geometry::{Aabb, Circle, Vector2};
use tracing::debug;

/// Clamps one coordinate into `[low, high]`, snapping to `low` when the range
/// is empty (the shape is wider than the container).
fn clamp_axis(value: f64, low: f64, high: f64) -> f64 {
    if high < low {
        low
    } else {
        value.max(low).min(high)
    }
}

/// Moves `object` by the smallest amount that puts it inside `container`.
///
/// On an axis where the object is larger than the container it is aligned
/// with the container's top or left edge. Returns the applied displacement.
pub fn ensure_aabb_containment(object: &mut Aabb, container: &Aabb) -> Vector2 {
    let target = Vector2::new(
        clamp_axis(
            object.pos.x,
            container.pos.x,
            container.pos.x + container.size.x - object.size.x,
        ),
        clamp_axis(
            object.pos.y,
            container.pos.y,
            container.pos.y + container.size.y - object.size.y,
        ),
    );

    let displacement = target - object.pos;
    if !displacement.is_zero() {
        debug!(%displacement, "aabb moved back into its container");
        object.move_by(displacement);
    }
    displacement
}

/// Circle counterpart of [`ensure_aabb_containment`]; the circle is kept
/// inside by its enclosing box.
pub fn ensure_circle_containment(object: &mut Circle, container: &Aabb) -> Vector2 {
    let r = object.radius;
    let target = Vector2::new(
        clamp_axis(object.pos.x, container.pos.x + r, container.pos.x + container.size.x - r),
        clamp_axis(object.pos.y, container.pos.y + r, container.pos.y + container.size.y - r),
    );

    let displacement = target - object.pos;
    if !displacement.is_zero() {
        debug!(%displacement, "circle moved back into its container");
        object.pos = target;
    }
    displacement
}
