use crate::collision::{circles_collision_info, CollisionInfo, Penetration};
use crate::geometry::{ApproxEq, Circle, Vector2};

#[test]
fn test_circles_collision() {
    let first = Circle::new(Vector2::new(5.0, 3.0), 2.0);
    let other = Circle::new(Vector2::new(6.0, 2.0), 1.0);
    assert!(first.intersects(&other));

    let collision = circles_collision_info(&first, &other);
    let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
    assert!(collision.normal.approx_eq(&Vector2::new(half_sqrt2, -half_sqrt2)));
    assert!(collision.depth.approx_eq(&(3.0 - std::f64::consts::SQRT_2)));
}

#[test]
fn test_circles_collision_along_axis() {
    let first = Circle::new(Vector2::ZERO, 3.0);
    let other = Circle::new(Vector2::new(4.0, 0.0), 2.0);

    let collision = circles_collision_info(&first, &other);
    assert_eq!(collision.normal, Vector2::RIGHT);
    assert_eq!(collision.depth, 1.0);

    // Seen from the other circle the normal flips, the depth does not.
    let reverse = circles_collision_info(&other, &first);
    assert_eq!(reverse.normal, Vector2::LEFT);
    assert_eq!(reverse.depth, 1.0);
}

#[test]
fn test_circles_no_collision() {
    let first = Circle::new(Vector2::ZERO, 1.0);
    let far = Circle::new(Vector2::new(10.0, 10.0), 1.0);
    assert_eq!(circles_collision_info(&first, &far), Penetration::NONE);

    let tangent = Circle::new(Vector2::new(2.0, 0.0), 1.0);
    let collision = circles_collision_info(&first, &tangent);
    assert!(!collision.is_collision());
    assert_eq!(collision.depth(), 0.0);
}

#[test]
fn test_concentric_circles_have_zero_normal() {
    let first = Circle::new(Vector2::new(1.0, 1.0), 2.0);
    let other = Circle::new(Vector2::new(1.0, 1.0), 1.0);
    assert!(first.intersects(&other));

    let collision = circles_collision_info(&first, &other);
    assert_eq!(collision.normal, Vector2::ZERO);
    assert_eq!(collision.depth, 3.0);
    assert!(!collision.is_collision());
    assert_eq!(collision.depth(), 3.0);
}

#[test]
fn test_circle_normals_are_unit_length() {
    let first = Circle::new(Vector2::new(-2.0, 1.0), 4.0);
    let others = [
        Circle::new(Vector2::new(1.0, 1.0), 1.0),
        Circle::new(Vector2::new(0.3, -2.7), 2.5),
        Circle::new(Vector2::new(-5.0, 5.0), 3.0),
    ];
    for other in &others {
        let collision = circles_collision_info(&first, other);
        assert!(collision.is_collision());
        assert!(collision.normal.magnitude().approx_eq(&1.0));
        assert!(collision.depth > 0.0);
    }
}
