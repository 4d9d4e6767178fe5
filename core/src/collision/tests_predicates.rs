use crate::collision::*;
use crate::geometry::{Aabb, ApproxEq, Circle, LineSegment, Vector2};

#[test]
fn test_enclosing_and_inscribed_circle() {
    let b = Aabb::new(0.0, 0.0, 6.0, 8.0);
    let outer = enclosing_circle(&b);
    assert_eq!(outer, Circle::new(Vector2::new(3.0, 4.0), 5.0));
    for corner in b.corners() {
        assert!((outer.pos.distance(&corner) - outer.radius).abs() < 1e-12);
    }

    assert_eq!(inscribed_circle(&b), Circle::new(Vector2::new(3.0, 4.0), 3.0));
}

#[test]
fn test_inscribed_aabb() {
    let c = Circle::new(Vector2::new(1.0, 1.0), 2.0);
    let square = inscribed_aabb(&c);
    assert!(square.center().approx_eq(&c.pos));
    assert!((square.size.x - square.size.y).abs() < 1e-12);
    assert!((square.diagonal_length() - c.diameter()).abs() < 1e-9);
}

#[test]
fn test_enclosing_aabb_helpers() {
    let c = Circle::new(Vector2::new(5.0, 3.0), 2.0);
    assert_eq!(enclosing_aabb(&c), Aabb::new(3.0, 1.0, 4.0, 4.0));

    let s = LineSegment::new(Vector2::new(5.0, 14.0), Vector2::new(13.0, 7.0));
    assert_eq!(segment_enclosing_aabb(&s), Aabb::new(5.0, 7.0, 8.0, 7.0));
}

#[test]
fn test_aabb_contains_circle() {
    let b = Aabb::new(0.0, 0.0, 10.0, 10.0);
    assert!(aabb_contains_circle(&b, &Circle::new(Vector2::new(5.0, 5.0), 5.0)));
    assert!(!aabb_contains_circle(&b, &Circle::new(Vector2::new(5.0, 5.0), 5.5)));
    assert!(!aabb_contains_circle(&b, &Circle::new(Vector2::new(9.0, 5.0), 2.0)));
}

#[test]
fn test_circle_contains_aabb() {
    let c = Circle::new(Vector2::ZERO, 5.0);
    assert!(circle_contains_aabb(&c, &Aabb::new(-3.0, -3.0, 6.0, 6.0)));
    // Corners exactly on the outline are outside.
    assert!(!circle_contains_aabb(&c, &Aabb::new(-3.0, -4.0, 6.0, 8.0)));
}

#[test]
fn test_aabb_intersects_circle() {
    let b = Aabb::new(0.0, 0.0, 10.0, 10.0);

    // Circle holds a box corner.
    assert!(aabb_intersects_circle(&b, &Circle::new(Vector2::new(-1.0, -1.0), 2.0)));
    // Box holds an extremity of the circle.
    assert!(aabb_intersects_circle(&b, &Circle::new(Vector2::new(5.0, -1.0), 2.0)));
    // Circle inside the box.
    assert!(aabb_intersects_circle(&b, &Circle::new(Vector2::new(5.0, 5.0), 1.0)));
    // Box inside the circle.
    assert!(aabb_intersects_circle(&b, &Circle::new(Vector2::new(5.0, 5.0), 100.0)));

    // Far away.
    assert!(!aabb_intersects_circle(&b, &Circle::new(Vector2::new(30.0, 30.0), 2.0)));
    // Bounding boxes overlap but the circle stays clear of the corner.
    assert!(!aabb_intersects_circle(&b, &Circle::new(Vector2::new(-1.5, -1.5), 2.0)));
}

#[test]
fn test_circle_aabb_boundary_asymmetry() {
    let b = Aabb::new(0.0, 0.0, 10.0, 10.0);
    // Tangent to the left edge: the extremity lands on the inclusive edge.
    assert!(aabb_intersects_circle(&b, &Circle::new(Vector2::new(-2.0, 5.0), 2.0)));
    // Touching only the top-left corner: the circle does not contain its outline.
    let corner_touch = Circle::new(Vector2::new(-3.0, -4.0), 5.0);
    assert!(!aabb_intersects_circle(&b, &corner_touch));
}

#[test]
fn test_circle_aabb_intersection_is_symmetric() {
    let boxes = [
        Aabb::new(0.0, 0.0, 10.0, 10.0),
        Aabb::new(-4.0, 2.0, 3.0, 1.0),
        Aabb::new(20.0, 20.0, 1.0, 1.0),
    ];
    let circles = [
        Circle::new(Vector2::new(-1.0, -1.0), 2.0),
        Circle::new(Vector2::new(5.0, 5.0), 0.5),
        Circle::new(Vector2::new(-3.0, 3.0), 1.0),
        Circle::new(Vector2::new(30.0, 0.0), 4.0),
    ];
    for b in &boxes {
        for c in &circles {
            assert_eq!(aabb_intersects_circle(b, c), circle_intersects_aabb(c, b));
        }
    }
}

#[test]
fn test_circles_distance() {
    let a = Circle::new(Vector2::ZERO, 1.0);
    let b = Circle::new(Vector2::new(0.0, 4.0), 1.0);
    assert_eq!(circles_distance(&a, &b), 2.0);
    assert_eq!(circles_distance(&a, &b), circles_distance(&b, &a));
}
