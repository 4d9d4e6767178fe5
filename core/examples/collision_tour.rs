use geom2d_core::collision::{
    aabb_collision_info, circle_aabb_collision_info, circles_collision_info, ensure_circle_containment,
    CollisionInfo, SegmentsIntersection,
};
use geom2d_core::{Aabb, Circle, LineSegment, Vector2};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let wall = Aabb::new(0.0, 0.0, 10.0, 10.0);
    let crate_box = Aabb::new(-1.0, 1.0, 3.0, 3.0);
    let hit = aabb_collision_info(&wall, &crate_box);
    info!(normal = %hit.normal, depth = hit.depth(), "box vs box");

    let ball = Circle::new(Vector2::new(5.0, -1.0), 2.0);
    let hit = circle_aabb_collision_info(&wall, &ball);
    info!(normal = %hit.normal, depth = hit.depth, "ball vs wall");

    let other_ball = Circle::new(Vector2::new(6.0, -2.0), 1.5);
    let hit = circles_collision_info(&ball, &other_ball);
    info!(collides = hit.is_collision(), normal = %hit.normal, depth = hit.depth, "ball vs ball");

    let a = LineSegment::new(Vector2::new(-7.0, 4.0), Vector2::new(-1.0, 1.0));
    let b = LineSegment::new(Vector2::new(-1.0, 4.0), Vector2::new(-4.0, 1.0));
    match a.intersection(&b) {
        SegmentsIntersection::None => info!("segments apart"),
        SegmentsIntersection::Crossing { point } => info!(%point, "segments cross"),
        SegmentsIntersection::Overlapping { range } => info!(start = %range.0, end = %range.1, "segments overlap"),
    }

    let arena = Aabb::new(0.0, 0.0, 100.0, 50.0);
    let mut stray = Circle::new(Vector2::new(-4.0, 49.0), 2.0);
    let moved = ensure_circle_containment(&mut stray, &arena);
    info!(%moved, pos = %stray.pos, "stray ball clamped into the arena");
}
