use crate::geometry::Vector2;
use serde::{Deserialize, Serialize};

/// Common view over the collision results.
///
/// A zero normal means "no collision". Check [`CollisionInfo::is_collision`]
/// rather than the depth, which is also zero in that case.
///
/// Concentric circles are the exception: they overlap but have no direction to
/// separate along, so `is_collision()` is false while `depth()` is positive.
pub trait CollisionInfo {
    /// Unit direction in which to push the shape being resolved, or zero.
    fn normal(&self) -> Vector2;
    /// Penetration depth along [`CollisionInfo::normal`]; never negative.
    fn depth(&self) -> f64;

    fn is_collision(&self) -> bool {
        !self.normal().is_zero()
    }
}

/// Result of [`super::aabb_collision_info`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AabbCollision {
    /// One of the four axis directions, or zero.
    pub normal: Vector2,
    /// Absolute per-axis overlap between the two nearest opposing corners.
    pub delta: Vector2,
}

impl AabbCollision {
    pub const NONE: AabbCollision = AabbCollision {
        normal: Vector2::ZERO,
        delta: Vector2::ZERO,
    };

    /// The component of `delta` along `normal`.
    pub fn penetration_depth(&self) -> f64 {
        self.normal.dot(&self.delta).abs()
    }
}

impl CollisionInfo for AabbCollision {
    fn normal(&self) -> Vector2 {
        self.normal
    }

    fn depth(&self) -> f64 {
        self.penetration_depth()
    }
}

/// A normal and a penetration depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Penetration {
    pub normal: Vector2,
    pub depth: f64,
}

impl Penetration {
    pub const NONE: Penetration = Penetration {
        normal: Vector2::ZERO,
        depth: 0.0,
    };
}

impl CollisionInfo for Penetration {
    fn normal(&self) -> Vector2 {
        self.normal
    }

    fn depth(&self) -> f64 {
        self.depth
    }
}

/// Result of [`super::circles_collision_info`].
pub type CirclesCollision = Penetration;

/// Result of [`super::circle_aabb_collision_info`]. The normal is the
/// direction in which the circle must move.
pub type CircleAabbCollision = Penetration;

/// Discriminant of [`SegmentsIntersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntersectionType {
    None,
    Crossing,
    Overlapping,
}

/// How two line segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentsIntersection {
    /// The segments do not touch.
    None,
    /// The segments cross at a single point.
    Crossing { point: Vector2 },
    /// The segments are collinear; `range` holds the ends of the shared part.
    Overlapping { range: (Vector2, Vector2) },
}

impl SegmentsIntersection {
    pub fn kind(&self) -> IntersectionType {
        match self {
            SegmentsIntersection::None => IntersectionType::None,
            SegmentsIntersection::Crossing { .. } => IntersectionType::Crossing,
            SegmentsIntersection::Overlapping { .. } => IntersectionType::Overlapping,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SegmentsIntersection::None)
    }

    pub fn as_point(&self) -> Option<Vector2> {
        match self {
            SegmentsIntersection::Crossing { point } => Some(*point),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<(Vector2, Vector2)> {
        match self {
            SegmentsIntersection::Overlapping { range } => Some(*range),
            _ => None,
        }
    }

    /// The crossing point.
    ///
    /// # Panics
    /// If the intersection is not [`SegmentsIntersection::Crossing`].
    #[track_caller]
    pub fn point(&self) -> Vector2 {
        match self.as_point() {
            Some(point) => point,
            None => panic!("no crossing point on a {:?} intersection", self.kind()),
        }
    }

    /// The overlapping range.
    ///
    /// # Panics
    /// If the intersection is not [`SegmentsIntersection::Overlapping`].
    #[track_caller]
    pub fn range(&self) -> (Vector2, Vector2) {
        match self.as_range() {
            Some(range) => range,
            None => panic!("no overlapping range on a {:?} intersection", self.kind()),
        }
    }
}
