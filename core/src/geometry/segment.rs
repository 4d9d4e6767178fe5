use super::{Aabb, Vector2};
use crate::collision::{self, SegmentsIntersection};
use serde::{Deserialize, Serialize};

/// A line segment between two points.
///
/// Segments are undirected: equality ignores which endpoint is the start.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vector2,
    pub end: Vector2,
}

impl LineSegment {
    pub const fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// `dy / dx`, or `+inf` for a vertical segment (never `-inf`).
    pub fn slope(&self) -> f64 {
        let size = self.start - self.end;
        if size.x != 0.0 {
            size.y / size.x
        } else {
            f64::INFINITY
        }
    }

    /// Y-intercept of the line through `point` with the given `slope`.
    ///
    /// Vertical lines have no intercept; for them the infinite slope itself is
    /// returned so two vertical lines compare equal here. Callers that rely on
    /// this must already know the lines share an x coordinate.
    pub fn y_intercept(point: Vector2, slope: f64) -> f64 {
        if slope != f64::INFINITY {
            point.y - slope * point.x
        } else {
            slope
        }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).magnitude()
    }

    pub fn length_squared(&self) -> f64 {
        (self.end - self.start).magnitude_squared()
    }

    /// Width and height of the segment's bounding box.
    pub fn absolute_size(&self) -> Vector2 {
        (self.end - self.start).abs()
    }

    /// Unit direction from `start` to `end`; zero for a degenerate segment.
    pub fn dir_from_start(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    pub fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    pub fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    pub fn enclosing_aabb(&self) -> Aabb {
        Aabb::from_pos_size(Vector2::new(self.min_x(), self.min_y()), self.absolute_size())
    }

    /// Classifies how this segment meets `other`.
    /// See [`collision::line_segments_intersection_info`].
    pub fn intersection(&self, other: &LineSegment) -> SegmentsIntersection {
        collision::line_segments_intersection_info(self, other)
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}
