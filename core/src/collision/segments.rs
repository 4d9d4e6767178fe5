//! Line segment intersection classifier.
//!
//! Works on slope/intercept form with exact float comparisons. Segments that
//! are nearly but not exactly parallel or collinear are classified by the
//! bits they carry; no tolerance is applied.

use super::types::SegmentsIntersection;
use crate::geometry::{LineSegment, Vector2};
use tracing::trace;

/// Classifies how `first` and `other` meet.
///
/// Known limits of the slope/intercept approach, kept as they are:
/// - a vertical segment never crosses a non-vertical one (the intersection
///   abscissa comes out as NaN);
/// - crossings exactly at an endpoint abscissa are not reported, the range
///   test is strict;
/// - lines whose intercepts coincide are reported crossing at `(0, intercept)`
///   without checking that `x = 0` lies on the segments;
/// - when one collinear segment lies inside the other, the outer one holds
///   both extremes, so the reported range runs from the outer segment's end
///   to the inner segment's start instead of covering the shared part.
pub fn line_segments_intersection_info(
    first: &LineSegment,
    other: &LineSegment,
) -> SegmentsIntersection {
    if !first.enclosing_aabb().intersects(&other.enclosing_aabb()) {
        return SegmentsIntersection::None;
    }

    let slope_first = first.slope();
    let slope_other = other.slope();
    let intercept_first = LineSegment::y_intercept(first.start, slope_first);
    let intercept_other = LineSegment::y_intercept(other.start, slope_other);

    let result = if slope_first == slope_other {
        if intercept_first == intercept_other {
            SegmentsIntersection::Overlapping {
                range: overlap_range(first, other),
            }
        } else {
            SegmentsIntersection::None
        }
    } else if intercept_first == intercept_other {
        SegmentsIntersection::Crossing {
            point: Vector2::new(0.0, intercept_first),
        }
    } else {
        let common_x = (intercept_other - intercept_first) / (slope_first - slope_other);

        if common_x > first.min_x()
            && common_x < first.max_x()
            && common_x > other.min_x()
            && common_x < other.max_x()
        {
            SegmentsIntersection::Crossing {
                point: Vector2::new(common_x, slope_first * common_x + intercept_first),
            }
        } else {
            SegmentsIntersection::None
        }
    };

    if !result.is_none() {
        trace!(?first, ?other, ?result, "segments intersect");
    }
    result
}

/// One endpoint from each of two collinear, overlapping segments.
///
/// A segment contributes its start, or its end when the start sits on one of
/// the combined extremes. For staggered segments this gives the shared part.
/// A segment nested inside the other does not: the outer one contributes its
/// end, which is an extreme too.
fn overlap_range(first: &LineSegment, other: &LineSegment) -> (Vector2, Vector2) {
    let min_x = first.min_x().min(other.min_x());
    let max_x = first.max_x().max(other.max_x());
    let min_y = first.min_y().min(other.min_y());
    let max_y = first.max_y().max(other.max_y());

    let vertical = min_x == max_x;
    let horizontal = min_y == max_y;
    let on_x_extreme = |p: Vector2| p.x == min_x || p.x == max_x;
    let on_y_extreme = |p: Vector2| p.y == min_y || p.y == max_y;

    let on_extreme = |p: Vector2| {
        if vertical {
            // Only y tells the endpoints apart.
            on_y_extreme(p)
        } else if horizontal {
            on_x_extreme(p)
        } else {
            on_x_extreme(p) || on_y_extreme(p)
        }
    };

    let inner = |segment: &LineSegment| {
        if on_extreme(segment.start) {
            segment.end
        } else {
            segment.start
        }
    };

    (inner(first), inner(other))
}
