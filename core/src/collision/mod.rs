//! Pairwise collision queries.
//!
//! Free functions taking shapes by reference. Every query is a pure
//! computation: the shapes' own predicates reject non-overlapping pairs
//! before any normal or depth is computed.

pub mod types;
pub use types::*;

pub mod predicates;
pub use predicates::*;

pub mod info;
pub use info::{aabb_collision_info, circle_aabb_collision_info, circles_collision_info};

pub mod segments;
pub use segments::line_segments_intersection_info;

pub mod containment;
pub use containment::{ensure_aabb_containment, ensure_circle_containment};

#[cfg(test)]
mod tests_predicates;
#[cfg(test)]
mod tests_circles;
