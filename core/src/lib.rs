pub mod error;
pub mod geometry;
pub mod collision;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{Aabb, Circle, Corner, LineSegment, Vector2};

pub fn version() -> &'static str {
    "0.1.0"
}
