use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// A corner of an [`super::Aabb`].
///
/// The declaration order is the enumeration order used everywhere corners are
/// scanned, so it decides tie-breaks in the collision routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// TopLeft <-> BottomRight, TopRight <-> BottomLeft
    pub fn diagonally_opposed(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// TopLeft <-> BottomLeft, TopRight <-> BottomRight
    pub fn vertically_opposed(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    /// TopLeft <-> TopRight, BottomLeft <-> BottomRight
    pub fn horizontally_opposed(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }
}

impl TryFrom<usize> for Corner {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Corner::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidCorner(index))
    }
}
