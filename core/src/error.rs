use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryError {
    #[error("Invalid argument: cannot divide vector by 0")]
    DivisionByZero,
    /// Raised when converting a raw index that is not one of the four corners.
    #[error("Invalid corner index: {0}")]
    InvalidCorner(usize),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
