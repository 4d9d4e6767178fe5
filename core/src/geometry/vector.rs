use crate::error::{GeometryError, GeometryResult};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector used for positions, sizes and directions.
///
/// Equality is exact on both components. Use [`super::ApproxEq`] when a
/// tolerance is wanted.
///
/// The y axis points down (screen space): [`Vector2::UP`] is `(0, -1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from an angle in degrees and a length.
    pub fn from_polar(degrees: f64, length: f64) -> Self {
        let radians = degrees.to_radians();
        Self::new(radians.cos(), radians.sin()) * length
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length. Cheaper than [`Vector2::magnitude`] for comparisons.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        (*self - *other).magnitude()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector normalizes to itself instead of failing; collision
    /// code relies on this for coincident points.
    pub fn normalize(&self) -> Vector2 {
        if self.is_zero() {
            return Vector2::ZERO;
        }
        let length = self.magnitude();
        Vector2::new(self.x / length, self.y / length)
    }

    pub fn abs(&self) -> Vector2 {
        Vector2::new(self.x.abs(), self.y.abs())
    }

    /// Rotates by `degrees`, turning +x towards +y. With y pointing down that
    /// is clockwise on screen.
    pub fn rotate(&self, degrees: f64) -> Vector2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Division that reports a zero divisor instead of producing infinities.
    pub fn checked_div(self, divisor: f64) -> GeometryResult<Vector2> {
        if divisor == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Vector2::new(self.x / divisor, self.y / divisor))
    }

    /// In-place form of [`Vector2::checked_div`]. Leaves `self` untouched on error.
    pub fn checked_div_assign(&mut self, divisor: f64) -> GeometryResult<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, vector: Vector2) -> Vector2 {
        vector * self
    }
}

/// Panics on a zero divisor, like integer division.
/// Use [`Vector2::checked_div`] to get a [`GeometryError`] instead.
impl Div<f64> for Vector2 {
    type Output = Vector2;

    #[track_caller]
    fn div(self, divisor: f64) -> Vector2 {
        match self.checked_div(divisor) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self += -rhs;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f64> for Vector2 {
    #[track_caller]
    fn div_assign(&mut self, divisor: f64) {
        if let Err(e) = self.checked_div_assign(divisor) {
            panic!("{e}");
        }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(p: [f64; 2]) -> Self {
        Vector2::new(p[0], p[1])
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<na::Vector2<f64>> for Vector2 {
    fn from(v: na::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for na::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}

impl From<na::Point2<f64>> for Vector2 {
    fn from(p: na::Point2<f64>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2> for na::Point2<f64> {
    fn from(v: Vector2) -> Self {
        na::Point2::new(v.x, v.y)
    }
}
