use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::{Axis, PositionError};

/// Easy handling of X-Y-Z coordinates.
///
/// The same type is used for tile positions and for voxel positions; see
/// [`Position::to_fine_unit`] and [`Position::to_coarse_unit`]. No bounds are
/// enforced here, map bounds are the caller's business.
///
/// Arithmetic is component-wise and overflows the way `i32` does. Dividing by
/// a zero component with `/` or `/=` panics; use [`Position::checked_div`] or
/// [`Position::checked_div_scalar`] when the divisor comes from data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A [`Position`] used as an offset or direction.
pub type Vector3i = Position;

impl Position {
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Voxels per tile along x and y.
    pub const FINE_PER_COARSE_XY: i32 = 16;
    /// Voxels per tile along z.
    pub const FINE_PER_COARSE_Z: i32 = 24;

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts a tile position to a voxel position.
    pub fn to_fine_unit(self) -> Self {
        Self {
            x: self.x * Self::FINE_PER_COARSE_XY,
            y: self.y * Self::FINE_PER_COARSE_XY,
            z: self.z * Self::FINE_PER_COARSE_Z,
        }
    }

    /// Converts a voxel position to the tile containing it.
    ///
    /// Division truncates toward zero, so this is only the inverse of
    /// [`Self::to_fine_unit`] for multiples of 16/16/24.
    pub fn to_coarse_unit(self) -> Self {
        Self {
            x: self.x / Self::FINE_PER_COARSE_XY,
            y: self.y / Self::FINE_PER_COARSE_XY,
            z: self.z / Self::FINE_PER_COARSE_Z,
        }
    }

    /// Component-wise division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, PositionError> {
        Ok(Self {
            x: checked_div_axis(self.x, rhs.x, Axis::X)?,
            y: checked_div_axis(self.y, rhs.y, Axis::Y)?,
            z: checked_div_axis(self.z, rhs.z, Axis::Z)?,
        })
    }

    /// Scalar division that reports a zero divisor instead of panicking.
    pub fn checked_div_scalar(self, rhs: i32) -> Result<Self, PositionError> {
        self.checked_div(Self::new(rhs, rhs, rhs))
    }
}

fn checked_div_axis(lhs: i32, rhs: i32, axis: Axis) -> Result<i32, PositionError> {
    if rhs == 0 {
        return Err(PositionError::DivisionByZero { axis });
    }
    lhs.checked_div(rhs).ok_or(PositionError::Overflow { axis })
}

fn div_axis(lhs: i32, rhs: i32, axis: Axis) -> i32 {
    if rhs == 0 {
        panic!("attempt to divide position by zero on the {axis} axis");
    }
    lhs / rhs
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Position {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl MulAssign for Position {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<i32> for Position {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<i32> for Position {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

impl Div for Position {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if any component of `rhs` is zero.
    fn div(self, rhs: Self) -> Self {
        Self::new(
            div_axis(self.x, rhs.x, Axis::X),
            div_axis(self.y, rhs.y, Axis::Y),
            div_axis(self.z, rhs.z, Axis::Z),
        )
    }
}

impl DivAssign for Position {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Div<i32> for Position {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: i32) -> Self {
        self / Self::new(rhs, rhs, rhs)
    }
}

impl DivAssign<i32> for Position {
    fn div_assign(&mut self, rhs: i32) {
        *self = *self / rhs;
    }
}

impl From<[i32; 3]> for Position {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Position> for [i32; 3] {
    fn from(value: Position) -> Self {
        value.encode()
    }
}

impl TryFrom<&[i32]> for Position {
    type Error = PositionError;

    fn try_from(value: &[i32]) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(Position::default(), Position::new(0, 0, 0));
        assert_eq!(Position::default(), Position::ZERO);
    }

    #[test]
    fn arithmetic() {
        let a = Position::new(1, 2, 3);
        let b = Position::new(4, -5, 6);

        assert_eq!(a + b, Position::new(5, -3, 9));
        assert_eq!(a - b, Position::new(-3, 7, -3));
        assert_eq!(a * b, Position::new(4, -10, 18));
        assert_eq!(a * 3, Position::new(3, 6, 9));
        assert_eq!(b / a, Position::new(4, -2, 2));
        assert_eq!(b / 2, Position::new(2, -2, 3));
    }

    #[test]
    fn accumulating_operators() {
        let mut pos = Position::new(1, 2, 3);
        pos += Position::new(1, 1, 1);
        assert_eq!(pos, Position::new(2, 3, 4));
        pos -= Position::new(2, 0, 1);
        assert_eq!(pos, Position::new(0, 3, 3));
        pos *= Position::new(5, 2, -1);
        assert_eq!(pos, Position::new(0, 6, -3));
        pos *= 2;
        assert_eq!(pos, Position::new(0, 12, -6));
        pos /= Position::new(1, 5, 4);
        assert_eq!(pos, Position::new(0, 2, -1));
        pos /= 2;
        assert_eq!(pos, Position::new(0, 1, 0));
    }

    #[test]
    fn equality() {
        assert_eq!(Position::new(1, 2, 3), Position::new(1, 2, 3));
        assert_ne!(Position::new(1, 2, 3), Position::new(1, 2, 4));
        assert_ne!(Position::new(0, 2, 3), Position::new(1, 2, 3));
    }

    #[test]
    fn unit_conversion() {
        assert_eq!(Position::new(1, 2, 3).to_fine_unit(), Position::new(16, 32, 72));
        assert_eq!(Position::new(16, 32, 72).to_coarse_unit(), Position::new(1, 2, 3));
        assert_eq!(Position::new(17, 2, 3).to_coarse_unit(), Position::new(1, 0, 0));
        // Truncates toward zero, not down.
        assert_eq!(Position::new(-17, -15, -25).to_coarse_unit(), Position::new(-1, 0, -1));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(5, -3, 10).to_string(), "(5,-3,10)");
        assert_eq!(Position::ZERO.to_string(), "(0,0,0)");
    }

    #[test]
    fn checked_div() {
        let pos = Position::new(10, 20, 30);
        assert_eq!(pos.checked_div(Position::new(2, 4, 5)), Ok(Position::new(5, 5, 6)));
        assert_eq!(pos.checked_div_scalar(10), Ok(Position::new(1, 2, 3)));
        assert_eq!(
            pos.checked_div(Position::new(1, 0, 0)),
            Err(PositionError::DivisionByZero { axis: Axis::Y })
        );
        assert_eq!(
            pos.checked_div_scalar(0),
            Err(PositionError::DivisionByZero { axis: Axis::X })
        );
        assert_eq!(
            Position::new(1, 1, i32::MIN).checked_div_scalar(-1),
            Err(PositionError::Overflow { axis: Axis::Z })
        );
    }

    #[test]
    #[should_panic(expected = "on the z axis")]
    fn div_by_zero_component_panics() {
        let _ = Position::new(1, 2, 3) / Position::new(1, 1, 0);
    }

    #[test]
    #[should_panic(expected = "divide position by zero")]
    fn div_by_zero_scalar_panics() {
        let mut pos = Position::new(1, 2, 3);
        pos /= 0;
    }

    #[test]
    fn conversions() {
        assert_eq!(Position::from([1, 2, 3]), Position::new(1, 2, 3));
        assert_eq!(Position::from((4, 5, 6)), Position::new(4, 5, 6));
        assert_eq!(<[i32; 3]>::from(Position::new(7, 8, 9)), [7, 8, 9]);
        assert_eq!(Position::try_from(&[1, 2, 3][..]), Ok(Position::new(1, 2, 3)));
        assert!(Position::try_from(&[1, 2][..]).is_err());
    }
}
