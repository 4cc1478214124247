use std::fmt;

/// One of the three axes of a [`Position`](crate::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Failed to decode position. Expected a sequence of 3 integers, got {len}.")]
    Decode { len: usize },
    #[error("Division by zero on the {axis} axis.")]
    DivisionByZero { axis: Axis },
    #[error("Division overflowed on the {axis} axis.")]
    Overflow { axis: Axis },
}
