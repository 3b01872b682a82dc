use std::collections::TryReserveError;
use std::fmt;

use heatmap_core::Point;

/// Errors that can occur while burning a heat map.
///
/// Only [`Alloc`](Self::Alloc) can happen once the burn has started writing;
/// the other variants are reported up front and leave the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurnError {
    /// Memory for the frontier queue or the visited mask could not be
    /// obtained. The grid contents are not meaningful afterwards.
    Alloc(TryReserveError),
    /// Width or height is not positive.
    InvalidSize { width: i32, height: i32 },
    /// The cell buffer does not hold exactly `width * height` values.
    BufferLength { expected: usize, actual: usize },
    /// A goal lies outside the grid.
    GoalOutOfBounds(Point),
    /// The goal x and y lists have different lengths.
    GoalListMismatch { xs: usize, ys: usize },
    /// The configured obstacle marker is not negative.
    InvalidObstacle(i32),
    /// The configured cost cutoff is negative.
    InvalidMaxCost(i32),
}

impl fmt::Display for BurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(e) => write!(f, "heat map allocation failed: {e}"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid heat map size {width}x{height}")
            }
            Self::BufferLength { expected, actual } => {
                write!(f, "heat map buffer holds {actual} cells, expected {expected}")
            }
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the grid"),
            Self::GoalListMismatch { xs, ys } => {
                write!(f, "goal lists differ in length: {xs} x values, {ys} y values")
            }
            Self::InvalidObstacle(v) => write!(f, "obstacle marker {v} is not negative"),
            Self::InvalidMaxCost(v) => write!(f, "max cost {v} is negative"),
        }
    }
}

impl std::error::Error for BurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for BurnError {
    fn from(e: TryReserveError) -> Self {
        Self::Alloc(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn reserve_failure() -> TryReserveError {
        let mut v: Vec<u64> = Vec::new();
        v.try_reserve_exact(usize::MAX).unwrap_err()
    }

    #[test]
    fn alloc_error_exposes_its_source() {
        let err = BurnError::from(reserve_failure());
        assert!(matches!(err, BurnError::Alloc(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("heat map allocation failed"));
    }

    #[test]
    fn validation_errors_have_no_source() {
        let err = BurnError::GoalOutOfBounds(Point::new(7, -1));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "goal (7, -1) is outside the grid");

        let err = BurnError::InvalidSize { width: 0, height: 3 };
        assert_eq!(err.to_string(), "invalid heat map size 0x3");
    }
}
