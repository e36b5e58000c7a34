//! Cursor step errors.

use std::fmt;

use crate::item::Direction;

/// Recoverable failures of a cursor step.
///
/// Both variants leave the window untouched; callers typically react by
/// disabling the navigation affordance for the offending direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    /// A step was attempted past a direction where the data source
    /// returned no further item.
    BoundaryReached { direction: Direction },
    /// The data source returned an item equal to the current one;
    /// stepping onto it would loop forever, so it is rejected like a
    /// boundary.
    SelfLoopRejected { direction: Direction },
}

impl PagingError {
    /// The direction the rejected step pointed in.
    pub fn direction(&self) -> Direction {
        match self {
            PagingError::BoundaryReached { direction } => *direction,
            PagingError::SelfLoopRejected { direction } => *direction,
        }
    }
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::BoundaryReached { direction } => {
                write!(f, "no further item in {direction} direction")
            }
            PagingError::SelfLoopRejected { direction } => {
                write!(f, "data source looped back to the current item; {direction} step rejected")
            }
        }
    }
}

impl std::error::Error for PagingError {}
