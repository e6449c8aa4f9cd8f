//! Space-subsystem error type.

use thiserror::Error;

use flock_core::AgentId;

/// Errors produced by `flock-space`.
#[derive(Debug, Error)]
pub enum SpaceError {
    /// A non-toroidal space received a position outside its bounds.  The
    /// offending operation leaves the stored position unchanged.
    #[error("position ({x}, {y}) lies outside the {width} x {height} space")]
    OutOfBounds { x: f64, y: f64, width: f64, height: f64 },

    #[error("agent {0} is not placed in the space")]
    Unplaced(AgentId),

    #[error("agent {0} is already placed")]
    AlreadyPlaced(AgentId),

    #[error("agents must be placed in ascending id order: expected AgentId({expected}), got {got}")]
    NonContiguousId { expected: u32, got: AgentId },
}

pub type SpaceResult<T> = Result<T, SpaceError>;
