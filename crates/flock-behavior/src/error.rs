use thiserror::Error;

use flock_space::SpaceError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("space error during activation: {0}")]
    Space(#[from] SpaceError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
