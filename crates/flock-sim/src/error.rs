use thiserror::Error;

use flock_behavior::BehaviorError;
use flock_core::CoreError;
use flock_space::SpaceError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("space error: {0}")]
    Space(#[from] SpaceError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
