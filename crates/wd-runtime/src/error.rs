use thiserror::Error;
use wd_behavior::BehaviorError;
use wd_core::WdError;
use wd_timer::TimerError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Core(#[from] WdError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("timer error: {0}")]
    Timer(#[from] TimerError),

    #[error("hazard script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
