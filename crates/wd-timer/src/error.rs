use thiserror::Error;

use crate::TimerId;

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("timer {0} was never registered")]
    Unregistered(TimerId),

    #[error("timer {0} needs a positive period")]
    ZeroPeriod(TimerId),

    #[error("timer {0} would fire past the last representable tick")]
    Overflow(TimerId),
}

pub type TimerResult<T> = Result<T, TimerError>;
