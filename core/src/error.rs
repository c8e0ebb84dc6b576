use thiserror::Error;

pub type StatusResult<T> = Result<T, StatusError>;

/// Rejections for malformed inputs to the core functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatusError {
    #[error("unknown status value: {0:?}")]
    UnknownStatus(String),
    #[error("base uptime probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("history day count {0} exceeds the supported maximum")]
    InvalidDayCount(usize),
    #[error("uptime percentage must be within [0, 100], got {0}")]
    InvalidUptime(f64),
}
