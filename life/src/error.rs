//! Errors reported while setting up a simulation

use thiserror::Error;

use crate::RuleError;

/// Something about the requested setup can't be built, reported before any generation runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("unknown advance strategy '{0}', expected 'recursive', 'array' or 'memoized'")]
    UnknownStrategy(String),

    #[error("unknown boundary '{0}', expected 'dead' or 'wrap'")]
    UnknownBoundary(String),

    #[error("window must be at least 1x1, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },

    #[error("can't place {count} cells in a {width}x{height} window")]
    TooManyCells { count: u64, width: u32, height: u32 },

    #[error("invalid point list '{0}', expected 'x,y' pairs separated by ';'")]
    InvalidPoints(String),

    #[error(transparent)]
    InvalidRule(#[from] RuleError),
}
