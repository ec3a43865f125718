use thiserror::Error;

/// A curve configuration value that cannot be sampled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: spline order must be at least 1, got {0}")]
    InvalidOrder(usize),

    #[error("invalid configuration: sample count must be at least 2, got {0}")]
    InvalidSampleCount(usize),
}
