use thiserror::Error;

/// Errors produced while setting up or running a spot calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpotError {
    /// The wind profile has no samples
    #[error("at least one wind sample is required")]
    EmptyProfile,

    /// The jump-run line never crosses the exit circle
    #[error("jump run on track {track:.4} rad, offset {transverse_offset:.1} m misses the exit circle")]
    GeometryError { track: f64, transverse_offset: f64 },

    /// A wind sample, override or configuration value is out of range
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type SpotResult<T> = Result<T, SpotError>;
