//! Error types
//!
//! Gameplay never fails: out-of-range terrain queries and blocked moves are
//! silent. Errors only come from malformed authoring data and config files.

/// Invalid use of a road spine
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("curve parameter {t} outside [0, {segments})")]
    ParameterOutOfRange { t: f32, segments: usize },

    #[error("control point {index} out of range ({count} points)")]
    ControlPointOutOfRange { index: usize, count: usize },

    #[error("spine of {len} values is not a start point plus whole segments")]
    MalformedSpine { len: usize },
}

/// Failure to turn a level description into a world
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("terrain must be at least 1x1, got {width}x{depth}")]
    InvalidDimensions { width: usize, depth: usize },

    #[error("expected {expected} altitudes for the terrain grid, got {actual}")]
    AltitudeCount { expected: usize, actual: usize },

    #[error("road {index}: {source}")]
    Road {
        index: usize,
        #[source]
        source: CurveError,
    },
}

/// Failure to read or write a settings/tuning file
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
