//! Driver error types.

use std::path::PathBuf;

/// Errors raised while configuring the exercise driver.
#[derive(Debug, thiserror::Error)]
pub enum ExerciseError {
    /// An exercise number outside `1..=3`.
    #[error("unknown exercise: {0} (expected 1, 2 or 3)")]
    UnknownExercise(u8),

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::ExerciseConfig`].
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] serde_json::Error),
}
