//! Error types for the runner

use std::time::Duration;
use thiserror::Error;

/// Fatal conditions that abort a run
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Did not receive {prompt} prompt from device within {:.1}s", .timeout.as_secs_f64())]
    PromptTimeout {
        prompt: &'static str,
        timeout: Duration,
    },

    #[error("Serial I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RunnerError>;
