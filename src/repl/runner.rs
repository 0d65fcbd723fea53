//! Run orchestration: synchronize, reload, capture

use super::{
    read_for_duration, soft_reload, wait_for_prompt, CaptureSummary, DEFAULT_CAPTURE_DURATION,
    PROMPT, PROMPT_TIMEOUT,
};
use crate::clock::Clock;
use crate::error::{Result, RunnerError};
use crate::serial::Transport;
use log::{debug, warn};
use std::io::Write;
use std::time::Duration;

/// Timing for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Budget for reaching the `>>>` prompt
    pub prompt_timeout: Duration,
    /// How long to stream output after the reload
    pub capture_duration: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prompt_timeout: PROMPT_TIMEOUT,
            capture_duration: DEFAULT_CAPTURE_DURATION,
        }
    }
}

impl RunConfig {
    /// Set the capture window
    pub fn with_capture_duration(mut self, duration: Duration) -> Self {
        self.capture_duration = duration;
        self
    }
}

/// Perform one attempt: reach the prompt, soft reload, stream the output.
///
/// Failing to reach the prompt aborts before anything is sent beyond
/// Ctrl-C. There are no retries.
pub fn run<T, C, W>(
    transport: &mut T,
    clock: &C,
    out: &mut W,
    config: &RunConfig,
) -> Result<CaptureSummary>
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    if !wait_for_prompt(transport, clock, config.prompt_timeout)? {
        return Err(RunnerError::PromptTimeout {
            prompt: PROMPT,
            timeout: config.prompt_timeout,
        });
    }

    soft_reload(transport)?;

    let summary = read_for_duration(transport, clock, out, config.capture_duration)?;
    if summary.marker_seen {
        debug!("Forwarded {} bytes of script output", summary.bytes_forwarded);
    } else {
        warn!(
            "No code.py output marker within {:.1}s; nothing was captured",
            config.capture_duration.as_secs_f64()
        );
    }
    Ok(summary)
}
