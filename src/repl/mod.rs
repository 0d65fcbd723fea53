//! CircuitPython REPL handshake and output capture
//!
//! A run has three phases:
//! - interrupt the board until the `>>>` prompt shows up ([`sync`])
//! - soft reload so `code.py` starts again ([`reload`])
//! - stream everything printed after `code.py output:` ([`capture`])
//!
//! [`runner`] sequences them.

pub mod capture;
pub mod decode;
pub mod marker;
pub mod reload;
pub mod runner;
pub mod sync;

use std::time::Duration;

pub use capture::{read_for_duration, CaptureSummary};
pub use reload::soft_reload;
pub use runner::{run, RunConfig};
pub use sync::wait_for_prompt;

/// Ctrl-C: stop whatever is running and drop to the REPL
pub const CTRL_C: u8 = 0x03;

/// Ctrl-D: soft reboot, re-running `code.py`
pub const CTRL_D: u8 = 0x04;

/// REPL idle prompt
pub const PROMPT: &str = ">>>";

/// Printed by the board right before the script's own output
pub const OUTPUT_MARKER: &str = "code.py output:";

/// How long to wait for the prompt before giving up
pub const PROMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Listening window after each Ctrl-C before sending another
pub const INTERRUPT_WINDOW: Duration = Duration::from_millis(500);

/// Sleep between polls of the input buffer
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Default capture window
pub const DEFAULT_CAPTURE_DURATION: Duration = Duration::from_secs(10);
