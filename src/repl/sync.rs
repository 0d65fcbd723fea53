//! Prompt synchronization
//!
//! The board may be busy running `code.py` and can need several Ctrl-C
//! presses before it settles in the REPL, so the interrupt is repeated once
//! per [`INTERRUPT_WINDOW`] until `>>>` is seen or the timeout runs out.

use super::decode::Utf8Decoder;
use super::marker::MarkerScanner;
use super::{CTRL_C, INTERRUPT_WINDOW, POLL_INTERVAL, PROMPT};
use crate::clock::Clock;
use crate::error::Result;
use crate::serial::Transport;
use log::{debug, info};
use std::time::Duration;

/// Interrupt the board until the REPL prompt appears.
///
/// Returns `Ok(true)` as soon as the prompt is seen and `Ok(false)` once
/// `timeout` elapses without it. Text accumulates across interrupt windows,
/// so a prompt split between reads is still detected.
pub fn wait_for_prompt<T, C>(transport: &mut T, clock: &C, timeout: Duration) -> Result<bool>
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
{
    let deadline = clock.now() + timeout;
    let mut decoder = Utf8Decoder::new();
    let mut scanner = MarkerScanner::new(PROMPT);
    let mut interrupts = 0usize;

    while clock.now() < deadline {
        transport.send_control(CTRL_C)?;
        interrupts += 1;
        debug!("Sent Ctrl-C #{}", interrupts);

        let window_start = clock.now();
        while clock.now() - window_start < INTERRUPT_WINDOW {
            let data = transport.read_available()?;
            if !data.is_empty() {
                debug!("Read {} bytes while waiting for prompt", data.len());
                let text = decoder.decode(&data);
                if scanner.scan(&text).is_some() {
                    info!("REPL prompt reached after {} interrupt(s)", interrupts);
                    return Ok(true);
                }
            }
            clock.sleep(POLL_INTERVAL);
        }
    }

    debug!("No prompt after {} interrupt(s)", interrupts);
    Ok(false)
}
