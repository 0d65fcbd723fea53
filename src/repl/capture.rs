//! Script output capture
//!
//! After a soft reload the board prints its boot banner, then
//! `code.py output:`, then whatever the script writes. Everything before the
//! marker is dropped and everything after it is forwarded unchanged as soon
//! as it is read.

use super::decode::Utf8Decoder;
use super::marker::MarkerScanner;
use super::{OUTPUT_MARKER, POLL_INTERVAL};
use crate::clock::Clock;
use crate::error::Result;
use crate::serial::Transport;
use log::{debug, info};
use std::io::Write;
use std::time::Duration;

/// What a capture window observed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Whether the output marker was seen
    pub marker_seen: bool,
    /// Bytes of decoded text written to the output stream
    pub bytes_forwarded: usize,
}

/// Drops text until the output marker, then passes everything through
struct OutputGate {
    scanner: MarkerScanner,
    started: bool,
}

impl OutputGate {
    fn new() -> Self {
        Self {
            scanner: MarkerScanner::new(OUTPUT_MARKER),
            started: false,
        }
    }

    /// Text from this chunk that belongs to the script's output
    fn admit(&mut self, text: String) -> Option<String> {
        if self.started {
            return Some(text);
        }
        let rest = self.scanner.scan(&text)?;
        self.started = true;
        info!("Found {:?}, streaming script output", self.scanner.literal());
        Some(rest)
    }
}

/// Stream the script's output to `out` for `duration`.
///
/// The window is measured from the call. Bytes that arrive in the same read
/// as the marker are forwarded too. The marker is only looked for once, so a
/// second occurrence is passed through as ordinary output. Never seeing the
/// marker is not an error: nothing is written in that case.
pub fn read_for_duration<T, C, W>(
    transport: &mut T,
    clock: &C,
    out: &mut W,
    duration: Duration,
) -> Result<CaptureSummary>
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
    W: Write + ?Sized,
{
    let deadline = clock.now() + duration;
    let mut decoder = Utf8Decoder::new();
    let mut gate = OutputGate::new();
    let mut summary = CaptureSummary::default();

    while clock.now() < deadline {
        let data = transport.read_available()?;
        if data.is_empty() {
            clock.sleep(POLL_INTERVAL);
            continue;
        }

        debug!("Read {} bytes", data.len());
        let text = decoder.decode(&data);
        if text.is_empty() {
            continue;
        }
        if let Some(output) = gate.admit(text) {
            summary.bytes_forwarded += forward(out, &output)?;
        }
    }

    if gate.started && decoder.has_pending() {
        let tail = decoder.finish();
        summary.bytes_forwarded += forward(out, &tail)?;
    }
    summary.marker_seen = gate.started;

    Ok(summary)
}

fn forward<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<usize> {
    if text.is_empty() {
        return Ok(0);
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(text.len())
}
