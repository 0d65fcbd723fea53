//! Serial communication with the board
//!
//! This module provides:
//! - The [`Transport`] trait the REPL routines are written against
//! - A `serialport`-backed connection (requires the `serial` feature)

#[cfg(feature = "serial")]
pub mod port;
pub mod transport;

#[cfg(test)]
mod mock;

#[cfg(test)]
pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use port::{PortConfig, SerialConnection};
pub use transport::Transport;

/// Baud rate of the CircuitPython REPL console
pub const REPL_BAUD_RATE: u32 = 115200;

/// Default console device for the current platform
#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM3";
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyACM0";
