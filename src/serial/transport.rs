//! Byte-stream abstraction over the device connection
//!
//! The REPL routines only need to poll for pending input, drain it, and push
//! single control bytes, so they are written against [`Transport`] rather
//! than a concrete serial port.

use std::io::{self, ErrorKind};

/// Minimal non-blocking byte stream to the device
pub trait Transport {
    /// Number of bytes that can be read without waiting
    fn bytes_available(&mut self) -> io::Result<usize>;

    /// Read into `buffer`, returning the number of bytes copied
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize>;

    /// Write every byte of `data`
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush pending output to the device
    fn flush(&mut self) -> io::Result<()>;

    /// Drain whatever is currently buffered. Returns an empty vector if
    /// nothing is pending.
    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        let pending = self.bytes_available()?;
        if pending == 0 {
            return Ok(Vec::new());
        }

        let mut buffer = vec![0u8; pending];
        let mut filled = 0;
        while filled < pending {
            match self.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::WouldBlock => {
                    break
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        buffer.truncate(filled);
        Ok(buffer)
    }

    /// Write a single control byte and flush it out immediately
    fn send_control(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])?;
        self.flush()
    }
}
