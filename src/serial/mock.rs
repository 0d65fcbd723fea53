//! Scripted in-memory device for tests

use super::Transport;
use std::collections::VecDeque;
use std::io::{self, ErrorKind};

type Responder = Box<dyn FnMut(&[u8]) -> Vec<Vec<u8>>>;

/// Simulated device connection
///
/// Inbound data is a queue of chunks. Each poll exposes at most the front
/// chunk, so a chunk boundary is a read boundary. An empty chunk models a
/// poll where nothing has arrived yet. Writes are recorded and handed to an
/// optional responder whose returned chunks are queued as the device's reply.
pub struct MockTransport {
    inbound: VecDeque<Vec<u8>>,
    written: Vec<u8>,
    flushes: usize,
    responder: Option<Responder>,
    read_error: Option<ErrorKind>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inbound: VecDeque::new(),
            written: Vec::new(),
            flushes: 0,
            responder: None,
            read_error: None,
        }
    }

    /// Build a mock that replays `chunks` regardless of what is written
    pub fn with_chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let mut mock = Self::new();
        for chunk in chunks {
            mock.push_chunk(chunk.as_ref());
        }
        mock
    }

    /// Reply to writes with the chunks returned by `responder`
    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: FnMut(&[u8]) -> Vec<Vec<u8>> + 'static,
    {
        self.responder = Some(Box::new(responder));
        self
    }

    pub fn push_chunk(&mut self, chunk: &[u8]) {
        self.inbound.push_back(chunk.to_vec());
    }

    /// Make every subsequent poll fail with `kind`
    pub fn fail_reads_with(&mut self, kind: ErrorKind) {
        self.read_error = Some(kind);
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// How many times `byte` was written
    pub fn count_written(&self, byte: u8) -> usize {
        self.written.iter().filter(|&&b| b == byte).count()
    }
}

impl Transport for MockTransport {
    fn bytes_available(&mut self) -> io::Result<usize> {
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "simulated read failure"));
        }
        match self.inbound.front() {
            Some(chunk) if chunk.is_empty() => {
                self.inbound.pop_front();
                Ok(0)
            }
            Some(chunk) => Ok(chunk.len()),
            None => Ok(0),
        }
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        if let Some(kind) = self.read_error {
            return Err(io::Error::new(kind, "simulated read failure"));
        }
        let Some(chunk) = self.inbound.front_mut() else {
            return Err(io::Error::new(ErrorKind::TimedOut, "no data"));
        };

        let n = buffer.len().min(chunk.len());
        buffer[..n].copy_from_slice(&chunk[..n]);
        chunk.drain(..n);
        if chunk.is_empty() {
            self.inbound.pop_front();
        }
        Ok(n)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.written.extend_from_slice(data);
        if let Some(responder) = self.responder.as_mut() {
            for chunk in responder(data) {
                self.inbound.push_back(chunk);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
