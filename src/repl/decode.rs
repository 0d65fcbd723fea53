//! Incremental lossy UTF-8 decoding
//!
//! Reads from the board can end in the middle of a multi-byte character.
//! The decoder holds such a tail back until the next chunk arrives and
//! replaces genuinely invalid sequences with U+FFFD.

use std::str;

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes`, prefixed by any tail carried over from the last call
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let input = std::mem::take(&mut self.pending);

        let mut text = String::with_capacity(input.len());
        let mut rest = input.as_slice();
        loop {
            match str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    // valid_up_to() guarantees this prefix is well formed
                    text.push_str(str::from_utf8(valid).unwrap_or_default());

                    match e.error_len() {
                        Some(len) => {
                            text.push(REPLACEMENT);
                            rest = &after[len..];
                        }
                        None => {
                            // Truncated sequence at the end, wait for more bytes
                            self.pending.extend_from_slice(after);
                            break;
                        }
                    }
                }
            }
        }
        text
    }

    /// Flush a held-back tail that will never be completed
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        self.pending.clear();
        REPLACEMENT.to_string()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
