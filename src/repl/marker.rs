//! Substring detection over a stream of decoded text

/// Looks for a literal in text that arrives in arbitrary pieces
///
/// Text is accumulated until the literal shows up, so a match split across
/// chunks is still found. Only the last `literal.len() - 1` bytes are kept
/// after a miss since no match can begin before them.
#[derive(Debug)]
pub struct MarkerScanner {
    literal: &'static str,
    buffer: String,
}

impl MarkerScanner {
    pub fn new(literal: &'static str) -> Self {
        Self {
            literal,
            buffer: String::new(),
        }
    }

    pub fn literal(&self) -> &'static str {
        self.literal
    }

    /// Append `text` and search for the literal.
    ///
    /// Returns `Some` with everything after the end of the first match
    /// (possibly empty) and resets the scanner, or `None` if there is no
    /// match yet.
    pub fn scan(&mut self, text: &str) -> Option<String> {
        self.buffer.push_str(text);

        match self.buffer.find(self.literal) {
            Some(index) => {
                let rest = self.buffer.split_off(index + self.literal.len());
                self.buffer.clear();
                Some(rest)
            }
            None => {
                self.discard_unmatchable();
                None
            }
        }
    }

    fn discard_unmatchable(&mut self) {
        let keep = self.literal.len().saturating_sub(1);
        if self.buffer.len() <= keep {
            return;
        }
        let mut cut = self.buffer.len() - keep;
        while !self.buffer.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buffer.drain(..cut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_in_single_chunk() {
        let mut scanner = MarkerScanner::new("code.py output:");
        assert_eq!(
            scanner.scan("soft reboot\r\ncode.py output:\r\nhello"),
            Some("\r\nhello".to_string())
        );
    }

    #[test]
    fn test_match_split_across_chunks() {
        let mut scanner = MarkerScanner::new(">>>");
        assert_eq!(scanner.scan("\r\n>"), None);
        assert_eq!(scanner.scan(">"), None);
        assert_eq!(scanner.scan("> "), Some(" ".to_string()));
    }

    #[test]
    fn test_match_at_end_yields_empty_rest() {
        let mut scanner = MarkerScanner::new(">>>");
        assert_eq!(scanner.scan("Adafruit CircuitPython\r\n>>>"), Some(String::new()));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut scanner = MarkerScanner::new("code.py output:");
        assert_eq!(
            scanner.scan("code.py output:A code.py output:B"),
            Some("A code.py output:B".to_string())
        );
    }

    #[test]
    fn test_case_sensitive() {
        let mut scanner = MarkerScanner::new("code.py output:");
        assert_eq!(scanner.scan("CODE.PY OUTPUT:x"), None);
    }

    #[test]
    fn test_long_noise_keeps_buffer_bounded() {
        let mut scanner = MarkerScanner::new("code.py output:");
        for _ in 0..1000 {
            assert_eq!(scanner.scan("auto-reload is on. "), None);
        }
        assert!(scanner.buffer.len() < scanner.literal().len());
        assert_eq!(scanner.scan("code.py output:ok"), Some("ok".to_string()));
    }

    #[test]
    fn test_trim_respects_char_boundaries() {
        let mut scanner = MarkerScanner::new(">>>");
        assert_eq!(scanner.scan("ééé"), None);
        assert_eq!(scanner.scan(">>>é"), Some("é".to_string()));
    }
}
