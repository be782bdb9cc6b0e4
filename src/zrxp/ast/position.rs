//! Source location utilities for converting byte offsets to line/column positions

use super::span::{Position, Span};
use std::ops::Range;

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Create a new SourceLocation from source text
    ///
    /// Lines break on `\n`, `\r\n` and a lone `\r`, matching the lexer.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();

        for (pos, byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push(pos + 1),
                b'\r' if bytes.get(pos + 1) != Some(&b'\n') => line_starts.push(pos + 1),
                _ => {}
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line, column)
    }

    /// Convert a byte range to a span
    pub fn range_to_span(&self, range: &Range<usize>) -> Span {
        Span::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_to_position_single_line() {
        let loc = SourceLocation::new("#SANR1|*|");
        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("#A|*|\n1 2\n3 4");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(8), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(10), Position::new(2, 0));
    }

    #[test]
    fn test_crlf_and_cr_line_breaks() {
        let loc = SourceLocation::new("a\r\nb\rc");
        assert_eq!(loc.byte_to_position(3), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(2, 0));
    }

    #[test]
    fn test_end_of_input_position() {
        let source = "#A|*|\n";
        let loc = SourceLocation::new(source);
        assert_eq!(loc.byte_to_position(source.len()), Position::new(1, 0));
    }

    #[test]
    fn test_range_to_span() {
        let loc = SourceLocation::new("#A|*|\n1 2\n");
        let span = loc.range_to_span(&(0..10));
        assert_eq!(span.start, Position::new(0, 0));
        assert_eq!(span.end, Position::new(2, 0));
    }
}
