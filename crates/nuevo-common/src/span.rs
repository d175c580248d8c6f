use serde::Serialize;

/// Byte-offset span into source text. Start is inclusive, end is exclusive.
///
/// Every position in the Nuevo toolchain is a byte offset into the original
/// UTF-8 source string. Human-readable (line, column) pairs are derived on
/// demand through [`LineIndex`] when a token dump or diagnostic needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start ({start}) must be <= end ({end})");
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty (zero-length).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Pre-computed index of line start positions for on-demand line/column lookup.
///
/// Built once per source file; converts byte offsets to 1-based
/// (line, column) pairs via binary search.
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line. The first entry is always 0.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build a line index by scanning the source text for newline characters.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a 1-based (line, column) pair.
    ///
    /// Column is measured in bytes from the start of the line (1-based).
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        // partition_point returns the index of the first line start past the
        // offset, so the containing line is the entry just before it.
        let line_idx = self.line_starts.partition_point(|&start| start <= offset);
        let line_idx = line_idx.saturating_sub(1);
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Return the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_new_and_len() {
        let span = Span::new(4, 9);
        assert_eq!(span.start, 4);
        assert_eq!(span.end, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn span_empty() {
        let span = Span::new(7, 7);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn line_index_single_line() {
        let idx = LineIndex::new("module");
        assert_eq!(idx.line_col(0), (1, 1));
        assert_eq!(idx.line_col(5), (1, 6));
    }

    #[test]
    fn line_index_multiple_lines() {
        let src = "module :: App\nx = 1\ny = 2";
        let idx = LineIndex::new(src);
        // 'm' at offset 0 -> line 1, col 1
        assert_eq!(idx.line_col(0), (1, 1));
        // 'x' at offset 14 -> line 2, col 1
        assert_eq!(idx.line_col(14), (2, 1));
        // '1' at offset 18 -> line 2, col 5
        assert_eq!(idx.line_col(18), (2, 5));
        // 'y' at offset 20 -> line 3, col 1
        assert_eq!(idx.line_col(20), (3, 1));
    }

    #[test]
    fn line_index_newline_belongs_to_its_line() {
        let src = "ab\ncd";
        let idx = LineIndex::new(src);
        // '\n' at offset 2 -> still line 1, col 3
        assert_eq!(idx.line_col(2), (1, 3));
        // 'c' at offset 3 -> line 2, col 1
        assert_eq!(idx.line_col(3), (2, 1));
    }

    #[test]
    fn line_index_crlf_endings() {
        let src = "a\r\nb";
        let idx = LineIndex::new(src);
        // 'b' at offset 3 -> line 2, col 1; the '\r' stays on line 1.
        assert_eq!(idx.line_col(3), (2, 1));
        assert_eq!(idx.line_count(), 2);
    }

    #[test]
    fn line_index_line_count() {
        let idx = LineIndex::new("x\ny\nz");
        assert_eq!(idx.line_count(), 3);
    }
}
