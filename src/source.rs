//! Source text accessor handed to rules alongside the tree
//!
//! Node spans count UTF-16 code units, the way JavaScript strings and ESTree
//! parsers index source text. `SourceText` maps them onto the UTF-8 string.

use crate::ast::Span;
use crate::diagnostic::Location;
use std::ops::Range;

/// Original source of the file being linted
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    /// Byte offset for every UTF-16 offset, plus one past the end.
    /// `None` between the two halves of a surrogate pair.
    byte_offsets: Vec<Option<usize>>,
    /// UTF-16 offset of the first character of every line
    line_starts: Vec<usize>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        let mut line_starts = vec![0];

        for (byte, ch) in text.char_indices() {
            byte_offsets.push(Some(byte));
            if ch.len_utf16() == 2 {
                byte_offsets.push(None);
            }
            if ch == '\n' {
                line_starts.push(byte_offsets.len());
            }
        }
        byte_offsets.push(Some(text.len()));

        Self {
            text,
            byte_offsets,
            line_starts,
        }
    }

    /// Full source text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the source in UTF-16 code units
    pub fn len_utf16(&self) -> usize {
        self.byte_offsets.len() - 1
    }

    /// Byte offset of a UTF-16 offset, `None` past the end or inside a surrogate pair
    pub fn byte_offset(&self, offset: usize) -> Option<usize> {
        self.byte_offsets.get(offset).copied().flatten()
    }

    /// Byte range covered by a span
    pub fn byte_range(&self, span: Span) -> Option<Range<usize>> {
        if span.start > span.end {
            return None;
        }
        Some(self.byte_offset(span.start)?..self.byte_offset(span.end)?)
    }

    /// Exact text of a node's span, or `None` if the span does not fit the source
    pub fn text(&self, span: Span) -> Option<&'a str> {
        self.byte_range(span).and_then(|range| self.text.get(range))
    }

    /// 1-based line and column of a span start, with the span length.
    /// Columns count UTF-16 code units like the span itself.
    pub fn location(&self, span: Span) -> Location {
        let offset = span.start.min(self.len_utf16());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        };
        let column = offset - self.line_starts[line_idx];

        Location::new(line_idx + 1, column + 1).with_length(span.len())
    }

    /// Number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
