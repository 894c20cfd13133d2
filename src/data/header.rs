// ============================================================
// Layer 4: Header Field Extractor
// ============================================================
// Scans the first lines of a book for labelled metadata such as
//
//   Title: Pride and Prejudice
//   Author: Jane Austen
//   Release Date: August 26, 2008 [EBook #1342]
//
// Matching rules:
//   - A label must sit at the very start of the line and be
//     followed by exactly one space; the value is the rest of
//     the line up to its '\n'.
//   - A line only counts once it is terminated by '\n', so a
//     label on an unterminated last line is not picked up.
//   - Labels are tried in `HeaderField::ALL` order and the
//     first hit wins for that line.
//   - Across the window, a later line for the same field
//     overwrites an earlier one.
//   - Only the first HEADER_WINDOW lines are ever looked at.
//
// Plain prefix checks are enough here; no regex engine needed.

use crate::domain::book::{HeaderField, HeaderFields};

/// Number of leading lines scanned for header metadata
pub const HEADER_WINDOW: usize = 40;

pub struct HeaderExtractor {
    /// How many leading lines to examine
    window: usize,
}

impl HeaderExtractor {
    /// Create an extractor that scans the standard 40-line window
    pub fn new() -> Self {
        Self { window: HEADER_WINDOW }
    }

    /// Match a single line against the label table.
    ///
    /// `line` must still carry its '\n'. Returns the first field whose
    /// label prefixes the line, together with the captured value
    /// (without the terminator).
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<(HeaderField, &'a str)> {
        let line = line.strip_suffix('\n')?;

        HeaderField::ALL.iter().find_map(|&field| {
            line.strip_prefix(field.label())
                .and_then(|rest| rest.strip_prefix(' '))
                .map(|value| (field, value))
        })
    }

    /// Scan the header window of `text` and collect every field found.
    pub fn extract(&self, text: &str) -> HeaderFields {
        let mut fields = HeaderFields::default();

        for line in text.split_inclusive('\n').take(self.window) {
            if let Some((field, value)) = self.parse_line(line) {
                // Last write wins
                fields.set(field, value);
            }
        }

        fields
    }
}

impl Default for HeaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}
