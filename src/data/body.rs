// ============================================================
// Layer 4: Body Segmenter
// ============================================================
// Finds the actual book text between the front matter and the
// licence footer, then derives a few statistics from it.
//
// A typical file looks like:
//
//   Title: ...
//   *** START OF THIS PROJECT GUTENBERG EBOOK ... ***
//   <the book>
//   *** END OF THIS PROJECT GUTENBERG EBOOK ... ***
//   <licence>
//
// Marker rules:
//   - A marker is "***" followed, later on the same line, by
//     the keyword (START or END, case-sensitive).
//   - The body starts right after the START marker's line
//     content ends, so the newline that closes the marker line
//     is the first body character.
//   - The body ends right before the "***" of the END marker.
//   - Both markers are searched from the top of the file. If the
//     END marker sits before the START marker ends, the body is
//     empty.
//
// Statistics are taken over the raw body; only the "truth"
// count goes through the Normalizer first.
//
// Reference: Rust Book §8 (Strings: byte offsets and slices)
//            Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

use crate::data::normalizer::Normalizer;

/// Asterisks that open a marker fragment
const MARKER_STARS: &str = "***";

/// Keyword that identifies the start-of-content marker
pub const START_KEYWORD: &str = "START";

/// Keyword that identifies the end-of-content marker
pub const END_KEYWORD: &str = "END";

/// Right double quotation mark; its count stands in for dialogue
pub const CLOSING_QUOTE: char = '\u{201D}';

/// Word tracked in the normalised body
pub const TRUTH_WORD: &str = "truth";

/// "truth" must occur strictly more often than this
pub const TRUTH_THRESHOLD: usize = 2;

/// A marker needed to bound the body could not be found.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    #[error("start-of-content marker (\"*** ... START\") not found")]
    MissingStartMarker,

    #[error("end-of-content marker (\"*** ... END\") not found")]
    MissingEndMarker,
}

/// Byte span of a matched marker fragment within the full text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerMatch {
    /// Offset of the first '*'
    start: usize,
    /// Offset one past the last character of the marker line
    end: usize,
}

/// Statistics derived from one body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyStats {
    /// Number of U+201D characters in the raw body
    pub dialogue_instance_count: usize,

    /// Number of characters (not bytes) in the raw body
    pub book_length: usize,

    /// Non-overlapping "truth" hits in the normalised body
    pub truth_count: usize,
}

impl BodyStats {
    /// `Some(true)` above the threshold, otherwise `None` (never `Some(false)`)
    pub fn truth_mentioned_twice_plus(&self) -> Option<bool> {
        (self.truth_count > TRUTH_THRESHOLD).then_some(true)
    }
}

pub struct BodySegmenter {
    normalizer: Normalizer,
}

impl BodySegmenter {
    pub fn new() -> Self {
        Self { normalizer: Normalizer::new() }
    }

    /// Slice the raw body out of the full file text.
    pub fn locate<'a>(&self, text: &'a str) -> Result<&'a str, SegmentError> {
        let start = find_marker(text, START_KEYWORD).ok_or(SegmentError::MissingStartMarker)?;
        let stop  = find_marker(text, END_KEYWORD).ok_or(SegmentError::MissingEndMarker)?;

        let from = start.end;
        let to   = stop.start;

        if to <= from {
            return Ok("");
        }
        Ok(&text[from..to])
    }

    /// Compute statistics over an already-located raw body.
    pub fn stats(&self, raw_body: &str) -> BodyStats {
        let processed = self.normalizer.normalize(raw_body);

        BodyStats {
            dialogue_instance_count: raw_body.chars().filter(|&c| c == CLOSING_QUOTE).count(),
            book_length:             raw_body.chars().count(),
            truth_count:             self.normalizer.count_occurrences(&processed, TRUTH_WORD),
        }
    }

    /// Locate the body and compute its statistics in one step.
    pub fn segment(&self, text: &str) -> Result<BodyStats, SegmentError> {
        let raw_body = self.locate(text)?;
        Ok(self.stats(raw_body))
    }
}

impl Default for BodySegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first line holding "***" followed later by `keyword`.
///
/// Only the first "***" on a line needs checking: any later one
/// sees a shorter tail, so if the first fails they all do.
fn find_marker(text: &str, keyword: &str) -> Option<MarkerMatch> {
    let mut line_start = 0usize;

    for line in text.split('\n') {
        if let Some(stars) = line.find(MARKER_STARS) {
            let tail = &line[stars + MARKER_STARS.len()..];
            if tail.contains(keyword) {
                return Some(MarkerMatch {
                    start: line_start + stars,
                    end:   line_start + line.len(),
                });
            }
        }
        // +1 for the '\n' consumed by split
        line_start += line.len() + 1;
    }

    None
}
