// ============================================================
// Layer 4: Record Extractor
// ============================================================
// Merges the header fields and body statistics of one file
// into a single BookRecord.
//
// This is a pure function of (filename, text): the same input
// always yields the same record, and no state is shared between
// files, so a caller is free to process files in any order.
//
// When a body marker is missing the record is still produced,
// carrying its header fields and zeroed body statistics.

use crate::data::{body::BodySegmenter, header::HeaderExtractor};
use crate::domain::book::{BookFile, BookRecord};

pub struct RecordExtractor {
    header: HeaderExtractor,
    body:   BodySegmenter,
}

impl RecordExtractor {
    pub fn new() -> Self {
        Self {
            header: HeaderExtractor::new(),
            body:   BodySegmenter::new(),
        }
    }

    /// Build the record for one file.
    pub fn extract(&self, filename: &str, text: &str) -> BookRecord {
        let mut record = BookRecord::new(filename);
        record.header  = self.header.extract(text);

        match self.body.segment(text) {
            Ok(stats) => {
                record.truth_mentioned_twice_plus = stats.truth_mentioned_twice_plus();
                record.dialogue_instance_count    = stats.dialogue_instance_count;
                record.book_length                = stats.book_length;
            }
            Err(e) => {
                tracing::warn!("'{}': {}; body statistics left at zero", filename, e);
            }
        }

        record
    }

    /// Convenience wrapper over a loaded BookFile
    pub fn extract_file(&self, book: &BookFile) -> BookRecord {
        self.extract(&book.filename, &book.text)
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
