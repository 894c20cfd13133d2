// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Turns a directory of book files into BookRecords.
//
//   *.txt files
//       │
//       ▼
//   TxtLoader          → reads files, drops undecodable bytes
//       │
//       ▼
//   RecordExtractor    → one pure call per file
//       ├── HeaderExtractor  → labelled fields in the first 40 lines
//       └── BodySegmenter    → text between START/END markers
//              └── Normalizer → word-frequency view of the body
//       │
//       ▼
//   Vec<BookRecord>
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads .txt files from a directory
pub mod loader;

/// Labelled header field extraction
pub mod header;

/// START/END marker search and body statistics
pub mod body;

/// Normalises body text for word counting
pub mod normalizer;

/// Merges header and body results into a record
pub mod extractor;
