// ============================================================
// Layer 2: ExtractUseCase
// ============================================================
// Orchestrates the extraction pipeline in order:
//
//   Step 1: Load .txt files            (Layer 4 - data)
//   Step 2: Extract one record per file (Layer 4 - data)
//   Step 3: Optionally write records   (Layer 6 - infra)
//
// Every file is handled by a pure call, so a bad file can only
// ever cost its own body statistics, never the whole batch.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{extractor::RecordExtractor, loader::TxtLoader};
use crate::domain::{book::BookRecord, traits::BookSource};
use crate::infra::record_writer::{OutputFormat, RecordWriter};

// ─── Extraction Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Directory holding the .txt books
    pub books_dir: String,

    /// Encoding for the written records
    pub format: OutputFormat,

    /// Destination file; `None` means stdout
    pub output: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            books_dir: "gutenberg".to_string(),
            format:    OutputFormat::Json,
            output:    None,
        }
    }
}

// ─── ExtractUseCase ──────────────────────────────────────────────────────────
pub struct ExtractUseCase {
    config: ExtractConfig,
}

impl ExtractUseCase {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Load the books directory and build every record.
    pub fn records(&self) -> Result<Vec<BookRecord>> {
        tracing::info!("Loading .txt files from '{}'", self.config.books_dir);
        let loader = TxtLoader::new(&self.config.books_dir);
        extract_all(&loader)
    }

    /// Build every record and write it to the configured sink.
    pub fn execute(&self) -> Result<Vec<BookRecord>> {
        let records = self.records()?;
        let writer  = RecordWriter::new(self.config.format);

        match &self.config.output {
            Some(path) => writer.write_to_path(&records, Path::new(path))?,
            None       => writer.write(&records, std::io::stdout().lock())?,
        }

        Ok(records)
    }
}

/// Turn every book in `source` into a record, in source order.
pub fn extract_all(source: &dyn BookSource) -> Result<Vec<BookRecord>> {
    let books     = source.load_all()?;
    let extractor = RecordExtractor::new();

    let records: Vec<BookRecord> = books
        .iter()
        .map(|book| extractor.extract_file(book))
        .collect();

    let bounded = records.iter().filter(|r| r.book_length > 0).count();
    tracing::info!(
        "Extracted {} records ({} with a non-empty body)",
        records.len(),
        bounded
    );

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::BookFile;
    use std::fs;
    use tempfile::TempDir;

    const GOOD: &str = "\
Title: Good Book
Language: English

*** START OF THIS PROJECT GUTENBERG EBOOK GOOD BOOK ***
\u{201C}Hello,\u{201D} she said.
*** END OF THIS PROJECT GUTENBERG EBOOK GOOD BOOK ***
";

    const NO_MARKERS: &str = "Title: Broken Book\nNo markers here.\n";

    #[test]
    fn test_bad_file_does_not_abort_batch() {
        let source = vec![
            BookFile::new("broken.txt", NO_MARKERS),
            BookFile::new("good.txt", GOOD),
        ];
        let records = extract_all(&source).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "broken.txt");
        assert_eq!(records[0].header.title.as_deref(), Some("Broken Book"));
        assert_eq!(records[0].book_length, 0);
        assert_eq!(records[1].dialogue_instance_count, 1);
        assert!(records[1].book_length > 0);
    }

    #[test]
    fn test_execute_writes_csv_file() {
        let books = TempDir::new().unwrap();
        fs::write(books.path().join("good.txt"), GOOD).unwrap();
        fs::write(books.path().join("readme.md"), "not a book").unwrap();

        let out  = TempDir::new().unwrap();
        let path = out.path().join("books.csv");

        let use_case = ExtractUseCase::new(ExtractConfig {
            books_dir: books.path().to_string_lossy().into_owned(),
            format:    OutputFormat::Csv,
            output:    Some(path.to_string_lossy().into_owned()),
        });
        let records = use_case.execute().unwrap();
        assert_eq!(records.len(), 1);

        let csv = fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("good.txt,Good Book,"));
    }

    #[test]
    fn test_unreadable_directory_is_the_only_failure() {
        let dir = TempDir::new().unwrap();
        let use_case = ExtractUseCase::new(ExtractConfig {
            books_dir: dir.path().join("missing").to_string_lossy().into_owned(),
            ..ExtractConfig::default()
        });
        assert!(use_case.records().is_err());
    }
}
