// ============================================================
// Layer 2: ReportUseCase
// ============================================================
// Runs extraction over the books directory, then answers the
// corpus questions:
//   1. How complete is each column?
//   2. Which books mention "truth" more than twice?
//   3. Which book has the most dialogue? Which is longest?
//   4. What share of books is in each language?
//   5. What is the most common release date and mean year?

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::analysis::report::CorpusReport;
use crate::data::loader::TxtLoader;
use crate::application::extract_use_case::extract_all;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub books_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { books_dir: "gutenberg".to_string() }
    }
}

pub struct ReportUseCase {
    config: ReportConfig,
}

impl ReportUseCase {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CorpusReport> {
        let loader  = TxtLoader::new(&self.config.books_dir);
        let records = extract_all(&loader)?;

        let report = CorpusReport::build(&records);
        tracing::info!(
            "Report built over {} records ({} flagged for \"truth\")",
            report.record_count,
            report.truth_books.len()
        );
        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn book(title: &str, lang: &str, date: &str, body: &str) -> String {
        format!(
            "Title: {title}\nLanguage: {lang}\nRelease Date: {date}\n\n\
             *** START OF THIS PROJECT GUTENBERG EBOOK ***\n{body}\n\
             *** END OF THIS PROJECT GUTENBERG EBOOK ***\n"
        )
    }

    #[test]
    fn test_report_over_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.txt"),
            book("Alpha", "English", "August 1997", "Truth, truth and more truth."),
        )
        .unwrap();
        fs::write(
            dir.path().join("b.txt"),
            book("Beta", "French", "August 20, 2006 [EBook #102]", "\u{201C}Oui.\u{201D} \u{201C}Non.\u{201D}"),
        )
        .unwrap();
        fs::write(dir.path().join("c.txt"), "Language: English\nno body markers\n").unwrap();

        let report = ReportUseCase::new(ReportConfig {
            books_dir: dir.path().to_string_lossy().into_owned(),
        })
        .execute()
        .unwrap();

        assert_eq!(report.record_count, 3);
        assert_eq!(report.truth_books.len(), 1);
        assert_eq!(report.truth_books[0].title.as_deref(), Some("Alpha"));
        assert_eq!(report.most_dialogue.as_ref().unwrap().book.title.as_deref(), Some("Beta"));
        assert_eq!(report.language_percent[0].name, "English");
        assert_eq!(report.mean_release_year, Some(2001.5));
    }
}
