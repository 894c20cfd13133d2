// ============================================================
// Layer 5: Corpus Report
// ============================================================
// Bundles every summary into one serialisable value, so the CLI
// can print it as text or as JSON.
//
// Example text output:
//
//   Books analysed: 761
//
//   Missing values (%):
//     Filename                   0.00
//     ...
//   Books mentioning "truth" more than twice:
//     Pride and Prejudice (pg1342.txt)
//   ...

use serde::Serialize;
use std::fmt;

use crate::analysis::{release_date, summary};
use crate::domain::book::BookRecord;

/// A column heading and a percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub name:    String,
    pub percent: f64,
}

/// Just enough of a record to identify it in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRef {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:    Option<String>,
}

impl BookRef {
    fn from_record(r: &BookRecord) -> Self {
        Self {
            filename: r.filename.clone(),
            title:    r.header.title.clone(),
        }
    }
}

/// A book that won a "most ..." question, with the winning count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedBook {
    #[serde(flatten)]
    pub book:  BookRef,
    pub value: usize,
}

impl RankedBook {
    fn from_record(r: &BookRecord, value: usize) -> Self {
        Self { book: BookRef::from_record(r), value }
    }
}

impl fmt::Display for BookRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{} ({})", title, self.filename),
            None        => write!(f, "<untitled> ({})", self.filename),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusReport {
    pub record_count:       usize,
    pub missing_percent:    Vec<Share>,
    pub truth_books:        Vec<BookRef>,
    pub most_dialogue:      Option<RankedBook>,
    pub longest:            Option<RankedBook>,
    pub language_percent:   Vec<Share>,
    pub release_date_modes: Vec<String>,
    pub mean_release_year:  Option<f64>,
}

impl CorpusReport {
    /// Run every summary over the records
    pub fn build(records: &[BookRecord]) -> Self {
        let missing_percent = summary::missingness(records)
            .into_iter()
            .map(|(column, percent)| Share { name: column.heading().to_string(), percent })
            .collect();

        let language_percent = summary::language_distribution(records)
            .into_iter()
            .map(|(name, percent)| Share { name, percent })
            .collect();

        Self {
            record_count: records.len(),
            missing_percent,
            truth_books: summary::truth_books(records)
                .into_iter()
                .map(BookRef::from_record)
                .collect(),
            most_dialogue: summary::max_by_dialogue(records)
                .map(|r| RankedBook::from_record(r, r.dialogue_instance_count)),
            longest: summary::max_by_length(records)
                .map(|r| RankedBook::from_record(r, r.book_length)),
            language_percent,
            release_date_modes: release_date::release_date_modes(records),
            mean_release_year:  release_date::mean_release_year(records),
        }
    }
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Books analysed: {}", self.record_count)?;

        writeln!(f, "\nMissing values (%):")?;
        for s in &self.missing_percent {
            writeln!(f, "  {:<26} {:>6.2}", s.name, s.percent)?;
        }

        writeln!(f, "\nBooks mentioning \"truth\" more than twice: {}", self.truth_books.len())?;
        for b in &self.truth_books {
            writeln!(f, "  {b}")?;
        }

        writeln!(f, "\nMost dialogue:")?;
        match &self.most_dialogue {
            Some(b) => writeln!(f, "  {}: {} closing quotes", b.book, b.value)?,
            None    => writeln!(f, "  n/a")?,
        }

        writeln!(f, "\nLongest book:")?;
        match &self.longest {
            Some(b) => writeln!(f, "  {}: {} characters", b.book, b.value)?,
            None    => writeln!(f, "  n/a")?,
        }

        writeln!(f, "\nLanguages (% of books declaring one):")?;
        for s in &self.language_percent {
            writeln!(f, "  {:<26} {:>6.2}", s.name, s.percent)?;
        }

        writeln!(f, "\nMost common release date:")?;
        if self.release_date_modes.is_empty() {
            writeln!(f, "  n/a")?;
        }
        for d in &self.release_date_modes {
            writeln!(f, "  {d}")?;
        }

        write!(f, "\nMean release year: ")?;
        match self.mean_release_year {
            Some(mean) => writeln!(f, "{:.2} (~{})", mean, mean.round() as i64),
            None       => writeln!(f, "n/a"),
        }
    }
}
