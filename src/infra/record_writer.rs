// ============================================================
// Layer 6: Record Writer
// ============================================================
// Writes extracted BookRecords out, either as a JSON array or
// as CSV with one row per book.
//
// JSON: absent fields are left out of each object entirely.
// CSV:  absent fields are empty cells. Quoting is left to the
//       csv crate, which only quotes cells that need it.
//
// Example CSV output:
//   Filename,Title,Author,...,Dialogue Instances,Book Length
//   pg1342.txt,Pride and Prejudice,Jane Austen,...,1571,704146
//   pg2701.txt,"Moby Dick; Or, The Whale",Herman Melville,...,0,1238266
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::domain::book::{BookRecord, Column};

/// Output encodings for a batch of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv"  => Ok(OutputFormat::Csv),
            other  => bail!("unknown output format '{other}' (expected json or csv)"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv  => f.write_str("csv"),
        }
    }
}

/// Serialises records in the configured format.
pub struct RecordWriter {
    format: OutputFormat,
}

impl RecordWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write all records to any sink (stdout, a file, a Vec<u8>).
    pub fn write<W: Write>(&self, records: &[BookRecord], mut out: W) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, records)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => write_csv(records, &mut out)?,
        }

        out.flush()?;
        tracing::debug!("Wrote {} records as {}", records.len(), self.format);
        Ok(())
    }

    /// Create (or truncate) `path` and write all records into it.
    pub fn write_to_path(&self, records: &[BookRecord], path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Cannot create output file '{}'", path.display()))?;

        self.write(records, BufWriter::new(file))
            .with_context(|| format!("Cannot write records to '{}'", path.display()))?;

        tracing::info!("Saved {} records to '{}'", records.len(), path.display());
        Ok(())
    }
}

/// Header row, then one row per record, in `Column::all()` order
fn write_csv<W: Write>(records: &[BookRecord], out: &mut W) -> Result<()> {
    let columns = Column::all();
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(columns.iter().map(|c| c.heading()))?;

    for r in records {
        wtr.write_record(columns.iter().map(|&c| r.value(c).unwrap_or_default()))?;
    }

    wtr.flush()?;
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::HeaderField;

    fn sample() -> Vec<BookRecord> {
        let mut r = BookRecord::new("pg2701.txt");
        r.header.set(HeaderField::Title, "Moby Dick; Or, The Whale");
        r.header.set(HeaderField::Author, "Herman \"H.\" Melville");
        r.truth_mentioned_twice_plus = Some(true);
        r.dialogue_instance_count    = 7;
        r.book_length                = 1234;
        vec![r, BookRecord::new("empty.txt")]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_csv_output() {
        let mut buf = Vec::new();
        RecordWriter::new(OutputFormat::Csv).write(&sample(), &mut buf).unwrap();
        let text  = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Filename,Title,Author,Posting Date"));
        assert!(lines[0].ends_with("Truth twice,Dialogue Instances,Book Length"));
        assert!(lines[1].starts_with(
            "pg2701.txt,\"Moby Dick; Or, The Whale\",\"Herman \"\"H.\"\" Melville\","
        ));
        assert!(lines[1].ends_with(",true,7,1234"));
        assert_eq!(lines[2], "empty.txt,,,,,,,,,,0,0");
    }

    #[test]
    fn test_csv_quotes_line_breaks() {
        let mut r = BookRecord::new("odd.txt");
        r.header.set(HeaderField::Title, "Two\nLines");

        let mut buf = Vec::new();
        RecordWriter::new(OutputFormat::Csv).write(&[r], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("odd.txt,\"Two\nLines\","));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        RecordWriter::new(OutputFormat::Json).write(&sample(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value[0]["title"], "Moby Dick; Or, The Whale");
        assert_eq!(value[0]["truthMentionedTwicePlus"], true);
        assert!(value[1].get("title").is_none());
        assert_eq!(value[1]["bookLength"], 0);
    }

    #[test]
    fn test_write_to_path() {
        let dir  = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        RecordWriter::new(OutputFormat::Json).write_to_path(&sample(), &path).unwrap();

        let saved: Vec<BookRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, sample());
    }
}
