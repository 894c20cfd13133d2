// ============================================================
// Layer 3: Book Domain Types
// ============================================================
// `BookFile` is what the loader hands over (a filename plus the
// decoded text). `BookRecord` is what the extractor produces:
// one tabular row per file, built once and then only read.
//
// Every optional field is independent. A file without a
// "Title:" line simply has `title: None`; nothing else changes.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// A raw book file loaded from disk.
/// By the time a BookFile exists, the bytes have already been
/// decoded and line endings normalised to `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    /// The file name (not the full path), e.g. "pg1342.txt"
    pub filename: String,

    /// Full decoded text of the file
    pub text: String,
}

impl BookFile {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text:     text.into(),
        }
    }
}

// ─── HeaderField ──────────────────────────────────────────────────────────────
/// The labelled metadata lines recognised in a book header.
///
/// The order of `HeaderField::ALL` is the order labels are tested
/// against each line; the first label that matches wins for that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Title,
    Author,
    PostingDate,
    ReleaseDate,
    FirstPosted,
    LastUpdated,
    Language,
    CharacterSetEncoding,
}

impl HeaderField {
    /// Every header field, in matching precedence order
    pub const ALL: [HeaderField; 8] = [
        HeaderField::Title,
        HeaderField::Author,
        HeaderField::PostingDate,
        HeaderField::ReleaseDate,
        HeaderField::FirstPosted,
        HeaderField::LastUpdated,
        HeaderField::Language,
        HeaderField::CharacterSetEncoding,
    ];

    /// The literal label text as it appears at the start of a header
    /// line, including the colon but not the following space.
    pub fn label(self) -> &'static str {
        match self {
            HeaderField::Title                => "Title:",
            HeaderField::Author               => "Author:",
            HeaderField::PostingDate          => "Posting Date:",
            HeaderField::ReleaseDate          => "Release Date:",
            HeaderField::FirstPosted          => "First Posted:",
            HeaderField::LastUpdated          => "Last Updated:",
            HeaderField::Language             => "Language:",
            HeaderField::CharacterSetEncoding => "Character Set Encoding:",
        }
    }
}

// ─── HeaderFields ─────────────────────────────────────────────────────────────
/// The partial mapping produced by scanning a header window.
/// Absent fields stay `None` and are skipped when serialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_set_encoding: Option<String>,
}

impl HeaderFields {
    /// Mutable access to the slot backing a field
    fn slot_mut(&mut self, field: HeaderField) -> &mut Option<String> {
        match field {
            HeaderField::Title                => &mut self.title,
            HeaderField::Author               => &mut self.author,
            HeaderField::PostingDate          => &mut self.posting_date,
            HeaderField::ReleaseDate          => &mut self.release_date,
            HeaderField::FirstPosted          => &mut self.first_posted,
            HeaderField::LastUpdated          => &mut self.last_updated,
            HeaderField::Language             => &mut self.language,
            HeaderField::CharacterSetEncoding => &mut self.character_set_encoding,
        }
    }

    /// Read the value of a field, if it was found
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        let slot = match field {
            HeaderField::Title                => &self.title,
            HeaderField::Author               => &self.author,
            HeaderField::PostingDate          => &self.posting_date,
            HeaderField::ReleaseDate          => &self.release_date,
            HeaderField::FirstPosted          => &self.first_posted,
            HeaderField::LastUpdated          => &self.last_updated,
            HeaderField::Language             => &self.language,
            HeaderField::CharacterSetEncoding => &self.character_set_encoding,
        };
        slot.as_deref()
    }

    /// Set a field, overwriting any earlier value
    pub fn set(&mut self, field: HeaderField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }
}

// ─── BookRecord ───────────────────────────────────────────────────────────────
/// One row of output: header metadata plus body statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Source file name, always present
    pub filename: String,

    /// Whatever labelled header lines were found
    #[serde(flatten)]
    pub header: HeaderFields,

    /// `Some(true)` when "truth" occurs more than twice in the
    /// normalised body. Never `Some(false)`: absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth_mentioned_twice_plus: Option<bool>,

    /// Count of closing double quotes (U+201D) in the raw body
    pub dialogue_instance_count: usize,

    /// Character count of the raw body
    pub book_length: usize,
}

impl BookRecord {
    /// A record carrying only a filename. Body statistics are zero.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Is the value for this column present in the record?
    pub fn is_present(&self, column: Column) -> bool {
        match column {
            Column::Header(field)    => self.header.get(field).is_some(),
            Column::TruthTwice       => self.truth_mentioned_twice_plus.is_some(),
            // Always populated, even when body extraction failed
            Column::Filename
            | Column::DialogueInstances
            | Column::BookLength     => true,
        }
    }

    /// Render a column as text, `None` when absent
    pub fn value(&self, column: Column) -> Option<String> {
        match column {
            Column::Filename          => Some(self.filename.clone()),
            Column::Header(field)     => self.header.get(field).map(str::to_string),
            Column::TruthTwice        => self.truth_mentioned_twice_plus.map(|b| b.to_string()),
            Column::DialogueInstances => Some(self.dialogue_instance_count.to_string()),
            Column::BookLength        => Some(self.book_length.to_string()),
        }
    }
}

// ─── Column ───────────────────────────────────────────────────────────────────
/// Tabular view over a BookRecord, used for CSV output and for
/// per-column missingness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Filename,
    Header(HeaderField),
    TruthTwice,
    DialogueInstances,
    BookLength,
}

impl Column {
    /// Every column, in table order
    pub fn all() -> Vec<Column> {
        let mut cols = vec![Column::Filename];
        cols.extend(HeaderField::ALL.iter().map(|&f| Column::Header(f)));
        cols.extend([Column::TruthTwice, Column::DialogueInstances, Column::BookLength]);
        cols
    }

    /// Human-readable column heading
    pub fn heading(self) -> &'static str {
        match self {
            Column::Filename          => "Filename",
            Column::Header(field)     => field.label().trim_end_matches(':'),
            Column::TruthTwice        => "Truth twice",
            Column::DialogueInstances => "Dialogue Instances",
            Column::BookLength        => "Book Length",
        }
    }
}
