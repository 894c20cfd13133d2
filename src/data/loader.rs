// ============================================================
// Layer 4: Text Book Loader
// ============================================================
// Loads every `.txt` file from a directory.
//
// Decoding policy:
//   Files are read as raw bytes and decoded as UTF-8. Any byte
//   sequence that is not valid UTF-8 is DROPPED (not replaced
//   with U+FFFD), so a stray Latin-1 byte never aborts a read.
//
// Line endings:
//   "\r\n" and lone "\r" are turned into "\n" before anything
//   else sees the text, the same way a text-mode read would.
//
// Failure policy:
//   - Directory missing or unreadable → error (the only global
//     failure of a run)
//   - A single file cannot be read    → warn and skip it
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::book::BookFile;
use crate::domain::traits::BookSource;

/// File name suffix that marks an input file
pub const TXT_SUFFIX: &str = ".txt";

/// Loads all `.txt` books from a directory.
/// Implements the BookSource trait from Layer 3.
pub struct TxtLoader {
    /// Path to the directory containing the books
    dir: String,
}

impl TxtLoader {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BookSource for TxtLoader {
    fn load_all(&self) -> Result<Vec<BookFile>> {
        let dir = Path::new(&self.dir);

        let mut books = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read books directory '{}'", self.dir))?
        {
            let entry    = entry.with_context(|| format!("Cannot list '{}'", self.dir))?;
            let path     = entry.path();
            let filename = entry.file_name().to_string_lossy().into_owned();

            // Literal, case-sensitive suffix check: "a.TXT" is not an input
            if !filename.ends_with(TXT_SUFFIX) || !path.is_file() {
                continue;
            }

            match fs::read(&path) {
                Ok(bytes) => {
                    let text = decode_text(&bytes);
                    tracing::debug!("Loaded: {} ({} bytes)", filename, bytes.len());
                    books.push(BookFile::new(filename, text));
                }
                // One unreadable file must not sink the batch
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", path.display(), e);
                }
            }
        }

        // read_dir order is platform-dependent; sort for stable output
        books.sort_by(|a, b| a.filename.cmp(&b.filename));

        tracing::info!("Loaded {} book files from '{}'", books.len(), self.dir);
        Ok(books)
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences, then
/// normalise line endings to "\n".
pub fn decode_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());

    for chunk in bytes.utf8_chunks() {
        // chunk.invalid() is simply not copied
        text.push_str(chunk.valid());
    }

    normalize_line_endings(&text)
}

/// "\r\n" → "\n", then any remaining "\r" → "\n"
fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_drops_invalid_bytes() {
        assert_eq!(decode_text(b"Ti\xFFtle: X\n"), "Title: X\n");
    }

    #[test]
    fn test_valid_multibyte_survives() {
        let s = "He said \u{201C}hi\u{201D}";
        assert_eq!(decode_text(s.as_bytes()), s);
    }

    #[test]
    fn test_normalises_line_endings() {
        assert_eq!(decode_text(b"a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_loads_only_txt_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.txt"), "first").unwrap();
        fs::write(dir.path().join("upper.TXT"), "ignored").unwrap();
        fs::write(dir.path().join("c.txt.bak"), "ignored").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        let loader = TxtLoader::new(dir.path().to_string_lossy());
        let books  = loader.load_all().unwrap();

        let names: Vec<&str> = books.iter().map(|b| b.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(books[0].text, "first");
    }

    #[test]
    fn test_empty_directory_gives_no_books() {
        let dir    = TempDir::new().unwrap();
        let loader = TxtLoader::new(dir.path().to_string_lossy());
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir    = TempDir::new().unwrap();
        let loader = TxtLoader::new(dir.path().join("nope").to_string_lossy());
        assert!(loader.load_all().is_err());
    }
}
