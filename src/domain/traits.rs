// ============================================================
// Layer 3: Core Traits
// ============================================================
// The application layer only sees `BookSource`, so the
// directory loader can be swapped for an in-memory source in
// tests without touching the use cases.

use anyhow::Result;
use crate::domain::book::BookFile;

// ─── BookSource ───────────────────────────────────────────────────────────────
/// Any component that can hand over a batch of book files.
///
/// Implementations:
///   - TxtLoader → loads every `.txt` file in a directory
pub trait BookSource {
    /// Load all available book files from this source.
    fn load_all(&self) -> Result<Vec<BookFile>>;
}

/// A fixed list of files is a source too. Handy for tests and
/// for callers that already hold the text in memory.
impl BookSource for Vec<BookFile> {
    fn load_all(&self) -> Result<Vec<BookFile>> {
        Ok(self.clone())
    }
}
