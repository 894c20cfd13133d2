// ============================================================
// Layer 5: Analysis
// ============================================================
// Aggregate questions over a finished Vec<BookRecord>. Nothing
// here reads files or scans book text; it only reads records.
//
//   summary.rs       Missingness, "truth" books, maxima, and
//                    language shares
//
//   release_date.rs  Cleaning free-text release dates, then
//                    the most common date and the mean year
//
//   report.rs        CorpusReport: all of the above in one
//                    serialisable, printable value

pub mod summary;

pub mod release_date;

pub mod report;
