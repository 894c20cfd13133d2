// ============================================================
// Layer 5: Corpus Summaries
// ============================================================
// Column-level questions asked of the extracted records:
//
//   missingness            → % of records lacking each column
//   truth_books            → records flagged for "truth" > 2
//   max_by_dialogue        → record with the most closing quotes
//   max_by_length          → longest body
//   language_distribution  → % share of each declared language
//
// All functions borrow the records and never mutate them.

use std::collections::BTreeMap;

use crate::domain::book::{BookRecord, Column};

/// Percentage of records missing each column, lowest first.
/// Columns with equal shares keep table order.
pub fn missingness(records: &[BookRecord]) -> Vec<(Column, f64)> {
    let total = records.len();

    let mut shares: Vec<(Column, f64)> = Column::all()
        .into_iter()
        .map(|column| {
            let missing = records.iter().filter(|r| !r.is_present(column)).count();
            (column, percent(missing, total))
        })
        .collect();

    // sort_by is stable, so ties stay in column order
    shares.sort_by(|a, b| a.1.total_cmp(&b.1));
    shares
}

/// Records where "truth" shows up more than twice, in input order
pub fn truth_books(records: &[BookRecord]) -> Vec<&BookRecord> {
    records
        .iter()
        .filter(|r| r.truth_mentioned_twice_plus == Some(true))
        .collect()
}

/// First record with the highest dialogue count
pub fn max_by_dialogue(records: &[BookRecord]) -> Option<&BookRecord> {
    first_max_by_key(records, |r| r.dialogue_instance_count)
}

/// First record with the longest body
pub fn max_by_length(records: &[BookRecord]) -> Option<&BookRecord> {
    first_max_by_key(records, |r| r.book_length)
}

/// Share of each language among records that declare one.
/// Sorted by share (largest first), then by name.
pub fn language_distribution(records: &[BookRecord]) -> Vec<(String, f64)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for lang in records.iter().filter_map(|r| r.header.language.as_deref()) {
        *counts.entry(lang).or_insert(0) += 1;
    }

    let declared: usize = counts.values().sum();

    let mut shares: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(lang, n)| (lang.to_string(), percent(n, declared)))
        .collect();

    // BTreeMap already gave name order; stable sort keeps it for ties
    shares.sort_by(|a, b| b.1.total_cmp(&a.1));
    shares
}

/// `Iterator::max_by_key` keeps the LAST maximum; this keeps the first.
fn first_max_by_key<F>(records: &[BookRecord], key: F) -> Option<&BookRecord>
where
    F: Fn(&BookRecord) -> usize,
{
    records
        .iter()
        .reduce(|best, r| if key(r) > key(best) { r } else { best })
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::HeaderField;

    fn record(name: &str, dialogue: usize, length: usize) -> BookRecord {
        let mut r = BookRecord::new(name);
        r.dialogue_instance_count = dialogue;
        r.book_length             = length;
        r
    }

    #[test]
    fn test_missingness_half_titles() {
        let mut a = record("a.txt", 0, 0);
        a.header.set(HeaderField::Title, "A");
        let b = record("b.txt", 0, 0);

        let shares = missingness(&[a, b]);
        let title  = shares
            .iter()
            .find(|(c, _)| *c == Column::Header(HeaderField::Title))
            .unwrap();
        assert_eq!(title.1, 50.0);

        // Always-present columns come first with 0%
        assert_eq!(shares[0], (Column::Filename, 0.0));
        // Fully missing columns are last
        assert_eq!(shares.last().unwrap().1, 100.0);
    }

    #[test]
    fn test_missingness_of_empty_corpus() {
        let shares = missingness(&[]);
        assert_eq!(shares.len(), Column::all().len());
        assert!(shares.iter().all(|(_, p)| *p == 0.0));
    }

    #[test]
    fn test_truth_books_keeps_order() {
        let mut a = record("a.txt", 0, 0);
        let b     = record("b.txt", 0, 0);
        let mut c = record("c.txt", 0, 0);
        a.truth_mentioned_twice_plus = Some(true);
        c.truth_mentioned_twice_plus = Some(true);

        let records = [a, b, c];
        let flagged = truth_books(&records);
        let names: Vec<&str> = flagged.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "c.txt"]);
    }

    #[test]
    fn test_max_keeps_first_on_tie() {
        let records = [record("a.txt", 5, 10), record("b.txt", 9, 30), record("c.txt", 9, 30)];
        assert_eq!(max_by_dialogue(&records).unwrap().filename, "b.txt");
        assert_eq!(max_by_length(&records).unwrap().filename, "b.txt");
    }

    #[test]
    fn test_max_of_empty_is_none() {
        assert!(max_by_dialogue(&[]).is_none());
        assert!(max_by_length(&[]).is_none());
    }

    #[test]
    fn test_language_distribution_ignores_absent() {
        let mut records = Vec::new();
        for (i, lang) in ["English", "English", "French", "German"].iter().enumerate() {
            let mut r = record(&format!("{i}.txt"), 0, 0);
            r.header.set(HeaderField::Language, *lang);
            records.push(r);
        }
        records.push(record("none.txt", 0, 0));

        let dist = language_distribution(&records);
        assert_eq!(dist[0], ("English".to_string(), 50.0));
        assert_eq!(dist[1], ("French".to_string(), 25.0));
        assert_eq!(dist[2], ("German".to_string(), 25.0));
    }
}
