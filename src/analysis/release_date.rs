// ============================================================
// Layer 5: Release Date Cleaning
// ============================================================
// Release dates in book headers are free text, e.g.
//
//   "August 20, 2006 [EBook #102]"
//   "August 1997"
//   "March, 2004  [EBook #11543]  [Most recently updated: ...]"
//
// Cleaning steps:
//   1. strip_annotation   → drop everything from the first '['
//                           (when a ']' follows it), then trim
//   2. insert_year_comma  → "August 1997" becomes "August, 1997"
//
// The year is read from the last four characters of the
// stripped string. Anything that is not four ASCII digits there
// is treated as "no year" and left out of the statistics.

use std::collections::BTreeMap;

use crate::domain::book::BookRecord;

/// Remove a trailing bracketed annotation and surrounding whitespace.
pub fn strip_annotation(date: &str) -> &str {
    let cut = match date.find('[') {
        Some(open) if date[open + 1..].contains(']') => &date[..open],
        _ => date,
    };
    cut.trim()
}

/// Insert a comma between a word character and a following
/// " dddd" group, for every such place, scanning left to right
/// without overlap. "August 1997" → "August, 1997".
pub fn insert_year_comma(date: &str) -> String {
    let chars: Vec<char> = date.chars().collect();
    let mut out          = String::with_capacity(date.len() + 1);
    let mut i            = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if is_word_char(c) && starts_year_group(&chars[i + 1..]) {
            out.push(c);
            out.push(',');
            // Copy the space and the four digits as one unit
            out.extend(&chars[i + 1..i + 6]);
            i += 6;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// Full cleaning used for the most-common-date statistic
pub fn normalize_release_date(date: &str) -> String {
    insert_year_comma(strip_annotation(date))
}

/// Year taken from the last four characters of the stripped date.
pub fn release_year(date: &str) -> Option<i32> {
    let stripped         = strip_annotation(date);
    let chars: Vec<char> = stripped.chars().collect();

    if chars.len() < 4 {
        return None;
    }
    let tail = &chars[chars.len() - 4..];
    if !tail.iter().all(char::is_ascii_digit) {
        return None;
    }

    tail.iter().collect::<String>().parse().ok()
}

/// Most frequent normalised release dates. Ties are all returned,
/// sorted; an empty corpus (or one without dates) yields nothing.
pub fn release_date_modes(records: &[BookRecord]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for date in records.iter().filter_map(|r| r.header.release_date.as_deref()) {
        *counts.entry(normalize_release_date(date)).or_insert(0) += 1;
    }

    let Some(&top) = counts.values().max() else {
        return Vec::new();
    };

    // BTreeMap iteration is already sorted by key
    counts
        .into_iter()
        .filter(|&(_, n)| n == top)
        .map(|(date, _)| date)
        .collect()
}

/// Mean of every parseable release year
pub fn mean_release_year(records: &[BookRecord]) -> Option<f64> {
    let years: Vec<i32> = records
        .iter()
        .filter_map(|r| r.header.release_date.as_deref())
        .filter_map(release_year)
        .collect();

    if years.is_empty() {
        return None;
    }

    let sum: i64 = years.iter().map(|&y| i64::from(y)).sum();
    Some(sum as f64 / years.len() as f64)
}

/// `\w` in the usual regex sense: letters, digits, underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Does `rest` begin with a space followed by four ASCII digits?
fn starts_year_group(rest: &[char]) -> bool {
    rest.len() >= 5 && rest[0] == ' ' && rest[1..5].iter().all(char::is_ascii_digit)
}
