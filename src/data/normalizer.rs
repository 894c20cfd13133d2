// ============================================================
// Layer 4: Word-Frequency Normaliser
// ============================================================
// Prepares body text for simple word counting.
//
// Normalisation steps (applied in order):
//   1. Every maximal run of characters that is NOT an ASCII
//      letter, ASCII digit, or '.' becomes a single space
//   2. The result is lowercased
//
// So "He said, “Truth!”" becomes "he said truth ".
//
// The normalised text is only used for counting; it is never
// stored in a record.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Collapse non-word runs to one space and lowercase.
    pub fn normalize(&self, text: &str) -> String {
        let mut out    = String::with_capacity(text.len());
        let mut in_run = false;

        for c in text.chars() {
            if c.is_ascii_alphanumeric() || c == '.' {
                // Only ASCII survives, so ASCII lowercasing is enough
                out.push(c.to_ascii_lowercase());
                in_run = false;
            } else if !in_run {
                out.push(' ');
                in_run = true;
            }
        }

        out
    }

    /// Count non-overlapping occurrences of `needle`, left to right.
    /// An empty needle never matches.
    pub fn count_occurrences(&self, haystack: &str, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        haystack.matches(needle).count()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
