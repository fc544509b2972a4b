//! `dictionary` — Module to load and index the word list for the solver.
//!
//! This module reads a newline-delimited word list (from a file, or from an
//! in-memory string) into a `DictionaryIndex`: a membership set the solver
//! queries once per candidate string, plus a bounded prefix set that lets
//! the traversal abandon branches no dictionary entry starts with.
//!
//! The parsing logic:
//! - Each line holds one word; surrounding whitespace is trimmed.
//! - Empty lines are skipped silently.
//! - Lines containing anything but ASCII letters are skipped (the solver
//!   only ever produces candidates over a-z).
//! - All words are normalized to lowercase.
//!
//! The prefix set stores every prefix of every word, truncated to
//! `max_prefix_len` characters. A traversal capped at that length can
//! therefore treat "not a stored prefix" as "no entry can ever start this
//! way". Queries longer than the cap report `true` (no pruning
//! information), so membership filtering stays the sole arbiter of
//! correctness.

use std::collections::HashSet;

/// Read-only membership oracle over a set of valid words, with a bounded
/// prefix index for traversal pruning.
///
/// Built once before a run and treated as immutable for its duration.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    words: HashSet<String>,
    prefixes: HashSet<String>,
    max_prefix_len: usize,
}

impl DictionaryIndex {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents`       — The raw list, one word per line.
    /// * `max_prefix_len` — Longest prefix worth indexing; pass the run's
    ///   maximum word size, since the traversal never asks about anything
    ///   longer.
    pub fn parse_from_str(contents: &str, max_prefix_len: usize) -> DictionaryIndex {
        let mut skipped = 0usize;
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else if line.chars().all(|c| c.is_ascii_alphabetic()) {
                    Some(line.to_lowercase())
                } else {
                    // Not representable on the board; drop it.
                    skipped += 1;
                    None
                }
            });
        let index = Self::from_words_inner(words, max_prefix_len);
        if skipped > 0 {
            log::debug!("Skipped {skipped} non-alphabetic word-list lines");
        }
        index
    }

    /// Build an index directly from an iterator of words. Words are
    /// lowercased; no other filtering is applied. Mostly useful for tests
    /// and embedding callers that already hold a word set.
    pub fn from_words<I, S>(words: I, max_prefix_len: usize) -> DictionaryIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_inner(
            words.into_iter().map(|w| w.as_ref().to_lowercase()),
            max_prefix_len,
        )
    }

    fn from_words_inner(words: impl Iterator<Item = String>, max_prefix_len: usize) -> DictionaryIndex {
        let mut word_set = HashSet::new();
        let mut prefixes = HashSet::new();

        for word in words {
            if word.is_empty() {
                continue;
            }
            // Index every prefix up to the cap; a word longer than the cap
            // still contributes its first max_prefix_len prefixes. Prefix
            // ends are char boundaries, so from_words stays total even for
            // input outside a-z.
            let ends = word
                .char_indices()
                .map(|(i, _)| i)
                .skip(1)
                .chain(std::iter::once(word.len()));
            for end in ends.take(max_prefix_len) {
                if !prefixes.contains(&word[..end]) {
                    prefixes.insert(word[..end].to_string());
                }
            }
            word_set.insert(word);
        }

        DictionaryIndex { words: word_set, prefixes, max_prefix_len }
    }

    /// Native-only convenience method: read a word list from a file path
    /// and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        max_prefix_len: usize,
    ) -> std::io::Result<DictionaryIndex> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data, max_prefix_len))
    }

    /// Exact membership test. Case-sensitive; callers query lowercase only.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether some dictionary entry starts with `prefix`. For prefixes
    /// longer than the indexed cap this conservatively answers `true`.
    #[must_use]
    pub fn is_prefix(&self, prefix: &str) -> bool {
        if prefix.len() > self.max_prefix_len {
            return true;
        }
        self.prefixes.contains(prefix)
    }

    /// Number of indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the index holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let index = DictionaryIndex::parse_from_str("cat\ndog\nbird", 10);

        assert_eq!(index.len(), 3);
        assert!(index.contains("cat"));
        assert!(index.contains("dog"));
        assert!(index.contains("bird"));
        assert!(!index.contains("fish"));
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let index = DictionaryIndex::parse_from_str("CAT\nDog", 10);

        assert!(index.contains("cat"));
        assert!(index.contains("dog"));
        assert!(!index.contains("CAT"));
    }

    #[test]
    fn test_parse_skips_empty_and_non_alphabetic_lines() {
        let index = DictionaryIndex::parse_from_str("cat\n\n  \nit's\nx9\ndog\n", 10);

        assert_eq!(index.len(), 2);
        assert!(index.contains("cat"));
        assert!(index.contains("dog"));
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let index = DictionaryIndex::parse_from_str("  cat  \n\tdog\t", 10);

        assert!(index.contains("cat"));
        assert!(index.contains("dog"));
    }

    #[test]
    fn test_parse_empty_input() {
        let index = DictionaryIndex::parse_from_str("", 10);

        assert!(index.is_empty());
    }

    #[test]
    fn test_duplicate_words_are_stored_once() {
        let index = DictionaryIndex::parse_from_str("cat\nCAT\ncat", 10);

        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_prefixes_cover_every_word_start() {
        let index = DictionaryIndex::parse_from_str("cart\ncat", 10);

        for p in ["c", "ca", "car", "cart", "cat"] {
            assert!(index.is_prefix(p), "'{p}' should be a prefix");
        }
        assert!(!index.is_prefix("co"));
        assert!(!index.is_prefix("art"));
    }

    #[test]
    fn test_prefixes_truncated_at_cap() {
        let index = DictionaryIndex::parse_from_str("elephant", 4);

        assert!(index.is_prefix("e"));
        assert!(index.is_prefix("elep"));
        // beyond the cap: no information, conservatively true
        assert!(index.is_prefix("elepx"));
        // full membership is unaffected by the cap
        assert!(index.contains("elephant"));
    }

    #[test]
    fn test_from_words_lowercases() {
        let index = DictionaryIndex::from_words(["Word", "HUNT"], 10);

        assert!(index.contains("word"));
        assert!(index.contains("hunt"));
        assert!(index.is_prefix("wo"));
    }
}
