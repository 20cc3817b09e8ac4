//! `word_list` — Load and preprocess the dictionary for the word finder.
//!
//! The input format is the classic one-word-per-line list (CROSSWD.TXT and
//! friends): each line is a word, surrounding whitespace is ignored, blank
//! lines are skipped. No scores, no annotations.
//!
//! Lines are kept verbatim here. Case folding, stripping of non-alphabetic
//! characters, and deduplication all happen inside the [`Trie`] when the
//! list is inserted (see the policy notes on [`crate::trie`]), so this
//! module stays a thin, separately testable reader.
//!
//! The public API splits parsing from I/O:
//! - `parse_from_str(...)` — pure, works on any in-memory string.
//! - `load_from_path(...)` — convenience wrapper that reads a file first.

use crate::trie::Trie;

/// A raw dictionary: one candidate word per entry, in file order.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Non-empty lines of the source, trimmed.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string, one word per line.
    ///
    /// Blank (or whitespace-only) lines are skipped; everything else is
    /// kept as-is. An empty input is a legal, empty dictionary — the solve
    /// then degenerates to an empty result, not an error.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            })
            .collect();
        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!(
                    "failed to read word list from '{}': {}",
                    path_ref.display(),
                    e
                ),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Insert every word into a fresh [`Trie`].
    #[must_use]
    pub fn build_trie(&self) -> Trie {
        let mut trie = Trie::new();
        for word in &self.words {
            trie.add(word);
        }
        log::debug!(
            "built trie: {} distinct words from {} lines",
            trie.len(),
            self.words.len()
        );
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("CAT\nDOG\nBIRD");
        assert_eq!(list.words, vec!["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let list = WordList::parse_from_str("  CAT  \n\n\n DOG \n");
        assert_eq!(list.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let list = WordList::parse_from_str("");
        assert!(list.words.is_empty());
    }

    #[test]
    fn test_build_trie_folds_case_and_dedups() {
        let list = WordList::parse_from_str("cat\nCAT\nCats");
        let trie = list.build_trie();

        assert_eq!(trie.len(), 2);
        assert!(trie.contains("CAT"));
        assert!(trie.contains("CATS"));
    }

    #[test]
    fn test_build_trie_strips_punctuation() {
        let list = WordList::parse_from_str("re-do\no'clock");
        let trie = list.build_trie();

        assert!(trie.contains("REDO"));
        assert!(trie.contains("OCLOCK"));
    }

    #[test]
    fn test_empty_list_builds_empty_trie() {
        let trie = WordList::parse_from_str("").build_trie();
        assert!(trie.is_empty());
    }
}
