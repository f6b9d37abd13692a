//! Loading and normalizing the dictionary.
//!
//! The dictionary is a plain text file with one word per line (the format distributed by
//! word-game associations, usually uppercase). It can also be parsed from an in-memory
//! string, which is what the tests use.
//!
//! The parsing logic:
//! - Lines are trimmed; empty lines are skipped.
//! - All words are normalized to lowercase.
//! - The final list is deduplicated and sorted by length first, then alphabetically.
//!
//! Length and alphabet checks are NOT done here: the word score index knows the board
//! constraints and the letter values, so it is the one that drops (and reports) words it
//! cannot use.

use crate::errors::InputError;

/// Struct representing a processed, ready-to-index dictionary.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words, deduplicated, sorted by (letter count, alphabetical).
    /// Example: `["at", "bat", "tab", "boats"]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a dictionary from an in-memory string.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each line.
    /// 2. Skips empty lines.
    /// 3. Converts each word to lowercase.
    /// 4. Deduplicates the list (case-insensitive because we lowercase early).
    /// 5. Sorts by length, then alphabetically.
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect();

        // `dedup()` only removes *adjacent* duplicates, so sort alphabetically first
        words.sort();
        words.dedup();

        words.sort_by_cached_key(|word| (word.chars().count(), word.clone()));

        WordList { words }
    }

    /// Read a dictionary file from disk and parse it.
    ///
    /// # Errors
    ///
    /// Will return [`InputError::FileNotFound`] or [`InputError::FileRead`] if the file at
    /// `path` cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, InputError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| InputError::from_io(path_ref, e))?;
        Ok(Self::parse_from_str(&data))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
