//! The letter → score table.
//!
//! The table is read from a text file with one `letter value` pair per line:
//!
//! ```text
//! a 1
//! b 3
//! q 10
//! ```
//!
//! Letters may be any lowercase letter, accented ones included (`č 2`). Blank lines are
//! ignored. Anything else that is not a single lowercase letter followed
//! by whitespace and an integer is rejected with the offending line number, and values
//! must be positive. A letter listed twice keeps its last value.
//!
//! Iteration order is alphabetical, which keeps starting-word enumeration deterministic.

use crate::errors::InputError;
use nom::{
    character::complete::{i64 as integer, satisfy, space1},
    combinator::{all_consuming, map},
    IResult, Parser,
};
use std::collections::BTreeMap;

/// Immutable mapping from lowercase letter to its positive score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValueTable {
    values: BTreeMap<char, u16>,
}

/// `letter <whitespace> integer`
fn value_line(input: &str) -> IResult<&str, (char, i64)> {
    map(
        (satisfy(char::is_lowercase), space1, integer),
        |(letter, _, value)| (letter, value),
    )
    .parse(input)
}

impl LetterValueTable {
    /// Parse a letter values table from an in-memory string.
    ///
    /// # Errors
    ///
    /// - [`InputError::InvalidValueLine`] for a line that is not `letter value`
    /// - [`InputError::NonPositiveValue`] / [`InputError::ValueTooLarge`] for out-of-range values
    /// - [`InputError::EmptyValueTable`] when no line defines a letter
    pub fn parse_from_str(contents: &str) -> Result<Self, InputError> {
        let mut values = BTreeMap::new();

        for (i, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let (_, (letter, value)) = all_consuming(value_line)
                .parse(line)
                .map_err(|_| InputError::InvalidValueLine {
                    line_number: i + 1,
                    line: line.to_string(),
                })?;

            if value <= 0 {
                return Err(InputError::NonPositiveValue { letter, value });
            }
            let value = u16::try_from(value).map_err(|_| InputError::ValueTooLarge { letter, value })?;
            values.insert(letter, value);
        }

        if values.is_empty() {
            return Err(InputError::EmptyValueTable);
        }

        log::debug!("parsed {} letter values", values.len());
        Ok(LetterValueTable { values })
    }

    /// Read a letter values table from a file.
    ///
    /// # Errors
    ///
    /// [`InputError::FileNotFound`] / [`InputError::FileRead`] when the file cannot be
    /// read, otherwise the errors of [`LetterValueTable::parse_from_str`].
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, InputError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| InputError::from_io(path_ref, e))?;
        Self::parse_from_str(&data)
    }

    /// Score of `letter`, or `None` for a letter with no value (only playable as a blank).
    pub fn get(&self, letter: char) -> Option<u16> {
        self.values.get(&letter).copied()
    }

    /// Letters with a value, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(char, u16)> for LetterValueTable {
    fn from_iter<I: IntoIterator<Item = (char, u16)>>(iter: I) -> Self {
        LetterValueTable { values: iter.into_iter().collect() }
    }
}
