//! User-input error types with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E010) for documentation lookup:
//!
//! - E001: `FileNotFound` (Input file does not exist)
//! - E002: `FileRead` (Input file could not be read)
//! - E003: `InvalidValueLine` (Malformed letter values line)
//! - E004: `NonPositiveValue` (Letter value is zero or negative)
//! - E005: `ValueTooLarge` (Letter value does not fit the score range)
//! - E006: `EmptyValueTable` (No letter values given)
//! - E007: `InvalidPlaintextChar` (Plaintext contains a non-letter)
//! - E008: `InvalidScoreCode` (Code list entry is not a number)
//! - E009: `ZeroModulo` (Modulo base of zero)
//! - E010: `InvalidLayout` (Malformed board layout row)
//!
//! Internal invariant violations are not user-input errors; they live in
//! [`crate::search::SearchError`].
//!
//! # Examples
//!
//! ```
//! use scrabblegram::errors::InputError;
//!
//! let err = InputError::NonPositiveValue { letter: 'q', value: 0 };
//! assert_eq!(err.code(), "E004");
//! println!("{}", err.display_detailed());
//! ```

use std::io;

/// Errors caused by malformed input data: files, letter values, plaintext or codes.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    #[error("Error reading file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid letter values line {line_number}: \"{line}\"")]
    InvalidValueLine { line_number: usize, line: String },

    #[error("Letter '{letter}' has non-positive value {value}")]
    NonPositiveValue { letter: char, value: i64 },

    #[error("Letter '{letter}' has value {value}, above the maximum of {max}", max = u16::MAX)]
    ValueTooLarge { letter: char, value: i64 },

    #[error("Letter values table is empty")]
    EmptyValueTable,

    #[error("Invalid plaintext character '{invalid_char}' (only letters a-z allowed)")]
    InvalidPlaintextChar { invalid_char: char },

    #[error("Invalid score code \"{input}\"")]
    InvalidScoreCode { input: String },

    #[error("Modulo base must be positive")]
    ZeroModulo,

    #[error("Invalid board layout row {row}: {reason}")]
    InvalidLayout { row: usize, reason: String },
}

impl InputError {
    /// Map an I/O failure on `path` to the matching input error.
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            InputError::FileNotFound { path }
        } else {
            InputError::FileRead { path, source }
        }
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileNotFound { .. } => "E001",
            InputError::FileRead { .. } => "E002",
            InputError::InvalidValueLine { .. } => "E003",
            InputError::NonPositiveValue { .. } => "E004",
            InputError::ValueTooLarge { .. } => "E005",
            InputError::EmptyValueTable => "E006",
            InputError::InvalidPlaintextChar { .. } => "E007",
            InputError::InvalidScoreCode { .. } => "E008",
            InputError::ZeroModulo => "E009",
            InputError::InvalidLayout { .. } => "E010",
        }
    }

    /// Returns a short description of this error type (for documentation)
    pub fn description(&self) -> &'static str {
        match self {
            InputError::FileNotFound { .. } => "Input file does not exist",
            InputError::FileRead { .. } => "Input file could not be read",
            InputError::InvalidValueLine { .. } => "Malformed letter values line",
            InputError::NonPositiveValue { .. } => "Letter value is zero or negative",
            InputError::ValueTooLarge { .. } => "Letter value does not fit the score range",
            InputError::EmptyValueTable => "No letter values given",
            InputError::InvalidPlaintextChar { .. } => "Plaintext contains a non-letter",
            InputError::InvalidScoreCode { .. } => "Code list entry is not a number",
            InputError::ZeroModulo => "Modulo base of zero",
            InputError::InvalidLayout { .. } => "Malformed board layout row",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    pub fn details(&self) -> &'static str {
        match self {
            InputError::FileNotFound { .. } => "The dictionary or letter values file passed on the command line (or the default under data/) does not exist.",
            InputError::FileRead { .. } => "The file exists but could not be read, for example because of permissions or invalid UTF-8.",
            InputError::InvalidValueLine { .. } => "Every non-blank line of the letter values file must be a single lowercase letter (accented letters such as 'č' are allowed), whitespace, and an integer.",
            InputError::NonPositiveValue { .. } => "Letter values must be at least 1; a letter worth nothing cannot be told apart by score.",
            InputError::ValueTooLarge { .. } => "Scores are stored as 16-bit unsigned integers.",
            InputError::EmptyValueTable => "The letter values file contained no letters, so no word can be scored.",
            InputError::InvalidPlaintextChar { .. } => "The plaintext is encoded letter by letter (a = 0 ... z = 25); digits, spaces and punctuation have no code.",
            InputError::InvalidScoreCode { .. } => "With --codes the input must be a comma-separated list of non-negative integers.",
            InputError::ZeroModulo => "Scores are searched in the residue class of each code; a base of zero has no residue classes.",
            InputError::InvalidLayout { .. } => "A board layout is 15 rows of 15 squares drawn from '.', 'd', 't', 'D', 'T' and '*'.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::FileNotFound { .. } => Some("Check the path, or pass --dictionary / --letter-values explicitly"),
            InputError::InvalidValueLine { .. } => Some("Expected format: one 'letter value' pair per line (e.g., 'q 10' or 'ř 4')"),
            InputError::NonPositiveValue { .. } => Some("Give every letter a value of 1 or more"),
            InputError::EmptyValueTable => Some("Add one 'letter value' line per playable letter (e.g., 'a 1')"),
            InputError::InvalidPlaintextChar { .. } => Some("Use only letters a-z in the plaintext (e.g., 'hello')"),
            InputError::InvalidScoreCode { .. } => Some("Example: --codes '7,4,11,11,14'"),
            InputError::ZeroModulo => Some("Use a positive base (26 for plaintext), or --exact to disable modulo mode"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
