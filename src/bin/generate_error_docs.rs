//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `InputError` and `SearchError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use scrabblegram::errors::InputError;
use scrabblegram::search::SearchError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `InputError` variants for documentation
fn all_input_error_variants() -> Vec<InputError> {
    vec![
        InputError::FileNotFound { path: "data/dictionary.txt".to_string() },
        InputError::FileRead {
            path: "data/dictionary.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        },
        InputError::InvalidValueLine { line_number: 3, line: "qu 10".to_string() },
        InputError::NonPositiveValue { letter: 'e', value: 0 },
        InputError::ValueTooLarge { letter: 'z', value: 100_000 },
        InputError::EmptyValueTable,
        InputError::InvalidPlaintextChar { invalid_char: '4' },
        InputError::InvalidScoreCode { input: "x".to_string() },
        InputError::ZeroModulo,
        InputError::InvalidLayout { row: 4, reason: "unknown square 'X'".to_string() },
    ]
}

/// Helper to create all `SearchError` variants for documentation
fn all_search_error_variants() -> Vec<SearchError> {
    vec![
        SearchError::InvalidInput(InputError::InvalidPlaintextChar { invalid_char: '4' }),
        SearchError::EmptyTargets,
        SearchError::OverlappingLetters { col: 7, row: 7, existing: 't', incoming: 'o' },
        SearchError::PlacementOutOfBounds { word: "boats".to_string(), col: 15, row: 7 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Search Errors (S001–S004)](#search-errors)");
    println!("- [Input Errors (E001–E010)](#input-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Search Errors\n");
    println!("Top-level errors from the search. These wrap input errors or report internal invariant violations.\n");
    generate_error_docs!(all_search_error_variants());

    println!("## Input Errors\n");
    println!("Errors in the data files, the plaintext or the code list.\n");
    generate_error_docs!(all_input_error_variants());

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: {}", InputError::ZeroModulo.display_detailed());
    println!("```\n");
    println!("1. Note the error code (e.g., `E009`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}
