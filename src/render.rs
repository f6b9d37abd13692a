//! Output formats for a finished placement chain.
//!
//! [`ResultPrinter`] prints the puzzle the way a solver sees it: one word per paragraph,
//! each letter tagged with the square it was played on. [`format_grid`] prints the board
//! itself, tab-separated, for pasting into a spreadsheet.

use crate::board::{BoardLayout, Bonus, BOARD_SIZE};
use crate::search::{letter_grid, PlacedWord, SearchError};

const FOREGROUND_BLACK: &str = "\u{1b}[30m";
const FOREGROUND_DEFAULT: &str = "\u{1b}[39m";
const BACKGROUND_DEFAULT: &str = "\u{1b}[49m";

pub const GRID_START: &str = "VVV Start copying below VVV";
pub const GRID_END: &str = "^^^ Stop copying above ^^^";

/// What a letter's square contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMarker {
    Plain,
    /// The center square, under the first word.
    StartingSquare,
    /// A square an earlier word already used.
    Reused,
    DoubleWord,
    TripleWord,
    DoubleLetter,
    TripleLetter,
}

impl LetterMarker {
    fn from_bonus(bonus: Bonus) -> Self {
        match bonus {
            Bonus::Plain => LetterMarker::Plain,
            Bonus::Center => LetterMarker::StartingSquare,
            Bonus::DoubleWord => LetterMarker::DoubleWord,
            Bonus::TripleWord => LetterMarker::TripleWord,
            Bonus::DoubleLetter => LetterMarker::DoubleLetter,
            Bonus::TripleLetter => LetterMarker::TripleLetter,
        }
    }

    /// ANSI background color.
    fn background(self) -> &'static str {
        match self {
            LetterMarker::StartingSquare | LetterMarker::DoubleWord => "\u{1b}[105m",
            LetterMarker::Reused => "\u{1b}[100m",
            LetterMarker::TripleWord => "\u{1b}[101m",
            LetterMarker::DoubleLetter => "\u{1b}[106m",
            LetterMarker::TripleLetter => "\u{1b}[104m",
            LetterMarker::Plain => "\u{1b}[107m",
        }
    }

    /// Brackets around the letter.
    fn brackets(self) -> (char, char) {
        match self {
            LetterMarker::StartingSquare => ('>', '<'),
            LetterMarker::Reused => ('[', ']'),
            _ => (' ', ' '),
        }
    }
}

/// Markers for every letter of `chain`, one list per word.
///
/// A square shows its bonus only to the first word that covers it; later words see it
/// as [`LetterMarker::Reused`].
pub fn letter_markers(layout: &BoardLayout, chain: &[PlacedWord]) -> Vec<Vec<LetterMarker>> {
    let mut used = [[false; BOARD_SIZE]; BOARD_SIZE];
    chain
        .iter()
        .map(|placed| {
            placed
                .placement
                .cells()
                .map(|cell| {
                    let seen = &mut used[cell.row][cell.col];
                    if std::mem::replace(seen, true) {
                        LetterMarker::Reused
                    } else {
                        LetterMarker::from_bonus(layout.bonus(cell))
                    }
                })
                .collect()
        })
        .collect()
}

/// Text renderer for solutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultPrinter {
    pub colors: bool,
}

impl ResultPrinter {
    pub fn new(colors: bool) -> Self {
        ResultPrinter { colors }
    }

    /// Render `chain`, one word per paragraph, letters uppercase and space separated.
    pub fn print_chain(&self, layout: &BoardLayout, chain: &[PlacedWord]) -> String {
        let mut out = String::new();
        if self.colors {
            out.push_str(FOREGROUND_BLACK);
        }

        for (placed, markers) in chain.iter().zip(letter_markers(layout, chain)) {
            let letters: Vec<String> = placed
                .word
                .chars()
                .zip(markers)
                .map(|(letter, marker)| self.letter(letter, marker))
                .collect();
            out.push_str(&letters.join(" "));
            out.push_str("\n\n");
        }

        if self.colors {
            out.push_str(FOREGROUND_DEFAULT);
        }
        out
    }

    fn letter(&self, letter: char, marker: LetterMarker) -> String {
        let (open, close) = marker.brackets();
        let mut out = String::new();
        if self.colors {
            out.push_str(marker.background());
        }
        out.push(open);
        out.extend(letter.to_uppercase());
        out.push(close);
        if self.colors {
            out.push_str(BACKGROUND_DEFAULT);
        }
        out
    }
}

/// The letters of `chain` as a tab-separated board between copy markers.
///
/// # Errors
///
/// The invariant violations of [`letter_grid`].
pub fn format_grid(chain: &[PlacedWord]) -> Result<String, SearchError> {
    let grid = letter_grid(chain)?;
    let mut out = String::from(GRID_START);
    out.push('\n');
    for row in &grid {
        let cells: Vec<String> = row
            .iter()
            .map(|square| square.map(|c| c.to_uppercase().to_string()).unwrap_or_default())
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out.push_str(GRID_END);
    Ok(out)
}
