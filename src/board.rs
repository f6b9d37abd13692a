//! Board geometry: the fixed 15×15 bonus layout, cells, axes and word placements.
//!
//! The layout is the standard Scrabble board. It is declared as text rows and parsed
//! once into [`STANDARD_LAYOUT`]; everything else in the crate reads it through
//! [`BoardLayout::bonus`] and [`BoardLayout::bonus_pattern`].

use crate::errors::InputError;
use crate::score_index::Score;
use std::sync::LazyLock;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;
/// Row and column of the center square (the starting square).
pub const CENTER: usize = 7;
/// Shortest word accepted by the index.
pub const MIN_WORD_LENGTH: usize = 2;
/// Longest word accepted by the index.
///
/// Raising this requires revisiting the bonus combinations generated by the index:
/// longer runs can cover bonus pairs at other distances.
pub const MAX_WORD_LENGTH: usize = 5;

// T = triple word, D = double word, t = triple letter, d = double letter, * = center
const STANDARD_ROWS: [&str; BOARD_SIZE] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...*...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

/// The standard board, parsed on first use.
pub static STANDARD_LAYOUT: LazyLock<BoardLayout> = LazyLock::new(|| {
    BoardLayout::from_rows(&STANDARD_ROWS).expect("built-in board layout should be well-formed")
});

/// Kind of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bonus {
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The starting square; scores as a double word.
    Center,
}

impl Bonus {
    fn from_layout_char(c: char) -> Option<Bonus> {
        match c {
            '.' => Some(Bonus::Plain),
            'd' => Some(Bonus::DoubleLetter),
            't' => Some(Bonus::TripleLetter),
            'D' => Some(Bonus::DoubleWord),
            'T' => Some(Bonus::TripleWord),
            '*' => Some(Bonus::Center),
            _ => None,
        }
    }

    /// Multiplier applied to the whole word when a new letter lands here.
    pub fn word_multiplier(self) -> Score {
        match self {
            Bonus::DoubleWord | Bonus::Center => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

/// Direction a word is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A square on the board, `(col, row)` with `(0, 0)` at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Cell { col, row }
    }

    /// Move `delta` squares along `axis`; `None` when that leaves the board.
    pub fn step(self, axis: Axis, delta: isize) -> Option<Cell> {
        let shift = |coord: usize| {
            coord
                .checked_add_signed(delta)
                .filter(|&moved| moved < BOARD_SIZE)
        };
        match axis {
            Axis::Horizontal => shift(self.col).map(|col| Cell { col, row: self.row }),
            Axis::Vertical => shift(self.row).map(|row| Cell { col: self.col, row }),
        }
    }

    pub fn is_on_board(self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }
}

/// Where a word sits: first letter, reading direction and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub origin: Cell,
    pub axis: Axis,
    pub length: usize,
}

impl Placement {
    pub fn new(origin: Cell, axis: Axis, length: usize) -> Self {
        Placement { origin, axis, length }
    }

    /// The `i`-th letter square. May lie off the board if the placement does not fit.
    pub fn cell_at(&self, i: usize) -> Cell {
        match self.axis {
            Axis::Horizontal => Cell::new(self.origin.col + i, self.origin.row),
            Axis::Vertical => Cell::new(self.origin.col, self.origin.row + i),
        }
    }

    /// Letter squares in reading order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.length).map(move |i| self.cell_at(i))
    }

    /// True when every letter square is on the board.
    pub fn fits(&self) -> bool {
        self.length > 0 && self.cell_at(self.length - 1).is_on_board()
    }
}

/// Letter bonuses and word multiplier a placement picks up from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusPattern {
    /// Word indices standing on double-letter squares.
    pub doubled: Vec<usize>,
    /// Word indices standing on triple-letter squares.
    pub tripled: Vec<usize>,
    pub word_multiplier: Score,
}

/// Static table of square kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    squares: [[Bonus; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardLayout {
    /// Parse a layout from `BOARD_SIZE` rows of `BOARD_SIZE` characters each.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidLayout`] for a row of the wrong width or an
    /// unknown square character.
    pub fn from_rows(rows: &[&str; BOARD_SIZE]) -> Result<Self, InputError> {
        let mut squares = [[Bonus::Plain; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != BOARD_SIZE {
                return Err(InputError::InvalidLayout {
                    row,
                    reason: format!("expected {BOARD_SIZE} squares, found {}", text.chars().count()),
                });
            }
            for (col, c) in text.chars().enumerate() {
                squares[row][col] = Bonus::from_layout_char(c).ok_or_else(|| InputError::InvalidLayout {
                    row,
                    reason: format!("unknown square '{c}'"),
                })?;
            }
        }
        Ok(BoardLayout { squares })
    }

    /// The standard Scrabble board.
    pub fn standard() -> &'static BoardLayout {
        &STANDARD_LAYOUT
    }

    pub fn bonus(&self, cell: Cell) -> Bonus {
        self.squares[cell.row][cell.col]
    }

    /// Bonuses earned by the new letters of `placement`.
    ///
    /// The square at `overlap_index` already holds a letter from an earlier word, so it
    /// contributes neither a letter bonus nor a word multiplier.
    #[must_use]
    pub fn bonus_pattern(&self, placement: &Placement, overlap_index: usize) -> BonusPattern {
        debug_assert!(placement.fits(), "placement {placement:?} must lie on the board");

        let mut pattern = BonusPattern {
            doubled: Vec::new(),
            tripled: Vec::new(),
            word_multiplier: 1,
        };
        for (i, cell) in placement.cells().enumerate() {
            if i == overlap_index {
                continue;
            }
            match self.bonus(cell) {
                Bonus::DoubleLetter => pattern.doubled.push(i),
                Bonus::TripleLetter => pattern.tripled.push(i),
                other => pattern.word_multiplier *= other.word_multiplier(),
            }
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_landmarks() {
        let layout = BoardLayout::standard();
        assert_eq!(layout.bonus(Cell::new(CENTER, CENTER)), Bonus::Center);
        assert_eq!(layout.bonus(Cell::new(0, 0)), Bonus::TripleWord);
        assert_eq!(layout.bonus(Cell::new(3, 7)), Bonus::DoubleLetter);
        assert_eq!(layout.bonus(Cell::new(11, 7)), Bonus::DoubleLetter);
        assert_eq!(layout.bonus(Cell::new(5, 1)), Bonus::TripleLetter);
        assert_eq!(layout.bonus(Cell::new(4, 4)), Bonus::DoubleWord);
        assert_eq!(layout.bonus(Cell::new(6, 7)), Bonus::Plain);
    }

    #[test]
    fn test_standard_layout_is_symmetric() {
        let layout = BoardLayout::standard();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let here = layout.bonus(Cell::new(col, row));
                assert_eq!(here, layout.bonus(Cell::new(row, col)), "diagonal mirror at ({col}, {row})");
                assert_eq!(here, layout.bonus(Cell::new(BOARD_SIZE - 1 - col, row)), "horizontal mirror at ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_rows() {
        let mut rows = STANDARD_ROWS;
        rows[4] = "....D.....D...";
        assert!(matches!(
            BoardLayout::from_rows(&rows),
            Err(InputError::InvalidLayout { row: 4, .. })
        ));

        let mut rows = STANDARD_ROWS;
        rows[2] = "..D...d.d...X..";
        assert!(matches!(
            BoardLayout::from_rows(&rows),
            Err(InputError::InvalidLayout { row: 2, .. })
        ));
    }

    #[test]
    fn test_cell_step_stays_on_board() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.step(Axis::Horizontal, -1), None);
        assert_eq!(corner.step(Axis::Vertical, 2), Some(Cell::new(0, 2)));
        let edge = Cell::new(BOARD_SIZE - 1, 3);
        assert_eq!(edge.step(Axis::Horizontal, 1), None);
        assert_eq!(edge.step(Axis::Horizontal, -4), Some(Cell::new(BOARD_SIZE - 5, 3)));
    }

    #[test]
    fn test_placement_cells_and_fit() {
        let down = Placement::new(Cell::new(2, 12), Axis::Vertical, 3);
        let cells: Vec<Cell> = down.cells().collect();
        assert_eq!(cells, vec![Cell::new(2, 12), Cell::new(2, 13), Cell::new(2, 14)]);
        assert!(down.fits());
        assert!(!Placement::new(Cell::new(2, 12), Axis::Vertical, 4).fits());
    }

    #[test]
    fn test_bonus_pattern_skips_overlap_square() {
        let layout = BoardLayout::standard();
        // Row 7, columns 3..=7: double letter at index 0, center at index 4.
        let across = Placement::new(Cell::new(3, 7), Axis::Horizontal, 5);
        let pattern = layout.bonus_pattern(&across, 1);
        assert_eq!(pattern.doubled, vec![0]);
        assert!(pattern.tripled.is_empty());
        assert_eq!(pattern.word_multiplier, 2);

        // Same squares, but the center letter is already on the board.
        let pattern = layout.bonus_pattern(&across, 4);
        assert_eq!(pattern.doubled, vec![0]);
        assert_eq!(pattern.word_multiplier, 1);
    }

    #[test]
    fn test_bonus_pattern_triple_letter_pair() {
        let layout = BoardLayout::standard();
        // Row 5 has triple letters at columns 1 and 5, five squares apart inclusive.
        let across = Placement::new(Cell::new(1, 5), Axis::Horizontal, 5);
        let pattern = layout.bonus_pattern(&across, 2);
        assert_eq!(pattern.tripled, vec![0, 4]);
        assert!(pattern.doubled.is_empty());
        assert_eq!(pattern.word_multiplier, 1);
    }
}
