//! Placement search: lay out one word per target score, each crossing an earlier one.
//!
//! The first word goes horizontally through the center square. Every later word crosses
//! exactly one letter of a word already placed, at right angles, on squares nothing else
//! touches. The position of each new word must be fully determined by its score and the
//! letter it shares: when two positions on the board would both fit the same (overlap
//! index, overlap letter, length), neither is used.
//!
//! # Error Handling
//!
//! The search uses [`SearchError`]:
//!
//! - S001: `InvalidInput` (Bad input data (wraps [`InputError`]))
//! - S002: `EmptyTargets` (No target scores to place)
//! - S003: `OverlappingLetters` (Internal error: two letters on one square)
//! - S004: `PlacementOutOfBounds` (Internal error: word leaves the board)
//!
//! # Examples
//!
//! ```
//! use scrabblegram::board::BoardLayout;
//! use scrabblegram::letter_values::LetterValueTable;
//! use scrabblegram::score_index::WordScoreIndex;
//! use scrabblegram::search::PuzzleSearch;
//!
//! let values: LetterValueTable = [('a', 1), ('b', 3), ('o', 1), ('t', 1)].into_iter().collect();
//! let index = WordScoreIndex::build(values, ["bat", "tab", "to"], None)?;
//! let search = PuzzleSearch::new(&index, BoardLayout::standard());
//!
//! // take just the first arrangement; the rest is never explored
//! let first = search.solutions(&[10, 2])?.next();
//! assert!(first.is_some());
//! # Ok::<(), scrabblegram::search::SearchError>(())
//! ```

use crate::board::{Axis, BoardLayout, Cell, Placement, BOARD_SIZE, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::cipher;
use crate::errors::{format_error_with_code_and_help, InputError};
use crate::occupancy::OccupancyGrid;
use crate::score_index::{IndexSet, Score, ScoreKey, Word, WordScoreIndex};
use log::debug;
use std::collections::HashMap;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Errors returned by the search and by chain projection.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Bad input data, e.g. a plaintext with a digit in it.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Nothing to search for.
    #[error("no target scores to place")]
    EmptyTargets,

    /// Two words put different letters on the same square.
    #[error("overlapping words at ({col}, {row}): '{existing}' and '{incoming}'")]
    OverlappingLetters { col: usize, row: usize, existing: char, incoming: char },

    /// A word of the chain does not fit on the board.
    #[error("word '{word}' runs off the board at ({col}, {row})")]
    PlacementOutOfBounds { word: String, col: usize, row: usize },
}

impl SearchError {
    /// True for invariant violations, which indicate a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SearchError::OverlappingLetters { .. } | SearchError::PlacementOutOfBounds { .. }
        )
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => "S001",
            SearchError::EmptyTargets => "S002",
            SearchError::OverlappingLetters { .. } => "S003",
            SearchError::PlacementOutOfBounds { .. } => "S004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => "Bad input data",
            SearchError::EmptyTargets => "No target scores to place",
            SearchError::OverlappingLetters { .. } => "Internal error: two letters on one square",
            SearchError::PlacementOutOfBounds { .. } => "Internal error: word leaves the board",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => "The plaintext, code list or data files could not be turned into a search. This wraps an underlying input error (see Input Errors section for specific error codes).",
            SearchError::EmptyTargets => "The plaintext or code list was empty, so there is no word to place.",
            SearchError::OverlappingLetters { .. } => "Two words of a solution claim the same square with different letters. The occupancy rules should make this impossible; this is a bug in the search.",
            SearchError::PlacementOutOfBounds { .. } => "A word of a solution extends past the edge of the board. Candidate positions are clipped to the board; this is a bug in the search.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::EmptyTargets => Some("Pass at least one letter (e.g., 'hello') or one code (e.g., --codes '7')"),
            SearchError::OverlappingLetters { .. } | SearchError::PlacementOutOfBounds { .. } => {
                Some("This is an internal error (likely bug). Please report the input that triggered it.")
            }
            SearchError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    pub fn display_detailed(&self) -> String {
        match self {
            SearchError::InvalidInput(ie) => {
                // delegate to InputError's detailed display
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// A word and where it sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub placement: Placement,
    pub word: Word,
}

impl PlacedWord {
    /// `(square, letter)` pairs in reading order.
    pub fn letters(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.placement.cells().zip(self.word.chars())
    }
}

/// Words in placement order; index 0 is the starting word.
pub type PlacementChain = Vec<PlacedWord>;

/// Letters of a chain laid out on the board, indexed `[row][col]`.
pub type LetterGrid = [[Option<char>; BOARD_SIZE]; BOARD_SIZE];

/// A position for the next word, crossing the word at chain index `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub placement: Placement,
    /// Index of the shared letter within the new word.
    pub overlap_index: usize,
    /// The shared letter, already on the board.
    pub overlap_letter: char,
    pub source: usize,
}

/// What the score lookup sees of a candidate. Candidates sharing one are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey {
    overlap_index: usize,
    overlap_letter: char,
    length: usize,
}

impl From<&Candidate> for GroupKey {
    fn from(candidate: &Candidate) -> Self {
        GroupKey {
            overlap_index: candidate.overlap_index,
            overlap_letter: candidate.overlap_letter,
            length: candidate.placement.length,
        }
    }
}

/// Search over one index and board layout. Cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleSearch<'a> {
    index: &'a WordScoreIndex,
    layout: &'a BoardLayout,
}

impl<'a> PuzzleSearch<'a> {
    pub fn new(index: &'a WordScoreIndex, layout: &'a BoardLayout) -> Self {
        PuzzleSearch { index, layout }
    }

    /// Lazily enumerate every chain whose `i`-th word scores `targets[i]`.
    ///
    /// Nothing is searched until the iterator is pulled, and dropping it stops the search.
    ///
    /// # Errors
    ///
    /// [`SearchError::EmptyTargets`] for an empty target sequence.
    pub fn solutions(&self, targets: &[Score]) -> Result<Solutions<'a>, SearchError> {
        let Some(&first) = targets.first() else {
            return Err(SearchError::EmptyTargets);
        };

        let openings: Vec<PlacedWord> = self
            .index
            .starting_words(self.layout, first)
            .into_iter()
            .map(|starting| PlacedWord { placement: starting.placement(), word: starting.word })
            .collect();
        debug!("depth 0: {} starting words for score {first}", openings.len());

        let stack = if openings.is_empty() {
            Vec::new()
        } else {
            vec![Frame { depth: 0, grid: OccupancyGrid::new(), choices: openings.into_iter() }]
        };

        Ok(Solutions {
            search: *self,
            targets: targets.to_vec(),
            chain: Vec::with_capacity(targets.len()),
            stack,
        })
    }

    /// Encode `plaintext` and search for it.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidInput`] when the plaintext contains a non-letter, and
    /// [`SearchError::EmptyTargets`] when it is empty.
    pub fn solutions_for_plaintext(&self, plaintext: &str) -> Result<Solutions<'a>, SearchError> {
        let targets = cipher::plaintext_to_targets(plaintext)?;
        self.solutions(&targets)
    }

    /// Unambiguous positions for the next word, given the chain so far.
    ///
    /// For every letter of every placed word, every run of 2 to [`MAX_WORD_LENGTH`] free
    /// squares through that letter, at right angles to its word, is a candidate. Candidates
    /// are then grouped by (overlap index, overlap letter, length) and only groups with a
    /// single position survive. Groups come out in order of first appearance.
    pub fn candidates(&self, chain: &[PlacedWord], grid: &OccupancyGrid) -> Vec<Candidate> {
        let mut groups: Vec<Vec<Candidate>> = Vec::new();
        let mut group_of: HashMap<GroupKey, usize> = HashMap::new();

        for (source, placed) in chain.iter().enumerate() {
            let across = placed.placement.axis.perpendicular();

            for (cell, letter) in placed.letters() {
                let before = free_run(grid, cell, across, -1, source);
                let after = free_run(grid, cell, across, 1, source);

                for lead in 0..=before {
                    for trail in 0..=after {
                        let length = lead + 1 + trail;
                        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
                            continue;
                        }
                        let Some(origin) = isize::try_from(lead).ok().and_then(|lead| cell.step(across, -lead)) else {
                            continue;
                        };
                        let candidate = Candidate {
                            placement: Placement::new(origin, across, length),
                            overlap_index: lead,
                            overlap_letter: letter,
                            source,
                        };

                        let slot = *group_of.entry(GroupKey::from(&candidate)).or_insert_with(|| {
                            groups.push(Vec::new());
                            groups.len() - 1
                        });
                        let group = &mut groups[slot];
                        if !group.iter().any(|other| other.placement == candidate.placement) {
                            group.push(candidate);
                        }
                    }
                }
            }
        }

        groups
            .into_iter()
            .filter(|group| group.len() == 1)
            .flat_map(IntoIterator::into_iter)
            .collect()
    }

    /// Every word that can go next, in candidate order then index order.
    fn extensions(&self, chain: &[PlacedWord], grid: &OccupancyGrid, target: Score) -> Vec<PlacedWord> {
        let candidates = self.candidates(chain, grid);
        let mut found = Vec::new();

        for candidate in &candidates {
            let pattern = self.layout.bonus_pattern(&candidate.placement, candidate.overlap_index);
            let key = ScoreKey::new(
                target,
                candidate.placement.length,
                candidate.overlap_index,
                candidate.overlap_letter,
                pattern.doubled.iter().copied().collect::<IndexSet>(),
                pattern.tripled.iter().copied().collect::<IndexSet>(),
            );

            for word in self.index.words(&key, pattern.word_multiplier) {
                debug_assert_eq!(word.chars().nth(candidate.overlap_index), Some(candidate.overlap_letter));
                found.push(PlacedWord { placement: candidate.placement, word: Arc::clone(word) });
            }
        }

        debug!(
            "depth {}: {} candidate positions, {} words for score {target}",
            chain.len(),
            candidates.len(),
            found.len()
        );
        found
    }
}

/// Number of squares usable by a word crossing the word at `owner`, starting next to
/// `from` and moving in direction `sign` along `axis`.
fn free_run(grid: &OccupancyGrid, from: Cell, axis: Axis, sign: isize, owner: usize) -> usize {
    let mut run = 0;
    let mut cell = from;
    while run < MAX_WORD_LENGTH {
        match cell.step(axis, sign) {
            Some(next) if !grid.is_occupied(next, owner) => {
                cell = next;
                run += 1;
            }
            _ => break,
        }
    }
    run
}

/// One level of the depth-first search: the grid with words `0..depth` marked, and the
/// words still to try at `depth`.
#[derive(Debug)]
struct Frame {
    depth: usize,
    grid: OccupancyGrid,
    choices: std::vec::IntoIter<PlacedWord>,
}

/// Lazy iterator over complete placement chains, from [`PuzzleSearch::solutions`].
///
/// The search runs on an explicit stack, so stack depth does not grow with the number of
/// targets. Each branch marks its own copy of the grid.
#[derive(Debug)]
pub struct Solutions<'a> {
    search: PuzzleSearch<'a>,
    targets: Vec<Score>,
    chain: PlacementChain,
    stack: Vec<Frame>,
}

impl Iterator for Solutions<'_> {
    type Item = PlacementChain;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(choice) = frame.choices.next() else {
                self.stack.pop();
                continue;
            };
            let depth = frame.depth;
            let mut grid = frame.grid.clone();
            grid.mark_footprint(&choice.placement, depth);

            self.chain.truncate(depth);
            self.chain.push(choice);

            let next_depth = depth + 1;
            if next_depth == self.targets.len() {
                return Some(self.chain.clone());
            }

            let choices = self.search.extensions(&self.chain, &grid, self.targets[next_depth]);
            if !choices.is_empty() {
                self.stack.push(Frame { depth: next_depth, grid, choices: choices.into_iter() });
            }
        }
    }
}

impl FusedIterator for Solutions<'_> {}

/// Lay the letters of `chain` out on the board.
///
/// # Errors
///
/// [`SearchError::PlacementOutOfBounds`] for a word that leaves the board and
/// [`SearchError::OverlappingLetters`] when two words disagree on a square. Neither can
/// happen for chains produced by [`PuzzleSearch`].
pub fn letter_grid(chain: &[PlacedWord]) -> Result<LetterGrid, SearchError> {
    let mut grid: LetterGrid = [[None; BOARD_SIZE]; BOARD_SIZE];

    for placed in chain {
        for (cell, letter) in placed.letters() {
            if !cell.is_on_board() {
                return Err(SearchError::PlacementOutOfBounds {
                    word: placed.word.to_string(),
                    col: cell.col,
                    row: cell.row,
                });
            }
            let square = &mut grid[cell.row][cell.col];
            match *square {
                Some(existing) if existing != letter => {
                    return Err(SearchError::OverlappingLetters {
                        col: cell.col,
                        row: cell.row,
                        existing,
                        incoming: letter,
                    });
                }
                _ => *square = Some(letter),
            }
        }
    }

    Ok(grid)
}
