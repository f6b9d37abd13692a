//! Which squares a new word may still use.
//!
//! Every placed word claims its letters and the ring of squares around them (its
//! *footprint*) under its owner index, the word's position in the chain. A square two
//! words claim becomes [`CellState::Blocked`] and stays that way.
//!
//! The search never undoes marks: each branch works on its own clone.

use crate::board::{Cell, Placement, BOARD_SIZE};

/// State of one board square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Free,
    /// Claimed by the word at this chain index.
    Owned(usize),
    /// Claimed by two or more words; unusable.
    Blocked,
}

/// Free/owned/blocked tracker for the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: [CellState; BOARD_SIZE * BOARD_SIZE],
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        OccupancyGrid::new()
    }
}

impl OccupancyGrid {
    /// An empty board.
    pub fn new() -> Self {
        OccupancyGrid { cells: [CellState::Free; BOARD_SIZE * BOARD_SIZE] }
    }

    fn offset(cell: Cell) -> usize {
        debug_assert!(cell.is_on_board(), "cell {cell:?} is off the board");
        cell.row * BOARD_SIZE + cell.col
    }

    pub fn state(&self, cell: Cell) -> CellState {
        self.cells[Self::offset(cell)]
    }

    /// Claim one square for `owner`.
    ///
    /// Re-marking a square with its own owner changes nothing.
    pub fn mark_cell(&mut self, cell: Cell, owner: usize) {
        let slot = &mut self.cells[Self::offset(cell)];
        *slot = match *slot {
            CellState::Free => CellState::Owned(owner),
            CellState::Owned(existing) if existing == owner => CellState::Owned(owner),
            CellState::Owned(_) | CellState::Blocked => CellState::Blocked,
        };
    }

    /// Claim the letters of `placement`, both perpendicular neighbours of every letter,
    /// and the squares just before and after the word.
    pub fn mark_footprint(&mut self, placement: &Placement, owner: usize) {
        let across = placement.axis.perpendicular();
        for cell in placement.cells() {
            self.mark_cell(cell, owner);
            for side in [-1, 1] {
                if let Some(neighbour) = cell.step(across, side) {
                    self.mark_cell(neighbour, owner);
                }
            }
        }

        if let Some(before) = placement.origin.step(placement.axis, -1) {
            self.mark_cell(before, owner);
        }
        if let Some(after) = placement.cell_at(placement.length - 1).step(placement.axis, 1) {
            self.mark_cell(after, owner);
        }
    }

    /// True unless the square is free or owned by `allowed_owner` alone.
    pub fn is_occupied(&self, cell: Cell, allowed_owner: usize) -> bool {
        match self.state(cell) {
            CellState::Free => false,
            CellState::Owned(owner) => owner != allowed_owner,
            CellState::Blocked => true,
        }
    }

    /// Squares in [`CellState::Blocked`].
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == CellState::Blocked)
            .map(|(i, _)| Cell::new(i % BOARD_SIZE, i / BOARD_SIZE))
    }
}
