//! Cryptogram crossword generator.
//!
//! Given a sequence of codes, one per letter of a hidden message, find dictionary words
//! that score exactly those codes on a Scrabble board, each word after the first crossing
//! an earlier one at a single letter.
//!
//! The pieces, leaves first:
//!
//! - [`board`]: the bonus layout and board geometry
//! - [`score_index`]: every score every word can make, keyed for lookup
//! - [`occupancy`]: which squares are still usable
//! - [`search`]: the lazy placement search
//! - [`letter_values`], [`word_list`], [`cipher`], [`render`]: input and output

pub mod board;
pub mod cipher;
pub mod errors;
pub mod letter_values;
pub mod log;
pub mod occupancy;
pub mod render;
pub mod score_index;
pub mod search;
pub mod word_list;
