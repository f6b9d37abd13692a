//! The word score index: every score every dictionary word can make on the board.
//!
//! For each accepted word and each choice of *overlap* letter (the letter that will sit on
//! a square an earlier word already filled), the index stores one entry per bonus layout
//! the board can put under the remaining letters:
//!
//! - no bonus,
//! - one double or triple letter on any non-overlap letter,
//! - two double letters 3 or 5 squares apart (counting both ends), or two triple letters
//!   5 squares apart.
//!
//! Those pairs are the only ones the standard board can place under a run of at most
//! [`MAX_WORD_LENGTH`] squares, so larger combinations are not generated.
//!
//! Entries are keyed by [`ScoreKey`]; a lookup answers "which words of this length, with
//! this letter at this index, score exactly this under these bonuses?".
//!
//! # Modulo mode
//!
//! When the codes are only known modulo some base (a plaintext letter `a..z` is its
//! alphabet position modulo 26), [`WordScoreIndex::words`] walks the whole residue class
//! up to the largest score the index ever produced.
//!
//! # Examples
//!
//! ```
//! use scrabblegram::letter_values::LetterValueTable;
//! use scrabblegram::score_index::{IndexSet, ScoreKey, WordScoreIndex};
//!
//! let values: LetterValueTable = [('a', 1), ('b', 3), ('t', 1)].into_iter().collect();
//! let index = WordScoreIndex::build(values, ["bat", "tab"], None)?;
//!
//! // "bat" crossing an earlier 'b', with its 'a' on a double letter: 3 + 2·1 + 1
//! let key = ScoreKey::new(6, 3, 0, 'b', IndexSet::single(1), IndexSet::EMPTY);
//! let words: Vec<_> = index.words(&key, 1).map(|w| w.to_string()).collect();
//! assert_eq!(words, vec!["bat"]);
//! # Ok::<(), scrabblegram::errors::InputError>(())
//! ```

use crate::board::{Axis, BoardLayout, Bonus, Cell, Placement, CENTER, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::errors::InputError;
use crate::letter_values::LetterValueTable;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A (board-adjusted) word score.
pub type Score = u32;

/// A dictionary word, shared between index buckets and placement chains.
pub type Word = Arc<str>;

/// Spans (squares from first to last bonus, inclusive) at which the board repeats a
/// letter bonus within one short run.
const PAIR_SPANS: [usize; 2] = [3, 5];
/// Triple letters only ever pair up at this span.
const TRIPLE_PAIR_SPAN: usize = 5;

/// Set of letter indices within a word, stored as a bit set.
///
/// Equality and hashing are by content, whatever order the indices were added in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexSet(u16);

impl IndexSet {
    pub const EMPTY: IndexSet = IndexSet(0);
    const CAPACITY: usize = u16::BITS as usize;

    pub fn single(i: usize) -> Self {
        let mut set = IndexSet::EMPTY;
        set.insert(i);
        set
    }

    pub fn pair(i: usize, j: usize) -> Self {
        let mut set = IndexSet::single(i);
        set.insert(j);
        set
    }

    pub fn insert(&mut self, i: usize) {
        debug_assert!(i < Self::CAPACITY, "index {i} does not fit in an IndexSet");
        self.0 |= 1 << i;
    }

    pub fn contains(self, i: usize) -> bool {
        i < Self::CAPACITY && self.0 & (1 << i) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).filter(move |&i| self.contains(i))
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IndexSet::EMPTY;
        for i in iter {
            set.insert(i);
        }
        set
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|i| i.to_string()).collect();
        write!(f, "{{{}}}", parts.join(","))
    }
}

/// Composite index key.
///
/// `doubled` and `tripled` never contain `overlap_index`: the overlap letter is already
/// on the board and cannot earn a bonus again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    pub value: Score,
    pub length: usize,
    pub overlap_index: usize,
    pub overlap_letter: char,
    pub doubled: IndexSet,
    pub tripled: IndexSet,
}

impl ScoreKey {
    pub fn new(
        value: Score,
        length: usize,
        overlap_index: usize,
        overlap_letter: char,
        doubled: IndexSet,
        tripled: IndexSet,
    ) -> Self {
        debug_assert!(overlap_index < length, "overlap index {overlap_index} outside word of length {length}");
        debug_assert!(
            !doubled.contains(overlap_index) && !tripled.contains(overlap_index),
            "bonus sets must not contain the overlap index"
        );
        ScoreKey { value, length, overlap_index, overlap_letter, doubled, tripled }
    }

    /// Same key with a different score.
    pub fn with_value(self, value: Score) -> Self {
        ScoreKey { value, ..self }
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pts, len {}, '{}'@{}, 2L{} 3L{}",
            self.value, self.length, self.overlap_letter, self.overlap_index, self.doubled, self.tripled
        )
    }
}

/// A word that can open the puzzle on the center row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingWord {
    pub word: Word,
    pub start_col: usize,
}

impl StartingWord {
    /// Horizontal placement on the center row.
    pub fn placement(&self) -> Placement {
        Placement::new(
            Cell::new(self.start_col, CENTER),
            Axis::Horizontal,
            self.word.chars().count(),
        )
    }
}

/// What happened to the dictionary during construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub accepted: usize,
    pub wrong_length: usize,
    pub unknown_letter: usize,
    pub duplicates: usize,
}

/// Inverted index from [`ScoreKey`] to the words matching it.
///
/// Immutable after [`WordScoreIndex::build`]; words inside a bucket keep dictionary order.
#[derive(Debug, Clone)]
pub struct WordScoreIndex {
    values: LetterValueTable,
    words: HashMap<ScoreKey, Vec<Word>>,
    /// Largest score stored under any key; bounds the modulo walk.
    max_value: Score,
    modulo: Option<Score>,
    stats: IndexStats,
}

impl WordScoreIndex {
    /// Build the index from letter values and a dictionary.
    ///
    /// Words are lowercased. Words shorter than [`MIN_WORD_LENGTH`], longer than
    /// [`MAX_WORD_LENGTH`], using a letter without a value, or repeated, are dropped
    /// with a warning naming the word; a summary is logged at info level.
    ///
    /// # Errors
    ///
    /// [`InputError::ZeroModulo`] when `modulo` is `Some(0)`.
    pub fn build<I, S>(values: LetterValueTable, dictionary: I, modulo: Option<u16>) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if modulo == Some(0) {
            return Err(InputError::ZeroModulo);
        }

        let mut index = WordScoreIndex {
            values,
            words: HashMap::new(),
            max_value: 0,
            modulo: modulo.map(Score::from),
            stats: IndexStats::default(),
        };
        let mut seen: HashSet<String> = HashSet::new();

        'words: for raw in dictionary {
            let word = raw.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }

            let letters: Vec<char> = word.chars().collect();
            if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&letters.len()) {
                warn!(
                    "skipping '{word}': length {} outside {MIN_WORD_LENGTH}..={MAX_WORD_LENGTH}",
                    letters.len()
                );
                index.stats.wrong_length += 1;
                continue;
            }

            let mut letter_values = Vec::with_capacity(letters.len());
            for &c in &letters {
                let Some(value) = index.values.get(c) else {
                    // playable only with a blank tile; not worth modelling
                    warn!("skipping '{word}': letter '{c}' has no value");
                    index.stats.unknown_letter += 1;
                    continue 'words;
                };
                letter_values.push(Score::from(value));
            }

            if !seen.insert(word.clone()) {
                index.stats.duplicates += 1;
                continue;
            }

            index.insert_word(&Word::from(word), &letters, &letter_values);
            index.stats.accepted += 1;
        }

        info!(
            "Loaded words database: {} words, search keys: {}, total word scores: {} (max score {})",
            index.stats.accepted,
            index.len(),
            index.entry_count(),
            index.max_value
        );
        if index.stats.wrong_length + index.stats.unknown_letter > 0 {
            info!(
                "Skipped {} words of unsupported length and {} words with unscored letters",
                index.stats.wrong_length, index.stats.unknown_letter
            );
        }

        Ok(index)
    }

    /// Store every bonus layout of one word, for every choice of overlap letter.
    fn insert_word(&mut self, word: &Word, letters: &[char], values: &[Score]) {
        let length = letters.len();
        let base: Score = values.iter().sum();

        for overlap_index in 0..length {
            let key = |value, doubled, tripled| ScoreKey {
                value,
                length,
                overlap_index,
                overlap_letter: letters[overlap_index],
                doubled,
                tripled,
            };

            self.push(key(base, IndexSet::EMPTY, IndexSet::EMPTY), word);

            for bonus_index in (0..length).filter(|&i| i != overlap_index) {
                let letter_value = values[bonus_index];
                self.push(key(base + letter_value, IndexSet::single(bonus_index), IndexSet::EMPTY), word);
                self.push(key(base + 2 * letter_value, IndexSet::EMPTY, IndexSet::single(bonus_index)), word);
            }

            for span in PAIR_SPANS {
                if span > length {
                    continue;
                }
                for first in 0..=length - span {
                    let second = first + span - 1;
                    if first == overlap_index || second == overlap_index {
                        continue;
                    }
                    let pair = IndexSet::pair(first, second);
                    let pair_value = values[first] + values[second];
                    self.push(key(base + pair_value, pair, IndexSet::EMPTY), word);
                    if span == TRIPLE_PAIR_SPAN {
                        self.push(key(base + 2 * pair_value, IndexSet::EMPTY, pair), word);
                    }
                }
            }
        }
    }

    fn push(&mut self, key: ScoreKey, word: &Word) {
        self.max_value = self.max_value.max(key.value);
        self.words.entry(key).or_default().push(Arc::clone(word));
    }

    /// Scores to look up for a raw board score of `raw` under `word_multiplier`.
    ///
    /// Exact mode: the single stored score `raw / word_multiplier`, if it divides evenly.
    /// Modulo mode: every `raw + k·base` that divides evenly, up to the largest stored score.
    fn stored_values(&self, raw: Score, word_multiplier: Score) -> Vec<Score> {
        debug_assert!(word_multiplier > 0, "word multiplier must be positive");

        match self.modulo {
            None => {
                if raw % word_multiplier == 0 {
                    vec![raw / word_multiplier]
                } else {
                    Vec::new()
                }
            }
            Some(base) => {
                let mut stored = Vec::new();
                let mut candidate = raw;
                while candidate / word_multiplier <= self.max_value {
                    if candidate % word_multiplier == 0 {
                        stored.push(candidate / word_multiplier);
                    }
                    candidate += base;
                }
                stored
            }
        }
    }

    /// Words matching `key` once the whole word score is multiplied by `word_multiplier`.
    ///
    /// In modulo mode `key.value` is a residue: the words of every stored score `s` with
    /// `s · word_multiplier ≡ key.value` (walking upwards from `key.value`) are yielded in
    /// ascending `s`, each bucket in dictionary order.
    pub fn words<'a>(&'a self, key: &ScoreKey, word_multiplier: Score) -> impl Iterator<Item = &'a Word> + 'a {
        let key = *key;
        self.stored_values(key.value, word_multiplier)
            .into_iter()
            .filter_map(move |value| self.words.get(&key.with_value(value)))
            .flatten()
    }

    /// Every word that can open the puzzle with score `value`, with its start column.
    ///
    /// The first word lies horizontally on the center row and covers the center square.
    /// Nothing is on the board yet, so the overlap letter of the lookup key is synthetic:
    /// it is pinned to a square without bonus (the pivot) and every letter with a value is
    /// tried there.
    #[must_use]
    pub fn starting_words(&self, layout: &BoardLayout, value: Score) -> Vec<StartingWord> {
        let mut found = Vec::new();

        for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
            for start_col in (CENTER + 1 - length)..=CENTER {
                let placement = Placement::new(Cell::new(start_col, CENTER), Axis::Horizontal, length);
                let Some(pivot) = placement.cells().position(|cell| layout.bonus(cell) == Bonus::Plain) else {
                    continue;
                };
                let pattern = layout.bonus_pattern(&placement, pivot);
                let doubled: IndexSet = pattern.doubled.iter().copied().collect();
                let tripled: IndexSet = pattern.tripled.iter().copied().collect();

                for letter in self.values.letters() {
                    let key = ScoreKey::new(value, length, pivot, letter, doubled, tripled);
                    found.extend(
                        self.words(&key, pattern.word_multiplier)
                            .map(|word| StartingWord { word: Arc::clone(word), start_col }),
                    );
                }
            }
        }

        debug!("{} starting words for score {value}", found.len());
        found
    }

    /// Largest score stored under any key.
    pub fn max_value(&self) -> Score {
        self.max_value
    }

    pub fn modulo(&self) -> Option<Score> {
        self.modulo
    }

    pub fn letter_values(&self) -> &LetterValueTable {
        &self.values
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of (key, word) entries.
    pub fn entry_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// All buckets, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ScoreKey, &[Word])> {
        self.words.iter().map(|(key, words)| (key, words.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> LetterValueTable {
        [('a', 1), ('b', 3), ('c', 3), ('o', 1), ('s', 1), ('t', 1)].into_iter().collect()
    }

    fn lookup(index: &WordScoreIndex, key: ScoreKey, word_multiplier: Score) -> Vec<String> {
        index.words(&key, word_multiplier).map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_index_set_is_order_independent() {
        let forward: IndexSet = [1, 4].into_iter().collect();
        let backward: IndexSet = [4, 1].into_iter().collect();
        assert_eq!(forward, backward);
        assert_eq!(forward, IndexSet::pair(4, 1));
        assert_eq!(forward.iter().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(forward.len(), 2);
        assert_eq!(forward.to_string(), "{1,4}");
        assert!(IndexSet::EMPTY.is_empty());
    }

    #[test]
    fn test_base_and_single_bonus_keys() {
        let index = WordScoreIndex::build(values(), ["bat"], None).unwrap();

        let base = ScoreKey::new(5, 3, 0, 'b', IndexSet::EMPTY, IndexSet::EMPTY);
        assert_eq!(lookup(&index, base, 1), vec!["bat"]);

        // 'a' doubled
        let doubled = ScoreKey::new(6, 3, 0, 'b', IndexSet::single(1), IndexSet::EMPTY);
        assert_eq!(lookup(&index, doubled, 1), vec!["bat"]);

        // 'b' tripled while 't' is the overlap letter
        let tripled = ScoreKey::new(11, 3, 2, 't', IndexSet::EMPTY, IndexSet::single(0));
        assert_eq!(lookup(&index, tripled, 1), vec!["bat"]);

        // wrong overlap letter
        let wrong = ScoreKey::new(5, 3, 0, 'a', IndexSet::EMPTY, IndexSet::EMPTY);
        assert!(lookup(&index, wrong, 1).is_empty());
    }

    #[test]
    fn test_accented_letters_are_indexed() {
        let table: LetterValueTable = [('a', 1), ('č', 2), ('j', 2), ('ř', 4)].into_iter().collect();
        let index = WordScoreIndex::build(table, ["ČAJ", "řač", "čaw"], None).unwrap();
        assert_eq!(index.stats().accepted, 2);
        assert_eq!(index.stats().unknown_letter, 1);

        // č a j = 2 + 1 + 2, overlap on 'č'
        let key = ScoreKey::new(5, 3, 0, 'č', IndexSet::EMPTY, IndexSet::EMPTY);
        assert_eq!(lookup(&index, key, 1), vec!["čaj"]);
    }

    #[test]
    fn test_overlap_index_never_carries_a_bonus() {
        let index = WordScoreIndex::build(values(), ["bat", "boats"], None).unwrap();
        for (key, _) in index.iter() {
            assert!(!key.doubled.contains(key.overlap_index), "{key}");
            assert!(!key.tripled.contains(key.overlap_index), "{key}");
        }
    }

    #[test]
    fn test_pair_keys() {
        let index = WordScoreIndex::build(values(), ["boats"], None).unwrap();
        // b o a t s = 3 + 1 + 1 + 1 + 1 = 7, overlap on 'o'

        // double letters 5 squares apart: b and s
        let key = ScoreKey::new(11, 5, 1, 'o', IndexSet::pair(0, 4), IndexSet::EMPTY);
        assert_eq!(lookup(&index, key, 1), vec!["boats"]);
        // triple letters 5 squares apart
        let key = ScoreKey::new(15, 5, 1, 'o', IndexSet::EMPTY, IndexSet::pair(0, 4));
        assert_eq!(lookup(&index, key, 1), vec!["boats"]);
        // double letters 3 squares apart: b and a
        let key = ScoreKey::new(11, 5, 1, 'o', IndexSet::pair(0, 2), IndexSet::EMPTY);
        assert_eq!(lookup(&index, key, 1), vec!["boats"]);
        // triple letters never pair at span 3
        let key = ScoreKey::new(15, 5, 1, 'o', IndexSet::EMPTY, IndexSet::pair(0, 2));
        assert!(lookup(&index, key, 1).is_empty());
        // pairs touching the overlap letter are not generated
        assert!(!index.iter().any(|(key, _)| key.overlap_index == 1 && key.doubled == IndexSet::pair(1, 3)));
        // span 4 is not a board geometry
        assert!(!index.iter().any(|(key, _)| key.doubled == IndexSet::pair(0, 3)));
    }

    #[test]
    fn test_every_entry_scores_its_key() {
        let index = WordScoreIndex::build(values(), ["bat", "tab", "to", "boats", "coast", "cob"], None).unwrap();
        let table = values();
        let letter_value = |c: char| Score::from(table.get(c).unwrap());

        for (key, words) in index.iter() {
            assert!(!words.is_empty());
            for word in words {
                let letters: Vec<char> = word.chars().collect();
                assert_eq!(letters.len(), key.length, "{word} under {key}");
                assert_eq!(letters[key.overlap_index], key.overlap_letter, "{word} under {key}");
                let score: Score = letters
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| {
                        let factor = if key.tripled.contains(i) {
                            3
                        } else if key.doubled.contains(i) {
                            2
                        } else {
                            1
                        };
                        factor * letter_value(c)
                    })
                    .sum();
                assert_eq!(score, key.value, "{word} under {key}");
            }
        }
    }

    #[test]
    fn test_max_value() {
        let index = WordScoreIndex::build(values(), ["bat"], None).unwrap();
        // b tripled: 5 + 2·3
        assert_eq!(index.max_value(), 11);
    }

    #[test]
    fn test_skipped_words_are_counted_not_fatal() {
        let index = WordScoreIndex::build(values(), ["a", "abcabc", "zoo", "BAT", "bat", "tab"], None).unwrap();
        let stats = index.stats();
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.wrong_length, 2);
        assert_eq!(stats.unknown_letter, 1);
        assert_eq!(stats.duplicates, 1);

        // the uppercase copy was the one kept, lowercased, and only once
        let key = ScoreKey::new(5, 3, 0, 'b', IndexSet::EMPTY, IndexSet::EMPTY);
        assert_eq!(lookup(&index, key, 1), vec!["bat"]);
    }

    #[test]
    fn test_zero_modulo_is_rejected() {
        assert!(matches!(
            WordScoreIndex::build(values(), ["bat"], Some(0)),
            Err(InputError::ZeroModulo)
        ));
    }

    #[test]
    fn test_exact_lookup_divides_by_word_multiplier() {
        let index = WordScoreIndex::build(values(), ["bat", "tab"], None).unwrap();
        let key = ScoreKey::new(10, 3, 1, 'a', IndexSet::EMPTY, IndexSet::EMPTY);
        assert_eq!(lookup(&index, key, 2), vec!["bat", "tab"]);
        assert!(lookup(&index, key.with_value(11), 2).is_empty());
        assert!(lookup(&index, key.with_value(15), 2).is_empty());
        assert_eq!(lookup(&index, key.with_value(15), 3), vec!["bat", "tab"]);
    }

    #[test]
    fn test_modulo_lookup_is_union_of_exact_lookups() {
        let dictionary = ["bat", "tab", "to", "boats", "coast", "cob", "cab", "oat"];
        let exact = WordScoreIndex::build(values(), dictionary, None).unwrap();
        let base: Score = 4;
        let modular = WordScoreIndex::build(values(), dictionary, Some(4)).unwrap();
        assert_eq!(exact.max_value(), modular.max_value());

        for (key, _) in exact.iter() {
            for residue in 0..base {
                for word_multiplier in 1..=3 {
                    let shifted = key.with_value(residue);
                    let mut expected = Vec::new();
                    let mut raw = residue;
                    while raw / word_multiplier <= exact.max_value() {
                        if raw % word_multiplier == 0 {
                            expected.extend(lookup(&exact, key.with_value(raw / word_multiplier), 1));
                        }
                        raw += base;
                    }
                    assert_eq!(lookup(&modular, shifted, word_multiplier), expected, "{shifted} x{word_multiplier}");
                }
            }
        }
    }

    #[test]
    fn test_modulo_lookup_terminates_for_base_one() {
        let index = WordScoreIndex::build(values(), ["bat"], Some(1)).unwrap();
        let key = ScoreKey::new(0, 3, 0, 'b', IndexSet::EMPTY, IndexSet::EMPTY);
        // every stored score of 'b'@0 with no bonus: just 5
        assert_eq!(lookup(&index, key, 1), vec!["bat"]);
    }

    #[test]
    fn test_starting_words_cover_center() {
        let index = WordScoreIndex::build(values(), ["bat", "tab"], None).unwrap();
        let layout = BoardLayout::standard();
        // (3 + 1 + 1) doubled by the center square
        let found: Vec<(String, usize)> = index
            .starting_words(layout, 10)
            .into_iter()
            .map(|s| (s.word.to_string(), s.start_col))
            .collect();
        assert_eq!(
            found,
            vec![
                ("bat".to_string(), 5),
                ("tab".to_string(), 5),
                ("bat".to_string(), 6),
                ("tab".to_string(), 6),
                ("bat".to_string(), 7),
                ("tab".to_string(), 7),
            ]
        );
        for starting in index.starting_words(layout, 10) {
            let placement = starting.placement();
            assert!(placement.cells().any(|cell| cell == Cell::new(CENTER, CENTER)));
        }
    }

    #[test]
    fn test_starting_words_pick_up_double_letters() {
        let index = WordScoreIndex::build(values(), ["boats"], None).unwrap();
        let layout = BoardLayout::standard();
        let start_cols = |value| -> Vec<usize> {
            index.starting_words(layout, value).into_iter().map(|s| s.start_col).collect()
        };
        // columns 3..=7: 'b' on the double letter at column 3
        assert_eq!(start_cols(20), vec![3]);
        // columns 7..=11: 's' on the double letter at column 11
        assert_eq!(start_cols(16), vec![7]);
        // no letter bonus
        assert_eq!(start_cols(14), vec![4, 5, 6]);
    }

    #[test]
    fn test_starting_words_in_modulo_mode() {
        let index = WordScoreIndex::build(values(), ["bat", "tab"], Some(26)).unwrap();
        let layout = BoardLayout::standard();
        assert_eq!(index.starting_words(layout, 10).len(), 6);
        assert!(index.starting_words(layout, 9).is_empty());
    }
}
