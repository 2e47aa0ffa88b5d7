use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WORD_LENGTH;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALPHABET_SIZE: usize = 26;

fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8 - b'a') as usize)
    } else {
        None
    }
}

fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

/// A set of locations (i.e. zero-based indices) within a word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSet(u8);

impl PositionSet {
    /// Creates an empty set.
    pub fn new() -> PositionSet {
        PositionSet(0)
    }

    /// Adds the location, returning `true` if it wasn't already in the set.
    ///
    /// Locations outside the word are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= WORD_LENGTH {
            return false;
        }
        let bit = 1 << index;
        let is_new = self.0 & bit == 0;
        self.0 |= bit;
        is_new
    }

    /// Returns `true` iff the location is in the set.
    pub fn contains(&self, index: usize) -> bool {
        index < WORD_LENGTH && self.0 & (1 << index) != 0
    }

    /// The number of locations in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` iff the set holds no locations.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` iff every location in `other` is also in this set.
    pub fn is_superset(&self, other: &PositionSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates over the locations in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(move |index| self.contains(*index))
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// Everything known about a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterInfo {
    /// The minimum number of times this letter must appear in the word.
    min_count: i8,
    /// The maximum number of times this letter may appear in the word. `-1` excludes the letter
    /// entirely.
    max_count: i8,
    /// Locations where the letter must be.
    correct: PositionSet,
    /// Locations where the letter was guessed, but must not be.
    present: PositionSet,
}

impl Default for LetterInfo {
    fn default() -> LetterInfo {
        LetterInfo {
            min_count: 0,
            max_count: WORD_LENGTH as i8,
            correct: PositionSet::new(),
            present: PositionSet::new(),
        }
    }
}

impl LetterInfo {
    pub fn min_count(&self) -> i8 {
        self.min_count
    }

    pub fn max_count(&self) -> i8 {
        self.max_count
    }

    pub fn correct(&self) -> PositionSet {
        self.correct
    }

    pub fn present(&self) -> PositionSet {
        self.present
    }

    /// Returns `true` if no word can satisfy this letter's constraints.
    ///
    /// A letter with no known locations is always satisfiable by leaving it out. Otherwise the
    /// letter must appear at least once, at least as often as it has correct locations, and
    /// never at a location that is both correct and misplaced.
    pub fn is_contradictory(&self) -> bool {
        if self.correct.is_empty() && self.present.is_empty() {
            return false;
        }
        let lowest = self.min_count.max(self.correct.len() as i8).max(1);
        lowest > self.max_count || self.correct.0 & self.present.0 != 0
    }

    fn is_satisfied_by(
        &self,
        letter: char,
        letters: &[Option<char>; WORD_LENGTH],
        count: u8,
    ) -> bool {
        // Counts are only checked for letters in the word; a missing letter is caught by the
        // location checks when it is required.
        let count = i16::from(count);
        let (min_count, max_count) = (i16::from(self.min_count), i16::from(self.max_count));
        if count > 0 && (count < min_count || count > max_count) {
            return false;
        }
        if self.present.iter().any(|index| letters[index] == Some(letter)) {
            return false;
        }
        if !self.present.is_empty() && count == 0 {
            return false;
        }
        self.correct.iter().all(|index| letters[index] == Some(letter))
    }
}

/// The constraints accumulated from a history of guesses, keyed by letter.
///
/// Only the letters `a` to `z` are tracked. Constraints only ever tighten as more guesses are
/// added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knowledge {
    letters: [Option<LetterInfo>; ALPHABET_SIZE],
}

impl Knowledge {
    /// Creates a `Knowledge` object with nothing known.
    pub fn new() -> Knowledge {
        Knowledge::default()
    }

    /// Folds every complete row of a board into a fresh `Knowledge`.
    ///
    /// `state_grid` runs parallel to `word_grid`. Rows that don't hold exactly five letters
    /// (including empty, unplayed rows) are skipped, and a missing state row counts as all
    /// [`LetterResult::Unknown`].
    ///
    /// ```
    /// use wordle_knowledge::Knowledge;
    /// use wordle_knowledge::LetterResult::*;
    ///
    /// let knowledge = Knowledge::from_history(
    ///     &[vec!['c', 'r', 'a', 't', 'e'], vec![]],
    ///     &[vec![Absent, Correct, Absent, Present, Absent], vec![]],
    /// );
    ///
    /// assert!(knowledge.is_satisfied_by("trust"));
    /// assert!(!knowledge.is_satisfied_by("write"));
    /// ```
    pub fn from_history<R, S>(word_grid: &[R], state_grid: &[S]) -> Knowledge
    where
        R: AsRef<[char]>,
        S: AsRef<[LetterResult]>,
    {
        let mut knowledge = Knowledge::new();
        for (index, row) in word_grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != WORD_LENGTH {
                continue;
            }
            let word: String = row.iter().collect();
            let states = state_grid.get(index).map_or(&[][..], |states| states.as_ref());
            knowledge.update(&word, states);
        }
        knowledge
    }

    /// Folds each guess into a fresh `Knowledge`, in order, skipping incomplete guesses as
    /// [`Knowledge::update_with`] does.
    pub fn from_guesses<'a, I>(guesses: I) -> Knowledge
    where
        I: IntoIterator<Item = &'a GuessResult>,
    {
        let mut knowledge = Knowledge::new();
        for guess_result in guesses {
            knowledge.update_with(guess_result);
        }
        knowledge
    }

    /// Adds the constraints arising from one guess and its feedback.
    ///
    /// The guess is lower-cased and only its first five letters are read. A missing result
    /// counts as [`LetterResult::Unknown`].
    ///
    /// Within a guess, only `Present` letters are tallied. An `Absent` result caps the letter's
    /// count at one less than its tally so far, so a letter that was never tallied is excluded
    /// outright. `Correct` and `Present` results raise the minimum count to the tally.
    pub fn update(&mut self, word: &str, results: &[LetterResult]) {
        let mut present_tally = [0i8; ALPHABET_SIZE];
        for (index, letter) in word.chars().take(WORD_LENGTH).enumerate() {
            let slot = match letter_index(letter.to_ascii_lowercase()) {
                Some(slot) => slot,
                None => continue,
            };
            let result = results
                .get(index)
                .copied()
                .unwrap_or(LetterResult::Unknown);
            if result == LetterResult::Present {
                present_tally[slot] += 1;
            }
            let tally = present_tally[slot];
            let info = self.letters[slot].get_or_insert_with(LetterInfo::default);
            match result {
                LetterResult::Absent => {
                    info.max_count = info.max_count.min(tally - 1);
                }
                LetterResult::Correct => {
                    info.correct.insert(index);
                    info.min_count = info.min_count.max(tally);
                }
                LetterResult::Present => {
                    info.present.insert(index);
                    info.min_count = info.min_count.max(tally);
                }
                LetterResult::Unknown => {}
            }
        }
    }

    /// Adds the constraints arising from the given guess result.
    ///
    /// A guess that doesn't have exactly five letters adds nothing, the same as an incomplete
    /// row in [`Knowledge::from_history`].
    pub fn update_with(&mut self, guess_result: &GuessResult) {
        if guess_result.guess.chars().count() != WORD_LENGTH {
            return;
        }
        self.update(&guess_result.guess, &guess_result.results);
    }

    /// Returns what is known about the given letter, if it has been guessed.
    pub fn get(&self, letter: char) -> Option<&LetterInfo> {
        letter_index(letter).and_then(|index| self.letters[index].as_ref())
    }

    /// Iterates over the guessed letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterInfo)> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(index, info)| info.as_ref().map(|info| (index_letter(index), info)))
    }

    /// The number of letters with known constraints.
    pub fn len(&self) -> usize {
        self.letters.iter().filter(|info| info.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }

    /// Letters for which no word can satisfy the constraints, as decided by
    /// [`LetterInfo::is_contradictory`]. While any exist, no word satisfies this knowledge.
    ///
    /// An excluded letter isn't listed, even though its maximum count is below its minimum.
    /// Filtering never reports contradictions; it just finds no words.
    pub fn contradictions(&self) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(|(_, info)| info.is_contradictory())
            .map(|(letter, _)| letter)
    }

    /// Returns `true` iff the given word satisfies every letter's constraints.
    ///
    /// Letters that were never guessed impose nothing.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let mut counts = [0u8; ALPHABET_SIZE];
        let mut letters = [None; WORD_LENGTH];
        for (index, letter) in word.chars().enumerate() {
            if index < WORD_LENGTH {
                letters[index] = Some(letter);
            }
            if let Some(slot) = letter_index(letter) {
                counts[slot] = counts[slot].saturating_add(1);
            }
        }
        self.letters.iter().enumerate().all(|(index, info)| match info {
            Some(info) => info.is_satisfied_by(index_letter(index), &letters, counts[index]),
            None => true,
        })
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, info) in self.iter() {
            writeln!(
                f,
                "{}: {}-{} good={} present={}",
                letter, info.min_count, info.max_count, info.correct, info.present
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::LetterResult::*;

    #[test]
    fn position_set_insert() {
        let mut set = PositionSet::new();

        assert!(set.insert(3));
        assert!(set.insert(0));
        assert!(!set.insert(3));
        assert!(!set.insert(WORD_LENGTH));

        assert_eq!(set.len(), 2);
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert_eq!(set.iter().collect::<Vec<usize>>(), vec![0, 3]);
        assert_eq!(set.to_string(), "0,3");
    }

    #[test]
    fn position_set_is_superset() {
        let mut small = PositionSet::new();
        small.insert(1);
        let mut large = small;
        large.insert(4);

        assert!(large.is_superset(&small));
        assert!(!small.is_superset(&large));
        assert!(small.is_superset(&PositionSet::new()));
    }

    #[test]
    fn letter_info_default() {
        let info = LetterInfo::default();

        assert_eq!(info.min_count(), 0);
        assert_eq!(info.max_count(), 5);
        assert!(info.correct().is_empty());
        assert!(info.present().is_empty());
        assert!(!info.is_contradictory());
    }

    #[test]
    fn update_absent_excludes_untallied_letter() {
        let mut knowledge = Knowledge::new();

        knowledge.update("abcde", &[Absent; 5]);

        assert_eq!(knowledge.len(), 5);
        assert_eq!(knowledge.get('a').map(LetterInfo::max_count), Some(-1));
        assert_eq!(knowledge.get('e').map(LetterInfo::max_count), Some(-1));
    }

    #[test]
    fn update_correct_does_not_tally() {
        let mut knowledge = Knowledge::new();

        knowledge.update("abcde", &[Correct, Absent, Absent, Absent, Absent]);

        let info = knowledge.get('a').unwrap();
        assert_eq!(info.min_count(), 0);
        assert_eq!(info.max_count(), 5);
        assert_eq!(info.correct().iter().collect::<Vec<usize>>(), vec![0]);
    }

    #[test]
    fn update_present_tally_sets_min_and_max() {
        let mut knowledge = Knowledge::new();

        // The third 'b' is absent after two present 'b's.
        knowledge.update("bbbxz", &[Present, Present, Absent, Absent, Absent]);

        let info = knowledge.get('b').unwrap();
        assert_eq!(info.min_count(), 2);
        assert_eq!(info.max_count(), 1);
        assert_eq!(info.present().to_string(), "0,1");
        assert!(info.is_contradictory());
    }

    #[test]
    fn update_lower_cases_guess() {
        let mut knowledge = Knowledge::new();

        knowledge.update("CRATE", &[Absent, Correct, Absent, Present, Absent]);

        assert!(knowledge.get('r').is_some());
        assert!(knowledge.get('R').is_none());
    }

    #[test]
    fn update_unknown_results_add_empty_letters() {
        let mut knowledge = Knowledge::new();

        knowledge.update("crate", &[Unknown, Correct]);

        assert_eq!(knowledge.len(), 5);
        assert_eq!(knowledge.get('c'), Some(&LetterInfo::default()));
        assert_eq!(knowledge.get('e'), Some(&LetterInfo::default()));
        assert!(knowledge.is_satisfied_by("crate"));
        assert_eq!(knowledge.is_satisfied_by("cccce"), false);
    }

    #[test]
    fn update_skips_non_letters() {
        let mut knowledge = Knowledge::new();

        knowledge.update("ab-d!", &[Absent; 5]);

        assert_eq!(knowledge.len(), 3);
        assert!(knowledge.is_satisfied_by("x-y!z"));
    }

    #[test]
    fn is_satisfied_by_no_knowledge() {
        let knowledge = Knowledge::new();

        assert!(knowledge.is_empty());
        assert!(knowledge.is_satisfied_by("abcde"));
        assert!(knowledge.is_satisfied_by("zzzzz"));
        assert!(knowledge.is_satisfied_by(""));
    }

    #[test]
    fn is_satisfied_by_with_knowledge() {
        let mut knowledge = Knowledge::new();

        knowledge.update("abbcd", &[Present, Correct, Present, Absent, Unknown]);

        assert!(knowledge.is_satisfied_by("bbaba"));
        assert!(knowledge.is_satisfied_by("xbdab"));

        // 'a' must not be at 0.
        assert_eq!(knowledge.is_satisfied_by("abbxb"), false);
        // 'a' must be somewhere.
        assert_eq!(knowledge.is_satisfied_by("xbxxb"), false);
        // 'b' must be at 1.
        assert_eq!(knowledge.is_satisfied_by("babxx"), false);
        // 'b' must not be at 2.
        assert_eq!(knowledge.is_satisfied_by("xbbax"), false);
        // 'c' is excluded.
        assert_eq!(knowledge.is_satisfied_by("cbaxb"), false);
    }

    #[test]
    fn is_satisfied_by_max_count() {
        let mut knowledge = Knowledge::new();

        knowledge.update("aaxyz", &[Present, Absent, Unknown, Unknown, Unknown]);

        // One 'a' was tallied before the absent one, which caps the count at zero.
        assert_eq!(knowledge.get('a').map(LetterInfo::max_count), Some(0));
        assert_eq!(knowledge.is_satisfied_by("bcdea"), false);
        assert_eq!(knowledge.is_satisfied_by("bcdef"), false);
    }

    #[test]
    fn contradictions_lists_unsatisfiable_letters() {
        let mut knowledge = Knowledge::new();

        knowledge.update("sassy", &[Present, Absent, Present, Absent, Unknown]);

        // 'a' is merely excluded, but 's' needs two copies and allows one.
        assert_eq!(knowledge.contradictions().collect::<Vec<char>>(), vec!['s']);
    }

    #[test]
    fn excluded_letters_are_not_contradictions() {
        let mut knowledge = Knowledge::new();

        knowledge.update("crate", &[Absent, Correct, Absent, Present, Absent]);

        let c = knowledge.get('c').unwrap();
        assert_eq!((c.min_count(), c.max_count()), (0, -1));
        assert!(!c.is_contradictory());
        assert_eq!(knowledge.contradictions().count(), 0);
    }

    #[test]
    fn correct_and_misplaced_at_same_location_is_contradiction() {
        let mut knowledge = Knowledge::new();

        knowledge.update("abcde", &[Correct, Unknown, Unknown, Unknown, Unknown]);
        knowledge.update("axyzw", &[Present, Unknown, Unknown, Unknown, Unknown]);

        let a = knowledge.get('a').unwrap();
        assert!(a.max_count() >= a.min_count());
        assert!(a.is_contradictory());
        assert_eq!(knowledge.contradictions().collect::<Vec<char>>(), vec!['a']);
    }

    #[test]
    fn incomplete_guess_results_add_nothing() {
        let short = GuessResult {
            guess: "tru".into(),
            results: vec![Correct; 3],
        };
        let mut knowledge = Knowledge::new();

        knowledge.update_with(&short);

        assert!(knowledge.is_empty());
        assert!(Knowledge::from_guesses(&[short]).is_empty());
    }

    #[test]
    fn display_knowledge() {
        let mut knowledge = Knowledge::new();

        knowledge.update("crate", &[Absent, Correct, Absent, Present, Absent]);

        assert_eq!(
            knowledge.to_string(),
            "a: 0--1 good= present=\n\
             c: 0--1 good= present=\n\
             e: 0--1 good= present=\n\
             r: 0-5 good=1 present=\n\
             t: 1-5 good= present=3\n"
        );
    }
}
