use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in every guess this crate reasons about.
pub const WORD_LENGTH: usize = 5;

/// The feedback given for a letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the word at this location.
    Correct,
    /// The letter is in the word, but somewhere else.
    Present,
    /// The letter is not in the word, or the word holds fewer copies of it than were guessed.
    Absent,
    /// No recognized feedback was given. This imposes no constraint on the letter.
    Unknown,
}

impl LetterResult {
    /// Maps a feedback tag (`"correct"`, `"present"` or `"absent"`) to its result.
    ///
    /// Any other tag maps to [`LetterResult::Unknown`].
    ///
    /// ```
    /// use wordle_knowledge::LetterResult;
    ///
    /// assert_eq!(LetterResult::from_tag("present"), LetterResult::Present);
    /// assert_eq!(LetterResult::from_tag("tbd"), LetterResult::Unknown);
    /// ```
    pub fn from_tag(tag: &str) -> LetterResult {
        match tag {
            "correct" => LetterResult::Correct,
            "present" => LetterResult::Present,
            "absent" => LetterResult::Absent,
            _ => LetterResult::Unknown,
        }
    }

    /// Parses the compact notation: `g` for correct, `y` for present, `.` for absent.
    pub fn from_char(c: char) -> Option<LetterResult> {
        match c.to_ascii_lowercase() {
            'g' => Some(LetterResult::Correct),
            'y' => Some(LetterResult::Present),
            '.' => Some(LetterResult::Absent),
            _ => None,
        }
    }

    /// The compact notation for this result. `Unknown` is written as `?`.
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::Present => 'y',
            LetterResult::Absent => '.',
            LetterResult::Unknown => '?',
        }
    }
}

/// Indicates that a word list or a guess row could not be read.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The word list couldn't be read.
    #[error("failed to read words: {0}")]
    Io(#[from] io::Error),
    /// The guess or its feedback doesn't have the expected number of letters.
    #[error("\"{word}\" has {} letters, expected {expected}", word.chars().count())]
    WordLength { word: String, expected: usize },
    /// Guesses may only contain ASCII letters.
    #[error("unsupported character '{0}' in guess")]
    UnsupportedCharacter(char),
    /// Feedback may only use `g`, `y` and `.`.
    #[error("unsupported feedback '{0}', use 'g', 'y' or '.'")]
    InvalidFeedback(char),
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult {
    /// The lower-cased guess.
    pub guess: Box<str>,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl GuessResult {
    /// Parses a guess and its feedback in compact notation, e.g. `("crate", ".g.y.")`.
    pub fn parse(guess: &str, pattern: &str) -> Result<GuessResult, WordleError> {
        let guess = guess.trim();
        let pattern = pattern.trim();
        for word in [guess, pattern] {
            if word.chars().count() != WORD_LENGTH {
                return Err(WordleError::WordLength {
                    word: word.to_string(),
                    expected: WORD_LENGTH,
                });
            }
        }
        if let Some(bad) = guess.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordleError::UnsupportedCharacter(bad));
        }
        let results = pattern
            .chars()
            .map(|c| LetterResult::from_char(c).ok_or(WordleError::InvalidFeedback(c)))
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        Ok(GuessResult {
            guess: guess.to_ascii_lowercase().into_boxed_str(),
            results,
        })
    }

    /// The guess as a row of letters, as laid out on the board.
    pub fn letters(&self) -> Vec<char> {
        self.guess.chars().collect()
    }

    /// Returns `true` iff every letter was correct.
    pub fn is_solved(&self) -> bool {
        self.results.len() == WORD_LENGTH
            && self
                .results
                .iter()
                .all(|result| *result == LetterResult::Correct)
    }
}
