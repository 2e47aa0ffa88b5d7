use crate::knowledge::Knowledge;
use crate::results::LetterResult;
use log::debug;
use rayon::prelude::*;

/// Returns the words in the dictionary that satisfy the given knowledge.
///
/// Order and duplicates are preserved from the dictionary.
///
/// ```
/// use wordle_knowledge::filter_words;
/// use wordle_knowledge::Knowledge;
/// use wordle_knowledge::LetterResult;
///
/// let mut knowledge = Knowledge::new();
/// knowledge.update("abcde", &[LetterResult::Correct; 5]);
///
/// assert_eq!(filter_words(&["abcde", "edcba", "abcde"], &knowledge), vec!["abcde", "abcde"]);
/// ```
pub fn filter_words<W>(dictionary: &[W], knowledge: &Knowledge) -> Vec<W>
where
    W: AsRef<str> + Clone,
{
    let matching: Vec<W> = dictionary
        .iter()
        .filter(|word| knowledge.is_satisfied_by(word.as_ref()))
        .cloned()
        .collect();
    debug!(
        "Kept {} of {} candidate words",
        matching.len(),
        dictionary.len()
    );
    matching
}

/// Same as [`filter_words`], but checks the words in parallel.
pub fn par_filter_words<W>(dictionary: &[W], knowledge: &Knowledge) -> Vec<W>
where
    W: AsRef<str> + Clone + Send + Sync,
{
    let matching: Vec<W> = dictionary
        .par_iter()
        .filter(|word| knowledge.is_satisfied_by(word.as_ref()))
        .cloned()
        .collect();
    debug!(
        "Kept {} of {} candidate words",
        matching.len(),
        dictionary.len()
    );
    matching
}

/// Derives the knowledge from a board of guesses, then filters the dictionary by it.
///
/// Each row of `word_grid` is a guess as individual letters, and the same row of `state_grid`
/// holds the feedback for each letter. Unplayed or incomplete rows are skipped.
///
/// ```
/// use wordle_knowledge::calculate;
/// use wordle_knowledge::LetterResult;
///
/// let states: Vec<LetterResult> = ["absent", "correct", "absent", "present", "absent"]
///     .into_iter()
///     .map(LetterResult::from_tag)
///     .collect();
///
/// let words = calculate(
///     &[vec!['c', 'r', 'a', 't', 'e'], vec![]],
///     &[states, vec![]],
///     &["bayou", "trust", "tripe", "truly"],
/// );
///
/// assert_eq!(words, vec!["trust", "truly"]);
/// ```
pub fn calculate<R, S, W>(word_grid: &[R], state_grid: &[S], dictionary: &[W]) -> Vec<W>
where
    R: AsRef<[char]>,
    S: AsRef<[LetterResult]>,
    W: AsRef<str> + Clone,
{
    let knowledge = Knowledge::from_history(word_grid, state_grid);
    debug!(
        "Derived constraints for {} letters from {} rows",
        knowledge.len(),
        word_grid.len()
    );
    filter_words(dictionary, &knowledge)
}
