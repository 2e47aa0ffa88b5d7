use crate::results::WordleError;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered list of candidate words.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped. Word lengths aren't checked.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let mut all_words = Vec::new();
        for maybe_word in word_reader.lines() {
            if let Some(word) = WordBank::normalize(&maybe_word?) {
                all_words.push(word);
            }
        }
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Words are handled the same way as in [`WordBank::from_reader`].
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| WordBank::normalize(word.as_ref()))
                .collect(),
        }
    }

    fn normalize(word: &str) -> Option<Arc<str>> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        Some(Arc::from(word.to_lowercase().as_str()))
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}
