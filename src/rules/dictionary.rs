//! Word-validity oracle.
//!
//! The engine never stores a lexicon itself; it asks a `Dictionary` whether
//! each word a move forms is acceptable. Lookups are case-insensitive.

use rustc_hash::FxHashSet;

/// Boolean word-validity contract consumed by the engine.
pub trait Dictionary {
    /// True if `word` is acceptable. Must ignore letter case.
    fn is_word_valid(&self, word: &str) -> bool;
}

/// Any `Fn(&str) -> bool` is a dictionary.
///
/// ```
/// use rust_wordgrid::rules::Dictionary;
///
/// let anything = |_: &str| true;
/// assert!(anything.is_word_valid("QZX"));
/// ```
impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_word_valid(&self, word: &str) -> bool {
        self(word)
    }
}

/// In-memory word list, stored uppercase.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One word per line. Blank lines and surrounding whitespace are ignored.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Add a word.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_uppercase());
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Dictionary for WordList {
    fn is_word_valid(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let list: WordList = ["cat", "Dog"].into_iter().collect();

        assert!(list.is_word_valid("CAT"));
        assert!(list.is_word_valid("cat"));
        assert!(list.is_word_valid("dOG"));
        assert!(!list.is_word_valid("COW"));
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let list = WordList::from_text("aa\n\n  ab \r\nzzz\n");
        assert_eq!(list.len(), 3);
        assert!(list.is_word_valid("AB"));
    }

    #[test]
    fn test_empty_list_accepts_nothing() {
        let list = WordList::new();
        assert!(list.is_empty());
        assert!(!list.is_word_valid("A"));
    }

    #[test]
    fn test_closure_dictionary() {
        let short = |w: &str| w.len() <= 3;
        assert!(short.is_word_valid("CAT"));
        assert!(!short.is_word_valid("CATS"));
    }
}
