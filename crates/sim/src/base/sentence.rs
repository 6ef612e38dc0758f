use super::{Dictionary, WordId};
use std::fmt;

/// An ordered sequence of dictionary words.
///
/// A sentence never changes length once seeded. Mutation works on a clone of
/// the ancestor, so a sentence handed to a tree node is never aliased by a
/// later mutation step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sentence(Vec<WordId>);

impl Sentence {
    /// Create a sentence from word ids.
    pub fn from_words(words: Vec<WordId>) -> Self {
        Self(words)
    }

    /// Number of word positions.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sentence has no words.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the word at `position`, or `None` if out of range.
    #[inline]
    pub fn get(&self, position: usize) -> Option<WordId> {
        self.0.get(position).copied()
    }

    /// Borrow the underlying word ids.
    #[inline]
    pub fn as_slice(&self) -> &[WordId] {
        &self.0
    }

    /// Iterate over the word ids in order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = WordId> + '_ {
        self.0.iter().copied()
    }

    /// Put `word` at `position`.
    ///
    /// # Panics
    /// Panics if `position` is out of bounds (matching slice indexing).
    #[inline]
    pub fn replace(&mut self, position: usize, word: WordId) {
        self.0[position] = word;
    }

    /// Render the sentence against `dictionary`, words separated by spaces.
    pub fn display<'a>(&'a self, dictionary: &'a Dictionary) -> SentenceDisplay<'a> {
        SentenceDisplay {
            sentence: self,
            dictionary,
        }
    }
}

impl From<Vec<WordId>> for Sentence {
    fn from(words: Vec<WordId>) -> Self {
        Self(words)
    }
}

/// Helper returned by [`Sentence::display`].
pub struct SentenceDisplay<'a> {
    sentence: &'a Sentence,
    dictionary: &'a Dictionary,
}

impl fmt::Display for SentenceDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.sentence.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(self.dictionary.word(id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_words() {
        let dict = Dictionary::from_words(["the", "cat", "sat"]).unwrap();
        let sentence = dict.resolve(["the", "cat", "sat"]).unwrap();
        assert_eq!(sentence.display(&dict).to_string(), "THE CAT SAT");
    }

    #[test]
    fn test_replace_keeps_length() {
        let dict = Dictionary::from_words(["cat", "bat"]).unwrap();
        let mut sentence = dict.resolve(["cat", "cat"]).unwrap();
        sentence.replace(1, WordId::new(1));
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence.display(&dict).to_string(), "CAT BAT");
    }

    #[test]
    fn test_empty_sentence_displays_nothing() {
        let dict = Dictionary::from_words(["cat"]).unwrap();
        let sentence = Sentence::default();
        assert!(sentence.is_empty());
        assert_eq!(sentence.display(&dict).to_string(), "");
    }
}
