use super::Sentence;
use crate::errors::DictionaryError;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Stable index of a word within a [`Dictionary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    /// Build an id from a raw dictionary index.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The position of this word in dictionary order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, de-duplicated, upper-cased word list.
///
/// Words keep the order in which they were last seen in the source; a word
/// repeated in the source only survives at its final occurrence. Each word is
/// also cached as a `char` slice so edit distance never re-decodes UTF-8.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    chars: Vec<Box<[char]>>,
    index: HashMap<String, WordId>,
    max_word_len: usize,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut last_seen: HashMap<&str, usize> = HashMap::with_capacity(tokens.len());
        for (position, token) in tokens.iter().enumerate() {
            last_seen.insert(token.as_str(), position);
        }

        let survivors: Vec<String> = tokens
            .iter()
            .enumerate()
            .filter(|(position, token)| last_seen[token.as_str()] == *position)
            .map(|(_, token)| token.clone())
            .collect();

        if survivors.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let chars: Vec<Box<[char]>> = survivors
            .iter()
            .map(|w| w.chars().collect::<Vec<_>>().into_boxed_slice())
            .collect();
        let max_word_len = chars.iter().map(|c| c.len()).max().unwrap_or(0);
        let index = survivors
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), WordId::new(i)))
            .collect();

        tracing::debug!(
            tokens = tokens.len(),
            words = survivors.len(),
            max_word_len,
            "dictionary built"
        );

        Ok(Self {
            words: survivors,
            chars,
            index,
            max_word_len,
        })
    }

    /// Read whitespace-separated words from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        Self::from_words(tokens)
    }

    /// Load a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            DictionaryError::Io(source) => DictionaryError::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a successfully built dictionary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, in characters.
    #[inline]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// The word stored under `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this dictionary.
    #[inline]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    /// The characters of the word stored under `id`.
    #[inline]
    pub fn chars(&self, id: WordId) -> &[char] {
        &self.chars[id.index()]
    }

    /// Length of the word stored under `id`, in characters.
    #[inline]
    pub fn word_len(&self, id: WordId) -> usize {
        self.chars[id.index()].len()
    }

    /// Find a word, ignoring case.
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        self.index.get(&word.to_uppercase()).copied()
    }

    /// Map seed words onto dictionary ids, failing on the first unknown word.
    pub fn resolve<I, S>(&self, words: I) -> Result<Sentence, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| {
                let upper = w.as_ref().to_uppercase();
                self.index
                    .get(&upper)
                    .copied()
                    .ok_or(DictionaryError::UnknownWord(upper))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Sentence::from_words)
    }

    /// Iterate over `(id, word)` pairs in dictionary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId::new(i), w.as_str()))
    }
}
