//! Exhaustive neighbor search over the dictionary.

use super::EditDistanceMatrix;
use crate::base::{Dictionary, WordId};
use crate::errors::EvolutionError;

/// A dictionary word reachable from a source word, with its edit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub word: WordId,
    pub distance: usize,
}

/// Finds every dictionary word within an edit budget of a source word.
///
/// Owns the scratch matrix it computes distances with; the dictionary is
/// borrowed read-only for the whole run.
#[derive(Debug, Clone)]
pub struct NeighborFinder<'a> {
    dictionary: &'a Dictionary,
    matrix: EditDistanceMatrix,
}

impl<'a> NeighborFinder<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            matrix: EditDistanceMatrix::for_dictionary(dictionary),
        }
    }

    /// The dictionary searched by this finder.
    #[inline]
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// All words other than `source` within `max_edits` edits, in ascending
    /// dictionary order.
    ///
    /// The order is part of the contract: weighted sampling walks this list,
    /// so a different order changes which neighbor a given random draw picks.
    /// A negative budget yields no neighbors.
    pub fn neighbors(
        &mut self,
        source: WordId,
        max_edits: i64,
    ) -> Result<Vec<Neighbor>, EvolutionError> {
        let mut found = Vec::new();
        if max_edits < 0 {
            return Ok(found);
        }
        let budget = max_edits as usize;
        let dictionary = self.dictionary;
        let source_chars = dictionary.chars(source);

        for (candidate, _) in dictionary.iter() {
            if candidate == source {
                continue;
            }
            let candidate_chars = dictionary.chars(candidate);
            // Length difference is a lower bound on the distance.
            if source_chars.len().abs_diff(candidate_chars.len()) > budget {
                continue;
            }
            let distance = self.matrix.distance(source_chars, candidate_chars)?;
            if distance <= budget {
                found.push(Neighbor {
                    word: candidate,
                    distance,
                });
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "bat", "bar", "car", "cart", "scarf", "dog"]).unwrap()
    }

    fn words(dict: &Dictionary, found: &[Neighbor]) -> Vec<String> {
        found.iter().map(|n| dict.word(n.word).to_string()).collect()
    }

    #[test]
    fn test_neighbors_within_one_edit() {
        let dict = Dictionary::from_words(["cat", "bat", "bar", "car"]).unwrap();
        let mut finder = NeighborFinder::new(&dict);
        let cat = dict.lookup("cat").unwrap();

        let found = finder.neighbors(cat, 1).unwrap();
        assert_eq!(words(&dict, &found), vec!["BAT", "CAR"]);
        assert!(found.iter().all(|n| n.distance == 1));
    }

    #[test]
    fn test_neighbors_excludes_source_and_keeps_order() {
        let dict = dictionary();
        let mut finder = NeighborFinder::new(&dict);
        let cat = dict.lookup("cat").unwrap();

        let found = finder.neighbors(cat, 2).unwrap();
        assert_eq!(words(&dict, &found), vec!["BAT", "BAR", "CAR", "CART"]);
        let distances: Vec<usize> = found.iter().map(|n| n.distance).collect();
        assert_eq!(distances, vec![1, 2, 1, 1]);
    }

    #[test]
    fn test_neighbors_match_brute_force_and_grow_with_budget() {
        let dict = dictionary();
        let mut finder = NeighborFinder::new(&dict);
        let mut matrix = EditDistanceMatrix::with_capacity(dict.max_word_len());

        for (source, _) in dict.iter() {
            let mut previous = 0;
            for k in 0..=5 {
                let found = finder.neighbors(source, k).unwrap();
                let expected: Vec<WordId> = dict
                    .iter()
                    .map(|(id, _)| id)
                    .filter(|&id| id != source)
                    .filter(|&id| {
                        matrix.distance(dict.chars(source), dict.chars(id)).unwrap() as i64 <= k
                    })
                    .collect();
                let got: Vec<WordId> = found.iter().map(|n| n.word).collect();
                assert_eq!(got, expected);
                assert!(found.len() >= previous);
                previous = found.len();
            }
        }
    }

    #[test]
    fn test_zero_and_negative_budget() {
        let dict = dictionary();
        let mut finder = NeighborFinder::new(&dict);
        let cat = dict.lookup("cat").unwrap();
        assert!(finder.neighbors(cat, 0).unwrap().is_empty());
        assert!(finder.neighbors(cat, -3).unwrap().is_empty());
    }

    #[test]
    fn test_isolated_word_has_no_neighbors() {
        let dict = dictionary();
        let mut finder = NeighborFinder::new(&dict);
        let dog = dict.lookup("dog").unwrap();
        assert!(finder.neighbors(dog, 2).unwrap().is_empty());
    }
}
