//! Levenshtein distance over a reusable scratch matrix.
//!
//! Neighbor searches compare one word against every dictionary entry, so the
//! dynamic-programming table is allocated once per run and only its interior
//! is rewritten per comparison. Row 0 and column 0 are seeded when the matrix
//! is built and never touched afterwards.
//!
//! Reusing the table is exactly what can go wrong: a stale border or a
//! mis-sized stride would silently corrupt every distance. The integrity
//! check in [`EditDistanceMatrix::distance`] turns that into a hard error.

use crate::base::Dictionary;
use crate::errors::EvolutionError;
use std::fmt::Write as _;

/// Caller-owned scratch buffer for edit-distance computations.
///
/// `distance` takes `&mut self`; concurrent users each need their own matrix.
#[derive(Debug, Clone)]
pub struct EditDistanceMatrix {
    /// Longest word length the matrix can hold.
    capacity: usize,
    /// Row-major `(capacity + 1) × (capacity + 1)` cells.
    cells: Vec<usize>,
}

impl EditDistanceMatrix {
    /// Allocate a matrix for words up to `capacity` characters long.
    pub fn with_capacity(capacity: usize) -> Self {
        let stride = capacity + 1;
        let mut cells = vec![0; stride * stride];
        for i in 1..=capacity {
            cells[i * stride] = i;
            cells[i] = i;
        }
        Self { capacity, cells }
    }

    /// Allocate a matrix sized for the longest word in `dictionary`.
    pub fn for_dictionary(dictionary: &Dictionary) -> Self {
        Self::with_capacity(dictionary.max_word_len())
    }

    /// Longest word length the matrix currently holds without regrowing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn stride(&self) -> usize {
        self.capacity + 1
    }

    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.stride() + j]
    }

    fn ensure_capacity(&mut self, len: usize) {
        if len > self.capacity {
            tracing::debug!(from = self.capacity, to = len, "growing edit distance matrix");
            *self = Self::with_capacity(len);
        }
    }

    /// Minimum number of single-character substitutions, insertions and
    /// deletions turning `x` into `y`.
    ///
    /// Callers should avoid comparing a word with itself; that is wasted work
    /// but still returns 0.
    ///
    /// # Errors
    /// Returns [`EvolutionError::ZeroDistance`] if the table yields 0 for two
    /// different words.
    pub fn distance(&mut self, x: &[char], y: &[char]) -> Result<usize, EvolutionError> {
        self.ensure_capacity(x.len().max(y.len()));
        let stride = self.stride();

        for i in 1..=x.len() {
            for j in 1..=y.len() {
                let substitution = self.cells[(i - 1) * stride + (j - 1)]
                    + usize::from(x[i - 1] != y[j - 1]);
                let deletion = self.cells[(i - 1) * stride + j] + 1;
                let insertion = self.cells[i * stride + (j - 1)] + 1;
                self.cells[i * stride + j] = substitution.min(deletion.min(insertion));
            }
        }

        let dist = self.at(x.len(), y.len());
        if dist == 0 && x != y {
            return Err(EvolutionError::ZeroDistance {
                left: x.iter().collect(),
                right: y.iter().collect(),
                matrix: self.dump(x, y),
            });
        }
        Ok(dist)
    }

    /// Render the region used for `x` against `y`: one column per character
    /// of `x`, one row per character of `y`.
    fn dump(&self, x: &[char], y: &[char]) -> String {
        let mut out = String::from("*");
        for c in x {
            let _ = write!(out, "\t{c}");
        }
        out.push('\n');
        for j in 0..=y.len() {
            out.push(if j == 0 { '*' } else { y[j - 1] });
            for i in 0..=x.len() {
                let _ = write!(out, "\t{}", self.at(i, j));
            }
            out.push('\n');
        }
        out
    }
}
