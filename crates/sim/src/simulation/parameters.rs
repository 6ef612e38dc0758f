//! Simulation parameters and configuration.
//!
//! [`Configuration`] captures everything needed to reproduce a run: where the
//! dictionary lives, the seed sentence, the tunables and the RNG seed. It
//! round-trips through JSON so a run can be saved and replayed.

use crate::evolution::round_half_up;
use crate::errors::{BuilderError, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The four tunables of a run, minus the seed sentence itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParameters {
    /// Mean edits per word, per branch.
    pub mean_edits_per_word: f64,
    /// Maximum edits per letter, per branch.
    pub max_edits_per_letter: f64,
    /// Number of generations between the root and every leaf.
    pub depth: usize,
}

impl TreeParameters {
    pub fn new(mean_edits_per_word: f64, max_edits_per_letter: f64, depth: usize) -> Self {
        Self {
            mean_edits_per_word,
            max_edits_per_letter,
            depth,
        }
    }

    /// Edit budget of one generation for a seed sentence of `seed_len` words.
    pub fn edits_per_generation(&self, seed_len: usize) -> i64 {
        round_half_up(self.mean_edits_per_word * seed_len as f64)
    }

    /// Reject NaN, infinite and negative rates.
    pub fn validate(&self) -> Result<(), BuilderError> {
        check_rate("mean_edits_per_word", self.mean_edits_per_word)?;
        check_rate("max_edits_per_letter", self.max_edits_per_letter)
    }

    /// Total number of nodes in the tree: `2^(depth+1) - 1`.
    ///
    /// Saturates at `u64::MAX` for absurd depths.
    pub fn node_count(&self) -> u64 {
        match u32::try_from(self.depth + 1) {
            Ok(exp) if exp < 64 => (1u64 << exp) - 1,
            _ => u64::MAX,
        }
    }
}

fn check_rate(name: &str, value: f64) -> Result<(), BuilderError> {
    if !value.is_finite() || value < 0.0 {
        return Err(BuilderError::InvalidParameter(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(())
}

/// Order in which tree nodes are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Node, then first subtree, then second subtree.
    #[default]
    PreOrder,
    /// First subtree, then node, then second subtree.
    InOrder,
}

/// How the tree walk keeps track of pending work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpansionStrategy {
    /// Plain recursion; stack depth equals tree depth.
    #[default]
    Recursive,
    /// Explicit work stack on the heap.
    Iterative,
}

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Dictionary file path
    pub dictionary: PathBuf,
    /// Root sentence, as typed (case is normalized on resolution)
    pub seed_words: Vec<String>,
    pub parameters: TreeParameters,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub traversal: TraversalOrder,
    #[serde(default)]
    pub strategy: ExpansionStrategy,
}

impl Configuration {
    pub fn new(
        dictionary: impl Into<PathBuf>,
        seed_words: Vec<String>,
        parameters: TreeParameters,
    ) -> Self {
        Self {
            dictionary: dictionary.into(),
            seed_words,
            parameters,
            seed: None,
            traversal: TraversalOrder::default(),
            strategy: ExpansionStrategy::default(),
        }
    }

    /// Read a configuration previously written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
