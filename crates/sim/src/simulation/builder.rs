//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! validation of every tunable before the random stream is started.

pub use crate::errors::BuilderError;
use crate::base::Dictionary;
use crate::simulation::{ExpansionStrategy, Simulation, TraversalOrder, TreeParameters};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use lexevo_sim::base::Dictionary;
/// use lexevo_sim::simulation::{NullSink, SimulationBuilder};
///
/// let dictionary = Dictionary::from_words(["cat", "bat", "bar", "car"]).unwrap();
/// let mut sim = SimulationBuilder::new()
///     .dictionary(dictionary)
///     .seed_words(["cat"])
///     .mean_edits_per_word(1.0)
///     .max_edits_per_letter(1.0)
///     .depth(2)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut lines: Vec<String> = Vec::new();
/// let summary = sim.run(&mut lines, &mut NullSink).unwrap();
/// assert_eq!(summary.nodes, 7);
/// assert_eq!(lines[0], "CAT");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    dictionary: Option<Dictionary>,
    seed_words: Option<Vec<String>>,
    mean_edits_per_word: Option<f64>,
    max_edits_per_letter: Option<f64>,
    depth: Option<usize>,

    // Optional, with defaults
    seed: Option<u64>,                // Default: None (drawn at build time)
    traversal: TraversalOrder,        // Default: pre-order
    strategy: ExpansionStrategy,      // Default: recursive
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dictionary (required).
    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Set the root sentence, one dictionary word per item (required).
    pub fn seed_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Set the mean number of edits per word on each branch (required).
    pub fn mean_edits_per_word(mut self, mean: f64) -> Self {
        self.mean_edits_per_word = Some(mean);
        self
    }

    /// Set the per-letter edit allowance on each branch (required).
    pub fn max_edits_per_letter(mut self, max: f64) -> Self {
        self.max_edits_per_letter = Some(max);
        self
    }

    /// Set the tree depth in generations (required).
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set mean edits, per-letter allowance and depth in one go.
    pub fn parameters(self, parameters: TreeParameters) -> Self {
        self.mean_edits_per_word(parameters.mean_edits_per_word)
            .max_edits_per_letter(parameters.max_edits_per_letter)
            .depth(parameters.depth)
    }

    /// Set the random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn traversal(mut self, traversal: TraversalOrder) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn strategy(mut self, strategy: ExpansionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validate everything and start the random stream.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let dictionary = self
            .dictionary
            .ok_or(BuilderError::MissingRequired("dictionary"))?;
        let seed_words = self
            .seed_words
            .ok_or(BuilderError::MissingRequired("seed_words"))?;
        let parameters = TreeParameters {
            mean_edits_per_word: self
                .mean_edits_per_word
                .ok_or(BuilderError::MissingRequired("mean_edits_per_word"))?,
            max_edits_per_letter: self
                .max_edits_per_letter
                .ok_or(BuilderError::MissingRequired("max_edits_per_letter"))?,
            depth: self.depth.ok_or(BuilderError::MissingRequired("depth"))?,
        };
        parameters.validate()?;

        if seed_words.is_empty() {
            return Err(BuilderError::InvalidParameter(
                "seed sentence must contain at least one word".to_string(),
            ));
        }
        let root = dictionary.resolve(&seed_words)?;

        Ok(Simulation::from_parts(
            dictionary,
            root,
            parameters,
            self.traversal,
            self.strategy,
            self.seed,
        ))
    }
}
