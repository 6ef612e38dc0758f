//! Simulation engine for sentence evolution.
//!
//! A [`Simulation`] owns everything a run needs: the dictionary, the resolved
//! root sentence, the tunables and a seeded random stream. Running it expands
//! the full tree into the given sinks.

use super::{
    Configuration, EvolutionTree, ExpansionStrategy, LineSink, SimulationBuilder, TraversalOrder,
    TreeParameters, TreeSummary,
};
use crate::base::{Dictionary, Sentence};
use crate::errors::{BuilderError, EvolutionError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Main simulation engine.
#[derive(Debug, Clone)]
pub struct Simulation {
    dictionary: Dictionary,
    /// Root of the tree
    root: Sentence,
    parameters: TreeParameters,
    traversal: TraversalOrder,
    strategy: ExpansionStrategy,
    /// Seed the random stream was started from
    seed: u64,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from a saved or assembled configuration, loading
    /// the dictionary from disk.
    pub fn new(config: &Configuration) -> Result<Self, BuilderError> {
        let dictionary = Dictionary::load(&config.dictionary)?;
        let mut builder = SimulationBuilder::new()
            .dictionary(dictionary)
            .seed_words(config.seed_words.iter().cloned())
            .parameters(config.parameters)
            .traversal(config.traversal)
            .strategy(config.strategy);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    /// Assemble a simulation from already validated parts.
    pub(crate) fn from_parts(
        dictionary: Dictionary,
        root: Sentence,
        parameters: TreeParameters,
        traversal: TraversalOrder,
        strategy: ExpansionStrategy,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!(seed, "random stream seeded");
        Self {
            dictionary,
            root,
            parameters,
            traversal,
            strategy,
            seed,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    pub fn root(&self) -> &Sentence {
        &self.root
    }

    #[inline]
    pub fn parameters(&self) -> &TreeParameters {
        &self.parameters
    }

    #[inline]
    pub fn traversal(&self) -> TraversalOrder {
        self.traversal
    }

    #[inline]
    pub fn strategy(&self) -> ExpansionStrategy {
        self.strategy
    }

    /// The seed actually used, whether configured or drawn at build time.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Edit budget spent on every edge of the tree.
    pub fn edits_per_generation(&self) -> i64 {
        self.parameters.edits_per_generation(self.root.len())
    }

    /// Expand the whole tree, writing one primary line per node.
    ///
    /// The random stream continues from wherever the previous run left it;
    /// build a fresh simulation to replay a seed.
    pub fn run<P, D>(
        &mut self,
        primary: &mut P,
        diagnostics: &mut D,
    ) -> Result<TreeSummary, EvolutionError>
    where
        P: LineSink + ?Sized,
        D: LineSink + ?Sized,
    {
        let edits = self.edits_per_generation();
        tracing::debug!(
            words = self.root.len(),
            edits_per_generation = edits,
            max_edits_per_letter = self.parameters.max_edits_per_letter,
            depth = self.parameters.depth,
            "expanding tree"
        );
        let mut tree = EvolutionTree::new(
            &self.dictionary,
            edits,
            self.parameters.max_edits_per_letter,
        )
        .with_order(self.traversal);
        tree.expand_with(
            self.strategy,
            &self.root,
            self.parameters.depth,
            &mut self.rng,
            primary,
            diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::NullSink;

    fn builder() -> SimulationBuilder {
        let dict = Dictionary::from_words([
            "cat", "bat", "bar", "car", "cart", "care", "core", "bore",
        ])
        .unwrap();
        SimulationBuilder::new()
            .dictionary(dict)
            .seed_words(["cat", "bore"])
            .mean_edits_per_word(1.0)
            .max_edits_per_letter(1.0)
            .depth(3)
    }

    #[test]
    fn test_edits_per_generation() {
        let sim = builder().seed(1).build().unwrap();
        assert_eq!(sim.edits_per_generation(), 2);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = builder().seed(42).build().unwrap();
        let mut b = builder().seed(42).build().unwrap();
        let mut out_a: Vec<String> = Vec::new();
        let mut out_b: Vec<String> = Vec::new();
        a.run(&mut out_a, &mut NullSink).unwrap();
        b.run(&mut out_b, &mut NullSink).unwrap();
        assert_eq!(out_a, out_b);
        assert_eq!(out_a.len(), 15);
    }

    #[test]
    fn test_drawn_seed_replays() {
        let mut first = builder().build().unwrap();
        let mut replay = builder().seed(first.seed()).build().unwrap();
        let mut out_a: Vec<String> = Vec::new();
        let mut out_b: Vec<String> = Vec::new();
        first.run(&mut out_a, &mut NullSink).unwrap();
        replay.run(&mut out_b, &mut NullSink).unwrap();
        assert_eq!(out_a, out_b);
    }
}
