//! Budget-constrained mutation of a sentence.
//!
//! One generation of copying noise is modeled as an *episode*: a total edit
//! budget is spent in discrete steps, each step replacing a single word with
//! one of its dictionary neighbors. Every word position also carries its own
//! allowance, proportional to the word's length, so long words can drift
//! further than short ones within the same episode.
//!
//! ## Step selection
//! At each step every position lists its neighbors within
//! `min(global remaining, position remaining)` edits. Each neighbor of
//! position `n` gets weight `1 / |neighbors(n)|`, so every position that can
//! still move is equally likely to be picked, whatever its neighbor count;
//! within the picked position every neighbor is equally likely. The draw is
//! inverse-CDF sampling over the flattened, position-major candidate list,
//! consuming exactly one uniform `f64` per step.
//!
//! ## Termination
//! The episode ends once the global budget reaches zero. A step never costs
//! more than the global remainder, so the budget lands on zero exactly.

use super::{Neighbor, NeighborFinder};
use crate::base::{Dictionary, Sentence, WordId};
use crate::errors::EvolutionError;
use crate::simulation::LineSink;
use rand::Rng;

/// Round half up: `floor(x + 0.5)`.
#[inline]
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Remaining edits for one mutation episode.
///
/// Both counters only ever decrease; the per-position allowances are fixed
/// from the word lengths at the start of the episode and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBudget {
    remaining: i64,
    per_position: Vec<i64>,
}

impl EditBudget {
    /// Start an episode on `sentence` with `edits` to spend.
    pub fn new(
        dictionary: &Dictionary,
        sentence: &Sentence,
        edits: i64,
        max_edits_per_letter: f64,
    ) -> Self {
        let per_position = sentence
            .iter()
            .map(|word| round_half_up(max_edits_per_letter * dictionary.word_len(word) as f64))
            .collect();
        Self {
            remaining: edits,
            per_position,
        }
    }

    /// Edits left for the whole sentence.
    #[inline]
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Edits left for `position` alone.
    #[inline]
    pub fn position_remaining(&self, position: usize) -> i64 {
        self.per_position[position]
    }

    /// The largest distance a replacement at `position` may have right now.
    #[inline]
    pub fn limit(&self, position: usize) -> i64 {
        self.remaining.min(self.per_position[position])
    }

    /// Charge a replacement of `distance` edits at `position`.
    #[inline]
    pub fn consume(&mut self, position: usize, distance: usize) {
        let distance = distance as i64;
        self.per_position[position] -= distance;
        self.remaining -= distance;
    }

    #[inline]
    pub fn is_spent(&self) -> bool {
        self.remaining <= 0
    }
}

/// A single word replacement made during an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationStep {
    pub position: usize,
    pub from: WordId,
    pub to: WordId,
    pub distance: usize,
    /// `min(global, position)` budget the replacement was drawn under.
    pub limit: i64,
}

/// Result of one full episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub sentence: Sentence,
    pub steps: Vec<MutationStep>,
}

impl Episode {
    /// Total edits spent across all steps.
    pub fn edits_consumed(&self) -> usize {
        self.steps.iter().map(|s| s.distance).sum()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: usize,
    neighbor: Neighbor,
    weight: f64,
}

/// Applies one generation of mutation to sentences.
#[derive(Debug, Clone)]
pub struct SentenceMutator<'a> {
    finder: NeighborFinder<'a>,
    max_edits_per_letter: f64,
}

impl<'a> SentenceMutator<'a> {
    pub fn new(dictionary: &'a Dictionary, max_edits_per_letter: f64) -> Self {
        Self {
            finder: NeighborFinder::new(dictionary),
            max_edits_per_letter,
        }
    }

    #[inline]
    pub fn dictionary(&self) -> &'a Dictionary {
        self.finder.dictionary()
    }

    #[inline]
    pub fn max_edits_per_letter(&self) -> f64 {
        self.max_edits_per_letter
    }

    /// Spend `edits` on a copy of `ancestor` and return the descendant.
    ///
    /// # Errors
    /// [`EvolutionError::Exhausted`] if at some step no position has a
    /// neighbor within budget, [`EvolutionError::ZeroDistance`] on a distance
    /// integrity failure, [`EvolutionError::Output`] if `diagnostics` fails.
    pub fn mutate<R, D>(
        &mut self,
        ancestor: &Sentence,
        edits: i64,
        rng: &mut R,
        diagnostics: &mut D,
    ) -> Result<Sentence, EvolutionError>
    where
        R: Rng + ?Sized,
        D: LineSink + ?Sized,
    {
        self.mutate_traced(ancestor, edits, rng, diagnostics)
            .map(|episode| episode.sentence)
    }

    /// Like [`mutate`](Self::mutate), also returning every step taken.
    pub fn mutate_traced<R, D>(
        &mut self,
        ancestor: &Sentence,
        edits: i64,
        rng: &mut R,
        diagnostics: &mut D,
    ) -> Result<Episode, EvolutionError>
    where
        R: Rng + ?Sized,
        D: LineSink + ?Sized,
    {
        let dictionary = self.finder.dictionary();
        let mut descendant = ancestor.clone();
        let mut budget = EditBudget::new(dictionary, &descendant, edits, self.max_edits_per_letter);
        let mut steps = Vec::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        while !budget.is_spent() {
            diagnostics.write_line(&format!(
                "{} ({} edits left)",
                descendant.display(dictionary),
                budget.remaining()
            ))?;

            candidates.clear();
            let mut total_weight = 0.0;
            for (position, word) in descendant.iter().enumerate() {
                let neighbors = self.finder.neighbors(word, budget.limit(position))?;
                if steps.is_empty() && neighbors.is_empty() {
                    diagnostics
                        .write_line(&format!("Warning: stuck on '{}'", dictionary.word(word)))?;
                }
                let weight = 1.0 / neighbors.len() as f64;
                for neighbor in neighbors {
                    candidates.push(Candidate {
                        position,
                        neighbor,
                        weight,
                    });
                    total_weight += weight;
                }
            }

            if candidates.is_empty() {
                return Err(EvolutionError::Exhausted {
                    sentence: descendant.display(dictionary).to_string(),
                });
            }

            let draw = rng.random::<f64>() * total_weight;
            let chosen = candidates[pick(&candidates, draw)];
            let step = MutationStep {
                position: chosen.position,
                from: descendant.as_slice()[chosen.position],
                to: chosen.neighbor.word,
                distance: chosen.neighbor.distance,
                limit: budget.limit(chosen.position),
            };
            tracing::trace!(
                position = step.position,
                from = dictionary.word(step.from),
                to = dictionary.word(step.to),
                distance = step.distance,
                "mutation step"
            );

            descendant.replace(step.position, step.to);
            budget.consume(step.position, step.distance);
            steps.push(step);
        }

        tracing::debug!(
            requested = edits,
            steps = steps.len(),
            "episode complete"
        );
        Ok(Episode {
            sentence: descendant,
            steps,
        })
    }
}

/// Inverse-CDF walk: subtract weights from `draw` until it drops to zero or
/// below and return that candidate. Falls through to the last candidate when
/// rounding leaves a sliver of `draw` unspent.
///
/// `candidates` must not be empty.
fn pick(candidates: &[Candidate], mut draw: f64) -> usize {
    for (i, candidate) in candidates.iter().enumerate() {
        draw -= candidate.weight;
        if draw <= 0.0 {
            return i;
        }
    }
    candidates.len() - 1
}
