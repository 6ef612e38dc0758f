//! Binary tree expansion of sentence generations.
//!
//! Every node is a sentence; every edge is one independent mutation episode
//! of the parent. The tree is symmetric: all leaves sit exactly `generations`
//! edges below the root. Nothing is retained: each node is written to the
//! sinks as soon as its turn in the traversal comes, and its sentence is
//! dropped once both children have been derived from it.
//!
//! Random draws always happen in the same order whatever the traversal: the
//! first child is mutated and its whole subtree expanded before the second
//! child is mutated. Pre-order and in-order output therefore describe the
//! same tree for the same seed, and the recursive and iterative strategies
//! produce byte-identical streams.

use super::{ExpansionStrategy, LineSink, TraversalOrder};
use crate::base::{Dictionary, Sentence};
use crate::errors::EvolutionError;
use crate::evolution::SentenceMutator;
use rand::Rng;
use std::rc::Rc;

/// Counts reported after a full expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeSummary {
    /// Sentences emitted, root included.
    pub nodes: u64,
    /// Sentences emitted at the deepest generation.
    pub leaves: u64,
    /// Generations between root and leaves.
    pub depth: usize,
}

/// Expands a root sentence into a binary tree of descendants.
#[derive(Debug, Clone)]
pub struct EvolutionTree<'a> {
    mutator: SentenceMutator<'a>,
    edits_per_generation: i64,
    order: TraversalOrder,
}

/// Both sinks plus running counts.
struct Emitter<'s, P: ?Sized, D: ?Sized> {
    dictionary: &'s Dictionary,
    primary: &'s mut P,
    diagnostics: &'s mut D,
    summary: TreeSummary,
}

impl<P: LineSink + ?Sized, D: LineSink + ?Sized> Emitter<'_, P, D> {
    fn emit(
        &mut self,
        sentence: &Sentence,
        depth: usize,
        remaining: usize,
    ) -> Result<(), EvolutionError> {
        let indent = " ".repeat(depth);
        let text = sentence.display(self.dictionary);
        self.diagnostics.write_line(&format!("Printing:{indent}{text}"))?;
        self.primary.write_line(&format!("{indent}{text}"))?;
        self.summary.nodes += 1;
        if remaining == 0 {
            self.summary.leaves += 1;
        }
        Ok(())
    }
}

enum Task {
    /// Expand a node that already exists.
    Visit {
        sentence: Rc<Sentence>,
        remaining: usize,
        depth: usize,
    },
    /// Write a node whose first subtree is done (in-order only).
    Emit {
        sentence: Rc<Sentence>,
        depth: usize,
    },
    /// Derive one child of `parent` and then visit it.
    Spawn {
        parent: Rc<Sentence>,
        remaining: usize,
        depth: usize,
    },
}

impl<'a> EvolutionTree<'a> {
    pub fn new(
        dictionary: &'a Dictionary,
        edits_per_generation: i64,
        max_edits_per_letter: f64,
    ) -> Self {
        Self {
            mutator: SentenceMutator::new(dictionary, max_edits_per_letter),
            edits_per_generation,
            order: TraversalOrder::default(),
        }
    }

    /// Emit nodes in `order` instead of pre-order.
    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    #[inline]
    pub fn edits_per_generation(&self) -> i64 {
        self.edits_per_generation
    }

    /// Expand `root` for `generations` generations with the given strategy.
    pub fn expand_with<R, P, D>(
        &mut self,
        strategy: ExpansionStrategy,
        root: &Sentence,
        generations: usize,
        rng: &mut R,
        primary: &mut P,
        diagnostics: &mut D,
    ) -> Result<TreeSummary, EvolutionError>
    where
        R: Rng + ?Sized,
        P: LineSink + ?Sized,
        D: LineSink + ?Sized,
    {
        match strategy {
            ExpansionStrategy::Recursive => {
                self.expand(root, generations, rng, primary, diagnostics)
            }
            ExpansionStrategy::Iterative => {
                self.expand_iterative(root, generations, rng, primary, diagnostics)
            }
        }
    }

    /// Recursive expansion; call depth grows with `generations`.
    pub fn expand<R, P, D>(
        &mut self,
        root: &Sentence,
        generations: usize,
        rng: &mut R,
        primary: &mut P,
        diagnostics: &mut D,
    ) -> Result<TreeSummary, EvolutionError>
    where
        R: Rng + ?Sized,
        P: LineSink + ?Sized,
        D: LineSink + ?Sized,
    {
        let mut out = Emitter {
            dictionary: self.mutator.dictionary(),
            primary,
            diagnostics,
            summary: TreeSummary {
                depth: generations,
                ..TreeSummary::default()
            },
        };
        self.visit(root, generations, 0, rng, &mut out)?;
        Ok(out.summary)
    }

    fn visit<R, P, D>(
        &mut self,
        node: &Sentence,
        remaining: usize,
        depth: usize,
        rng: &mut R,
        out: &mut Emitter<'_, P, D>,
    ) -> Result<(), EvolutionError>
    where
        R: Rng + ?Sized,
        P: LineSink + ?Sized,
        D: LineSink + ?Sized,
    {
        if remaining == 0 {
            return out.emit(node, depth, remaining);
        }
        match self.order {
            TraversalOrder::PreOrder => {
                out.emit(node, depth, remaining)?;
                for _ in 0..2 {
                    let child = self.spawn(node, rng, &mut *out.diagnostics)?;
                    self.visit(&child, remaining - 1, depth + 1, rng, out)?;
                }
            }
            TraversalOrder::InOrder => {
                let first = self.spawn(node, rng, &mut *out.diagnostics)?;
                self.visit(&first, remaining - 1, depth + 1, rng, out)?;
                out.emit(node, depth, remaining)?;
                let second = self.spawn(node, rng, &mut *out.diagnostics)?;
                self.visit(&second, remaining - 1, depth + 1, rng, out)?;
            }
        }
        Ok(())
    }

    /// Same output as [`expand`](Self::expand), driven by an explicit work
    /// stack instead of the call stack.
    pub fn expand_iterative<R, P, D>(
        &mut self,
        root: &Sentence,
        generations: usize,
        rng: &mut R,
        primary: &mut P,
        diagnostics: &mut D,
    ) -> Result<TreeSummary, EvolutionError>
    where
        R: Rng + ?Sized,
        P: LineSink + ?Sized,
        D: LineSink + ?Sized,
    {
        let mut out = Emitter {
            dictionary: self.mutator.dictionary(),
            primary,
            diagnostics,
            summary: TreeSummary {
                depth: generations,
                ..TreeSummary::default()
            },
        };
        let mut stack = vec![Task::Visit {
            sentence: Rc::new(root.clone()),
            remaining: generations,
            depth: 0,
        }];

        // The stack is LIFO: the task meant to run first is pushed last.
        while let Some(task) = stack.pop() {
            match task {
                Task::Visit {
                    sentence,
                    remaining: 0,
                    depth,
                } => out.emit(&sentence, depth, 0)?,
                Task::Visit {
                    sentence,
                    remaining,
                    depth,
                } => {
                    let child = |parent: &Rc<Sentence>| Task::Spawn {
                        parent: Rc::clone(parent),
                        remaining: remaining - 1,
                        depth: depth + 1,
                    };
                    match self.order {
                        TraversalOrder::PreOrder => {
                            out.emit(&sentence, depth, remaining)?;
                            stack.push(child(&sentence));
                            stack.push(child(&sentence));
                        }
                        TraversalOrder::InOrder => {
                            stack.push(child(&sentence));
                            stack.push(Task::Emit {
                                sentence: Rc::clone(&sentence),
                                depth,
                            });
                            stack.push(child(&sentence));
                        }
                    }
                }
                Task::Emit { sentence, depth } => out.emit(&sentence, depth, 1)?,
                Task::Spawn {
                    parent,
                    remaining,
                    depth,
                } => {
                    let sentence = Rc::new(self.spawn(&parent, rng, &mut *out.diagnostics)?);
                    stack.push(Task::Visit {
                        sentence,
                        remaining,
                        depth,
                    });
                }
            }
        }
        Ok(out.summary)
    }

    fn spawn<R, D>(
        &mut self,
        parent: &Sentence,
        rng: &mut R,
        diagnostics: &mut D,
    ) -> Result<Sentence, EvolutionError>
    where
        R: Rng + ?Sized,
        D: LineSink + ?Sized,
    {
        self.mutator
            .mutate(parent, self.edits_per_generation, rng, diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::NullSink;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    const WORDS: [&str; 16] = [
        "cat", "bat", "bar", "car", "cart", "care", "core", "bore", "bone", "cone", "cane",
        "lane", "line", "lint", "mint", "mine",
    ];

    struct Run {
        primary: Vec<String>,
        diagnostics: Vec<String>,
        summary: TreeSummary,
    }

    fn run(
        dict: &Dictionary,
        generations: usize,
        order: TraversalOrder,
        strategy: ExpansionStrategy,
        seed: u64,
    ) -> Run {
        let root = dict.resolve(["cat", "mint"]).unwrap();
        let mut tree = EvolutionTree::new(dict, 1, 1.0).with_order(order);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut primary: Vec<String> = Vec::new();
        let mut diagnostics: Vec<String> = Vec::new();
        let summary = tree
            .expand_with(strategy, &root, generations, &mut rng, &mut primary, &mut diagnostics)
            .unwrap();
        Run {
            primary,
            diagnostics,
            summary,
        }
    }

    fn indent_of(line: &str) -> usize {
        line.len() - line.trim_start_matches(' ').len()
    }

    #[test]
    fn test_tree_shape() {
        let dict = Dictionary::from_words(WORDS).unwrap();
        for d in 0..5 {
            let out = run(&dict, d, TraversalOrder::PreOrder, ExpansionStrategy::Recursive, 11);
            let expected_nodes = (1u64 << (d + 1)) - 1;
            assert_eq!(out.summary.nodes, expected_nodes);
            assert_eq!(out.summary.leaves, 1u64 << d);
            assert_eq!(out.summary.depth, d);
            assert_eq!(out.primary.len() as u64, expected_nodes);

            let deepest = out.primary.iter().filter(|l| indent_of(l) == d).count();
            assert_eq!(deepest, 1 << d);
            assert!(out.primary.iter().all(|l| indent_of(l) <= d));
        }
    }

    #[test]
    fn test_pre_order_starts_with_root() {
        let dict = Dictionary::from_words(WORDS).unwrap();
        let out = run(&dict, 2, TraversalOrder::PreOrder, ExpansionStrategy::Recursive, 5);
        assert_eq!(out.primary[0], "CAT MINT");
        let depths: Vec<usize> = out.primary.iter().map(|l| indent_of(l)).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1, 2, 2]);
        assert_eq!(out.diagnostics[0], "Printing:CAT MINT");
    }

    #[test]
    fn test_in_order_puts_root_in_the_middle() {
        let dict = Dictionary::from_words(WORDS).unwrap();
        let out = run(&dict, 2, TraversalOrder::InOrder, ExpansionStrategy::Recursive, 5);
        let depths: Vec<usize> = out.primary.iter().map(|l| indent_of(l)).collect();
        assert_eq!(depths, vec![2, 1, 2, 0, 2, 1, 2]);
        assert_eq!(out.primary[3], "CAT MINT");
    }

    #[test]
    fn test_orders_describe_same_tree() {
        let dict = Dictionary::from_words(WORDS).unwrap();
        let pre = run(&dict, 3, TraversalOrder::PreOrder, ExpansionStrategy::Recursive, 99);
        let ino = run(&dict, 3, TraversalOrder::InOrder, ExpansionStrategy::Recursive, 99);
        let mut a = pre.primary.clone();
        let mut b = ino.primary.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iterative_matches_recursive() {
        let dict = Dictionary::from_words(WORDS).unwrap();
        for order in [TraversalOrder::PreOrder, TraversalOrder::InOrder] {
            for seed in [1, 2, 3] {
                let rec = run(&dict, 3, order, ExpansionStrategy::Recursive, seed);
                let ite = run(&dict, 3, order, ExpansionStrategy::Iterative, seed);
                assert_eq!(rec.primary, ite.primary);
                assert_eq!(rec.diagnostics, ite.diagnostics);
                assert_eq!(rec.summary, ite.summary);
            }
        }
    }

    #[test]
    fn test_exhaustion_aborts_expansion() {
        let dict = Dictionary::from_words(["cat", "bat", "dog"]).unwrap();
        let root = dict.resolve(["dog"]).unwrap();

        for strategy in [ExpansionStrategy::Recursive, ExpansionStrategy::Iterative] {
            let mut tree = EvolutionTree::new(&dict, 1, 10.0);
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
            let mut primary: Vec<String> = Vec::new();
            let result =
                tree.expand_with(strategy, &root, 1, &mut rng, &mut primary, &mut NullSink);
            assert!(matches!(result, Err(EvolutionError::Exhausted { .. })));
            assert_eq!(primary, vec!["DOG"]);
        }
    }

    #[test]
    fn test_zero_generations_never_mutates() {
        let dict = Dictionary::from_words(["cat", "bat", "dog"]).unwrap();
        let root = dict.resolve(["dog"]).unwrap();
        let mut tree = EvolutionTree::new(&dict, 1, 10.0);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let mut primary: Vec<String> = Vec::new();
        let summary = tree
            .expand(&root, 0, &mut rng, &mut primary, &mut NullSink)
            .unwrap();
        assert_eq!(summary.nodes, 1);
        assert_eq!(summary.leaves, 1);
        assert_eq!(primary, vec!["DOG"]);
    }
}
