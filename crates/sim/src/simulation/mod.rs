//! Simulation engine and tree expansion.
//!
//! This module provides the run configuration, the binary tree walk and the
//! output sinks for sentence evolution.

//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `lexevo_sim::simulation`.
//!
//! - `Simulation`: owns the dictionary, root sentence and seeded RNG, and
//!   expands the tree on `run`.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation`
//!   instances with validation.
//! - `EvolutionTree`: the tree walk itself, usable with any `Rng`.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod sink;
pub mod tree;

pub use builder::SimulationBuilder;
pub use engine::Simulation;
pub use parameters::{Configuration, ExpansionStrategy, TraversalOrder, TreeParameters};
pub use sink::{LineSink, NullSink, WriterSink};
pub use tree::{EvolutionTree, TreeSummary};
