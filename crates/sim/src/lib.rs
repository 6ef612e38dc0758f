//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for sentence evolution over a
//! dictionary. It includes modules for loading dictionaries and sentences,
//! the edit-distance and neighbor search machinery, budgeted stochastic
//! mutation, and the binary tree expansion that prints every generation.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;

pub use base::{Dictionary, Sentence, WordId};
