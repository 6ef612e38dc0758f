//! Evolution module providing the word-level mutation machinery.
//!
//! - **Distance**: Levenshtein distance over a reusable scratch matrix
//! - **Neighbors**: dictionary words within an edit budget of a given word
//! - **Mutation**: one generation of budgeted, stochastic word replacement

pub mod distance;
pub mod mutation;
pub mod neighbors;

pub use distance::EditDistanceMatrix;
pub use mutation::{round_half_up, EditBudget, Episode, MutationStep, SentenceMutator};
pub use neighbors::{Neighbor, NeighborFinder};
