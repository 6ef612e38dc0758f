//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the lexevo library.
//!
//! # Example
//!
//! ```
//! use lexevo_sim::prelude::*;
//!
//! let dictionary = Dictionary::from_words(["cat", "bat"]).unwrap();
//! let sentence = dictionary.resolve(&["Cat"]).unwrap();
//! assert_eq!(sentence.display(&dictionary).to_string(), "CAT");
//! ```

pub use crate::errors;
pub use crate::base::{Dictionary, Sentence, WordId};
pub use crate::evolution::{EditDistanceMatrix, NeighborFinder, SentenceMutator};
pub use crate::simulation::{
    Configuration, ExpansionStrategy, LineSink, NullSink, Simulation, SimulationBuilder,
    TraversalOrder, TreeParameters, WriterSink,
};
