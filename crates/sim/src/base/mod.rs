//! Base types for word and sentence representation.
//!
//! This module provides the dictionary that owns every word for the length
//! of a run, and the sentence type that refers to those words by index.

mod dictionary;
mod sentence;

pub use dictionary::{Dictionary, WordId};
pub use sentence::{Sentence, SentenceDisplay};
