use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dictionary or resolving words against it.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary source could not be read.
    #[error("Failed to read dictionary: {0}")]
    Io(#[from] io::Error),

    /// The dictionary file at `path` could not be opened or read.
    #[error("Failed to read dictionary file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary contained no words.
    #[error("Dictionary contains no words")]
    Empty,

    /// A seed word is absent from the dictionary.
    #[error("Can't find word {0} in dictionary file")]
    UnknownWord(String),
}

/// Fatal failures of the mutation engine.
///
/// None of these are recovered from inside the engine; a run that hits one
/// stops and hands the error back to its caller.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// The distance matrix reported zero edits between two different words.
    #[error(
        "calculated zero edit distance for non-identical words {left} and {right}\n{matrix}"
    )]
    ZeroDistance {
        left: String,
        right: String,
        /// Tab-separated dump of the matrix region used for the comparison.
        matrix: String,
    },

    /// No word position has a neighbor within its remaining budget.
    #[error("Ran out of possibilities -- string: {sentence}")]
    Exhausted { sentence: String },

    /// A sink refused a line.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Errors that can occur while assembling a simulation.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// An invalid parameter value was provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The dictionary could not be loaded or a seed word is unknown
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Errors raised while reading or writing a saved run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
