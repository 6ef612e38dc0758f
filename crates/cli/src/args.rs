use clap::{Args, ValueEnum};
use lexevo_sim::simulation::TraversalOrder;
use std::path::PathBuf;

/// Node order on the primary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Parent before its subtrees
    Pre,
    /// First subtree, parent, second subtree
    In,
}

impl From<OrderArg> for TraversalOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Pre => TraversalOrder::PreOrder,
            OrderArg::In => TraversalOrder::InOrder,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Dictionary file (whitespace-separated words)
    #[arg(required_unless_present = "config")]
    pub dictionary: Option<PathBuf>,

    /// Mean edits per word on each branch
    #[arg(required_unless_present = "config")]
    pub mean_edits_per_word: Option<f64>,

    /// Maximum edits per letter on each branch
    #[arg(required_unless_present = "config")]
    pub max_edits_per_letter: Option<f64>,

    /// Number of generations below the seed sentence
    #[arg(required_unless_present = "config")]
    pub depth: Option<usize>,

    /// Seed sentence, one word per argument
    #[arg(required_unless_present = "config", num_args = 1..)]
    pub words: Vec<String>,

    /// Random seed (default: drawn from the OS and logged at info level)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output order of tree nodes
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Walk the tree with an explicit work stack instead of recursion
    #[arg(long)]
    pub iterative: bool,

    /// Suppress the diagnostic stream on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Show a progress bar over all tree nodes
    #[arg(long)]
    pub progress: bool,

    /// Load a saved run configuration (JSON)
    ///
    /// Positional arguments, when given, override the loaded values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the resolved configuration, including the seed, to this file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}
