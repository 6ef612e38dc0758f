use anyhow::{Context, Result};
use lexevo_sim::simulation::{
    Configuration, ExpansionStrategy, LineSink, NullSink, Simulation, TreeParameters,
};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::args::RunArgs;
use crate::printing::{progress_bar, NodeSink, StderrSink};

/// Merge a saved configuration (if any) with the command line.
fn resolve_configuration(args: &RunArgs) -> Result<Configuration> {
    let mut config = match &args.config {
        Some(path) => Configuration::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Configuration::new(PathBuf::new(), Vec::new(), TreeParameters::new(0.0, 0.0, 0)),
    };

    // Apply overrides
    if let Some(dictionary) = &args.dictionary {
        config.dictionary = dictionary.clone();
    }
    if let Some(mean) = args.mean_edits_per_word {
        config.parameters.mean_edits_per_word = mean;
    }
    if let Some(max) = args.max_edits_per_letter {
        config.parameters.max_edits_per_letter = max;
    }
    if let Some(depth) = args.depth {
        config.parameters.depth = depth;
    }
    if !args.words.is_empty() {
        config.seed_words = args.words.clone();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(order) = args.order {
        config.traversal = order.into();
    }
    if args.iterative {
        config.strategy = ExpansionStrategy::Iterative;
    }

    Ok(config)
}

pub fn run_tree(args: &RunArgs) -> Result<()> {
    let mut config = resolve_configuration(args)?;

    let mut sim = Simulation::new(&config).context("Failed to initialize simulation")?;
    tracing::info!(
        dictionary = %config.dictionary.display(),
        words = sim.dictionary().len(),
        seed = sim.seed(),
        edits_per_generation = sim.edits_per_generation(),
        "simulation ready"
    );

    if let Some(path) = &args.save_config {
        config.seed = Some(sim.seed());
        config
            .save(path)
            .with_context(|| format!("Failed to save configuration {}", path.display()))?;
        tracing::info!(path = %path.display(), "configuration saved");
    }

    let pb = if args.progress {
        Some(progress_bar(sim.parameters().node_count())?)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut primary = NodeSink::new(BufWriter::new(stdout.lock()), pb.clone());
    let mut diagnostics: Box<dyn LineSink> = if args.quiet {
        Box::new(NullSink)
    } else {
        Box::new(StderrSink::new(pb.clone()))
    };

    // Lines emitted before a failure still reach stdout.
    let outcome = sim.run(&mut primary, &mut *diagnostics);
    primary.flush().context("Failed to write output")?;

    if let Some(pb) = pb {
        if outcome.is_ok() {
            pb.finish_with_message("Done");
        } else {
            pb.abandon();
        }
    }

    let summary = outcome?;
    tracing::info!(
        nodes = summary.nodes,
        leaves = summary.leaves,
        depth = summary.depth,
        "tree complete"
    );

    Ok(())
}
