mod args;
mod commands;
pub mod defaults;
mod printing;

use clap::{ArgAction, Parser};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;

use args::RunArgs;

/// Lexevo: a sentence evolution tree generator
///
/// Starting from a seed sentence, every generation replaces words with
/// nearby dictionary words (by edit distance) and splits into two
/// independent descendants. Every sentence of the resulting binary tree is
/// printed, indented by its generation.
#[derive(Parser, Debug)]
#[command(name = "lexevo")]
#[command(author, version, about = "Grows a binary tree of mutated sentences", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    run: RunArgs,
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => defaults::LOG_LEVEL,
        1 => defaults::VERBOSE_LOG_LEVEL,
        _ => defaults::DEBUG_LOG_LEVEL,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> ExitCode {
    // Usage errors exit with 1 like every other failure; help and version succeed.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            err.print().ok();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match commands::run::run_tree(&cli.run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
