//! Shared default values for the command line front end.

/// Log filter when neither `RUST_LOG` nor `-v` is given.
pub const LOG_LEVEL: &str = "warn";
pub const VERBOSE_LOG_LEVEL: &str = "info";
pub const DEBUG_LOG_LEVEL: &str = "debug";

pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} nodes ({eta})";
pub const PROGRESS_CHARS: &str = "#>-";
