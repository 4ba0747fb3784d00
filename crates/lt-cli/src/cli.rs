use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `leadtime` binary.
#[derive(Debug, Parser)]
#[command(
    name = "leadtime",
    version,
    about = "Append Jira in-progress and done dates to a CSV of issue keys"
)]
pub struct Cli {
    /// Input CSV; first column holds issue keys, first row is a header
    pub input: Option<PathBuf>,

    /// Output CSV; replaced if it exists
    pub output: Option<PathBuf>,

    /// Quiet mode (errors only, no per-row output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Both paths, when both were given on the command line.
    #[must_use]
    pub fn paths(&self) -> Option<(PathBuf, PathBuf)> {
        Some((self.input.clone()?, self.output.clone()?))
    }
}
