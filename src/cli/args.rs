//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::{DiameterAlgorithm, InputFormat, OutputFormat, Traversal};

/// Binary tree metrics: height, node count, value sum and diameter
#[derive(Parser, Debug)]
#[command(name = "treemetrics")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Tree notation of the input
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<InputFormat>,

    /// Output shape
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Traversal strategy
    #[arg(long, value_enum, global = true)]
    pub traversal: Option<Traversal>,

    /// Diameter algorithm
    #[arg(long, value_enum, global = true)]
    pub diameter: Option<DiameterAlgorithm>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where a tree is read from: argument, file, or stdin when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct TreeSource {
    /// Tree in the selected notation, e.g. '1{2{4,5},3{6,7}}'
    #[arg(allow_hyphen_values = true)]
    pub tree: Option<String>,

    /// Read the tree from a file
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "tree")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print height, count, sum and diameter of a tree
    Metrics {
        #[command(flatten)]
        source: TreeSource,
    },

    /// Draw a tree
    Show {
        #[command(flatten)]
        source: TreeSource,
    },

    /// Measure a seeded random tree
    Random {
        /// Number of nodes
        #[arg(short, long)]
        size: usize,
        /// Random seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
