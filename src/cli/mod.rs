//! podlang command-line interface.

pub mod commands;
pub mod interactive;
pub mod render;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// podlang - guesses which language the application running in a pod was written in.
#[derive(Parser, Debug)]
#[command(name = "podlang")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "podlang.toml")]
    pub config: PathBuf,

    /// Heuristics file (overrides knowledge.path from the configuration).
    #[arg(long, global = true)]
    pub heuristics: Option<PathBuf>,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run. Defaults to `inspect`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guesses the language of a pod's container (or of an image).
    Inspect {
        /// Image reference to inspect directly, skipping the cluster.
        #[arg(short, long)]
        image: Option<String>,

        /// Namespace to list pods from (all namespaces by default).
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Adds a command heuristic to an existing language.
    AddToHeuristic {
        /// Language the command belongs to.
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        language: String,

        /// Substring of a build command that reveals the language.
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        command: String,
    },

    /// Lists the known languages and their command heuristics.
    ListHeuristics,

    /// Writes a default configuration and starter heuristics.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },

    /// Shows the version.
    Version,
}

impl Cli {
    /// Heuristics file to use: the flag, then the configuration.
    pub fn heuristics_path(&self, config: &crate::Config) -> PathBuf {
        self.heuristics
            .clone()
            .unwrap_or_else(|| config.knowledge.path.clone())
    }
}
