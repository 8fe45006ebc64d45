//! Command-line argument parsing for Pipe-Spec Assistant

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pipe-Spec Assistant - answers pipe specification questions from the knowledge base
#[derive(Parser, Debug)]
#[command(name = "pipespec")]
#[command(version)]
#[command(about = "Answer questions about AQUESTIA pipe specifications using only retrieved context", long_about = None)]
pub struct Args {
    /// Question to answer; omit to start the interactive prompt
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Secrets file (TOML) consulted before environment variables
    #[arg(short, long, value_name = "PATH", global = true)]
    pub secrets: Option<PathBuf>,

    /// Verbosity level: -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only the answer or error is printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start interactive mode
    Start,

    /// Display the active (non-secret) settings
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that a question and a subcommand were not both given
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && self.question.is_some() {
            return Err("Cannot specify a question together with a subcommand.".to_string());
        }

        Ok(())
    }
}

impl Verbosity {
    /// Default log filter for this level
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "pipespec=debug,warn",
            Verbosity::VeryVerbose => "pipespec=trace,info",
        }
    }

    /// Check if should show the spinner and banner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
