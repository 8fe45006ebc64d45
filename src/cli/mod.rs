//! CLI module for Pipe-Spec Assistant
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Commands, Verbosity};
