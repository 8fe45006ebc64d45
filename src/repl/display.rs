//! Display manager for the terminal UI
//!
//! Banner, answer and error rendering, the settings panel and the
//! "Thinking..." spinner.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// Display manager for REPL UI
pub struct DisplayManager {
    spinner_interval: Duration,
    show_spinner: bool,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager {
            spinner_interval: Duration::from_millis(100),
            show_spinner: true,
        }
    }

    /// Disable the spinner (quiet mode, non-interactive use)
    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let rule = "=".repeat(width);

        println!("\n{}", rule.cyan());
        println!("{}", format!("  Pipe-Spec Assistant {}", version).bold().cyan());
        println!(
            "{}",
            "  Ask any question about AQUESTIA pipe specifications or related docs.".dimmed()
        );
        println!(
            "{}",
            "  Answers use only information retrieved from the knowledge base.".dimmed()
        );
        println!("{}\n", rule.cyan());
        println!(
            "Type your question (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Start the spinner shown while the pipeline runs
    pub fn start_thinking(&self) -> ProgressBar {
        if !self.show_spinner {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Thinking...");
        pb.enable_steady_tick(self.spinner_interval);
        pb
    }

    /// Display an answer
    pub fn show_answer(&self, answer: &str) {
        println!("\n{}", "### Answer".bold().green());
        println!("{}\n", answer);
    }

    /// Display a per-question failure
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "An error occurred:".red().bold(), error.red());
    }

    /// Display a fatal start-up failure
    pub fn show_fatal(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Read-only settings panel
    pub fn show_settings(&self, fields: &[(&'static str, String)]) {
        self.show_section("Advanced settings / debug");
        let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in fields {
            println!("  {}  {}", format!("{:<width$}", label, width = width).dimmed(), value);
        }
        println!();
    }

    /// Help table
    pub fn show_help(&self, entries: &[(&'static str, &'static str)]) {
        self.show_section("Available Commands:");
        for (usage, description) in entries {
            println!("  {} {}", format!("{:<22}", usage).green(), description);
        }
        println!();
    }

    /// Unknown command notice
    pub fn show_unknown_command(&self, input: &str) {
        println!("{}", format!("Unknown command: {}", input).red());
        println!("Type {} for available commands", "/help".cyan());
    }

    /// Goodbye line
    pub fn show_goodbye(&self) {
        println!("{}", "Goodbye!".green());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
