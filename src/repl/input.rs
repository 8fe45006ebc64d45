//! Input handler for REPL using rustyline
//!
//! Provides line editing and question history.

use crate::errors::{AssistantError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Default prompt shown before each question
pub const DEFAULT_PROMPT: &str = "pipe-spec> ";

/// What the user typed, or why there is nothing to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of text, as typed (may be blank)
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Input handler managing the readline interface and question history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| AssistantError::Input(e.to_string()))?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut handler = Self::new()?;

        // Load existing history if file exists
        if history_file.exists() {
            let _ = handler.editor.load_history(&history_file);
        }

        handler.history_path = Some(history_file);
        Ok(handler)
    }

    /// Read a line of input from user
    pub fn read_line(&mut self) -> Result<InputEvent> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.trim());
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(AssistantError::Input(format!("Readline error: {}", err))),
        }
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor
                .save_history(path)
                .map_err(|e| AssistantError::Input(format!("Failed to save history: {}", e)))?;
        }
        Ok(())
    }

    /// Default history location (~/.pipespec/history)
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pipespec").join("history"))
    }
}
