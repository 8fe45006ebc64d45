//! REPL (Read-Eval-Print Loop) module for the interactive terminal
//!
//! Each line is either a `/command` or a question. Questions are answered
//! independently; no conversation state is carried between them.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use crate::errors::Result;
use crate::repl::commands::{help_entries, is_command, Command};
use crate::types::Question;
use std::future::Future;
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputEvent, InputHandler};
pub use crate::repl::session::{QuestionSession, SubmitOutcome};

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    display_manager: DisplayManager,
    questions: QuestionSession,
}

impl ReplSession {
    /// Create REPL session with persistent history when a home directory exists
    pub fn new(questions: QuestionSession, display_manager: DisplayManager) -> Result<Self> {
        let input_handler = match InputHandler::default_history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            input_handler,
            display_manager,
            questions,
        })
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
    }

    /// Run until `/exit` or Ctrl-D
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.input_handler.read_line()? {
                InputEvent::Line(line) => {
                    if !self.handle_line(&line).await? {
                        break;
                    }
                }
                InputEvent::Interrupted => {
                    self.display_manager.show_warning("Use /exit to quit");
                }
                InputEvent::Eof => {
                    self.display_manager.show_goodbye();
                    break;
                }
            }
        }

        if let Err(err) = self.input_handler.save_history() {
            tracing::debug!(error = %err, "history not saved");
        }
        Ok(())
    }

    /// Handle one line of input.
    ///
    /// Returns false when the session should end.
    pub async fn handle_line(&mut self, line: &str) -> Result<bool> {
        if is_command(line) {
            return self.execute_command(commands::parse(line));
        }

        answer_and_display(&self.questions, &self.display_manager, line).await;
        Ok(true)
    }

    fn execute_command(&self, command: Command) -> Result<bool> {
        match command {
            Command::Help => self.display_manager.show_help(&help_entries()),
            Command::Settings => self
                .display_manager
                .show_settings(self.questions.debug_fields()),
            Command::Clear => self.display_manager.clear_screen()?,
            Command::Exit => {
                self.display_manager.show_goodbye();
                return Ok(false);
            }
            Command::Unknown { input } => self.display_manager.show_unknown_command(&input),
        }
        Ok(true)
    }
}

/// Submit one question with the spinner running, then render the outcome.
///
/// Returns the outcome so one-shot callers can pick an exit status.
pub async fn answer_and_display(
    questions: &QuestionSession,
    display: &DisplayManager,
    input: &str,
) -> SubmitOutcome {
    if Question::new(input).is_none() {
        return SubmitOutcome::Ignored;
    }

    let spinner = display.start_thinking();
    let outcome = questions.submit(input).await;
    spinner.finish_and_clear();

    match &outcome {
        SubmitOutcome::Answered(answer) => display.show_answer(answer.as_str()),
        SubmitOutcome::Failed(message) => display.show_error(message),
        SubmitOutcome::Ignored => {}
    }
    outcome
}

/// Answer a single question, connecting only when there is one to ask.
///
/// `connect` is not invoked for blank input, so no client is built and no
/// request leaves the process.
pub async fn answer_once<F, Fut>(
    display: &DisplayManager,
    input: &str,
    connect: F,
) -> Result<SubmitOutcome>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<QuestionSession>>,
{
    if Question::new(input).is_none() {
        tracing::debug!("blank question ignored");
        return Ok(SubmitOutcome::Ignored);
    }

    let questions = connect().await?;
    Ok(answer_and_display(&questions, display, input).await)
}
