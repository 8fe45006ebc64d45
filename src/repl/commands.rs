//! Built-in REPL commands
//!
//! Any line starting with `/` is a command; everything else is a question.

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Settings,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Check whether input is a command rather than a question
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Unknown { input: input.to_string() };
    };

    let name = rest.split_whitespace().next().unwrap_or("").to_lowercase();
    match name.as_str() {
        "help" | "h" => Command::Help,
        "settings" | "debug" | "config" => Command::Settings,
        "clear" | "cls" => Command::Clear,
        "exit" | "quit" | "q" => Command::Exit,
        _ => Command::Unknown { input: trimmed.to_string() },
    }
}

/// Help table rows: (usage, description)
pub fn help_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("/help, /h", "Show this help message"),
        ("/settings, /debug", "Show index, namespace, top-k and embedding model"),
        ("/clear, /cls", "Clear screen"),
        ("/exit, /quit, /q", "Exit"),
    ]
}
