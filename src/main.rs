//! Pipe-Spec Assistant - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use pipespec::{
    bootstrap,
    cli::{Args, Commands, Verbosity},
    config::Settings,
    repl::{answer_once, DisplayManager, QuestionSession, ReplSession, SubmitOutcome},
    telemetry, AssistantError,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{}", message);
        std::process::exit(2);
    }

    let verbosity = args.verbosity();
    telemetry::init(verbosity);

    let display = if verbosity.show_progress() {
        DisplayManager::new()
    } else {
        DisplayManager::new().without_spinner()
    };

    // Nothing touches the network until every required setting is present.
    let settings = match Settings::load(args.secrets.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            display.show_fatal(&err.to_string());
            std::process::exit(2);
        }
    };
    tracing::debug!(?settings, "settings resolved");

    match &args.command {
        Some(Commands::Config) => {
            display.show_settings(&settings.debug_fields());
        }
        Some(Commands::Start) => {
            run_repl(&settings, display, verbosity).await?;
        }
        None => match &args.question {
            Some(question) => run_once(&settings, &display, question).await?,
            None => run_repl(&settings, display, verbosity).await?,
        },
    }

    Ok(())
}

async fn connect(settings: &Settings, display: &DisplayManager) -> QuestionSession {
    match bootstrap::build_pipeline(settings).await {
        Ok(pipeline) => QuestionSession::new(pipeline, settings),
        Err(err) => {
            display.show_fatal(&err.to_string());
            std::process::exit(1);
        }
    }
}

async fn run_once(settings: &Settings, display: &DisplayManager, question: &str) -> Result<()> {
    let outcome = answer_once(display, question, || async {
        let pipeline = bootstrap::build_pipeline(settings).await?;
        Ok::<_, AssistantError>(QuestionSession::new(pipeline, settings))
    })
    .await;

    match outcome {
        Ok(SubmitOutcome::Failed(_)) => std::process::exit(1),
        Ok(_) => Ok(()),
        Err(err) => {
            display.show_fatal(&err.to_string());
            std::process::exit(1);
        }
    }
}

async fn run_repl(settings: &Settings, display: DisplayManager, verbosity: Verbosity) -> Result<()> {
    let questions = connect(settings, &display).await;

    let mut repl = ReplSession::new(questions, display)?;
    if verbosity.show_progress() {
        repl.show_welcome(env!("CARGO_PKG_VERSION"));
    }
    repl.run().await?;

    Ok(())
}
