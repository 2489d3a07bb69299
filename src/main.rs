//! Strictly Grid - Unified CLI
//!
//! Tic-tac-toe against an LLM opponent in the terminal.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Settings};
use std::io::{self, BufRead, Write};
use strictly_grid::{
    AiMovePolicy, Board, GameConfig, GameState, LlmClient, LlmConfig, Mark, MatchSession,
    MoveRecord,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "strictly_grid.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            settings,
            board_size,
            human_marker,
        } => run_play(settings, board_size, human_marker).await,
        Command::Ask {
            settings,
            board,
            ai_marker,
        } => run_ask(settings, board, ai_marker).await,
    }
}

/// Run a match in the terminal UI
#[instrument(skip_all)]
async fn run_play(
    settings: Settings,
    board_size: Option<usize>,
    human_marker: Option<Mark>,
) -> Result<()> {
    initialize_file_tracing()?;
    info!("Starting Strictly Grid TUI");

    let mut config = load_config(&settings)?;
    if let Some(size) = board_size {
        config = config.with_board_size(size);
    }
    if let Some(marker) = human_marker {
        config = config.with_human_marker(marker);
    }
    config.validate()?;

    // Resolved before the terminal is taken over so the operator can type a key
    let llm_config = resolve_llm_config(&config)?;
    let policy = AiMovePolicy::new(Box::new(LlmClient::new(llm_config)), &config);
    let game = GameState::new(config.board_size(), config.human_marker())?;
    let session = MatchSession::new(game, policy);

    tui::run_tui(session).await
}

/// Ask for a single AI move and print it
#[instrument(skip_all, fields(ai_marker = %ai_marker))]
async fn run_ask(settings: Settings, board: String, ai_marker: Mark) -> Result<()> {
    initialize_stderr_tracing();

    let config = load_config(&settings)?;
    let board: Board = board.parse().context("Failed to parse board")?;
    info!(size = board.size(), "Asking AI for a move");

    let llm_config = resolve_llm_config(&config)?;
    let policy = AiMovePolicy::new(Box::new(LlmClient::new(llm_config)), &config);

    let decision = policy
        .decide(&board, ai_marker, ai_marker.opponent())
        .await
        .context("Board has no empty cell")?;

    if let Some(notice) = decision.notice() {
        eprintln!("{}", notice);
    }
    let record = MoveRecord::with_default_rationale(decision.index, &decision.rationale);
    println!("{}", record);
    Ok(())
}

#[instrument(skip(settings), fields(path = %settings.config.display()))]
fn load_config(settings: &Settings) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(&settings.config)?;
    Ok(settings.apply(config))
}

/// Reads the API key from the environment, or asks the operator for it.
#[instrument(skip(config))]
fn resolve_llm_config(config: &GameConfig) -> Result<LlmConfig> {
    match config.create_llm_config() {
        Ok(llm_config) => Ok(llm_config),
        Err(e) => {
            warn!(error = %e, "No API key in environment, prompting operator");
            let var = config.llm_provider().api_key_var();
            let key = prompt_api_key(var)?;
            anyhow::ensure!(!key.is_empty(), "{} is required to play", var);
            Ok(config.llm_config_with_key(key))
        }
    }
}

fn prompt_api_key(var: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{} is not set. Enter API key: ", var)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read API key")?;
    Ok(line.trim().to_string())
}

/// Logs to a file so the terminal UI stays intact.
fn initialize_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,strictly_grid=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
