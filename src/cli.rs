//! Command-line interface for strictly_grid.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_grid::{DEFAULT_CONFIG_PATH, GameConfig, LlmProvider, Mark};

/// Strictly Grid - tic-tac-toe against an LLM on boards from 3x3 to 8x8
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Play tic-tac-toe against an LLM opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Shared configuration options
        #[command(flatten)]
        settings: Settings,

        /// Board side length (3-8)
        #[arg(short, long)]
        board_size: Option<usize>,

        /// Marker you play (X or O)
        #[arg(short = 'm', long)]
        human_marker: Option<Mark>,
    },

    /// Ask the AI for one move on a given board and print it
    Ask {
        /// Shared configuration options
        #[command(flatten)]
        settings: Settings,

        /// Board, row by row, e.g. "XO_ _X_ O__" (`_`, `.` or `-` for empty)
        board: String,

        /// Marker the AI plays
        #[arg(long, default_value = "O")]
        ai_marker: Mark,
    },
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct Settings {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// LLM provider, overriding the configuration file
    #[arg(long, value_enum)]
    pub provider: Option<LlmProvider>,

    /// LLM model name, overriding the configuration file
    #[arg(long)]
    pub model: Option<String>,
}

impl Settings {
    /// Applies the command-line overrides to a loaded configuration.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(provider) = self.provider {
            config = config.with_llm_provider(provider);
        }
        if let Some(model) = &self.model {
            config = config.with_llm_model(model.clone());
        }
        config
    }
}
