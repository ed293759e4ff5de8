//! Command-line interface.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rewind_tictactoe::{Position, TimeTravelGame};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Tic-tac-toe with a browsable move history.
#[derive(Debug, Parser)]
#[command(name = "rewind", version, about)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Moves to replay before starting, as cell numbers 0-8 or labels
    /// (e.g. `--moves 4,0,center`).
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<String>,

    /// Step of the replayed history to show first.
    #[arg(long)]
    pub step: Option<usize>,

    /// Log file, overriding the configuration.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the game the UI opens with.
    #[instrument(skip(self), fields(moves = self.moves.len(), step = ?self.step))]
    pub fn initial_game(&self) -> Result<TimeTravelGame> {
        let positions = self
            .moves
            .iter()
            .map(|raw| {
                Position::from_label_or_number(raw).ok_or_else(|| anyhow!("Unknown cell: {:?}", raw))
            })
            .collect::<Result<Vec<_>>>()?;

        let game = TimeTravelGame::replay(&positions).context("Failed to replay --moves")?;
        let game = match self.step {
            Some(step) => game.jump_to(step).context("Invalid --step")?,
            None => game,
        };

        info!(len = game.len(), step = game.step(), "Initial game ready");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind"]);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
        assert!(cli.moves.is_empty());
        assert_eq!(cli.initial_game().unwrap(), TimeTravelGame::new());
    }

    #[test]
    fn test_moves_and_step() {
        let cli = Cli::parse_from(["rewind", "--moves", "4,0,bottom-right", "--step", "1"]);
        let game = cli.initial_game().unwrap();
        assert_eq!(game.len(), 4);
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_bad_moves_rejected() {
        let cli = Cli::parse_from(["rewind", "--moves", "4,4"]);
        assert!(cli.initial_game().is_err());

        let cli = Cli::parse_from(["rewind", "--moves", "nowhere"]);
        assert!(cli.initial_game().is_err());

        let cli = Cli::parse_from(["rewind", "--moves", "4", "--step", "3"]);
        assert!(cli.initial_game().is_err());
    }
}
