use anyhow::{Context, Result};
use ascii_life::game::GameConfig;
use ascii_life::modes::HumanMode;
use ascii_life::terminal::CrosstermTerminal;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ascii_life")]
#[command(version, about = "Conway's Game of Life in the terminal")]
struct Cli {
    /// Board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Generations per second while running
    #[arg(long)]
    update_rate: Option<u32>,

    /// Redraws per second
    #[arg(long)]
    draw_rate: Option<u32>,

    /// Chance of a cell being alive after randomize (0.0 - 1.0)
    #[arg(long)]
    density: Option<f64>,

    /// Start from a random board instead of an empty one
    #[arg(long)]
    random_start: bool,

    /// TOML config file; flags given here override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rate) = self.update_rate {
            config.update_rate_hz = rate;
        }
        if let Some(rate) = self.draw_rate {
            config.draw_rate_hz = rate;
        }
        if let Some(density) = self.density {
            config.alive_probability = density;
        }
        if self.random_start {
            config.random_start = true;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)
        .context("Failed to initialize logger")?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    log::info!(
        "Starting {}x{} board, update {} Hz, draw {} Hz",
        config.rows,
        config.cols,
        config.update_rate_hz,
        config.draw_rate_hz
    );

    let mut terminal = CrosstermTerminal::new();
    let mut human_mode = HumanMode::new(config);
    human_mode
        .run(&mut terminal)
        .await
        .context("Game terminated abnormally")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["ascii_life", "--rows", "12", "--update-rate", "3", "--random-start"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, GameConfig::default().cols);
        assert_eq!(config.update_rate_hz, 3);
        assert!(config.random_start);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["ascii_life", "--density", "2.0"]);
        assert!(cli.game_config().is_err());

        let cli = Cli::parse_from(["ascii_life", "--cols", "0"]);
        assert!(cli.game_config().is_err());
    }
}
