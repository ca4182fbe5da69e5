use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodPlacement, GameConfig, config};
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake game in the terminal")]
struct Cli {
    /// Board width in pixels (multiple of the cell size)
    #[arg(long, default_value_t = config::DEFAULT_BOARD_WIDTH)]
    width: i32,

    /// Board height in pixels (multiple of the cell size)
    #[arg(long, default_value_t = config::DEFAULT_BOARD_HEIGHT)]
    height: i32,

    /// Cell size in pixels
    #[arg(long, default_value_t = config::DEFAULT_CELL_SIZE)]
    cell_size: i32,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = config::DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Initial snake length
    #[arg(long, default_value_t = config::DEFAULT_INITIAL_LENGTH)]
    length: usize,

    /// Where new food may appear
    #[arg(long, value_enum, default_value = "anywhere")]
    food: FoodMode,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum FoodMode {
    /// Anywhere on the board, even under the snake
    Anywhere,
    /// Only on cells the snake does not cover
    AvoidSnake,
}

impl From<FoodMode> for FoodPlacement {
    fn from(mode: FoodMode) -> Self {
        match mode {
            FoodMode::Anywhere => FoodPlacement::Anywhere,
            FoodMode::AvoidSnake => FoodPlacement::AvoidSnake,
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grid_snake=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        board_width: cli.width,
        board_height: cli.height,
        cell_size: cli.cell_size,
        tick_interval: Duration::from_millis(cli.tick_ms),
        initial_snake_length: cli.length,
        food_placement: cli.food.into(),
        seed: cli.seed,
    };

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
