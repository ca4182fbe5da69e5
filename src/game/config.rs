use std::time::Duration;

use super::error::{GameError, Result};

pub const DEFAULT_BOARD_WIDTH: i32 = 600;
pub const DEFAULT_BOARD_HEIGHT: i32 = 600;
pub const DEFAULT_CELL_SIZE: i32 = 25;
pub const DEFAULT_TICK_MS: u64 = 75;
pub const DEFAULT_INITIAL_LENGTH: usize = 6;

/// Where new food may be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodPlacement {
    /// Any cell on the board, including cells covered by the snake
    #[default]
    Anywhere,
    /// Re-roll until the cell is free of the snake
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Edge length of one cell in pixels
    pub cell_size: i32,
    /// Fixed interval between ticks
    pub tick_interval: Duration,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    pub food_placement: FoodPlacement,
    /// Seed for food placement; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            initial_snake_length: DEFAULT_INITIAL_LENGTH,
            food_placement: FoodPlacement::Anywhere,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in pixels
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// A 10x10 cell board for testing
    pub fn small() -> Self {
        Self::new(10 * DEFAULT_CELL_SIZE, 10 * DEFAULT_CELL_SIZE)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cells along the x axis
    pub fn columns(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Number of cells along the y axis
    pub fn rows(&self) -> i32 {
        self.board_height / self.cell_size
    }

    /// Maximum number of cells the snake can occupy (board area / cell area)
    pub fn capacity(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }

        for (name, value) in [("width", self.board_width), ("height", self.board_height)] {
            if value <= 0 || value % self.cell_size != 0 {
                return Err(GameError::InvalidConfig(format!(
                    "board {name} {value} is not a positive multiple of cell size {}",
                    self.cell_size
                )));
            }
        }

        // Cell indices and pixel coordinates stay in i32, including one step past each wall
        if self.columns().checked_mul(self.rows()).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "board of {}x{} cells is too large",
                self.columns(),
                self.rows()
            )));
        }
        if self.board_width.checked_add(self.cell_size).is_none()
            || self.board_height.checked_add(self.cell_size).is_none()
        {
            return Err(GameError::InvalidConfig(format!(
                "board {}x{} leaves no room to step past the wall",
                self.board_width, self.board_height
            )));
        }

        if self.tick_interval.is_zero() {
            return Err(GameError::InvalidConfig(
                "tick interval must be non-zero".to_string(),
            ));
        }

        // The starting body is laid out along one row with a free cell ahead of the head
        let max_length = self.columns() as usize - 1;
        if self.initial_snake_length == 0 || self.initial_snake_length > max_length {
            return Err(GameError::InvalidConfig(format!(
                "initial snake length {} must be between 1 and {max_length}",
                self.initial_snake_length
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 600);
        assert_eq!(config.board_height, 600);
        assert_eq!(config.cell_size, 25);
        assert_eq!(config.tick_interval, Duration::from_millis(75));
        assert_eq!(config.initial_snake_length, 6);
        assert_eq!(config.food_placement, FoodPlacement::Anywhere);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_grid_dimensions() {
        let config = GameConfig::default();
        assert_eq!(config.columns(), 24);
        assert_eq!(config.rows(), 24);
        assert_eq!(config.capacity(), 576);
    }

    #[test]
    fn test_misaligned_board_rejected() {
        let config = GameConfig::new(610, 600);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_length_bounds() {
        let too_long = GameConfig {
            initial_snake_length: 24,
            ..Default::default()
        };
        assert!(too_long.validate().is_err());

        let empty = GameConfig {
            initial_snake_length: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let fits = GameConfig {
            initial_snake_length: 23,
            ..Default::default()
        };
        assert!(fits.validate().is_ok());
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = GameConfig {
            board_width: 50_000,
            board_height: 50_000,
            cell_size: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));

        let at_edge = GameConfig {
            board_width: 2_000_000_000,
            board_height: 1_000_000_000,
            cell_size: 1_000_000_000,
            initial_snake_length: 1,
            ..Default::default()
        };
        assert!(at_edge.validate().is_err());
    }

    #[test]
    fn test_single_column_board_rejected() {
        let config = GameConfig {
            board_width: 25,
            initial_snake_length: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rejected() {
        let config = GameConfig {
            tick_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
