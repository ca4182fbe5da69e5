use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    error::{GameError, Result},
    snapshot::{RenderSink, Snapshot},
    state::{CollisionType, GameState, GameStatus, Position, Snake},
};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// The rule engine. Owns the game state and the render sink; `tick` and
/// `on_direction_input` are the only operations that change gameplay state.
pub struct GameEngine<S: RenderSink> {
    config: GameConfig,
    state: GameState,
    pending_direction: Option<Direction>,
    started: bool,
    rng: StdRng,
    sink: S,
}

impl<S: RenderSink> GameEngine<S> {
    /// Create an engine with a fresh snake. Call [`GameEngine::start`] before ticking.
    pub fn new(config: GameConfig, sink: S) -> Result<Self> {
        config.validate()?;

        let state = initial_state(&config);
        let rng = seeded_rng(&config);

        Ok(Self {
            config,
            state,
            pending_direction: None,
            started: false,
            rng,
            sink,
        })
    }

    /// Build an engine around an existing state. The engine is already started,
    /// so the state's food is kept as is.
    pub fn from_state(config: GameConfig, state: GameState, sink: S) -> Result<Self> {
        config.validate()?;

        if state.snake.len() > config.capacity() {
            return Err(GameError::CapacityExceeded {
                length: state.snake.len(),
                capacity: config.capacity(),
            });
        }

        let rng = seeded_rng(&config);

        Ok(Self {
            config,
            state,
            pending_direction: None,
            started: true,
            rng,
            sink,
        })
    }

    /// Place the first food and begin play. Starting twice is an error.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        self.place_food();
        self.state.status = GameStatus::Running;
        self.started = true;

        info!(
            width = self.config.board_width,
            height = self.config.board_height,
            cell = self.config.cell_size,
            food_x = self.state.food.x,
            food_y = self.state.food.y,
            "game started"
        );

        self.sink.render(&self.snapshot());
        Ok(())
    }

    /// Advance the game by one tick and hand the new frame to the sink.
    ///
    /// Once the game is over the state no longer changes; every further tick
    /// only re-renders the game-over frame.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.started {
            return Err(GameError::NotStarted);
        }

        if !self.state.is_running() {
            self.sink.render(&self.snapshot());
            return Ok(TickOutcome::default());
        }

        if let Some(direction) = self.pending_direction.take() {
            self.state.snake.direction = direction;
        }

        let vacated = self.state.snake.advance(self.config.cell_size);
        self.state.ticks += 1;

        // A failed food check still finishes the tick so the sink sees the final frame
        let food = self.check_food(vacated);
        let collision = self.check_collisions();

        trace!(
            tick = self.state.ticks,
            head_x = self.state.snake.head().x,
            head_y = self.state.snake.head().y,
            "tick"
        );

        self.sink.render(&self.snapshot());

        let ate_food = food?;
        Ok(TickOutcome {
            ate_food,
            collision,
        })
    }

    /// Buffer a direction change for the next tick. A request for the exact
    /// opposite of the current direction is ignored; otherwise the latest
    /// request wins.
    pub fn on_direction_input(&mut self, requested: Direction) {
        if !self.state.is_running() {
            return;
        }

        let current = self.state.snake.direction;
        if current.is_opposite(requested) {
            debug!(?current, ?requested, "ignoring reversal");
            return;
        }

        self.pending_direction = Some(requested);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.config.cell_size)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_running(&self) -> bool {
        self.started && self.state.is_running()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Direction the snake is currently moving in
    pub fn direction(&self) -> Direction {
        self.state.snake.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn check_food(&mut self, vacated: Position) -> Result<bool> {
        if self.state.snake.head() != self.state.food {
            return Ok(false);
        }

        let capacity = self.config.capacity();
        if self.state.snake.len() + 1 > capacity {
            return Err(GameError::CapacityExceeded {
                length: self.state.snake.len() + 1,
                capacity,
            });
        }

        self.state.snake.grow(vacated);
        self.state.score += 1;

        debug!(
            score = self.state.score,
            length = self.state.snake.len(),
            "food eaten"
        );

        self.place_food();
        Ok(true)
    }

    fn check_collisions(&mut self) -> Option<CollisionType> {
        let collision = self.state.detect_collision()?;

        self.state.status = GameStatus::Over;
        info!(
            ?collision,
            score = self.state.score,
            ticks = self.state.ticks,
            "game over"
        );

        Some(collision)
    }

    fn place_food(&mut self) {
        let board_full = self.state.snake.len() >= self.config.capacity();

        let food = match self.config.food_placement {
            FoodPlacement::AvoidSnake if !board_full => loop {
                let cell = self.random_cell();
                if !self.state.is_occupied_by_snake(cell) {
                    break cell;
                }
            },
            _ => self.random_cell(),
        };
        self.state.food = food;
    }

    fn random_cell(&mut self) -> Position {
        let cell = self.config.cell_size;
        let x = self.rng.gen_range(0..self.config.columns()) * cell;
        let y = self.rng.gen_range(0..self.config.rows()) * cell;
        Position::new(x, y)
    }
}

/// Snake head on the cell nearest the board centre, body trailing to the left
fn initial_state(config: &GameConfig) -> GameState {
    let cell = config.cell_size;
    let length = config.initial_snake_length;

    // Keep the whole tail on the board
    let min_column = length as i32 - 1;
    let column = (config.columns() / 2).max(min_column);
    let head = Position::new(column * cell, (config.rows() / 2) * cell);

    let snake = Snake::new(head, Direction::Right, length, cell);

    // Replaced by `start`
    let food = Position::new(0, 0);

    GameState::new(snake, food, config.board_width, config.board_height)
}

fn seeded_rng(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
