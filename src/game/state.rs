use super::action::Direction;

/// A cell on the board, in pixels. Both coordinates are multiples of the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `step` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * step, dy * step)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose segments trail behind `head`, `step` pixels apart
    pub fn new(head: Position, direction: Direction, length: usize, step: i32) -> Self {
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        let back = direction.opposite();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_in_direction(back, step));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Shift every segment onto its predecessor, tail first, then move the head
    /// one step in the current direction. Returns the vacated tail cell.
    pub fn advance(&mut self, step: i32) -> Position {
        let vacated = self.tail();

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].moved_in_direction(self.direction, step);

        vacated
    }

    /// Append a segment at `cell`, normally the cell vacated by the last advance
    pub fn grow(&mut self, cell: Position) {
        self.body.push(cell);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal: a game never leaves this state
    Over,
}

/// What the head ran into, in the order collisions are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    SelfCollision,
    LeftWall,
    RightWall,
    TopWall,
    BottomWall,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board_width: i32,
    pub board_height: i32,
    pub score: u32,
    pub ticks: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, board_width: i32, board_height: i32) -> Self {
        Self {
            snake,
            food,
            board_width,
            board_height,
            score: 0,
            ticks: 0,
            status: GameStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Check if a position is within the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_width && pos.y >= 0 && pos.y < self.board_height
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.body.contains(&pos)
    }

    /// First collision of the current head, checking self before the four walls
    pub fn detect_collision(&self) -> Option<CollisionType> {
        let head = self.snake.head();

        if self.snake.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else if head.x < 0 {
            Some(CollisionType::LeftWall)
        } else if head.x >= self.board_width {
            Some(CollisionType::RightWall)
        } else if head.y < 0 {
            Some(CollisionType::TopWall)
        } else if head.y >= self.board_height {
            Some(CollisionType::BottomWall)
        } else {
            None
        }
    }
}
