//! Read-only frame data handed to the renderer once per tick.

use super::state::{GameState, GameStatus, Position};

/// Everything needed to draw a running game
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub head: Position,
    /// Segments after the head, in order
    pub body: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub ticks: u32,
}

/// A single frame as seen by a render sink
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Running(BoardView),
    Over { final_score: u32, ticks: u32 },
}

impl Snapshot {
    pub fn capture(state: &GameState, cell_size: i32) -> Self {
        match state.status {
            GameStatus::Running => Snapshot::Running(BoardView {
                board_width: state.board_width,
                board_height: state.board_height,
                cell_size,
                head: state.snake.head(),
                body: state.snake.body_segments().to_vec(),
                food: state.food,
                score: state.score,
                ticks: state.ticks,
            }),
            GameStatus::Over => Snapshot::Over {
                final_score: state.score,
                ticks: state.ticks,
            },
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            Snapshot::Running(_) => GameStatus::Running,
            Snapshot::Over { .. } => GameStatus::Over,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Snapshot::Running(view) => view.score,
            Snapshot::Over { final_score, .. } => *final_score,
        }
    }

    pub fn ticks(&self) -> u32 {
        match self {
            Snapshot::Running(view) => view.ticks,
            Snapshot::Over { ticks, .. } => *ticks,
        }
    }
}

/// Receives one snapshot per tick. Drawing, colors and layout are up to the sink.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot);
    }
}

/// Keeps every snapshot it receives. Handy for tests and headless drivers.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Snapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }
}
