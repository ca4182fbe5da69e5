//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! Frames leave the engine as [`Snapshot`] values handed to a [`RenderSink`].

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{FoodPlacement, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use error::{GameError, Result};
pub use snapshot::{BoardView, RecordingSink, RenderSink, Snapshot};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
