//! Grid Snake - a single-player snake game on a fixed board
//!
//! This library provides:
//! - Core game rules and state (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering of engine snapshots (render module)
//! - Play-time tracking for the header (metrics module)
//! - The terminal front end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
