//! Core game logic module for Snake
//!
//! Everything here is pure state and rules: no terminal, timer, or audio
//! dependencies. The [`session::Session`] state machine is the entry point
//! the mode layer drives once per tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{Difficulty, GameConfig, SnakeColor};
pub use engine::{score_for_level, GameEngine, StepReport};
pub use session::{Screen, Session, TickReport};
pub use state::{AdvanceOutcome, Food, GameState, Position, Snake};
