//! Terminal Snake - a classic snake arcade game for the terminal
//!
//! This library provides:
//! - Core game logic: movement, collision, food, scoring (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Sound hooks (audio module)
//! - Session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
