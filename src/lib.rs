//! Glow Snake - a terminal snake game with particle effects
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, food, particles and session state
//! - Keyboard mapping (input module)
//! - TUI rendering of game snapshots (render module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
