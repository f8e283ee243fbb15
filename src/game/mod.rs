//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The front-end feeds it commands and ticks and draws whatever `GameState::snapshot`
//! hands back.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod particles;
pub mod session;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, ParticleConfig};
pub use engine::{CommandOutcome, GameEngine, StepResult};
pub use error::{GameError, GameResult};
pub use food::Food;
pub use grid::{Grid, Position};
pub use particles::{Particle, ParticleSystem, Rgb};
pub use session::{Phase, SessionState};
pub use snake::{CollisionType, Snake};
pub use state::{GameState, ParticleView, Snapshot};
