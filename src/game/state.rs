use std::collections::VecDeque;

use super::food::Food;
use super::grid::{Grid, Position};
use super::particles::{ParticleSystem, Rgb};
use super::session::SessionState;
use super::snake::Snake;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    pub particles: ParticleSystem,
    pub session: SessionState,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(grid: Grid, snake: Snake, food: Food, particles: ParticleSystem) -> Self {
        Self {
            grid,
            snake,
            food,
            particles,
            session: SessionState::new(),
            steps: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Read-only view of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            body: &self.snake.body,
            trail: self.snake.trail(),
            food: self.food.position,
            food_pulse: self.food.pulse_offset(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    x: p.x,
                    y: p.y,
                    life_fraction: p.life_fraction(),
                    color: p.color,
                    size: p.size,
                })
                .collect(),
            score: self.session.score,
            high_score: self.session.high_score,
            game_over: self.session.is_game_over(),
        }
    }
}

/// A particle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    /// `life / max_life`, drives alpha and size
    pub life_fraction: f32,
    pub color: Rgb,
    pub size: f32,
}

/// One frame's worth of drawable entities
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    /// Body cells, head first
    pub body: &'a [Position],
    /// Previous head cells, oldest first
    pub trail: &'a VecDeque<Position>,
    pub food: Position,
    /// Pulse offset of the food in [-1, 1]
    pub food_pulse: f32,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.body[0]
    }
}
