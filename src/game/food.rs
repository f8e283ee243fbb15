use rand::Rng;
use rand::seq::SliceRandom;

use super::error::{GameError, GameResult};
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Phase advance of the pulse animation per tick
const PULSE_STEP: f32 = 0.2;

/// The food the snake is chasing
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
    /// Phase of the pulsing animation, in radians
    pub pulse: f32,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            pulse: 0.0,
        }
    }

    /// A uniformly random cell, which may well be under the snake
    pub fn generate_position<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Position {
        let x = rng.gen_range(0..grid.width) as i32;
        let y = rng.gen_range(0..grid.height) as i32;
        Position::new(x, y)
    }

    /// Pick a cell not covered by the snake.
    ///
    /// A handful of random draws are tried first; when they all land on the
    /// snake the free cells are enumerated and one is chosen uniformly, so a
    /// crowded board never stalls and a full one is reported.
    pub fn place<R: Rng + ?Sized>(
        grid: Grid,
        snake: &Snake,
        max_attempts: u32,
        rng: &mut R,
    ) -> GameResult<Position> {
        for _ in 0..max_attempts {
            let candidate = Self::generate_position(grid, rng);
            if !snake.occupies(candidate) {
                return Ok(candidate);
            }
        }

        let free: Vec<Position> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
        free.choose(rng).copied().ok_or(GameError::BoardFull {
            width: grid.width,
            height: grid.height,
        })
    }

    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    pub fn advance_pulse(&mut self) {
        self.pulse = (self.pulse + PULSE_STEP) % std::f32::consts::TAU;
    }

    /// Pulse offset in [-1, 1]
    pub fn pulse_offset(&self) -> f32 {
        self.pulse.sin()
    }
}
