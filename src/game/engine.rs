use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    error::GameResult,
    food::Food,
    grid::{Grid, Position},
    particles::{FOOD_COLOR, ParticleSystem, SNAKE_HEAD_COLOR},
    session::Phase,
    snake::{CollisionType, Snake},
    state::GameState,
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the round is over after this step
    pub game_over: bool,
}

/// What became of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Not meaningful in the current phase
    Ignored,
    /// The player asked to leave; the caller should stop ticking
    Quit,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement and particles are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.config.grid_width, self.config.grid_height)
    }

    /// Build the state for a brand-new round
    pub fn reset(&mut self) -> GameResult<GameState> {
        self.config.validate()?;
        let grid = self.grid();

        let snake = Snake::new(
            grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
        )
        .with_trail_capacity(self.config.trail_length);

        let food = Food::new(self.place_food(grid, &snake)?);
        let particles = ParticleSystem::new(self.config.particles.clone());

        info!(width = grid.width, height = grid.height, "starting new round");

        Ok(GameState::new(grid, snake, food, particles))
    }

    /// Replace the round in `state`, carrying the high score over
    pub fn restart(&mut self, state: &mut GameState) -> GameResult<()> {
        let mut fresh = self.reset()?;
        fresh.session = state.session.restarted();
        *state = fresh;
        Ok(())
    }

    /// Apply a player command.
    ///
    /// Steering takes effect on the next step and only while playing; a
    /// restart is only honoured once the round is over.
    pub fn handle_command(
        &mut self,
        state: &mut GameState,
        command: Command,
    ) -> GameResult<CommandOutcome> {
        let outcome = match (command, state.session.phase) {
            (Command::Quit, _) => CommandOutcome::Quit,
            (Command::Move(direction), Phase::Playing) => {
                state.snake.change_direction(direction);
                CommandOutcome::Applied
            }
            (Command::Restart, Phase::GameOver) => {
                self.restart(state)?;
                CommandOutcome::Applied
            }
            _ => CommandOutcome::Ignored,
        };

        Ok(outcome)
    }

    /// Execute one step of the game.
    ///
    /// Once the round is over only the decorative parts keep moving, so
    /// bursts can finish playing out.
    pub fn step(&mut self, state: &mut GameState) -> GameResult<StepResult> {
        state.food.advance_pulse();

        if state.is_game_over() {
            state.particles.update_all();
            return Ok(StepResult {
                ate_food: false,
                collision_type: None,
                game_over: true,
            });
        }

        state.snake.move_forward();
        state.steps += 1;

        let ate_food = state.snake.head() == state.food.position;
        if ate_food {
            self.consume_food(state)?;
        }

        let collision_type = state.snake.collision(state.grid);
        if let Some(kind) = collision_type {
            state.session.finish();

            let (x, y) = state.snake.head().center();
            state.particles.burst(
                x,
                y,
                SNAKE_HEAD_COLOR,
                self.config.particles.death_burst,
                &mut self.rng,
            );

            info!(
                ?kind,
                score = state.session.score,
                high_score = state.session.high_score,
                steps = state.steps,
                "round over"
            );
        }

        state.particles.update_all();

        Ok(StepResult {
            ate_food,
            collision_type,
            game_over: state.is_game_over(),
        })
    }

    fn consume_food(&mut self, state: &mut GameState) -> GameResult<()> {
        state.snake.eat_food();
        state.session.award(self.config.food_reward);

        let (x, y) = state.food.position.center();
        state.particles.burst(
            x,
            y,
            FOOD_COLOR,
            self.config.particles.food_burst,
            &mut self.rng,
        );

        match self.place_food(state.grid, &state.snake) {
            Ok(position) => {
                debug!(
                    score = state.session.score,
                    length = state.snake.len(),
                    ?position,
                    "food eaten"
                );
                state.food.relocate(position);
                Ok(())
            }
            Err(err) => {
                warn!(score = state.session.score, "{err}");
                state.session.finish();
                Err(err)
            }
        }
    }

    fn place_food(&mut self, grid: Grid, snake: &Snake) -> GameResult<Position> {
        Food::place(
            grid,
            snake,
            self.config.max_placement_attempts,
            &mut self.rng,
        )
    }
}
