use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::game::{Command, CommandOutcome, GameConfig, GameEngine, GameError, GameState};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render at 30 FPS (33ms per frame)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset().context("Failed to set up the board")?;

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_secs_f64(1.0 / self.engine.config().tick_rate as f64);
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(RENDER_INTERVAL);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(tick_rate = self.engine.config().tick_rate, "game loop started");

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.state.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            rounds = self.metrics.rounds_played,
            high_score = self.state.session.high_score,
            "game loop stopped"
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            if let Some(command) = self.input_handler.handle_key_event(key) {
                self.apply_command(command)?;
            }
        }

        Ok(())
    }

    fn apply_command(&mut self, command: Command) -> Result<()> {
        let outcome = self
            .engine
            .handle_command(&mut self.state, command)
            .context("Failed to apply command")?;

        match (command, outcome) {
            (_, CommandOutcome::Quit) => self.should_quit = true,
            (Command::Restart, CommandOutcome::Applied) => self.metrics.on_round_start(),
            _ => {}
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        let was_over = self.state.is_game_over();

        match self.engine.step(&mut self.state) {
            Ok(result) => {
                if result.game_over && !was_over {
                    self.metrics.on_round_over();
                }
            }
            Err(err @ GameError::BoardFull { .. }) => {
                // The engine already closed the round; the board is simply won
                warn!("{err}");
                self.metrics.on_round_over();
            }
            Err(err) => return Err(err).context("Game step failed"),
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};

    fn mode() -> HumanMode {
        HumanMode::new(GameConfig::small(), Some(5)).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(!mode.state.is_game_over());
        assert_eq!(mode.state.session.score, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(HumanMode::new(GameConfig::new(0, 0), None).is_err());
    }

    #[test]
    fn test_steering_applies_immediately() {
        let mut mode = mode();
        mode.apply_command(Command::Move(Direction::Up)).unwrap();
        assert_eq!(mode.state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_round_over_counted_once() {
        let mut mode = mode();
        mode.state.snake.body[0] = Position::new(9, 5);
        mode.state.food.position = Position::new(0, 0);

        mode.update_game().unwrap();
        mode.update_game().unwrap();
        mode.update_game().unwrap();

        assert!(mode.state.is_game_over());
        assert_eq!(mode.metrics.rounds_played, 1);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = mode();
        mode.state.session.score = 10;
        mode.state.session.finish();

        mode.apply_command(Command::Restart).unwrap();

        assert_eq!(mode.state.session.score, 0);
        assert_eq!(mode.state.session.high_score, 10);
        assert!(!mode.state.is_game_over());
    }

    #[test]
    fn test_quit_command() {
        let mut mode = mode();
        mode.apply_command(Command::Quit).unwrap();
        assert!(mode.should_quit);
    }
}
