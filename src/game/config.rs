use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{GameError, GameResult};

/// Fastest clock the play loop can drive without the tick period collapsing
pub const MAX_TICK_RATE: u32 = 1000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded for eating food
    pub food_reward: u32,
    /// Steps per second driven by the front-end clock
    pub tick_rate: u32,
    /// Number of pre-move head cells kept for the trail effect
    pub trail_length: usize,
    /// Random draws tried before falling back to scanning for free cells
    pub max_placement_attempts: u32,
    pub particles: ParticleConfig,
}

/// Tuning for the particle effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Ticks a particle stays alive
    pub lifetime: u32,
    /// Upper bound of the initial speed on each axis, in cells per tick
    pub max_speed: f32,
    /// Multiplier applied to the velocity every tick
    pub damping: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Particles spawned when food is eaten
    pub food_burst: usize,
    /// Particles spawned when the snake dies
    pub death_burst: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 1,
            food_reward: 10,
            tick_rate: 10,
            trail_length: 20,
            max_placement_attempts: 64,
            particles: ParticleConfig::default(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            lifetime: 60,
            max_speed: 0.1,
            damping: 0.98,
            min_size: 0.1,
            max_size: 0.25,
            food_burst: 15,
            death_burst: 30,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a TOML file; keys missing from the file keep their defaults.
    ///
    /// The result is not validated, so command-line overrides can still be
    /// applied before calling [`GameConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> GameResult<()> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.grid_width == 0 || self.grid_height == 0 {
            return invalid(format!(
                "grid must have non-zero dimensions, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > i32::MAX as usize || self.grid_height > i32::MAX as usize {
            return invalid("grid dimensions do not fit in cell coordinates".to_string());
        }

        if self.initial_snake_length == 0 {
            return invalid("initial_snake_length must be at least 1".to_string());
        }

        // The snake is laid out to the left of the center cell
        let room = self.grid_width / 2 + 1;
        if self.initial_snake_length > room {
            return invalid(format!(
                "initial_snake_length {} does not fit in a grid {} cells wide",
                self.initial_snake_length, self.grid_width
            ));
        }

        if self.grid_width * self.grid_height <= self.initial_snake_length {
            return invalid(format!(
                "a {}x{} grid leaves no room for food",
                self.grid_width, self.grid_height
            ));
        }

        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return invalid(format!(
                "tick_rate must be between 1 and {MAX_TICK_RATE}, got {}",
                self.tick_rate
            ));
        }

        self.particles.validate()
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> GameResult<()> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));

        if self.lifetime == 0 || i32::try_from(self.lifetime).is_err() {
            return invalid(format!(
                "particle lifetime must be between 1 and {}, got {}",
                i32::MAX,
                self.lifetime
            ));
        }

        if !(self.max_speed >= 0.0 && self.max_speed.is_finite()) {
            return invalid(format!(
                "particle max_speed must be non-negative, got {}",
                self.max_speed
            ));
        }

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return invalid(format!(
                "particle damping must be in (0, 1], got {}",
                self.damping
            ));
        }

        if !(self.min_size >= 0.0 && self.min_size <= self.max_size && self.max_size.is_finite()) {
            return invalid(format!(
                "particle size range {}..{} is invalid",
                self.min_size, self.max_size
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 1);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.trail_length, 20);
        assert_eq!(config.particles.lifetime, 60);
        assert_eq!(config.particles.food_burst, 15);
        assert_eq!(config.particles.death_burst, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.food_reward, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml(
            r#"
            grid_width = 12
            tick_rate = 15

            [particles]
            death_burst = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tick_rate, 15);
        assert_eq!(config.particles.death_burst, 50);
        assert_eq!(config.particles.food_burst, 15);
    }

    #[test]
    fn test_toml_rejects_malformed_values() {
        assert!(GameConfig::from_toml("grid_width = \"wide\"").is_err());
        assert!(GameConfig::from_toml("tick_rate = -1").is_err());
    }

    #[test]
    fn test_toml_defers_validation_to_overrides() {
        let mut config = GameConfig::from_toml("grid_width = 0").unwrap();
        assert!(config.validate().is_err());

        config.grid_width = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_tick_rate_upper_bound() {
        let mut config = GameConfig::default();
        config.tick_rate = MAX_TICK_RATE;
        assert!(config.validate().is_ok());

        config.tick_rate = MAX_TICK_RATE + 1;
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));

        config.tick_rate = 4_000_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_particle_lifetime_fits_tick_counter() {
        let mut config = GameConfig::default();
        config.particles.lifetime = i32::MAX as u32;
        assert!(config.validate().is_ok());

        config.particles.lifetime = i32::MAX as u32 + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_degenerate_grid() {
        let config = GameConfig::new(1, 1);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig(_))
        ));

        assert!(GameConfig::new(2, 1).validate().is_ok());
    }

    #[test]
    fn test_validation_snake_too_long() {
        let mut config = GameConfig::small();
        config.initial_snake_length = 6;
        assert!(config.validate().is_ok());

        config.initial_snake_length = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_particles() {
        let mut config = GameConfig::default();
        config.particles.damping = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.particles.min_size = 1.0;
        config.particles.max_size = 0.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.particles.lifetime = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tick_rate = 0;
        assert!(config.validate().is_err());
    }
}
