//! Short-lived particles spawned in bursts when food is eaten or the snake
//! dies.
//!
//! Positions and velocities are in continuous cell units, so a particle at
//! `(2.5, 3.5)` sits in the middle of cell `(2, 3)`.

use rand::Rng;

use super::config::ParticleConfig;

/// An RGB color carried by drawable entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Scale every channel by `factor`, clamped to [0, 1]
    pub fn scaled(self, factor: f32) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f32 * factor).round() as u8;
        Rgb(channel(self.0), channel(self.1), channel(self.2))
    }
}

pub const FOOD_COLOR: Rgb = Rgb(255, 215, 0);
pub const SNAKE_HEAD_COLOR: Rgb = Rgb(255, 100, 255);
pub const SNAKE_BODY_COLOR: Rgb = Rgb(200, 50, 200);
pub const SNAKE_GLOW_COLOR: Rgb = Rgb(255, 150, 255);

/// A single decaying particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Ticks left before the particle is removed
    pub life: i32,
    pub max_life: i32,
    pub color: Rgb,
    pub size: f32,
}

impl Particle {
    /// Advance one tick: integrate, age and damp
    pub fn update(&mut self, damping: f32) {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= 1;
        self.vx *= damping;
        self.vy *= damping;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Remaining share of the lifetime, 1.0 when fresh and 0.0 when expired
    pub fn life_fraction(&self) -> f32 {
        if self.max_life <= 0 {
            return 0.0;
        }
        (self.life as f32 / self.max_life as f32).clamp(0.0, 1.0)
    }

    /// Size shrunk in proportion to the remaining lifetime
    pub fn current_size(&self) -> f32 {
        self.size * self.life_fraction()
    }
}

/// Owns every live particle
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    config: ParticleConfig,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
    }

    /// Spawn one particle at a point with a random velocity and size
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, color: Rgb, rng: &mut R) {
        let speed = self.config.max_speed;
        let lifetime = i32::try_from(self.config.lifetime).unwrap_or(i32::MAX);

        self.particles.push(Particle {
            x,
            y,
            vx: rng.gen_range(-speed..=speed),
            vy: rng.gen_range(-speed..=speed),
            life: lifetime,
            max_life: lifetime,
            color,
            size: rng.gen_range(self.config.min_size..=self.config.max_size),
        });
    }

    pub fn burst<R: Rng + ?Sized>(
        &mut self,
        x: f32,
        y: f32,
        color: Rgb,
        count: usize,
        rng: &mut R,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.spawn(x, y, color, rng);
        }
    }

    /// Advance every particle and drop the expired ones
    pub fn update_all(&mut self) {
        let damping = self.config.damping;
        for particle in &mut self.particles {
            particle.update(damping);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
