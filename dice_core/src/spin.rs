//! Angular velocity, damping and the gesture cooldown.
use std::time::Duration;

use bevy_math::Vec3;
use rand::Rng;

use crate::config::SpinConfig;

/// Owns the cube's angular velocity (rad/tick per Euler axis).
#[derive(Clone, Debug)]
pub struct SpinController {
    config: SpinConfig,
    velocity: Vec3,
    last_trigger: Option<Duration>,
}

impl SpinController {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            velocity: Vec3::ZERO,
            last_trigger: None,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Magnitude of the angular velocity.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether a gesture at `now` would be accepted.
    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_trigger {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.config.cooldown(),
        }
    }

    /// Draws a fresh random velocity if the cooldown has elapsed.
    /// Returns `false` and changes nothing otherwise.
    pub fn launch<R: Rng>(&mut self, now: Duration, rng: &mut R) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last_trigger = Some(now);

        let max = self.config.max_initial_speed;
        self.velocity = Vec3::new(
            rng.random_range(-max..=max),
            rng.random_range(-max..=max),
            rng.random_range(-max..=max),
        );
        true
    }

    /// Integrates one tick into `orientation` and applies damping.
    /// Returns `true` while the damped speed stays at or above the stop threshold.
    pub fn advance(&mut self, orientation: &mut Vec3) -> bool {
        *orientation += self.velocity;
        self.velocity *= self.config.damping;
        self.speed() >= self.config.stop_threshold
    }

    /// Zeroes the velocity once the spin hands off.
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }
}
