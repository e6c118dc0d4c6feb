//! Small spheres orbiting the cube. They speed up with the cube's yaw spin.
use std::f32::consts::{PI, TAU};

use bevy_math::Vec3;
use rand::Rng;

use crate::config::OrbitConfig;
use crate::constants::orbit_constants::{ORBIT_LARGE_COUNT, ORBIT_PARTICLE_COUNT};

/// One orbiting sphere. Only `orbit_angle` and `tumble` change after spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub radius: f32,
    /// Polar angle from `+Y`, fixed for the particle's life.
    pub polar: f32,
    /// Azimuth around `+Y`, advanced every tick and kept in `[0, TAU)`.
    pub orbit_angle: f32,
    pub size: f32,
    /// Self rotation of the mesh on x and y, kept in `[0, TAU)`.
    pub tumble: f32,
}

impl Particle {
    /// Cartesian position on the orbit sphere, without bob.
    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_orbit, cos_orbit) = self.orbit_angle.sin_cos();
        Vec3::new(
            self.radius * sin_polar * cos_orbit,
            self.radius * cos_polar,
            self.radius * sin_polar * sin_orbit,
        )
    }

    pub fn is_large(index: usize) -> bool {
        index < ORBIT_LARGE_COUNT
    }
}

/// The fixed swarm of [`ORBIT_PARTICLE_COUNT`] particles.
#[derive(Clone, Debug)]
pub struct OrbitParticles {
    config: OrbitConfig,
    particles: Vec<Particle>,
}

impl OrbitParticles {
    /// Places every particle at a random spot on a shell around the cube.
    pub fn spawn<R: Rng>(config: OrbitConfig, rng: &mut R) -> Self {
        let particles = (0..ORBIT_PARTICLE_COUNT)
            .map(|index| {
                let [radius_min, radius_max] = config.radius;
                let radius = rng.random_range(radius_min..=radius_max);
                let orbit_angle = rng.random_range(0.0..TAU);
                let polar = rng.random_range(0.0..PI);
                let [size_min, size_max] = if Particle::is_large(index) {
                    config.large_size
                } else {
                    config.small_size
                };
                let size = rng.random_range(size_min..=size_max);
                Particle {
                    radius,
                    polar,
                    orbit_angle,
                    size,
                    tumble: 0.0,
                }
            })
            .collect();

        Self { config, particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Orbit step for this tick, given the cube's angular velocity.
    pub fn orbit_step(&self, angular_velocity: Vec3) -> f32 {
        if angular_velocity.length() > self.config.follow_threshold {
            angular_velocity.y * self.config.spin_coupling
        } else {
            self.config.idle_speed
        }
    }

    /// Advances every particle by one tick.
    pub fn advance(&mut self, angular_velocity: Vec3) {
        let step = self.orbit_step(angular_velocity);
        let tumble = self.config.tumble_speed;
        for particle in &mut self.particles {
            particle.orbit_angle = (particle.orbit_angle + step).rem_euclid(TAU);
            particle.tumble = (particle.tumble + tumble).rem_euclid(TAU);
        }
    }

    /// Vertical bob of particle `index` at wall-clock time `elapsed_secs`.
    pub fn bob_offset(&self, index: usize, elapsed_secs: f32) -> f32 {
        (elapsed_secs * self.config.bob_rate + index as f32).sin() * self.config.bob_amplitude
    }

    /// Rendered positions, bob included.
    pub fn positions(&self, elapsed_secs: f32) -> impl Iterator<Item = Vec3> + '_ {
        self.particles
            .iter()
            .enumerate()
            .map(move |(index, particle)| {
                particle.position() + Vec3::Y * self.bob_offset(index, elapsed_secs)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn swarm(seed: u64) -> OrbitParticles {
        OrbitParticles::spawn(OrbitConfig::default(), &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn spawn_is_deterministic_for_a_seed() {
        assert_eq!(swarm(42).particles(), swarm(42).particles());
        assert_ne!(swarm(42).particles(), swarm(43).particles());
    }

    #[test]
    fn positions_stay_on_the_orbit_shell() {
        let swarm = swarm(3);
        for particle in swarm.particles() {
            let distance = particle.position().length();
            assert!((distance - particle.radius).abs() < 1e-5);
            assert!((0.9..=1.1).contains(&particle.radius));
        }
    }

    #[test]
    fn idle_cube_gives_slow_constant_orbit() {
        let swarm = swarm(5);
        assert_eq!(swarm.orbit_step(Vec3::ZERO), 0.005);
        assert_eq!(swarm.orbit_step(Vec3::new(0.004, 0.004, 0.004)), 0.005);
    }

    #[test]
    fn spinning_cube_drags_particles_with_its_yaw() {
        let mut swarm = swarm(5);
        let before: Vec<f32> = swarm.particles().iter().map(|p| p.orbit_angle).collect();
        let velocity = Vec3::new(0.0, -0.2, 0.1);
        swarm.advance(velocity);

        for (particle, angle) in swarm.particles().iter().zip(before) {
            let expected = (angle - 0.2 * 0.05).rem_euclid(TAU);
            assert!((particle.orbit_angle - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn advance_keeps_radius_and_polar() {
        let mut swarm = swarm(9);
        let before = swarm.particles().to_vec();
        for _ in 0..100 {
            swarm.advance(Vec3::new(0.1, 0.2, 0.0));
        }
        for (after, before) in swarm.particles().iter().zip(before) {
            assert_eq!(after.radius, before.radius);
            assert_eq!(after.polar, before.polar);
            assert_eq!(after.size, before.size);
        }
    }

    #[test]
    fn orbit_angle_wraps_instead_of_growing() {
        let mut swarm = swarm(11);
        for _ in 0..5_000 {
            swarm.advance(Vec3::new(0.0, 0.2, 0.0));
        }
        for particle in swarm.particles() {
            assert!((0.0..TAU).contains(&particle.orbit_angle));
            assert!((0.0..TAU).contains(&particle.tumble));
        }
    }

    #[test]
    fn rendered_positions_add_the_bob() {
        let swarm = swarm(4);
        let positions: Vec<Vec3> = swarm.positions(1.5).collect();
        assert_eq!(positions.len(), swarm.len());
        for (index, (position, particle)) in positions.iter().zip(swarm.particles()).enumerate() {
            let expected = particle.position() + Vec3::Y * swarm.bob_offset(index, 1.5);
            assert!((*position - expected).length() < 1e-6);
        }
    }

    #[test]
    fn bob_is_small_and_index_dependent() {
        let swarm = swarm(1);
        let a = swarm.bob_offset(0, 2.0);
        let b = swarm.bob_offset(1, 2.0);
        assert!(a.abs() <= 0.002 && b.abs() <= 0.002);
        assert_ne!(a, b);
    }
}
