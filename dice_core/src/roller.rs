//! The dice motion state machine: `Idle -> Spinning -> Resolving -> Settling -> Idle`.
//!
//! Two events drive it. [`DiceRoller::trigger_spin`] comes from a gesture and
//! [`DiceRoller::tick`] from the per-frame callback. A completed roll is
//! returned from exactly one `tick`; a new gesture during `Settling` drops the
//! pending target before the new spin starts, so a stale result never fires.
use std::time::Duration;

use bevy_math::Vec3;
use log::{debug, info};
use rand::Rng;

use crate::config::DiceConfig;
use crate::faces::{resolve_face, FaceDescriptor, RollResult};
use crate::settle::SettleAnimator;
use crate::spin::SpinController;

/// Motion state of the cube. Exactly one holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    // At rest, nothing moves
    Idle,
    // Angular velocity is integrated and damped every tick
    Spinning,
    // The spin just stopped, the face resolver runs within the same tick
    Resolving,
    // Easing onto the resolved face
    Settling,
}

/// What happened to a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A new spin started. `cancelled_settle` is set if a pending result was dropped.
    Accepted { cancelled_settle: bool },
    /// Too soon after the previous accepted gesture, nothing changed.
    CoolingDown,
}

/// Owns all per-tick state of the cube.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    orientation: Vec3,
    phase: MotionPhase,
    spin: SpinController,
    settle: SettleAnimator,
    rolls_completed: u64,
}

impl DiceRoller {
    pub fn new(config: DiceConfig) -> Self {
        Self {
            orientation: Vec3::ZERO,
            phase: MotionPhase::Idle,
            spin: SpinController::new(config.spin),
            settle: SettleAnimator::new(config.settle),
            rolls_completed: 0,
        }
    }

    /// Euler orientation (XYZ, radians).
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.spin.velocity()
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn rolls_completed(&self) -> u64 {
        self.rolls_completed
    }

    /// The face being settled onto, if any.
    pub fn pending_face(&self) -> Option<&'static FaceDescriptor> {
        self.settle.target()
    }

    /// Starts a spin unless the cooldown is still running.
    pub fn trigger_spin<R: Rng>(&mut self, now: Duration, rng: &mut R) -> TriggerOutcome {
        if !self.spin.is_ready(now) {
            debug!("spin gesture ignored, cooling down ({:?})", self.phase);
            return TriggerOutcome::CoolingDown;
        }

        // Drop the pending target before the new velocity lands.
        let cancelled_settle = self.settle.cancel();
        if cancelled_settle {
            debug!("pending settle cancelled by a new spin");
        }

        self.spin.launch(now, rng);
        self.phase = MotionPhase::Spinning;
        debug!("spin started with velocity {}", self.spin.velocity());
        self.check_invariants();

        TriggerOutcome::Accepted { cancelled_settle }
    }

    /// Advances one tick. `camera_forward` is the camera's world-space view direction.
    /// Returns the roll result on the tick the cube comes to rest.
    pub fn tick(&mut self, camera_forward: Vec3) -> Option<RollResult> {
        let result = match self.phase {
            // Resolving never survives the tick that entered it
            MotionPhase::Idle | MotionPhase::Resolving => None,
            MotionPhase::Spinning => {
                if !self.spin.advance(&mut self.orientation) {
                    self.phase = MotionPhase::Resolving;
                    self.resolve(camera_forward);
                }
                None
            }
            MotionPhase::Settling => {
                let result = self.settle.advance(&mut self.orientation);
                if let Some(result) = result {
                    self.phase = MotionPhase::Idle;
                    self.rolls_completed += 1;
                    info!("dice settled on {result}");
                }
                result
            }
        };
        self.check_invariants();
        result
    }

    fn resolve(&mut self, camera_forward: Vec3) {
        let face = resolve_face(self.orientation, camera_forward);
        debug!("spin stopped, {} face ({}) is facing the camera", face.name, face.label);

        self.spin.halt();
        self.settle.begin(face, &mut self.orientation);
        self.phase = MotionPhase::Settling;
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.settle.is_active(),
            self.phase == MotionPhase::Settling,
            "settle target present outside Settling or missing inside it"
        );
        debug_assert!(
            self.phase == MotionPhase::Spinning || self.spin.velocity() == Vec3::ZERO,
            "cube has velocity while {:?}",
            self.phase
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    #[test]
    fn starts_idle_and_ignores_ticks() {
        let mut roller = DiceRoller::new(DiceConfig::default());
        for _ in 0..10 {
            assert_eq!(roller.tick(FORWARD), None);
        }
        assert_eq!(roller.phase(), MotionPhase::Idle);
        assert_eq!(roller.orientation(), Vec3::ZERO);
    }

    #[test]
    fn spin_hands_off_to_settling_in_one_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut roller = DiceRoller::new(DiceConfig::default());
        roller.trigger_spin(Duration::from_secs(2), &mut rng);

        let mut last = MotionPhase::Spinning;
        for _ in 0..500 {
            roller.tick(FORWARD);
            let phase = roller.phase();
            assert_ne!(phase, MotionPhase::Resolving);
            if last == MotionPhase::Spinning && phase != MotionPhase::Spinning {
                assert_eq!(phase, MotionPhase::Settling);
                assert!(roller.pending_face().is_some());
                assert_eq!(roller.angular_velocity(), Vec3::ZERO);
            }
            last = phase;
        }
        assert_eq!(roller.phase(), MotionPhase::Idle);
        assert_eq!(roller.rolls_completed(), 1);
    }
}
