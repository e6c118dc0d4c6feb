//! Eases the cube from where the spin stopped onto a face's rest orientation.
use std::f32::consts::{PI, TAU};

use bevy_math::Vec3;

use crate::config::SettleConfig;
use crate::faces::{FaceDescriptor, RollResult};

/// Holds at most one pending target. Clearing the slot drops the pending result with it.
#[derive(Clone, Debug)]
pub struct SettleAnimator {
    config: SettleConfig,
    target: Option<&'static FaceDescriptor>,
}

impl SettleAnimator {
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            target: None,
        }
    }

    pub fn target(&self) -> Option<&'static FaceDescriptor> {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Stores `face` as the target and unwinds whole turns from `orientation`
    /// so that every axis starts at most half a turn from the rest pose.
    pub fn begin(&mut self, face: &'static FaceDescriptor, orientation: &mut Vec3) {
        *orientation = unwind_toward(*orientation, face.rest);
        self.target = Some(face);
    }

    /// Drops the pending target. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.target.take().is_some()
    }

    /// Moves `orientation` one step toward the target.
    /// On convergence the orientation snaps exactly onto the target, the slot
    /// is cleared and the face's label is returned.
    pub fn advance(&mut self, orientation: &mut Vec3) -> Option<RollResult> {
        let face = self.target?;

        *orientation += (face.rest - *orientation) * self.config.lerp_factor;

        let remaining = (face.rest - *orientation).abs().max_element();
        if remaining < self.config.snap_tolerance {
            *orientation = face.rest;
            self.target = None;
            Some(face.label)
        } else {
            None
        }
    }
}

/// Shifts each axis of `current` by whole turns so it lies within `[-PI, PI]` of `target`.
pub fn unwind_toward(current: Vec3, target: Vec3) -> Vec3 {
    let wrap = |delta: f32| (delta + PI).rem_euclid(TAU) - PI;
    target + Vec3::new(
        wrap(current.x - target.x),
        wrap(current.y - target.y),
        wrap(current.z - target.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::{rotation_from_euler, FACES};

    fn animator() -> SettleAnimator {
        SettleAnimator::new(SettleConfig::default())
    }

    #[test]
    fn unwind_keeps_the_rotation() {
        let current = Vec3::new(7.5, -9.0, 13.1);
        let unwound = unwind_toward(current, FACES[3].rest);
        let delta = (unwound - FACES[3].rest).abs().max_element();
        assert!(delta <= PI + 1e-5);
        assert!(rotation_from_euler(current).abs_diff_eq(rotation_from_euler(unwound), 1e-4)
            || rotation_from_euler(current).abs_diff_eq(-rotation_from_euler(unwound), 1e-4));
    }

    #[test]
    fn converges_and_emits_once() {
        let mut settle = animator();
        let mut orientation = Vec3::new(0.8, -0.4, 2.5);
        settle.begin(&FACES[0], &mut orientation);

        let mut results = Vec::new();
        for _ in 0..200 {
            if let Some(result) = settle.advance(&mut orientation) {
                results.push(result);
            }
        }
        assert_eq!(results, vec![FACES[0].label]);
        assert_eq!(orientation, FACES[0].rest);
        assert!(!settle.is_active());
    }

    #[test]
    fn convergence_is_bounded_for_any_half_turn_delta() {
        for face in &FACES {
            for offset in [-PI, -2.0, -0.5, 0.0, 0.3, 1.7, PI] {
                let mut settle = animator();
                let mut orientation = face.rest + Vec3::new(offset, -offset, offset * 0.5);
                settle.begin(face, &mut orientation);

                let ticks = (1..=200)
                    .find(|_| settle.advance(&mut orientation).is_some())
                    .unwrap_or_else(|| panic!("{} did not settle from offset {offset}", face.name));
                assert!(ticks <= 200);
            }
        }
    }

    #[test]
    fn cancel_drops_the_pending_result() {
        let mut settle = animator();
        let mut orientation = Vec3::new(0.5, 0.5, 0.5);
        settle.begin(&FACES[5], &mut orientation);

        assert!(settle.cancel());
        assert!(!settle.cancel());
        for _ in 0..200 {
            assert!(settle.advance(&mut orientation).is_none());
        }
    }
}
