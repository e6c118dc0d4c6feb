//! Tests for the dice motion state machine

use std::time::Duration;

use bevy_math::Vec3;
use dice_core::{
    resolve_face, DiceConfig, DiceRoller, MotionPhase, OrbitParticles, RollResult, TriggerOutcome,
    FACES,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

fn run_until_idle(roller: &mut DiceRoller, max_ticks: usize) -> Vec<RollResult> {
    let mut results = Vec::new();
    for _ in 0..max_ticks {
        if let Some(result) = roller.tick(FORWARD) {
            results.push(result);
        }
        if roller.phase() == MotionPhase::Idle {
            break;
        }
    }
    results
}

#[test]
fn test_speed_never_increases_while_spinning() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut roller = DiceRoller::new(DiceConfig::default());
        roller.trigger_spin(Duration::from_secs(5), &mut rng);

        let mut previous = roller.angular_velocity().length();
        while roller.phase() == MotionPhase::Spinning {
            roller.tick(FORWARD);
            let speed = roller.angular_velocity().length();
            assert!(speed <= previous, "seed {seed}: {speed} > {previous}");
            previous = speed;
        }
    }
}

#[test]
fn test_every_spin_emits_exactly_one_result() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut roller = DiceRoller::new(DiceConfig::default());
        roller.trigger_spin(Duration::from_secs(1), &mut rng);

        let results = run_until_idle(&mut roller, 1_000);
        assert_eq!(results.len(), 1, "seed {seed}");

        // The cube rests exactly on the face it reported.
        let face = FACES.iter().find(|f| f.label == results[0]).unwrap();
        assert_eq!(roller.orientation(), face.rest);
        assert_eq!(resolve_face(roller.orientation(), FORWARD).label, results[0]);
    }
}

#[test]
fn test_retrigger_while_settling_emits_only_the_second_result() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut roller = DiceRoller::new(DiceConfig::default());
    roller.trigger_spin(Duration::from_millis(1_000), &mut rng);

    let mut results = Vec::new();
    while roller.phase() != MotionPhase::Settling {
        results.extend(roller.tick(FORWARD));
    }
    // A few settling ticks, not enough to converge.
    for _ in 0..3 {
        results.extend(roller.tick(FORWARD));
    }
    assert!(results.is_empty());
    assert_eq!(roller.phase(), MotionPhase::Settling);

    let outcome = roller.trigger_spin(Duration::from_millis(5_000), &mut rng);
    assert_eq!(outcome, TriggerOutcome::Accepted { cancelled_settle: true });
    assert_eq!(roller.phase(), MotionPhase::Spinning);
    assert!(roller.pending_face().is_none());

    results.extend(run_until_idle(&mut roller, 1_000));
    assert_eq!(results.len(), 1);
    assert_eq!(roller.rolls_completed(), 1);
}

#[test]
fn test_gesture_during_cooldown_is_a_no_op() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut roller = DiceRoller::new(DiceConfig::default());
    assert_eq!(
        roller.trigger_spin(Duration::from_millis(10_000), &mut rng),
        TriggerOutcome::Accepted { cancelled_settle: false }
    );
    for _ in 0..5 {
        roller.tick(FORWARD);
    }
    let velocity = roller.angular_velocity();
    let orientation = roller.orientation();
    let phase = roller.phase();

    let outcome = roller.trigger_spin(Duration::from_millis(10_999), &mut rng);
    assert_eq!(outcome, TriggerOutcome::CoolingDown);
    assert_eq!(roller.angular_velocity(), velocity);
    assert_eq!(roller.orientation(), orientation);
    assert_eq!(roller.phase(), phase);
}

#[test]
fn test_cooldown_also_guards_a_settling_cube() {
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut roller = DiceRoller::new(DiceConfig::default());
    roller.trigger_spin(Duration::ZERO, &mut rng);
    while roller.phase() != MotionPhase::Settling {
        roller.tick(FORWARD);
    }
    let pending = roller.pending_face();

    // Still inside the cooldown window: the pending result must survive.
    assert_eq!(
        roller.trigger_spin(Duration::from_millis(500), &mut rng),
        TriggerOutcome::CoolingDown
    );
    assert_eq!(roller.pending_face(), pending);
    let results = run_until_idle(&mut roller, 1_000);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_particles_follow_the_spin_each_tick() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let mut roller = DiceRoller::new(DiceConfig::default());
    let mut swarm = OrbitParticles::spawn(DiceConfig::default().orbit, &mut rng);
    assert_eq!(swarm.len(), 17);

    roller.trigger_spin(Duration::from_secs(3), &mut rng);
    let start = swarm.particles()[0].orbit_angle;
    roller.tick(FORWARD);
    let velocity = roller.angular_velocity();
    swarm.advance(velocity);

    let expected_step = if velocity.length() > 0.01 {
        velocity.y * 0.05
    } else {
        0.005
    };
    let moved = swarm.particles()[0].orbit_angle;
    let expected = (start + expected_step).rem_euclid(std::f32::consts::TAU);
    assert!((moved - expected).abs() < 1e-5);
}

#[test]
fn test_particle_sizes_by_index() {
    for seed in 0..10 {
        let swarm = OrbitParticles::spawn(
            DiceConfig::default().orbit,
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        assert_eq!(swarm.len(), 17);
        for (index, particle) in swarm.particles().iter().enumerate() {
            let range = if index < 4 { 0.08..=0.10 } else { 0.05..=0.07 };
            assert!(
                range.contains(&particle.size),
                "seed {seed}, particle {index}: size {}",
                particle.size
            );
        }
    }
}
