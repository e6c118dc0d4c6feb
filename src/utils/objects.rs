// This file defines the various objects, resources, and components used by the widget.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use std::time::Duration;

use dice_core::{DiceConfig, DiceRoller, OrbitParticles, RollResult};

use crate::utils::facts::Fact;

/// A resource that owns the cube's motion state machine.
#[derive(Resource, Debug)]
pub struct DiceState {
    pub roller: DiceRoller,
}

impl DiceState {
    pub fn new(config: DiceConfig) -> Self {
        Self {
            roller: DiceRoller::new(config),
        }
    }
}

/// A resource that owns the orbiting particle swarm.
#[derive(Resource, Debug)]
pub struct OrbitSwarm {
    pub particles: OrbitParticles,
}

/// A resource for random number generation.
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    // Creates a new `RandomGen` from a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // Creates a new `RandomGen` seeded by the operating system.
    pub fn from_entropy() -> Self {
        Self {
            random_gen: ChaCha8Rng::from_os_rng(),
        }
    }
}

/// Overlay state of the widget, changed only when a roll completes.
#[derive(Resource, Clone, Default, Debug)]
pub struct WidgetState {
    // The last completed roll, if any.
    pub last_roll: Option<RollResult>,
    // The fact shown for the last roll.
    pub fact: Option<Fact>,
    // When the fact card started fading in.
    pub card_shown_at: Option<Duration>,
}

impl WidgetState {
    /// The first completed roll hides the prompt for good.
    pub fn has_spun(&self) -> bool {
        self.last_roll.is_some()
    }
}

/// Sent once per completed roll (using Message trait for Bevy 0.17)
#[derive(Message, Clone, Copy, Debug)]
pub struct RollCompleted(pub RollResult);

/// A component that marks the dice cube entity (the gesture hit region).
#[derive(Component)]
pub struct Dice;

/// A component that marks an orbiting particle by its index in the swarm.
#[derive(Component)]
pub struct OrbitParticle {
    pub index: usize,
}

/// A component that marks the big background word.
#[derive(Component)]
pub struct BackgroundWord;

/// A component that marks the "spin the dice" prompt bubble.
#[derive(Component)]
pub struct SpinPrompt;

/// A component that marks the fact card container.
#[derive(Component)]
pub struct FactCard;

/// A component that marks the fact card's title text.
#[derive(Component)]
pub struct FactTitle;

/// A component that marks the fact card's description text.
#[derive(Component)]
pub struct FactDescription;
