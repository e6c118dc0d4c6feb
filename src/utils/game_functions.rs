//! Core widget systems: ticking the dice and particles and mirroring them onto the scene.
use bevy::prelude::*;

use dice_core::rotation_from_euler;

use crate::log;
use crate::utils::facts::FactBook;
use crate::utils::objects::{
    Dice, DiceState, OrbitParticle, OrbitSwarm, RollCompleted, WidgetState,
};

/// One fixed tick of the dice state machine.
/// Reads the camera's view direction in case the spin stops on this tick.
pub fn advance_dice(
    mut dice: ResMut<DiceState>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
    mut roll_writer: MessageWriter<RollCompleted>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    let camera_forward = *camera_transform.forward();

    if let Some(result) = dice.roller.tick(camera_forward) {
        roll_writer.write(RollCompleted(result));
    }
}

/// One fixed tick of the particle swarm. Runs after `advance_dice` so it
/// samples the angular velocity of the same tick.
pub fn advance_particles(dice: Res<DiceState>, mut swarm: ResMut<OrbitSwarm>) {
    let velocity = dice.roller.angular_velocity();
    swarm.particles.advance(velocity);
}

/// Copies the cube's Euler orientation onto its transform.
pub fn sync_dice_transform(
    dice: Res<DiceState>,
    mut dice_query: Query<&mut Transform, With<Dice>>,
) {
    let Ok(mut transform) = dice_query.single_mut() else {
        return;
    };
    transform.rotation = rotation_from_euler(dice.roller.orientation());
}

/// Places every particle on its orbit with the wall-clock bob and tumble.
pub fn sync_particle_transforms(
    time: Res<Time>,
    swarm: Res<OrbitSwarm>,
    mut particle_query: Query<(&OrbitParticle, &mut Transform)>,
) {
    let positions: Vec<Vec3> = swarm.particles.positions(time.elapsed_secs()).collect();
    let particles = swarm.particles.particles();

    for (marker, mut transform) in &mut particle_query {
        let (Some(position), Some(particle)) =
            (positions.get(marker.index), particles.get(marker.index))
        else {
            continue;
        };
        transform.translation = *position;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, particle.tumble, particle.tumble, 0.0);
    }
}

/// Hands completed rolls to the overlay and looks up their fact.
pub fn record_roll(
    time: Res<Time>,
    book: Res<FactBook>,
    mut widget: ResMut<WidgetState>,
    mut roll_reader: MessageReader<RollCompleted>,
) {
    // At most one roll completes per spin, keep the latest if frames bunch up.
    let Some(RollCompleted(result)) = roll_reader.read().last().copied() else {
        return;
    };

    let fact = book.get(result).cloned();
    match &fact {
        Some(fact) => log!("Rolled a {result}: {} - {}", fact.title, fact.description),
        None => {
            warn!("No fact configured for face {result}");
            log!("Rolled a {result}");
        }
    }

    widget.last_roll = Some(result);
    widget.fact = fact;
    widget.card_shown_at = Some(time.elapsed());
}
