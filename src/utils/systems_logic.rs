//! Systems wiring for the dice widget.

use crate::utils::game_functions::{
    advance_dice, advance_particles, record_roll, sync_dice_transform, sync_particle_transforms,
};
use crate::utils::inputs::handle_spin_gesture;
use crate::utils::objects::RollCompleted;
use crate::utils::setup::{load_widget_config, setup};
use crate::utils::ui::{fade_in_fact_card, refresh_overlay};
use bevy::prelude::*;

// Plugin for managing all the widget systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.add_message::<RollCompleted>()
            // Resources first, so the scene can read them
            .add_systems(PreStartup, load_widget_config)
            .add_systems(Startup, setup)
            // One animation tick: the dice advance before the particles sample their velocity
            .add_systems(FixedUpdate, (advance_dice, advance_particles).chain())
            // Per frame: gestures, scene sync and overlay
            .add_systems(
                Update,
                (
                    handle_spin_gesture,
                    (sync_dice_transform, sync_particle_transforms),
                    (record_roll, refresh_overlay, fade_in_fact_card).chain(),
                ),
            );
    }
}
