use bevy::prelude::*;

use dice_core::constants::widget_constants::REFRESH_RATE_HZ;

use crate::utils::constants::scene_constants::CLEAR_COLOR;
use crate::utils::systems_logic::SystemsLogicPlugin;

/// Everything the dice widget needs on top of `DefaultPlugins`.
pub struct DiceWidgetPlugin;

impl Plugin for DiceWidgetPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(REFRESH_RATE_HZ))
            .insert_resource(ClearColor(CLEAR_COLOR))
            .add_plugins(SystemsLogicPlugin);
    }
}
