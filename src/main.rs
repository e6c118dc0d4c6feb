use bevy::prelude::*;

use dice_widget::plugins::dice_plugin::DiceWidgetPlugin;
use dice_widget::utils::constants::widget_constants::WINDOW_TITLE;
use dice_widget::utils::debug_functions::DebugFunctionsPlugin;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                #[cfg(target_arch = "wasm32")]
                canvas: Some("#dice-canvas".into()),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((DiceWidgetPlugin, DebugFunctionsPlugin))
        .run();
}
