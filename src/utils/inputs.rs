//! Pointer and touch gestures that spin the dice.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use dice_core::constants::widget_constants::CUBE_HALF_EXTENT;
use dice_core::{TriggerOutcome, ray_hits_cube};

use crate::utils::objects::{Dice, DiceState, RandomGen};

/// Screen positions of all presses that started this frame (mouse and touch).
fn pressed_positions(
    mouse: &ButtonInput<MouseButton>,
    touches: &Touches,
    window: Option<&Window>,
) -> Vec<Vec2> {
    let mut positions: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.and_then(Window::cursor_position) {
            positions.push(cursor);
        }
    }
    positions
}

/// Starts a spin when a press lands on the cube.
pub fn handle_spin_gesture(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    dice_query: Query<&GlobalTransform, With<Dice>>,
    mut dice: ResMut<DiceState>,
    mut random_gen: ResMut<RandomGen>,
) {
    let positions = pressed_positions(&mouse, &touches, windows.single().ok());
    if positions.is_empty() {
        return;
    }

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(dice_transform) = dice_query.single() else {
        return;
    };
    let (scale, rotation, _) = dice_transform.to_scale_rotation_translation();
    let half_extent = CUBE_HALF_EXTENT * scale.max_element();
    let center = dice_transform.translation();

    let on_cube = positions.into_iter().any(|position| {
        let Ok(ray) = camera.viewport_to_world(camera_transform, position) else {
            return false;
        };
        ray_hits_cube(ray.origin - center, *ray.direction, rotation, half_extent)
    });
    if !on_cube {
        return;
    }

    match dice
        .roller
        .trigger_spin(time.elapsed(), &mut random_gen.random_gen)
    {
        TriggerOutcome::Accepted { cancelled_settle } => {
            debug!("Spin accepted (cancelled settle: {cancelled_settle})");
        }
        TriggerOutcome::CoolingDown => {
            debug!("Spin ignored, still cooling down");
        }
    }
}
