//! Debug functions for the widget.
use bevy::{prelude::*, window::*};

use dice_core::{FACES, face_alignments, resolve_face, rotation_from_euler};

use crate::utils::objects::{DiceState, OrbitSwarm};

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    /// Plugin adding the `toggle_vsync` and `visualize_faces` systems to the app.
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_faces));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Draws the world-space face normals when 'L' is toggled on.
/// The face currently most facing the camera is drawn in green.
fn visualize_faces(
    mut gizmos: Gizmos,
    input: Res<ButtonInput<KeyCode>>,
    mut show_faces: Local<bool>,
    dice: Res<DiceState>,
    swarm: Res<OrbitSwarm>,
    camera_query: Query<&GlobalTransform, With<Camera3d>>,
) {
    if input.just_pressed(KeyCode::KeyL) {
        *show_faces = !*show_faces;
        info!("Face normal visualization: {}", *show_faces);
    }
    if !*show_faces {
        return;
    }
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    let orientation = dice.roller.orientation();
    let rotation = rotation_from_euler(orientation);
    let alignments = face_alignments(orientation, *camera_transform.forward());
    let best = resolve_face(orientation, *camera_transform.forward());

    for (face, alignment) in FACES.iter().zip(alignments) {
        let normal = rotation * face.normal;
        let color = if face.label == best.label {
            Color::srgb(0.2, 1.0, 0.3)
        } else if alignment > 0.0 {
            Color::srgb(1.0, 0.8, 0.2)
        } else {
            Color::srgb(0.4, 0.4, 0.4)
        };
        gizmos.arrow(normal * 0.5, normal * 1.2, color);
    }

    // Orbit shell
    for particle in swarm.particles.particles() {
        gizmos.sphere(Isometry3d::IDENTITY, particle.radius, Color::srgba(1.0, 0.5, 0.0, 0.05));
    }
}
