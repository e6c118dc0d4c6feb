// This file contains the logic for spawning the dice cube and its pips.
use crate::utils::constants::dice_constants::*;
use crate::utils::objects::Dice;
use bevy::prelude::*;

use dice_core::FACES;

/// Pip positions on a face in grid units, for labels 1 to 6.
/// (u, v) with u along the face tangent and v along the bitangent.
pub fn pip_layout(label: u8) -> &'static [(f32, f32)] {
    match label {
        1 => &[(0.0, 0.0)],
        2 => &[(-1.0, -1.0), (1.0, 1.0)],
        3 => &[(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)],
        4 => &[(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)],
        5 => &[(-1.0, -1.0), (-1.0, 1.0), (0.0, 0.0), (1.0, -1.0), (1.0, 1.0)],
        6 => &[
            (-1.0, -1.0),
            (-1.0, 0.0),
            (-1.0, 1.0),
            (1.0, -1.0),
            (1.0, 0.0),
            (1.0, 1.0),
        ],
        _ => &[],
    }
}

/// Tangent and bitangent spanning the face with the given outward normal.
pub fn face_basis(normal: Vec3) -> (Vec3, Vec3) {
    let tangent = if normal.y.abs() > 0.5 { Vec3::X } else { Vec3::Y };
    let bitangent = normal.cross(tangent);
    (tangent, bitangent)
}

/// Cube-local centre of every pip on the face with the given normal and label.
pub fn pip_positions(normal: Vec3, label: u8) -> Vec<Vec3> {
    let (tangent, bitangent) = face_basis(normal);
    let surface = normal * (DICE_SIZE * 0.5 - PIP_INSET);
    pip_layout(label)
        .iter()
        .map(|(u, v)| surface + tangent * (u * PIP_SPACING) + bitangent * (v * PIP_SPACING))
        .collect()
}

/// Spawns the dice cube at the origin with the pips of every face as children.
pub fn spawn_dice(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Entity {
    let body_material = materials.add(StandardMaterial {
        base_color: DICE_COLOR,
        perceptual_roughness: DICE_ROUGHNESS,
        metallic: DICE_METALLIC,
        ..default()
    });
    let pip_material = materials.add(StandardMaterial {
        base_color: PIP_COLOR,
        perceptual_roughness: 0.8,
        ..default()
    });
    let pip_mesh = meshes.add(Sphere::new(PIP_RADIUS));

    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(DICE_SIZE, DICE_SIZE, DICE_SIZE))),
            MeshMaterial3d(body_material),
            Transform::default(),
            Dice,
        ))
        .with_children(|parent| {
            for face in &FACES {
                for position in pip_positions(face.normal, face.label.value()) {
                    parent.spawn((
                        Mesh3d(pip_mesh.clone()),
                        MeshMaterial3d(pip_material.clone()),
                        Transform::from_translation(position),
                    ));
                }
            }
        })
        .id()
}
