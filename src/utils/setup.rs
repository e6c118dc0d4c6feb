//! Scene and resource setup for the dice widget.
use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;
use std::io::ErrorKind;

use dice_core::{ConfigError, OrbitParticles};

use crate::log;
use crate::utils::config::WidgetConfig;
use crate::utils::constants::{
    camera_3d_constants::*, particle_constants::*, scene_constants::*,
    widget_constants::CONFIG_PATH,
};
use crate::utils::dice::spawn_dice;
use crate::utils::facts::FactBook;
use crate::utils::objects::{DiceState, OrbitParticle, OrbitSwarm, RandomGen, WidgetState};
use crate::utils::ui::spawn_overlay;

/// Reads the widget configuration and inserts the widget's resources.
/// A missing or broken file falls back to the built-in defaults.
pub fn load_widget_config(mut commands: Commands) {
    let (config, book) = match WidgetConfig::load(CONFIG_PATH) {
        Ok(loaded) => {
            info!("Loaded widget config from {CONFIG_PATH}");
            loaded
        }
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("No widget config at {CONFIG_PATH}, using defaults");
            (WidgetConfig::default(), FactBook::default())
        }
        Err(e) => {
            error!("Ignoring widget config at {CONFIG_PATH}: {e}");
            (WidgetConfig::default(), FactBook::default())
        }
    };

    let mut random_gen = match config.seed {
        Some(seed) => RandomGen::from_seed(seed),
        None => RandomGen::from_entropy(),
    };
    let swarm = OrbitParticles::spawn(config.dice.orbit.clone(), &mut random_gen.random_gen);

    commands.insert_resource(DiceState::new(config.dice));
    commands.insert_resource(OrbitSwarm { particles: swarm });
    commands.insert_resource(book);
    commands.insert_resource(random_gen);
    commands.insert_resource(WidgetState::default());
}

/// Spawns camera, lights, cube, particles, starfield and the overlay.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut random_gen: ResMut<RandomGen>,
    swarm: Res<OrbitSwarm>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_3D_FOV_DEG.to_radians(),
            ..default()
        }),
        // Start at fixed position looking at the origin
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Lights
    for (position, intensity) in [
        (KEY_LIGHT_POSITION, KEY_LIGHT_INTENSITY),
        (FILL_LIGHT_POSITION, FILL_LIGHT_INTENSITY),
    ] {
        commands.spawn((
            PointLight {
                intensity,
                range: LIGHT_RANGE,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(position)),
        ));
    }

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });

    spawn_dice(&mut commands, &mut meshes, &mut materials);
    spawn_particles(&mut commands, &mut meshes, &mut materials, &swarm.particles);
    spawn_starfield(&mut commands, &mut meshes, &mut materials, &mut random_gen);
    spawn_overlay(&mut commands);

    log!("Dice widget ready: click or tap the cube to spin it");
}

/// Colour of the particle gradient at height `y` on a sphere of radius `size`.
pub fn gradient_color(y: f32, size: f32) -> LinearRgba {
    let t = ((y + size) / (2.0 * size)).clamp(0.0, 1.0);
    let bottom = PARTICLE_COLOR_BOTTOM.to_linear();
    let top = PARTICLE_COLOR_TOP.to_linear();
    LinearRgba::new(
        bottom.red + (top.red - bottom.red) * t,
        bottom.green + (top.green - bottom.green) * t,
        bottom.blue + (top.blue - bottom.blue) * t,
        1.0,
    )
}

/// A UV sphere whose vertex colours run from the bottom to the top gradient colour.
pub fn gradient_sphere(size: f32) -> Mesh {
    let mut mesh = Sphere::new(size)
        .mesh()
        .uv(PARTICLE_MESH_RESOLUTION, PARTICLE_MESH_RESOLUTION);

    let colors: Vec<[f32; 4]> = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions
            .iter()
            .map(|[_, y, _]| {
                let color = gradient_color(*y, size);
                [color.red, color.green, color.blue, color.alpha]
            })
            .collect(),
        _ => Vec::new(),
    };
    if !colors.is_empty() {
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    }
    mesh
}

/// Spawns one gradient sphere per particle of the swarm.
pub fn spawn_particles(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    swarm: &OrbitParticles,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE, // tinted by the vertex colours
        perceptual_roughness: PARTICLE_ROUGHNESS,
        metallic: PARTICLE_METALLIC,
        emissive: PARTICLE_EMISSIVE.to_linear() * PARTICLE_EMISSIVE_INTENSITY,
        ..default()
    });

    for (index, particle) in swarm.particles().iter().enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(gradient_sphere(particle.size))),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(particle.position()),
            OrbitParticle { index },
        ));
    }
}

/// Scatters small unlit stars on a far shell around the scene.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    random_gen: &mut ResMut<RandomGen>,
) {
    let mesh = meshes.add(Sphere::new(STAR_SIZE).mesh().uv(6, 4));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let rng = &mut random_gen.random_gen;
    for _ in 0..STAR_COUNT {
        // Uniform direction on the unit sphere.
        let z: f32 = rng.random_range(-1.0..=1.0);
        let azimuth: f32 = rng.random_range(0.0..TAU);
        let ring = (1.0 - z * z).sqrt();
        let direction = Vec3::new(ring * azimuth.cos(), z, ring * azimuth.sin());
        let radius = rng.random_range(STAR_RADIUS_MIN..=STAR_RADIUS_MAX);

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(direction * radius),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_bottom_to_top() {
        let bottom = gradient_color(-0.1, 0.1);
        let top = gradient_color(0.1, 0.1);
        assert_eq!(bottom, PARTICLE_COLOR_BOTTOM.to_linear().with_alpha(1.0));
        assert!((top.red - PARTICLE_COLOR_TOP.to_linear().red).abs() < 1e-6);
    }

    #[test]
    fn gradient_sphere_has_a_colour_per_vertex() {
        let mesh = gradient_sphere(0.08);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).map(|a| a.len());
        let colors = mesh.attribute(Mesh::ATTRIBUTE_COLOR).map(|a| a.len());
        assert!(positions.is_some());
        assert_eq!(positions, colors);
    }
}
