// Constants used by the widget's scene and overlay, structured into modules.
// Motion tunables live in `dice_core::constants`.

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 1.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 3.0;

    // Vertical field of view in degrees.
    pub const CAMERA_3D_FOV_DEG: f32 = 50.0;
}

/// Dice cube
pub mod dice_constants {
    use bevy::prelude::Color;

    pub const DICE_SIZE: f32 = 1.0;
    pub const DICE_COLOR: Color = Color::WHITE;
    pub const DICE_ROUGHNESS: f32 = 0.4;
    pub const DICE_METALLIC: f32 = 0.2;

    pub const PIP_COLOR: Color = Color::srgb(0.08, 0.08, 0.1);
    pub const PIP_RADIUS: f32 = 0.085;
    // Distance between the pip grid lines on a face.
    pub const PIP_SPACING: f32 = 0.25;
    // How far the pip centre sits below the face surface.
    pub const PIP_INSET: f32 = 0.06;
}

/// Orbiting particles
pub mod particle_constants {
    use bevy::prelude::Color;

    // Vertical gradient on every sphere, bottom to top.
    pub const PARTICLE_COLOR_BOTTOM: Color = Color::srgb(0.749, 0.318, 0.051); // #bf510d
    pub const PARTICLE_COLOR_TOP: Color = Color::srgb(0.949, 0.404, 0.067); // #f26711
    pub const PARTICLE_EMISSIVE: Color = Color::srgb(1.0, 0.482, 0.0); // #ff7b00
    pub const PARTICLE_EMISSIVE_INTENSITY: f32 = 0.3;
    pub const PARTICLE_ROUGHNESS: f32 = 0.3;
    pub const PARTICLE_METALLIC: f32 = 0.2;
    // Sectors and stacks of the sphere mesh.
    pub const PARTICLE_MESH_RESOLUTION: u32 = 16;
}

/// Backdrop
pub mod scene_constants {
    use bevy::prelude::Color;

    pub const CLEAR_COLOR: Color = Color::srgb(0.02, 0.02, 0.04);
    pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

    pub const KEY_LIGHT_POSITION: [f32; 3] = [2.0, 2.0, 2.0];
    pub const KEY_LIGHT_INTENSITY: f32 = 600_000.0;
    pub const FILL_LIGHT_POSITION: [f32; 3] = [-2.0, -2.0, -2.0];
    pub const FILL_LIGHT_INTENSITY: f32 = 300_000.0;
    pub const LIGHT_RANGE: f32 = 10.0;

    pub const STAR_COUNT: usize = 500;
    pub const STAR_RADIUS_MIN: f32 = 50.0;
    pub const STAR_RADIUS_MAX: f32 = 100.0;
    pub const STAR_SIZE: f32 = 0.15;
}

/// Text overlay
pub mod ui_constants {
    use bevy::prelude::Color;

    pub const BACKGROUND_WORD_IDLE: &str = "SPIN";
    pub const BACKGROUND_WORD_SIZE: f32 = 160.0;
    pub const BACKGROUND_WORD_COLOR: Color = Color::srgba(0.61, 0.64, 0.69, 0.5);

    pub const PROMPT_TEXT: &str = "Get to know me, spin the dice!";
    pub const BUBBLE_COLOR: Color = Color::srgb(0.07, 0.09, 0.15);
    pub const BUBBLE_TEXT_SIZE: f32 = 16.0;
    pub const BUBBLE_TITLE_SIZE: f32 = 18.0;
    pub const BUBBLE_WIDTH: f32 = 240.0;

    // Fade-in time of the fact card.
    pub const CARD_FADE_SECS: f32 = 0.5;
}

/// Generic widget constants
pub mod widget_constants {
    pub const WINDOW_TITLE: &str = "Interactive Dice";

    // Widget configuration, relative to the working directory.
    pub const CONFIG_PATH: &str = "assets/dice.toml";
}
