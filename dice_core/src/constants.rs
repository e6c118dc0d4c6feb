// Tuning constants for the dice widget, structured into modules.
// The values are tuned by eye for feel at 60 ticks per second.

/// Generic widget constants
pub mod widget_constants {
    pub const REFRESH_RATE_HZ: f64 = 60.0; // Hz, one tick per fixed step

    // Number of faces on the cube.
    pub const FACE_COUNT: usize = 6;

    // Half the edge length of the cube, used for the pointer hit region.
    pub const CUBE_HALF_EXTENT: f32 = 0.5;
}

/// Spin controller
pub mod spin_constants {
    // Each axis of the launch velocity is drawn from [-MAX, MAX] rad/tick.
    pub const SPIN_MAX_INITIAL_SPEED: f32 = 0.25;

    // Velocity multiplier applied on every spinning tick.
    pub const SPIN_DAMPING: f32 = 0.95;

    // Below this speed (rad/tick) the spin hands off to the face resolver.
    pub const SPIN_STOP_THRESHOLD: f32 = 0.01;

    // Minimum time between two accepted gestures.
    pub const SPIN_COOLDOWN_MS: u64 = 1000;
}

/// Settle animator
pub mod settle_constants {
    // Fraction of the remaining distance covered on each tick.
    pub const SETTLE_LERP_FACTOR: f32 = 0.05;

    // Max per-axis distance (rad) at which the orientation snaps to the target.
    pub const SETTLE_SNAP_TOLERANCE: f32 = 0.01;
}

/// Orbit particle system
pub mod orbit_constants {
    pub const ORBIT_PARTICLE_COUNT: usize = 17;

    // The first LARGE_COUNT particles use the large size range.
    pub const ORBIT_LARGE_COUNT: usize = 4;

    pub const ORBIT_RADIUS_MIN: f32 = 0.9;
    pub const ORBIT_RADIUS_MAX: f32 = 1.1;

    pub const ORBIT_LARGE_SIZE_MIN: f32 = 0.08;
    pub const ORBIT_LARGE_SIZE_MAX: f32 = 0.10;
    pub const ORBIT_SMALL_SIZE_MIN: f32 = 0.05;
    pub const ORBIT_SMALL_SIZE_MAX: f32 = 0.07;

    // Orbit advance per tick is angular_velocity.y * COUPLING while spinning.
    pub const ORBIT_SPIN_COUPLING: f32 = 0.05;

    // Cube speed above which the particles follow the cube's yaw.
    pub const ORBIT_FOLLOW_THRESHOLD: f32 = 0.01;

    // Orbit advance per tick while the cube is calm.
    pub const ORBIT_IDLE_SPEED: f32 = 0.005;

    // Self rotation of each particle mesh per tick.
    pub const ORBIT_TUMBLE_SPEED: f32 = 0.01;

    // Vertical bob: sin(t * RATE + index) * AMPLITUDE.
    pub const ORBIT_BOB_AMPLITUDE: f32 = 0.002;
    pub const ORBIT_BOB_RATE: f32 = 1.0; // rad/s
}
