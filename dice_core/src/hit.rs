//! Pointer hit test against the rotated cube.
use bevy_math::{Quat, Vec3};

/// Returns whether the ray `origin + t * direction` (t >= 0) passes through a
/// cube centred on the origin with the given rotation and half edge length.
pub fn ray_hits_cube(origin: Vec3, direction: Vec3, rotation: Quat, half_extent: f32) -> bool {
    // Work in cube-local space where the cube is axis aligned.
    let inverse = rotation.inverse();
    let local_origin = inverse * origin;
    let local_direction = inverse * direction;

    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = local_origin[axis];
        let d = local_direction[axis];
        if d.abs() < f32::EPSILON {
            if o.abs() > half_extent {
                return false;
            }
            continue;
        }
        let near = (-half_extent - o) / d;
        let far = (half_extent - o) / d;
        t_min = t_min.max(near.min(far));
        t_max = t_max.min(near.max(far));
        if t_min > t_max {
            return false;
        }
    }
    true
}
