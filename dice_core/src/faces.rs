//! The six faces of the cube and the resolver that picks the one facing the camera.
use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;

use bevy_math::{Quat, Vec3};

use crate::constants::widget_constants::FACE_COUNT;

/// The number shown on a settled face, 1 to 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollResult(u8);

impl RollResult {
    /// Returns `None` outside 1..=6.
    pub fn new(value: u8) -> Option<Self> {
        (1..=FACE_COUNT as u8).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A face of the cube in its local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceDescriptor {
    pub name: &'static str,
    /// Outward unit normal in cube-local space.
    pub normal: Vec3,
    /// Euler orientation (XYZ, radians) that turns `normal` toward `+Z`.
    pub rest: Vec3,
    pub label: RollResult,
}

/// The fixed face table. Opposite faces sum to 7.
/// Order matters: it breaks ties in [`resolve_face`].
pub const FACES: [FaceDescriptor; FACE_COUNT] = [
    FaceDescriptor {
        name: "top",
        normal: Vec3::new(0.0, 1.0, 0.0),
        rest: Vec3::new(FRAC_PI_2, 0.0, 0.0),
        label: RollResult(1),
    },
    FaceDescriptor {
        name: "bottom",
        normal: Vec3::new(0.0, -1.0, 0.0),
        rest: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        label: RollResult(6),
    },
    FaceDescriptor {
        name: "back",
        normal: Vec3::new(0.0, 0.0, -1.0),
        rest: Vec3::new(PI, 0.0, 0.0),
        label: RollResult(2),
    },
    FaceDescriptor {
        name: "left",
        normal: Vec3::new(-1.0, 0.0, 0.0),
        rest: Vec3::new(0.0, FRAC_PI_2, 0.0),
        label: RollResult(4),
    },
    FaceDescriptor {
        name: "right",
        normal: Vec3::new(1.0, 0.0, 0.0),
        rest: Vec3::new(0.0, -FRAC_PI_2, 0.0),
        label: RollResult(3),
    },
    FaceDescriptor {
        name: "front",
        normal: Vec3::new(0.0, 0.0, 1.0),
        rest: Vec3::ZERO,
        label: RollResult(5),
    },
];

/// Looks up the face carrying `label`.
pub fn face_for_label(label: RollResult) -> &'static FaceDescriptor {
    FACES
        .iter()
        .find(|face| face.label == label)
        .unwrap_or(&FACES[0])
}

/// Rotation for an XYZ Euler orientation, applied as `Rx * Ry * Rz`.
pub fn rotation_from_euler(orientation: Vec3) -> Quat {
    Quat::from_rotation_x(orientation.x)
        * Quat::from_rotation_y(orientation.y)
        * Quat::from_rotation_z(orientation.z)
}

/// Alignment of every face with the viewer, in table order.
/// 1.0 means the face looks straight at the camera.
pub fn face_alignments(orientation: Vec3, camera_forward: Vec3) -> [f32; FACE_COUNT] {
    let rotation = rotation_from_euler(orientation);
    let toward_camera = -camera_forward;
    FACES.map(|face| (rotation * face.normal).dot(toward_camera))
}

/// Picks the face most facing the camera. The first maximum in table order wins.
pub fn resolve_face(orientation: Vec3, camera_forward: Vec3) -> &'static FaceDescriptor {
    let alignments = face_alignments(orientation, camera_forward);

    let mut best_index = 0;
    for (index, alignment) in alignments.iter().enumerate().skip(1) {
        if *alignment > alignments[best_index] {
            best_index = index;
        }
    }
    &FACES[best_index]
}
