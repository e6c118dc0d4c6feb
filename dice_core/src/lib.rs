//! Engine-free core of the interactive dice widget.
//!
//! The cube spins with a random angular velocity that decays every tick. Once
//! it is slow enough, the face most facing the camera is picked and the cube
//! eases onto that face's rest orientation, after which the face's number is
//! handed back to the caller. A small swarm of particles orbits the cube the
//! whole time and follows the cube's yaw while it spins.
//!
//! ## Tick order
//!
//! ```text
//! gesture ──> DiceRoller::trigger_spin   (cooldown guard, cancels a pending settle)
//! frame   ──> DiceRoller::tick           (spin -> resolve -> settle, may yield a RollResult)
//!         ──> OrbitParticles::advance    (reads the velocity left by the same tick)
//! ```
pub mod config;
pub mod constants;
pub mod error;
pub mod faces;
pub mod hit;
pub mod particles;
pub mod roller;
pub mod settle;
pub mod spin;

pub use config::{DiceConfig, OrbitConfig, SettleConfig, SpinConfig};
pub use error::ConfigError;
pub use faces::{
    face_alignments, face_for_label, resolve_face, rotation_from_euler, FaceDescriptor,
    RollResult, FACES,
};
pub use hit::ray_hits_cube;
pub use particles::{OrbitParticles, Particle};
pub use roller::{DiceRoller, MotionPhase, TriggerOutcome};
