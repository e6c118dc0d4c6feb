//! Tunable parameters of the dice widget.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! TOML file only needs to name the values it overrides:
//!
//! ```toml
//! [spin]
//! damping = 0.93
//!
//! [orbit]
//! idle_speed = 0.01
//! ```
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{orbit_constants::*, settle_constants::*, spin_constants::*};
use crate::error::ConfigError;

/// All tunables of the widget core.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiceConfig {
    pub spin: SpinConfig,
    pub settle: SettleConfig,
    pub orbit: OrbitConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinConfig {
    pub max_initial_speed: f32,
    pub damping: f32,
    pub stop_threshold: f32,
    pub cooldown_ms: u64,
}

impl SpinConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            max_initial_speed: SPIN_MAX_INITIAL_SPEED,
            damping: SPIN_DAMPING,
            stop_threshold: SPIN_STOP_THRESHOLD,
            cooldown_ms: SPIN_COOLDOWN_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettleConfig {
    pub lerp_factor: f32,
    pub snap_tolerance: f32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            lerp_factor: SETTLE_LERP_FACTOR,
            snap_tolerance: SETTLE_SNAP_TOLERANCE,
        }
    }
}

/// Orbit particle tunables. Ranges are `[min, max]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbitConfig {
    pub radius: [f32; 2],
    pub large_size: [f32; 2],
    pub small_size: [f32; 2],
    pub spin_coupling: f32,
    pub follow_threshold: f32,
    pub idle_speed: f32,
    pub tumble_speed: f32,
    pub bob_amplitude: f32,
    pub bob_rate: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: [ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX],
            large_size: [ORBIT_LARGE_SIZE_MIN, ORBIT_LARGE_SIZE_MAX],
            small_size: [ORBIT_SMALL_SIZE_MIN, ORBIT_SMALL_SIZE_MAX],
            spin_coupling: ORBIT_SPIN_COUPLING,
            follow_threshold: ORBIT_FOLLOW_THRESHOLD,
            idle_speed: ORBIT_IDLE_SPEED,
            tumble_speed: ORBIT_TUMBLE_SPEED,
            bob_amplitude: ORBIT_BOB_AMPLITUDE,
            bob_rate: ORBIT_BOB_RATE,
        }
    }
}

impl DiceConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DiceConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks that every value keeps the animation well defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spin = &self.spin;
        if !(spin.damping > 0.0 && spin.damping < 1.0) {
            return Err(invalid(format!(
                "spin.damping must be in (0, 1), got {}",
                spin.damping
            )));
        }
        positive("spin.max_initial_speed", spin.max_initial_speed)?;
        positive("spin.stop_threshold", spin.stop_threshold)?;

        let settle = &self.settle;
        if !(settle.lerp_factor > 0.0 && settle.lerp_factor <= 1.0) {
            return Err(invalid(format!(
                "settle.lerp_factor must be in (0, 1], got {}",
                settle.lerp_factor
            )));
        }
        positive("settle.snap_tolerance", settle.snap_tolerance)?;

        let orbit = &self.orbit;
        ordered_range("orbit.radius", orbit.radius)?;
        ordered_range("orbit.large_size", orbit.large_size)?;
        ordered_range("orbit.small_size", orbit.small_size)?;
        positive("orbit.radius", orbit.radius[0])?;
        positive("orbit.small_size", orbit.small_size[0])?;
        positive("orbit.large_size", orbit.large_size[0])?;
        non_negative("orbit.idle_speed", orbit.idle_speed)?;
        non_negative("orbit.bob_amplitude", orbit.bob_amplitude)?;
        non_negative("orbit.follow_threshold", orbit.follow_threshold)?;
        non_negative("orbit.bob_rate", orbit.bob_rate)?;
        finite("orbit.spin_coupling", orbit.spin_coupling)?;
        finite("orbit.tumble_speed", orbit.tumble_speed)?;
        Ok(())
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid(reason)
}

fn finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must not be negative, got {value}")))
    }
}

fn ordered_range(name: &str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    finite(name, min)?;
    finite(name, max)?;
    if min <= max {
        Ok(())
    } else {
        Err(invalid(format!("{name} range is inverted: [{min}, {max}]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, DiceConfig::default());
        assert_eq!(config.spin.damping, 0.95);
        assert_eq!(config.spin.cooldown(), Duration::from_millis(1000));
        assert_eq!(config.settle.lerp_factor, 0.05);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = DiceConfig::from_toml_str(
            r#"
            [spin]
            damping = 0.9

            [orbit]
            idle_speed = 0.01
            "#,
        )
        .unwrap();
        assert_eq!(config.spin.damping, 0.9);
        assert_eq!(config.spin.stop_threshold, SPIN_STOP_THRESHOLD);
        assert_eq!(config.orbit.idle_speed, 0.01);
        assert_eq!(config.orbit.radius, [ORBIT_RADIUS_MIN, ORBIT_RADIUS_MAX]);
    }

    #[test]
    fn damping_of_one_is_rejected() {
        let err = DiceConfig::from_toml_str("[spin]\ndamping = 1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("spin.damping"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DiceConfig::from_toml_str("[orbit]\nradius = [1.2, 0.8]").unwrap_err();
        assert!(err.to_string().contains("orbit.radius"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        for (source, field) in [
            ("[spin]\nmax_initial_speed = inf", "spin.max_initial_speed"),
            ("[spin]\nstop_threshold = nan", "spin.stop_threshold"),
            ("[settle]\nsnap_tolerance = inf", "settle.snap_tolerance"),
            ("[orbit]\nradius = [0.9, inf]", "orbit.radius"),
            ("[orbit]\nlarge_size = [nan, 0.1]", "orbit.large_size"),
            ("[orbit]\nidle_speed = nan", "orbit.idle_speed"),
            ("[orbit]\nbob_amplitude = inf", "orbit.bob_amplitude"),
            ("[orbit]\nfollow_threshold = nan", "orbit.follow_threshold"),
            ("[orbit]\nbob_rate = -inf", "orbit.bob_rate"),
            ("[orbit]\nspin_coupling = nan", "orbit.spin_coupling"),
            ("[orbit]\ntumble_speed = inf", "orbit.tumble_speed"),
        ] {
            let err = DiceConfig::from_toml_str(source).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{source}");
            assert!(err.to_string().contains(field), "{source}: {err}");
        }
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = DiceConfig::from_toml_str("[spin]\nfriction = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DiceConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
