//! # Configuration Seam
//!
//! The crate does not own any UI; shape and wave parameters arrive from an
//! external configuration collaborator (sliders, selects, a file — anything
//! that can answer string lookups by key). This module defines that seam and
//! the typed configurations read through it.
//!
//! Reading is deliberately lenient: a missing, unparseable or non-finite
//! value falls back to a documented neutral default instead of erroring, so
//! a transiently blank input never stalls generation or pushes NaN into the
//! uniform pipeline. Change notification stays with the collaborator — it
//! re-reads a config and hands it to the relevant facade when an input edits.

use crate::geometry::ShapeKind;
use log::warn;

/// Lookup keys understood by [`MeshConfig`] and [`WaterConfig`].
pub mod keys {
    pub const GEOMETRY: &str = "geometry";
    pub const RESOLUTION: &str = "resolution";
    pub const SPEED: &str = "speed";
    pub const NB_ITERATIONS: &str = "nb-iterations";
    pub const AMPLITUDE_MULTIPLIER: &str = "amplitude-multiplier";
    pub const FREQUENCY_MULTIPLIER: &str = "frequency-multiplier";
}

/// Fallback resolution when the configured value is unusable.
pub const DEFAULT_RESOLUTION: u32 = 10;
/// Neutral wave speed.
pub const DEFAULT_SPEED: f32 = 1.0;
/// Neutral iteration count. One octave keeps the surface moving.
pub const DEFAULT_ITERATION_COUNT: u32 = 1;
/// Neutral amplitude multiplier. Identity — zero would freeze the wave.
pub const DEFAULT_AMPLITUDE_MULTIPLIER: f32 = 1.0;
/// Neutral frequency multiplier.
pub const DEFAULT_FREQUENCY_MULTIPLIER: f32 = 1.0;

/// External source of configuration values.
///
/// Implementors answer key lookups with the current raw value, or `None`
/// when the key has no value yet.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for std::collections::HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        std::collections::HashMap::get(self, key).cloned()
    }
}

/// Current mesh generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    /// Selected shape; `None` while the configuration holds an unset or
    /// unrecognized tag.
    pub shape: Option<ShapeKind>,
    /// Subdivision count applied to both axes of the selected shape.
    pub resolution: u32,
}

impl MeshConfig {
    /// Reads the mesh settings from a configuration source.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let shape = source
            .get(keys::GEOMETRY)
            .and_then(|tag| ShapeKind::from_tag(tag.trim()));

        Self {
            shape,
            resolution: read_u32(source, keys::RESOLUTION, DEFAULT_RESOLUTION),
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self { shape: None, resolution: DEFAULT_RESOLUTION }
    }
}

/// Current wave displacement settings.
///
/// These four values are read together and applied wholesale to a
/// [`crate::water::WaveUniforms`] whenever the configuration changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterConfig {
    pub speed: f32,
    pub iteration_count: u32,
    pub amplitude_multiplier: f32,
    pub frequency_multiplier: f32,
}

impl WaterConfig {
    /// Reads the wave settings from a configuration source.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        Self {
            speed: read_f32(source, keys::SPEED, DEFAULT_SPEED),
            iteration_count: read_u32(source, keys::NB_ITERATIONS, DEFAULT_ITERATION_COUNT),
            amplitude_multiplier: read_f32(
                source,
                keys::AMPLITUDE_MULTIPLIER,
                DEFAULT_AMPLITUDE_MULTIPLIER,
            ),
            frequency_multiplier: read_f32(
                source,
                keys::FREQUENCY_MULTIPLIER,
                DEFAULT_FREQUENCY_MULTIPLIER,
            ),
        }
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            iteration_count: DEFAULT_ITERATION_COUNT,
            amplitude_multiplier: DEFAULT_AMPLITUDE_MULTIPLIER,
            frequency_multiplier: DEFAULT_FREQUENCY_MULTIPLIER,
        }
    }
}

/// Reads a float value, falling back to `default` for missing, unparseable
/// or non-finite input.
fn read_f32(source: &dyn ConfigSource, key: &str, default: f32) -> f32 {
    match source.get(key).and_then(|raw| raw.trim().parse::<f32>().ok()) {
        Some(value) if value.is_finite() => value,
        Some(value) => {
            warn!("non-finite value {} for '{}', using {}", value, key, default);
            default
        }
        None => {
            warn!("missing or unparseable value for '{}', using {}", key, default);
            default
        }
    }
}

/// Reads a non-negative integer value with the same fallback policy.
fn read_u32(source: &dyn ConfigSource, key: &str, default: u32) -> u32 {
    match source.get(key).and_then(|raw| raw.trim().parse::<u32>().ok()) {
        Some(value) => value,
        None => {
            warn!("missing or unparseable value for '{}', using {}", key, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn mesh_config_reads_shape_and_resolution() {
        let source = source(&[("geometry", "torus"), ("resolution", "16")]);
        let config = MeshConfig::from_source(&source);

        assert_eq!(config.shape, Some(ShapeKind::Torus));
        assert_eq!(config.resolution, 16);
    }

    #[test]
    fn mesh_config_falls_back_on_garbage() {
        let source = source(&[("geometry", "teapot"), ("resolution", "many")]);
        let config = MeshConfig::from_source(&source);

        assert_eq!(config.shape, None);
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
    }

    #[test]
    fn water_config_reads_all_four_tunables() {
        let source = source(&[
            ("speed", "2"),
            ("nb-iterations", "5"),
            ("amplitude-multiplier", "0.5"),
            ("frequency-multiplier", "1.2"),
        ]);
        let config = WaterConfig::from_source(&source);

        assert_eq!(config.speed, 2.0);
        assert_eq!(config.iteration_count, 5);
        assert_eq!(config.amplitude_multiplier, 0.5);
        assert_eq!(config.frequency_multiplier, 1.2);
    }

    #[test]
    fn water_config_guards_nan_and_missing_fields() {
        let source = source(&[("speed", "NaN"), ("amplitude-multiplier", "inf")]);
        let config = WaterConfig::from_source(&source);

        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.amplitude_multiplier, DEFAULT_AMPLITUDE_MULTIPLIER);
        assert_eq!(config.iteration_count, DEFAULT_ITERATION_COUNT);
        assert_eq!(config.frequency_multiplier, DEFAULT_FREQUENCY_MULTIPLIER);
        assert!(config.speed.is_finite() && config.amplitude_multiplier.is_finite());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let source = source(&[("geometry", " sphere "), ("resolution", " 8 ")]);
        let config = MeshConfig::from_source(&source);

        assert_eq!(config.shape, Some(ShapeKind::Sphere));
        assert_eq!(config.resolution, 8);
    }
}
