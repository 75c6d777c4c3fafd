//! Wave uniform block
//!
//! The parameter set an external vertex-displacement shader evaluates once
//! per frame over the fixed water plane. The displacement math itself lives
//! in the shading stage; this struct owns the exact named-parameter contract
//! it depends on.

use crate::config::WaterConfig;

/// World-space light position baked into the surface at construction.
pub const LIGHT_POSITION: [f32; 3] = [200.0, 200.0, 700.0];

/// Per-frame wave shader parameters.
///
/// # Memory Layout
///
/// `#[repr(C)]` with std140-compatible packing: the `vec3` light position is
/// followed by a scalar in its padding slot, for 32 bytes total. Field ↔
/// shader uniform mapping:
///
/// | field                  | uniform                |
/// |------------------------|------------------------|
/// | `light_position`       | `uLightPos`            |
/// | `time`                 | `uTime`                |
/// | `speed`                | `uSpeed`               |
/// | `amplitude_multiplier` | `uAmplitudeMultiplier` |
/// | `frequency_multiplier` | `uFrequencyMultiplier` |
/// | `iteration_count`      | `uNbIterations`        |
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaveUniforms {
    /// Fixed light position, set once and never reconfigured
    pub light_position: [f32; 3],
    /// Elapsed seconds, monotonically non-decreasing, driven every frame
    pub time: f32,
    /// Wave propagation speed
    pub speed: f32,
    /// Per-octave amplitude falloff factor
    pub amplitude_multiplier: f32,
    /// Per-octave frequency growth factor
    pub frequency_multiplier: f32,
    /// Number of superposed wave octaves
    pub iteration_count: u32,
}

impl WaveUniforms {
    /// Builds the initial uniform set from the current configuration and
    /// elapsed-time reading.
    pub fn new(config: &WaterConfig, elapsed_seconds: f32) -> Self {
        Self {
            light_position: LIGHT_POSITION,
            time: elapsed_seconds,
            speed: config.speed,
            amplitude_multiplier: config.amplitude_multiplier,
            frequency_multiplier: config.frequency_multiplier,
            iteration_count: config.iteration_count,
        }
    }

    /// Per-frame update: touches only `time`.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.time = elapsed_seconds;
    }

    /// Replaces the four tunables wholesale from a new configuration.
    ///
    /// `time` and `light_position` are left alone.
    pub fn apply_config(&mut self, config: &WaterConfig) {
        self.speed = config.speed;
        self.iteration_count = config.iteration_count;
        self.amplitude_multiplier = config.amplitude_multiplier;
        self.frequency_multiplier = config.frequency_multiplier;
    }
}
