//! # Water Surface Pipeline
//!
//! A fixed dense plane displaced per-vertex by an external wave shader, with
//! the displacement parameters held here and refreshed from two call sites:
//! the frame tick (`time`) and the configuration-change handler (the four
//! tunables).

pub mod surface;
pub mod uniforms;

pub use surface::WaterSurface;
pub use uniforms::WaveUniforms;
