//! Shader materials for the brain renderers.
//!
//! Both materials are plain Bevy `Material`s backed by WGSL programs under
//! `assets/shaders/`, plus a CPU mirror of the point-cloud maths.

/// Noise-displaced glow shell and its animation clock.
pub mod distortion_material;

/// CPU mirror of the point-cloud shader: region colours, falloff, sprite rotation.
pub mod falloff;

/// Point-sprite material with time, cursor and hover-radius uniforms.
pub mod point_cloud_material;
