//! Asset loading and brain creation.
//!
//! Preloads the glTF, sprite texture and settings at startup, then builds the
//! point cloud, surface and glow once every required asset is ready.

/// Startup preload and per-frame load state tracking.
///
/// Settings fall back to defaults; glTF failures stop the pipeline.
pub mod asset_loader;

/// Geometry resolution, sprite mesh derivation and brain spawning.
pub mod brain_creator;

/// Loading progress flags gating the transition to `Running`.
pub mod progress;

/// Sampler setup for the point-sprite texture.
pub mod texture_config;
