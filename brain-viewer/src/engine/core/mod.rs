//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with materials, picking, camera, lighting and the
/// brain plugins.
pub mod app_setup;

/// Application state machine: `Loading`, `Running`, `Disposed`.
pub mod app_state;

/// Loading and runtime plugins wiring the brain systems into schedules.
pub mod plugins;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
