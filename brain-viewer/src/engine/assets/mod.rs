//! Asset handles, viewer settings and glTF geometry resolution.
//!
//! Handles loading results for the brain mesh, the point-sprite texture and
//! the optional JSON settings file.

/// Handles for the brain scene, sprite texture and settings.
pub mod brain_assets;

/// Errors raised while resolving renderable geometry.
pub mod error;

/// Named-node lookup inside the loaded glTF.
pub mod geometry;

/// JSON-backed viewer settings with validation.
pub mod viewer_settings;
