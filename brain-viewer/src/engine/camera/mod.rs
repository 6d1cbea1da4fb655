//! Orbit camera for inspecting the brain.
//!
//! Mouse-driven orbit, pan and dolly around a focus point with smooth
//! interpolation toward the target pose.

/// Orbit camera resource, startup spawn and controller system.
pub mod orbit_camera;
