//! Per-frame and lifecycle systems for the running viewer.

/// Writes time and cursor into the point cloud uniforms every frame.
pub mod frame_driver;

/// Close handling and release of everything the brain owns.
pub mod teardown;
