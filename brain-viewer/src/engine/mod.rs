/// Brain asset handles, settings and glTF geometry resolution.
pub mod assets;
/// Orbit camera controls.
pub mod camera;
/// App construction, states, plugins and window setup.
pub mod core;
/// Cursor tracking and surface hover state.
pub mod input;
/// Asset loading pipeline up to brain creation.
pub mod loading;
/// Point-cloud and distortion materials.
pub mod materials;
/// Point-sprite mesh derivation.
pub mod mesh;
/// Brain entities and their handle registry.
pub mod scene;
/// Per-frame driver and teardown.
pub mod systems;

#[cfg(test)]
pub(crate) mod test_support;
