//! Mesh generation for point-sprite rendering.
//!
//! Derives the sprite geometry the point-cloud material draws from the
//! shared brain geometry.

/// Point-sprite quad expansion of a source mesh.
///
/// Each source vertex becomes one quad whose corners the vertex shader expands.
pub mod point_sprite_mesh;
