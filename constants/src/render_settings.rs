/// Point size in pixels when the cursor sits on the point.
pub const POINT_SIZE_NEAR: f32 = 50.0;

/// Point size in pixels at or beyond the hover radius.
pub const POINT_SIZE_FAR: f32 = 10.0;

/// Default hover radius in view-space units.
pub const HOVER_EFFECT_SIZE: f32 = 0.3;

/// Smallest accepted hover radius; keeps the falloff denominator non-zero.
pub const MIN_HOVER_EFFECT_SIZE: f32 = 1.0e-4;

/// Sprite texels with alpha below this are discarded.
pub const SPRITE_ALPHA_CUTOFF: f32 = 0.1;

pub const SURFACE_SCALE: f32 = 0.9;

/// Surface alpha. The surface renders opaque, so this only reaches the colour.
pub const SURFACE_OPACITY: f32 = 0.8;

pub const GLOW_SCALE: f32 = 1.05;
pub const GLOW_OPACITY: f32 = 0.14;
pub const GLOW_DISTORT: f32 = 0.3;
pub const GLOW_SPEED: f32 = 2.5;

/// Base displacement scale of the glow shell; noise is added on top.
pub const GLOW_RADIUS: f32 = 1.0;

pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_START_DISTANCE: f32 = 5.0;
pub const CAMERA_MIN_DISTANCE: f32 = 0.5;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;
