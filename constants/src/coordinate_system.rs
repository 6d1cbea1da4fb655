use bevy::math::Quat;

/// Rotation about X applied to the surface and glow renderers.
/// -90°: Y → -Z, Z → Y. The point cloud keeps the asset's native frame.
pub const SURFACE_ROTATION_X: f32 = -std::f32::consts::FRAC_PI_2;

pub fn surface_rotation() -> Quat {
    Quat::from_rotation_x(SURFACE_ROTATION_X)
}
