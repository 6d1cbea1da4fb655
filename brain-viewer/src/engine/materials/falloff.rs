//! CPU mirror of the point-cloud shader maths.
//!
//! `shaders/point_cloud.wgsl` is the renderer. These functions follow it
//! line for line so the behaviour can be inspected and tested on the CPU.

use bevy::prelude::*;
use constants::palette::{
    ANTERIOR_COLOUR, BOUNDARY_COLOUR, HOVER_COLOUR, INTERIOR_COLOUR, LATERAL_COLOUR,
    REGION_THRESHOLD, SUPERIOR_COLOUR,
};
use constants::render_settings::{POINT_SIZE_FAR, POINT_SIZE_NEAR, SPRITE_ALPHA_CUTOFF};

/// Colour region of a point, in rule priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Superior = 0,
    Lateral = 1,
    Anterior = 2,
    Interior = 3,
    Boundary = 4,
}

impl Region {
    /// First matching rule wins: y, then x, then z, then all-below.
    /// Positions with a coordinate exactly on the threshold and none above it
    /// fall through to `Boundary`.
    pub fn classify(position: Vec3) -> Self {
        let t = REGION_THRESHOLD;
        if position.y > t {
            Self::Superior
        } else if position.x > t {
            Self::Lateral
        } else if position.z > t {
            Self::Anterior
        } else if position.x < t && position.y < t && position.z < t {
            Self::Interior
        } else {
            Self::Boundary
        }
    }

    pub fn colour(self) -> Vec3 {
        match self {
            Self::Superior => SUPERIOR_COLOUR,
            Self::Lateral => LATERAL_COLOUR,
            Self::Anterior => ANTERIOR_COLOUR,
            Self::Interior => INTERIOR_COLOUR,
            Self::Boundary => BOUNDARY_COLOUR,
        }
    }
}

/// Cubic Hermite step, as WGSL `smoothstep`. Equal edges degrade to a step.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Point size in pixels for a view-space distance to the cursor.
pub fn point_size(distance: f32, hover_effect_size: f32) -> f32 {
    let proximity = 1.0 - smoothstep(0.0, hover_effect_size, distance);
    POINT_SIZE_FAR + (POINT_SIZE_NEAR - POINT_SIZE_FAR) * proximity
}

/// Base colour whitened toward the hover colour as the cursor gets closer.
pub fn hover_blend(base: Vec3, distance: f32, hover_effect_size: f32) -> Vec3 {
    HOVER_COLOUR.lerp(base, smoothstep(0.0, hover_effect_size, distance))
}

/// Sprite coordinate rotated by `angle` radians about the sprite centre.
pub fn rotate_sprite_coord(coord: Vec2, angle: f32) -> Vec2 {
    let centre = Vec2::splat(0.5);
    let (sin, cos) = angle.sin_cos();
    // Column-major mat2(cos, -sin, sin, cos) * v.
    let rotation = Mat2::from_cols(Vec2::new(cos, -sin), Vec2::new(sin, cos));
    rotation * (coord - centre) + centre
}

/// Final fragment for a sprite texel, or `None` when the texel is discarded.
pub fn shade_sprite(colour: Vec3, texel: Vec4) -> Option<Vec4> {
    if texel.w < SPRITE_ALPHA_CUTOFF {
        return None;
    }
    Some(colour.extend(texel.w) * texel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::HOVER_EFFECT_SIZE;

    const R: f32 = HOVER_EFFECT_SIZE;

    #[test]
    fn region_priority_order() {
        assert_eq!(Region::classify(Vec3::splat(0.6)), Region::Superior);
        assert_eq!(Region::classify(Vec3::new(0.6, 0.2, 0.6)), Region::Lateral);
        assert_eq!(Region::classify(Vec3::new(0.2, 0.2, 0.6)), Region::Anterior);
        assert_eq!(Region::classify(Vec3::new(0.2, -1.0, 0.1)), Region::Interior);
        assert_eq!(Region::classify(Vec3::new(0.5, 0.2, 0.2)), Region::Boundary);
        assert_eq!(Region::classify(Vec3::splat(0.5)), Region::Boundary);
    }

    #[test]
    fn every_region_maps_to_its_palette_entry() {
        for region in [
            Region::Superior,
            Region::Lateral,
            Region::Anterior,
            Region::Interior,
            Region::Boundary,
        ] {
            let info = &constants::palette::REGION_MAP[region as usize];
            assert_eq!(info.colour, region.colour());
        }
    }

    #[test]
    fn point_size_endpoints_and_continuity() {
        assert_eq!(point_size(0.0, R), POINT_SIZE_NEAR);
        assert_eq!(point_size(R, R), POINT_SIZE_FAR);
        assert_eq!(point_size(R * 10.0, R), POINT_SIZE_FAR);

        let just_inside = point_size(R - 1e-4, R);
        assert!((just_inside - POINT_SIZE_FAR).abs() < 1e-3);
    }

    #[test]
    fn point_size_never_grows_with_distance() {
        let mut previous = point_size(0.0, R);
        for step in 1..=200 {
            let size = point_size(step as f32 * 0.0025, R);
            assert!(size <= previous);
            previous = size;
        }
    }

    #[test]
    fn hover_blend_runs_from_white_to_base() {
        let base = Region::Anterior.colour();
        assert_eq!(hover_blend(base, 0.0, R), Vec3::ONE);
        assert!(hover_blend(base, R, R).abs_diff_eq(base, 1e-6));
        assert!(hover_blend(base, 2.0, R).abs_diff_eq(base, 1e-6));

        let mut previous = hover_blend(base, 0.0, R);
        for step in 1..=100 {
            let colour = hover_blend(base, step as f32 * 0.003, R);
            // Every channel of the anterior colour is below white.
            assert!(colour.cmple(previous + Vec3::splat(1e-6)).all());
            previous = colour;
        }
    }

    #[test]
    fn default_cursor_is_well_defined() {
        let size = point_size(Vec2::ZERO.distance(Vec2::new(0.1, 0.2)), R);
        assert!(size.is_finite());
        assert!(hover_blend(Vec3::ZERO, 0.0, R).is_finite());
    }

    #[test]
    fn degenerate_radius_is_a_hard_step() {
        assert_eq!(point_size(0.0, 0.0), POINT_SIZE_FAR);
        assert_eq!(smoothstep(0.0, 0.0, -1.0), 0.0);
    }

    #[test]
    fn sprite_rotation_is_periodic() {
        let coord = Vec2::new(0.9, 0.2);
        for t in [0.0_f32, 0.7, 3.0, 12.5] {
            let a = rotate_sprite_coord(coord, t);
            let b = rotate_sprite_coord(coord, t + std::f32::consts::TAU);
            assert!(a.abs_diff_eq(b, 1e-4), "{a} vs {b} at t = {t}");
        }
    }

    #[test]
    fn sprite_rotation_keeps_centre_fixed() {
        let centre = Vec2::splat(0.5);
        assert!(rotate_sprite_coord(centre, 1.3).abs_diff_eq(centre, 1e-6));

        let quarter = rotate_sprite_coord(Vec2::new(1.0, 0.5), std::f32::consts::FRAC_PI_2);
        assert!(quarter.abs_diff_eq(Vec2::new(0.5, 0.0), 1e-6));
    }

    #[test]
    fn low_alpha_texels_are_discarded() {
        let colour = Vec3::new(0.2, 0.4, 0.6);
        assert_eq!(shade_sprite(colour, Vec4::new(1.0, 1.0, 1.0, 0.05)), None);

        let shaded = shade_sprite(colour, Vec4::new(1.0, 0.5, 1.0, 0.5)).unwrap();
        assert!(shaded.abs_diff_eq(Vec4::new(0.2, 0.2, 0.6, 0.25), 1e-6));
    }
}
