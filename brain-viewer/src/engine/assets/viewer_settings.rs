use bevy::prelude::*;
use constants::render_settings::{
    GLOW_SCALE, HOVER_EFFECT_SIZE, MIN_HOVER_EFFECT_SIZE, SURFACE_OPACITY, SURFACE_SCALE,
};
use serde::{Deserialize, Serialize};

use crate::engine::input::hover::HoverState;
use crate::engine::materials::distortion_material::DistortionParams;

/// Opaque base surface that receives pointer hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            scale: SURFACE_SCALE,
            opacity: SURFACE_OPACITY,
        }
    }
}

/// Glow shell with one distortion profile per hover state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowSettings {
    pub scale: f32,
    pub idle: DistortionParams,
    pub hovered: DistortionParams,
}

impl Default for GlowSettings {
    fn default() -> Self {
        Self {
            scale: GLOW_SCALE,
            idle: DistortionParams::default(),
            hovered: DistortionParams::default(),
        }
    }
}

impl GlowSettings {
    pub fn params_for(&self, hover: HoverState) -> DistortionParams {
        match hover {
            HoverState::Idle => self.idle,
            HoverState::Hovered => self.hovered,
        }
    }
}

/// Viewer settings as a Bevy asset. Mirrors `viewer.settings.json`; every
/// field is optional and falls back to the `constants` defaults.
#[derive(Asset, Resource, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub hover_effect_size: f32,
    pub surface: SurfaceSettings,
    pub glow: GlowSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            hover_effect_size: HOVER_EFFECT_SIZE,
            surface: SurfaceSettings::default(),
            glow: GlowSettings::default(),
        }
    }
}

impl ViewerSettings {
    /// Clamp values the renderers cannot use. Non-finite or non-positive
    /// radii and scales fall back to defaults.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        Self {
            hover_effect_size: positive_or(self.hover_effect_size, defaults.hover_effect_size)
                .max(MIN_HOVER_EFFECT_SIZE),
            surface: SurfaceSettings {
                scale: positive_or(self.surface.scale, defaults.surface.scale),
                opacity: if self.surface.opacity.is_finite() {
                    self.surface.opacity.clamp(0.0, 1.0)
                } else {
                    defaults.surface.opacity
                },
            },
            glow: GlowSettings {
                scale: positive_or(self.glow.scale, defaults.glow.scale),
                idle: self.glow.idle.validated(),
                hovered: self.glow.hovered.validated(),
            },
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
