//! Noise-displaced translucent shell drawn around the brain surface.

use bevy::color::ColorToComponents;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{prelude::*, reflect::TypePath};
use constants::asset_paths::DISTORTION_SHADER_PATH;
use constants::render_settings::{GLOW_DISTORT, GLOW_OPACITY, GLOW_RADIUS, GLOW_SPEED};
use serde::{Deserialize, Serialize};

use crate::engine::scene::brain::BrainParts;

/// Tunable distortion values for one hover state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistortionParams {
    /// Noise amplitude; displacement grows with its square.
    pub distort: f32,
    /// Clock multiplier for the noise animation.
    pub speed: f32,
    pub opacity: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            distort: GLOW_DISTORT,
            speed: GLOW_SPEED,
            opacity: GLOW_OPACITY,
        }
    }
}

impl DistortionParams {
    /// Non-finite values fall back to the defaults. Finite ones are clamped
    /// into range.
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        Self {
            distort: finite_or(self.distort, defaults.distort).max(0.0),
            speed: finite_or(self.speed, defaults.speed).max(0.0),
            opacity: finite_or(self.opacity, defaults.opacity).clamp(0.0, 1.0),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Field order matches `DistortionUniforms` in `distortion.wgsl`.
#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct DistortionUniforms {
    pub colour: Vec4,
    pub time: f32,
    pub distort: f32,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct DistortMaterial {
    #[uniform(0)]
    pub uniforms: DistortionUniforms,

    /// Host-side only: rate at which `uniforms.time` advances.
    pub speed: f32,
}

impl DistortMaterial {
    pub fn new(colour: Color, params: DistortionParams) -> Self {
        let mut material = Self {
            uniforms: DistortionUniforms {
                colour: LinearRgba::from(colour).to_vec4(),
                time: 0.0,
                distort: 0.0,
                radius: GLOW_RADIUS,
                opacity: 0.0,
            },
            speed: 0.0,
        };
        material.apply_params(params);
        material
    }

    /// Swap in a new parameter set without resetting the animation clock.
    pub fn apply_params(&mut self, params: DistortionParams) {
        self.uniforms.distort = params.distort;
        self.uniforms.opacity = params.opacity;
        self.speed = params.speed;
    }

    pub fn params(&self) -> DistortionParams {
        DistortionParams {
            distort: self.uniforms.distort,
            speed: self.speed,
            opacity: self.uniforms.opacity,
        }
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.uniforms.time += delta_secs * self.speed;
    }
}

impl Material for DistortMaterial {
    fn vertex_shader() -> ShaderRef {
        DISTORTION_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        DISTORTION_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}

/// The glow's own animation driver, independent of the point-cloud clock.
pub fn advance_distortion_clock(
    time: Res<Time>,
    parts: Option<Res<BrainParts>>,
    mut materials: ResMut<Assets<DistortMaterial>>,
) {
    let Some(parts) = parts else {
        return;
    };
    if let Some(material) = materials.get_mut(&parts.handles.glow_material) {
        material.advance(time.delta_secs());
    }
}
