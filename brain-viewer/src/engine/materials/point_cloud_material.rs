/// Point-sprite material for the brain point cloud
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{prelude::*, reflect::TypePath};
use constants::asset_paths::POINT_CLOUD_SHADER_PATH;

/// Uniform block shared by the vertex and fragment stages.
/// Field order matches `PointCloudUniforms` in `point_cloud.wgsl`.
#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
pub struct PointCloudUniforms {
    /// Seconds since the scene started. Also the sprite rotation in radians.
    pub time: f32,
    pub hover_effect_size: f32,
    /// Cursor in normalised device coordinates.
    pub mouse: Vec2,
}

/// Point cloud shader material: time, cursor, hover radius and sprite mask.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointCloudMaterial {
    #[uniform(0)]
    pub uniforms: PointCloudUniforms,

    #[texture(1)]
    #[sampler(2)]
    pub point_texture: Handle<Image>,
}

impl PointCloudMaterial {
    pub fn new(point_texture: Handle<Image>, hover_effect_size: f32) -> Self {
        Self {
            uniforms: PointCloudUniforms {
                time: 0.0,
                hover_effect_size,
                mouse: Vec2::ZERO,
            },
            point_texture,
        }
    }

    /// Write the per-frame values. Everything else stays as created.
    pub fn write_frame(&mut self, elapsed_secs: f32, mouse: Vec2) {
        self.uniforms.time = elapsed_secs;
        self.uniforms.mouse = mouse;
    }
}

impl Material for PointCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
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
        // Sprite corners live in UV_0; every corner repeats the source vertex position.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_frame_touches_only_time_and_mouse() {
        let mut material = PointCloudMaterial::new(Handle::default(), 0.3);
        material.write_frame(4.5, Vec2::new(-0.25, 0.75));

        assert_eq!(material.uniforms.time, 4.5);
        assert_eq!(material.uniforms.mouse, Vec2::new(-0.25, 0.75));
        assert_eq!(material.uniforms.hover_effect_size, 0.3);
        assert_eq!(material.point_texture, Handle::default());
    }
}
