use bevy::prelude::*;
use bevy::render::mesh::{Indices, VertexAttributeValues};
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

use crate::engine::assets::error::BrainAssetError;

/// Sprite corners in [0, 1]^2 with the origin top-left, like `gl_PointCoord`.
const SPRITE_CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Two triangles per sprite, relative to the sprite's first corner.
const SPRITE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Expand every vertex of `source` into a camera-facing sprite quad.
///
/// All four corners carry the source vertex position unchanged; the vertex
/// shader offsets them in clip space. Index data of the source is ignored, so
/// each vertex yields exactly one sprite.
pub fn create_point_sprite_mesh(source: &Mesh) -> Result<Mesh, BrainAssetError> {
    let Some(VertexAttributeValues::Float32x3(positions)) =
        source.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        return Err(BrainAssetError::MissingAttribute(
            Mesh::ATTRIBUTE_POSITION.name,
        ));
    };

    let corner_count = positions.len() * SPRITE_CORNERS.len();
    if corner_count > u32::MAX as usize {
        return Err(BrainAssetError::TooManyVertices(positions.len()));
    }

    let mut sprite_positions = Vec::with_capacity(corner_count);
    let mut corners = Vec::with_capacity(corner_count);
    let mut indices = Vec::with_capacity(positions.len() * SPRITE_INDICES.len());

    for (point, position) in positions.iter().enumerate() {
        let first_corner = (point * SPRITE_CORNERS.len()) as u32;
        for corner in SPRITE_CORNERS {
            sprite_positions.push(*position);
            corners.push(corner);
        }
        indices.extend(SPRITE_INDICES.iter().map(|i| first_corner + i));
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, sprite_positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh.insert_indices(Indices::U32(indices));
    Ok(mesh)
}

/// Source vertex positions, for region statistics and tests.
pub fn source_positions(source: &Mesh) -> Option<&[[f32; 3]]> {
    match source.attribute(Mesh::ATTRIBUTE_POSITION)? {
        VertexAttributeValues::Float32x3(positions) => Some(positions.as_slice()),
        _ => None,
    }
}
