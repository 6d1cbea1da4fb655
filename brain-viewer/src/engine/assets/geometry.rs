use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;

use super::error::BrainAssetError;

/// How far a named node could be followed through the glTF's sub-assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeLookup<'a> {
    Missing,
    NotLoaded,
    WithoutMesh,
    /// The node's mesh, reduced to the handle of its first primitive.
    FirstPrimitive(Option<&'a Handle<Mesh>>),
}

/// Resolve the first primitive of a named glTF node to its mesh handle.
///
/// The returned handle is the one geometry instance every brain renderer shares.
pub fn resolve_named_mesh(
    gltf: &Gltf,
    node_name: &str,
    nodes: &Assets<GltfNode>,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Result<Handle<Mesh>, BrainAssetError> {
    let lookup = lookup_node(gltf, node_name, nodes, gltf_meshes);
    geometry_from_lookup(node_name, lookup, meshes)
}

fn lookup_node<'a>(
    gltf: &Gltf,
    node_name: &str,
    nodes: &Assets<GltfNode>,
    gltf_meshes: &'a Assets<GltfMesh>,
) -> NodeLookup<'a> {
    let Some(node_handle) = gltf.named_nodes.get(node_name) else {
        return NodeLookup::Missing;
    };
    let Some(node) = nodes.get(node_handle) else {
        return NodeLookup::NotLoaded;
    };
    match node.mesh.as_ref().and_then(|handle| gltf_meshes.get(handle)) {
        Some(gltf_mesh) => {
            NodeLookup::FirstPrimitive(gltf_mesh.primitives.first().map(|p| &p.mesh))
        }
        None => NodeLookup::WithoutMesh,
    }
}

fn geometry_from_lookup(
    node_name: &str,
    lookup: NodeLookup<'_>,
    meshes: &Assets<Mesh>,
) -> Result<Handle<Mesh>, BrainAssetError> {
    let named = || node_name.to_string();
    let mesh = match lookup {
        NodeLookup::Missing => return Err(BrainAssetError::MissingNode(named())),
        NodeLookup::NotLoaded => return Err(BrainAssetError::NodeNotLoaded(named())),
        NodeLookup::WithoutMesh => return Err(BrainAssetError::NodeWithoutMesh(named())),
        NodeLookup::FirstPrimitive(None) => return Err(BrainAssetError::EmptyMesh(named())),
        NodeLookup::FirstPrimitive(Some(mesh)) => mesh,
    };

    if !meshes.contains(mesh) {
        return Err(BrainAssetError::GeometryNotLoaded(named()));
    }
    Ok(mesh.clone())
}
