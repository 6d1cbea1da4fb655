use bevy::gltf::Gltf;
use bevy::prelude::*;

use super::viewer_settings::ViewerSettings;

/// Handles for everything the brain loads from disk.
/// Held from startup so the asset cache stays warm until the brain spawns.
#[derive(Resource, Default)]
pub struct BrainAssets {
    pub scene: Handle<Gltf>,
    pub point_texture: Handle<Image>,
    pub settings: Handle<ViewerSettings>,
}

