use bevy::ecs::system::SystemParam;
use bevy::gltf::{Gltf, GltfMesh, GltfNode};
use bevy::prelude::*;
use constants::asset_paths::BRAIN_MESH_NODE;
use constants::palette::get_region_name;

use crate::engine::assets::brain_assets::BrainAssets;
use crate::engine::assets::error::BrainAssetError;
use crate::engine::assets::geometry::resolve_named_mesh;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::materials::falloff::Region;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;
use crate::engine::mesh::point_sprite_mesh::{create_point_sprite_mesh, source_positions};
use crate::engine::scene::brain::{BrainHandles, spawn_brain, surface_material};

/// Asset stores the brain writes into when it is created.
#[derive(SystemParam)]
pub struct BrainStores<'w> {
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub point_materials: ResMut<'w, Assets<PointCloudMaterial>>,
    pub surface_materials: ResMut<'w, Assets<StandardMaterial>>,
    pub glow_materials: ResMut<'w, Assets<DistortMaterial>>,
}

pub fn create_brain_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut stores: BrainStores,
    assets: Res<BrainAssets>,
    settings: Res<ViewerSettings>,
    gltfs: Res<Assets<Gltf>>,
    nodes: Res<Assets<GltfNode>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
) {
    if !loading_progress.ready_to_create() {
        return;
    }
    let Some(gltf) = gltfs.get(&assets.scene) else {
        return;
    };

    let handles = resolve_named_mesh(gltf, BRAIN_MESH_NODE, &nodes, &gltf_meshes, &stores.meshes)
        .and_then(|geometry| {
            build_brain_handles(
                &mut stores,
                geometry,
                assets.point_texture.clone(),
                &settings,
            )
        });

    let handles = match handles {
        Ok(handles) => handles,
        Err(err) => {
            error!("Brain geometry unavailable: {err}");
            loading_progress.failed = true;
            return;
        }
    };

    let parts = spawn_brain(&mut commands, handles, &settings);
    commands.insert_resource(parts);

    loading_progress.brain_created = true;
    info!("Brain point cloud, surface and glow ready");
}

/// Derive the sprite mesh and create the three materials for `geometry`.
pub fn build_brain_handles(
    stores: &mut BrainStores,
    geometry: Handle<Mesh>,
    point_texture: Handle<Image>,
    settings: &ViewerSettings,
) -> Result<BrainHandles, BrainAssetError> {
    let source = stores
        .meshes
        .get(&geometry)
        .ok_or_else(|| BrainAssetError::GeometryNotLoaded(BRAIN_MESH_NODE.to_string()))?;

    let sprite_mesh = create_point_sprite_mesh(source)?;
    log_region_statistics(source);
    let sprite_mesh = stores.meshes.add(sprite_mesh);

    let point_material = stores.point_materials.add(PointCloudMaterial::new(
        point_texture.clone(),
        settings.hover_effect_size,
    ));
    let surface_material = stores
        .surface_materials
        .add(surface_material(&settings.surface));
    let glow_material = stores
        .glow_materials
        .add(DistortMaterial::new(Color::WHITE, settings.glow.idle));

    Ok(BrainHandles {
        geometry,
        sprite_mesh,
        point_material,
        surface_material,
        glow_material,
        point_texture,
    })
}

fn log_region_statistics(source: &Mesh) {
    let Some(positions) = source_positions(source) else {
        return;
    };

    let mut counts = [0usize; 5];
    for position in positions {
        counts[Region::classify(Vec3::from_array(*position)) as usize] += 1;
    }

    info!("Brain point cloud: {} points", positions.len());
    for (id, count) in counts.iter().enumerate() {
        debug!("  {}: {count}", get_region_name(id as u8));
    }
}
