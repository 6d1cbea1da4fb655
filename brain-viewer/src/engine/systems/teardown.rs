//! Unmount: release every entity, asset and listener the brain owns.

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::engine::assets::brain_assets::BrainAssets;
use crate::engine::core::app_state::AppState;
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;
use crate::engine::scene::brain::BrainParts;

/// A close request unmounts the viewer before the window goes away.
pub fn request_unmount_on_close(
    mut close_requests: EventReader<WindowCloseRequested>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if close_requests.read().count() == 0 || *state.get() == AppState::Disposed {
        return;
    }
    info!("→ Close requested, disposing brain viewer");
    next_state.set(AppState::Disposed);
}

/// Despawn the brain and drop its GPU-side assets.
pub fn dispose_brain(
    mut commands: Commands,
    parts: Option<Res<BrainParts>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
    mut point_materials: ResMut<Assets<PointCloudMaterial>>,
    mut surface_materials: ResMut<Assets<StandardMaterial>>,
    mut glow_materials: ResMut<Assets<DistortMaterial>>,
) {
    commands.remove_resource::<BrainAssets>();

    let Some(parts) = parts else {
        return;
    };

    if let Ok(mut root) = commands.get_entity(parts.root) {
        root.despawn();
    }

    meshes.remove(&parts.handles.sprite_mesh);
    meshes.remove(&parts.handles.geometry);
    point_materials.remove(&parts.handles.point_material);
    surface_materials.remove(&parts.handles.surface_material);
    glow_materials.remove(&parts.handles.glow_material);
    images.remove(&parts.handles.point_texture);

    commands.remove_resource::<BrainParts>();
    info!("✓ Brain disposed");
}

/// Close every window once the brain is gone. The app exits when none remain.
pub fn close_windows(mut commands: Commands, windows: Query<Entity, With<Window>>) {
    for window in &windows {
        commands.entity(window).despawn();
    }
}
