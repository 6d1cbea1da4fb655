use std::sync::Arc;

use bevy::asset::{AssetLoadError, LoadState, RecursiveDependencyLoadState};
use bevy::prelude::*;
use constants::asset_paths::{
    BRAIN_ASSET_PATH, POINT_SPRITE_TEXTURE_PATH, VIEWER_SETTINGS_PATH,
};

use crate::engine::assets::brain_assets::BrainAssets;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::loading::progress::LoadingProgress;

// Issue every load up front. The handles keep the cache warm until spawn.
pub fn preload_brain_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(BrainAssets {
        scene: asset_server.load(BRAIN_ASSET_PATH),
        point_texture: asset_server.load(POINT_SPRITE_TEXTURE_PATH),
        settings: asset_server.load(VIEWER_SETTINGS_PATH),
    });
    info!("Loading {BRAIN_ASSET_PATH} and {POINT_SPRITE_TEXTURE_PATH}");
}

#[derive(Debug)]
enum SceneLoad {
    Pending,
    Ready,
    Failed(Arc<AssetLoadError>),
}

/// Folds the glTF's own state and its sub-assets' state into one. A buffer
/// or mesh that fails leaves the root `Loaded` forever, so both are checked.
fn scene_load_status(
    root: Option<LoadState>,
    dependencies: Option<RecursiveDependencyLoadState>,
) -> SceneLoad {
    match (root, dependencies) {
        (Some(LoadState::Failed(err)), _) => SceneLoad::Failed(err),
        (_, Some(RecursiveDependencyLoadState::Failed(err))) => SceneLoad::Failed(err),
        (Some(LoadState::Loaded), Some(RecursiveDependencyLoadState::Loaded)) => SceneLoad::Ready,
        _ => SceneLoad::Pending,
    }
}

// Track the glTF and the sprite texture. A failed glTF halts loading.
pub fn check_brain_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<BrainAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.failed {
        return;
    }

    if !loading_progress.scene_loaded {
        match scene_load_status(
            asset_server.get_load_state(&assets.scene),
            asset_server.get_recursive_dependency_load_state(&assets.scene),
        ) {
            SceneLoad::Ready => {
                info!("✓ {BRAIN_ASSET_PATH} loaded");
                loading_progress.scene_loaded = true;
            }
            SceneLoad::Failed(err) => {
                error!("Failed to load {BRAIN_ASSET_PATH}: {err}");
                loading_progress.failed = true;
                return;
            }
            SceneLoad::Pending => {}
        }
    }

    if !loading_progress.texture_loaded {
        match asset_server.get_load_state(&assets.point_texture) {
            Some(LoadState::Loaded) => {
                info!("✓ {POINT_SPRITE_TEXTURE_PATH} loaded");
                loading_progress.texture_loaded = true;
            }
            Some(LoadState::Failed(err)) => {
                // The material still binds the handle; sprites sample the
                // default image until a reload succeeds.
                error!("Failed to load {POINT_SPRITE_TEXTURE_PATH}: {err}");
                loading_progress.texture_loaded = true;
                loading_progress.texture_configured = true;
            }
            _ => {}
        }
    }
}

// Settings are optional: a missing or malformed file means defaults.
pub fn resolve_viewer_settings(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    assets: Res<BrainAssets>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ViewerSettings>>,
) {
    if loading_progress.settings_resolved {
        return;
    }

    let settings = match asset_server.get_load_state(&assets.settings) {
        Some(LoadState::Loaded) => match settings_assets.get(&assets.settings) {
            Some(settings) => settings.clone().validated(),
            None => return,
        },
        Some(LoadState::Failed(err)) => {
            warn!("{VIEWER_SETTINGS_PATH} unavailable, using defaults: {err}");
            ViewerSettings::default()
        }
        _ => return,
    };

    debug!("Viewer settings: {settings:?}");
    commands.insert_resource(settings);
    loading_progress.settings_resolved = true;
}
