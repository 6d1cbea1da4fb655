use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::core::app_state::{AppState, transition_to_running};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::input::pointer::capture_cursor_moves;
use crate::engine::input::hover::{HoverState, apply_cursor_affordance, apply_hover_distortion};
use crate::engine::input::pointer::{
    CursorUniform, apply_pointer_moves, attach_pointer_listener, detach_pointer_listener,
    rebind_listener_on_resize,
};
use crate::engine::loading::asset_loader::{
    check_brain_loading, preload_brain_assets, resolve_viewer_settings,
};
use crate::engine::loading::brain_creator::create_brain_when_ready;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_config::configure_point_texture;
use crate::engine::materials::distortion_material::advance_distortion_clock;
use crate::engine::systems::frame_driver::drive_point_cloud_uniforms;
use crate::engine::systems::teardown::{close_windows, dispose_brain, request_unmount_on_close};

/// Preload, settings resolution and brain creation while `Loading`.
pub struct BrainLoadingPlugin;

impl Plugin for BrainLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&["settings.json"]))
            .init_resource::<LoadingProgress>()
            .add_systems(Startup, preload_brain_assets)
            .add_systems(
                Update,
                (
                    check_brain_loading,
                    resolve_viewer_settings,
                    configure_point_texture,
                    create_brain_when_ready,
                    transition_to_running,
                )
                    .chain()
                    .run_if(in_state(AppState::Loading)),
            );
    }
}

/// Pointer tracking, hover routing, per-frame uniforms and teardown.
pub struct BrainRuntimePlugin;

impl Plugin for BrainRuntimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorUniform>()
            .init_resource::<HoverState>()
            .init_resource::<ViewerSettings>()
            .add_systems(OnEnter(AppState::Running), attach_pointer_listener)
            .add_systems(
                Update,
                (
                    (
                        rebind_listener_on_resize,
                        apply_pointer_moves,
                        drive_point_cloud_uniforms,
                    )
                        .chain(),
                    advance_distortion_clock,
                    (apply_hover_distortion, apply_cursor_affordance),
                )
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Update, request_unmount_on_close)
            .add_systems(
                OnEnter(AppState::Disposed),
                (detach_pointer_listener, dispose_brain, close_windows).chain(),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            capture_cursor_moves
                .before(rebind_listener_on_resize)
                .run_if(in_state(AppState::Running)),
        );
    }
}
