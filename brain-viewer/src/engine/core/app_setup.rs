use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::pbr::light_consts;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use crate::engine::camera::orbit_camera::{OrbitCamera, orbit_camera_controller, spawn_orbit_camera};
use crate::engine::core::app_state::AppState;
use crate::engine::core::plugins::{BrainLoadingPlugin, BrainRuntimePlugin};
use crate::engine::core::window_config::create_window_plugin;
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(MaterialPlugin::<PointCloudMaterial>::default())
        .add_plugins(MaterialPlugin::<DistortMaterial>::default())
        .add_plugins(MeshPickingPlugin)
        .add_plugins(BrainLoadingPlugin)
        .add_plugins(BrainRuntimePlugin)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (spawn_orbit_camera, spawn_lighting))
        .add_systems(
            Update,
            orbit_camera_controller.run_if(not(in_state(AppState::Disposed))),
        );

    app
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: light_consts::lux::OVERCAST_DAY,
            ..default()
        },
        Transform::from_xyz(2.0, 4.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: "info,wgpu=error,naga=warn".into(),
        ..default()
    };

    DefaultPlugins
        .set(create_window_plugin())
        .set(asset_config)
        .set(log_config)
}
