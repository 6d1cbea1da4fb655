//! Headless app and fixtures shared by the system tests.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::state::app::StatesPlugin;
use bevy::window::{PrimaryWindow, WindowCloseRequested, WindowResized, WindowResolution};

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::core::app_state::AppState;
use crate::engine::core::plugins::BrainRuntimePlugin;
use crate::engine::loading::brain_creator::{BrainStores, build_brain_handles};
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;
use crate::engine::scene::brain::{BrainParts, spawn_brain};

/// Runtime plugin on a renderless app. Starts in `Loading` with no brain.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
        .init_asset::<Mesh>()
        .init_asset::<Image>()
        .init_asset::<StandardMaterial>()
        .init_asset::<PointCloudMaterial>()
        .init_asset::<DistortMaterial>()
        .add_event::<CursorMoved>()
        .add_event::<WindowResized>()
        .add_event::<WindowCloseRequested>()
        .init_state::<AppState>()
        .add_plugins(BrainRuntimePlugin);
    app
}

pub fn spawn_primary_window(app: &mut App, width: f32, height: f32) -> Entity {
    app.world_mut()
        .spawn((
            Window {
                resolution: WindowResolution::new(width, height),
                ..default()
            },
            PrimaryWindow,
        ))
        .id()
}

pub fn enter_running(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Running);
    app.update();
}

/// Three vertices, one in each of the first three colour regions.
pub fn triangle_mesh() -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        )
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            vec![[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        )
}

/// Build and spawn a brain the way the loading pipeline does.
pub fn spawn_test_brain(app: &mut App) -> BrainParts {
    let settings = app.world().resource::<ViewerSettings>().clone();
    let world = app.world_mut();
    let geometry = world.resource_mut::<Assets<Mesh>>().add(triangle_mesh());
    let point_texture = world.resource_mut::<Assets<Image>>().add(Image::default());

    let parts = world
        .run_system_once(
            move |mut commands: Commands, mut stores: BrainStores| -> BrainParts {
                let handles = build_brain_handles(
                    &mut stores,
                    geometry.clone(),
                    point_texture.clone(),
                    &settings,
                )
                .unwrap();
                spawn_brain(&mut commands, handles, &settings)
            },
        )
        .unwrap();

    world.insert_resource(parts.clone());
    parts
}
