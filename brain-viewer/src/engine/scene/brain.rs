//! The brain unit: point cloud, base surface and glow shell over one geometry.

use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::coordinate_system::surface_rotation;

use crate::engine::assets::viewer_settings::{SurfaceSettings, ViewerSettings};
use crate::engine::input::hover::{on_surface_out, on_surface_over};
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;

#[derive(Component)]
pub struct Brain;

#[derive(Component)]
pub struct BrainPoints;

/// Pointer-hit target for the hover state.
#[derive(Component)]
pub struct BrainSurface;

#[derive(Component)]
pub struct BrainGlow;

/// Every asset the brain owns. Removed from their stores on teardown.
#[derive(Debug, Clone)]
pub struct BrainHandles {
    /// Shared geometry from the glTF node. Never mutated.
    pub geometry: Handle<Mesh>,
    /// Point-sprite expansion of `geometry`.
    pub sprite_mesh: Handle<Mesh>,
    pub point_material: Handle<PointCloudMaterial>,
    pub surface_material: Handle<StandardMaterial>,
    pub glow_material: Handle<DistortMaterial>,
    pub point_texture: Handle<Image>,
}

/// Spawned brain. Entity ids are non-owning; the world owns the entities.
#[derive(Resource, Debug, Clone)]
pub struct BrainParts {
    pub root: Entity,
    pub points: Entity,
    pub surface: Entity,
    pub glow: Entity,
    pub handles: BrainHandles,
}

/// Unlit white surface. Opaque, so the configured opacity is inert.
pub fn surface_material(settings: &SurfaceSettings) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, settings.opacity),
        alpha_mode: AlphaMode::Opaque,
        unlit: true,
        ..default()
    }
}

/// Spawn the three renderers under one root and return their registry.
pub fn spawn_brain(
    commands: &mut Commands,
    handles: BrainHandles,
    settings: &ViewerSettings,
) -> BrainParts {
    let mut points = Entity::PLACEHOLDER;
    let mut surface = Entity::PLACEHOLDER;
    let mut glow = Entity::PLACEHOLDER;

    let root = commands
        .spawn((Brain, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            points = parent
                .spawn((
                    BrainPoints,
                    Mesh3d(handles.sprite_mesh.clone()),
                    MeshMaterial3d(handles.point_material.clone()),
                    Transform::IDENTITY,
                    // Sprites grow in the vertex shader beyond the mesh bounds.
                    NoFrustumCulling,
                    Pickable::IGNORE,
                ))
                .id();

            surface = parent
                .spawn((
                    BrainSurface,
                    Mesh3d(handles.geometry.clone()),
                    MeshMaterial3d(handles.surface_material.clone()),
                    Transform::from_rotation(surface_rotation())
                        .with_scale(Vec3::splat(settings.surface.scale)),
                ))
                .observe(on_surface_over)
                .observe(on_surface_out)
                .id();

            glow = parent
                .spawn((
                    BrainGlow,
                    Mesh3d(handles.geometry.clone()),
                    MeshMaterial3d(handles.glow_material.clone()),
                    Transform::from_rotation(surface_rotation())
                        .with_scale(Vec3::splat(settings.glow.scale)),
                    Pickable::IGNORE,
                ))
                .id();
        })
        .id();

    BrainParts {
        root,
        points,
        surface,
        glow,
        handles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{headless_app, spawn_test_brain};

    #[test]
    fn surface_and_glow_share_the_geometry() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        let world = app.world();

        let surface_mesh = world.get::<Mesh3d>(parts.surface).unwrap();
        let glow_mesh = world.get::<Mesh3d>(parts.glow).unwrap();
        let points_mesh = world.get::<Mesh3d>(parts.points).unwrap();

        assert_eq!(surface_mesh.0, parts.handles.geometry);
        assert_eq!(glow_mesh.0, parts.handles.geometry);
        assert_eq!(points_mesh.0, parts.handles.sprite_mesh);
    }

    #[test]
    fn renderers_hang_off_one_root() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        let world = app.world();

        let children = world.get::<Children>(parts.root).unwrap();
        assert_eq!(children.len(), 3);
        for part in [parts.points, parts.surface, parts.glow] {
            assert_eq!(world.get::<ChildOf>(part).unwrap().parent(), parts.root);
        }
    }

    #[test]
    fn shells_are_scaled_and_rotated() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        let world = app.world();

        let surface = world.get::<Transform>(parts.surface).unwrap();
        assert_eq!(surface.scale, Vec3::splat(0.9));
        assert_eq!(surface.rotation, surface_rotation());

        let glow = world.get::<Transform>(parts.glow).unwrap();
        assert_eq!(glow.scale, Vec3::splat(1.05));

        let points = world.get::<Transform>(parts.points).unwrap();
        assert_eq!(*points, Transform::IDENTITY);
    }

    #[test]
    fn only_the_surface_is_pickable() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        let world = app.world();

        assert!(world.get::<Pickable>(parts.surface).is_none());
        assert_eq!(world.get::<Pickable>(parts.points), Some(&Pickable::IGNORE));
        assert_eq!(world.get::<Pickable>(parts.glow), Some(&Pickable::IGNORE));
    }

    #[test]
    fn surface_material_is_opaque_white() {
        let material = surface_material(&SurfaceSettings::default());
        assert_eq!(material.alpha_mode, AlphaMode::Opaque);
        assert!(material.unlit);
        assert_eq!(material.base_color, Color::srgba(1.0, 1.0, 1.0, 0.8));
    }
}
