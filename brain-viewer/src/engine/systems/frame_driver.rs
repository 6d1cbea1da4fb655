use bevy::prelude::*;

use crate::engine::input::pointer::CursorUniform;
use crate::engine::materials::point_cloud_material::PointCloudMaterial;
use crate::engine::scene::brain::BrainParts;

/// Copy elapsed time and the latest cursor into the point cloud uniforms.
/// Runs once per rendered frame while the brain exists.
pub fn drive_point_cloud_uniforms(
    time: Res<Time>,
    cursor: Res<CursorUniform>,
    parts: Option<Res<BrainParts>>,
    mut materials: ResMut<Assets<PointCloudMaterial>>,
) {
    let Some(parts) = parts else {
        return;
    };
    if let Some(material) = materials.get_mut(&parts.handles.point_material) {
        material.write_frame(time.elapsed_secs(), cursor.ndc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{enter_running, headless_app, spawn_test_brain};

    fn point_uniforms(app: &App, parts: &BrainParts) -> (f32, Vec2, f32) {
        let materials = app.world().resource::<Assets<PointCloudMaterial>>();
        let material = materials.get(&parts.handles.point_material).unwrap();
        (
            material.uniforms.time,
            material.uniforms.mouse,
            material.uniforms.hover_effect_size,
        )
    }

    #[test]
    fn frame_writes_cursor_and_time() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        enter_running(&mut app);

        app.world_mut().resource_mut::<CursorUniform>().ndc = Vec2::new(0.25, -0.5);
        app.update();

        let (time, mouse, hover) = point_uniforms(&app, &parts);
        assert_eq!(mouse, Vec2::new(0.25, -0.5));
        assert_eq!(time, app.world().resource::<Time>().elapsed_secs());
        assert_eq!(hover, 0.3);
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);
        enter_running(&mut app);

        let mut last = point_uniforms(&app, &parts).0;
        for _ in 0..5 {
            app.update();
            let (time, _, _) = point_uniforms(&app, &parts);
            assert!(time >= last);
            last = time;
        }
    }

    #[test]
    fn idle_until_running() {
        let mut app = headless_app();
        let parts = spawn_test_brain(&mut app);

        app.world_mut().resource_mut::<CursorUniform>().ndc = Vec2::ONE;
        app.update();

        let (_, mouse, _) = point_uniforms(&app, &parts);
        assert_eq!(mouse, Vec2::ZERO);
    }
}
