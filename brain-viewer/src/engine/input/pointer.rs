//! Window-level cursor tracking feeding the point cloud's `mouse` uniform.

use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

#[cfg(target_arch = "wasm32")]
use crate::engine::input::dom_listener::DomPointerSubscription;

/// Latest cursor position in normalised device coordinates. Origin at the
/// viewport centre, +Y up. Stays at the origin until the first move.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorUniform {
    pub ndc: Vec2,
}

/// Most recent pixel position written by the platform listener. Older
/// positions are overwritten, so only the newest move per frame survives.
pub type PointerQueue = Arc<Mutex<Option<Vec2>>>;

/// Active move subscription and the viewport it normalises against.
#[derive(Resource, Debug, Clone)]
pub struct PointerMoveListener {
    pub viewport: Vec2,
    queue: PointerQueue,
}

impl PointerMoveListener {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            queue: Arc::new(Mutex::new(None)),
        }
    }

    pub fn queue(&self) -> PointerQueue {
        Arc::clone(&self.queue)
    }

    pub fn push(&self, pixel: Vec2) {
        push_pointer(&self.queue, pixel);
    }

    pub fn take(&self) -> Option<Vec2> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

pub fn push_pointer(queue: &PointerQueue, pixel: Vec2) {
    *queue.lock().unwrap_or_else(PoisonError::into_inner) = Some(pixel);
}

/// Map a top-left-origin pixel position into [-1, 1] NDC.
///
/// Returns `None` for a zero or non-finite viewport so callers keep the
/// previous value instead of writing NaN into the uniform.
pub fn normalise_to_ndc(pixel: Vec2, viewport: Vec2) -> Option<Vec2> {
    if !(viewport.x > 0.0 && viewport.y > 0.0) || !viewport.is_finite() {
        return None;
    }
    Some(Vec2::new(
        pixel.x / viewport.x * 2.0 - 1.0,
        -(pixel.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Subscribe to pointer moves for the primary window.
pub fn attach_pointer_listener(world: &mut World) {
    let mut windows = world.query_filtered::<&Window, With<PrimaryWindow>>();
    let viewport = match windows.single(world) {
        Ok(window) => Vec2::new(window.width(), window.height()),
        Err(err) => {
            warn!("Pointer listener not attached: {err}");
            return;
        }
    };

    let listener = PointerMoveListener::new(viewport);

    #[cfg(target_arch = "wasm32")]
    {
        match DomPointerSubscription::attach(listener.queue()) {
            Ok(subscription) => world.insert_non_send_resource(subscription),
            Err(err) => {
                warn!("Pointer listener not attached: {err}");
                return;
            }
        }
    }

    world.insert_resource(listener);
    info!("Pointer listener attached ({}x{})", viewport.x, viewport.y);
}

/// Drop the subscription. Safe to call when nothing is attached.
pub fn detach_pointer_listener(world: &mut World) {
    #[cfg(target_arch = "wasm32")]
    world.remove_non_send_resource::<DomPointerSubscription>();

    if world.remove_resource::<PointerMoveListener>().is_some() {
        info!("Pointer listener detached");
    }
}

/// Keep the listener's viewport equal to the primary window's current size.
pub fn rebind_listener_on_resize(
    mut resized: EventReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    listener: Option<ResMut<PointerMoveListener>>,
) {
    let Some(mut listener) = listener else {
        resized.clear();
        return;
    };
    let Ok(primary) = primary.single() else {
        return;
    };

    if let Some(event) = resized.read().filter(|e| e.window == primary).last() {
        listener.viewport = Vec2::new(event.width, event.height);
        debug!("Pointer viewport rebound to {}x{}", event.width, event.height);
    }
}

/// Native builds read pointer moves from winit. In the browser the DOM
/// subscription writes the queue directly.
#[cfg(not(target_arch = "wasm32"))]
pub fn capture_cursor_moves(
    mut moves: EventReader<CursorMoved>,
    primary: Query<Entity, With<PrimaryWindow>>,
    listener: Option<Res<PointerMoveListener>>,
) {
    let (Some(listener), Ok(primary)) = (listener, primary.single()) else {
        moves.clear();
        return;
    };
    if let Some(event) = moves.read().filter(|e| e.window == primary).last() {
        listener.push(event.position);
    }
}

/// Normalise the newest queued position into `CursorUniform`.
pub fn apply_pointer_moves(
    listener: Option<Res<PointerMoveListener>>,
    mut cursor: ResMut<CursorUniform>,
) {
    let Some(listener) = listener else {
        return;
    };
    let Some(pixel) = listener.take() else {
        return;
    };
    if let Some(ndc) = normalise_to_ndc(pixel, listener.viewport) {
        cursor.ndc = ndc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{enter_running, headless_app, spawn_primary_window};

    #[test]
    fn corners_map_to_ndc_extremes() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(normalise_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(normalise_to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(
            normalise_to_ndc(Vec2::new(400.0, 300.0), viewport),
            Some(Vec2::ZERO)
        );
        assert_eq!(
            normalise_to_ndc(Vec2::new(800.0, 0.0), viewport),
            Some(Vec2::new(1.0, 1.0))
        );
    }

    #[test]
    fn degenerate_viewport_yields_nothing() {
        assert_eq!(normalise_to_ndc(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
        assert_eq!(normalise_to_ndc(Vec2::ONE, Vec2::new(800.0, f32::NAN)), None);
    }

    #[test]
    fn newest_position_wins() {
        let listener = PointerMoveListener::new(Vec2::new(100.0, 100.0));
        listener.push(Vec2::new(10.0, 10.0));
        listener.push(Vec2::new(75.0, 25.0));
        assert_eq!(listener.take(), Some(Vec2::new(75.0, 25.0)));
        assert_eq!(listener.take(), None);
    }

    #[test]
    fn cursor_starts_at_origin() {
        let mut app = headless_app();
        app.update();
        assert_eq!(app.world().resource::<CursorUniform>().ndc, Vec2::ZERO);
    }

    #[test]
    fn listener_attaches_on_running_and_normalises_moves() {
        let mut app = headless_app();
        let window = spawn_primary_window(&mut app, 800.0, 600.0);
        enter_running(&mut app);

        let listener = app.world().resource::<PointerMoveListener>();
        assert_eq!(listener.viewport, Vec2::new(800.0, 600.0));
        listener.push(Vec2::new(600.0, 150.0));
        app.update();
        assert_eq!(
            app.world().resource::<CursorUniform>().ndc,
            Vec2::new(0.5, 0.5)
        );

        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(200.0, 450.0),
            delta: None,
        });
        app.update();
        assert_eq!(
            app.world().resource::<CursorUniform>().ndc,
            Vec2::new(-0.5, -0.5)
        );
    }

    #[test]
    fn resize_rebinds_viewport_before_normalising() {
        let mut app = headless_app();
        let window = spawn_primary_window(&mut app, 800.0, 600.0);
        enter_running(&mut app);

        app.world_mut().send_event(WindowResized {
            window,
            width: 400.0,
            height: 400.0,
        });
        app.world()
            .resource::<PointerMoveListener>()
            .push(Vec2::new(400.0, 0.0));
        app.update();

        assert_eq!(
            app.world().resource::<PointerMoveListener>().viewport,
            Vec2::new(400.0, 400.0)
        );
        assert_eq!(
            app.world().resource::<CursorUniform>().ndc,
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn moves_before_attach_are_ignored() {
        let mut app = headless_app();
        let window = spawn_primary_window(&mut app, 800.0, 600.0);
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(800.0, 0.0),
            delta: None,
        });
        app.update();
        assert_eq!(app.world().resource::<CursorUniform>().ndc, Vec2::ZERO);
    }

    #[test]
    fn detach_is_idempotent() {
        let mut app = headless_app();
        spawn_primary_window(&mut app, 800.0, 600.0);
        enter_running(&mut app);

        detach_pointer_listener(app.world_mut());
        detach_pointer_listener(app.world_mut());
        assert!(!app.world().contains_resource::<PointerMoveListener>());
    }
}
