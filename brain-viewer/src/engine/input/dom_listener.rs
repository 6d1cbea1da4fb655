//! Browser `mousemove` subscription for wasm builds.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, window};

use bevy::prelude::Vec2;

use crate::engine::input::pointer::{PointerQueue, push_pointer};

#[derive(Debug, Error)]
pub enum DomListenerError {
    #[error("no browser window")]
    NoWindow,
    #[error("failed to register mousemove listener: {0}")]
    Register(String),
}

/// Owns the JS callback. Dropping it unregisters the listener, so the
/// closure is never leaked past unmount.
pub struct DomPointerSubscription {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl DomPointerSubscription {
    pub fn attach(queue: PointerQueue) -> Result<Self, DomListenerError> {
        let window = window().ok_or(DomListenerError::NoWindow)?;

        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            push_pointer(
                &queue,
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
            );
        }) as Box<dyn FnMut(MouseEvent)>);

        window
            .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
            .map_err(|err| DomListenerError::Register(format!("{err:?}")))?;

        Ok(Self { window, callback })
    }
}

impl Drop for DomPointerSubscription {
    fn drop(&mut self) {
        // Nothing useful to do if the page is already gone.
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
