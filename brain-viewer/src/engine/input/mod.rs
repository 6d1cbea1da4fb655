//! Pointer input for the brain viewer.
//!
//! Cursor tracking for the point-cloud shader plus the surface hover state
//! driving the cursor icon and glow profile.

/// Pointer move subscription, viewport binding and NDC normalisation.
pub mod pointer;

/// Hover state toggled by pointer hits on the base surface.
pub mod hover;

/// Browser `mousemove` listener with scoped cleanup.
#[cfg(target_arch = "wasm32")]
pub mod dom_listener;
