//! Hover state of the base surface and everything that reacts to it.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::materials::distortion_material::DistortMaterial;
use crate::engine::scene::brain::BrainParts;

/// Whether the pointer is over the base surface.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn cursor(self) -> SystemCursorIcon {
        match self {
            HoverState::Idle => SystemCursorIcon::Default,
            HoverState::Hovered => SystemCursorIcon::Pointer,
        }
    }
}

pub fn on_surface_over(_trigger: Trigger<Pointer<Over>>, mut hover: ResMut<HoverState>) {
    if hover.set_if_neq(HoverState::Hovered) {
        debug!("Brain surface hovered");
    }
}

pub fn on_surface_out(_trigger: Trigger<Pointer<Out>>, mut hover: ResMut<HoverState>) {
    if hover.set_if_neq(HoverState::Idle) {
        debug!("Brain surface left");
    }
}

/// Pointer cursor while hovered, default otherwise.
pub fn apply_cursor_affordance(
    mut commands: Commands,
    hover: Res<HoverState>,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    if !hover.is_changed() {
        return;
    }
    for window in &windows {
        commands
            .entity(window)
            .insert(CursorIcon::from(hover.cursor()));
    }
}

/// Route the hover state to the glow's distortion profile.
pub fn apply_hover_distortion(
    hover: Res<HoverState>,
    settings: Res<ViewerSettings>,
    parts: Option<Res<BrainParts>>,
    mut materials: ResMut<Assets<DistortMaterial>>,
) {
    let Some(parts) = parts else {
        return;
    };
    if !(hover.is_changed() || settings.is_changed() || parts.is_added()) {
        return;
    }

    let params = settings.glow.params_for(*hover);
    if let Some(material) = materials.get_mut(&parts.handles.glow_material) {
        if material.params() != params {
            material.apply_params(params);
        }
    }
}
