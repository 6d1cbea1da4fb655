use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// Unmounted. Everything the brain owned has been released.
    Disposed,
}

// Final transition once the brain is in the world
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.brain_created {
        info!("→ Brain ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
