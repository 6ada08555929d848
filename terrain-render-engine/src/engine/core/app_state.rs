use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the scene manifest, heightmap decode and scene spawn.
    #[default]
    Loading,
    /// All scene elements spawned; camera and animation systems active.
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Final transition once every scene element has been spawned.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_spawned {
        info!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
