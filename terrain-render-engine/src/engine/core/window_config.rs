use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    Window {
        title: "Terrain Scene".into(),
        resolution: (1280.0, 720.0).into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
