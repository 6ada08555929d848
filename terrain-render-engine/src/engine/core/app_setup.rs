// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::fly_camera::{FlyCamera, camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, poll_manifest, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_spawner::spawn_scene_when_ready;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::skybox::{SkyboxLoader, configure_skybox_when_ready};
use crate::engine::scene::terrain::build_terrain_when_ready;
use crate::engine::scene::water::animate_water;
use crate::engine::systems::fps_tracking::fps_text_update_system;

use crate::engine::core::app_state::FpsText;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .init_state::<AppState>()
        .insert_resource(ClearColor(constants::lighting::CLEAR_COLOR));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SkyboxLoader>()
        .init_resource::<FlyCamera>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                poll_manifest,
                build_terrain_when_ready,
                spawn_scene_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        // The skybox image arrives asynchronously; keep polling until the
        // cubemap has been configured, whatever state we are in.
        .add_systems(Update, configure_skybox_when_ready)
        .add_systems(
            Update,
            (camera_controller, animate_water, fps_text_update_system)
                .run_if(in_state(AppState::Running)),
        );

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_overlays(&mut commands);
}

fn spawn_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
