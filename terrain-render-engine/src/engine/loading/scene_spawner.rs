use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::models::spawn_models;
use crate::engine::scene::skybox::{SkyboxLoader, start_skybox_load};
use crate::engine::scene::terrain::Terrain;
use crate::engine::scene::water::spawn_water;

/// Spawn the remaining scene elements once the terrain exists.
///
/// Water and models depend on the terrain (the models query the height
/// sampler for their Y coordinate); the skybox only needs its image load
/// kicked off here and is configured asynchronously.
pub fn spawn_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    manifest: Option<Res<SceneManifest>>,
    terrain: Option<Res<Terrain>>,
    mut skybox_loader: ResMut<SkyboxLoader>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.scene_spawned || !loading_progress.terrain_built {
        return;
    }
    let (Some(manifest), Some(terrain)) = (manifest, terrain) else {
        return;
    };

    if manifest.water.enabled {
        spawn_water(&mut commands, &mut meshes, &mut materials, &manifest);
        info!("✓ Water plane spawned at level {}", manifest.water.level);
    }

    spawn_models(&mut commands, &asset_server, &manifest, &terrain);

    start_skybox_load(&mut skybox_loader, &asset_server, &manifest);

    loading_progress.scene_spawned = true;
}
