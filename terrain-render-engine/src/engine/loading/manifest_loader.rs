use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

const SCENE_MANIFEST_PATH: &str = "scenes/default.json";

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from: {SCENE_MANIFEST_PATH}");
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Insert the manifest as a resource once the JSON asset has decoded.
/// Terrain construction picks it up on the next system in the chain.
pub fn poll_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            info!(
                "✓ Scene manifest loaded ({} model placement(s))",
                manifest.models.len()
            );
            commands.insert_resource(manifest.clone());
            loading_progress.manifest_loaded = true;
        }
    }
}
