use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::scene::terrain::Terrain;

/// Spawn every manifest model placement on the terrain surface.
///
/// The height sampler supplies the Y coordinate, so placements outside the
/// terrain bounds land at water level zero rather than failing.
pub fn spawn_models(
    commands: &mut Commands,
    asset_server: &AssetServer,
    manifest: &SceneManifest,
    terrain: &Terrain,
) {
    for placement in &manifest.models {
        if !terrain.contains(placement.x, placement.z) {
            warn!(
                "model {} at ({}, {}) is off the terrain, placing at ground level zero",
                placement.path, placement.x, placement.z
            );
        }
        let y = terrain.height_at(placement.x, placement.z) + placement.y_offset;

        commands.spawn((
            SceneRoot(
                asset_server.load(GltfAssetLabel::Scene(0).from_asset(placement.path.clone())),
            ),
            Transform::from_xyz(placement.x, y, placement.z)
                .with_scale(Vec3::splat(placement.scale))
                .with_rotation(Quat::from_rotation_y(placement.yaw_degrees.to_radians())),
            Name::new(placement.path.clone()),
        ));
    }

    if !manifest.models.is_empty() {
        info!("✓ Spawned {} model(s) on the terrain", manifest.models.len());
    }
}
