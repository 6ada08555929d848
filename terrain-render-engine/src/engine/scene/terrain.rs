use bevy::app::AppExit;
use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use heightfield::{HeightField, HeightSampler, TerrainMesh};

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;

/// The constructed terrain. The vertex and index buffers live on the GPU
/// after the one-time upload; this resource keeps the sampler side for
/// world-space height queries.
#[derive(Resource)]
pub struct Terrain {
    sampler: HeightSampler,
    size: f32,
}

impl Terrain {
    /// World-space terrain height at `(x, z)`; `0.0` outside the terrain.
    pub fn height_at(&self, world_x: f32, world_z: f32) -> f32 {
        self.sampler.height_at(world_x, world_z)
    }

    /// Whether `(x, z)` lies on the terrain footprint, boundary included.
    pub fn contains(&self, world_x: f32, world_z: f32) -> bool {
        (0.0..=self.size).contains(&world_x) && (0.0..=self.size).contains(&world_z)
    }
}

/// Build the terrain synchronously once the manifest is available.
///
/// Heightmap decode or grid validation failure is fatal to scene setup:
/// the error is logged and the app exits with a failure code.
pub fn build_terrain_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    manifest: Option<Res<SceneManifest>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut app_exit: EventWriter<AppExit>,
) {
    if loading_progress.terrain_built {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    let field = match HeightField::from_image(&manifest.heightmap) {
        Ok(field) => field,
        Err(err) => {
            error!("terrain construction failed: {err}");
            app_exit.write(AppExit::error());
            return;
        }
    };
    info!(
        "✓ Heightmap loaded: {} ({} x {})",
        manifest.heightmap,
        field.width(),
        field.depth()
    );

    let terrain_mesh = match TerrainMesh::build(&field, manifest.terrain_size, manifest.height_scale)
    {
        Ok(mesh) => mesh,
        Err(err) => {
            error!("terrain construction failed: {err}");
            app_exit.write(AppExit::error());
            return;
        }
    };
    info!(
        "✓ Terrain mesh built: {} vertices, {} triangles",
        terrain_mesh.vertices().len(),
        terrain_mesh.indices().len() / 3
    );

    // Same grid, so the degenerate guard cannot fire after a successful
    // mesh build; treat it like any other construction failure anyway.
    let sampler =
        match HeightSampler::new(field, manifest.terrain_size, manifest.height_scale) {
            Ok(sampler) => sampler,
            Err(err) => {
                error!("terrain construction failed: {err}");
                app_exit.write(AppExit::error());
                return;
            }
        };

    let mesh_handle = meshes.add(upload_mesh(&terrain_mesh));
    let material_handle = materials.add(terrain_material(&manifest, &asset_server));

    commands.spawn((
        Mesh3d(mesh_handle),
        MeshMaterial3d(material_handle),
        Transform::default(),
        Name::new("terrain"),
    ));
    commands.insert_resource(Terrain {
        sampler,
        size: manifest.terrain_size,
    });

    loading_progress.terrain_built = true;
}

/// Convert the CPU-side terrain mesh into a render-world-only bevy mesh.
/// `RENDER_WORLD` usage drops the CPU copy after the one-time upload.
fn upload_mesh(terrain_mesh: &TerrainMesh) -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, terrain_mesh.positions())
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, terrain_mesh.normals())
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, terrain_mesh.uvs())
    .with_inserted_indices(Indices::U32(terrain_mesh.indices().to_vec()))
}

fn terrain_material(manifest: &SceneManifest, asset_server: &AssetServer) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(0.45, 0.55, 0.35),
        base_color_texture: manifest
            .terrain_texture
            .as_ref()
            .map(|path| asset_server.load(path)),
        // Tile the surface texture; UVs span 0..1 across the whole terrain.
        uv_transform: Affine2::from_scale(Vec2::splat(
            constants::terrain::TERRAIN_TEXTURE_TILING,
        )),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_terrain(size: f32) -> Terrain {
        let field = HeightField::from_samples(2, 2, vec![0.5; 4]);
        Terrain {
            sampler: HeightSampler::new(field, size, 10.0).unwrap(),
            size,
        }
    }

    #[test]
    fn footprint_includes_boundary() {
        let terrain = test_terrain(100.0);
        assert!(terrain.contains(0.0, 0.0));
        assert!(terrain.contains(100.0, 100.0));
        assert!(terrain.contains(50.0, 0.0));
        assert!(!terrain.contains(-0.1, 50.0));
        assert!(!terrain.contains(50.0, 100.1));
    }

    #[test]
    fn height_queries_pass_through_the_sampler() {
        let terrain = test_terrain(100.0);
        assert!((terrain.height_at(50.0, 50.0) - 5.0).abs() < 1e-6);
        assert_eq!(terrain.height_at(150.0, 50.0), 0.0);
    }
}
