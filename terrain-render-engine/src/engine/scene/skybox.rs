use bevy::core_pipeline::Skybox;
use bevy::pbr::environment_map::EnvironmentMapLight;
use bevy::prelude::*;
use bevy::render::render_resource::{TextureViewDescriptor, TextureViewDimension};

use crate::engine::assets::scene_manifest::SceneManifest;

#[derive(Resource, Default)]
pub struct SkyboxLoader {
    handle: Option<Handle<Image>>,
    configured: bool,
}

/// Kick off the skybox image load if the manifest names one.
pub fn start_skybox_load(
    loader: &mut SkyboxLoader,
    asset_server: &AssetServer,
    manifest: &SceneManifest,
) {
    match &manifest.skybox {
        Some(path) => {
            info!("Loading skybox cubemap: {path}");
            loader.handle = Some(asset_server.load(path));
        }
        None => warn!("no skybox in scene manifest, keeping clear colour"),
    }
}

/// Reinterpret the stacked cubemap image and attach it to the camera.
///
/// The source image holds the six faces stacked vertically (+X, -X, +Y,
/// -Y, +Z, -Z). Once decoded it is reinterpreted as a 6-layer array and
/// viewed as a cube, then attached as both the skybox and an environment
/// map so the water picks up sky reflections.
pub fn configure_skybox_when_ready(
    mut loader: ResMut<SkyboxLoader>,
    mut images: ResMut<Assets<Image>>,
    mut commands: Commands,
    cameras: Query<Entity, With<Camera3d>>,
) {
    if loader.configured {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };
    let Some(image) = images.get_mut(&handle) else {
        return;
    };

    if image.texture_descriptor.array_layer_count() == 1 {
        if !is_stacked_cubemap(image.width(), image.height()) {
            warn!(
                "skybox image is {}x{}, expected height = 6 x width; keeping clear colour",
                image.width(),
                image.height()
            );
            loader.handle = None;
            loader.configured = true;
            return;
        }
        image.reinterpret_stacked_2d_as_array(6);
        image.texture_view_descriptor = Some(TextureViewDescriptor {
            dimension: Some(TextureViewDimension::Cube),
            ..default()
        });
    }

    for camera in &cameras {
        commands.entity(camera).insert((
            Skybox {
                image: handle.clone(),
                brightness: 1000.0,
                rotation: Quat::IDENTITY,
            },
            EnvironmentMapLight {
                diffuse_map: handle.clone(),
                specular_map: handle.clone(),
                intensity: 400.0,
                ..default()
            },
        ));
    }

    info!("✓ Skybox cubemap configured");
    loader.configured = true;
}

/// A stacked cubemap holds exactly six square faces, so the image must be
/// six times as tall as it is wide.
fn is_stacked_cubemap(width: u32, height: u32) -> bool {
    width > 0 && height == 6 * width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_cubemap_must_be_six_square_faces() {
        assert!(is_stacked_cubemap(64, 384));
        assert!(is_stacked_cubemap(1, 6));
        assert!(!is_stacked_cubemap(64, 64));
        assert!(!is_stacked_cubemap(64, 320));
        assert!(!is_stacked_cubemap(64, 448));
        assert!(!is_stacked_cubemap(0, 0));
    }
}
