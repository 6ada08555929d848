use bevy::math::Affine2;
use bevy::prelude::*;

use constants::water::{
    WATER_COLOR, WAVE_BOB_AMPLITUDE, WAVE_BOB_FREQUENCY, WAVE_SCROLL_SPEED,
};

use crate::engine::assets::scene_manifest::SceneManifest;

/// Marker for the water plane entity, carrying its resting height.
#[derive(Component)]
pub struct Water {
    base_level: f32,
}

/// Spawn the subdivided water plane centred over the terrain.
pub fn spawn_water(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    manifest: &SceneManifest,
) {
    let settings = &manifest.water;

    let mesh = meshes.add(
        Plane3d::default()
            .mesh()
            .size(settings.size, settings.size)
            .subdivisions(settings.resolution),
    );

    let material = materials.add(StandardMaterial {
        base_color: WATER_COLOR,
        alpha_mode: AlphaMode::Blend,
        // Near-mirror surface so the skybox environment map reads on it.
        perceptual_roughness: 0.08,
        metallic: 0.0,
        reflectance: 0.8,
        ..default()
    });

    let center = manifest.terrain_center();
    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_xyz(center.x, settings.level, center.z),
        Water {
            base_level: settings.level,
        },
        Name::new("water"),
    ));
}

/// Fake waves: scroll the material UVs and bob the plane vertically.
pub fn animate_water(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut water_query: Query<(&mut Transform, &MeshMaterial3d<StandardMaterial>, &Water)>,
) {
    let elapsed = time.elapsed_secs();
    for (mut transform, material_handle, water) in &mut water_query {
        transform.translation.y = water.base_level
            + (elapsed * WAVE_BOB_FREQUENCY * std::f32::consts::TAU).sin() * WAVE_BOB_AMPLITUDE;

        if let Some(material) = materials.get_mut(&material_handle.0) {
            let scroll = elapsed * WAVE_SCROLL_SPEED;
            material.uv_transform =
                Affine2::from_translation(Vec2::new(scroll.fract(), (scroll * 0.7).fract()));
        }
    }
}
