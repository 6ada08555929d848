use bevy::prelude::*;

use constants::lighting::{LIGHT_COLOR, LIGHT_ILLUMINANCE, LIGHT_POSITION};

/// Directional sun light aimed from the original scene's light position
/// towards the origin, low enough for visible relief shading.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            color: LIGHT_COLOR,
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
