use bevy::prelude::*;

/// Sun direction target: the light looks from this position towards the
/// origin, giving a low side angle with visible relief shading.
pub const LIGHT_POSITION: Vec3 = Vec3::new(20.0, 60.0, 80.0);

/// Slightly warm sunlight.
pub const LIGHT_COLOR: Color = Color::srgb(1.0, 1.0, 0.9);

/// Illuminance of the directional light (lux).
pub const LIGHT_ILLUMINANCE: f32 = 8_000.0;

/// Sky blue clear colour, visible until the skybox finishes loading.
pub const CLEAR_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
