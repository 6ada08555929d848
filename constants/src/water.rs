use bevy::prelude::*;

/// Water surface height (world-space Y). Sits just above the terrain's
/// zero level so valleys flood while peaks stay dry.
pub const WATER_LEVEL: f32 = 0.2;

/// Side length of the water plane. Larger than the terrain so the water
/// reaches the horizon in every direction.
pub const WATER_SIZE: f32 = 500.0;

/// Subdivisions per side of the water plane mesh.
pub const WATER_RESOLUTION: u32 = 100;

/// Deep sea blue, rendered semi-transparent.
pub const WATER_COLOR: Color = Color::srgba(0.1, 0.3, 0.5, 0.6);

/// UV scroll speed for the fake wave animation (UV units per second).
pub const WAVE_SCROLL_SPEED: f32 = 0.03;

/// Amplitude and frequency of the vertical bob applied to the plane.
pub const WAVE_BOB_AMPLITUDE: f32 = 0.05;
pub const WAVE_BOB_FREQUENCY: f32 = 0.5;
