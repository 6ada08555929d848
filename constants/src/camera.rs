use bevy::prelude::*;

/// Where the fly camera spawns before the terrain has loaded.
pub const SPAWN_POSITION: Vec3 = Vec3::new(20.0, 30.0, 40.0);

/// Spawn orientation, aimed from `SPAWN_POSITION` at the terrain centre.
/// Kept as explicit euler angles so the controller's yaw/pitch state can
/// start in agreement with the spawn transform.
pub const SPAWN_YAW: f32 = -1.893;
pub const SPAWN_PITCH: f32 = -0.759;

/// Base fly speed in world units per second.
pub const FLY_SPEED: f32 = 25.0;

/// Speed multiplier while a sprint key is held.
pub const SPRINT_MULTIPLIER: f32 = 3.0;

/// Mouse look sensitivity (radians per pixel of mouse motion).
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch is clamped just short of straight up/down to avoid gimbal flip.
pub const PITCH_LIMIT: f32 = 1.54;

/// Vertical field of view bounds for scroll-wheel zoom (degrees).
pub const FOV_MIN_DEGREES: f32 = 20.0;
pub const FOV_MAX_DEGREES: f32 = 70.0;

/// Near and far clip planes. The far plane is generous so the whole
/// terrain stays visible from the spawn point.
pub const CLIP_NEAR: f32 = 0.1;
pub const CLIP_FAR: f32 = 500.0;
