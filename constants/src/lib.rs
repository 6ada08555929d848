//! Shared tunable values for the terrain scene.
//!
//! Compile-time defaults used by both the heightfield tooling and the
//! render engine. Runtime overrides come from the scene manifest JSON.

/// First-person fly camera speeds, sensitivities and projection settings.
pub mod camera;

/// Directional light and clear colour settings.
pub mod lighting;

/// Terrain dimensions and heightmap defaults.
pub mod terrain;

/// Water plane level, extent and wave animation settings.
pub mod water;
