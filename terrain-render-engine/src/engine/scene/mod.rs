//! Scene element construction and per-frame animation.
//!
//! Terrain mesh upload, skybox cubemap configuration, animated water plane,
//! model placement and lighting.

/// Directional sun light matching the original scene's light parameters.
pub mod lighting;

/// glTF model placement on the terrain surface via the height sampler.
pub mod models;

/// Cubemap skybox loading and camera attachment.
pub mod skybox;

/// Terrain construction: heightmap decode, mesh build and one-time GPU
/// upload, plus the `Terrain` resource exposing height queries.
pub mod terrain;

/// Semi-transparent reflective water plane with a fake wave animation.
pub mod water;
