//! Scene description assets.
//!
//! The scene manifest is the single runtime configuration surface: it names
//! the heightmap, terrain scaling, textures and model placements.

/// Scene manifest containing terrain parameters, water settings and model
/// placements, deserialised from JSON.
pub mod scene_manifest;
