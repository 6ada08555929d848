//! Scene loading pipeline.
//!
//! Runs during `AppState::Loading`: manifest parsing, synchronous terrain
//! construction, then scene element spawning with progress tracking.

/// Scene manifest loading and resource insertion from JSON configuration.
pub mod manifest_loader;

/// Loading progress tracking resource for the state transition.
pub mod progress;

/// Water, skybox and model spawning once the terrain is in place.
pub mod scene_spawner;
