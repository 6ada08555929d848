use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub terrain_built: bool,
    pub scene_spawned: bool,
}
