use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Complete scene description as a Bevy asset. Mirrors JSON structure
/// exactly; every field except the model list has a compile-time default
/// from the `constants` crate, so a minimal manifest can be just `{}`.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    /// Heightmap image, read from the filesystem relative to the working
    /// directory (decoded on the CPU, not through the asset server).
    #[serde(default = "default_heightmap")]
    pub heightmap: String,
    /// World-space span of the terrain along X and Z.
    #[serde(default = "default_terrain_size")]
    pub terrain_size: f32,
    /// Multiplier from normalised heightmap samples to world-space Y.
    #[serde(default = "default_height_scale")]
    pub height_scale: f32,
    /// Terrain surface texture, resolved through the asset server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain_texture: Option<String>,
    /// Vertically stacked cubemap image (+X, -X, +Y, -Y, +Z, -Z) for the
    /// skybox, resolved through the asset server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skybox: Option<String>,
    #[serde(default)]
    pub water: WaterSettings,
    #[serde(default)]
    pub models: Vec<ModelPlacement>,
}

impl SceneManifest {
    /// Terrain centre at ground level, used to aim the spawn camera.
    pub fn terrain_center(&self) -> Vec3 {
        Vec3::new(self.terrain_size * 0.5, 0.0, self.terrain_size * 0.5)
    }
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            heightmap: default_heightmap(),
            terrain_size: default_terrain_size(),
            height_scale: default_height_scale(),
            terrain_texture: None,
            skybox: None,
            water: WaterSettings::default(),
            models: Vec::new(),
        }
    }
}

/// Water plane parameters. Disabled scenes simply omit the plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Water surface height (world-space Y).
    #[serde(default = "default_water_level")]
    pub level: f32,
    /// Side length of the water plane.
    #[serde(default = "default_water_size")]
    pub size: f32,
    /// Subdivisions per side of the plane mesh.
    #[serde(default = "default_water_resolution")]
    pub resolution: u32,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_water_level(),
            size: default_water_size(),
            resolution: default_water_resolution(),
        }
    }
}

/// One glTF scene dropped onto the terrain surface. The Y coordinate comes
/// from the height sampler at `(x, z)`, plus an optional offset for models
/// whose origin is not at their base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPlacement {
    /// glTF file, resolved through the asset server.
    pub path: String,
    pub x: f32,
    pub z: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub yaw_degrees: f32,
    #[serde(default)]
    pub y_offset: f32,
}

fn default_heightmap() -> String {
    constants::terrain::DEFAULT_HEIGHTMAP.to_string()
}

fn default_terrain_size() -> f32 {
    constants::terrain::TERRAIN_SIZE
}

fn default_height_scale() -> f32 {
    constants::terrain::HEIGHT_SCALE
}

fn default_water_level() -> f32 {
    constants::water::WATER_LEVEL
}

fn default_water_size() -> f32 {
    constants::water::WATER_SIZE
}

fn default_water_resolution() -> u32 {
    constants::water::WATER_RESOLUTION
}

fn default_scale() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_manifest_uses_defaults() {
        let manifest: SceneManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest.terrain_size, constants::terrain::TERRAIN_SIZE);
        assert_eq!(manifest.height_scale, constants::terrain::HEIGHT_SCALE);
        assert!(manifest.water.enabled);
        assert!(manifest.models.is_empty());
        assert!(manifest.skybox.is_none());
    }

    #[test]
    fn full_manifest_round_trips() {
        let manifest = SceneManifest {
            heightmap: "assets/textures/heightmap.png".into(),
            terrain_size: 200.0,
            height_scale: 25.0,
            terrain_texture: Some("textures/grass.jpg".into()),
            skybox: Some("textures/skybox.png".into()),
            water: WaterSettings {
                enabled: false,
                level: 1.5,
                size: 300.0,
                resolution: 64,
            },
            models: vec![ModelPlacement {
                path: "models/tree.glb".into(),
                x: 40.0,
                z: 60.0,
                scale: 2.0,
                yaw_degrees: 90.0,
                y_offset: 0.0,
            }],
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let loaded: SceneManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.terrain_size, 200.0);
        assert!(!loaded.water.enabled);
        assert_eq!(loaded.models.len(), 1);
        assert_eq!(loaded.models[0].yaw_degrees, 90.0);
    }

    #[test]
    fn placement_scale_defaults_to_one() {
        let json = r#"{"models": [{"path": "models/rock.glb", "x": 1.0, "z": 2.0}]}"#;
        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.models[0].scale, 1.0);
        assert_eq!(manifest.models[0].y_offset, 0.0);
    }
}
