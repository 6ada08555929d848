/// World-space span of the terrain along X and Z (world units).
pub const TERRAIN_SIZE: f32 = 100.0;

/// Multiplier applied to normalised heightmap samples to get world-space Y.
pub const HEIGHT_SCALE: f32 = 10.0;

/// Heightmap used when the scene manifest does not name one.
pub const DEFAULT_HEIGHTMAP: &str = "assets/textures/heightmap.png";

/// Tiling factor for the grass texture across the terrain surface.
pub const TERRAIN_TEXTURE_TILING: f32 = 16.0;
