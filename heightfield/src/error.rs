use std::path::PathBuf;
use thiserror::Error;

/// Failures during terrain construction. Both variants are fatal to the
/// terrain being built; callers abort scene setup or skip the feature.
#[derive(Debug, Error)]
pub enum HeightfieldError {
    /// The heightmap file could not be opened or decoded.
    #[error("failed to load heightmap {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A 1-pixel-wide or 1-pixel-tall heightmap. Cell size computation
    /// divides by `dimension - 1`, so both dimensions must be at least 2.
    #[error("degenerate heightmap grid {width}x{depth}: both dimensions must be >= 2")]
    DegenerateGrid { width: usize, depth: usize },
}
