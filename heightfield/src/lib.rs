//! CPU-side terrain construction from grayscale heightmaps.
//!
//! Decodes a heightmap image into a normalised height field, builds a
//! triangulated vertex grid with smooth normals, and answers bilinear
//! height queries at arbitrary world-space coordinates. Everything here is
//! single-pass and immutable after construction; the render engine uploads
//! the finished buffers once and keeps the sampler around for object
//! placement.

/// Error types for heightmap decoding and grid validation.
pub mod error;

/// Normalised height sample grid decoded from a heightmap image.
pub mod field;

/// Vertex grid and triangle index generation.
pub mod mesh;

/// Per-vertex smooth normal estimation via face-normal accumulation.
pub mod normals;

/// Bilinear world-space height queries for placing objects on the surface.
pub mod sampler;

pub use error::HeightfieldError;
pub use field::HeightField;
pub use mesh::{TerrainMesh, TerrainVertex};
pub use sampler::HeightSampler;
