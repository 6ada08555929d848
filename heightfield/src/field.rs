use std::path::Path;

use crate::error::HeightfieldError;

/// Normalised height sample grid decoded from a grayscale heightmap.
///
/// Samples are stored row-major (`index = z * width + x`) in `[0.0, 1.0]`
/// and never change after construction.
#[derive(Debug, Clone)]
pub struct HeightField {
    width: usize,
    depth: usize,
    samples: Vec<f32>,
}

impl HeightField {
    /// Decode a heightmap image into a normalised height field.
    ///
    /// Any raster format the `image` crate understands is accepted; the
    /// decoded pixels are collapsed to 8-bit luminance and each sample is
    /// divided by 255. Nearest-pixel ingestion only, no filtering.
    pub fn from_image(path: impl AsRef<Path>) -> Result<Self, HeightfieldError> {
        let path = path.as_ref();
        let luma = image::open(path)
            .map_err(|source| HeightfieldError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_luma8();

        let (width, depth) = luma.dimensions();
        let samples = luma
            .into_raw()
            .into_iter()
            .map(|value| value as f32 / 255.0)
            .collect();

        Ok(Self {
            width: width as usize,
            depth: depth as usize,
            samples,
        })
    }

    /// Build a height field from raw normalised samples.
    ///
    /// Used by tests and procedural generators. Panics if the sample count
    /// does not match `width * depth`.
    pub fn from_samples(width: usize, depth: usize, samples: Vec<f32>) -> Self {
        assert_eq!(
            samples.len(),
            width * depth,
            "sample count must equal width * depth"
        );
        Self {
            width,
            depth,
            samples,
        }
    }

    /// Grid width (number of samples along X).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid depth (number of samples along Z).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Normalised height at integer grid coordinates.
    ///
    /// Out-of-range coordinates return `0.0` rather than failing; callers
    /// probe opportunistically near the grid edges.
    pub fn get(&self, x: usize, z: usize) -> f32 {
        if x >= self.width || z >= self.depth {
            return 0.0;
        }
        self.samples[z * self.width + x]
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let field = HeightField::from_samples(3, 2, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(2, 0), 0.2);
        assert_eq!(field.get(0, 1), 0.3);
        assert_eq!(field.get(2, 1), 0.5);
    }

    #[test]
    fn out_of_range_lookup_is_zero() {
        let field = HeightField::from_samples(2, 2, vec![1.0; 4]);
        assert_eq!(field.get(2, 0), 0.0);
        assert_eq!(field.get(0, 2), 0.0);
    }

    #[test]
    #[should_panic(expected = "sample count")]
    fn mismatched_sample_count_panics() {
        HeightField::from_samples(3, 3, vec![0.0; 8]);
    }

    #[test]
    fn decodes_grayscale_png() {
        let path = std::env::temp_dir().join("heightfield_decode_test.png");
        let pixels = image::GrayImage::from_raw(2, 2, vec![0, 255, 128, 64]).unwrap();
        pixels.save(&path).unwrap();

        let field = HeightField::from_image(&path).unwrap();
        assert_eq!(field.width(), 2);
        assert_eq!(field.depth(), 2);
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(1, 0), 1.0);
        assert!((field.get(0, 1) - 128.0 / 255.0).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_load_error() {
        let result = HeightField::from_image("no/such/heightmap.png");
        assert!(matches!(result, Err(HeightfieldError::Load { .. })));
    }
}
