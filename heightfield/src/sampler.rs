use crate::error::HeightfieldError;
use crate::field::HeightField;

/// Stateless bilinear height queries against a height field.
///
/// Maps world-space `(x, z)` back onto the sample grid the terrain mesh
/// was built from, so queries at a generated vertex's coordinates return
/// that vertex's stored height. Used to drop objects onto the terrain
/// surface at arbitrary positions.
#[derive(Debug, Clone)]
pub struct HeightSampler {
    field: HeightField,
    terrain_size: f32,
    height_scale: f32,
}

impl HeightSampler {
    /// Wrap a height field for world-space queries. Applies the same
    /// degenerate-grid guard as the mesh builder.
    pub fn new(
        field: HeightField,
        terrain_size: f32,
        height_scale: f32,
    ) -> Result<Self, HeightfieldError> {
        let (width, depth) = (field.width(), field.depth());
        if width < 2 || depth < 2 {
            return Err(HeightfieldError::DegenerateGrid { width, depth });
        }
        Ok(Self {
            field,
            terrain_size,
            height_scale,
        })
    }

    /// World-space terrain height at `(world_x, world_z)`.
    ///
    /// Coordinates outside `[0, terrain_size]` on either axis return `0.0`
    /// as a sentinel rather than an error; placement code probes past the
    /// terrain edge routinely. The far boundary itself counts as inside:
    /// the enclosing cell clamps to the last one so the edge vertex row is
    /// still sampled exactly.
    pub fn height_at(&self, world_x: f32, world_z: f32) -> f32 {
        let max_x = (self.field.width() - 1) as f32;
        let max_z = (self.field.depth() - 1) as f32;

        let grid_x = (world_x / self.terrain_size) * max_x;
        let grid_z = (world_z / self.terrain_size) * max_z;

        if grid_x < 0.0 || grid_z < 0.0 || grid_x > max_x || grid_z > max_z {
            return 0.0;
        }

        let x0 = (grid_x.floor() as usize).min(self.field.width() - 2);
        let z0 = (grid_z.floor() as usize).min(self.field.depth() - 2);

        let tx = grid_x - x0 as f32;
        let tz = grid_z - z0 as f32;

        let h00 = self.field.get(x0, z0);
        let h10 = self.field.get(x0 + 1, z0);
        let h01 = self.field.get(x0, z0 + 1);
        let h11 = self.field.get(x0 + 1, z0 + 1);

        let top = h00 * (1.0 - tx) + h10 * tx;
        let bottom = h01 * (1.0 - tx) + h11 * tx;

        (top * (1.0 - tz) + bottom * tz) * self.height_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::TerrainMesh;

    #[test]
    fn center_query_averages_the_corners() {
        // 2x2 corners [0, 1, 1, 0], size 10: the exact centre blends all
        // four corners equally.
        let field = HeightField::from_samples(2, 2, vec![0.0, 1.0, 1.0, 0.0]);
        let sampler = HeightSampler::new(field, 10.0, 1.0).unwrap();
        assert!((sampler.height_at(5.0, 5.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn vertex_round_trip() {
        let samples = vec![0.0, 0.2, 0.9, 0.4, 1.0, 0.6, 0.3, 0.7, 0.1];
        let field = HeightField::from_samples(3, 3, samples);
        let mesh = TerrainMesh::build(&field, 30.0, 12.0).unwrap();
        let sampler = HeightSampler::new(field, 30.0, 12.0).unwrap();

        for vertex in mesh.vertices() {
            let sampled = sampler.height_at(vertex.position.x, vertex.position.z);
            assert!(
                (sampled - vertex.position.y).abs() < 1e-4,
                "vertex at ({}, {}) stored {} but sampled {}",
                vertex.position.x,
                vertex.position.z,
                vertex.position.y,
                sampled
            );
        }
    }

    #[test]
    fn out_of_bounds_returns_zero() {
        let field = HeightField::from_samples(2, 2, vec![1.0; 4]);
        let sampler = HeightSampler::new(field, 10.0, 5.0).unwrap();
        assert_eq!(sampler.height_at(-0.1, 5.0), 0.0);
        assert_eq!(sampler.height_at(5.0, -0.1), 0.0);
        assert_eq!(sampler.height_at(10.1, 5.0), 0.0);
        assert_eq!(sampler.height_at(5.0, 10.1), 0.0);
        assert_eq!(sampler.height_at(-3.0, -3.0), 0.0);
    }

    #[test]
    fn far_edge_counts_as_inside() {
        let field = HeightField::from_samples(2, 2, vec![1.0; 4]);
        let sampler = HeightSampler::new(field, 10.0, 5.0).unwrap();
        assert!((sampler.height_at(10.0, 10.0) - 5.0).abs() < 1e-6);
        assert!((sampler.height_at(0.0, 10.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn interpolates_within_a_cell() {
        // Height rises linearly along X from 0 to 1 across a 10-unit span.
        let field = HeightField::from_samples(2, 2, vec![0.0, 1.0, 0.0, 1.0]);
        let sampler = HeightSampler::new(field, 10.0, 1.0).unwrap();
        for step in 0..=10 {
            let x = step as f32;
            assert!((sampler.height_at(x, 5.0) - x / 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn height_scale_multiplies_the_result() {
        let field = HeightField::from_samples(2, 2, vec![0.5; 4]);
        let sampler = HeightSampler::new(field, 10.0, 20.0).unwrap();
        assert!((sampler.height_at(5.0, 5.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        let field = HeightField::from_samples(1, 4, vec![0.0; 4]);
        assert!(matches!(
            HeightSampler::new(field, 10.0, 1.0),
            Err(HeightfieldError::DegenerateGrid { .. })
        ));
    }
}
