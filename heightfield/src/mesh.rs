use glam::{Vec2, Vec3};

use crate::error::HeightfieldError;
use crate::field::HeightField;
use crate::normals::smooth_normals;

/// One vertex of the terrain grid. Matches the GPU vertex layout:
/// position, normal, texcoord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub texcoord: Vec2,
}

/// Triangulated terrain grid built from a height field.
///
/// One vertex per height sample in row-major order
/// (`vertex index = z * width + x`), two counter-clockwise triangles per
/// grid cell. Built once, uploaded once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    vertices: Vec<TerrainVertex>,
    indices: Vec<u32>,
}

impl TerrainMesh {
    /// Generate the vertex grid and index buffer for a height field.
    ///
    /// `terrain_size` is the world-space span along X and Z;
    /// `height_scale` multiplies the normalised samples into world-space Y.
    /// Grids narrower than 2 samples in either dimension are rejected.
    pub fn build(
        field: &HeightField,
        terrain_size: f32,
        height_scale: f32,
    ) -> Result<Self, HeightfieldError> {
        let (width, depth) = (field.width(), field.depth());
        if width < 2 || depth < 2 {
            return Err(HeightfieldError::DegenerateGrid { width, depth });
        }

        let cell_size_x = terrain_size / (width - 1) as f32;
        let cell_size_z = terrain_size / (depth - 1) as f32;

        let mut vertices = Vec::with_capacity(width * depth);
        for z in 0..depth {
            for x in 0..width {
                vertices.push(TerrainVertex {
                    position: Vec3::new(
                        x as f32 * cell_size_x,
                        field.get(x, z) * height_scale,
                        z as f32 * cell_size_z,
                    ),
                    normal: Vec3::Y,
                    texcoord: Vec2::new(
                        x as f32 / (width - 1) as f32,
                        z as f32 / (depth - 1) as f32,
                    ),
                });
            }
        }

        let mut indices = Vec::with_capacity(6 * (width - 1) * (depth - 1));
        for z in 0..depth - 1 {
            for x in 0..width - 1 {
                let top_left = (z * width + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = top_left + width as u32;
                let bottom_right = bottom_left + 1;

                // Two counter-clockwise triangles per cell.
                indices.extend_from_slice(&[top_left, bottom_left, top_right]);
                indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
            }
        }

        smooth_normals(&mut vertices, &indices);

        Ok(Self { vertices, indices })
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex positions as flat arrays, ready for GPU upload.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.position.to_array()).collect()
    }

    /// Vertex normals as flat arrays, ready for GPU upload.
    pub fn normals(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.normal.to_array()).collect()
    }

    /// Texture coordinates as flat arrays, ready for GPU upload.
    pub fn uvs(&self) -> Vec<[f32; 2]> {
        self.vertices.iter().map(|v| v.texcoord.to_array()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_field(width: usize, depth: usize, value: f32) -> HeightField {
        HeightField::from_samples(width, depth, vec![value; width * depth])
    }

    #[test]
    fn index_buffer_shape() {
        for (width, depth) in [(2, 2), (3, 3), (5, 2), (2, 7), (16, 9)] {
            let mesh = TerrainMesh::build(&flat_field(width, depth, 0.5), 10.0, 1.0).unwrap();
            assert_eq!(mesh.vertices().len(), width * depth);
            assert_eq!(mesh.indices().len(), 6 * (width - 1) * (depth - 1));
            let vertex_count = (width * depth) as u32;
            assert!(mesh.indices().iter().all(|&i| i < vertex_count));
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        // Viewed from above (+Y), CCW winding means the cross product of
        // the edges points up for every triangle of a flat grid.
        let mesh = TerrainMesh::build(&flat_field(3, 3, 0.0), 2.0, 1.0).unwrap();
        for tri in mesh.indices().chunks(3) {
            let v0 = mesh.vertices()[tri[0] as usize].position;
            let v1 = mesh.vertices()[tri[1] as usize].position;
            let v2 = mesh.vertices()[tri[2] as usize].position;
            assert!((v1 - v0).cross(v2 - v0).y > 0.0);
        }
    }

    #[test]
    fn vertex_positions_and_uvs_span_the_grid() {
        let mesh = TerrainMesh::build(&flat_field(3, 3, 0.0), 2.0, 1.0).unwrap();
        let first = mesh.vertices()[0];
        let last = mesh.vertices()[8];
        assert_eq!(first.position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(last.position, Vec3::new(2.0, 0.0, 2.0));
        assert_eq!(first.texcoord, Vec2::new(0.0, 0.0));
        assert_eq!(last.texcoord, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn flat_grid_scenario() {
        // 3x3 heightmap, all samples 1.0, size 2, scale 10: nine vertices,
        // eight triangles, every Y at 10 and every normal straight up.
        let mesh = TerrainMesh::build(&flat_field(3, 3, 1.0), 2.0, 10.0).unwrap();
        assert_eq!(mesh.vertices().len(), 9);
        assert_eq!(mesh.indices().len(), 24);
        for vertex in mesh.vertices() {
            assert!((vertex.position.y - 10.0).abs() < 1e-6);
            assert!(vertex.normal.abs_diff_eq(Vec3::Y, 1e-6));
        }
    }

    #[test]
    fn zero_height_scale_is_allowed() {
        let field = HeightField::from_samples(2, 2, vec![0.0, 1.0, 1.0, 0.0]);
        let mesh = TerrainMesh::build(&field, 10.0, 0.0).unwrap();
        assert!(mesh.vertices().iter().all(|v| v.position.y == 0.0));
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        for (width, depth) in [(1, 5), (5, 1), (1, 1)] {
            let result = TerrainMesh::build(&flat_field(width, depth, 0.0), 10.0, 1.0);
            assert!(matches!(
                result,
                Err(HeightfieldError::DegenerateGrid { .. })
            ));
        }
    }
}
