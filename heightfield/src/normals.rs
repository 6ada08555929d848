use glam::Vec3;

use crate::mesh::TerrainVertex;

/// Recompute per-vertex smooth normals in place.
///
/// Every triangle's unnormalised face normal (cross product of its edge
/// vectors) is accumulated onto its three vertices, then each accumulator
/// is normalised. Longer faces weigh more, which is the behaviour wanted
/// here: big triangles dominate the shading. A vertex touched by no
/// triangle keeps a zero accumulator and falls back to straight up.
pub fn smooth_normals(vertices: &mut [TerrainVertex], indices: &[u32]) {
    for vertex in vertices.iter_mut() {
        vertex.normal = Vec3::ZERO;
    }

    for tri in indices.chunks_exact(3) {
        let v0 = vertices[tri[0] as usize].position;
        let v1 = vertices[tri[1] as usize].position;
        let v2 = vertices[tri[2] as usize].position;

        let face_normal = (v1 - v0).cross(v2 - v0);

        vertices[tri[0] as usize].normal += face_normal;
        vertices[tri[1] as usize].normal += face_normal;
        vertices[tri[2] as usize].normal += face_normal;
    }

    for vertex in vertices.iter_mut() {
        vertex.normal = vertex.normal.normalize_or(Vec3::Y);
    }
}
