//! Triangle lists for terrain and roads

use glam::Vec3;

use super::vertex::Vertex;
use crate::sim::{HeightField, RoadSurface};

/// Face normal of triangle `a, b, c`
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// Two triangles per grid cell, split along the same diagonal the altitude
/// interpolation uses. Texture coordinates repeat once per cell.
pub fn terrain_mesh(terrain: &HeightField) -> Vec<Vertex> {
    let cells_x = terrain.width().saturating_sub(1);
    let cells_z = terrain.depth().saturating_sub(1);
    let mut vertices = Vec::with_capacity(cells_x * cells_z * 6);

    let corner = |x: usize, z: usize| {
        let h = terrain.grid_altitude(x, z).unwrap_or(0.0);
        Vec3::new(x as f32, h, z as f32)
    };

    for z in 0..cells_z {
        for x in 0..cells_x {
            let near_left = corner(x, z);
            let far_left = corner(x, z + 1);
            let near_right = corner(x + 1, z);
            let far_right = corner(x + 1, z + 1);

            let n = face_normal(near_left, far_left, near_right);
            vertices.push(Vertex::new(near_left, n, [0.0, 0.0]));
            vertices.push(Vertex::new(far_left, n, [0.0, 1.0]));
            vertices.push(Vertex::new(near_right, n, [1.0, 0.0]));

            let n = face_normal(near_right, far_left, far_right);
            vertices.push(Vertex::new(near_right, n, [1.0, 0.0]));
            vertices.push(Vertex::new(far_left, n, [0.0, 1.0]));
            vertices.push(Vertex::new(far_right, n, [1.0, 1.0]));
        }
    }

    vertices
}

/// Road ribbon triangles, facing straight up
pub fn road_mesh(surface: &RoadSurface) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(surface.quads.len() * 6);
    for quad in &surface.quads {
        vertices.push(Vertex::new(quad.current_left, Vec3::Y, [0.0, 0.0]));
        vertices.push(Vertex::new(quad.current_right, Vec3::Y, [1.0, 0.0]));
        vertices.push(Vertex::new(quad.next_right, Vec3::Y, [1.0, 1.0]));

        vertices.push(Vertex::new(quad.current_left, Vec3::Y, [0.0, 0.0]));
        vertices.push(Vertex::new(quad.next_right, Vec3::Y, [1.0, 1.0]));
        vertices.push(Vertex::new(quad.next_left, Vec3::Y, [0.0, 1.0]));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Road;

    #[test]
    fn test_flat_terrain_faces_up() {
        let terrain = HeightField::new(3, 4);
        let mesh = terrain_mesh(&terrain);
        assert_eq!(mesh.len(), 2 * 3 * 6);
        assert!(mesh.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_mesh_matches_altitude() {
        let mut terrain = HeightField::new(2, 2);
        terrain.set_grid_altitude(1, 1, 1.0);
        let mesh = terrain_mesh(&terrain);
        // Centroid of each triangle sits on the interpolated surface
        for tri in mesh.chunks_exact(3) {
            let c = tri
                .iter()
                .map(|v| Vec3::from_array(v.position))
                .sum::<Vec3>()
                / 3.0;
            assert!((terrain.altitude(c.x, c.z) - c.y).abs() < 1e-5);
        }
    }

    #[test]
    fn test_single_row_has_no_cells() {
        assert!(terrain_mesh(&HeightField::new(5, 1)).is_empty());
    }

    #[test]
    fn test_road_mesh() {
        let terrain = HeightField::new(5, 5);
        let road = Road::from_spine(0.5, &[0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0, 1.0]).unwrap();
        let surface = road.surface(&terrain).unwrap();
        let mesh = road_mesh(&surface);
        assert_eq!(mesh.len(), surface.quads.len() * 6);
        assert!(mesh.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }
}
