//! Vertex types for 3D world meshes

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Lit, textured vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: [f32; 2]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for world elements (used when textures are off)
pub mod colors {
    pub const SKY: [f32; 4] = [0.529, 0.808, 0.980, 1.0];
    pub const NIGHT_SKY: [f32; 4] = [0.0, 0.094, 0.282, 1.0];
    pub const PORTAL_FIRST: [f32; 4] = [0.118, 0.565, 1.0, 1.0];
    pub const PORTAL_SECOND: [f32; 4] = [1.0, 0.255, 0.0, 1.0];
    pub const ENEMY_BODY: [f32; 4] = [0.098, 0.067, 0.125, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_cast_to_bytes() {
        let v = [Vertex::new(Vec3::ONE, Vec3::Y, [0.0, 1.0])];
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 32);
    }
}
