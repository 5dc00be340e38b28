//! Static vertex data.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { pos: [x, y, z] }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vertex {
    Vertex::new(x, y, z)
}

/// Two triangles covering clip space.
pub const QUAD_VERTICES: [Vertex; 6] = [
    v(-1.0, 1.0, 0.0),
    v(-1.0, -1.0, 0.0),
    v(1.0, -1.0, 0.0),
    v(-1.0, 1.0, 0.0),
    v(1.0, -1.0, 0.0),
    v(1.0, 1.0, 0.0),
];

/// Unit cube centered at the origin, six vertices per face.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // -Z
    v(-0.5, -0.5, -0.5),
    v(0.5, -0.5, -0.5),
    v(0.5, 0.5, -0.5),
    v(0.5, 0.5, -0.5),
    v(-0.5, 0.5, -0.5),
    v(-0.5, -0.5, -0.5),
    // +Z
    v(-0.5, -0.5, 0.5),
    v(0.5, -0.5, 0.5),
    v(0.5, 0.5, 0.5),
    v(0.5, 0.5, 0.5),
    v(-0.5, 0.5, 0.5),
    v(-0.5, -0.5, 0.5),
    // -X
    v(-0.5, 0.5, 0.5),
    v(-0.5, 0.5, -0.5),
    v(-0.5, -0.5, -0.5),
    v(-0.5, -0.5, -0.5),
    v(-0.5, -0.5, 0.5),
    v(-0.5, 0.5, 0.5),
    // +X
    v(0.5, 0.5, 0.5),
    v(0.5, 0.5, -0.5),
    v(0.5, -0.5, -0.5),
    v(0.5, -0.5, -0.5),
    v(0.5, -0.5, 0.5),
    v(0.5, 0.5, 0.5),
    // -Y
    v(-0.5, -0.5, -0.5),
    v(0.5, -0.5, -0.5),
    v(0.5, -0.5, 0.5),
    v(0.5, -0.5, 0.5),
    v(-0.5, -0.5, 0.5),
    v(-0.5, -0.5, -0.5),
    // +Y
    v(-0.5, 0.5, -0.5),
    v(0.5, 0.5, -0.5),
    v(0.5, 0.5, 0.5),
    v(0.5, 0.5, 0.5),
    v(-0.5, 0.5, 0.5),
    v(-0.5, 0.5, -0.5),
];

/// Immutable vertex buffer drawn as a triangle list.
pub struct Mesh {
    vbo: wgpu::Buffer,
    vertex_count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vbo,
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vbo
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_spans_clip_space() {
        for vert in QUAD_VERTICES {
            assert_eq!(vert.pos[0].abs(), 1.0);
            assert_eq!(vert.pos[1].abs(), 1.0);
        }
    }

    #[test]
    fn cube_vertices_lie_on_the_unit_cube() {
        for vert in CUBE_VERTICES {
            assert!(vert.pos.iter().all(|c| c.abs() == 0.5), "{vert:?}");
        }
    }

    #[test]
    fn each_cube_face_is_planar() {
        for face in CUBE_VERTICES.chunks(6) {
            let shared_axis = (0..3).any(|axis| face.iter().all(|v| v.pos[axis] == face[0].pos[axis]));
            assert!(shared_axis, "{face:?}");
        }
    }

    #[test]
    fn vertex_stride_is_three_floats() {
        assert_eq!(Vertex::layout().array_stride, 12);
    }
}
