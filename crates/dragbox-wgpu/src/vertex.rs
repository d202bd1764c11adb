use bytemuck::{Pod, Zeroable};

/// Vertex of a screen-space textured quad.
///
/// Solid rectangles sample a white texel, so `color` alone decides their fill.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in window pixels, origin top-left
    pub position: [f32; 2],
    pub uv: [f32; 2],
    /// Linear RGBA multiplier
    pub color: [f32; 4],
}

impl QuadVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Two triangles covering `[x, y, x + w, y + h]`.
    pub fn quad(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> [QuadVertex; 6] {
        let v = |px: f32, py: f32, u: f32, t: f32| QuadVertex {
            position: [px, py],
            uv: [u, t],
            color,
        };
        let (x1, y1) = (x + w, y + h);
        [
            v(x, y, 0.0, 0.0),
            v(x1, y, 1.0, 0.0),
            v(x1, y1, 1.0, 1.0),
            v(x, y, 0.0, 0.0),
            v(x1, y1, 1.0, 1.0),
            v(x, y1, 0.0, 1.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_rect() {
        let quad = QuadVertex::quad(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_vertex_stride() {
        assert_eq!(QuadVertex::desc().array_stride, 32);
    }
}
