//! Unit meshes, centred on the origin and spanning -0.5..0.5

use wgpu::util::DeviceExt;
use wgpu::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Unit square, for paddles, ball and the centre line
pub fn rectangle() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex { position: [-0.5, -0.5] },
        Vertex { position: [0.5, -0.5] },
        Vertex { position: [0.5, 0.5] },
        Vertex { position: [-0.5, 0.5] },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Unit-diameter disc as a triangle fan, for background ellipses
pub fn circle(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = vec![Vertex { position: [0.0, 0.0] }];
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos() * 0.5, angle.sin() * 0.5],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        indices.push(0);
        indices.push(i + 1);
        indices.push((i + 1) % segments + 1);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, label: &str, (vertices, indices): (Vec<Vertex>, Vec<u16>)) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
