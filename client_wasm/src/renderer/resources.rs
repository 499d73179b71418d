use crate::camera::{Camera, CameraUniform};
use game_core::GradientStop;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Largest gradient the shader accepts
pub const MAX_GRADIENT_STOPS: usize = 128;

/// Paddles, ball and the centre line
pub const MAX_OBJECT_INSTANCES: usize = 4;

pub const MAX_DECORATION_INSTANCES: usize = 32;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, width, height
    pub tint: [f32; 4],      // rgba, linear
    pub rotation: f32,
    pub _padding: [f32; 3],
}

impl InstanceData {
    /// Axis-aligned box from its top-left corner, as the simulation stores it
    pub fn rect(x: f32, y: f32, width: f32, height: f32, tint: [f32; 4]) -> Self {
        Self {
            transform: [x + width / 2.0, y + height / 2.0, width, height],
            tint,
            rotation: 0.0,
            _padding: [0.0; 3],
        }
    }
}

/// Gradient uniform (matches WGSL struct Gradient)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniform {
    colors: [[f32; 4]; MAX_GRADIENT_STOPS],
    count: u32,
    alpha: f32,
    _padding: [f32; 2],
}

impl GradientUniform {
    /// Stops are evenly spaced, so only their colours are uploaded
    pub fn new(stops: &[GradientStop], alpha: f32) -> Self {
        let mut colors = [[0.0; 4]; MAX_GRADIENT_STOPS];
        let count = stops.len().min(MAX_GRADIENT_STOPS);
        for (slot, stop) in colors.iter_mut().zip(stops) {
            *slot = stop.color;
        }
        Self {
            colors,
            count: count as u32,
            alpha,
            _padding: [0.0; 2],
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub gradient: Buffer,
    pub objects: Buffer,
    pub decoration: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let gradient = device.create_buffer(&BufferDescriptor {
        label: Some("Gradient Buffer"),
        size: std::mem::size_of::<GradientUniform>() as u64,
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let instance_size = std::mem::size_of::<InstanceData>() as u64;

    let objects = device.create_buffer(&BufferDescriptor {
        label: Some("Object Instance Buffer"),
        size: instance_size * MAX_OBJECT_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let decoration = device.create_buffer(&BufferDescriptor {
        label: Some("Decoration Instance Buffer"),
        size: instance_size * MAX_DECORATION_INSTANCES as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        gradient,
        objects,
        decoration,
    }
}
