pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{circle, rectangle, Mesh};
use game_core::{Config, Session};
use resources::{GameBuffers, InstanceData};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    // Pipelines
    pub solid_pipeline: RenderPipeline,
    pub decoration_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,
    pub gradient_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,

    // State
    pub uploaded_palette: Option<usize>,
    pub last_objects: Option<Vec<InstanceData>>,
    pub decoration_count: u32,
    pub object_count: u32,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement, config: &Config) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(config.court_width, config.court_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = Mesh::new(&ctx.device, "Rect", rectangle());
        let circle_mesh = Mesh::new(&ctx.device, "Circle", circle(64));

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let gradient_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Gradient Bind Group"),
            layout: &pipes.gradient_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.gradient.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            solid_pipeline: pipes.solid_pipeline,
            decoration_pipeline: pipes.decoration_pipeline,
            camera_bind_group,
            gradient_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
            uploaded_palette: None,
            last_objects: None,
            decoration_count: 0,
            object_count: 0,
        })
    }

    pub fn draw(&mut self, session: &Session) -> Result<(), ClientError> {
        draw::draw_frame(self, session)
    }
}
