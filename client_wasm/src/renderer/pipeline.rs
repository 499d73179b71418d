use super::resources::InstanceData;
use super::shaders::{gradient_shader, solid_shader};
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub solid_pipeline: RenderPipeline,
    pub decoration_pipeline: RenderPipeline,
    pub camera_layout: BindGroupLayout,
    pub gradient_layout: BindGroupLayout,
}

fn uniform_layout(device: &Device, label: &str, visibility: ShaderStages) -> BindGroupLayout {
    device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

const INSTANCE_ATTRIBUTES: [VertexAttribute; 3] = vertex_attr_array![
    1 => Float32x4, // transform
    2 => Float32x4, // tint
    3 => Float32    // rotation
];

fn instanced_pipeline(
    device: &Device,
    label: &str,
    source: String,
    layout: &PipelineLayout,
    format: TextureFormat,
) -> RenderPipeline {
    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some(label),
        source: ShaderSource::Wgsl(source.into()),
    });

    let vertex_buffer_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: VertexStepMode::Vertex,
        attributes: &[VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: VertexFormat::Float32x2,
        }],
    };

    let instance_buffer_layout = VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceData>() as u64,
        step_mode: VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    };

    device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_buffer_layout, instance_buffer_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

pub fn create_pipelines(device: &Device, format: TextureFormat) -> PipelineState {
    // 1. Bind group layouts
    let camera_layout = uniform_layout(device, "Camera Bind Group Layout", ShaderStages::VERTEX);
    let gradient_layout =
        uniform_layout(device, "Gradient Bind Group Layout", ShaderStages::FRAGMENT);

    // 2. Court objects: flat colour
    let solid_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Solid Pipeline Layout"),
        bind_group_layouts: &[&camera_layout],
        push_constant_ranges: &[],
    });
    let solid_pipeline =
        instanced_pipeline(device, "Solid Pipeline", solid_shader(), &solid_layout, format);

    // 3. Background ellipses: palette gradient at reduced opacity
    let decoration_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Decoration Pipeline Layout"),
        bind_group_layouts: &[&camera_layout, &gradient_layout],
        push_constant_ranges: &[],
    });
    let decoration_pipeline = instanced_pipeline(
        device,
        "Decoration Pipeline",
        gradient_shader(),
        &decoration_layout,
        format,
    );

    PipelineState {
        solid_pipeline,
        decoration_pipeline,
        camera_layout,
        gradient_layout,
    }
}
