use super::resources::{
    GradientUniform, InstanceData, MAX_DECORATION_INSTANCES, MAX_OBJECT_INSTANCES,
};
use super::Renderer;
use crate::error::ClientError;
use game_core::{srgb_to_linear, Session, Snapshot};
use wgpu::*;

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const CENTRE_LINE_WIDTH: f32 = 2.0;

pub fn draw_frame(renderer: &mut Renderer, session: &Session) -> Result<(), ClientError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws to the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let snapshot = session.snapshot();
    update_gradient(renderer, session, &snapshot);
    update_decoration(renderer, &snapshot);
    update_objects(renderer, session, &snapshot);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::WHITE),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        draw_decoration(renderer, &mut pass);
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Re-upload the gradient only when the palette changes
fn update_gradient(renderer: &mut Renderer, session: &Session, snapshot: &Snapshot) {
    if renderer.uploaded_palette == Some(snapshot.palette_index) {
        return;
    }
    let uniform = GradientUniform::new(&session.decoration().gradient(), snapshot.decoration_alpha);
    renderer
        .queue
        .write_buffer(&renderer.buffers.gradient, 0, bytemuck::cast_slice(&[uniform]));
    renderer.uploaded_palette = Some(snapshot.palette_index);
}

fn update_decoration(renderer: &mut Renderer, snapshot: &Snapshot) {
    let instances: Vec<InstanceData> = snapshot
        .shapes
        .iter()
        .take(MAX_DECORATION_INSTANCES)
        .map(|shape| InstanceData {
            transform: [shape.center.x, shape.center.y, shape.width, shape.height],
            tint: [1.0; 4],
            rotation: shape.rotation,
            _padding: [0.0; 3],
        })
        .collect();

    if !instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.decoration,
            0,
            bytemuck::cast_slice(&instances),
        );
    }
    renderer.decoration_count = instances.len() as u32;
}

fn update_objects(renderer: &mut Renderer, session: &Session, snapshot: &Snapshot) {
    let config = session.config();
    let grey = srgb_to_linear(200.0 / 255.0);

    let mut current = vec![InstanceData::rect(
        config.court_width / 2.0 - CENTRE_LINE_WIDTH / 2.0,
        0.0,
        CENTRE_LINE_WIDTH,
        config.court_height,
        [grey, grey, grey, 1.0],
    )];
    current.extend(
        snapshot
            .paddles
            .iter()
            .map(|p| InstanceData::rect(p.x, p.y, p.width, p.height, BLACK)),
    );
    current.extend(
        snapshot
            .ball
            .iter()
            .map(|b| InstanceData::rect(b.pos.x, b.pos.y, b.size, b.size, BLACK)),
    );
    current.truncate(MAX_OBJECT_INSTANCES);

    if renderer.last_objects.as_ref() != Some(&current) {
        renderer
            .queue
            .write_buffer(&renderer.buffers.objects, 0, bytemuck::cast_slice(&current));
        renderer.object_count = current.len() as u32;
        renderer.last_objects = Some(current);
    }
}

fn draw_decoration<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    if renderer.decoration_count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.decoration_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_bind_group(1, &renderer.gradient_bind_group, &[]);

    pass.set_vertex_buffer(0, renderer.circle_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.decoration.slice(..));
    pass.draw_indexed(0..renderer.circle_mesh.index_count, 0, 0..renderer.decoration_count);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.solid_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Centre line, paddles and ball all use the unit square
    pass.set_vertex_buffer(0, renderer.rect_mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.objects.slice(..));
    pass.draw_indexed(0..renderer.rect_mesh.index_count, 0, 0..renderer.object_count);
}
