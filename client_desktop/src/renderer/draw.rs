use wgpu::*;

use super::Renderer;
use crate::canvas::{clear_color, DrawList, Shape};
use crate::error::RenderError;

pub fn draw_frame(renderer: &mut Renderer, list: &DrawList) -> Result<(), RenderError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            tracing::warn!("surface lost or outdated, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            tracing::warn!("timed out waiting for surface texture, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    upload_instances(renderer, list);

    {
        let clear = list.clear.unwrap_or(game_core::Color::BLACK);
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear_color(clear)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_runs(renderer, &mut pass, list);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload_instances(renderer: &mut Renderer, list: &DrawList) {
    if list.instances.is_empty() {
        return;
    }
    renderer
        .buffers
        .ensure_instance_capacity(&renderer.device, list.instances.len());
    renderer.queue.write_buffer(
        &renderer.buffers.instances,
        0,
        bytemuck::cast_slice(&list.instances),
    );
}

fn draw_runs(renderer: &Renderer, pass: &mut RenderPass<'_>, list: &DrawList) {
    if list.runs.is_empty() {
        return;
    }

    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    for run in &list.runs {
        let mesh = match run.shape {
            Shape::Quad => &renderer.meshes.0,
            Shape::Circle => &renderer.meshes.1,
        };
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..mesh.index_count, 0, run.start..run.start + run.count);
    }
}
