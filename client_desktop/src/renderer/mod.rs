pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use winit::window::Window;
use wgpu::*;

use crate::camera::{Camera, CameraUniform};
use crate::canvas::DrawList;
use crate::error::RenderError;
use crate::mesh::{create_circle, create_quad, Mesh};
use resources::GameBuffers;

const CIRCLE_SEGMENTS: u16 = 48;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // quad, circle
}

impl Renderer {
    /// Set up the GPU for `window`, projecting a `field_width` x `field_height`
    /// pixel field onto the whole surface.
    pub async fn new(
        window: Arc<Window>,
        field_width: f32,
        field_height: f32,
    ) -> Result<Self, RenderError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::pixel_space(field_width, field_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        // Meshes
        let (quad_vertices, quad_indices) = create_quad();
        let quad_mesh = Mesh::new(&ctx.device, &ctx.queue, &quad_vertices, &quad_indices);
        let (circle_vertices, circle_indices) = create_circle(CIRCLE_SEGMENTS);
        let circle_mesh = Mesh::new(&ctx.device, &ctx.queue, &circle_vertices, &circle_indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        tracing::info!(
            width = ctx.size.0,
            height = ctx.size.1,
            format = ?ctx.config.format,
            "renderer ready"
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (quad_mesh, circle_mesh),
        })
    }

    /// Reconfigure the surface for a new window size. The camera keeps
    /// showing the whole field.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
        self.queue.write_buffer(
            &self.buffers.camera,
            0,
            bytemuck::cast_slice(&[CameraUniform::from_camera(&self.camera)]),
        );
    }

    pub fn draw(&mut self, list: &DrawList) -> Result<(), RenderError> {
        draw::draw_frame(self, list)
    }
}
