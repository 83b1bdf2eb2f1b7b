use crate::constants::{
    AMBIENT_INTENSITY, DEPTH_FORMAT, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION, PARTICLE_OPACITY,
    PARTICLE_SIZE,
};
use crate::core::{LabelAtlas, SceneRegistry, SceneSession};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod labels;
mod panels;
mod particles;
mod targets;

pub use labels::rasterize_labels;
use labels::{create_label_resources, label_bind_group_layout, LabelResources};
use panels::{create_panel_resources, pack_panels, PanelResources};
use particles::{create_particle_resources, ParticleResources};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    light: [f32; 4],
    params: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    panels: PanelResources,
    particles: ParticleResources,
    labels: LabelResources,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        registry: &SceneRegistry,
        atlas: &LabelAtlas,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        // The canvas is transparent over the page.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .unwrap_or(caps.alpha_modes[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?} {:?}", width, height, format, alpha_mode);

        let depth = DepthTarget::new(&device, width, height, DEPTH_FORMAT);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let label_bgl = label_bind_group_layout(&device);
        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });
        let label_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("label_pl"),
            bind_group_layouts: &[&uniform_bgl, &label_bgl],
            push_constant_ranges: &[],
        });

        let panels =
            create_panel_resources(&device, &scene_layout, &shader, format, DEPTH_FORMAT, registry);
        let particles = create_particle_resources(
            &device,
            &scene_layout,
            &shader,
            format,
            DEPTH_FORMAT,
            registry.particles(),
        );
        let labels = create_label_resources(
            &device,
            &queue,
            &label_layout,
            &label_bgl,
            &shader,
            format,
            DEPTH_FORMAT,
            atlas,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            uniform_bind_group,
            panels,
            particles,
            labels,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn write_uniforms(&self, session: &SceneSession) {
        let camera = session.camera().live();
        let (right, up) = camera.basis();
        let light_dir = Vec3::from(KEY_LIGHT_POSITION).normalize();
        let u = SceneUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            particle_model: session
                .registry()
                .particles()
                .transform()
                .to_cols_array_2d(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            light: light_dir.extend(KEY_LIGHT_INTENSITY).to_array(),
            params: [AMBIENT_INTENSITY, PARTICLE_SIZE, PARTICLE_OPACITY, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(&mut self, session: &SceneSession) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let registry = session.registry();
        self.write_uniforms(session);
        let panel_instances = pack_panels(registry);
        if !panel_instances.is_empty() {
            self.queue.write_buffer(
                &self.panels.instances,
                0,
                bytemuck::cast_slice(&panel_instances),
            );
        }
        let label_instances = self.labels.pack(registry);
        if !label_instances.is_empty() {
            self.queue.write_buffer(
                &self.labels.instances,
                0,
                bytemuck::cast_slice(&label_instances),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !panel_instances.is_empty() {
                rpass.set_pipeline(&self.panels.pipeline);
                rpass.set_vertex_buffer(0, self.panels.mesh.slice(..));
                rpass.set_vertex_buffer(1, self.panels.instances.slice(..));
                rpass.draw(0..self.panels.mesh_len, 0..panel_instances.len() as u32);
            }

            if self.particles.count > 0 {
                rpass.set_pipeline(&self.particles.pipeline);
                rpass.set_vertex_buffer(0, self.particles.points.slice(..));
                rpass.draw(0..6, 0..self.particles.count);
            }

            if !label_instances.is_empty() {
                rpass.set_pipeline(&self.labels.pipeline);
                rpass.set_bind_group(1, &self.labels.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.labels.instances.slice(..));
                rpass.draw(0..6, 0..label_instances.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
