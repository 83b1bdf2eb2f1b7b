use super::helpers::{self, PipelineSpec};
use crate::core::ParticleField;
use wgpu::util::DeviceExt;

const PARTICLE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) points: wgpu::Buffer,
    pub(crate) count: u32,
}

/// Point positions never change; the field spins through the uniform model matrix.
pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    field: &ParticleField,
) -> ParticleResources {
    let mut packed: Vec<[f32; 4]> = field
        .positions()
        .iter()
        .map(|p| [p.x, p.y, p.z, 1.0])
        .collect();
    let count = packed.len() as u32;
    if packed.is_empty() {
        packed.push([0.0; 4]);
    }
    let points = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_points"),
        contents: bytemuck::cast_slice(&packed),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRS,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        shader,
        color_format,
        depth_format,
        PipelineSpec {
            label: "particle_pipeline",
            vs_entry: "vs_particle",
            fs_entry: "fs_particle",
            buffers: &buffers,
            blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            depth_write: false,
        },
    );
    ParticleResources {
        pipeline,
        points,
        count,
    }
}
