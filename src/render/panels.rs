use super::helpers::{self, PipelineSpec};
use crate::core::SceneRegistry;
use glam::Vec3;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PanelInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4
];

pub(crate) struct PanelResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) mesh: wgpu::Buffer,
    pub(crate) mesh_len: u32,
    pub(crate) instances: wgpu::Buffer,
}

/// Triangle list for a box spanning `[-half, half]`, flat normals per face.
pub(crate) fn box_vertices(half: Vec3) -> Vec<MeshVertex> {
    // (normal, u axis, v axis)
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    const QUAD: [(f32, f32); 6] = [
        (-1.0, -1.0),
        (1.0, -1.0),
        (1.0, 1.0),
        (-1.0, -1.0),
        (1.0, 1.0),
        (-1.0, 1.0),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        for (su, sv) in QUAD {
            let p = (n + u * su + v * sv) * half;
            out.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}

pub(crate) fn create_panel_resources(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    registry: &SceneRegistry,
) -> PanelResources {
    let vertices = box_vertices(registry.half_extents());
    let mesh = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("panel_mesh"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let instances = helpers::instance_buffer(
        device,
        "panel_instances",
        std::mem::size_of::<PanelInstance>() as u64,
        registry.len(),
    );
    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PanelInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        shader,
        color_format,
        depth_format,
        PipelineSpec {
            label: "panel_pipeline",
            vs_entry: "vs_panel",
            fs_entry: "fs_panel",
            buffers: &buffers,
            blend: Some(wgpu::BlendState::REPLACE),
            depth_write: true,
        },
    );
    PanelResources {
        pipeline,
        mesh,
        mesh_len: vertices.len() as u32,
        instances,
    }
}

pub(crate) fn pack_panels(registry: &SceneRegistry) -> Vec<PanelInstance> {
    registry
        .all_waypoints()
        .enumerate()
        .filter_map(|(i, w)| {
            let model = registry.world_transform(i)?;
            let [r, g, b] = w.style.base_color.map(helpers::srgb_to_linear);
            let [er, eg, eb] = w.emissive();
            Some(PanelInstance {
                model: model.to_cols_array_2d(),
                color: [r, g, b, 1.0],
                emissive: [er, eg, eb, 0.0],
            })
        })
        .collect()
}
