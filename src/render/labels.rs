//! Waypoint labels: text rasterized once through a 2D canvas into an atlas
//! with one row per waypoint, then drawn as camera-facing sprites.

use super::helpers::{self, PipelineSpec};
use crate::constants::{LABEL_COLOR, LABEL_FONT, LABEL_ROW_HEIGHT, LABEL_ROW_WIDTH};
use crate::core::{label_sprites, LabelAtlas, SceneRegistry};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn rasterize_labels(
    document: &web::Document,
    registry: &SceneRegistry,
) -> anyhow::Result<LabelAtlas> {
    let rows = registry.len().max(1) as u32;
    let width = LABEL_ROW_WIDTH;
    let height = LABEL_ROW_HEIGHT * rows;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(LABEL_COLOR);
    for (row, w) in registry.all_waypoints().enumerate() {
        let cy = (row as u32 * LABEL_ROW_HEIGHT) as f64 + LABEL_ROW_HEIGHT as f64 / 2.0;
        ctx.fill_text(&w.label, width as f64 / 2.0, cy)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(LabelAtlas {
        width,
        height,
        rows,
        rgba: image.data().0,
    })
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LabelInstance {
    pub(crate) center: [f32; 4],
    pub(crate) rect: [f32; 4],
}

const LABEL_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

pub(crate) struct LabelResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instances: wgpu::Buffer,
    rows: u32,
}

pub(crate) fn label_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("label_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

pub(crate) fn create_label_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::PipelineLayout,
    bgl: &wgpu::BindGroupLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    atlas: &LabelAtlas,
) -> LabelResources {
    let (texture, view) = helpers::create_texture(
        device,
        "label_atlas",
        atlas.width,
        atlas.height,
        wgpu::TextureFormat::Rgba8UnormSrgb,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &atlas.rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * atlas.width),
            rows_per_image: Some(atlas.height),
        },
        wgpu::Extent3d {
            width: atlas.width,
            height: atlas.height,
            depth_or_array_layers: 1,
        },
    );
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("label_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("label_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });
    let instances = helpers::instance_buffer(
        device,
        "label_instances",
        std::mem::size_of::<LabelInstance>() as u64,
        atlas.rows as usize,
    );
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LabelInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &LABEL_ATTRS,
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        layout,
        shader,
        color_format,
        depth_format,
        PipelineSpec {
            label: "label_pipeline",
            vs_entry: "vs_label",
            fs_entry: "fs_label",
            buffers: &buffers,
            blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            depth_write: false,
        },
    );
    LabelResources {
        pipeline,
        bind_group,
        instances,
        rows: atlas.rows,
    }
}

impl LabelResources {
    pub(crate) fn pack(&self, registry: &SceneRegistry) -> Vec<LabelInstance> {
        label_sprites(registry, self.rows)
            .into_iter()
            .map(|l| LabelInstance {
                center: l.center.extend(1.0).to_array(),
                rect: [l.size.x, l.size.y, l.v_top, l.v_bottom],
            })
            .collect()
    }
}
