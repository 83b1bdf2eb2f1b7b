use super::helpers;

/// Depth buffer matching the swapchain size.
pub(crate) struct DepthTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl DepthTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (tex, view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self { tex, view, format }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        (self.tex, self.view) = helpers::create_texture(
            device,
            "depth_tex",
            width,
            height,
            self.format,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
    }
}
