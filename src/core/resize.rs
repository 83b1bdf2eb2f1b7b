/// Container size as reported by the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: f32,
}

/// Backing buffer size of the render surface in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    Resized(SurfaceSize),
    Unchanged,
    /// Zero-sized container; rendering pauses until a real size arrives.
    Collapsed,
}

#[derive(Debug)]
pub struct ResizeAdapter {
    max_pixel_ratio: f32,
    current: Option<SurfaceSize>,
    collapsed: bool,
}

impl ResizeAdapter {
    pub fn new(max_pixel_ratio: f32) -> Self {
        Self {
            max_pixel_ratio,
            current: None,
            collapsed: false,
        }
    }

    pub fn current(&self) -> Option<SurfaceSize> {
        self.current
    }

    /// True when there is a non-empty surface to draw into.
    pub fn is_renderable(&self) -> bool {
        self.current.is_some() && !self.collapsed
    }

    pub fn pixel_ratio(&self, device_pixel_ratio: f32) -> f32 {
        if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(self.max_pixel_ratio)
        } else {
            1.0
        }
    }

    pub fn backing_size(&self, viewport: ViewportSize) -> Option<SurfaceSize> {
        let ratio = self.pixel_ratio(viewport.device_pixel_ratio);
        let width = (viewport.css_width * ratio).floor();
        let height = (viewport.css_height * ratio).floor();
        if !(width >= 1.0 && height >= 1.0) {
            return None;
        }
        Some(SurfaceSize {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn on_resize(&mut self, viewport: ViewportSize) -> ResizeOutcome {
        let Some(size) = self.backing_size(viewport) else {
            self.collapsed = true;
            return ResizeOutcome::Collapsed;
        };
        self.collapsed = false;
        if self.current == Some(size) {
            return ResizeOutcome::Unchanged;
        }
        self.current = Some(size);
        ResizeOutcome::Resized(size)
    }
}
