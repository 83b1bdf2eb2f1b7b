use glam::Vec2;

/// Bounding rectangle of the render surface in client (CSS pixel) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Hidden or collapsed surfaces report a non-positive size.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Last known pointer position over the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    OffSurface,
    /// Normalized device coordinates, x right and y up, both in [-1, 1].
    Over(Vec2),
}

impl PointerState {
    pub fn ndc(self) -> Option<Vec2> {
        match self {
            PointerState::Over(p) => Some(p),
            PointerState::OffSurface => None,
        }
    }

    /// Offset used for parallax; zero while the pointer is off the surface.
    pub fn offset(self) -> Vec2 {
        self.ndc().unwrap_or(Vec2::ZERO)
    }
}

/// Map client coordinates into NDC for `rect`.
///
/// `None` for a degenerate rectangle. Points outside the rectangle map
/// outside [-1, 1].
#[inline]
pub fn client_to_ndc(raw_x: f32, raw_y: f32, rect: SurfaceRect) -> Option<Vec2> {
    if rect.is_degenerate() {
        return None;
    }
    let x = (raw_x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -((raw_y - rect.top) / rect.height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

#[derive(Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32, rect: SurfaceRect) {
        let Some(ndc) = client_to_ndc(raw_x, raw_y, rect) else {
            return;
        };
        self.state = if ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 {
            PointerState::Over(ndc)
        } else {
            PointerState::OffSurface
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.state = PointerState::OffSurface;
    }

    pub fn snapshot(&self) -> PointerState {
        self.state
    }
}
