//! The scene session: sole owner of all per-frame state.
//!
//! Browser event handlers and the frame driver call into a session; tests
//! drive it directly with synthetic events and fixed frame deltas.

use super::camera::CameraController;
use super::config::{HighlightTuning, MotionTuning, SceneConfig};
use super::constants::MAX_FRAME_DT_SEC;
use super::host::SceneHost;
use super::hover::{HoverMachine, HoverState, HoverTransition};
use super::navigation::{NavigationDispatcher, NavigationTable};
use super::picking;
use super::pointer::{PointerState, PointerTracker, SurfaceRect};
use super::resize::{ResizeAdapter, ResizeOutcome, SurfaceSize, ViewportSize};
use super::scene::{SceneError, SceneRegistry};

/// Result of one [`SceneSession::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub hover: HoverTransition,
    /// False while the surface is hidden or zero-sized.
    pub render: bool,
}

pub struct SceneSession {
    registry: SceneRegistry,
    pointer: PointerTracker,
    hover: HoverMachine,
    camera: CameraController,
    navigation: NavigationDispatcher,
    resize: ResizeAdapter,
    highlight: HighlightTuning,
    motion: MotionTuning,
    elapsed: f32,
    frame_count: u64,
    visible: bool,
}

impl SceneSession {
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        let registry = SceneRegistry::initialize(config)?;
        let table = NavigationTable::from_sections(&config.sections);
        for spec in &config.waypoints {
            if !table.contains(&spec.id) {
                log::warn!("[scene] waypoint {} has no camera pose", spec.id);
            }
        }
        Ok(Self {
            registry,
            pointer: PointerTracker::default(),
            hover: HoverMachine::default(),
            camera: CameraController::new(config.camera.clone(), 1.0),
            navigation: NavigationDispatcher::new(table),
            resize: ResizeAdapter::new(config.max_pixel_ratio),
            highlight: config.highlight.clone(),
            motion: config.motion.clone(),
            elapsed: 0.0,
            frame_count: 0,
            visible: true,
        })
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn navigation(&self) -> &NavigationDispatcher {
        &self.navigation
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.snapshot()
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    /// Scene time, in decorative-motion units.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.resize.current()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true when visibility actually changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32, rect: SurfaceRect) {
        self.pointer.on_pointer_move(raw_x, raw_y, rect);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
    }

    /// Click-confirm: navigate to the waypoint under the pointer, if any.
    /// Returns the section id navigated to.
    pub fn on_pointer_down(&mut self, host: &mut dyn SceneHost) -> Option<String> {
        let hit = picking::pick(self.pointer.snapshot(), self.camera.live(), &self.registry)?;
        let id = self.registry.waypoint(hit.index)?.id.clone();
        log::info!("[click] waypoint {} at {:.2}", id, hit.distance);
        self.navigation
            .navigate_to(&id, &mut self.camera, host)
            .then_some(id)
    }

    /// Navigate to `section_id`. Never fails; unknown ids are logged.
    pub fn navigate_to(&mut self, section_id: &str, host: &mut dyn SceneHost) -> bool {
        self.navigation
            .navigate_to(section_id, &mut self.camera, host)
    }

    pub fn on_resize(&mut self, viewport: ViewportSize) -> ResizeOutcome {
        let outcome = self.resize.on_resize(viewport);
        if let ResizeOutcome::Resized(size) = outcome {
            self.camera.set_aspect(size.aspect());
            log::debug!("[resize] {}x{}", size.width, size.height);
        }
        outcome
    }

    /// Advance one frame by `dt_sec` seconds of wall time.
    pub fn step(&mut self, dt_sec: f32, host: &mut dyn SceneHost) -> StepOutcome {
        let pointer = self.pointer.snapshot();
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };

        self.elapsed += dt * self.motion.time_rate;
        self.frame_count += 1;
        self.registry.animate(self.elapsed, &self.motion);

        let hit = picking::pick(pointer, self.camera.live(), &self.registry).map(|h| h.index);
        let hover = self
            .hover
            .update(hit, &mut self.registry, &self.highlight, host);

        self.camera.update(pointer, dt);

        StepOutcome {
            hover,
            render: self.visible && self.resize.is_renderable(),
        }
    }

    /// Run `frames` steps of `dt_sec` each, as a frame scheduler would.
    pub fn run_frames(
        &mut self,
        frames: usize,
        dt_sec: f32,
        host: &mut dyn SceneHost,
    ) -> Vec<StepOutcome> {
        (0..frames).map(|_| self.step(dt_sec, host)).collect()
    }
}
