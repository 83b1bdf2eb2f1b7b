// Shared helpers for host-side scene tests.

#![allow(dead_code)]
use glam::{Vec2, Vec3};
use scene_nav::core::*;

pub const SURFACE_W: f32 = 800.0;
pub const SURFACE_H: f32 = 600.0;

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Scroll(String),
    Actionable(bool),
}

/// Records every side effect the scene asks for.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// Selectors that resolve to an element; empty means "everything resolves".
    pub known: Vec<String>,
}

impl RecordingHost {
    pub fn scrolls(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Scroll(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn actionable(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Actionable(a) => Some(*a),
                _ => None,
            })
            .collect()
    }
}

impl SceneHost for RecordingHost {
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        self.calls.push(HostCall::Scroll(selector.to_string()));
        self.known.is_empty() || self.known.iter().any(|k| k == selector)
    }

    fn set_pointer_actionable(&mut self, actionable: bool) {
        self.calls.push(HostCall::Actionable(actionable));
    }
}

pub const ABOUT_POSE: Vec3 = Vec3::new(0.0, 1.7, 5.2);
pub const CONTACT_POSE: Vec3 = Vec3::new(0.2, 0.6, 4.2);

/// Two waypoints well apart, no decorative motion, no parallax.
pub fn two_waypoint_config() -> SceneConfig {
    SceneConfig {
        waypoints: vec![
            WaypointSpec::new("#about", "About", Vec3::new(-1.5, 0.8, -2.0)),
            WaypointSpec::new("#contact", "Contact", Vec3::new(1.5, 0.8, -2.0)),
        ],
        sections: vec![
            SectionTarget::new("#about", ABOUT_POSE),
            SectionTarget::new("#contact", CONTACT_POSE),
        ],
        particle_count: 16,
        camera: CameraTuning {
            parallax_gain: Vec2::ZERO,
            gaze_gain: 0.0,
            ..CameraTuning::default()
        },
        motion: MotionTuning::still(),
        ..SceneConfig::default()
    }
}

pub fn viewport() -> ViewportSize {
    ViewportSize {
        css_width: SURFACE_W,
        css_height: SURFACE_H,
        device_pixel_ratio: 1.0,
    }
}

pub fn surface_rect() -> SurfaceRect {
    SurfaceRect::new(0.0, 0.0, SURFACE_W, SURFACE_H)
}

/// Session sized to the test surface.
pub fn sized_session(config: &SceneConfig) -> SceneSession {
    let mut session = SceneSession::new(config).expect("valid config");
    session.on_resize(viewport());
    session
}

/// Client coordinates of the centre of waypoint `id` as currently drawn.
pub fn client_point_of(session: &SceneSession, id: &str) -> (f32, f32) {
    let registry = session.registry();
    let index = registry.index_of(id).expect("known waypoint");
    let centre = registry
        .world_transform(index)
        .expect("transform")
        .transform_point3(Vec3::ZERO);
    let ndc = session.camera().live().project_to_ndc(centre);
    (
        (ndc.x + 1.0) * 0.5 * SURFACE_W,
        (1.0 - ndc.y) * 0.5 * SURFACE_H,
    )
}

pub fn point_at_waypoint(session: &mut SceneSession, id: &str) {
    let (x, y) = client_point_of(session, id);
    session.on_pointer_move(x, y, surface_rect());
}

/// Bottom-left corner: clear of every waypoint in [`two_waypoint_config`].
pub fn point_at_empty_space(session: &mut SceneSession) {
    session.on_pointer_move(2.0, SURFACE_H - 2.0, surface_rect());
}
