//! Scene configuration.
//!
//! `SceneConfig::default()` describes the portfolio page: six section
//! waypoints, their camera poses and the canonical tuning from
//! [`constants`](super::constants). Tests build smaller configs by hand.

use super::constants::*;
use super::scene::HighlightMode;
use glam::{Vec2, Vec3};

/// Hand-placed waypoint description.
#[derive(Clone, Debug)]
pub struct WaypointSpec {
    pub id: String,
    pub label: String,
    pub position: Vec3,
    pub highlight_mode: HighlightMode,
}

impl WaypointSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            highlight_mode: HighlightMode::Emissive,
        }
    }

    /// For surfaces without an emissive channel.
    pub fn scale_only(mut self) -> Self {
        self.highlight_mode = HighlightMode::ScaleOnly;
        self
    }
}

/// Camera pose the dispatcher moves to for a section.
#[derive(Clone, Debug)]
pub struct SectionTarget {
    pub id: String,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl SectionTarget {
    pub fn new(id: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            look_at: SECTION_LOOK_AT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraTuning {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub start_position: Vec3,
    pub start_look_at: Vec3,
    pub parallax_gain: Vec2,
    pub gaze_gain: f32,
    pub smoothing_per_frame: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            start_position: CAMERA_START_POSITION,
            start_look_at: CAMERA_START_LOOK_AT,
            parallax_gain: PARALLAX_GAIN,
            gaze_gain: GAZE_PARALLAX_GAIN,
            smoothing_per_frame: CAMERA_SMOOTHING_PER_FRAME,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MotionTuning {
    pub time_rate: f32,
    pub particle_spin_rate: f32,
    pub sway_amplitude: f32,
    pub sway_rate: f32,
    pub bob_amplitude: f32,
    pub bob_rate: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            time_rate: SCENE_TIME_RATE,
            particle_spin_rate: PARTICLE_SPIN_RATE,
            sway_amplitude: GROUP_SWAY_AMPLITUDE,
            sway_rate: GROUP_SWAY_RATE,
            bob_amplitude: GROUP_BOB_AMPLITUDE,
            bob_rate: GROUP_BOB_RATE,
        }
    }
}

impl MotionTuning {
    /// No decorative motion at all; the clock still advances.
    pub fn still() -> Self {
        Self {
            sway_amplitude: 0.0,
            bob_amplitude: 0.0,
            particle_spin_rate: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct HighlightTuning {
    pub scale: f32,
    pub emissive: [f32; 3],
}

impl Default for HighlightTuning {
    fn default() -> Self {
        Self {
            scale: HOVER_SCALE,
            emissive: HOVER_EMISSIVE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub waypoints: Vec<WaypointSpec>,
    pub sections: Vec<SectionTarget>,
    pub waypoint_half_extents: Vec3,
    pub yaw_jitter: f32,
    pub particle_count: usize,
    pub particle_extent: Vec3,
    pub camera: CameraTuning,
    pub motion: MotionTuning,
    pub highlight: HighlightTuning,
    pub max_pixel_ratio: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            waypoints: default_waypoints(),
            sections: default_sections(),
            waypoint_half_extents: WAYPOINT_HALF_EXTENTS,
            yaw_jitter: WAYPOINT_YAW_JITTER,
            particle_count: PARTICLE_COUNT,
            particle_extent: PARTICLE_EXTENT,
            camera: CameraTuning::default(),
            motion: MotionTuning::default(),
            highlight: HighlightTuning::default(),
            max_pixel_ratio: MAX_PIXEL_RATIO,
            seed: SCENE_SEED,
        }
    }
}

pub fn default_waypoints() -> Vec<WaypointSpec> {
    vec![
        WaypointSpec::new("#about", "About", Vec3::new(-3.0, 0.8, -2.0)),
        WaypointSpec::new("#experience", "Experience", Vec3::new(-1.0, 1.1, -2.8)),
        WaypointSpec::new("#research", "Research", Vec3::new(1.2, 1.2, -3.0)),
        WaypointSpec::new("#achievements", "Achievements", Vec3::new(3.0, 0.9, -2.2)),
        WaypointSpec::new("#contact", "Contact", Vec3::new(0.2, -0.6, -1.9)),
        WaypointSpec::new("#CodingProjects", "Projects", Vec3::new(0.2, 2.2, -4.0)),
    ]
}

pub fn default_sections() -> Vec<SectionTarget> {
    vec![
        SectionTarget::new("#about", Vec3::new(0.0, 1.7, 5.2)),
        SectionTarget::new("#experience", Vec3::new(-2.6, 1.8, 5.0)),
        SectionTarget::new("#research", Vec3::new(2.6, 2.0, 5.2)),
        SectionTarget::new("#achievements", Vec3::new(3.4, 1.1, 5.0)),
        SectionTarget::new("#contact", Vec3::new(0.2, 0.6, 4.2)),
        SectionTarget::new("#CodingProjects", Vec3::new(0.0, 2.6, 6.0)),
    ]
}
