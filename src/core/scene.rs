//! Waypoint registry and ambient scene elements.
//!
//! The registry owns every waypoint for the lifetime of the scene. Waypoints
//! hang off a single group whose transform carries the decorative sway/bob;
//! labels and hit-testing both go through that group transform so what is
//! drawn is what gets picked.

use super::config::{HighlightTuning, MotionTuning, SceneConfig, WaypointSpec};
use super::constants::{LABEL_Z_OFFSET, WAYPOINT_LIGHTNESS, WAYPOINT_SATURATION};
use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("duplicate waypoint id `{0}`")]
    DuplicateWaypoint(String),
}

/// How a waypoint shows emphasis. Decided once when the waypoint is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightMode {
    /// Emissive glow plus scale.
    Emissive,
    /// Scale only; the surface has no emissive channel.
    ScaleOnly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaypointStyle {
    /// sRGB base colour.
    pub base_color: [f32; 3],
    pub highlight_mode: HighlightMode,
}

#[derive(Clone, Debug)]
pub struct Waypoint {
    pub id: String,
    pub label: String,
    pub position: Vec3,
    pub yaw: f32,
    pub style: WaypointStyle,
    highlighted: bool,
    scale: f32,
    emissive: [f32; 3],
}

impl Waypoint {
    fn new(spec: &WaypointSpec, yaw: f32, style: WaypointStyle) -> Self {
        Self {
            id: spec.id.clone(),
            label: spec.label.clone(),
            position: spec.position,
            yaw,
            style,
            highlighted: false,
            scale: 1.0,
            emissive: [0.0; 3],
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn emissive(&self) -> [f32; 3] {
        self.emissive
    }

    pub(crate) fn apply_highlight(&mut self, tuning: &HighlightTuning) {
        self.highlighted = true;
        self.scale = tuning.scale;
        if self.style.highlight_mode == HighlightMode::Emissive {
            self.emissive = tuning.emissive;
        }
    }

    pub(crate) fn clear_highlight(&mut self) {
        self.highlighted = false;
        self.scale = 1.0;
        self.emissive = [0.0; 3];
    }

    /// Transform relative to the waypoint group.
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

/// Seeded cloud of points drifting around the scene.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    yaw: f32,
}

impl ParticleField {
    pub fn scatter(count: usize, extent: Vec3, rng: &mut StdRng) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.gen::<f32>() - 0.5) * extent.x,
                    (rng.gen::<f32>() - 0.5) * extent.y,
                    (rng.gen::<f32>() - 0.5) * extent.z,
                )
            })
            .collect();
        Self { positions, yaw: 0.0 }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
    }
}

pub struct SceneRegistry {
    waypoints: Vec<Waypoint>,
    index: FnvHashMap<String, usize>,
    half_extents: Vec3,
    particles: ParticleField,
    group_yaw: f32,
    group_lift: f32,
}

impl SceneRegistry {
    pub fn initialize(config: &SceneConfig) -> Result<Self, SceneError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let count = config.waypoints.len();
        let mut waypoints = Vec::with_capacity(count);
        let mut index = FnvHashMap::default();

        for (i, spec) in config.waypoints.iter().enumerate() {
            if index.insert(spec.id.clone(), i).is_some() {
                return Err(SceneError::DuplicateWaypoint(spec.id.clone()));
            }
            let hue = i as f32 / count as f32 * 360.0;
            let style = WaypointStyle {
                base_color: hsl_to_rgb(hue, WAYPOINT_SATURATION, WAYPOINT_LIGHTNESS),
                highlight_mode: spec.highlight_mode,
            };
            let yaw = (rng.gen::<f32>() - 0.5) * 2.0 * config.yaw_jitter;
            waypoints.push(Waypoint::new(spec, yaw, style));
        }

        let particles =
            ParticleField::scatter(config.particle_count, config.particle_extent, &mut rng);
        log::info!(
            "[scene] waypoints={} particles={}",
            waypoints.len(),
            particles.positions().len()
        );

        Ok(Self {
            waypoints,
            index,
            half_extents: config.waypoint_half_extents,
            particles,
            group_yaw: 0.0,
            group_lift: 0.0,
        })
    }

    /// Lazy, restartable view over every waypoint in creation order.
    pub fn all_waypoints(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.index.get(id).map(|&i| &self.waypoints[i])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub(crate) fn waypoint_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.waypoints.get_mut(index)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.group_lift, 0.0))
            * Mat4::from_rotation_y(self.group_yaw)
    }

    /// World transform of waypoint `index`, including hover scale.
    pub fn world_transform(&self, index: usize) -> Option<Mat4> {
        let group = self.group_transform();
        self.waypoints
            .get(index)
            .map(|w| group * w.local_transform())
    }

    /// World-space centre of the label sprite for waypoint `index`.
    pub fn label_anchor(&self, index: usize) -> Option<Vec3> {
        let group = self.group_transform();
        self.waypoints
            .get(index)
            .map(|w| group.transform_point3(w.position + Vec3::new(0.0, 0.0, LABEL_Z_OFFSET)))
    }

    /// Apply decorative motion for scene time `t`. Absolute in `t`, so the
    /// sway and bob never drift beyond their amplitudes.
    pub(crate) fn animate(&mut self, t: f32, motion: &MotionTuning) {
        self.particles.yaw = t * motion.particle_spin_rate;
        self.group_yaw = motion.sway_amplitude * (t * motion.sway_rate).sin();
        self.group_lift = motion.bob_amplitude * (t * motion.bob_rate).sin();
    }
}

/// CSS-style HSL to sRGB. `hue` in degrees, `saturation`/`lightness` in 0..1.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let channel = |n: f32| {
        let k = (n + h * 12.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}
