//! Camera description and the smoothed pose tracker.
//!
//! The controller is a first-order tracker: each frame the live eye covers a
//! fixed share of the distance to the desired eye. There is no velocity, so
//! it cannot overshoot.

use super::config::CameraTuning;
use super::constants::{MAX_FRAME_DT_SEC, REFERENCE_FRAME_SEC};
use super::pointer::PointerState;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Perspective projection; `aspect` follows the render surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
}

/// Right-handed camera with perspective projection.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Camera {
    /// Unit view direction. Looks down -Z when eye and target coincide.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// `up`, or a stand-in axis when looking straight along it.
    fn view_up(&self, forward: Vec3) -> Vec3 {
        [self.up, Vec3::Z, Vec3::X]
            .into_iter()
            .find(|u| forward.cross(*u).length_squared() > 1e-6)
            .unwrap_or(Vec3::X)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.forward();
        Mat4::look_to_rh(self.eye, forward, self.view_up(forward))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up vectors of the image plane.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = self.forward();
        let right = forward.cross(self.view_up(forward)).normalize();
        let up = right.cross(forward);
        (right, up)
    }

    /// Project a world point to normalized device coordinates.
    pub fn project_to_ndc(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }
}

/// Share of the remaining distance to cover in a frame of `dt_sec`.
///
/// Equals `per_frame` at the reference frame length and stays in [0, 1).
#[inline]
pub fn smoothing_alpha(per_frame: f32, dt_sec: f32) -> f32 {
    let dt = if dt_sec.is_finite() {
        dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    };
    let keep = (1.0 - per_frame.clamp(0.0, 0.999)).powf(dt / REFERENCE_FRAME_SEC);
    1.0 - keep
}

pub struct CameraController {
    target: CameraPose,
    live: Camera,
    tuning: CameraTuning,
}

impl CameraController {
    pub fn new(tuning: CameraTuning, aspect: f32) -> Self {
        let live = Camera {
            eye: tuning.start_position,
            target: tuning.start_look_at,
            up: Vec3::Y,
            projection: Projection {
                fovy_radians: tuning.fovy_radians,
                aspect,
                znear: tuning.znear,
                zfar: tuning.zfar,
            },
        };
        Self {
            target: CameraPose {
                position: tuning.start_position,
                look_at: tuning.start_look_at,
            },
            live,
            tuning,
        }
    }

    pub fn target(&self) -> CameraPose {
        self.target
    }

    pub fn live(&self) -> &Camera {
        &self.live
    }

    pub(crate) fn retarget(&mut self, pose: CameraPose) {
        self.target = pose;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.live.projection.aspect = aspect;
        }
    }

    /// Eye position the tracker is heading for under `pointer`.
    pub fn desired_position(&self, pointer: PointerState) -> Vec3 {
        let p = pointer.offset() * self.tuning.parallax_gain;
        self.target.position + Vec3::new(p.x, p.y, 0.0)
    }

    /// Gaze point for `pointer`.
    pub fn desired_look_at(&self, pointer: PointerState) -> Vec3 {
        let p = pointer.offset() * self.tuning.gaze_gain;
        self.target.look_at + Vec3::new(p.x, p.y, 0.0)
    }

    pub fn update(&mut self, pointer: PointerState, dt_sec: f32) {
        let alpha = smoothing_alpha(self.tuning.smoothing_per_frame, dt_sec);
        let desired = self.desired_position(pointer);
        self.live.eye = self.live.eye.lerp(desired, alpha);
        self.live.target = self.desired_look_at(pointer);
    }
}
