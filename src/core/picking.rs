//! Pointer ray casting against waypoint boxes.

use super::camera::Camera;
use super::pointer::PointerState;
use super::scene::SceneRegistry;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// World-space ray; `direction` is unit length.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Ray from the camera eye through the NDC point `ndc`.
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.view_projection().inverse();
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: camera.eye,
            direction: (far - camera.eye).normalize(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

/// Slab test against the box `[-half, half]`. `dir` need not be normalized;
/// the result is in units of `dir`. Non-finite rays hit nothing.
#[inline]
pub fn ray_box(origin: Vec3, dir: Vec3, half: Vec3) -> Option<f32> {
    if !origin.is_finite() || !dir.is_finite() {
        return None;
    }
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (origin[axis], dir[axis], half[axis]);
        if d.abs() < 1e-8 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Distance along `ray` to the box with half extents `half` placed by `model`.
pub fn ray_oriented_box(ray: &Ray, model: Mat4, half: Vec3) -> Option<f32> {
    let inv = model.inverse();
    // Direction goes through untouched by normalization so t stays in world units.
    let local_origin = inv.transform_point3(ray.origin);
    let local_dir = inv.transform_vector3(ray.direction);
    ray_box(local_origin, local_dir, half)
}

/// Every waypoint the ray crosses, nearest first.
pub fn intersect_all(ray: &Ray, registry: &SceneRegistry) -> SmallVec<[Hit; 8]> {
    let half = registry.half_extents();
    let mut hits: SmallVec<[Hit; 8]> = (0..registry.len())
        .filter_map(|i| {
            let model = registry.world_transform(i)?;
            ray_oriented_box(ray, model, half).map(|distance| Hit { index: i, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest waypoint under the pointer, if any.
pub fn pick(pointer: PointerState, camera: &Camera, registry: &SceneRegistry) -> Option<Hit> {
    let ndc = pointer.ndc()?;
    let ray = Ray::from_ndc(camera, ndc);
    intersect_all(&ray, registry).first().copied()
}
