// Host-side tests for ray construction and waypoint hit-testing.

mod common;

use common::*;
use glam::{Mat4, Quat, Vec2, Vec3};
use scene_nav::core::*;

#[test]
fn ray_box_hits_from_outside() {
    let t = ray_box(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(1.0));
    assert_eq!(t, Some(4.0));
}

#[test]
fn ray_box_misses_to_the_side() {
    let t = ray_box(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(1.0));
    assert!(t.is_none());
}

#[test]
fn ray_box_ignores_boxes_behind_the_origin() {
    let t = ray_box(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::splat(1.0));
    assert!(t.is_none());
}

#[test]
fn ray_box_from_inside_reports_exit() {
    let t = ray_box(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 1.0, 1.0));
    assert_eq!(t, Some(2.0));
}

#[test]
fn ray_box_parallel_ray_outside_slab_misses() {
    // Travels along x at y = 1.5, above a box of half height 1
    let t = ray_box(Vec3::new(-5.0, 1.5, 0.0), Vec3::X, Vec3::splat(1.0));
    assert!(t.is_none());
}

#[test]
fn oriented_box_respects_rotation() {
    // A thin panel turned 90 degrees about y presents its narrow edge to a ray along -z
    let half = Vec3::new(1.0, 1.0, 0.05);
    let model = Mat4::from_rotation_translation(
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::ZERO,
    );
    let offset_ray = Ray {
        origin: Vec3::new(0.5, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    assert!(ray_oriented_box(&offset_ray, model, half).is_none());

    let centred = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    let t = ray_oriented_box(&centred, model, half).expect("edge hit");
    assert!((t - 4.0).abs() < 1e-4);
}

#[test]
fn oriented_box_distance_is_in_world_units_under_scale() {
    let model = Mat4::from_scale(Vec3::splat(2.0));
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 10.0),
        direction: Vec3::NEG_Z,
    };
    // Scaled box reaches z = 2
    let t = ray_oriented_box(&ray, model, Vec3::splat(1.0)).unwrap();
    assert!((t - 8.0).abs() < 1e-4);
}

#[test]
fn centre_ray_points_at_look_target() {
    let session = sized_session(&two_waypoint_config());
    let camera = session.camera().live();
    let ray = Ray::from_ndc(camera, Vec2::ZERO);
    let expected = (camera.target - camera.eye).normalize();
    assert!(ray.direction.dot(expected) > 0.9999);
    assert_eq!(ray.origin, camera.eye);
}

#[test]
fn pick_returns_waypoint_under_pointer() {
    let mut session = sized_session(&two_waypoint_config());
    point_at_waypoint(&mut session, "#contact");
    let hit = pick(session.pointer(), session.camera().live(), session.registry())
        .expect("hit");
    assert_eq!(
        session.registry().waypoint(hit.index).unwrap().id,
        "#contact"
    );
    assert!(hit.distance > 0.0);
}

#[test]
fn pick_is_none_off_surface_or_over_empty_space() {
    let mut session = sized_session(&two_waypoint_config());
    assert!(pick(
        PointerState::OffSurface,
        session.camera().live(),
        session.registry()
    )
    .is_none());

    point_at_empty_space(&mut session);
    assert!(pick(session.pointer(), session.camera().live(), session.registry()).is_none());
}

#[test]
fn intersections_are_sorted_nearest_first() {
    let config = SceneConfig {
        waypoints: vec![
            WaypointSpec::new("#far", "Far", Vec3::new(0.0, 0.0, -6.0)),
            WaypointSpec::new("#near", "Near", Vec3::new(0.0, 0.0, -2.0)),
        ],
        sections: vec![],
        yaw_jitter: 0.0,
        particle_count: 0,
        motion: MotionTuning::still(),
        ..SceneConfig::default()
    };
    let registry = SceneRegistry::initialize(&config).unwrap();
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    let hits = intersect_all(&ray, &registry);
    let ids: Vec<&str> = hits
        .iter()
        .map(|h| registry.waypoint(h.index).unwrap().id.as_str())
        .collect();
    assert_eq!(ids, vec!["#near", "#far"]);
    assert!(hits[0].distance < hits[1].distance);
}

#[test]
fn non_finite_rays_hit_nothing() {
    let half = Vec3::splat(1.0);
    assert!(ray_box(Vec3::new(0.0, 0.0, 5.0), Vec3::NAN, half).is_none());
    assert!(ray_box(Vec3::INFINITY, Vec3::NEG_Z, half).is_none());

    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::new(f32::NAN, 0.0, -1.0),
    };
    assert!(ray_oriented_box(&ray, Mat4::IDENTITY, half).is_none());
}

#[test]
fn overhead_section_view_picks_only_real_hits() {
    let mut config = two_waypoint_config();
    let mut overhead = SectionTarget::new("#overhead", Vec3::new(0.0, 6.0, 0.0));
    overhead.look_at = Vec3::ZERO;
    config.sections.push(overhead);
    let mut session = sized_session(&config);
    let mut host = RecordingHost::default();

    assert!(session.navigate_to("#overhead", &mut host));
    session.run_frames(2000, 1.0 / 60.0, &mut host);

    let camera = session.camera().live();
    assert!(camera.view_projection().is_finite());
    let corner = Ray::from_ndc(camera, Vec2::new(0.99, 0.99));
    assert!(corner.direction.is_finite());

    // Straight down through the origin, between the two panels.
    let centre = PointerState::Over(Vec2::ZERO);
    assert!(pick(centre, camera, session.registry()).is_none());

    let registry = session.registry();
    let corner_pointer = PointerState::Over(Vec2::new(0.99, 0.99));
    if let Some(hit) = pick(corner_pointer, camera, registry) {
        let centre = registry
            .world_transform(hit.index)
            .unwrap()
            .transform_point3(Vec3::ZERO);
        let reach = registry.half_extents().length() * 1.1;
        assert!(corner.point_at(hit.distance).distance(centre) <= reach);
    }
}
