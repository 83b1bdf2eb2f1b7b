// Host-side tests driving a whole scene session with synthetic events and
// fixed frame deltas.

mod common;

use common::*;
use glam::{Mat4, Vec3};
use scene_nav::core::constants::{
    HOVER_SCALE, PARTICLE_SPIN_RATE, SCENE_TIME_RATE, SECTION_LOOK_AT,
};
use scene_nav::core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn click_on_waypoint_navigates_once_and_retargets_camera() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    point_at_waypoint(&mut session, "#about");
    session.step(DT, &mut host);

    let navigated = session.on_pointer_down(&mut host);
    assert_eq!(navigated.as_deref(), Some("#about"));
    assert_eq!(host.scrolls(), vec!["#about".to_string()]);
    assert_eq!(session.camera().target().position, ABOUT_POSE);
    assert_eq!(session.camera().target().look_at, SECTION_LOOK_AT);
}

#[test]
fn off_over_off_within_three_frames_applies_then_clears_once() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();
    let about = session.registry().index_of("#about").unwrap();

    let mut outcomes = Vec::new();
    session.on_pointer_leave();
    outcomes.push(session.step(DT, &mut host));
    point_at_waypoint(&mut session, "#about");
    outcomes.push(session.step(DT, &mut host));
    session.on_pointer_leave();
    outcomes.push(session.step(DT, &mut host));

    assert!(outcomes[0].hover.is_empty());
    assert_eq!(outcomes[1].hover.applied, Some(about));
    assert_eq!(outcomes[1].hover.cleared, None);
    assert_eq!(outcomes[2].hover.cleared, Some(about));
    assert_eq!(outcomes[2].hover.applied, None);

    let applied = outcomes.iter().filter(|o| o.hover.applied.is_some()).count();
    let cleared = outcomes.iter().filter(|o| o.hover.cleared.is_some()).count();
    assert_eq!((applied, cleared), (1, 1));
    assert_eq!(host.actionable(), vec![true, false]);
    assert!(!session.registry().waypoint(about).unwrap().is_highlighted());
}

#[test]
fn steady_hover_fires_enter_once() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    point_at_waypoint(&mut session, "#contact");
    let outcomes = session.run_frames(10, DT, &mut host);

    assert!(outcomes[0].hover.applied.is_some());
    assert!(outcomes[1..].iter().all(|o| o.hover.is_empty()));
    assert_eq!(host.actionable(), vec![true]);
    let contact = session.registry().index_of("#contact").unwrap();
    assert_eq!(session.hover_state(), HoverState::Hovering(contact));
}

#[test]
fn pointer_over_empty_space_hovers_nothing() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    point_at_empty_space(&mut session);
    session.run_frames(3, DT, &mut host);

    assert_eq!(session.hover_state(), HoverState::Idle);
    assert!(host.calls.is_empty());
    assert_eq!(session.on_pointer_down(&mut host), None);
    assert!(host.scrolls().is_empty());
}

#[test]
fn no_hover_anywhere_clear_of_every_waypoint() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();
    let reach = session.registry().half_extents().length() * HOVER_SCALE;

    let steps = 20;
    let mut clear_points = 0;
    for iy in 0..=steps {
        for ix in 0..=steps {
            let x = ix as f32 / steps as f32 * SURFACE_W;
            let y = iy as f32 / steps as f32 * SURFACE_H;
            session.on_pointer_move(x, y, surface_rect());
            let ndc = session.pointer().ndc().expect("inside the surface");
            let ray = Ray::from_ndc(session.camera().live(), ndc);

            // Closest approach to each panel's bounding sphere.
            let registry = session.registry();
            let clear = (0..registry.len()).all(|i| {
                let centre = registry
                    .world_transform(i)
                    .unwrap()
                    .transform_point3(Vec3::ZERO);
                let t = (centre - ray.origin).dot(ray.direction).max(0.0);
                ray.point_at(t).distance(centre) > reach
            });

            session.step(DT, &mut host);
            if clear {
                clear_points += 1;
                assert_eq!(session.hover_state(), HoverState::Idle, "at ({}, {})", x, y);
                assert_eq!(session.on_pointer_down(&mut host), None);
            }
        }
    }
    assert!(clear_points > 300, "only {} clear points", clear_points);
    assert!(host.scrolls().is_empty());
}

#[test]
fn particle_field_spins_with_scene_time() {
    let config = SceneConfig {
        motion: MotionTuning::default(),
        ..two_waypoint_config()
    };
    let mut session = sized_session(&config);
    let mut host = RecordingHost::default();
    session.run_frames(30, DT, &mut host);

    let particles = session.registry().particles();
    let expected = session.elapsed() * PARTICLE_SPIN_RATE;
    assert!(expected > 0.0);
    assert!((particles.yaw() - expected).abs() < 1e-6);
    assert!(particles
        .transform()
        .abs_diff_eq(Mat4::from_rotation_y(expected), 1e-6));
}

#[test]
fn camera_converges_monotonically_after_navigation() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    assert!(session.navigate_to("#contact", &mut host));
    let mut last = session.camera().live().eye.distance(CONTACT_POSE);
    for _ in 0..600 {
        session.step(DT, &mut host);
        let d = session.camera().live().eye.distance(CONTACT_POSE);
        assert!(d <= last + 1e-6, "distance grew: {} -> {}", last, d);
        last = d;
    }
    assert!(last < 1e-3, "did not converge: {}", last);
}

#[test]
fn unknown_section_leaves_target_untouched() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();
    let before = session.camera().target();

    assert!(!session.navigate_to("#nowhere", &mut host));
    assert_eq!(session.camera().target(), before);
    assert!(host.calls.is_empty());
}

#[test]
fn nothing_renders_before_first_resize_or_while_hidden() {
    let mut session = SceneSession::new(&two_waypoint_config()).unwrap();
    let mut host = RecordingHost::default();
    assert!(!session.step(DT, &mut host).render);

    session.on_resize(viewport());
    assert!(session.step(DT, &mut host).render);

    assert!(session.set_visible(false));
    assert!(!session.set_visible(false));
    assert!(!session.step(DT, &mut host).render);

    assert!(session.set_visible(true));
    assert!(session.step(DT, &mut host).render);
}

#[test]
fn collapsed_container_pauses_rendering() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    let outcome = session.on_resize(ViewportSize {
        css_width: 0.0,
        css_height: 0.0,
        device_pixel_ratio: 1.0,
    });
    assert_eq!(outcome, ResizeOutcome::Collapsed);
    assert!(!session.step(DT, &mut host).render);

    session.on_resize(viewport());
    assert!(session.step(DT, &mut host).render);
}

#[test]
fn resize_updates_camera_aspect() {
    let mut session = SceneSession::new(&two_waypoint_config()).unwrap();
    session.on_resize(ViewportSize {
        css_width: 1000.0,
        css_height: 500.0,
        device_pixel_ratio: 1.0,
    });
    let aspect = session.camera().live().projection.aspect;
    assert!((aspect - 2.0).abs() < 1e-6);
}

#[test]
fn long_frames_are_clamped() {
    let mut session = sized_session(&two_waypoint_config());
    let mut host = RecordingHost::default();

    session.step(5.0, &mut host);
    let expected = 0.1 * SCENE_TIME_RATE;
    assert!((session.elapsed() - expected).abs() < 1e-6);

    session.step(f32::NAN, &mut host);
    assert!((session.elapsed() - expected).abs() < 1e-6);
    assert_eq!(session.frame_count(), 2);
}

#[test]
fn default_scene_builds_and_every_waypoint_has_a_pose() {
    let session = SceneSession::new(&SceneConfig::default()).unwrap();
    let registry = session.registry();
    assert_eq!(registry.len(), 6);
    for w in registry.all_waypoints() {
        assert!(
            session.navigation().table().contains(&w.id),
            "{} has no pose",
            w.id
        );
    }
}
