// Host-side tests for the navigation table and dispatcher.

mod common;

use common::*;
use glam::Vec3;
use scene_nav::core::constants::SECTION_LOOK_AT;
use scene_nav::core::*;

fn dispatcher() -> NavigationDispatcher {
    NavigationDispatcher::new(NavigationTable::from_sections(&[
        SectionTarget::new("#about", ABOUT_POSE),
        SectionTarget::new("#contact", CONTACT_POSE),
    ]))
}

fn camera() -> CameraController {
    CameraController::new(CameraTuning::default(), 1.0)
}

#[test]
fn table_lookup() {
    let d = dispatcher();
    assert_eq!(d.table().len(), 2);
    assert!(d.table().contains("#about"));
    assert!(!d.table().contains("about"));
    let pose = d.table().get("#contact").unwrap();
    assert_eq!(pose.position, CONTACT_POSE);
    assert_eq!(pose.look_at, SECTION_LOOK_AT);
}

#[test]
fn navigate_retargets_and_scrolls_once() {
    let d = dispatcher();
    let mut cam = camera();
    let mut host = RecordingHost::default();

    let pose = d.try_navigate("#about", &mut cam, &mut host).unwrap();
    assert_eq!(pose.position, ABOUT_POSE);
    assert_eq!(cam.target(), pose);
    assert_eq!(host.calls, vec![HostCall::Scroll("#about".into())]);
    // Only the target moves; the live camera eases over later frames.
    assert_ne!(cam.live().eye, ABOUT_POSE);
}

#[test]
fn unknown_id_is_an_error_and_changes_nothing() {
    let d = dispatcher();
    let mut cam = camera();
    let mut host = RecordingHost::default();
    let before = cam.target();

    let err = d.try_navigate("#nope", &mut cam, &mut host).unwrap_err();
    assert_eq!(err, NavigateError::UnknownSection("#nope".into()));
    assert_eq!(cam.target(), before);
    assert!(host.calls.is_empty());

    assert!(!d.navigate_to("", &mut cam, &mut host));
    assert_eq!(cam.target(), before);
}

#[test]
fn missing_document_element_still_moves_camera() {
    let d = dispatcher();
    let mut cam = camera();
    let mut host = RecordingHost {
        known: vec!["#about".into()],
        ..RecordingHost::default()
    };

    assert!(d.navigate_to("#contact", &mut cam, &mut host));
    assert_eq!(cam.target().position, CONTACT_POSE);
    assert_eq!(host.scrolls(), vec!["#contact".to_string()]);
}

#[test]
fn navigating_twice_to_the_same_section_is_stable() {
    let d = dispatcher();
    let mut cam = camera();
    let mut host = RecordingHost::default();

    d.navigate_to("#about", &mut cam, &mut host);
    let first = cam.target();
    d.navigate_to("#about", &mut cam, &mut host);
    assert_eq!(cam.target(), first);
    assert_eq!(host.scrolls().len(), 2);
}

#[test]
fn later_sections_override_duplicates() {
    let table = NavigationTable::from_sections(&[
        SectionTarget::new("#about", Vec3::ZERO),
        SectionTarget::new("#about", ABOUT_POSE),
    ]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("#about").unwrap().position, ABOUT_POSE);
}
