// Host-side tests for the interaction controller.

use glam::DVec2;
use sphere_core::{ConfigError, SphereConfig, SphereInput, TagSphere};
use std::cell::RefCell;
use std::rc::Rc;

const CENTER: DVec2 = DVec2::new(0.0, 0.0);

fn make_sphere() -> TagSphere {
    TagSphere::new(&["A", "B", "C", "D"], SphereConfig::default().with_radius(100.0))
        .expect("default config is valid")
}

fn recording(sphere: &mut TagSphere) -> Rc<RefCell<Vec<String>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    sphere.on_select(move |label| sink.borrow_mut().push(label.to_string()));
    seen
}

#[test]
fn tap_hit_invokes_callback_once() {
    let mut sphere = make_sphere();
    let seen = recording(&mut sphere);
    let target = sphere.snapshot().points()[1].position;

    let hit = sphere.handle(
        SphereInput::Tap {
            x: target.x,
            y: target.y,
        },
        CENTER,
    );
    assert_eq!(hit.as_deref(), Some("B"));
    assert_eq!(*seen.borrow(), vec!["B".to_string()]);
}

#[test]
fn tap_miss_does_not_invoke_callback() {
    let mut sphere = make_sphere();
    let seen = recording(&mut sphere);
    let hit = sphere.handle(SphereInput::Tap { x: 5000.0, y: 5000.0 }, CENTER);
    assert!(hit.is_none());
    assert!(seen.borrow().is_empty());
}

#[test]
fn tap_does_not_publish() {
    let mut sphere = make_sphere();
    let before = sphere.revision();
    sphere.on_tap(DVec2::ZERO, CENTER);
    assert_eq!(sphere.revision(), before);
}

#[test]
fn drag_publishes_new_snapshot_and_keeps_old_one_intact() {
    let mut sphere = make_sphere();
    let old = sphere.snapshot();
    let old_positions: Vec<_> = old.points().iter().map(|p| p.position).collect();

    sphere.handle(SphereInput::DragMove { dx: 30.0, dy: -12.0 }, CENTER);

    let new = sphere.snapshot();
    assert!(!new.same_snapshot(&old));
    assert_eq!(sphere.revision(), 1);
    let still: Vec<_> = old.points().iter().map(|p| p.position).collect();
    assert_eq!(still, old_positions);
    assert_ne!(new.points()[0].position, old.points()[0].position);
}

#[test]
fn zero_drag_is_a_no_op() {
    let mut sphere = make_sphere();
    let old = sphere.snapshot();
    sphere.on_drag(0.0, 0.0);
    assert_eq!(sphere.revision(), 0);
    assert!(sphere.snapshot().same_snapshot(&old));
}

#[test]
fn drags_apply_in_delivery_order() {
    let mut a = make_sphere();
    let mut b = make_sphere();
    a.on_drag(50.0, 0.0);
    a.on_drag(0.0, 50.0);
    let expected = b.snapshot().on_drag(50.0, 0.0).on_drag(0.0, 50.0);
    b.on_drag(50.0, 0.0);
    b.on_drag(0.0, 50.0);
    for ((pa, pb), pe) in a
        .snapshot()
        .points()
        .iter()
        .zip(b.snapshot().points())
        .zip(expected.points())
    {
        assert_eq!(pa.position, pb.position);
        assert!((pa.position - pe.position).length() < 1e-12);
    }
}

#[test]
fn sensitivity_comes_from_config() {
    let cfg = SphereConfig::default().with_radius(100.0).with_sensitivity(0.01);
    let mut sphere = TagSphere::new(&["A", "B", "C", "D"], cfg).unwrap();
    let expected = sphere.snapshot().on_drag_with(10.0, 0.0, 0.01);
    sphere.on_drag(10.0, 0.0);
    for (got, want) in sphere.snapshot().points().iter().zip(expected.points()) {
        assert!((got.position - want.position).length() < 1e-12);
    }
}

#[test]
fn touch_radius_comes_from_config() {
    let cfg = SphereConfig::default().with_radius(100.0).with_touch_radius(5.0);
    let mut sphere = TagSphere::new(&["A", "B", "C", "D"], cfg).unwrap();
    let target = sphere.snapshot().points()[2].position;
    assert!(sphere
        .on_tap(DVec2::new(target.x + 10.0, target.y), CENTER)
        .is_none());
    assert!(sphere
        .on_tap(DVec2::new(target.x + 2.0, target.y), CENTER)
        .is_some());
}

#[test]
fn reset_orientation_restores_baseline() {
    let mut sphere = make_sphere();
    sphere.on_drag(80.0, 25.0);
    sphere.on_drag(-10.0, 60.0);
    sphere.reset_orientation();
    assert!(sphere.snapshot().same_snapshot(sphere.baseline()));
    assert_eq!(sphere.revision(), 3);
}

#[test]
fn set_labels_relayouts_from_scratch() {
    let mut sphere = make_sphere();
    sphere.on_drag(80.0, 25.0);
    sphere.set_labels(&["x", "y"]);
    let snap = sphere.snapshot();
    assert_eq!(snap.len(), 2);
    assert_eq!(sphere.labels(), ["x".to_string(), "y".to_string()]);
    assert!((snap.points()[0].position.z + 100.0).abs() < 1e-9);
    assert!(snap.max_radius_drift() < 1e-9);
}

#[test]
fn set_radius_relayouts() {
    let mut sphere = make_sphere();
    sphere.set_radius(250.0);
    assert_eq!(sphere.snapshot().radius(), 250.0);
    assert_eq!(sphere.config().radius, 250.0);
    for p in sphere.snapshot().points() {
        assert!((p.position.length() - 250.0).abs() < 1e-9);
    }
}

#[test]
fn frame_is_back_to_front() {
    let mut sphere = make_sphere();
    sphere.on_drag(17.0, 9.0);
    let frame = sphere.frame(DVec2::new(320.0, 240.0));
    assert_eq!(frame.len(), 4);
    assert!(frame.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn empty_sphere_ignores_everything() {
    let labels: [&str; 0] = [];
    let mut sphere = TagSphere::new(&labels, SphereConfig::default()).unwrap();
    let seen = recording(&mut sphere);
    sphere.on_drag(40.0, 40.0);
    assert_eq!(sphere.revision(), 0);
    assert!(sphere.on_tap(DVec2::ZERO, CENTER).is_none());
    assert!(sphere.frame(CENTER).is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SphereConfig::default().with_touch_radius(0.0);
    let err = TagSphere::new(&["a"], cfg).err();
    assert_eq!(
        err,
        Some(ConfigError::NotPositive {
            field: "touch_radius",
            value: 0.0
        })
    );
}

#[test]
fn degenerate_radius_is_accepted() {
    let cfg = SphereConfig::default().with_radius(-5.0);
    let mut sphere = TagSphere::new(&["a", "b"], cfg).unwrap();
    sphere.on_drag(10.0, 10.0);
    assert!(sphere.snapshot().points().iter().all(|p| p.position.length() == 0.0));
}
