use gallery_core::catalog::default_collection;
use gallery_core::gallery::{Gallery, GalleryEvent};
use gallery_core::interaction::GalleryConfig;
use gallery_core::layout::Viewport;
use gallery_core::mode::Mode;
use glam::Vec2;
use std::f32::consts::TAU;

const DT: f32 = 1.0 / 60.0;

fn desktop() -> Viewport {
    Viewport::new(1600.0, 900.0)
}

fn mounted() -> Gallery {
    Gallery::new(default_collection(), GalleryConfig::default(), desktop(), 42)
        .expect("catalog is non-empty")
}

/// Step until the predicate holds or `max_seconds` elapse, collecting events.
fn step_until(
    gallery: &mut Gallery,
    max_seconds: f32,
    mut done: impl FnMut(&Gallery) -> bool,
) -> Vec<GalleryEvent> {
    let mut events = Vec::new();
    let mut t = 0.0;
    while t < max_seconds {
        events.extend(gallery.step(DT));
        t += DT;
        if done(gallery) {
            return events;
        }
    }
    panic!("condition not reached within {max_seconds}s (events: {events:?})");
}

#[test]
fn empty_catalog_is_rejected() {
    let err = Gallery::new(Vec::new(), GalleryConfig::default(), desktop(), 0);
    assert!(err.is_err());
}

#[test]
fn mount_builds_one_card_per_item_with_uniform_angles() {
    let gallery = mounted();
    assert_eq!(gallery.card_count(), 20);
    for i in 0..20 {
        let expected = TAU * i as f32 / 20.0;
        assert!((gallery.card_angle_of(i) - expected).abs() < 1e-5);
    }
    assert_eq!(gallery.mode(), Mode::Overview);
    assert!(gallery.selection().is_none());
}

#[test]
fn click_drives_overview_to_preview_and_sets_selection() {
    let mut gallery = mounted();
    assert!(gallery.card_clicked(5));
    assert_eq!(gallery.mode(), Mode::Transitioning);
    assert_eq!(
        gallery.selection().map(|p| p.title.as_str()),
        Some("AI Solutions")
    );

    // The guard refuses re-entrant requests while the swirl is in flight.
    assert!(!gallery.card_clicked(3));
    assert!(!gallery.request_dismiss(true));

    let events = step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);
    assert!(events.contains(&GalleryEvent::SelectCloneStarted { index: 5 }));
    assert!(events.contains(&GalleryEvent::SelectFinished { index: 5 }));
    assert_eq!(gallery.selected_index(), Some(5));
}

#[test]
fn dismiss_returns_to_overview_and_clears_selection() {
    let mut gallery = mounted();
    gallery.card_clicked(5);
    step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);

    assert!(gallery.request_dismiss(true));
    assert_eq!(gallery.mode(), Mode::Transitioning);
    assert!(!gallery.request_dismiss(true), "guard holds");

    let events = step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Overview);
    assert!(events.contains(&GalleryEvent::DismissCloneStarted { index: 5 }));
    assert!(events.contains(&GalleryEvent::CardRestored { index: 5 }));
    assert!(events.contains(&GalleryEvent::DismissFinished));
    assert!(gallery.selection().is_none());

    // Gallery transform is back at rest for the current breakpoint.
    let t = gallery.transform();
    assert_eq!(t.rotation_deg, 0.0);
    assert_eq!(t.y, 0.0);
    assert_eq!(t.scale, gallery.gallery_scale());
}

#[test]
fn fallback_dismiss_skips_the_clone_flight() {
    let mut gallery = mounted();
    gallery.card_clicked(2);
    step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);

    assert!(gallery.request_dismiss(false));
    let events = step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Overview);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GalleryEvent::DismissCloneStarted { .. })));
    assert!(events.contains(&GalleryEvent::DismissFinished));
    assert!(gallery.selection().is_none());

    // The hidden card came back even without an explicit restore point.
    assert_eq!(gallery.card_transform(2).alpha, 1.0);
}

#[test]
fn selected_card_is_hidden_while_its_clone_is_in_flight() {
    let mut gallery = mounted();
    gallery.card_clicked(5);
    let events = step_until(&mut gallery, 10.0, |g| {
        g.select_clone_progress().is_some()
    });
    assert!(events.contains(&GalleryEvent::SelectCloneStarted { index: 5 }));
    assert_eq!(gallery.card_transform(5).alpha, 0.0);
    assert_eq!(gallery.card_transform(4).alpha, 1.0);

    step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);
    assert_eq!(
        gallery.card_transform(5).alpha,
        0.0,
        "stays hidden behind the detail view"
    );
}

#[test]
fn resize_applies_breakpoint_scale() {
    let mut gallery = mounted();
    gallery.viewport_resized(Viewport::new(500.0, 700.0));
    assert_eq!(gallery.gallery_scale(), 0.6);
    gallery.viewport_resized(Viewport::new(900.0, 700.0));
    assert_eq!(gallery.gallery_scale(), 0.8);
    gallery.viewport_resized(Viewport::new(1600.0, 900.0));
    assert_eq!(gallery.gallery_scale(), 1.0);
    assert_eq!(gallery.transform().scale, 1.0);
}

#[test]
fn pointer_effects_apply_and_decay_in_overview() {
    let mut gallery = mounted();
    // Let the mount reveal finish so smoothing owns the presentation.
    for _ in 0..300 {
        gallery.step(DT);
    }
    assert_eq!(gallery.gallery_alpha(), 1.0);

    // Park the pointer on card 0's center.
    let center = gallery.card_center(0);
    for _ in 0..30 {
        gallery.pointer_moved_auto(center);
        gallery.step(DT);
    }
    let excited = gallery.card_transform(0);
    assert!(excited.flip_deg > 90.0, "flip at full proximity");
    assert!(excited.scale > 1.2);
    let tilt = gallery.container_tilt();
    assert!(tilt.rotate_x != 0.0 || tilt.rotate_y != 0.0);

    // Move far outside the sensitivity radius; everything returns to rest.
    let far = center + Vec2::new(5000.0, 5000.0);
    for _ in 0..120 {
        gallery.pointer_moved_auto(far);
        gallery.step(DT);
    }
    let rested = gallery.card_transform(0);
    assert!(rested.flip_deg.abs() < 0.5);
    assert!((rested.scale - 1.0).abs() < 0.01);
}

#[test]
fn preview_suppresses_parallax_and_proximity() {
    let mut gallery = mounted();
    gallery.card_clicked(5);
    step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);

    gallery.pointer_moved_auto(Vec2::new(10.0, 10.0));
    gallery.step(DT);

    assert_eq!(gallery.container_tilt(), Default::default());
    let card = gallery.card_transform(3);
    assert_eq!(card.flip_deg, 0.0);
    assert_eq!(card.scale, 1.0);
}

#[test]
fn mobile_viewport_ignores_pointer_motion() {
    let mut gallery = Gallery::new(
        default_collection(),
        GalleryConfig::default(),
        Viewport::new(600.0, 800.0),
        42,
    )
    .unwrap();
    for _ in 0..300 {
        gallery.step(DT);
    }
    gallery.pointer_moved_auto(gallery.card_center(0));
    for _ in 0..30 {
        gallery.step(DT);
    }
    assert_eq!(gallery.card_transform(0).flip_deg, 0.0);
    assert_eq!(gallery.container_tilt(), Default::default());
}

#[test]
fn reveal_is_deterministic_for_a_fixed_seed() {
    let mut a = mounted();
    let mut b = mounted();
    for _ in 0..90 {
        a.step(DT);
        b.step(DT);
    }
    for i in 0..a.card_count() {
        assert_eq!(a.card_transform(i), b.card_transform(i), "card {i}");
    }
}

#[test]
fn repeated_cycles_keep_the_machine_consistent() {
    let mut gallery = mounted();
    for index in [0usize, 12, 19] {
        assert!(gallery.card_clicked(index));
        step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Preview);
        assert_eq!(gallery.selected_index(), Some(index));
        assert!(gallery.request_dismiss(true));
        step_until(&mut gallery, 10.0, |g| g.mode() == Mode::Overview);
        assert!(gallery.selection().is_none());
    }
}
