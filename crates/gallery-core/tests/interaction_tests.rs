use gallery_core::interaction::{apply_proximity, flip_factor, parallax_targets, GalleryConfig};
use gallery_core::layout::Viewport;
use gallery_core::state::{lerp_toward, CardState, PointerParallax};
use glam::Vec2;

fn target_scale_at(distance: f32, config: &GalleryConfig) -> f32 {
    let mut card = CardState::new(0.0);
    apply_proximity(&mut card, flip_factor(distance, config), config);
    card.target_scale
}

#[test]
fn proximity_scale_is_monotone_in_distance() {
    let config = GalleryConfig::default();
    let mut previous = f32::MAX;
    for step in 0..=120 {
        let d = step as f32 * 5.0; // 0..600 px
        let scale = target_scale_at(d, &config);
        assert!(
            scale <= previous + 1e-6,
            "scale increased moving away: d={d}"
        );
        previous = scale;
    }
}

#[test]
fn scale_is_exactly_one_beyond_sensitivity() {
    let config = GalleryConfig::default();
    for d in [
        config.sensitivity,
        config.sensitivity + 1.0,
        config.sensitivity * 10.0,
    ] {
        assert_eq!(target_scale_at(d, &config), 1.0);
    }
    // Maximum effect right on top of the card.
    assert!((target_scale_at(0.0, &config) - 1.3).abs() < 1e-5);
}

#[test]
fn zero_factor_restores_rest_targets() {
    let config = GalleryConfig::default();
    let mut card = CardState::new(1.0);
    apply_proximity(&mut card, 1.0, &config);
    assert!(card.target_rotation > 0.0);
    assert!(card.target_offset.length() > 0.0);

    apply_proximity(&mut card, 0.0, &config);
    assert_eq!(card.target_rotation, 0.0);
    assert_eq!(card.target_scale, 1.0);
    assert_eq!(card.target_offset, Vec2::ZERO);
}

#[test]
fn offset_points_outward_along_card_angle() {
    let config = GalleryConfig::default();
    let mut card = CardState::new(0.0); // card at angle 0 sits on +x
    apply_proximity(&mut card, 1.0, &config);
    assert!((card.target_offset.x - config.card_move_amount).abs() < 1e-4);
    assert!(card.target_offset.y.abs() < 1e-4);
}

#[test]
fn parallax_targets_map_pointer_quadrants() {
    let viewport = Viewport::new(2000.0, 1000.0);
    let (x, y, z) = parallax_targets(viewport.center(), viewport);
    assert_eq!((x, y, z), (0.0, 0.0, 0.0));

    // Bottom-right corner: percent_x = percent_y = 1.
    let (x, y, z) = parallax_targets(Vec2::new(2000.0, 1000.0), viewport);
    assert!((x + 15.0).abs() < 1e-4);
    assert!((y - 15.0).abs() < 1e-4);
    assert!((z - 10.0).abs() < 1e-4);

    // Top-left corner mirrors it.
    let (x, y, z) = parallax_targets(Vec2::ZERO, viewport);
    assert!((x - 15.0).abs() < 1e-4);
    assert!((y + 15.0).abs() < 1e-4);
    assert!((z + 10.0).abs() < 1e-4);
}

#[test]
fn lerp_never_overshoots_and_converges() {
    let mut current = 0.0f32;
    let target = 10.0f32;
    let mut last = current;
    for _ in 0..200 {
        current = lerp_toward(current, target, 0.4);
        assert!(current <= target + 1e-6);
        assert!(current >= last - 1e-6, "must approach monotonically");
        last = current;
    }
    assert!((current - target).abs() < 1e-3);
}

#[test]
fn smoothing_is_idempotent_at_the_fixed_point() {
    let mut card = CardState::new(0.5);
    card.snap_to_rest();
    let before = card.clone();
    for _ in 0..10 {
        card.step(0.4);
    }
    assert_eq!(card.current_offset, before.current_offset);
    assert_eq!(card.current_rotation, before.current_rotation);
    assert_eq!(card.current_scale, before.current_scale);

    let mut parallax = PointerParallax::default();
    parallax.set_targets(3.0, -2.0, 1.0);
    for _ in 0..500 {
        parallax.step(0.4);
    }
    let settled = parallax;
    parallax.step(0.4);
    assert!((parallax.current_x - settled.current_x).abs() < 1e-6);
}

#[test]
fn angle_is_immutable_through_resets_and_steps() {
    let mut card = CardState::new(2.0);
    let config = GalleryConfig::default();
    apply_proximity(&mut card, 0.7, &config);
    card.step(0.4);
    card.snap_to_rest();
    assert_eq!(card.angle(), 2.0);
}
