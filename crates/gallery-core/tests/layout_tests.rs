use gallery_core::layout::{
    card_angle, gallery_scale_for_width, rest_position, shortest_arc, Rect, Viewport,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn angles_are_uniformly_spaced_for_any_count() {
    for n in [1usize, 2, 3, 7, 20, 48] {
        let spacing = TAU / n as f32;
        for i in 0..n {
            let expected = spacing * i as f32;
            assert!(
                (card_angle(i, n) - expected).abs() < 1e-5,
                "card {i} of {n}"
            );
        }
        // Consecutive deltas cover the full circle exactly once.
        let sum: f32 = (0..n)
            .map(|i| card_angle((i + 1) % n, n) - card_angle(i, n))
            .map(|d| if d < 0.0 { d + TAU } else { d })
            .sum();
        assert!((sum - TAU).abs() < 1e-4, "n={n}");
    }
}

#[test]
fn rest_positions_lie_on_the_ring() {
    let radius = 275.0;
    for n in [4usize, 20] {
        for i in 0..n {
            let p = rest_position(i, n, radius);
            assert!((p.length() - radius).abs() < 1e-3);
        }
    }
    // Cardinal points for a 4-card ring.
    let right = rest_position(0, 4, 100.0);
    assert!((right.x - 100.0).abs() < 1e-4 && right.y.abs() < 1e-4);
    let down = rest_position(1, 4, 100.0);
    assert!(down.x.abs() < 1e-3 && (down.y - 100.0).abs() < 1e-3);
}

#[test]
fn responsive_scale_breakpoints() {
    assert_eq!(gallery_scale_for_width(500.0), 0.6);
    assert_eq!(gallery_scale_for_width(767.9), 0.6);
    assert_eq!(gallery_scale_for_width(768.0), 0.8);
    assert_eq!(gallery_scale_for_width(900.0), 0.8);
    assert_eq!(gallery_scale_for_width(1199.9), 0.8);
    assert_eq!(gallery_scale_for_width(1200.0), 1.0);
    assert_eq!(gallery_scale_for_width(1600.0), 1.0);
}

#[test]
fn shortest_arc_takes_the_short_way_round() {
    assert!((shortest_arc(0.0, 1.5 * PI) - (-FRAC_PI_2)).abs() < 1e-5);
    assert!((shortest_arc(1.5 * PI, 0.0) - FRAC_PI_2).abs() < 1e-5);
    assert!((shortest_arc(0.1, 0.1)).abs() < 1e-6);
    for i in 0..20 {
        let from = card_angle(i, 20);
        let arc = shortest_arc(from, 1.5 * PI);
        assert!(arc.abs() <= PI + 1e-5, "card {i}");
    }
}

#[test]
fn rect_lerp_hits_both_endpoints() {
    let a = Rect::new(10.0, 20.0, 100.0, 150.0);
    let b = Rect::new(0.0, 0.0, 1920.0, 540.0);
    assert_eq!(Rect::lerp(a, b, 0.0), a);
    assert_eq!(Rect::lerp(a, b, 1.0), b);
    let mid = Rect::lerp(a, b, 0.5);
    assert!((mid.width - 1010.0).abs() < 1e-3);
}

#[test]
fn viewport_mobile_threshold() {
    assert!(Viewport::new(999.0, 800.0).is_mobile());
    assert!(!Viewport::new(1000.0, 800.0).is_mobile());
    let c = Viewport::new(1920.0, 1080.0).center();
    assert_eq!((c.x, c.y), (960.0, 540.0));
}
