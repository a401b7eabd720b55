//! Pointer interaction: whole-gallery parallax and per-card proximity
//! targets.
//!
//! These functions only write targets; the frame step owns the smoothing
//! toward them.

use crate::constants::{
    CARD_MOVE_AMOUNT, EFFECT_FALLOFF, FLIP_MAX_DEGREES, PARALLAX_TILT_DEGREES,
    PARALLAX_TWIST_DEGREES, PROXIMITY_SCALE_BOOST, SENSITIVITY_RADIUS,
};
use crate::layout::Viewport;
use crate::state::CardState;
use glam::Vec2;

/// Tuning knobs for the interaction model.
#[derive(Clone, Copy, Debug)]
pub struct GalleryConfig {
    pub radius: f32,
    pub sensitivity: f32,
    pub effect_falloff: f32,
    pub card_move_amount: f32,
    pub lerp_factor: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            radius: crate::constants::CARD_RADIUS,
            sensitivity: SENSITIVITY_RADIUS,
            effect_falloff: EFFECT_FALLOFF,
            card_move_amount: CARD_MOVE_AMOUNT,
            lerp_factor: crate::constants::LERP_FACTOR,
        }
    }
}

/// Parallax tilt targets (degrees about x, y, z) for a pointer position.
///
/// Horizontal pointer travel tilts about y, vertical about x (inverted so the
/// gallery leans toward the pointer), and the sum twists about z.
pub fn parallax_targets(pointer: Vec2, viewport: Viewport) -> (f32, f32, f32) {
    let center = viewport.center();
    if center.x == 0.0 || center.y == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let percent_x = (pointer.x - center.x) / center.x;
    let percent_y = (pointer.y - center.y) / center.y;
    (
        -percent_y * PARALLAX_TILT_DEGREES,
        percent_x * PARALLAX_TILT_DEGREES,
        (percent_x + percent_y) * PARALLAX_TWIST_DEGREES,
    )
}

/// Proximity factor in `[0, 1]` for a pointer-to-card distance.
///
/// Linear falloff over `effect_falloff`, hard zero at and beyond
/// `sensitivity`; non-increasing in distance.
#[inline]
pub fn flip_factor(distance: f32, config: &GalleryConfig) -> f32 {
    if distance < config.sensitivity {
        (1.0 - distance / config.effect_falloff).max(0.0)
    } else {
        0.0
    }
}

/// Write proximity-driven targets onto a card. A factor of zero restores the
/// rest targets, so cards outside the influence radius settle back on their
/// own.
pub fn apply_proximity(card: &mut CardState, factor: f32, config: &GalleryConfig) {
    let angle = card.angle();
    let push = config.card_move_amount * factor;
    card.target_rotation = FLIP_MAX_DEGREES * factor;
    card.target_scale = 1.0 + PROXIMITY_SCALE_BOOST * factor;
    card.target_offset = Vec2::new(push * angle.cos(), push * angle.sin());
}
