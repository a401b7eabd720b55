//! Ring layout: rest geometry for the card circle and responsive scaling.

use crate::constants::{
    GALLERY_SCALE_MEDIUM, GALLERY_SCALE_SMALL, MOBILE_BREAKPOINT, SCALE_BREAKPOINT_MEDIUM,
    SCALE_BREAKPOINT_SMALL,
};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Fixed ring angle for a card, `2π·index/count` radians.
#[inline]
pub fn card_angle(index: usize, count: usize) -> f32 {
    debug_assert!(count > 0);
    index as f32 / count as f32 * TAU
}

/// Rest position of a card on a ring of the given radius.
#[inline]
pub fn rest_position(index: usize, count: usize, radius: f32) -> Vec2 {
    let angle = card_angle(index, count);
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Responsive gallery scale derived from viewport width.
#[inline]
pub fn gallery_scale_for_width(width: f32) -> f32 {
    if width < SCALE_BREAKPOINT_SMALL {
        GALLERY_SCALE_SMALL
    } else if width < SCALE_BREAKPOINT_MEDIUM {
        GALLERY_SCALE_MEDIUM
    } else {
        1.0
    }
}

/// Signed shortest rotation from `from` to `to`, wrapped into `(-π, π]`.
///
/// The select swirl uses this so the clicked card takes the short way round
/// to the focus angle instead of unwinding the whole ring.
#[inline]
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    let mut delta = to - from;
    while delta > PI {
        delta -= TAU;
    }
    while delta < -PI {
        delta += TAU;
    }
    delta
}

/// Screen-space rectangle in css pixels, used for the clone flight between
/// a card's rect and the detail header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Interpolate every edge independently; `t` is already eased.
    pub fn lerp(a: Rect, b: Rect, t: f32) -> Rect {
        Rect {
            x: a.x + (b.x - a.x) * t,
            y: a.y + (b.y - a.y) * t,
            width: a.width + (b.width - a.width) * t,
            height: a.height + (b.height - a.height) * t,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Current viewport in css pixels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Pointer-driven effects are disabled on narrow viewports.
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}
