//! Smoothed per-card and whole-gallery state.
//!
//! Every animated quantity is a current/target pair converged by
//! [`lerp_toward`] once per frame. Targets are written by the interaction
//! model; currents are only ever written by the frame step, so a settled
//! value stays put until a new target arrives.

use glam::Vec2;

/// Move `current` a fixed fraction of the remaining distance toward `target`.
///
/// With `0 < factor < 1` the value approaches the target monotonically and
/// never overshoots; at `current == target` the step is a no-op.
#[inline]
pub fn lerp_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Animated state for one card on the ring.
#[derive(Clone, Debug)]
pub struct CardState {
    /// Ring angle in radians. Fixed at creation, never reassigned.
    angle: f32,
    pub current_offset: Vec2,
    pub target_offset: Vec2,
    /// Proximity flip (rotateY), degrees.
    pub current_rotation: f32,
    pub target_rotation: f32,
    pub current_scale: f32,
    pub target_scale: f32,
}

impl CardState {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            current_offset: Vec2::ZERO,
            target_offset: Vec2::ZERO,
            current_rotation: 0.0,
            target_rotation: 0.0,
            current_scale: 1.0,
            target_scale: 1.0,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Point the targets back at the rest pose (offset 0, flip 0, scale 1).
    pub fn rest_targets(&mut self) {
        self.target_offset = Vec2::ZERO;
        self.target_rotation = 0.0;
        self.target_scale = 1.0;
    }

    /// Hard-reset currents and targets to the rest pose.
    pub fn snap_to_rest(&mut self) {
        self.rest_targets();
        self.current_offset = Vec2::ZERO;
        self.current_rotation = 0.0;
        self.current_scale = 1.0;
    }

    /// One smoothing step for every animated field.
    pub fn step(&mut self, factor: f32) {
        self.current_offset.x = lerp_toward(self.current_offset.x, self.target_offset.x, factor);
        self.current_offset.y = lerp_toward(self.current_offset.y, self.target_offset.y, factor);
        self.current_rotation = lerp_toward(self.current_rotation, self.target_rotation, factor);
        self.current_scale = lerp_toward(self.current_scale, self.target_scale, factor);
    }

    pub fn at_rest(&self) -> bool {
        self.current_offset == Vec2::ZERO
            && self.target_offset == Vec2::ZERO
            && self.current_rotation == 0.0
            && self.target_rotation == 0.0
            && self.current_scale == 1.0
            && self.target_scale == 1.0
    }
}

/// Whole-gallery tilt driven by pointer position, in degrees per axis.
///
/// One owned instance on the engine; zeroed on preview entry/exit and on
/// resize.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerParallax {
    pub target_x: f32,
    pub target_y: f32,
    pub target_z: f32,
    pub current_x: f32,
    pub current_y: f32,
    pub current_z: f32,
}

impl PointerParallax {
    pub fn set_targets(&mut self, x: f32, y: f32, z: f32) {
        self.target_x = x;
        self.target_y = y;
        self.target_z = z;
    }

    pub fn step(&mut self, factor: f32) {
        self.current_x = lerp_toward(self.current_x, self.target_x, factor);
        self.current_y = lerp_toward(self.current_y, self.target_y, factor);
        self.current_z = lerp_toward(self.current_z, self.target_z, factor);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
