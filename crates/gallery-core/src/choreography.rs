//! Staged transition choreography.
//!
//! Each transition is a small phase machine of fixed-duration tweens advanced
//! by the frame loop. Phases chain on completion, so every choreography
//! reaches `Done` in bounded time; there is no path that stalls the
//! re-entrancy guard.

use crate::constants::{
    BURST_DURATION, BURST_JITTER_DEGREES, BURST_SCALE, BURST_STAGGER, CLONE_FLIGHT_DURATION,
    DETAIL_EXIT_DURATION, DETAIL_FALLBACK_FADE, FLOAT_AMPLITUDE, FLOAT_PERIOD_JITTER,
    FLOAT_PERIOD_MIN, FOCUS_ANGLE, RESET_DURATION, REVEAL_FADE_DURATION, SELECT_HOLD,
    SPREAD_DURATION, SPREAD_OVERLAP, SPREAD_STAGGER, SWIRL_DROP, SWIRL_DURATION,
    SWIRL_EXTRA_TURN_DEGREES, SWIRL_SCALE,
};
use crate::ease::{Ease, Timer, Tween};
use crate::layout::shortest_arc;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Gallery-level transform the rendering layer applies to the ring as a
/// whole. Rest pose is `(0, 0, 0°, responsive scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryTransform {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl GalleryTransform {
    pub fn rest(scale: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            scale,
        }
    }
}

// ---------------- Mount reveal ----------------

#[derive(Clone, Debug)]
struct CardReveal {
    spin_from: f32,
    jitter_deg: f32,
    float_period: f32,
    float_delay: f32,
}

/// Mount animation: fade in, burst the cards out from the center, spread
/// them onto the ring, then bob each one gently forever.
#[derive(Clone, Debug)]
pub struct RevealChoreo {
    elapsed: f32,
    burst_total: f32,
    cards: Vec<CardReveal>,
}

/// Presentation of one card while its reveal is still playing.
#[derive(Clone, Copy, Debug)]
pub struct RevealSample {
    pub position: Vec2,
    pub spin_deg: f32,
    pub scale: f32,
    pub alpha: f32,
}

impl RevealChoreo {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let cards = (0..count)
            .map(|_| CardReveal {
                spin_from: rng.gen::<f32>() * 360.0,
                jitter_deg: (rng.gen::<f32>() * 2.0 - 1.0) * BURST_JITTER_DEGREES,
                float_period: FLOAT_PERIOD_MIN + rng.gen::<f32>() * FLOAT_PERIOD_JITTER,
                float_delay: rng.gen::<f32>() * 0.5,
            })
            .collect();
        let burst_total = BURST_DURATION + BURST_STAGGER * count.saturating_sub(1) as f32;
        Self {
            elapsed: 0.0,
            burst_total,
            cards,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Overall gallery opacity during the initial fade.
    pub fn gallery_alpha(&self) -> f32 {
        (self.elapsed / REVEAL_FADE_DURATION).clamp(0.0, 1.0)
    }

    fn burst_start(&self, index: usize) -> f32 {
        REVEAL_FADE_DURATION + BURST_STAGGER * index as f32
    }

    fn spread_start(&self, index: usize) -> f32 {
        REVEAL_FADE_DURATION + self.burst_total - SPREAD_OVERLAP + SPREAD_STAGGER * index as f32
    }

    /// True once the card has landed on the ring and smoothing takes over.
    pub fn settled(&self, index: usize) -> bool {
        self.elapsed >= self.spread_start(index) + SPREAD_DURATION
    }

    pub fn all_settled(&self) -> bool {
        (0..self.cards.len()).all(|i| self.settled(i))
    }

    /// Sample the in-flight presentation of a card whose rest position and
    /// rest spin are given.
    pub fn sample(&self, index: usize, rest: Vec2, rest_spin_deg: f32) -> RevealSample {
        let card = &self.cards[index];
        let tb = ((self.elapsed - self.burst_start(index)) / BURST_DURATION).clamp(0.0, 1.0);
        let ts = ((self.elapsed - self.spread_start(index)) / SPREAD_DURATION).clamp(0.0, 1.0);
        let burst = Ease::BackOut(1.7).apply(tb);
        let spread = Ease::ElasticOut(1.0, 0.8).apply(ts);

        let burst_spin = card.spin_from + (rest_spin_deg + card.jitter_deg - card.spin_from) * burst;
        let burst_scale = BURST_SCALE * burst;
        RevealSample {
            position: rest * spread,
            spin_deg: burst_spin + (rest_spin_deg - burst_spin) * spread,
            scale: burst_scale + (1.0 - burst_scale) * spread,
            alpha: tb.min(1.0),
        }
    }

    /// Idle vertical bob, active once a card has settled. Starts from zero
    /// after a per-card random delay so the ring does not pulse in lockstep.
    pub fn float_offset(&self, index: usize) -> f32 {
        if !self.settled(index) {
            return 0.0;
        }
        let card = &self.cards[index];
        let t = self.elapsed - (self.spread_start(index) + SPREAD_DURATION) - card.float_delay;
        if t <= 0.0 {
            return 0.0;
        }
        FLOAT_AMPLITUDE * 0.5 * (1.0 - (TAU * t / card.float_period).cos())
    }
}

// ---------------- Select: Overview -> Preview ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SelectPhase {
    Swirl,
    Hold,
    CloneFlight,
    Done,
}

/// Events surfaced to the caller as a select transition crosses phase
/// boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectEvent {
    CloneFlightStarted,
    Finished,
}

/// Swirl the ring so the clicked card lands at the focus angle while the
/// whole gallery zooms and drops away, then fly an image clone from the card
/// rect to the detail header.
#[derive(Clone, Debug)]
pub struct SelectChoreo {
    phase: SelectPhase,
    rotation: Tween,
    scale: Tween,
    drop: Tween,
    hold: Timer,
    clone: Tween,
}

impl SelectChoreo {
    pub fn new(card_angle: f32, start: GalleryTransform) -> Self {
        let arc = shortest_arc(card_angle, FOCUS_ANGLE);
        let target_deg = start.rotation_deg + arc.to_degrees() + SWIRL_EXTRA_TURN_DEGREES;
        let ease = Ease::PowerInOut(4);
        Self {
            phase: SelectPhase::Swirl,
            rotation: Tween::new(start.rotation_deg, target_deg, SWIRL_DURATION, ease),
            scale: Tween::new(start.scale, SWIRL_SCALE, SWIRL_DURATION, ease),
            drop: Tween::new(start.y, SWIRL_DROP, SWIRL_DURATION, ease),
            hold: Timer::new(SELECT_HOLD),
            clone: Tween::new(0.0, 1.0, CLONE_FLIGHT_DURATION, Ease::PowerInOut(3)),
        }
    }

    pub fn advance(&mut self, dt: f32) -> Option<SelectEvent> {
        match self.phase {
            SelectPhase::Swirl => {
                self.rotation.advance(dt);
                self.scale.advance(dt);
                self.drop.advance(dt);
                if self.rotation.finished() {
                    self.phase = SelectPhase::Hold;
                }
                None
            }
            SelectPhase::Hold => {
                self.hold.advance(dt);
                if self.hold.finished() {
                    self.phase = SelectPhase::CloneFlight;
                    Some(SelectEvent::CloneFlightStarted)
                } else {
                    None
                }
            }
            SelectPhase::CloneFlight => {
                self.clone.advance(dt);
                if self.clone.finished() {
                    self.phase = SelectPhase::Done;
                    Some(SelectEvent::Finished)
                } else {
                    None
                }
            }
            SelectPhase::Done => None,
        }
    }

    pub fn transform(&self) -> GalleryTransform {
        GalleryTransform {
            x: 0.0,
            y: self.drop.value(),
            rotation_deg: self.rotation.value(),
            scale: self.scale.value(),
        }
    }

    /// Eased clone-flight progress while the flight is active.
    pub fn clone_progress(&self) -> Option<f32> {
        (self.phase == SelectPhase::CloneFlight).then(|| self.clone.value())
    }

    pub fn done(&self) -> bool {
        self.phase == SelectPhase::Done
    }
}

// ---------------- Dismiss: Preview -> Overview ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DismissPhase {
    DetailExit,
    CloneReturn,
    Reset,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissEvent {
    CloneReturnStarted,
    CardRestored,
    Finished,
}

/// Reverse of the select choreography: fade the detail content, fly the
/// clone back to the original card, then unwind the ring to its rest pose.
///
/// With `fallback` set (original card missing from the ring) the clone
/// flight is skipped and the detail view simply fades before the reset.
#[derive(Clone, Debug)]
pub struct DismissChoreo {
    fallback: bool,
    phase: DismissPhase,
    exit: Tween,
    clone: Tween,
    rotation: Tween,
    scale: Tween,
    rise: Tween,
}

impl DismissChoreo {
    pub fn new(start: GalleryTransform, rest_scale: f32, fallback: bool) -> Self {
        let exit_duration = if fallback {
            DETAIL_FALLBACK_FADE
        } else {
            DETAIL_EXIT_DURATION
        };
        let ease = Ease::PowerInOut(4);
        Self {
            fallback,
            phase: DismissPhase::DetailExit,
            exit: Tween::new(0.0, 1.0, exit_duration, Ease::PowerIn(3)),
            clone: Tween::new(0.0, 1.0, CLONE_FLIGHT_DURATION, Ease::PowerInOut(3)),
            rotation: Tween::new(start.rotation_deg, 0.0, RESET_DURATION, ease),
            scale: Tween::new(start.scale, rest_scale, RESET_DURATION, ease),
            rise: Tween::new(start.y, 0.0, RESET_DURATION, ease),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn advance(&mut self, dt: f32) -> Option<DismissEvent> {
        match self.phase {
            DismissPhase::DetailExit => {
                self.exit.advance(dt);
                if self.exit.finished() {
                    if self.fallback {
                        self.phase = DismissPhase::Reset;
                        None
                    } else {
                        self.phase = DismissPhase::CloneReturn;
                        Some(DismissEvent::CloneReturnStarted)
                    }
                } else {
                    None
                }
            }
            DismissPhase::CloneReturn => {
                self.clone.advance(dt);
                if self.clone.finished() {
                    self.phase = DismissPhase::Reset;
                    Some(DismissEvent::CardRestored)
                } else {
                    None
                }
            }
            DismissPhase::Reset => {
                self.rotation.advance(dt);
                self.scale.advance(dt);
                self.rise.advance(dt);
                if self.rotation.finished() {
                    self.phase = DismissPhase::Done;
                    Some(DismissEvent::Finished)
                } else {
                    None
                }
            }
            DismissPhase::Done => None,
        }
    }

    pub fn transform(&self) -> GalleryTransform {
        GalleryTransform {
            x: 0.0,
            y: self.rise.value(),
            rotation_deg: self.rotation.value(),
            scale: self.scale.value(),
        }
    }

    /// Detail-content exit progress while the exit stage is active.
    pub fn exit_progress(&self) -> Option<f32> {
        (self.phase == DismissPhase::DetailExit).then(|| self.exit.value())
    }

    /// Eased return-flight progress while the flight is active.
    pub fn clone_progress(&self) -> Option<f32> {
        (self.phase == DismissPhase::CloneReturn).then(|| self.clone.value())
    }

    pub fn done(&self) -> bool {
        self.phase == DismissPhase::Done
    }
}
