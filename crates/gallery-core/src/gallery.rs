//! The radial gallery engine: ring state, pointer smoothing, mode machine
//! and transition choreography behind one façade.
//!
//! The rendering layer feeds events in (`pointer_moved`, `card_clicked`,
//! `viewport_resized`, `request_dismiss`), calls [`Gallery::step`] once per
//! frame, and reads transforms back out. The engine never touches platform
//! APIs.

use crate::catalog::GalleryItem;
use crate::choreography::{
    DismissChoreo, DismissEvent, GalleryTransform, RevealChoreo, SelectChoreo, SelectEvent,
};
use crate::interaction::{self, GalleryConfig};
use crate::layout::{card_angle, gallery_scale_for_width, rest_position, Viewport};
use crate::mode::{Mode, ModeMachine};
use crate::state::{CardState, PointerParallax};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery catalog is empty")]
    EmptyCatalog,
}

/// Per-card presentation emitted each frame: translation relative to the
/// ring center, in-plane spin, proximity flip (rotateY), scale and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub x: f32,
    pub y: f32,
    pub spin_deg: f32,
    pub flip_deg: f32,
    pub scale: f32,
    pub alpha: f32,
}

/// Whole-gallery parallax tilt, degrees per axis. Zero outside Overview.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub rotate_z: f32,
}

/// Frame-step notifications the rendering layer reacts to (clone element
/// lifecycle, detail view entry/exit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    SelectCloneStarted { index: usize },
    SelectFinished { index: usize },
    DismissCloneStarted { index: usize },
    CardRestored { index: usize },
    DismissFinished,
}

pub struct Gallery {
    config: GalleryConfig,
    catalog: Vec<GalleryItem>,
    cards: Vec<CardState>,
    parallax: PointerParallax,
    machine: ModeMachine,
    viewport: Viewport,
    gallery_scale: f32,
    transform: GalleryTransform,
    reveal: RevealChoreo,
    select: Option<SelectChoreo>,
    dismiss: Option<DismissChoreo>,
    /// Card kept invisible while its image clone is in flight or the detail
    /// view stands in for it.
    hidden_card: Option<usize>,
}

impl Gallery {
    pub fn new(
        catalog: Vec<GalleryItem>,
        config: GalleryConfig,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, GalleryError> {
        if catalog.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        let count = catalog.len();
        let cards = (0..count)
            .map(|i| CardState::new(card_angle(i, count)))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let gallery_scale = gallery_scale_for_width(viewport.width);
        log::info!("[mount] gallery with {count} cards, scale {gallery_scale}");
        Ok(Self {
            config,
            catalog,
            cards,
            parallax: PointerParallax::default(),
            machine: ModeMachine::new(),
            viewport,
            gallery_scale,
            transform: GalleryTransform::rest(gallery_scale),
            reveal: RevealChoreo::new(count, &mut rng),
            select: None,
            dismiss: None,
            hidden_card: None,
        })
    }

    // ---------------- input events ----------------

    /// Pointer moved; `centers` are the measured screen-space card centers,
    /// index-aligned with the catalog. Ignored on mobile viewports and
    /// outside Overview (targets keep their last rest values instead).
    pub fn pointer_moved(&mut self, pointer: Vec2, centers: &[Vec2]) {
        if self.viewport.is_mobile() || self.machine.mode() != Mode::Overview {
            return;
        }
        let (tx, ty, tz) = interaction::parallax_targets(pointer, self.viewport);
        self.parallax.set_targets(tx, ty, tz);

        for (card, center) in self.cards.iter_mut().zip(centers) {
            let distance = pointer.distance(*center);
            let factor = interaction::flip_factor(distance, &self.config);
            interaction::apply_proximity(card, factor, &self.config);
        }
    }

    /// Headless variant that derives card centers from the rest geometry.
    pub fn pointer_moved_auto(&mut self, pointer: Vec2) {
        let centers: Vec<Vec2> = (0..self.cards.len()).map(|i| self.card_center(i)).collect();
        self.pointer_moved(pointer, &centers);
    }

    /// Approximate screen-space center of a card from the rest geometry,
    /// current offset and responsive scale.
    pub fn card_center(&self, index: usize) -> Vec2 {
        let rest = rest_position(index, self.cards.len(), self.config.radius);
        self.viewport.center() + (rest + self.cards[index].current_offset) * self.gallery_scale
    }

    /// Viewport changed; recompute the responsive scale. In Overview this
    /// also settles every card and zeroes the parallax so the ring re-centers
    /// cleanly.
    pub fn viewport_resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.gallery_scale = gallery_scale_for_width(viewport.width);
        log::debug!(
            "[resize] {}x{} -> scale {}",
            viewport.width,
            viewport.height,
            self.gallery_scale
        );
        if self.machine.mode() == Mode::Overview {
            self.transform = GalleryTransform::rest(self.gallery_scale);
            self.parallax.reset();
            for card in &mut self.cards {
                card.snap_to_rest();
            }
        }
    }

    /// A card was clicked. Accepted only from Overview; starts the select
    /// choreography and returns whether the click was taken.
    pub fn card_clicked(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            log::warn!("[click] card index {index} out of range");
            return false;
        }
        if !self.machine.begin_select(index) {
            return false;
        }
        log::info!("[click] select card {index}");
        // Settle every proximity effect before the swirl so the ring reads
        // as one rigid body during the zoom.
        for card in &mut self.cards {
            card.snap_to_rest();
        }
        self.parallax.reset();
        self.select = Some(SelectChoreo::new(self.cards[index].angle(), self.transform));
        true
    }

    /// Dismiss the preview. `original_card_found` reports whether the
    /// rendering layer can still locate the selected card's slot; when it
    /// cannot, the fallback fade path is used instead of the return flight.
    pub fn request_dismiss(&mut self, original_card_found: bool) -> bool {
        if !self.machine.begin_dismiss() {
            return false;
        }
        log::info!("[dismiss] leaving preview (fallback: {})", !original_card_found);
        self.dismiss = Some(DismissChoreo::new(
            self.transform,
            self.gallery_scale,
            !original_card_found,
        ));
        true
    }

    // ---------------- per-frame step ----------------

    /// Advance all animated state by `dt` seconds and collect the phase
    /// boundary events the rendering layer must act on.
    pub fn step(&mut self, dt: f32) -> SmallVec<[GalleryEvent; 2]> {
        let mut events = SmallVec::new();
        self.reveal.advance(dt);

        if self.machine.mode() == Mode::Overview {
            self.parallax.step(self.config.lerp_factor);
            for card in &mut self.cards {
                card.step(self.config.lerp_factor);
            }
        }

        if let Some(mut sel) = self.select.take() {
            let event = sel.advance(dt);
            self.transform = sel.transform();
            if let Some(index) = self.machine.selected() {
                match event {
                    Some(SelectEvent::CloneFlightStarted) => {
                        self.hidden_card = Some(index);
                        events.push(GalleryEvent::SelectCloneStarted { index });
                    }
                    Some(SelectEvent::Finished) => {
                        self.machine.finish_select();
                        events.push(GalleryEvent::SelectFinished { index });
                    }
                    None => {}
                }
            }
            if !sel.done() {
                self.select = Some(sel);
            }
        }

        if let Some(mut dis) = self.dismiss.take() {
            let event = dis.advance(dt);
            self.transform = dis.transform();
            let index = self.machine.selected();
            match event {
                Some(DismissEvent::CloneReturnStarted) => {
                    if let Some(index) = index {
                        events.push(GalleryEvent::DismissCloneStarted { index });
                    }
                }
                Some(DismissEvent::CardRestored) => {
                    self.hidden_card = None;
                    if let Some(index) = index {
                        events.push(GalleryEvent::CardRestored { index });
                    }
                }
                Some(DismissEvent::Finished) => {
                    // Fallback path has no explicit restore point.
                    self.hidden_card = None;
                    self.machine.finish_dismiss();
                    self.parallax.reset();
                    events.push(GalleryEvent::DismissFinished);
                }
                None => {}
            }
            if dis.done() {
                self.transform = GalleryTransform::rest(self.gallery_scale);
            } else {
                self.dismiss = Some(dis);
            }
        }

        events
    }

    // ---------------- read side ----------------

    /// Presentation of one card this frame. Outside Overview the proximity
    /// effects are suppressed and cards render at the rest pose, which
    /// guarantees a fully settled ring behind every transition.
    pub fn card_transform(&self, index: usize) -> CardTransform {
        let count = self.cards.len();
        let rest = rest_position(index, count, self.config.radius);
        let spin_deg = self.cards[index].angle().to_degrees() + 90.0;
        let hidden = self.hidden_card == Some(index);
        let base_alpha = if hidden { 0.0 } else { 1.0 };

        if self.machine.mode() != Mode::Overview {
            return CardTransform {
                x: rest.x,
                y: rest.y,
                spin_deg,
                flip_deg: 0.0,
                scale: 1.0,
                alpha: base_alpha,
            };
        }

        if !self.reveal.settled(index) {
            let sample = self.reveal.sample(index, rest, spin_deg);
            return CardTransform {
                x: sample.position.x,
                y: sample.position.y,
                spin_deg: sample.spin_deg,
                flip_deg: 0.0,
                scale: sample.scale,
                alpha: sample.alpha * base_alpha,
            };
        }

        let card = &self.cards[index];
        CardTransform {
            x: rest.x + card.current_offset.x,
            y: rest.y + card.current_offset.y + self.reveal.float_offset(index),
            spin_deg,
            flip_deg: card.current_rotation,
            scale: card.current_scale,
            alpha: base_alpha,
        }
    }

    /// Smoothed parallax tilt; identity outside Overview.
    pub fn container_tilt(&self) -> ContainerTilt {
        if self.machine.mode() != Mode::Overview {
            return ContainerTilt::default();
        }
        ContainerTilt {
            rotate_x: self.parallax.current_x,
            rotate_y: self.parallax.current_y,
            rotate_z: self.parallax.current_z,
        }
    }

    pub fn transform(&self) -> GalleryTransform {
        self.transform
    }

    /// Gallery opacity during the mount reveal.
    pub fn gallery_alpha(&self) -> f32 {
        self.reveal.gallery_alpha()
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.machine.selected()
    }

    pub fn selection(&self) -> Option<&GalleryItem> {
        self.machine.selected().and_then(|i| self.catalog.get(i))
    }

    pub fn catalog(&self) -> &[GalleryItem] {
        &self.catalog
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card_angle_of(&self, index: usize) -> f32 {
        self.cards[index].angle()
    }

    pub fn gallery_scale(&self) -> f32 {
        self.gallery_scale
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Eased select clone-flight progress, when one is in flight.
    pub fn select_clone_progress(&self) -> Option<f32> {
        self.select.as_ref().and_then(|s| s.clone_progress())
    }

    /// Eased dismiss return-flight progress, when one is in flight.
    pub fn dismiss_clone_progress(&self) -> Option<f32> {
        self.dismiss.as_ref().and_then(|d| d.clone_progress())
    }

    /// Detail-content exit progress during the first dismiss stage.
    pub fn detail_exit_progress(&self) -> Option<f32> {
        self.dismiss.as_ref().and_then(|d| d.exit_progress())
    }

    #[cfg(test)]
    pub(crate) fn card_state(&self, index: usize) -> &CardState {
        &self.cards[index]
    }
}
