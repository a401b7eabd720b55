//! Per-frame orchestration: advance the engine, react to its phase events,
//! and write the resulting transforms back into the DOM.
//!
//! The loop itself is a requestAnimationFrame closure gated on a shared
//! `running` flag, so `FrameLoop::stop` (or drop) cancels it cleanly.

use crate::cards;
use crate::constants::{
    HEADER_HEIGHT_FRACTION, TITLE_ENTER_DELAY, TITLE_ENTER_DURATION, TITLE_EXIT_DELAY,
    TITLE_EXIT_DURATION, TITLE_RISE_PX,
};
use crate::detail::{DetailView, TransitionImage};
use crate::dom;
use crate::tooltip::Tooltip;
use gallery_core::{Ease, Gallery, GalleryEvent, Rect, Tween};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Cap dt so a backgrounded tab does not fast-forward every choreography on
// return.
const MAX_DT: f32 = 0.1;

/// Image clone in flight between a card slot and the detail header.
struct CloneFlight {
    image: TransitionImage,
    from: Rect,
    to: Rect,
}

impl CloneFlight {
    fn apply(&self, progress: f32) {
        self.image.set_rect(&Rect::lerp(self.from, self.to, progress));
    }
}

/// Floating title shown behind the zoomed gallery while a card is selected.
/// Enters rising from below, exits rising further on dismiss; the element is
/// removed when the exit finishes or the animation is dropped.
pub struct TitleAnim {
    el: web::HtmlElement,
    tween: Tween,
    exiting: bool,
}

impl TitleAnim {
    pub fn enter(
        document: &web::Document,
        container: &web::HtmlElement,
        title: &str,
    ) -> anyhow::Result<Self> {
        let el = dom::create_element(document, "h2")?;
        el.set_class_name("floating-title");
        el.set_text_content(Some(title));
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", &format!("translateY({TITLE_RISE_PX}px)"));
        _ = container.append_child(&el);
        Ok(Self {
            el,
            tween: Tween::new(0.0, 1.0, TITLE_ENTER_DURATION, Ease::PowerOut(2))
                .with_delay(TITLE_ENTER_DELAY),
            exiting: false,
        })
    }

    pub fn begin_exit(&mut self) {
        if self.exiting {
            return;
        }
        let from = self.tween.value().clamp(0.0, 1.0);
        self.tween =
            Tween::new(from, 0.0, TITLE_EXIT_DURATION, Ease::PowerIn(2)).with_delay(TITLE_EXIT_DELAY);
        self.exiting = true;
    }

    fn advance(&mut self, dt: f32) {
        self.tween.advance(dt);
        let v = self.tween.value().clamp(0.0, 1.0);
        let direction = if self.exiting { -1.0 } else { 1.0 };
        dom::set_style(&self.el, "opacity", &format!("{v:.3}"));
        dom::set_style(
            &self.el,
            "transform",
            &format!("translateY({:.1}px)", direction * (1.0 - v) * TITLE_RISE_PX),
        );
    }

    fn finished_exit(&self) -> bool {
        self.exiting && self.tween.finished()
    }
}

impl Drop for TitleAnim {
    fn drop(&mut self) {
        self.el.remove();
    }
}

/// Everything the frame callback and the event handlers share.
pub struct FrameContext {
    pub gallery: Gallery,
    pub document: web::Document,
    pub cards: Vec<web::HtmlElement>,
    pub gallery_el: web::HtmlElement,
    pub container_el: web::HtmlElement,
    pub title_el: web::HtmlElement,
    pub detail: DetailView,
    pub tooltip: Tooltip,
    pub title: Option<TitleAnim>,
    clone: Option<CloneFlight>,
    /// Set when the current dismiss runs without a locatable card slot.
    pub fallback_dismiss: bool,
    last_frame: Instant,
}

impl FrameContext {
    pub fn new(
        gallery: Gallery,
        document: web::Document,
        cards: Vec<web::HtmlElement>,
        gallery_el: web::HtmlElement,
        container_el: web::HtmlElement,
        title_el: web::HtmlElement,
        detail: DetailView,
        tooltip: Tooltip,
    ) -> Self {
        Self {
            gallery,
            document,
            cards,
            gallery_el,
            container_el,
            title_el,
            detail,
            tooltip,
            title: None,
            clone: None,
            fallback_dismiss: false,
            last_frame: Instant::now(),
        }
    }

    fn header_rect(&self) -> Rect {
        let viewport = self.gallery.viewport();
        Rect::new(
            0.0,
            0.0,
            viewport.width,
            viewport.height * HEADER_HEIGHT_FRACTION,
        )
    }

    fn launch_select_clone(&mut self, index: usize) {
        let Some(item) = self.gallery.catalog().get(index) else {
            return;
        };
        let from = dom::element_rect(&self.cards[index]);
        let to = self.header_rect();
        match TransitionImage::create(&self.document, &item.image_url, &from) {
            Ok(image) => self.clone = Some(CloneFlight { image, from, to }),
            Err(err) => log::error!("[select] clone image: {err:#}"),
        }
    }

    fn launch_return_clone(&mut self, index: usize) {
        let Some(item) = self.gallery.catalog().get(index) else {
            return;
        };
        self.detail.hide_root();
        let from = self.header_rect();
        let to = dom::element_rect(&self.cards[index]);
        match TransitionImage::create(&self.document, &item.image_url, &from) {
            Ok(image) => self.clone = Some(CloneFlight { image, from, to }),
            Err(err) => log::error!("[dismiss] clone image: {err:#}"),
        }
    }

    fn handle_event(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::SelectCloneStarted { index } => self.launch_select_clone(index),
            GalleryEvent::SelectFinished { index } => {
                if let Some(item) = self.gallery.catalog().get(index) {
                    if let Err(err) = self.detail.show(item) {
                        log::error!("[select] detail view: {err:#}");
                    }
                }
                // The header image now covers the clone's final rect.
                self.clone = None;
            }
            GalleryEvent::DismissCloneStarted { index } => self.launch_return_clone(index),
            GalleryEvent::CardRestored { .. } => self.clone = None,
            GalleryEvent::DismissFinished => {
                self.clone = None;
                self.detail.clear();
                self.title = None;
                self.fallback_dismiss = false;
            }
        }
    }
}

/// One animation frame: step the engine, react to its events, render.
pub fn frame(ctx: &mut FrameContext) {
    let now = Instant::now();
    let dt = (now - ctx.last_frame).as_secs_f32().min(MAX_DT);
    ctx.last_frame = now;

    let events = ctx.gallery.step(dt);
    for event in events {
        ctx.handle_event(event);
    }

    if let Some(progress) = ctx.gallery.select_clone_progress() {
        if let Some(clone) = &ctx.clone {
            clone.apply(progress);
        }
    }
    if let Some(progress) = ctx.gallery.dismiss_clone_progress() {
        if let Some(clone) = &ctx.clone {
            clone.apply(progress);
        }
    }
    if let Some(progress) = ctx.gallery.detail_exit_progress() {
        if ctx.fallback_dismiss {
            ctx.detail.apply_fallback_exit(progress);
        } else {
            ctx.detail.apply_exit(progress);
        }
    }

    ctx.detail.advance(dt);
    if let Some(title) = &mut ctx.title {
        title.advance(dt);
        if title.finished_exit() {
            ctx.title = None;
        }
    }

    cards::apply_gallery(&ctx.gallery_el, &ctx.gallery.transform(), ctx.gallery.gallery_alpha());
    cards::apply_tilt(&ctx.container_el, &ctx.gallery.container_tilt());
    for (index, el) in ctx.cards.iter().enumerate() {
        cards::apply_card(el, &ctx.gallery.card_transform(index));
    }
}

fn request_animation_frame(window: &web::Window, cb: &Closure<dyn FnMut()>) {
    if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("[frame] requestAnimationFrame failed: {err:?}");
    }
}

/// Owns the self-rescheduling frame closure. Stopping clears the flag and
/// drops the closure so the Rc cycle it forms with itself is broken.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let running = Rc::new(Cell::new(true));
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let run = running.clone();
        let inner_slot = slot.clone();
        let inner_window = window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !run.get() {
                return;
            }
            frame(&mut ctx.borrow_mut());
            if let Some(cb) = inner_slot.borrow().as_ref() {
                request_animation_frame(&inner_window, cb);
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = slot.borrow().as_ref() {
            request_animation_frame(&window, cb);
        }
        Ok(Self {
            running,
            closure: slot,
        })
    }

    pub fn stop(&self) {
        self.running.set(false);
        self.closure.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
