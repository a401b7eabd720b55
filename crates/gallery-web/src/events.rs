//! DOM event wiring. Every listener is a [`Subscription`] owned by the app,
//! so unmounting detaches all of them. Handlers hold only weak references to
//! the shared frame context.

use crate::dom::{self, Subscription};
use crate::frame::{FrameContext, TitleAnim};
use gallery_core::Mode;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

fn mouse_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Dismiss the preview, reporting whether the selected card's slot is still
/// in the document (when it is not, the engine falls back to a plain fade).
pub fn request_dismiss(ctx: &mut FrameContext) {
    let found = ctx
        .gallery
        .selected_index()
        .and_then(|i| ctx.cards.get(i))
        .map(|el| el.is_connected())
        .unwrap_or(false);
    if ctx.gallery.request_dismiss(found) {
        ctx.fallback_dismiss = !found;
        if let Some(title) = &mut ctx.title {
            title.begin_exit();
        }
    }
}

/// Shared dismiss entry point for the detail view's back button.
pub fn dismiss_callback(ctx: &Rc<RefCell<FrameContext>>) -> Rc<dyn Fn()> {
    let weak = Rc::downgrade(ctx);
    Rc::new(move || {
        let Some(ctx) = weak.upgrade() else { return };
        request_dismiss(&mut ctx.borrow_mut());
    })
}

fn on_card_click(weak: Weak<RefCell<FrameContext>>, index: usize) -> impl FnMut(web::Event) {
    move |ev| {
        ev.stop_propagation();
        let Some(ctx) = weak.upgrade() else { return };
        let mut ctx = ctx.borrow_mut();
        if !ctx.gallery.card_clicked(index) {
            return;
        }
        ctx.tooltip.hide();
        let title = ctx.gallery.catalog()[index].title.clone();
        match TitleAnim::enter(&ctx.document, &ctx.title_el, &title) {
            Ok(anim) => ctx.title = Some(anim),
            Err(err) => log::error!("[click] floating title: {err:#}"),
        }
    }
}

/// Attach every listener the gallery needs. The returned subscriptions keep
/// the handlers alive; dropping them detaches everything.
pub fn wire(ctx: &Rc<RefCell<FrameContext>>) -> anyhow::Result<Vec<Subscription>> {
    let window = dom::window()?;
    let document = dom::document()?;
    let cards: Vec<web::HtmlElement> = ctx.borrow().cards.clone();
    let mut subs = Vec::with_capacity(3 + cards.len() * 4);

    // Pointer parallax and per-card proximity, measured against live rects.
    {
        let weak = Rc::downgrade(ctx);
        subs.push(Subscription::listen(&document, "mousemove", move |ev| {
            let Some(ctx) = weak.upgrade() else { return };
            let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else { return };
            let mut ctx = ctx.borrow_mut();
            let centers: Vec<Vec2> = ctx.cards.iter().map(dom::element_center).collect();
            ctx.gallery.pointer_moved(mouse_position(&ev), &centers);
        }));
    }

    {
        let weak = Rc::downgrade(ctx);
        let win = window.clone();
        subs.push(Subscription::listen(&window, "resize", move |_| {
            let Some(ctx) = weak.upgrade() else { return };
            ctx.borrow_mut()
                .gallery
                .viewport_resized(dom::viewport_size(&win));
        }));
    }

    // Clicking anywhere outside a card closes the preview. Card clicks stop
    // propagation, so this never races a select.
    {
        let weak = Rc::downgrade(ctx);
        subs.push(Subscription::listen(&document, "click", move |_| {
            let Some(ctx) = weak.upgrade() else { return };
            let mut ctx = ctx.borrow_mut();
            if ctx.gallery.mode() == Mode::Preview {
                request_dismiss(&mut ctx);
            }
        }));
    }

    for (index, card) in cards.iter().enumerate() {
        subs.push(Subscription::listen(
            card,
            "click",
            on_card_click(Rc::downgrade(ctx), index),
        ));

        {
            let weak = Rc::downgrade(ctx);
            subs.push(Subscription::listen(card, "mouseenter", move |ev| {
                let Some(ctx) = weak.upgrade() else { return };
                let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else { return };
                let ctx = ctx.borrow();
                if ctx.gallery.mode() != Mode::Overview {
                    return;
                }
                let pos = mouse_position(&ev);
                let title = ctx.gallery.catalog()[index].title.clone();
                ctx.tooltip.show(&title, pos.x, pos.y);
            }));
        }
        {
            let weak = Rc::downgrade(ctx);
            subs.push(Subscription::listen(card, "mousemove", move |ev| {
                let Some(ctx) = weak.upgrade() else { return };
                let Ok(ev) = ev.dyn_into::<web::MouseEvent>() else { return };
                let ctx = ctx.borrow();
                if ctx.gallery.mode() != Mode::Overview {
                    return;
                }
                let pos = mouse_position(&ev);
                ctx.tooltip.move_to(pos.x, pos.y);
            }));
        }
        {
            let weak = Rc::downgrade(ctx);
            subs.push(Subscription::listen(card, "mouseleave", move |_| {
                let Some(ctx) = weak.upgrade() else { return };
                ctx.borrow().tooltip.hide();
            }));
        }
    }

    Ok(subs)
}
