#![cfg(target_arch = "wasm32")]
//! Browser frontend for the radial gallery engine. Mounts into four anchor
//! elements, builds the card DOM, wires pointer/click/resize listeners and
//! drives the engine from a requestAnimationFrame loop.

mod cards;
mod constants;
mod detail;
mod dom;
mod events;
mod frame;
mod tooltip;

use crate::constants::{CONTAINER_ID, DETAIL_ID, GALLERY_ID, TITLE_ID};
use crate::detail::DetailView;
use crate::dom::Subscription;
use crate::frame::{FrameContext, FrameLoop};
use crate::tooltip::Tooltip;
use gallery_core::{default_collection, Gallery, GalleryConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Mounted application. Dropping it stops the frame loop, detaches every
/// listener and removes all DOM this crate created.
struct GalleryApp {
    ctx: Rc<RefCell<FrameContext>>,
    subs: Vec<Subscription>,
    frame_loop: FrameLoop,
}

impl Drop for GalleryApp {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.subs.clear();
        let mut ctx = self.ctx.borrow_mut();
        ctx.detail.clear();
        ctx.title = None;
        for card in &ctx.cards {
            card.remove();
        }
    }
}

thread_local! {
    static APP: RefCell<Option<GalleryApp>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    if let Err(e) = mount() {
        log::error!("[mount] aborted: {e:#}");
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let gallery_el = dom::require_element(&document, GALLERY_ID)?;
    let container_el = dom::require_element(&document, CONTAINER_ID)?;
    let title_el = dom::require_element(&document, TITLE_ID)?;
    let detail_el = dom::require_element(&document, DETAIL_ID)?;

    let viewport = dom::viewport_size(&window);
    let seed = js_sys::Date::now() as u64;
    let gallery = Gallery::new(
        default_collection(),
        GalleryConfig::default(),
        viewport,
        seed,
    )?;

    let cards = cards::build_cards(&document, &gallery_el, gallery.catalog())?;
    let tooltip = Tooltip::create(&document)?;
    // The back callback needs the shared context, which does not exist yet;
    // wired up right after construction, before the view can ever show.
    let detail = DetailView::new(document.clone(), detail_el, Rc::new(|| {}));

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        gallery,
        document,
        cards,
        gallery_el,
        container_el,
        title_el,
        detail,
        tooltip,
    )));
    ctx.borrow_mut()
        .detail
        .set_on_back(events::dismiss_callback(&ctx));

    let subs = events::wire(&ctx)?;
    let frame_loop = FrameLoop::start(ctx.clone())?;

    APP.with(|app| {
        *app.borrow_mut() = Some(GalleryApp {
            ctx,
            subs,
            frame_loop,
        })
    });
    log::info!("[mount] radial gallery ready");
    Ok(())
}

/// Tear the gallery down: cancel the frame loop, remove listeners and DOM.
#[wasm_bindgen]
pub fn unmount() {
    if APP.with(|app| app.borrow_mut().take()).is_some() {
        log::info!("[unmount] gallery torn down");
    }
}
