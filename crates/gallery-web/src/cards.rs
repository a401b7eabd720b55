//! Card element creation and per-frame transform application.

use crate::constants::{CARD_HEIGHT, CARD_PERSPECTIVE, CARD_WIDTH};
use crate::dom;
use gallery_core::{CardTransform, ContainerTilt, GalleryItem, GalleryTransform};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build one positioned card element per catalog item and append them to the
/// gallery node, index-aligned with the engine's card states.
pub fn build_cards(
    document: &web::Document,
    gallery_el: &web::HtmlElement,
    catalog: &[GalleryItem],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let mut cards = Vec::with_capacity(catalog.len());
    for (index, item) in catalog.iter().enumerate() {
        let card = dom::create_element(document, "div")?;
        card.set_class_name("card");
        _ = card.set_attribute("data-index", &index.to_string());
        _ = card.set_attribute("data-title", &item.title);
        dom::set_style(&card, "position", "absolute");
        dom::set_style(&card, "left", "50%");
        dom::set_style(&card, "top", "50%");
        dom::set_style(&card, "width", &format!("{CARD_WIDTH}px"));
        dom::set_style(&card, "height", &format!("{CARD_HEIGHT}px"));
        dom::set_style(&card, "transform-origin", "center center");
        // Start invisible; the reveal choreography fades the card in.
        dom::set_style(&card, "opacity", "0");

        let img = document
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("create <img>: {e:?}"))?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|_| anyhow::anyhow!("<img> is not an image element"))?;
        img.set_src(&item.image_url);
        img.set_alt(&item.title);
        dom::set_style(&img, "width", "100%");
        dom::set_style(&img, "height", "100%");
        dom::set_style(&img, "object-fit", "cover");
        dom::set_style(&img, "border-radius", "4px");
        dom::set_style(&img, "pointer-events", "none");
        _ = card.append_child(&img);

        _ = gallery_el.append_child(&card);
        cards.push(card);
    }
    Ok(cards)
}

/// Write the engine's per-card transform into inline styles. The perspective
/// term keeps the rotateY flip reading as depth.
pub fn apply_card(el: &web::HtmlElement, t: &CardTransform) {
    dom::set_style(
        el,
        "transform",
        &format!(
            "translate(-50%, -50%) translate({:.2}px, {:.2}px) perspective({}) \
             rotate({:.2}deg) rotateY({:.2}deg) scale({:.3})",
            t.x, t.y, CARD_PERSPECTIVE, t.spin_deg, t.flip_deg, t.scale
        ),
    );
    dom::set_style(el, "opacity", &format!("{:.3}", t.alpha));
}

/// Gallery-level translate/rotate/scale plus the reveal fade.
pub fn apply_gallery(el: &web::HtmlElement, t: &GalleryTransform, alpha: f32) {
    dom::set_style(
        el,
        "transform",
        &format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
            t.x, t.y, t.rotation_deg, t.scale
        ),
    );
    dom::set_style(el, "opacity", &format!("{alpha:.3}"));
}

/// Whole-container parallax tilt.
pub fn apply_tilt(el: &web::HtmlElement, tilt: &ContainerTilt) {
    dom::set_style(
        el,
        "transform",
        &format!(
            "perspective(2000px) rotateX({:.2}deg) rotateY({:.2}deg) rotateZ({:.2}deg)",
            tilt.rotate_x, tilt.rotate_y, tilt.rotate_z
        ),
    );
}
