//! Hover tooltip showing a card's title near the cursor.
//!
//! The node is created once at mount, owned by the app, and removed again on
//! drop, so teardown cannot leak it.

use crate::constants::TOOLTIP_OFFSET_PX;
use crate::dom;
use web_sys as web;

pub struct Tooltip {
    el: web::HtmlElement,
}

impl Tooltip {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let el = dom::create_element(document, "div")?;
        el.set_class_name("tooltip");
        dom::set_style(&el, "position", "fixed");
        dom::set_style(&el, "padding", "8px 12px");
        dom::set_style(&el, "background", "rgba(0, 0, 0, 0.8)");
        dom::set_style(&el, "color", "white");
        dom::set_style(&el, "border-radius", "4px");
        dom::set_style(&el, "font-size", "14px");
        dom::set_style(&el, "font-weight", "bold");
        dom::set_style(&el, "pointer-events", "none");
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "z-index", "1000");
        dom::set_style(&el, "transform", "translateY(10px)");
        dom::set_style(&el, "transition", "opacity 0.3s, transform 0.3s");
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        _ = body.append_child(&el);
        Ok(Self { el })
    }

    pub fn show(&self, title: &str, client_x: f32, client_y: f32) {
        self.el.set_text_content(Some(title));
        dom::set_style(&self.el, "opacity", "1");
        dom::set_style(&self.el, "transform", "translateY(0)");
        self.move_to(client_x, client_y);
    }

    pub fn move_to(&self, client_x: f32, client_y: f32) {
        dom::set_style(
            &self.el,
            "left",
            &format!("{:.0}px", client_x + TOOLTIP_OFFSET_PX),
        );
        dom::set_style(
            &self.el,
            "top",
            &format!("{:.0}px", client_y + TOOLTIP_OFFSET_PX),
        );
    }

    pub fn hide(&self) {
        dom::set_style(&self.el, "opacity", "0");
        dom::set_style(&self.el, "transform", "translateY(10px)");
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.el.remove();
    }
}
