//! Expanded single-item view shown while the gallery is in Preview, plus the
//! image clone flown between a card and the detail header.
//!
//! Entrance is a set of independent fixed-duration tweens (header, title clip
//! reveal, back control, content blocks, tech tags, links), advanced by the
//! frame loop. Exit styling is driven from the engine's dismiss progress so
//! both stay in lockstep.

use crate::constants::{
    CLONE_Z_INDEX, STAGE_BACK, STAGE_BLOCK_BASE, STAGE_BLOCK_DURATION, STAGE_BLOCK_STAGGER,
    STAGE_HEADER_ZOOM_DURATION, STAGE_LINK_BASE, STAGE_LINK_DURATION, STAGE_LINK_STAGGER,
    STAGE_TAG_BASE, STAGE_TAG_DURATION, STAGE_TAG_STAGGER, STAGE_TITLE,
};
use crate::dom::{self, Subscription};
use gallery_core::{Ease, GalleryItem, Rect, Tween};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fixed-position image element flown between two rects. Appended to the
/// body on creation and removed again on drop, so every exit path (including
/// the fallback fade) releases it.
pub struct TransitionImage {
    el: web::HtmlElement,
}

impl TransitionImage {
    pub fn create(document: &web::Document, src: &str, rect: &Rect) -> anyhow::Result<Self> {
        let img = document
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("create <img>: {e:?}"))?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|_| anyhow::anyhow!("<img> is not an image element"))?;
        img.set_src(src);
        let el: web::HtmlElement = img.into();
        dom::set_style(&el, "position", "fixed");
        dom::set_style(&el, "object-fit", "cover");
        dom::set_style(&el, "border-radius", "4px");
        dom::set_style(&el, "z-index", CLONE_Z_INDEX);
        dom::set_style(&el, "pointer-events", "none");
        dom::apply_rect(&el, rect);
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        _ = body.append_child(&el);
        Ok(Self { el })
    }

    pub fn set_rect(&self, rect: &Rect) {
        dom::apply_rect(&self.el, rect);
    }
}

impl Drop for TransitionImage {
    fn drop(&mut self) {
        self.el.remove();
    }
}

enum StageKind {
    TitleClip,
    Back,
    Block,
    Tag,
    Link,
    HeaderZoom,
}

struct Stage {
    el: web::HtmlElement,
    kind: StageKind,
    tween: Tween,
}

impl Stage {
    fn new(el: web::HtmlElement, kind: StageKind, delay: f32, duration: f32, ease: Ease) -> Self {
        let stage = Self {
            el,
            kind,
            tween: Tween::new(0.0, 1.0, duration, ease).with_delay(delay),
        };
        stage.apply();
        stage
    }

    fn advance(&mut self, dt: f32) {
        if self.tween.finished() {
            return;
        }
        self.tween.advance(dt);
        self.apply();
    }

    fn apply(&self) {
        let v = self.tween.value();
        let opacity = v.clamp(0.0, 1.0);
        match self.kind {
            StageKind::TitleClip => {
                let edge = opacity * 100.0;
                dom::set_style(&self.el, "opacity", "1");
                dom::set_style(
                    &self.el,
                    "clip-path",
                    &format!("polygon(0% 0%, {edge:.1}% 0%, {edge:.1}% 100%, 0% 100%)"),
                );
            }
            StageKind::Back => {
                dom::set_style(&self.el, "opacity", &format!("{opacity:.3}"));
                dom::set_style(
                    &self.el,
                    "transform",
                    &format!(
                        "rotate({:.1}deg) scale({:.3})",
                        -90.0 * (1.0 - v),
                        0.5 + 0.5 * v
                    ),
                );
            }
            StageKind::Block => {
                dom::set_style(&self.el, "opacity", &format!("{opacity:.3}"));
                dom::set_style(
                    &self.el,
                    "transform",
                    &format!("translateY({:.1}px)", 30.0 * (1.0 - v)),
                );
            }
            StageKind::Tag => {
                dom::set_style(&self.el, "opacity", &format!("{opacity:.3}"));
                dom::set_style(
                    &self.el,
                    "transform",
                    &format!(
                        "translateY({:.1}px) scale({:.3})",
                        20.0 * (1.0 - v),
                        0.8 + 0.2 * v
                    ),
                );
            }
            StageKind::Link => {
                dom::set_style(&self.el, "opacity", &format!("{opacity:.3}"));
                dom::set_style(&self.el, "transform", &format!("scale({:.3})", 0.7 + 0.3 * v));
            }
            StageKind::HeaderZoom => {
                dom::set_style(&self.el, "transform", &format!("scale({:.3})", 1.1 - 0.1 * v));
            }
        }
    }
}

/// Per-selection DOM built by [`DetailView::show`].
struct DetailDom {
    content: web::HtmlElement,
    back: web::HtmlElement,
    title: web::HtmlElement,
    header_img: web::HtmlElement,
    _back_sub: Subscription,
}

pub struct DetailView {
    document: web::Document,
    root: web::HtmlElement,
    on_back: Rc<dyn Fn()>,
    built: Option<DetailDom>,
    stages: Vec<Stage>,
}

impl DetailView {
    pub fn new(document: web::Document, root: web::HtmlElement, on_back: Rc<dyn Fn()>) -> Self {
        dom::set_style(&root, "opacity", "0");
        dom::set_style(&root, "pointer-events", "none");
        Self {
            document,
            root,
            on_back,
            built: None,
            stages: Vec::new(),
        }
    }

    /// Swap the back-button callback in. Used to break the construction
    /// cycle between the view and the shared frame context; must happen
    /// before the first [`DetailView::show`].
    pub fn set_on_back(&mut self, on_back: Rc<dyn Fn()>) {
        self.on_back = on_back;
    }

    /// Populate and reveal the view for a selected item. Called once the
    /// select clone has landed on the header rect.
    pub fn show(&mut self, item: &GalleryItem) -> anyhow::Result<()> {
        self.clear();
        let doc = &self.document;

        let header = dom::create_element(doc, "div")?;
        header.set_class_name("project-header");

        let header_img_el = doc
            .create_element("img")
            .map_err(|e| anyhow::anyhow!("create <img>: {e:?}"))?
            .dyn_into::<web::HtmlImageElement>()
            .map_err(|_| anyhow::anyhow!("<img> is not an image element"))?;
        header_img_el.set_src(&item.image_url);
        header_img_el.set_alt(&item.title);
        let header_img: web::HtmlElement = header_img_el.into();
        _ = header.append_child(&header_img);

        let back = dom::create_element(doc, "button")?;
        back.set_class_name("back-button");
        back.set_text_content(Some("\u{2190}"));
        let on_back = self.on_back.clone();
        let back_sub = Subscription::listen(&back, "click", move |ev| {
            ev.stop_propagation();
            on_back();
        });
        _ = header.append_child(&back);

        let title = dom::create_element(doc, "h1")?;
        title.set_class_name("project-title");
        title.set_text_content(Some(&item.title));
        _ = header.append_child(&title);
        _ = self.root.append_child(&header);

        let content = dom::create_element(doc, "div")?;
        content.set_class_name("project-content");

        let description = dom::create_element(doc, "p")?;
        description.set_class_name("project-description");
        description.set_text_content(Some(&item.description));
        _ = content.append_child(&description);

        let mut blocks = vec![description];
        let mut tags = Vec::new();
        if !item.technologies.is_empty() {
            let tech = dom::create_element(doc, "div")?;
            tech.set_class_name("tech-container");
            let tech_title = dom::create_element(doc, "h2")?;
            tech_title.set_text_content(Some("Technologies"));
            _ = tech.append_child(&tech_title);
            for name in &item.technologies {
                let tag = dom::create_element(doc, "span")?;
                tag.set_class_name("tech-tag");
                tag.set_text_content(Some(name));
                _ = tech.append_child(&tag);
                tags.push(tag);
            }
            _ = content.append_child(&tech);
            blocks.push(tech);
        }

        let mut links = Vec::new();
        let links_container = dom::create_element(doc, "div")?;
        links_container.set_class_name("links-container");
        for (href, label) in [
            (item.live_link.as_deref(), "View Live"),
            (item.repo_link.as_deref(), "Repository"),
        ] {
            if let Some(href) = href {
                let link = dom::create_element(doc, "a")?;
                link.set_class_name("project-link");
                _ = link.set_attribute("href", href);
                _ = link.set_attribute("target", "_blank");
                _ = link.set_attribute("rel", "noopener noreferrer");
                link.set_text_content(Some(label));
                _ = links_container.append_child(&link);
                links.push(link);
            }
        }
        _ = content.append_child(&links_container);
        blocks.push(links_container);
        _ = self.root.append_child(&content);

        // Stagger the entrance; every stage is its own fixed-duration tween.
        let mut stages = Vec::new();
        stages.push(Stage::new(
            title.clone(),
            StageKind::TitleClip,
            STAGE_TITLE.0,
            STAGE_TITLE.1,
            Ease::PowerInOut(4),
        ));
        stages.push(Stage::new(
            back.clone(),
            StageKind::Back,
            STAGE_BACK.0,
            STAGE_BACK.1,
            Ease::BackOut(1.7),
        ));
        for (i, block) in blocks.iter().enumerate() {
            stages.push(Stage::new(
                block.clone(),
                StageKind::Block,
                STAGE_BLOCK_BASE + STAGE_BLOCK_STAGGER * i as f32,
                STAGE_BLOCK_DURATION,
                Ease::PowerOut(3),
            ));
        }
        for (i, tag) in tags.iter().enumerate() {
            stages.push(Stage::new(
                tag.clone(),
                StageKind::Tag,
                STAGE_TAG_BASE + STAGE_TAG_STAGGER * i as f32,
                STAGE_TAG_DURATION,
                Ease::BackOut(1.7),
            ));
        }
        for (i, link) in links.iter().enumerate() {
            stages.push(Stage::new(
                link.clone(),
                StageKind::Link,
                STAGE_LINK_BASE + STAGE_LINK_STAGGER * i as f32,
                STAGE_LINK_DURATION,
                Ease::ElasticOut(1.0, 0.5),
            ));
        }
        stages.push(Stage::new(
            header_img.clone(),
            StageKind::HeaderZoom,
            0.0,
            STAGE_HEADER_ZOOM_DURATION,
            Ease::PowerOut(2),
        ));
        self.stages = stages;

        dom::set_style(&self.root, "opacity", "1");
        dom::set_style(&self.root, "pointer-events", "auto");
        self.built = Some(DetailDom {
            content,
            back,
            title,
            header_img,
            _back_sub: back_sub,
        });
        Ok(())
    }

    /// Advance the staggered entrance.
    pub fn advance(&mut self, dt: f32) {
        for stage in &mut self.stages {
            stage.advance(dt);
        }
    }

    /// Style the content as a function of the engine's dismiss exit
    /// progress (normal path: content slides away while the view stays up).
    pub fn apply_exit(&self, progress: f32) {
        let Some(dom_refs) = &self.built else { return };
        let fade = (1.0 - progress).clamp(0.0, 1.0);
        dom::set_style(&dom_refs.content, "opacity", &format!("{fade:.3}"));
        dom::set_style(
            &dom_refs.content,
            "transform",
            &format!("translateY({:.1}px)", 30.0 * progress),
        );
        dom::set_style(&dom_refs.back, "opacity", &format!("{fade:.3}"));
        dom::set_style(
            &dom_refs.back,
            "transform",
            &format!(
                "rotate({:.1}deg) scale({:.3})",
                90.0 * progress,
                1.0 - 0.5 * progress
            ),
        );
        dom::set_style(&dom_refs.title, "opacity", &format!("{fade:.3}"));
        dom::set_style(
            &dom_refs.title,
            "transform",
            &format!("translateY({:.1}px)", -20.0 * progress),
        );
        dom::set_style(
            &dom_refs.header_img,
            "transform",
            &format!("scale({:.3})", 1.0 + 0.05 * progress),
        );
    }

    /// Fallback path: fade the whole view, no clone flight.
    pub fn apply_fallback_exit(&self, progress: f32) {
        dom::set_style(
            &self.root,
            "opacity",
            &format!("{:.3}", (1.0 - progress).clamp(0.0, 1.0)),
        );
    }

    /// Hide the view the instant the return flight takes over.
    pub fn hide_root(&self) {
        dom::set_style(&self.root, "opacity", "0");
        dom::set_style(&self.root, "pointer-events", "none");
    }

    /// Tear the per-selection DOM down and return to the idle state.
    pub fn clear(&mut self) {
        self.stages.clear();
        self.built = None;
        while let Some(child) = self.root.first_child() {
            _ = self.root.remove_child(&child);
        }
        self.hide_root();
    }
}
