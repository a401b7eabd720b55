// DOM anchors and presentation constants for the web frontend.

// Required mount anchors; missing any of these aborts the mount.
pub const GALLERY_ID: &str = "gallery";
pub const CONTAINER_ID: &str = "gallery-container";
pub const TITLE_ID: &str = "title-container";
pub const DETAIL_ID: &str = "project-detail";

// Card element sizing (css px, before gallery scaling)
pub const CARD_WIDTH: f32 = 150.0;
pub const CARD_HEIGHT: f32 = 200.0;
pub const CARD_PERSPECTIVE: &str = "1000px";

// Clone image flown between a card and the detail header
pub const CLONE_Z_INDEX: &str = "2000";
/// Fraction of the viewport height the detail header occupies.
pub const HEADER_HEIGHT_FRACTION: f32 = 0.5;

// Hover tooltip
pub const TOOLTIP_OFFSET_PX: f32 = 15.0;

// Floating title shown behind the zoomed gallery while a card is selected
pub const TITLE_RISE_PX: f32 = 50.0;
pub const TITLE_ENTER_DELAY: f32 = 1.25;
pub const TITLE_ENTER_DURATION: f32 = 0.75;
pub const TITLE_EXIT_DELAY: f32 = 0.5;
pub const TITLE_EXIT_DURATION: f32 = 0.75;

// Detail view staggered entrance (delay, duration) in seconds
pub const STAGE_TITLE: (f32, f32) = (0.1, 0.8);
pub const STAGE_BACK: (f32, f32) = (0.2, 0.5);
pub const STAGE_BLOCK_BASE: f32 = 0.3;
pub const STAGE_BLOCK_STAGGER: f32 = 0.15;
pub const STAGE_BLOCK_DURATION: f32 = 0.7;
pub const STAGE_TAG_BASE: f32 = 0.6;
pub const STAGE_TAG_STAGGER: f32 = 0.05;
pub const STAGE_TAG_DURATION: f32 = 0.4;
pub const STAGE_LINK_BASE: f32 = 0.8;
pub const STAGE_LINK_STAGGER: f32 = 0.1;
pub const STAGE_LINK_DURATION: f32 = 0.5;
pub const STAGE_HEADER_ZOOM_DURATION: f32 = 1.5;
