pub mod catalog;
pub mod choreography;
pub mod constants;
pub mod ease;
pub mod gallery;
pub mod interaction;
pub mod layout;
pub mod mode;
pub mod state;

pub use catalog::*;
pub use choreography::{DismissChoreo, GalleryTransform, RevealChoreo, SelectChoreo};
pub use ease::{Ease, Timer, Tween};
pub use gallery::{CardTransform, ContainerTilt, Gallery, GalleryError, GalleryEvent};
pub use interaction::GalleryConfig;
pub use layout::{gallery_scale_for_width, Rect, Viewport};
pub use mode::{Mode, ModeMachine};
pub use state::{lerp_toward, CardState, PointerParallax};
