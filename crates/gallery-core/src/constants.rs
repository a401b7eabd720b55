use std::f32::consts::PI;

// Shared layout/interaction tuning constants used by the web frontend and tests.

// Ring layout
pub const CARD_RADIUS: f32 = 275.0; // ring radius in css px at scale 1.0
pub const FOCUS_ANGLE: f32 = 1.5 * PI; // a selected card swirls to the bottom of the ring

// Pointer influence
pub const SENSITIVITY_RADIUS: f32 = 500.0; // px; beyond this a card is fully at rest
pub const EFFECT_FALLOFF: f32 = 250.0; // px; linear falloff of the proximity effect
pub const CARD_MOVE_AMOUNT: f32 = 50.0; // px of radial push at full proximity
pub const FLIP_MAX_DEGREES: f32 = 180.0; // rotateY at full proximity
pub const PROXIMITY_SCALE_BOOST: f32 = 0.3; // extra scale at full proximity
pub const LERP_FACTOR: f32 = 0.4; // per-frame smoothing fraction

// Whole-gallery parallax tilt (degrees)
pub const PARALLAX_TILT_DEGREES: f32 = 15.0;
pub const PARALLAX_TWIST_DEGREES: f32 = 5.0;

// Responsive breakpoints (css px)
pub const MOBILE_BREAKPOINT: f32 = 1000.0; // pointer effects disabled below this
pub const SCALE_BREAKPOINT_SMALL: f32 = 768.0;
pub const SCALE_BREAKPOINT_MEDIUM: f32 = 1200.0;
pub const GALLERY_SCALE_SMALL: f32 = 0.6;
pub const GALLERY_SCALE_MEDIUM: f32 = 0.8;

// Mount reveal choreography (seconds unless noted)
pub const REVEAL_FADE_DURATION: f32 = 0.5;
pub const BURST_DURATION: f32 = 0.8;
pub const BURST_STAGGER: f32 = 0.02;
pub const BURST_SCALE: f32 = 1.2;
pub const BURST_JITTER_DEGREES: f32 = 15.0; // +/- spin jitter at the end of the burst
pub const SPREAD_DURATION: f32 = 1.2;
pub const SPREAD_STAGGER: f32 = 0.03;
pub const SPREAD_OVERLAP: f32 = 0.4; // spread starts this long before the burst ends
pub const FLOAT_AMPLITUDE: f32 = 10.0; // idle bob in px
pub const FLOAT_PERIOD_MIN: f32 = 1.5;
pub const FLOAT_PERIOD_JITTER: f32 = 0.5;

// Select choreography
pub const SWIRL_DURATION: f32 = 2.0;
pub const SWIRL_SCALE: f32 = 5.0;
pub const SWIRL_DROP: f32 = 1300.0; // px the gallery translates down while zooming
pub const SWIRL_EXTRA_TURN_DEGREES: f32 = 360.0;
pub const SELECT_HOLD: f32 = 0.5; // pause between the swirl and the clone flight
pub const CLONE_FLIGHT_DURATION: f32 = 0.8;

// Dismiss choreography
pub const DETAIL_EXIT_DURATION: f32 = 0.5; // content/back/title fade out
pub const DETAIL_FALLBACK_FADE: f32 = 0.5; // plain fade when the original card is gone
pub const RESET_DURATION: f32 = 2.5;
