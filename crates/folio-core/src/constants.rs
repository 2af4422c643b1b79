// Shared tuning constants for the page effects. The markup/CSS side relies on
// the class names below, so keep them in sync with the stylesheet.

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the box that must be on screen
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px"; // shrink the trigger zone at the bottom

// Scroll progress
pub const ACTIVE_PROGRESS_THRESHOLD: f64 = 0.1; // progress above this marks a section active

// Parallax speeds (pixels of offset per pixel scrolled)
pub const SHAPE_DEFAULT_SPEED: f64 = 0.3;
pub const ORB_BASE_SPEED: f64 = 0.1;
pub const ORB_SPEED_STEP: f64 = 0.05; // added per orb index

// Navigation
pub const HEADER_OFFSET_PX: f64 = 80.0; // sticky header height subtracted from anchor targets
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 900.0;

// Card tilt
pub const TILT_DIVISOR: f64 = 50.0; // px of pointer travel per degree of rotation
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_SHIFT_PX: f64 = 16.0;

// Stat counters
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: u32 = 1500;
pub const COUNTER_TICK_MS: u32 = 16;

// Tech pills
pub const PILL_STAGGER_SEC: f64 = 0.03;

// Class hooks read from the markup
pub mod selectors {
    pub const SCROLL_FADE: &str = ".scroll-fade";
    pub const REVEAL: &str = ".reveal";
    pub const HERO_FADE: &str = ".hero-new .scroll-fade";
    pub const SHAPE: &str = ".shape";
    pub const ORB: &str = ".orb";
    pub const BUTTON: &str = ".button";
    pub const PROJECT_CARD: &str = ".project-new";
    pub const TECH_PILLS: &str = ".tech-pills";
    pub const PILL: &str = "span";
    pub const STAT: &str = ".stat-float";
    pub const STAT_VALUE: &str = ".stat-float__value";
    pub const NAV: &str = ".nav";
    pub const NAV_TOGGLE: &str = ".nav__toggle";
    pub const NAV_LINKS: &str = ".nav__links";
    pub const NAV_LINK: &str = "a";
    pub const ANCHOR: &str = "a[href^=\"#\"]";
}

// Classes and attributes written back
pub mod classes {
    pub const JS: &str = "js";
    pub const FADE_IN: &str = "fade-in";
    pub const VISIBLE: &str = "is-visible";
    pub const ACTIVE: &str = "is-active";
    pub const ANIMATED: &str = "animated";
    pub const SCROLLED: &str = "scrolled";
    pub const NAV_OPEN: &str = "nav--open";
}

pub mod props {
    pub const GLOW_X: &str = "--glow-x";
    pub const GLOW_Y: &str = "--glow-y";
    pub const ANIMATION_DURATION: &str = "--animation-duration";
    pub const TRANSFORM: &str = "transform";
    pub const TRANSITION_DELAY: &str = "transition-delay";
    pub const SPEED_ATTR: &str = "data-speed";
}

pub mod media {
    pub const REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
}
