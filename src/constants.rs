//! DOM hooks and visual tuning for the web frontend.
//!
//! Element ids mirror `index.html`; colours are sRGB triples taken from
//! the page palette.

// Backdrop
pub const BACKDROP_ID: &str = "backdrop";
pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";
pub const BACKDROP_PARTICLES_CLASS: &str = "backdrop--particles";
pub const BACKDROP_FALLBACK_CLASS: &str = "backdrop--fallback";
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Particle look
pub const PARTICLE_COLOR: [f32; 4] = [0.659, 0.333, 0.969, 0.4]; // #a855f7 @ 40%
pub const PARTICLE_WORLD_SIZE: f32 = 0.08;
pub const CLEAR_COLOR: [f64; 3] = [0.008, 0.024, 0.090]; // #020617

// Navigation
pub const NAV_ID: &str = "site-nav";
pub const NAV_SCROLLED_CLASS: &str = "nav--scrolled";
pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";
pub const ACTIVE_CLASS: &str = "is-active";
pub const OPEN_CLASS: &str = "is-open";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_PANEL_ID: &str = "mobile-menu";
pub const MENU_SCRIM_ID: &str = "mobile-menu-scrim";

// Hero
pub const HERO_PARALLAX_ID: &str = "hero-parallax";

// Showcase
pub const FILTERS_ID: &str = "showcase-filters";
pub const CAROUSEL_CARD_ID: &str = "carousel-card";
pub const CAROUSEL_DOTS_ID: &str = "carousel-dots";
pub const CAROUSEL_CONTROL_SELECTOR: &str = "[data-carousel]";
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_PANEL_ID: &str = "project-modal-panel";
pub const HIDDEN_CLASS: &str = "hidden";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUCCESS_ID: &str = "contact-success";
pub const FIELD_INVALID_CLASS: &str = "field--invalid";
pub const SUBMITTING_CLASS: &str = "is-submitting";

// Footer
pub const FOOTER_YEAR_ID: &str = "footer-year";
