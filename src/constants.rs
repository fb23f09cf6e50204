/// Page tuning constants for the backdrop, page chrome and contact form.
///
/// These constants express intended behavior (densities, thresholds, timings)
/// and keep magic numbers out of the wiring code.
// Backdrop population: one entity per this many square CSS pixels
pub const GEOMETRIC_DENSITY: f64 = 20_000.0;
pub const PARTICLE_DENSITY: f64 = 12_000.0;
pub const GEOMETRIC_CAP: usize = 80;
pub const PARTICLE_CAP: usize = 120;

// Backdrop kinematics (pixels per 60 Hz frame)
pub const GEOMETRIC_MAX_SPEED: f32 = 0.3;
pub const PARTICLE_MAX_SPEED: f32 = 0.6;
pub const GEOMETRIC_MAX_SPIN: f32 = 0.01; // radians per frame
pub const PULSE_SPEED: f32 = 0.03; // radians per frame

// Backdrop sizing
pub const GEOMETRIC_SIZE_MIN: f32 = 20.0;
pub const GEOMETRIC_SIZE_SPAN: f32 = 30.0;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_SPAN: f32 = 0.3;

// Backdrop extras
pub const GRID_SIZE: f64 = 50.0;
pub const GRID_ALPHA: f64 = 0.05;
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_ALPHA: f32 = 0.15;
pub const POINTER_RADIUS: f32 = 140.0;
pub const POINTER_FORCE: f32 = 0.05;
pub const WRAP_MARGIN: f32 = 10.0;

// Accent colour (violet) shared by grid, shapes and links
pub const ACCENT_RGB: (u8, u8, u8) = (124, 58, 237);
pub const SECONDARY_RGB: (u8, u8, u8) = (56, 189, 248);

// 60 Hz reference frame used to scale per-frame velocities
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
// Clamp for elapsed frames after a stall (tab switch, debugger)
pub const MAX_FRAME_STEP: f32 = 3.0;

// Event pacing
pub const RESIZE_DEBOUNCE_MS: i32 = 200;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

// Scroll geometry (CSS pixels)
pub const SCROLL_SPY_OFFSET: f64 = 100.0;
pub const HEADER_OFFSET: f64 = 80.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const HEADER_SHADOW_THRESHOLD: f64 = 100.0;
pub const HEADER_SHADOW: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.3)";

// Fade-in on view
pub const REVEAL_SELECTOR: &str =
    ".skill-card, .project-card, .service-card, .about-content, .contact-content";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_ANIMATION: &str = "fadeInUp 0.8s ease-out forwards";

// Contact form
pub const RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@example.com";
pub const FALLBACK_RECIPIENT: &str = "hello@example.com";
pub const SUBJECT_PREFIX: &str = "Portfolio contact from";
pub const MESSAGE_HIDE_MS: i32 = 5_000;
