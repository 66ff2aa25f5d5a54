use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Intro sequence
pub const INTRO_TICK_MS: u32 = 30;
pub const INTRO_COUNT_TARGET: u8 = 100;
pub const INTRO_LOADED_PAUSE_MS: u32 = 500;
pub const DOOR_OPEN_DELAY_MS: u32 = 100;
pub const DOOR_OPEN_DURATION_MS: u32 = 1500;
pub const HERO_REVEAL_OFFSET_MS: u32 = 300;
pub const HERO_REVEAL_STEP_MS: u32 = 200;

// Hero carousel
pub const CAROUSEL_LAUNCH_DELAY_MS: u32 = 1500;
pub const CAROUSEL_WATCHDOG_MS: u32 = 5000;
pub const CAROUSEL_CYCLE_MS: u32 = 40_000;
pub const CAROUSEL_RESTART_GAP_MS: u32 = 100;
pub const HERO_VISIBILITY_MARGIN_PX: f64 = 100.0;

// Scroll and resize listeners
pub const HEADER_DEBOUNCE_MS: u32 = 10;
pub const ACTIVE_NAV_DEBOUNCE_MS: u32 = 100;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const HERO_VISIBILITY_DEBOUNCE_MS: u32 = 300;
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;
pub const ANCHOR_EXTRA_OFFSET_PX: f64 = 20.0;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const FADE_STAGGER_MS: u32 = 100;

// Stats
pub const COUNTER_TICK_MS: u32 = 30;
pub const COUNTER_STEPS: f64 = 50.0;

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const SUBMIT_FAILURE_RATE: f64 = 0.1;
pub const NAME_MAX_LEN: usize = 50;
pub const MESSAGE_MAX_LEN: usize = 1000;

// Pricing
pub const DIMMED_PLAN_OPACITY: f64 = 0.7;
