//! Semantic action IDs for Life in Weeks click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

// ── Header controls ─────────────────────────────────────────────
pub const EDIT_BIRTH_DATE: u16 = 0;
pub const EXPECTANCY_DOWN: u16 = 1;
pub const EXPECTANCY_UP: u16 = 2;
pub const TOGGLE_LANGUAGE: u16 = 3;

// ── Tab navigation (base + Tab::index) ──────────────────────────
pub const TAB_BASE: u16 = 10;

// ── Grid ────────────────────────────────────────────────────────
pub const GRID_SCROLL_UP: u16 = 30;
pub const GRID_SCROLL_DOWN: u16 = 31;

// ── Stats ───────────────────────────────────────────────────────
pub const TOGGLE_STATS_VIEW: u16 = 40;

// ── Social estimator ────────────────────────────────────────────
pub const EDIT_SOCIAL_NAME: u16 = 50;
pub const SOCIAL_AGE_DOWN: u16 = 51;
pub const SOCIAL_AGE_UP: u16 = 52;
pub const SOCIAL_VISITS_DOWN: u16 = 53;
pub const SOCIAL_VISITS_UP: u16 = 54;

// ── Achievements ────────────────────────────────────────────────
/// base + module index: expand/collapse
pub const EXPAND_MODULE_BASE: u16 = 100;
/// base + module index * ITEM_STRIDE + item index: toggle
pub const TOGGLE_ITEM_BASE: u16 = 200;
pub const ITEM_STRIDE: u16 = 10;

// ── System ──────────────────────────────────────────────────────
pub const EXPORT_LOG: u16 = 500;
pub const REQUEST_RESET: u16 = 501;
pub const CONFIRM_RESET: u16 = 502;
pub const CANCEL_RESET: u16 = 503;
