//! Life in Weeks state transitions. Pure functions over `LifeState`; every
//! mutation of a persisted input writes through to storage immediately.

use chrono::NaiveDate;

use crate::console;

use super::achievements::MODULES;
use super::calendar::parse_birth_date;
use super::export::build_report;
use super::quotes::advance_quote;
use super::save::{self, Storage};
use super::state::{clamp_life_expectancy, Field, LifeState, Tab, BIRTH_INPUT_LEN};

/// Longest name accepted in the social estimator.
pub const SOCIAL_NAME_MAX: usize = 24;

// ── Startup ─────────────────────────────────────────────────────

/// Pull every persisted input into a fresh state.
pub fn restore(state: &mut LifeState, storage: &mut dyn Storage) {
    if let Some(raw) = save::load_birth_date(storage) {
        match parse_birth_date(&raw) {
            Some(date) => {
                state.profile.birth_date = Some(date);
                state.birth_input = format_date(date);
            }
            None => console::warn(&format!(
                "Life in Weeks: ignoring unreadable birth date {raw:?}"
            )),
        }
    }
    state.profile.set_life_expectancy(save::load_life_expectancy(storage));
    state.ledger = save::load_achievements(storage);
    state.language = save::load_language(storage);
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ── Text fields ─────────────────────────────────────────────────

pub fn begin_edit(state: &mut LifeState, field: Field) {
    if state.editing == Some(field) {
        return;
    }
    finish_edit(state);
    state.editing = Some(field);
}

/// Leave edit mode. A half-typed birth date snaps back to the committed one.
pub fn finish_edit(state: &mut LifeState) {
    if state.editing == Some(Field::BirthDate) {
        state.birth_input = state.profile.birth_date.map(format_date).unwrap_or_default();
    }
    state.editing = None;
}

/// Route a printable character into the field being edited.
pub fn type_char(state: &mut LifeState, storage: &mut dyn Storage, c: char) {
    match state.editing {
        Some(Field::BirthDate) => type_birth_char(state, storage, c),
        Some(Field::SocialName) => {
            if !c.is_control() && state.social.name.chars().count() < SOCIAL_NAME_MAX {
                state.social.name.push(c);
            }
        }
        None => {}
    }
}

pub fn backspace(state: &mut LifeState, storage: &mut dyn Storage) {
    match state.editing {
        Some(Field::BirthDate) => {
            state.birth_input.pop();
            birth_input_changed(state, storage);
        }
        Some(Field::SocialName) => {
            state.social.name.pop();
        }
        None => {}
    }
}

/// Digits fill `YYYY-MM-DD` left to right; dashes are inserted automatically.
fn type_birth_char(state: &mut LifeState, storage: &mut dyn Storage, c: char) {
    let len = state.birth_input.len();
    match c {
        '-' if len == 4 || len == 7 => state.birth_input.push('-'),
        '0'..='9' if len < BIRTH_INPUT_LEN => {
            if len == 4 || len == 7 {
                state.birth_input.push('-');
            }
            state.birth_input.push(c);
        }
        _ => return,
    }
    birth_input_changed(state, storage);
}

fn birth_input_changed(state: &mut LifeState, storage: &mut dyn Storage) {
    if state.birth_input.is_empty() {
        clear_birth_date(state);
        return;
    }
    if state.birth_input.len() < BIRTH_INPUT_LEN {
        return;
    }
    match parse_birth_date(&state.birth_input) {
        Some(date) => set_birth_date(state, storage, date),
        None => state.status = Some(format!("INVALID DATE: {}", state.birth_input)),
    }
}

pub fn set_birth_date(state: &mut LifeState, storage: &mut dyn Storage, date: NaiveDate) {
    state.profile.birth_date = Some(date);
    state.birth_input = format_date(date);
    save::save_birth_date(storage, date);
    refresh_age(state);
    state.status = Some(format!("ORIGIN SET: {}", state.birth_input));
}

/// Unset the birth date. The stored value is left alone and comes back on
/// the next load unless a new date overwrites it.
pub fn clear_birth_date(state: &mut LifeState) {
    state.profile.birth_date = None;
    state.age_years = None;
    state.status = Some("ORIGIN CLEARED".to_string());
}

// ── Profile ─────────────────────────────────────────────────────

pub fn adjust_life_expectancy(state: &mut LifeState, storage: &mut dyn Storage, delta: i32) {
    let current = state.profile.life_expectancy();
    let next = clamp_life_expectancy(current.saturating_add_signed(delta));
    if next == current {
        return;
    }
    state.profile.set_life_expectancy(next);
    save::save_life_expectancy(storage, next);
    state.status = Some(format!("TARGET CYCLE: {next} YEARS"));
}

pub fn toggle_view(state: &mut LifeState) {
    state.view = state.view.toggled();
}

pub fn toggle_language(state: &mut LifeState, storage: &mut dyn Storage) {
    state.language = state.language.toggled();
    save::save_language(storage, state.language);
}

pub fn select_tab(state: &mut LifeState, tab: Tab) {
    state.tab = tab;
    state.confirm_reset = false;
}

/// Grid rows: two years share one row of half-block cells.
pub fn grid_row_count(life_expectancy: u32) -> u16 {
    life_expectancy.div_ceil(2) as u16
}

pub fn scroll_grid(state: &mut LifeState, delta: i32) {
    let max = grid_row_count(state.profile.life_expectancy()).saturating_sub(1);
    state.grid_scroll = state.grid_scroll.saturating_add_signed(delta as i16).min(max);
}

// ── Periodic ────────────────────────────────────────────────────

/// Ticker body: recompute the fractional age for the current frame.
pub fn refresh_age(state: &mut LifeState) {
    state.age_years = state.current_age_years();
}

pub fn rotate_quote(state: &mut LifeState, steps: u32) {
    state.quote_index = advance_quote(state.quote_index, steps);
}

// ── Social estimator ────────────────────────────────────────────

pub fn adjust_their_age(state: &mut LifeState, delta: f64) {
    state.social.their_age = (state.social.their_age + delta).max(0.0);
}

pub fn adjust_visits(state: &mut LifeState, delta: f64) {
    state.social.visits_per_year = (state.social.visits_per_year + delta).max(0.0);
}

// ── Achievements ────────────────────────────────────────────────

/// Expand `module`, or collapse it when it is already the expanded one.
pub fn toggle_module(state: &mut LifeState, module: usize) {
    if module >= MODULES.len() {
        return;
    }
    state.expanded_module = if state.expanded_module == Some(module) {
        None
    } else {
        Some(module)
    };
}

pub fn cycle_module(state: &mut LifeState) {
    let next = state.expanded_module.map_or(0, |m| (m + 1) % MODULES.len());
    state.expanded_module = Some(next);
}

/// Flip one catalog item and persist the whole ledger.
pub fn toggle_item(state: &mut LifeState, storage: &mut dyn Storage, module: usize, item: usize) {
    let Some(entry) = MODULES.get(module).and_then(|m| m.items.get(item)) else {
        return;
    };
    let unlocked = state.ledger.toggle(entry.id);
    save::save_achievements(storage, &state.ledger);
    state.status = Some(if unlocked {
        format!("UNLOCKED: {}", entry.label)
    } else {
        format!("LOCKED: {}", entry.label)
    });
}

// ── System ──────────────────────────────────────────────────────

pub fn export_log(state: &mut LifeState) -> String {
    let report = build_report(&state.profile, &state.ledger, state.now_ms);
    state.status = Some("LOG EXPORTED".to_string());
    report
}

pub fn request_reset(state: &mut LifeState) {
    state.confirm_reset = true;
}

pub fn cancel_reset(state: &mut LifeState) {
    state.confirm_reset = false;
}

/// Purge storage and return every input to its default. No-op unless a
/// reset was requested first.
pub fn confirm_reset(state: &mut LifeState, storage: &mut dyn Storage) {
    if !state.confirm_reset {
        return;
    }
    save::reset_all(storage);
    let now_ms = state.now_ms;
    *state = LifeState::new();
    state.now_ms = now_ms;
    state.tab = Tab::System;
    state.status = Some("SYSTEM PURGED".to_string());
}
