//! Persistence of the user's inputs through a flat string key/value store.
//!
//! ## Layout
//!
//! | key | value |
//! |---|---|
//! | `lifeinweeks_birthdate` | `YYYY-MM-DD` |
//! | `lifeinweeks_expectancy` | decimal integer |
//! | `lifeinweeks_achievements` | JSON array of item ids |
//! | `lifeinweeks_lang` | `EN` / `TR` |
//!
//! Every write is last-write-wins. Anything unreadable is logged and replaced
//! by its default; loading never fails.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::console;

use super::achievements::AchievementLedger;
use super::quotes::Language;
use super::state::{clamp_life_expectancy, DEFAULT_LIFE_EXPECTANCY};

pub const KEY_BIRTH_DATE: &str = "lifeinweeks_birthdate";
pub const KEY_LIFE_EXPECTANCY: &str = "lifeinweeks_expectancy";
pub const KEY_ACHIEVEMENTS: &str = "lifeinweeks_achievements";
pub const KEY_LANGUAGE: &str = "lifeinweeks_lang";

/// Minimal key/value port so the app logic runs against `localStorage` in the
/// browser and against memory in tests.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// `None` when storage is unavailable (private mode, sandboxed iframe).
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.inner.set_item(key, value) {
            console::warn(&format!("Life in Weeks: failed to write {key} to localStorage: {e:?}"));
        }
    }

    fn remove(&mut self, key: &str) {
        let _ = self.inner.remove_item(key);
    }

    fn clear(&mut self) {
        if let Err(e) = self.inner.clear() {
            console::warn(&format!("Life in Weeks: failed to clear localStorage: {e:?}"));
        }
    }
}

/// Best available storage for the current host.
pub fn open_storage() -> Box<dyn Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = LocalStorage::open() {
            return Box::new(storage);
        }
        console::warn("Life in Weeks: localStorage unavailable, progress will not persist");
    }
    Box::new(MemoryStorage::new())
}

// ── Profile ─────────────────────────────────────────────────────

/// Raw birth-date text as last saved. Not validated here: the caller feeds it
/// through the same parser as typed input.
pub fn load_birth_date(storage: &dyn Storage) -> Option<String> {
    storage.get(KEY_BIRTH_DATE).filter(|s| !s.is_empty())
}

pub fn save_birth_date(storage: &mut dyn Storage, date: NaiveDate) {
    storage.set(KEY_BIRTH_DATE, &date.format("%Y-%m-%d").to_string());
}

pub fn load_life_expectancy(storage: &dyn Storage) -> u32 {
    match storage.get(KEY_LIFE_EXPECTANCY) {
        None => DEFAULT_LIFE_EXPECTANCY,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(years) => clamp_life_expectancy(years),
            Err(e) => {
                console::warn(&format!(
                    "Life in Weeks: unreadable life expectancy {raw:?} ({e}), using default"
                ));
                DEFAULT_LIFE_EXPECTANCY
            }
        },
    }
}

pub fn save_life_expectancy(storage: &mut dyn Storage, years: u32) {
    storage.set(KEY_LIFE_EXPECTANCY, &years.to_string());
}

// ── Achievements ────────────────────────────────────────────────

pub fn load_achievements(storage: &mut dyn Storage) -> AchievementLedger {
    let json = match storage.get(KEY_ACHIEVEMENTS) {
        Some(j) => j,
        None => return AchievementLedger::new(),
    };

    match AchievementLedger::from_json(&json) {
        Ok(ledger) => ledger,
        Err(e) => {
            console::warn(&format!(
                "Life in Weeks: failed to parse achievements (discarding): {e}"
            ));
            storage.remove(KEY_ACHIEVEMENTS);
            AchievementLedger::new()
        }
    }
}

pub fn save_achievements(storage: &mut dyn Storage, ledger: &AchievementLedger) {
    match ledger.to_json() {
        Ok(json) => storage.set(KEY_ACHIEVEMENTS, &json),
        Err(e) => console::warn(&format!(
            "Life in Weeks: failed to serialize achievements: {e}"
        )),
    }
}

// ── Language ────────────────────────────────────────────────────

pub fn load_language(storage: &dyn Storage) -> Language {
    storage
        .get(KEY_LANGUAGE)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(storage: &mut dyn Storage, language: Language) {
    storage.set(KEY_LANGUAGE, language.code());
}

/// Wipe every key. Callers restore their in-memory defaults themselves.
pub fn reset_all(storage: &mut dyn Storage) {
    storage.clear();
    console::log("Life in Weeks: storage purged");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::calendar::parse_birth_date;

    #[test]
    fn missing_keys_give_defaults() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_birth_date(&storage), None);
        assert_eq!(load_life_expectancy(&storage), 80);
        assert_eq!(load_achievements(&mut storage), AchievementLedger::new());
        assert_eq!(load_language(&storage), Language::En);
    }

    #[test]
    fn profile_roundtrip() {
        let mut storage = MemoryStorage::new();
        let date = parse_birth_date("1991-02-03").unwrap();
        save_birth_date(&mut storage, date);
        save_life_expectancy(&mut storage, 92);

        assert_eq!(storage.get(KEY_BIRTH_DATE).as_deref(), Some("1991-02-03"));
        assert_eq!(storage.get(KEY_LIFE_EXPECTANCY).as_deref(), Some("92"));
        assert_eq!(load_birth_date(&storage).as_deref(), Some("1991-02-03"));
        assert_eq!(load_life_expectancy(&storage), 92);
    }

    #[test]
    fn expectancy_out_of_range_is_clamped() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_LIFE_EXPECTANCY, "150");
        assert_eq!(load_life_expectancy(&storage), 100);
        storage.set(KEY_LIFE_EXPECTANCY, "12");
        assert_eq!(load_life_expectancy(&storage), 60);
    }

    #[test]
    fn garbage_expectancy_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_LIFE_EXPECTANCY, "eighty");
        assert_eq!(load_life_expectancy(&storage), DEFAULT_LIFE_EXPECTANCY);
        storage.set(KEY_LIFE_EXPECTANCY, "-5");
        assert_eq!(load_life_expectancy(&storage), DEFAULT_LIFE_EXPECTANCY);
    }

    #[test]
    fn empty_birth_date_is_unset() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_BIRTH_DATE, "");
        assert_eq!(load_birth_date(&storage), None);
    }

    #[test]
    fn achievements_roundtrip() {
        let mut storage = MemoryStorage::new();
        let mut ledger = AchievementLedger::new();
        ledger.toggle("exp_1");
        ledger.toggle("res_5");
        save_achievements(&mut storage, &ledger);

        assert_eq!(
            storage.get(KEY_ACHIEVEMENTS).as_deref(),
            Some(r#"["exp_1","res_5"]"#)
        );
        assert_eq!(load_achievements(&mut storage), ledger);
    }

    #[test]
    fn corrupt_achievements_fail_open() {
        let mut storage = MemoryStorage::new();
        storage.set(KEY_ACHIEVEMENTS, "[\"exp_1\", oops");
        assert_eq!(load_achievements(&mut storage), AchievementLedger::new());
        // discarded so the next load is clean
        assert_eq!(storage.get(KEY_ACHIEVEMENTS), None);
    }

    #[test]
    fn language_roundtrip_and_fallback() {
        let mut storage = MemoryStorage::new();
        save_language(&mut storage, Language::Tr);
        assert_eq!(storage.get(KEY_LANGUAGE).as_deref(), Some("TR"));
        assert_eq!(load_language(&storage), Language::Tr);

        storage.set(KEY_LANGUAGE, "DE");
        assert_eq!(load_language(&storage), Language::En);
    }

    #[test]
    fn reset_clears_everything() {
        let mut storage = MemoryStorage::new();
        save_birth_date(&mut storage, parse_birth_date("2000-01-01").unwrap());
        save_life_expectancy(&mut storage, 70);
        save_language(&mut storage, Language::Tr);
        let mut ledger = AchievementLedger::new();
        ledger.toggle("con_2");
        save_achievements(&mut storage, &ledger);

        reset_all(&mut storage);

        for key in [KEY_BIRTH_DATE, KEY_LIFE_EXPECTANCY, KEY_ACHIEVEMENTS, KEY_LANGUAGE] {
            assert_eq!(storage.get(key), None, "{key} survived reset");
        }
    }
}
