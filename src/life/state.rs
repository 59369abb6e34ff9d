//! Life in Weeks state definitions.
//!
//! Only canonical inputs live here. Everything shown on screen is derived
//! from them on demand (see `LifeState::temporal_stats` and friends).

use chrono::NaiveDate;

use super::achievements::{AchievementLedger, MODULES};
use super::allocation::{self, ResourceAllocation};
use super::calendar::{birth_instant_ms, elapsed_weeks, elapsed_years_fractional};
use super::quotes::Language;
use super::social::{self, SocialEstimate, DEFAULT_THEIR_AGE, DEFAULT_VISITS_PER_YEAR};
use super::grid::WEEKS_PER_YEAR;
use super::stats::{StatsView, TemporalStats};

pub const MIN_LIFE_EXPECTANCY: u32 = 60;
pub const MAX_LIFE_EXPECTANCY: u32 = 100;
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 80;

/// Length of a complete `YYYY-MM-DD` entry.
pub const BIRTH_INPUT_LEN: usize = 10;

pub fn clamp_life_expectancy(years: u32) -> u32 {
    years.clamp(MIN_LIFE_EXPECTANCY, MAX_LIFE_EXPECTANCY)
}

/// Root input of every derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeProfile {
    pub birth_date: Option<NaiveDate>,
    life_expectancy: u32,
}

impl Default for LifeProfile {
    fn default() -> Self {
        Self {
            birth_date: None,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
        }
    }
}

impl LifeProfile {
    pub fn life_expectancy(&self) -> u32 {
        self.life_expectancy
    }

    /// Clamped into 60..=100.
    pub fn set_life_expectancy(&mut self, years: u32) {
        self.life_expectancy = clamp_life_expectancy(years);
    }

    pub fn birth_ms(&self) -> Option<f64> {
        self.birth_date.map(birth_instant_ms)
    }
}

/// Content panels below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Grid,
    Stats,
    Freedom,
    Social,
    Achievements,
    System,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Grid,
            Tab::Stats,
            Tab::Freedom,
            Tab::Social,
            Tab::Achievements,
            Tab::System,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            Tab::Grid => "Grid",
            Tab::Stats => "Stats",
            Tab::Freedom => "Freedom",
            Tab::Social => "Social",
            Tab::Achievements => "Achievements",
            Tab::System => "System",
        }
    }

    /// Number key selecting this tab.
    pub fn key(&self) -> char {
        match self {
            Tab::Grid => '1',
            Tab::Stats => '2',
            Tab::Freedom => '3',
            Tab::Social => '4',
            Tab::Achievements => '5',
            Tab::System => '6',
        }
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }
}

/// The other person in the social estimator. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialInput {
    pub name: String,
    pub their_age: f64,
    pub visits_per_year: f64,
}

impl Default for SocialInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            their_age: DEFAULT_THEIR_AGE,
            visits_per_year: DEFAULT_VISITS_PER_YEAR,
        }
    }
}

/// Text field currently receiving typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    BirthDate,
    SocialName,
}

pub struct LifeState {
    pub profile: LifeProfile,
    /// Raw birth-date text as typed; committed to `profile` once it parses.
    pub birth_input: String,
    /// While set, printable keys edit this field instead of triggering actions.
    pub editing: Option<Field>,
    /// Wall clock of the latest frame, epoch ms.
    pub now_ms: f64,
    /// Live age read-out, refreshed by the per-frame ticker.
    pub age_years: Option<f64>,
    pub tab: Tab,
    pub view: StatsView,
    pub social: SocialInput,
    pub ledger: AchievementLedger,
    /// Index into `MODULES` of the expanded achievement module.
    pub expanded_module: Option<usize>,
    pub quote_index: usize,
    pub language: Language,
    /// Reset was requested and waits for an explicit yes/no.
    pub confirm_reset: bool,
    /// Rows scrolled off the top of the grid panel.
    pub grid_scroll: u16,
    /// One-line feedback shown in the footer.
    pub status: Option<String>,
}

impl LifeState {
    pub fn new() -> Self {
        Self {
            profile: LifeProfile::default(),
            birth_input: String::new(),
            editing: None,
            now_ms: 0.0,
            age_years: None,
            tab: Tab::Grid,
            view: StatsView::default(),
            social: SocialInput::default(),
            ledger: AchievementLedger::new(),
            expanded_module: MODULES.iter().position(|m| m.id == "exploration"),
            quote_index: 0,
            language: Language::default(),
            confirm_reset: false,
            grid_scroll: 0,
            status: None,
        }
    }

    pub fn has_birth_date(&self) -> bool {
        self.profile.birth_date.is_some()
    }

    /// `None` until a birth date is set.
    pub fn lived_weeks(&self) -> Option<i64> {
        self.profile
            .birth_ms()
            .map(|birth| elapsed_weeks(birth, self.now_ms))
    }

    pub fn temporal_stats(&self) -> Option<TemporalStats> {
        self.lived_weeks()
            .map(|lived| TemporalStats::new(lived, self.profile.life_expectancy()))
    }

    /// Remaining time split. `None` without a birth date or with no time left.
    pub fn allocation(&self) -> Option<ResourceAllocation> {
        let stats = self.temporal_stats()?;
        allocation::allocate(stats.displayed_remaining_weeks() as f64 / WEEKS_PER_YEAR as f64)
    }

    pub fn social_estimate(&self) -> SocialEstimate {
        social::estimate(self.social.their_age, self.social.visits_per_year)
    }

    /// Fractional age at the current frame, recomputed rather than read from
    /// the ticker cache.
    pub fn current_age_years(&self) -> Option<f64> {
        self.profile
            .birth_ms()
            .map(|birth| elapsed_years_fractional(birth, self.now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::calendar::{parse_birth_date, MS_PER_WEEK};

    fn state_aged_weeks(weeks: f64, years: u32) -> LifeState {
        let mut state = LifeState::new();
        let birth = parse_birth_date("1980-01-01").unwrap();
        state.profile.birth_date = Some(birth);
        state.profile.set_life_expectancy(years);
        state.now_ms = birth_instant_ms(birth) + weeks * MS_PER_WEEK + 1000.0;
        state
    }

    #[test]
    fn defaults() {
        let state = LifeState::new();
        assert_eq!(state.profile.life_expectancy(), 80);
        assert!(!state.has_birth_date());
        assert_eq!(state.lived_weeks(), None);
        assert!(state.temporal_stats().is_none());
        assert!(state.allocation().is_none());
        assert_eq!(state.expanded_module, Some(0));
        assert_eq!(state.tab, Tab::Grid);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn expectancy_is_clamped() {
        let mut profile = LifeProfile::default();
        profile.set_life_expectancy(30);
        assert_eq!(profile.life_expectancy(), 60);
        profile.set_life_expectancy(250);
        assert_eq!(profile.life_expectancy(), 100);
        profile.set_life_expectancy(77);
        assert_eq!(profile.life_expectancy(), 77);
    }

    #[test]
    fn thirty_years_scenario() {
        let state = state_aged_weeks(1560.0, 80);
        let stats = state.temporal_stats().unwrap();
        assert_eq!(stats.lived_weeks, 1560);
        assert_eq!(stats.total_weeks, 4160);
        assert!((stats.percentage_consumed - 37.5).abs() < 1e-9);

        let alloc = state.allocation().unwrap();
        assert!((alloc.remaining_years - 50.0).abs() < 1e-9);
    }

    #[test]
    fn exceeded_has_no_allocation() {
        let state = state_aged_weeks(4200.0, 80);
        assert_eq!(state.temporal_stats().unwrap().displayed_remaining_weeks(), 0);
        assert!(state.allocation().is_none());
    }

    #[test]
    fn default_social_estimate() {
        let state = LifeState::new();
        let e = state.social_estimate();
        assert_eq!(e.years_left, 20.0);
        assert_eq!(e.interactions_left, 40);
    }

    #[test]
    fn tab_keys_and_indices() {
        for (i, tab) in Tab::all().iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(tab.key(), char::from(b'1' + i as u8));
        }
    }
}
