//! Week grid derivation: one cell per 7-day block of the expected lifespan.

use ratzilla::ratatui::style::Color;

pub const WEEKS_PER_YEAR: u32 = 52;

/// Ages highlighted on the year axis.
pub const MILESTONE_AGES: &[u32] = &[18, 21, 30, 40, 50, 60, 65, 70, 80, 90, 100];

/// Where a week sits relative to "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekStatus {
    Past,
    Current,
    Future,
}

/// Coarse age band used to tint lived weeks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeStage {
    EarlyYears,
    School,
    Career,
    Retirement,
}

/// `(max_age_exclusive, stage)`, ascending. First match wins.
const STAGE_BANDS: &[(u32, LifeStage)] = &[
    (5, LifeStage::EarlyYears),
    (22, LifeStage::School),
    (60, LifeStage::Career),
    (120, LifeStage::Retirement),
];

impl LifeStage {
    pub fn all() -> &'static [LifeStage] {
        &[
            LifeStage::EarlyYears,
            LifeStage::School,
            LifeStage::Career,
            LifeStage::Retirement,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            LifeStage::EarlyYears => "Early Years",
            LifeStage::School => "School",
            LifeStage::Career => "Career & Building",
            LifeStage::Retirement => "Golden Years",
        }
    }

    /// Tint for lived weeks: greys brightening with age. The current week is
    /// the only coloured cell.
    pub fn color(&self) -> Color {
        match self {
            LifeStage::EarlyYears => Color::Rgb(113, 113, 122),
            LifeStage::School => Color::Rgb(161, 161, 170),
            LifeStage::Career => Color::Rgb(212, 212, 216),
            LifeStage::Retirement => Color::Rgb(244, 244, 245),
        }
    }
}

pub fn stage_for_year(year: u32) -> LifeStage {
    STAGE_BANDS
        .iter()
        .find(|(max_age, _)| year < *max_age)
        .map(|(_, stage)| *stage)
        .unwrap_or(LifeStage::EarlyYears)
}

/// One week of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekCell {
    pub index: u32,
    pub year: u32,
    pub week_of_year: u32,
    pub status: WeekStatus,
    pub stage: LifeStage,
}

pub fn total_weeks(life_expectancy_years: u32) -> u32 {
    life_expectancy_years * WEEKS_PER_YEAR
}

/// Index of the `Current` cell, if "now" falls inside the grid.
pub fn current_index(lived_weeks: i64, total: u32) -> Option<u32> {
    if lived_weeks >= 0 && lived_weeks < total as i64 {
        Some(lived_weeks as u32)
    } else {
        None
    }
}

pub fn cell_status(index: u32, lived_weeks: i64, total: u32) -> WeekStatus {
    if current_index(lived_weeks, total) == Some(index) {
        WeekStatus::Current
    } else if (index as i64) < lived_weeks {
        WeekStatus::Past
    } else {
        WeekStatus::Future
    }
}

pub fn cell_at(index: u32, lived_weeks: i64, total: u32) -> WeekCell {
    let year = index / WEEKS_PER_YEAR;
    WeekCell {
        index,
        year,
        week_of_year: index % WEEKS_PER_YEAR,
        status: cell_status(index, lived_weeks, total),
        stage: stage_for_year(year),
    }
}

/// Lazily walk every cell of the grid in index order.
pub fn cells(lived_weeks: i64, life_expectancy_years: u32) -> impl Iterator<Item = WeekCell> {
    let total = total_weeks(life_expectancy_years);
    (0..total).map(move |i| cell_at(i, lived_weeks, total))
}

pub fn derive_grid(lived_weeks: i64, life_expectancy_years: u32) -> Vec<WeekCell> {
    cells(lived_weeks, life_expectancy_years).collect()
}

/// Per-status tally, used by the legend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub past: u32,
    pub current: u32,
    pub future: u32,
}

impl StatusCounts {
    pub fn total(&self) -> u32 {
        self.past + self.current + self.future
    }
}

/// Closed-form tally; agrees with counting `cells()` one by one.
pub fn status_counts(lived_weeks: i64, life_expectancy_years: u32) -> StatusCounts {
    let total = total_weeks(life_expectancy_years);
    let past = lived_weeks.clamp(0, total as i64) as u32;
    let current = u32::from(current_index(lived_weeks, total).is_some());
    StatusCounts {
        past,
        current,
        future: total - past - current,
    }
}
