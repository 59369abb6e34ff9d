//! Lived/remaining statistics in two presentations.

use super::grid::{total_weeks, WEEKS_PER_YEAR};

pub const DAYS_PER_WEEK: i64 = 7;
pub const MEALS_PER_DAY: f64 = 3.0;
pub const SLEEPS_PER_DAY: f64 = 1.0;
pub const MONDAYS_PER_WEEK: i64 = 1;

/// Which stat cards the panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatsView {
    #[default]
    Temporal,
    Experiential,
}

impl StatsView {
    pub fn toggled(self) -> Self {
        match self {
            StatsView::Temporal => StatsView::Experiential,
            StatsView::Experiential => StatsView::Temporal,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatsView::Temporal => "Temporal",
            StatsView::Experiential => "Experiential",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemporalStats {
    pub lived_weeks: i64,
    pub total_weeks: i64,
    /// Negative once the expectancy is exceeded.
    pub remaining_weeks: i64,
    /// Clamped to 0..=100.
    pub percentage_consumed: f64,
}

impl TemporalStats {
    pub fn new(lived_weeks: i64, life_expectancy_years: u32) -> Self {
        let total = total_weeks(life_expectancy_years) as i64;
        let percentage = if total > 0 {
            (lived_weeks as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            100.0
        };
        Self {
            lived_weeks,
            total_weeks: total,
            remaining_weeks: total - lived_weeks,
            percentage_consumed: percentage,
        }
    }

    /// Remaining weeks as shown to the user: never below zero.
    pub fn displayed_remaining_weeks(&self) -> i64 {
        self.remaining_weeks.max(0)
    }

    pub fn remaining_days(&self) -> i64 {
        self.remaining_weeks * DAYS_PER_WEEK
    }

    pub fn remaining_years(&self) -> f64 {
        self.remaining_weeks as f64 / WEEKS_PER_YEAR as f64
    }

    pub fn experiential(&self) -> ExperientialStats {
        ExperientialStats::from_temporal(self)
    }
}

/// Remaining time expressed as countable experiences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExperientialStats {
    pub summers_left: u64,
    pub mondays_left: u64,
    pub meals_left: u64,
    pub sleeps_left: u64,
}

impl ExperientialStats {
    pub fn from_temporal(stats: &TemporalStats) -> Self {
        if stats.remaining_weeks <= 0 {
            return Self::default();
        }
        let days = stats.remaining_days() as f64;
        Self {
            summers_left: stats.remaining_years().floor() as u64,
            mondays_left: (stats.remaining_weeks * MONDAYS_PER_WEEK) as u64,
            meals_left: (days * MEALS_PER_DAY).floor() as u64,
            sleeps_left: (days * SLEEPS_PER_DAY).floor() as u64,
        }
    }
}

/// Thousands separators for the stat cards.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_of_eighty() {
        let stats = TemporalStats::new(1560, 80);
        assert_eq!(stats.lived_weeks, 1560);
        assert_eq!(stats.total_weeks, 4160);
        assert_eq!(stats.remaining_weeks, 2600);
        assert!((stats.percentage_consumed - 37.5).abs() < 1e-9);
    }

    #[test]
    fn exceeded_clamps_display() {
        let stats = TemporalStats::new(4200, 80);
        assert_eq!(stats.remaining_weeks, -40);
        assert_eq!(stats.displayed_remaining_weeks(), 0);
        assert_eq!(stats.percentage_consumed, 100.0);
        assert_eq!(stats.experiential(), ExperientialStats::default());
    }

    #[test]
    fn negative_lived_clamps_percentage() {
        let stats = TemporalStats::new(-10, 80);
        assert_eq!(stats.percentage_consumed, 0.0);
    }

    #[test]
    fn experiential_counts() {
        // 2600 weeks left = 50 years = 18200 days
        let exp = TemporalStats::new(1560, 80).experiential();
        assert_eq!(exp.summers_left, 50);
        assert_eq!(exp.mondays_left, 2600);
        assert_eq!(exp.meals_left, 54_600);
        assert_eq!(exp.sleeps_left, 18_200);
    }

    #[test]
    fn summers_are_floored() {
        // 51 weeks left is less than one summer
        let exp = TemporalStats::new(4160 - 51, 80).experiential();
        assert_eq!(exp.summers_left, 0);
        assert_eq!(exp.mondays_left, 51);
    }

    #[test]
    fn exactly_zero_remaining() {
        let exp = TemporalStats::new(4160, 80).experiential();
        assert_eq!(exp, ExperientialStats::default());
    }

    #[test]
    fn view_toggle() {
        assert_eq!(StatsView::default(), StatsView::Temporal);
        assert_eq!(StatsView::Temporal.toggled(), StatsView::Experiential);
        assert_eq!(StatsView::Experiential.toggled(), StatsView::Temporal);
    }

    #[test]
    fn count_formatting() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(54_600), "54,600");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-4_160), "-4,160");
    }
}
