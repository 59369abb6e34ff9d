//! Remaining in-person interactions with someone else.
//!
//! The horizon is the other person's assumed lifespan, independent of the
//! user's own life expectancy setting.

pub const ASSUMED_HORIZON_AGE: f64 = 80.0;
/// The dot visualization stops drawing here; the number is still exact.
pub const DOT_RENDER_CAP: u64 = 300;

pub const DEFAULT_THEIR_AGE: f64 = 60.0;
pub const DEFAULT_VISITS_PER_YEAR: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialEstimate {
    pub years_left: f64,
    pub interactions_left: u64,
}

impl SocialEstimate {
    pub const NONE: SocialEstimate = SocialEstimate {
        years_left: 0.0,
        interactions_left: 0,
    };

    pub fn rendered_dots(&self) -> u64 {
        self.interactions_left.min(DOT_RENDER_CAP)
    }

    pub fn is_capped(&self) -> bool {
        self.interactions_left > DOT_RENDER_CAP
    }
}

/// Negative, NaN and infinite inputs all count as zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A non-numeric age reads as 0, a newborn with the full horizon ahead. A
/// negative age zeroes the whole estimate instead.
pub fn estimate(their_age: f64, visits_per_year: f64) -> SocialEstimate {
    let their_age = if their_age.is_finite() { their_age } else { 0.0 };
    if their_age < 0.0 {
        return SocialEstimate::NONE;
    }
    let visits = non_negative(visits_per_year);
    let years_left = (ASSUMED_HORIZON_AGE - their_age).max(0.0);
    SocialEstimate {
        years_left,
        interactions_left: (years_left * visits).floor() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventy_year_old_four_visits() {
        let e = estimate(70.0, 4.0);
        assert_eq!(e.years_left, 10.0);
        assert_eq!(e.interactions_left, 40);
    }

    #[test]
    fn negative_age_yields_nothing() {
        let e = estimate(-5.0, 3.0);
        assert_eq!(e.years_left, 0.0);
        assert_eq!(e.interactions_left, 0);
    }

    #[test]
    fn newborn_has_full_horizon() {
        let e = estimate(0.0, 3.0);
        assert_eq!(e.years_left, 80.0);
        assert_eq!(e.interactions_left, 240);
    }

    #[test]
    fn negative_visits_is_zero() {
        assert_eq!(estimate(40.0, -3.0).interactions_left, 0);
    }

    #[test]
    fn past_horizon_is_zero() {
        let e = estimate(95.0, 12.0);
        assert_eq!(e.years_left, 0.0);
        assert_eq!(e.interactions_left, 0);
    }

    #[test]
    fn non_numeric_inputs_read_as_zero() {
        let e = estimate(f64::NAN, 2.0);
        assert_eq!(e.years_left, 80.0);
        assert_eq!(e.interactions_left, 160);
        assert_eq!(estimate(f64::INFINITY, 2.0).interactions_left, 160);
        assert_eq!(estimate(f64::NEG_INFINITY, 2.0).interactions_left, 160);
        assert_eq!(estimate(30.0, f64::NAN).interactions_left, 0);
        assert_eq!(estimate(30.0, f64::INFINITY).interactions_left, 0);
    }

    #[test]
    fn fractional_results_are_floored() {
        assert_eq!(estimate(77.5, 3.0).interactions_left, 7);
    }

    #[test]
    fn dot_cap() {
        let e = estimate(20.0, 52.0);
        assert_eq!(e.interactions_left, 3120);
        assert_eq!(e.rendered_dots(), DOT_RENDER_CAP);
        assert!(e.is_capped());

        let small = estimate(70.0, 4.0);
        assert_eq!(small.rendered_dots(), 40);
        assert!(!small.is_capped());
    }
}
