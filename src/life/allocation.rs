//! How remaining years split between fixed overheads and free time.

pub const SLEEP_RATIO: f64 = 0.33;
/// Averaged over a lifetime, not a 40h week.
pub const WORK_RATIO: f64 = 0.20;
/// Eating, commuting, chores, hygiene.
pub const MAINTENANCE_RATIO: f64 = 0.15;
pub const OVERHEAD_RATIO: f64 = SLEEP_RATIO + WORK_RATIO + MAINTENANCE_RATIO;

/// One named share of the remaining years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Share {
    Sleep,
    Work,
    Maintenance,
    Free,
}

impl Share {
    pub fn all() -> &'static [Share] {
        &[Share::Sleep, Share::Work, Share::Maintenance, Share::Free]
    }

    pub fn label(&self) -> &str {
        match self {
            Share::Sleep => "SLEEP CYCLES",
            Share::Work => "CAREER/WORK",
            Share::Maintenance => "MAINTENANCE",
            Share::Free => "TRUE FREEDOM",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceAllocation {
    pub remaining_years: f64,
    pub sleep_years: f64,
    pub work_years: f64,
    pub maintenance_years: f64,
    /// Residual after the overheads, so the four shares always add up.
    pub free_years: f64,
    pub free_percentage: f64,
}

impl ResourceAllocation {
    pub fn years(&self, share: Share) -> f64 {
        match share {
            Share::Sleep => self.sleep_years,
            Share::Work => self.work_years,
            Share::Maintenance => self.maintenance_years,
            Share::Free => self.free_years,
        }
    }

    pub fn percentage(&self, share: Share) -> f64 {
        self.years(share) / self.remaining_years * 100.0
    }

    /// Sleep, work and maintenance together.
    pub fn overhead_percentage(&self) -> f64 {
        OVERHEAD_RATIO * 100.0
    }
}

/// `None` when there is no remaining time to split; the panel is hidden then.
pub fn allocate(remaining_years: f64) -> Option<ResourceAllocation> {
    if !remaining_years.is_finite() || remaining_years <= 0.0 {
        return None;
    }
    let sleep_years = remaining_years * SLEEP_RATIO;
    let work_years = remaining_years * WORK_RATIO;
    let maintenance_years = remaining_years * MAINTENANCE_RATIO;
    let free_years = remaining_years - (sleep_years + work_years + maintenance_years);
    Some(ResourceAllocation {
        remaining_years,
        sleep_years,
        work_years,
        maintenance_years,
        free_years,
        free_percentage: free_years / remaining_years * 100.0,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_shares_partition_remaining(remaining in 1e-6f64..200.0) {
            let a = allocate(remaining).unwrap();
            let sum = a.sleep_years + a.work_years + a.maintenance_years + a.free_years;
            prop_assert!((sum - remaining).abs() < 1e-9, "sum {} vs {}", sum, remaining);
            prop_assert!(a.free_years > 0.0);
        }
    }
}
