//! Achievement checklist: a static catalog of life experiences plus the set
//! of items the user has ticked off.
//!
//! The catalog is reference data and never persisted. Only the unlocked ids
//! are stored, as a JSON array of strings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct AchievementItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct AchievementModule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [AchievementItem],
}

pub const MODULES: &[AchievementModule] = &[
    AchievementModule {
        id: "exploration",
        title: "EXPLORATION",
        description: "Expanding physical and mental horizons.",
        items: &[
            AchievementItem { id: "exp_1", label: "Travel to a different continent" },
            AchievementItem { id: "exp_2", label: "See the Northern Lights (Aurora)" },
            AchievementItem { id: "exp_3", label: "Live in a foreign country for >3 months" },
            AchievementItem { id: "exp_4", label: "Learn a second language to fluency" },
            AchievementItem { id: "exp_5", label: "Solo trip to an unknown city" },
            AchievementItem { id: "exp_6", label: "Swim in an ocean" },
        ],
    },
    AchievementModule {
        id: "creation",
        title: "CREATION",
        description: "Leaving a mark through output.",
        items: &[
            AchievementItem { id: "crt_1", label: "Build a project that generates income" },
            AchievementItem { id: "crt_2", label: "Public speaking in front of 50+ people" },
            AchievementItem { id: "crt_3", label: "Write a book / lengthy manifesto" },
            AchievementItem { id: "crt_4", label: "Master a musical instrument" },
            AchievementItem { id: "crt_5", label: "Mentor someone to success" },
        ],
    },
    AchievementModule {
        id: "connection",
        title: "CONNECTION",
        description: "Depth of human experience.",
        items: &[
            AchievementItem { id: "con_1", label: "Fall deeply in love" },
            AchievementItem { id: "con_2", label: "Forgive someone who hurt you" },
            AchievementItem { id: "con_3", label: "Perform a significant act of charity" },
            AchievementItem { id: "con_4", label: "Have a conversation that lasts till sunrise" },
            AchievementItem { id: "con_5", label: "Make peace with your parents" },
        ],
    },
    AchievementModule {
        id: "resilience",
        title: "RESILIENCE",
        description: "Overcoming biological/mental limits.",
        items: &[
            AchievementItem { id: "res_1", label: "Run a Marathon (or equivalent physical feat)" },
            AchievementItem { id: "res_2", label: "Achieve financial independence" },
            AchievementItem { id: "res_3", label: "Overcome a major fear (phobia)" },
            AchievementItem { id: "res_4", label: "Meditate for 30 days consistently" },
            AchievementItem { id: "res_5", label: "Recover from a major failure" },
        ],
    },
];

pub fn find_module(module_id: &str) -> Option<&'static AchievementModule> {
    MODULES.iter().find(|m| m.id == module_id)
}

/// Unlocked vs. total count for a module or the whole catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub unlocked: usize,
    pub total: usize,
}

impl Progress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unlocked as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.unlocked == self.total
    }
}

/// Serialized as a plain JSON array of ids, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementLedger {
    unlocked: BTreeSet<String>,
}

impl AchievementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item between locked and unlocked. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.unlocked.remove(id) {
            false
        } else {
            self.unlocked.insert(id.to_string());
            true
        }
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    fn progress_of(&self, module: &AchievementModule) -> Progress {
        Progress {
            unlocked: module
                .items
                .iter()
                .filter(|item| self.is_unlocked(item.id))
                .count(),
            total: module.items.len(),
        }
    }

    /// `None` for an id that is not in the catalog.
    pub fn module_progress(&self, module_id: &str) -> Option<Progress> {
        find_module(module_id).map(|m| self.progress_of(m))
    }

    /// Catalog-wide progress. Ids outside the catalog do not count.
    pub fn global_progress(&self) -> Progress {
        MODULES.iter().fold(Progress::default(), |acc, m| {
            let p = self.progress_of(m);
            Progress {
                unlocked: acc.unlocked + p.unlocked,
                total: acc.total + p.total,
            }
        })
    }

    /// Unlocked catalog entries in catalog order.
    pub fn unlocked_in_catalog_order(
        &self,
    ) -> impl Iterator<Item = (&'static AchievementModule, &'static AchievementItem)> + '_ {
        MODULES.iter().flat_map(move |m| {
            m.items
                .iter()
                .filter(move |item| self.is_unlocked(item.id))
                .map(move |item| (m, item))
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_id() -> impl Strategy<Value = String> {
        prop_oneof![
            (0..MODULES.len()).prop_flat_map(|m| {
                (0..MODULES[m].items.len()).prop_map(move |i| MODULES[m].items[i].id.to_string())
            }),
            "[a-z_0-9]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn prop_toggle_is_own_inverse(
            seed in proptest::collection::vec(arb_id(), 0..10),
            id in arb_id(),
        ) {
            let mut ledger = AchievementLedger::new();
            for s in &seed {
                ledger.toggle(s);
            }
            let before = ledger.clone();
            ledger.toggle(&id);
            ledger.toggle(&id);
            prop_assert_eq!(ledger, before);
        }

        #[test]
        fn prop_global_is_sum_of_modules(ids in proptest::collection::vec(arb_id(), 0..30)) {
            let mut ledger = AchievementLedger::new();
            for id in &ids {
                ledger.toggle(id);
            }
            let summed: usize = MODULES
                .iter()
                .filter_map(|m| ledger.module_progress(m.id))
                .map(|p| p.unlocked)
                .sum();
            let global = ledger.global_progress();
            prop_assert_eq!(global.unlocked, summed);
            prop_assert!(global.unlocked <= global.total);
        }
    }
}
