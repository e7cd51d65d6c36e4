//! Daily plan selection and completion records.
//!
//! The selector is the only place randomness enters the engine. It is
//! called at most once per date by the session layer; an already
//! persisted plan is always returned as stored, never re-rolled.

use std::collections::{BTreeMap, BTreeSet};

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::catalogue::{ActivityRecord, Catalogue, Category};
use crate::date::PlanDate;
use crate::preferences::Preferences;

/// The "plan of the day": one selected activity per category, in
/// category order. Immutable once persisted for its date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: PlanDate,
    pub items: Vec<ActivityRecord>,
}

impl DailyPlan {
    pub fn item_for(&self, category: Category) -> Option<&ActivityRecord> {
        self.items.iter().find(|item| item.category == category)
    }

    pub fn activity_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}

/// Per-date record of which activities were marked done. Absent keys
/// mean "not completed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub date: PlanDate,
    #[serde(default)]
    pub items: BTreeMap<String, bool>,
}

impl CompletionRecord {
    pub fn empty(date: PlanDate) -> Self {
        Self {
            date,
            items: BTreeMap::new(),
        }
    }

    /// Number of entries marked done.
    pub fn completed_count(&self) -> usize {
        self.items.values().filter(|done| **done).count()
    }

    /// Every entry is done. An empty record qualifies: a day with no
    /// toggles has nothing left open.
    pub fn is_fully_completed(&self) -> bool {
        self.items.values().all(|done| *done)
    }
}

/// Picks one activity per category for a date.
///
/// Selection is uniform over the surviving candidates of a category and
/// independent between categories. The generator is seedable so tests
/// can pin outcomes.
pub struct PlanSelector {
    rng: Mcg128Xsl64,
}

impl PlanSelector {
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Select the plan for `today`.
    ///
    /// Per category: catalogue entries passing the preference filters,
    /// minus yesterday's pick unless that would leave nothing, decided
    /// by a uniform draw. A category where nothing passes the filters
    /// falls back to its first catalogue entry; a category with no
    /// entries at all is left out of the plan.
    pub fn select(
        &mut self,
        catalogue: &Catalogue,
        preferences: &Preferences,
        yesterday: Option<&DailyPlan>,
        today: PlanDate,
    ) -> DailyPlan {
        let yesterdays_ids: BTreeSet<&str> = yesterday
            .map(|plan| plan.activity_ids().collect())
            .unwrap_or_default();

        let mut items = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let eligible: Vec<&ActivityRecord> = catalogue
                .in_category(category)
                .filter(|activity| preferences.allows(activity))
                .collect();

            let fresh: Vec<&ActivityRecord> = eligible
                .iter()
                .copied()
                .filter(|activity| !yesterdays_ids.contains(activity.id.as_str()))
                .collect();
            let pool: &[&ActivityRecord] = if fresh.is_empty() { &eligible } else { &fresh };

            let picked = pool
                .choose(&mut self.rng)
                .copied()
                .or_else(|| catalogue.first_in_category(category));
            if let Some(activity) = picked {
                items.push(activity.clone());
            }
        }

        DailyPlan { date: today, items }
    }
}

impl Default for PlanSelector {
    fn default() -> Self {
        Self::new()
    }
}
