//! Session context: one store handle, one loaded catalogue, one date.
//!
//! Entry points construct a `Session` and drive every operation through
//! it. The catalogue and the current date are fixed for the session's
//! lifetime; nothing is cached in module globals.

use crate::catalogue::Catalogue;
use crate::date::PlanDate;
use crate::error::Result;
use crate::plan::{CompletionRecord, DailyPlan, PlanSelector};
use crate::preferences::Preferences;
use crate::progress::{self, ProgressSummary};
use crate::storage::Database;

pub struct Session {
    db: Database,
    catalogue: Catalogue,
    selector: PlanSelector,
    today: PlanDate,
}

impl Session {
    /// A session for the current local date.
    pub fn new(db: Database, catalogue: Catalogue) -> Self {
        Self {
            db,
            catalogue,
            selector: PlanSelector::new(),
            today: PlanDate::today(),
        }
    }

    /// Pin the session to a fixed date (tests, replays).
    pub fn at_date(mut self, today: PlanDate) -> Self {
        self.today = today;
        self
    }

    /// Use a deterministic selector.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector = PlanSelector::with_seed(seed);
        self
    }

    pub fn today(&self) -> PlanDate {
        self.today
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn preferences(&self) -> Result<Preferences> {
        Ok(self.db.preferences()?)
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        Ok(self.db.save_preferences(preferences)?)
    }

    /// Today's plan, selecting and persisting one if none exists yet.
    ///
    /// A plan already stored for today is returned as stored --
    /// selection never reruns for a planned date, so preference edits
    /// only shape plans from the next unplanned date on. The write is
    /// insert-if-absent: if another session planned today first, its
    /// plan wins and is returned.
    pub fn todays_plan(&mut self) -> Result<DailyPlan> {
        if let Some(existing) = self.db.plan(self.today)? {
            return Ok(existing);
        }

        let preferences = self.db.preferences()?;
        let yesterday = self.db.plan(self.today.previous_day())?;
        let plan = self.selector.select(
            &self.catalogue,
            &preferences,
            yesterday.as_ref(),
            self.today,
        );
        Ok(self.db.insert_plan_if_absent(&plan)?)
    }

    /// Today's completion record, defaulting to an empty one. The
    /// default is not persisted; the first toggle writes it.
    pub fn todays_completion(&self) -> Result<CompletionRecord> {
        Ok(self
            .db
            .completion(self.today)?
            .unwrap_or_else(|| CompletionRecord::empty(self.today)))
    }

    /// Set one activity's done flag for today and persist the record.
    pub fn toggle_completion(&self, activity_id: &str, done: bool) -> Result<CompletionRecord> {
        let mut record = self.todays_completion()?;
        record.items.insert(activity_id.to_string(), done);
        self.db.save_completion(&record)?;
        Ok(record)
    }

    pub fn all_completions(&self) -> Result<Vec<CompletionRecord>> {
        Ok(self.db.all_completions()?)
    }

    /// The four display statistics over the full completion history.
    pub fn progress(&self) -> Result<ProgressSummary> {
        let records = self.db.all_completions()?;
        Ok(progress::summarize(&records, self.today))
    }
}
