//! SQLite-backed stores for preferences, plans and completion records.
//!
//! Three collections, one row per key:
//! - `preferences`: a single fixed-key record
//! - `daily_plans`: one plan per calendar date
//! - `daily_completion`: one completion record per calendar date
//!
//! Record bodies are stored as JSON, so the row shape matches the
//! in-memory types field for field.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use crate::date::PlanDate;
use crate::error::StoreError;
use crate::plan::{CompletionRecord, DailyPlan};
use crate::preferences::Preferences;

use super::data_dir;

const PREFERENCES_KEY: &str = "preferences";

/// SQLite database holding all persisted state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/felino/felino.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the database cannot be
    /// opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::Unavailable {
            path: PathBuf::from("~/.config/felino"),
            message: e.to_string(),
        })?;
        Self::open_at(&dir.join("felino.db"))
    }

    /// Open (and migrate) the database at an explicit path.
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the database cannot be
    /// opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Unavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::migrated(conn, path)
    }

    /// Open an in-memory database (tests, throwaway sessions).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Unavailable {
            path: PathBuf::from(":memory:"),
            message: e.to_string(),
        })?;
        Self::migrated(conn, Path::new(":memory:"))
    }

    fn migrated(conn: Connection, path: &Path) -> Result<Self, StoreError> {
        let db = Self { conn };
        db.migrate().map_err(|e| StoreError::Unavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                id    TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS daily_plans (
                date  TEXT PRIMARY KEY,
                items TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS daily_completion (
                date  TEXT PRIMARY KEY,
                items TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Stored preferences, or defaults if none were saved yet.
    pub fn preferences(&self) -> Result<Preferences, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM preferences WHERE id = ?1")?;
        let row = stmt
            .query_row(params![PREFERENCES_KEY], |row| row.get::<_, String>(0))
            .optional()?;
        match row {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Preferences::default()),
        }
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let json = serde_json::to_string(preferences)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (id, value) VALUES (?1, ?2)",
            params![PREFERENCES_KEY, json],
        )?;
        Ok(())
    }

    /// The stored plan for `date`, if one was ever written.
    pub fn plan(&self, date: PlanDate) -> Result<Option<DailyPlan>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT items FROM daily_plans WHERE date = ?1")?;
        let row = stmt
            .query_row(params![date.to_string()], |row| row.get::<_, String>(0))
            .optional()?;
        match row {
            Some(json) => Ok(Some(DailyPlan {
                date,
                items: serde_json::from_str(&json)?,
            })),
            None => Ok(None),
        }
    }

    /// Write `plan` for its date unless a plan is already stored, then
    /// return whatever the store holds for that date.
    ///
    /// Two sessions racing on the same date converge on the first
    /// committed plan; the loser's selection is discarded.
    pub fn insert_plan_if_absent(&self, plan: &DailyPlan) -> Result<DailyPlan, StoreError> {
        let json = serde_json::to_string(&plan.items)?;
        self.conn.execute(
            "INSERT OR IGNORE INTO daily_plans (date, items) VALUES (?1, ?2)",
            params![plan.date.to_string(), json],
        )?;
        self.plan(plan.date)?.ok_or_else(|| {
            StoreError::OperationFailed(format!("plan for {} missing after insert", plan.date))
        })
    }

    /// The completion record for `date`, if any toggle was ever saved.
    pub fn completion(&self, date: PlanDate) -> Result<Option<CompletionRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT items FROM daily_completion WHERE date = ?1")?;
        let row = stmt
            .query_row(params![date.to_string()], |row| row.get::<_, String>(0))
            .optional()?;
        match row {
            Some(json) => Ok(Some(CompletionRecord {
                date,
                items: serde_json::from_str(&json)?,
            })),
            None => Ok(None),
        }
    }

    pub fn save_completion(&self, record: &CompletionRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(&record.items)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO daily_completion (date, items) VALUES (?1, ?2)",
            params![record.date.to_string(), json],
        )?;
        Ok(())
    }

    /// Every completion record, in ascending date order.
    pub fn all_completions(&self) -> Result<Vec<CompletionRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, items FROM daily_completion ORDER BY date")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (date_str, json) = row?;
            let date = date_str.parse::<PlanDate>().map_err(|e| {
                StoreError::OperationFailed(format!("bad date key '{date_str}': {e}"))
            })?;
            records.push(CompletionRecord {
                date,
                items: serde_json::from_str(&json)?,
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{ActivityRecord, Category};

    fn date(year: i32, month: u32, day: u32) -> PlanDate {
        PlanDate::from_ymd(year, month, day).unwrap()
    }

    fn activity(id: &str) -> ActivityRecord {
        ActivityRecord {
            id: id.into(),
            category: Category::Play,
            intensity: 1,
            duration_min: 5,
            title: id.into(),
            short_description: String::new(),
            steps: Vec::new(),
            tips: Vec::new(),
            success_signs: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn preferences_default_until_saved() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.preferences().unwrap(), Preferences::default());

        let custom = Preferences {
            available_minutes: 15,
            ..Default::default()
        };
        db.save_preferences(&custom).unwrap();
        assert_eq!(db.preferences().unwrap(), custom);
    }

    #[test]
    fn plan_roundtrip_and_absent_date() {
        let db = Database::open_memory().unwrap();
        let today = date(2026, 8, 6);
        assert!(db.plan(today).unwrap().is_none());

        let plan = DailyPlan {
            date: today,
            items: vec![activity("p1")],
        };
        db.insert_plan_if_absent(&plan).unwrap();

        let stored = db.plan(today).unwrap().unwrap();
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items[0].id, "p1");
    }

    #[test]
    fn insert_if_absent_keeps_first_writer() {
        let db = Database::open_memory().unwrap();
        let today = date(2026, 8, 6);

        let first = DailyPlan {
            date: today,
            items: vec![activity("p1")],
        };
        let second = DailyPlan {
            date: today,
            items: vec![activity("p2")],
        };
        db.insert_plan_if_absent(&first).unwrap();
        let winner = db.insert_plan_if_absent(&second).unwrap();
        assert_eq!(winner.items[0].id, "p1");
    }

    #[test]
    fn completion_roundtrip() {
        let db = Database::open_memory().unwrap();
        let today = date(2026, 8, 6);
        assert!(db.completion(today).unwrap().is_none());

        let mut record = CompletionRecord::empty(today);
        record.items.insert("p1".into(), true);
        db.save_completion(&record).unwrap();

        assert_eq!(db.completion(today).unwrap().unwrap(), record);
    }

    #[test]
    fn all_completions_sorted_by_date() {
        let db = Database::open_memory().unwrap();
        let later = CompletionRecord::empty(date(2026, 8, 6));
        let earlier = CompletionRecord::empty(date(2026, 7, 30));
        db.save_completion(&later).unwrap();
        db.save_completion(&earlier).unwrap();

        let all = db.all_completions().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, earlier.date);
        assert_eq!(all[1].date, later.date);
    }
}
