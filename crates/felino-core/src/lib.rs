//! # Felino Core Library
//!
//! Core engine for Felino, a daily enrichment planner for cat owners.
//! Each day the engine rotates a small activity catalogue into a
//! "plan of the day" -- one activity per category, filtered by the
//! owner's preferences and steered away from yesterday's picks -- and
//! derives streak and score statistics from the completion history.
//! The CLI binary is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Plan Selector**: pure per-category selection over the catalogue,
//!   driven by a seedable RNG so tests can pin outcomes
//! - **Storage**: SQLite-backed stores for preferences, daily plans and
//!   completion records, one row per calendar date
//! - **Progress**: pure streak / rolling-score functions over the
//!   completion history
//! - **Session**: the per-run context tying catalogue, store and date
//!   together; nothing lives in module globals
//!
//! ## Key Components
//!
//! - [`PlanSelector`]: per-category selection engine
//! - [`Session`]: orchestration entry point used by the CLI
//! - [`Database`]: preferences, plan and completion persistence
//! - [`ProgressSummary`]: the four display statistics

pub mod catalogue;
pub mod date;
pub mod error;
pub mod plan;
pub mod preferences;
pub mod progress;
pub mod session;
pub mod storage;

pub use catalogue::{ActivityRecord, Catalogue, Category};
pub use date::PlanDate;
pub use error::{CatalogueError, CoreError, StoreError};
pub use plan::{CompletionRecord, DailyPlan, PlanSelector};
pub use preferences::{AgeGroup, EnergyLevel, Preferences, UNLIMITED_MINUTES};
pub use progress::ProgressSummary;
pub use session::Session;
pub use storage::Database;
