//! User preferences that filter the daily selection.
//!
//! A single record, persisted in the preference store and read by the
//! plan selector. Defaults apply whenever the record (or a field) is
//! absent. Saving preferences never touches an already-planned date:
//! edits take effect from the next unplanned day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalogue::ActivityRecord;

/// The top slot of the duration picker doubles as "no time limit": at
/// this value every activity duration fits, regardless of length.
pub const UNLIMITED_MINUTES: u32 = 15;

/// How energetic the cat currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Calm,
    #[default]
    Moderate,
    Active,
}

/// Life stage of the cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Kitten,
    #[default]
    Adult,
    Senior,
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnergyLevel::Calm => "calm",
            EnergyLevel::Moderate => "moderate",
            EnergyLevel::Active => "active",
        })
    }
}

impl FromStr for EnergyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "calm" => Ok(EnergyLevel::Calm),
            "moderate" => Ok(EnergyLevel::Moderate),
            "active" => Ok(EnergyLevel::Active),
            other => Err(format!("unknown energy level: {other}")),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgeGroup::Kitten => "kitten",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        })
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kitten" => Ok(AgeGroup::Kitten),
            "adult" => Ok(AgeGroup::Adult),
            "senior" => Ok(AgeGroup::Senior),
            other => Err(format!("unknown age group: {other}")),
        }
    }
}

/// The owner's current filtering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Minutes available per day. [`UNLIMITED_MINUTES`] means no limit.
    #[serde(default = "default_available_minutes")]
    pub available_minutes: u32,
    #[serde(default)]
    pub energy: EnergyLevel,
    #[serde(default)]
    pub age_group: AgeGroup,
}

fn default_available_minutes() -> u32 {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            available_minutes: default_available_minutes(),
            energy: EnergyLevel::default(),
            age_group: AgeGroup::default(),
        }
    }
}

impl Preferences {
    /// Whether an activity passes all three preference filters.
    pub fn allows(&self, activity: &ActivityRecord) -> bool {
        self.time_fits(activity) && self.energy_fits(activity) && self.age_fits(activity)
    }

    fn time_fits(&self, activity: &ActivityRecord) -> bool {
        activity.duration_min <= self.available_minutes
            || self.available_minutes == UNLIMITED_MINUTES
    }

    fn energy_fits(&self, activity: &ActivityRecord) -> bool {
        match self.energy {
            EnergyLevel::Calm => activity.intensity <= 2,
            EnergyLevel::Moderate => activity.intensity >= 1,
            EnergyLevel::Active => activity.intensity >= 2,
        }
    }

    fn age_fits(&self, activity: &ActivityRecord) -> bool {
        match self.age_group {
            AgeGroup::Kitten => activity.intensity <= 2,
            AgeGroup::Adult => activity.intensity >= 1,
            AgeGroup::Senior => activity.intensity <= 2,
        }
    }
}
