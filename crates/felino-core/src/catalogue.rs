//! Activity catalogue: the immutable list of enrichment activities.
//!
//! The catalogue is loaded once per session from a JSON document and
//! treated as read-only afterwards. The engine only inspects `id`,
//! `category`, `intensity` and `duration_min`; the descriptive fields
//! pass through to the presentation layer untouched.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;
use crate::storage::data_dir;

/// Fixed set of activity groupings. One activity per category is
/// planned per day, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Play,
    Enrichment,
    Care,
}

impl Category {
    /// Stable planning order.
    pub const ALL: [Category; 3] = [Category::Play, Category::Enrichment, Category::Care];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Play => "play",
            Category::Enrichment => "enrichment",
            Category::Care => "care",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "play" => Ok(Category::Play),
            "enrichment" => Ok(Category::Enrichment),
            "care" => Ok(Category::Care),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A single enrichment activity with fixed metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    pub category: Category,
    /// Exertion level, 1 (gentle) to 3 (vigorous).
    pub intensity: u8,
    pub duration_min: u32,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub success_signs: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Immutable ordered activity list, loaded once per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    activities: Vec<ActivityRecord>,
}

impl Catalogue {
    pub fn new(activities: Vec<ActivityRecord>) -> Self {
        Self { activities }
    }

    /// Parse a catalogue from a JSON array of activity records.
    ///
    /// # Errors
    /// Returns `CatalogueError::Malformed` if the document does not
    /// parse.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let activities = serde_json::from_str(json)?;
        Ok(Self { activities })
    }

    /// Load a catalogue from a JSON file.
    ///
    /// # Errors
    /// Returns `CatalogueError::Unavailable` if the file cannot be
    /// read, `CatalogueError::Malformed` if it cannot be parsed.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogueError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the `FELINO_CATALOGUE` path if set, otherwise from
    /// `activities.json` in the data directory.
    pub fn load_default() -> Result<Self, CatalogueError> {
        if let Ok(path) = std::env::var("FELINO_CATALOGUE") {
            return Self::from_path(Path::new(&path));
        }
        let dir = data_dir().map_err(|source| CatalogueError::Unavailable {
            path: PathBuf::from("activities.json"),
            source,
        })?;
        Self::from_path(&dir.join("activities.json"))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.activities.iter()
    }

    /// Entries of one category, in catalogue order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ActivityRecord> {
        self.activities.iter().filter(move |a| a.category == category)
    }

    pub fn first_in_category(&self, category: Category) -> Option<&ActivityRecord> {
        self.in_category(category).next()
    }

    pub fn find(&self, id: &str) -> Option<&ActivityRecord> {
        self.activities.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "feather-wand-hunt",
            "category": "play",
            "intensity": 2,
            "duration_min": 10,
            "title": "Feather wand hunt",
            "short_description": "Prey-chase session with a wand toy.",
            "steps": ["Drag the wand along the floor", "Let the cat catch it"],
            "tips": ["End on a successful catch"],
            "success_signs": ["Pouncing", "Tail flicks"],
            "warnings": ["Store the wand out of reach afterwards"]
        },
        {
            "id": "treat-puzzle-box",
            "category": "enrichment",
            "intensity": 1,
            "duration_min": 10,
            "title": "Treat puzzle box"
        }
    ]"#;

    #[test]
    fn parses_records_and_defaults_optional_fields() {
        let catalogue = Catalogue::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalogue.len(), 2);

        let wand = catalogue.find("feather-wand-hunt").unwrap();
        assert_eq!(wand.category, Category::Play);
        assert_eq!(wand.intensity, 2);
        assert_eq!(wand.duration_min, 10);
        assert_eq!(wand.steps.len(), 2);

        let puzzle = catalogue.find("treat-puzzle-box").unwrap();
        assert!(puzzle.steps.is_empty());
        assert!(puzzle.warnings.is_empty());
    }

    #[test]
    fn in_category_preserves_order_and_filters() {
        let catalogue = Catalogue::from_json_str(SAMPLE).unwrap();
        let play: Vec<_> = catalogue.in_category(Category::Play).collect();
        assert_eq!(play.len(), 1);
        assert_eq!(play[0].id, "feather-wand-hunt");
        assert!(catalogue.first_in_category(Category::Care).is_none());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = Catalogue::from_path(Path::new("/nonexistent/activities.json")).unwrap_err();
        assert!(matches!(err, CatalogueError::Unavailable { .. }));
    }

    #[test]
    fn bad_json_is_malformed() {
        let err = Catalogue::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogueError::Malformed(_)));
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("grooming".parse::<Category>().is_err());
    }
}
