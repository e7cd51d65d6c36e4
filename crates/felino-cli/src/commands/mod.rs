pub mod config;
pub mod library;
pub mod plan;
pub mod progress;

use std::path::Path;

use felino_core::{storage, Catalogue, Database, Session};

/// Bundled fallback catalogue, used when no local catalogue exists.
const DEFAULT_ACTIVITIES: &str = include_str!("../../data/activities.json");

/// Open a session against the default store and catalogue.
pub fn open_session() -> Result<Session, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let catalogue = load_catalogue()?;
    Ok(Session::new(db, catalogue))
}

/// Resolve the catalogue: FELINO_CATALOGUE path if set, then
/// `activities.json` in the data directory, then the bundled list.
pub fn load_catalogue() -> Result<Catalogue, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("FELINO_CATALOGUE") {
        return Ok(Catalogue::from_path(Path::new(&path))?);
    }
    let local = storage::data_dir()?.join("activities.json");
    if local.exists() {
        return Ok(Catalogue::from_path(&local)?);
    }
    Ok(Catalogue::from_json_str(DEFAULT_ACTIVITIES)?)
}
