mod database;

pub use database::Database;

use std::io;
use std::path::PathBuf;

/// Returns `~/.config/felino[-dev]/` based on FELINO_ENV.
///
/// Set FELINO_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FELINO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("felino-dev")
    } else {
        base_dir.join("felino")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
