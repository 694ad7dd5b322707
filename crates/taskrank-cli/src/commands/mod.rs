pub mod config;
pub mod rank;
pub mod task;

use std::path::PathBuf;

use taskrank_core::{Config, JsonTaskStore};

/// Store at `file` if given, otherwise wherever the config points.
pub fn open_store(file: Option<PathBuf>, config: &Config) -> Result<JsonTaskStore, Box<dyn std::error::Error>> {
    let path = match file {
        Some(path) => path,
        None => config.tasks_path()?,
    };
    tracing::debug!(path = %path.display(), "opening task store");
    Ok(JsonTaskStore::new(path))
}
