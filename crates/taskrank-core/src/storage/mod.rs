mod config;
pub mod task_store;

pub use config::{Config, DisplayConfig, StoreConfig};
pub use task_store::{JsonTaskStore, TaskSource};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the taskrank data directory, creating it if needed.
///
/// `TASKRANK_HOME` overrides the location outright. Otherwise it is
/// `~/.config/taskrank/`, or `~/.config/taskrank-dev/` when `TASKRANK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("TASKRANK_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TASKRANK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("taskrank-dev")
            } else {
                base_dir.join("taskrank")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
