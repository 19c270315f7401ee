//! Command implementations for the KBO power ranking CLI

pub mod build;
pub mod query;

use std::path::PathBuf;

use crate::{PowerError, Result, DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR};


/// Resolve the data directory from the flag, then the environment, then the default.
///
/// An environment variable that is set but blank is an error rather than a
/// silent fallback.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        return Ok(dir);
    }

    match std::env::var(DATA_DIR_ENV_VAR) {
        Ok(value) if value.trim().is_empty() => Err(PowerError::MissingDataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}
