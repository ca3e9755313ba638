use std::{fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "teeny";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = dirs::config_dir().ok_or_else(|| AppError::StoragePathResolution {
            details: "unable to resolve config base directory".into(),
        })?;

        // Not every platform has a state dir; the cache dir is close enough for logs.
        let log_base = dirs::state_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve state or cache base directory".into(),
            })?;

        Ok(Self {
            config_dir: config_base.join(APP_DIR_NAME),
            log_dir: log_base.join(APP_DIR_NAME),
        })
    }

    pub fn ensure_log_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.log_dir).map_err(|source| AppError::StorageDirCreate {
            path: self.log_dir.clone(),
            source,
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file_name() -> &'static str {
        "teeny.log"
    }
}
