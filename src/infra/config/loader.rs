use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
    storage_layout::StorageLayout,
};

const ENV_BASE_URL: &str = "TEENY_BASE_URL";
const ENV_ENDPOINT_URL: &str = "TEENY_ENDPOINT_URL";
const ENV_SECRET_KEY: &str = "TEENY_SECRET_KEY";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => StorageLayout::resolve()?.config_file(),
    };

    load_internal(&config_path, |key| env::var(key).ok())
}

pub(crate) fn load_internal<F>(config_path: &Path, lookup_env: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = AppConfig::default();

    if config_path.exists() {
        let raw = fs::read_to_string(config_path).map_err(|source| AppError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;

        let file_config: FileConfig =
            toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
                path: config_path.to_path_buf(),
                source,
            })?;

        file_config.merge_into(&mut config);
    } else {
        tracing::debug!(path = %config_path.display(), "config file missing, using defaults");
    }

    apply_env_overrides(&mut config, lookup_env);
    normalize(&mut config);

    Ok(config)
}

fn apply_env_overrides<F>(config: &mut AppConfig, lookup_env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup_env(key).filter(|value| !value.trim().is_empty());

    if let Some(base_url) = non_empty(ENV_BASE_URL) {
        config.service.base_url = base_url;
    }

    if let Some(endpoint_url) = non_empty(ENV_ENDPOINT_URL) {
        config.service.endpoint_url = endpoint_url;
    }

    if let Some(secret_key) = non_empty(ENV_SECRET_KEY) {
        config.service.secret_key = secret_key;
    }
}

fn normalize(config: &mut AppConfig) {
    config.service.base_url = trim_url(&config.service.base_url);
    config.service.endpoint_url = trim_url(&config.service.endpoint_url);
    config.service.secret_key = config.service.secret_key.trim().to_owned();
}

fn trim_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_owned()
}

/// Default location shown in guidance messages.
pub(crate) fn default_config_path() -> Option<PathBuf> {
    StorageLayout::resolve().ok().map(|layout| layout.config_file())
}
