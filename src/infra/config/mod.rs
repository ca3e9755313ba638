mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, HttpConfig, LogConfig, ServiceConfig};
pub(crate) use loader::default_config_path;
pub use loader::load;
