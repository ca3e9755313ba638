use std::path::Path;

use crate::{
    infra::{self, error::AppError, storage_layout::StorageLayout},
    shortener::{CurlTransport, ServiceError, ShortenerClient},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    let guard = infra::logging::init(&context.config.logging, &context.layout)?;
    tracing::debug!(service = ?context.config.service, "configuration loaded");

    Ok(context.with_log_guard(guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let layout = StorageLayout::resolve()?;
    let config = infra::config::load(config_path)?;
    config.service.validate()?;

    Ok(AppContext::new(config, layout))
}

pub fn compose_service(context: &AppContext) -> Result<ShortenerClient<CurlTransport>, ServiceError> {
    let transport = CurlTransport::new(&context.config.http);
    ShortenerClient::new(transport, &context.config.service)
}
