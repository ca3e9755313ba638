use thiserror::Error;

use crate::shortener::{AliasAvailability, LinkService, ServiceError};

#[derive(Debug, Error)]
pub enum CheckAliasError {
    #[error("alias must not be empty")]
    EmptyAlias,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// One-shot availability query for `teeny check`.
pub fn check_alias(
    service: &mut dyn LinkService,
    alias: &str,
) -> Result<AliasAvailability, CheckAliasError> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(CheckAliasError::EmptyAlias);
    }

    let availability = service.check_alias(alias)?;
    tracing::info!(alias, ?availability, "alias availability checked");

    Ok(availability)
}
