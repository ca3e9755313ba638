use crate::{
    infra::secrets::scrub_secret,
    shortener::{AliasAvailability, ServiceError},
    usecases::contracts::Validation,
};

pub const EMPTY_ALIAS_MESSAGE: &str = "Please enter a valid slug";
pub const ALIAS_IN_USE_MESSAGE: &str = "Alias (slug) already in use, try a different one";

/// Maps a remote availability answer to an inline prompt verdict.
pub fn alias_verdict(
    result: Result<AliasAvailability, ServiceError>,
    secret_key: &str,
) -> Validation {
    match result {
        Ok(AliasAvailability::Available) => None,
        Ok(AliasAvailability::InUse) => Some(ALIAS_IN_USE_MESSAGE.to_owned()),
        Err(error) => {
            tracing::warn!(code = error.code(), "alias availability check failed");
            Some(format!(
                "Could not verify alias availability: {}",
                scrub_secret(&error.to_string(), secret_key)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_alias_is_rejected_and_free_alias_accepted() {
        assert_eq!(
            alias_verdict(Ok(AliasAvailability::InUse), "k"),
            Some(ALIAS_IN_USE_MESSAGE.to_owned())
        );
        assert_eq!(alias_verdict(Ok(AliasAvailability::Available), "k"), None);
    }

    #[test]
    fn service_failure_rejects_without_leaking_secret() {
        let verdict = alias_verdict(
            Err(ServiceError::transport("tls handshake failed for key s3cr3t-key")),
            "s3cr3t-key",
        )
        .expect("failure must reject");

        assert!(verdict.starts_with("Could not verify alias availability"));
        assert!(!verdict.contains("s3cr3t-key"));
    }
}
