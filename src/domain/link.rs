#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSubmission {
    pub url: String,
    pub alias: String,
}

impl LinkSubmission {
    pub fn new(url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: alias.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub success: bool,
    pub short_url: String,
}

impl ShortenResult {
    pub fn created(short_url: String) -> Self {
        Self {
            success: true,
            short_url,
        }
    }

    pub fn failed(short_url: String) -> Self {
        Self {
            success: false,
            short_url,
        }
    }
}

/// Joins the display base and the alias into the public short link.
pub fn short_url(base_url: &str, alias: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), alias)
}
