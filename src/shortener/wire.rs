use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct SlugCheckResponse {
    pub used: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateSlugRequest<'a> {
    pub slug: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateSlugResponse {
    pub success: bool,
}
