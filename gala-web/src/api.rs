use gala_core::{CoreError, SiteSettings};
use gloo_net::http::Request;

const SITE_ENDPOINT: &str = "/v1/site";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Site settings served by the host, validated before use
pub async fn fetch_site_settings() -> Result<SiteSettings, ApiError> {
    let response = Request::get(SITE_ENDPOINT).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let settings: SiteSettings = response.json().await?;
    settings.validate()?;
    Ok(settings)
}
