//! HTTP(S) getter

use tracing::warn;

use crate::version::error::FetchError;
use crate::version::providers::Getter;

/// Getter for `http://` and `https://` locations
pub struct HttpGetter {
    client: reqwest::Client,
}

impl HttpGetter {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("helm-autoupdate/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }
}

#[async_trait::async_trait]
impl Getter for HttpGetter {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            warn!("Chart repository returned status {}: {}", status, url);
            return Err(FetchError::InvalidResponse(format!(
                "Unexpected status {} for {}",
                status, url
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
