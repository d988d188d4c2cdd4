//! Source that fetches `index.yaml` straight from the repository

use reqwest::Url;
use tracing::info;

use crate::version::catalog::VersionCatalog;
use crate::version::error::FetchError;
use crate::version::providers::ProviderRegistry;
use crate::version::registry::VersionIndexSource;

/// Name of the index document under a repository location
pub const INDEX_FILE: &str = "index.yaml";

/// Resolves each location's scheme through a [`ProviderRegistry`] and
/// parses the index it returns
pub struct DirectSource {
    providers: ProviderRegistry,
}

impl DirectSource {
    pub fn new(providers: ProviderRegistry) -> Self {
        Self { providers }
    }
}

#[async_trait::async_trait]
impl VersionIndexSource for DirectSource {
    async fn fetch(&self, location: &str) -> Result<VersionCatalog, FetchError> {
        let url = Url::parse(location)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", location, e)))?;
        let getter = self.providers.by_scheme(url.scheme())?;

        // Appended verbatim: a trailing slash on the location is kept
        let index_url = format!("{}/{}", location, INDEX_FILE);
        info!("Fetching chart index {}", index_url);

        let content = getter.get(&index_url).await?;
        if content.is_empty() {
            return Err(FetchError::InvalidResponse(format!(
                "No content for {}",
                index_url
            )));
        }

        VersionCatalog::from_yaml(&content).map_err(|source| FetchError::InvalidIndex {
            url: index_url,
            source,
        })
    }
}
