//! Source trait for fetching repository version catalogs

#[cfg(test)]
use mockall::automock;

use crate::version::catalog::VersionCatalog;
use crate::version::error::FetchError;

/// Trait for fetching the version catalog of a chart repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionIndexSource: Send + Sync {
    /// Fetches and parses the catalog published at a repository location
    ///
    /// # Arguments
    /// * `location` - Repository location (e.g., "https://aws.github.io/eks-charts")
    ///
    /// # Returns
    /// * `Ok(VersionCatalog)` - Parsed catalog, versions ordered newest first
    /// * `Err(FetchError)` - If the location is unreachable or the index is malformed
    async fn fetch(&self, location: &str) -> Result<VersionCatalog, FetchError>;
}
