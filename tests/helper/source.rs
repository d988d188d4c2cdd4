//! Version source test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use helm_autoupdate::version::catalog::VersionCatalog;
use helm_autoupdate::version::error::FetchError;
use helm_autoupdate::version::registry::VersionIndexSource;

/// In-memory source serving fixed catalogs and counting fetches
#[derive(Default, Clone)]
pub struct InMemorySource {
    catalogs: HashMap<String, VersionCatalog>,
    fetches: Arc<AtomicUsize>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chart(mut self, location: &str, chart: &str, versions: Vec<&str>) -> Self {
        let catalog = VersionCatalog::from_versions([(chart, versions)]);
        self.catalogs.insert(location.to_string(), catalog);
        self
    }

    /// Handle to the fetch counter, still readable after the source is moved
    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[async_trait]
impl VersionIndexSource for InMemorySource {
    async fn fetch(&self, location: &str) -> Result<VersionCatalog, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.catalogs
            .get(location)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(location.to_string()))
    }
}
