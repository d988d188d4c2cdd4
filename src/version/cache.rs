use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::version::catalog::VersionCatalog;
use crate::version::error::FetchError;
use crate::version::registry::VersionIndexSource;

/// Fetch-once memoization of repository catalogs, keyed by location
///
/// A single lock covers lookup, fetch and store, so at most one fetch is in
/// flight for the whole cache and no location is ever fetched twice. Keys are
/// the location strings exactly as configured. Failed fetches are not stored.
pub struct CachedSource<S> {
    source: S,
    catalogs: Mutex<HashMap<String, Arc<VersionCatalog>>>,
}

impl<S: VersionIndexSource> CachedSource<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalogs: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, location: &str) -> Result<Arc<VersionCatalog>, FetchError> {
        let mut catalogs = self.catalogs.lock().await;

        if let Some(catalog) = catalogs.get(location) {
            debug!("Index cache hit for {}", location);
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.source.fetch(location).await?);
        info!(
            "Cached index for {} ({} chart(s))",
            location,
            catalog.entries.len()
        );
        catalogs.insert(location.to_string(), Arc::clone(&catalog));

        Ok(catalog)
    }

    /// Number of locations cached so far
    pub async fn len(&self) -> usize {
        self.catalogs.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
