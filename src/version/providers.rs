//! Scheme -> getter registry used to reach repository locations

use std::sync::Arc;

use crate::version::error::FetchError;
use crate::version::getters::{FileGetter, HttpGetter};

/// Fetches raw bytes for a URL of a particular scheme
#[async_trait::async_trait]
pub trait Getter: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// A getter together with the URL schemes it serves
pub struct Provider {
    pub schemes: Vec<String>,
    pub getter: Arc<dyn Getter>,
}

/// Ordered set of providers, consulted first-match by scheme
///
/// New schemes (e.g. `s3`) are plugged in with [`ProviderRegistry::register`]
/// before the registry is handed to a source.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `http`, `https` and `file` providers
    pub fn with_defaults() -> Result<Self, FetchError> {
        let mut registry = Self::new();
        registry.register(&["http", "https"], Arc::new(HttpGetter::new()?));
        registry.register(&["file"], Arc::new(FileGetter));
        Ok(registry)
    }

    pub fn register(&mut self, schemes: &[&str], getter: Arc<dyn Getter>) {
        self.providers.push(Provider {
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
            getter,
        });
    }

    /// Getter for a scheme, from the first provider that lists it
    pub fn by_scheme(&self, scheme: &str) -> Result<Arc<dyn Getter>, FetchError> {
        self.providers
            .iter()
            .find(|p| p.schemes.iter().any(|s| s == scheme))
            .map(|p| Arc::clone(&p.getter))
            .ok_or_else(|| FetchError::UnsupportedScheme(scheme.to_string()))
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.providers
            .iter()
            .flat_map(|p| p.schemes.iter().map(String::as_str))
    }
}
