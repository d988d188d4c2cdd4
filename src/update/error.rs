use std::path::PathBuf;

use thiserror::Error;

use crate::version::error::{CatalogError, FetchError};

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to load index file for {repository}: {source}")]
    Fetch {
        repository: String,
        source: FetchError,
    },

    #[error("Failed to get version for chart {chart}: {source}")]
    Catalog { chart: String, source: CatalogError },
}

#[derive(Debug, Error)]
#[error("Failed to write {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}
