use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    #[error("Could not find protocol handler for: {0}")]
    UnsupportedScheme(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Index not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse index {url}: {source}")]
    InvalidIndex {
        url: String,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No chart version found for {name}-{constraint}")]
    NotFound { name: String, constraint: String },

    #[error("Invalid version constraint {constraint:?}: {source}")]
    InvalidConstraint {
        constraint: String,
        source: semver::Error,
    },
}
