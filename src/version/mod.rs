//! Chart version lookup layer
//!
//! Fetches Helm repository indexes, memoizes them per location and answers
//! "newest version of chart X matching constraint Y" queries.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ CachedSource│────▶│ DirectSource │────▶│ ProviderRegistry │
//! │(fetch once) │     │ (index.yaml) │     │ (scheme→getter)  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────┐                         ┌────────────────┐
//! │VersionCatalog│                         │    Getters     │
//! │(constraint)  │                         │ (http, file)   │
//! └──────────────┘                         └────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory, fetch-once catalog cache
//! - [`catalog`]: Parsed repository index and version selection
//! - [`direct`]: Source fetching `<location>/index.yaml`
//! - [`providers`]: Scheme to getter registry
//! - [`getters`]: Built-in http(s) and file getters
//! - [`registry`]: `VersionIndexSource` trait
//! - [`error`]: Fetch and catalog error types
//! - [`semver`]: Version parsing, constraints and ordering

pub mod cache;
pub mod catalog;
pub mod direct;
pub mod error;
pub mod getters;
pub mod providers;
pub mod registry;
pub mod semver;

pub use cache::CachedSource;
pub use catalog::{ChartVersion, VersionCatalog};
pub use direct::DirectSource;
pub use error::{CatalogError, FetchError};
pub use providers::{Getter, ProviderRegistry};
pub use registry::VersionIndexSource;
