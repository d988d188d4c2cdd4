//! Bumps Helm chart versions pinned in annotated lines
//!
//! Any line of the form `key: <version> # helm:autoupdate:<identity>` is
//! matched against a configured chart, the chart's repository index is
//! consulted, and the version value is rewritten in place when a newer (or
//! differently pinned) version is published.

pub mod config;
pub mod parser;
pub mod update;
pub mod version;
