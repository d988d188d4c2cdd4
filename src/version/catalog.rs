//! Parsed Helm repository index (`index.yaml`)

use indexmap::IndexMap;
use serde::Deserialize;

use crate::version::error::CatalogError;
use crate::version::semver::{compare_newest_first, parse_constraint, parse_version};

/// A repository's version catalog: chart name -> published versions
///
/// Versions of each chart are kept newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionCatalog {
    #[serde(default, rename = "apiVersion")]
    pub api_version: String,
    #[serde(default)]
    pub entries: IndexMap<String, Vec<ChartVersion>>,
}

/// A single published chart version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartVersion {
    pub name: String,
    pub version: String,
    #[serde(rename = "appVersion")]
    pub app_version: Option<String>,
    pub urls: Vec<String>,
    pub digest: Option<String>,
    pub deprecated: bool,
}

impl VersionCatalog {
    /// Build a catalog from chart name / version pairs
    pub fn from_versions<'a>(
        charts: impl IntoIterator<Item = (&'a str, Vec<&'a str>)>,
    ) -> Self {
        let entries = charts
            .into_iter()
            .map(|(name, versions)| {
                let versions = versions
                    .into_iter()
                    .map(|version| ChartVersion {
                        name: name.to_string(),
                        version: version.to_string(),
                        ..Default::default()
                    })
                    .collect();
                (name.to_string(), versions)
            })
            .collect();

        let mut catalog = Self {
            api_version: "v1".to_string(),
            entries,
        };
        catalog.sort_entries();
        catalog
    }

    /// Parse an `index.yaml` document
    pub fn from_yaml(content: &[u8]) -> Result<Self, serde_yaml::Error> {
        let mut catalog: VersionCatalog = serde_yaml::from_slice(content)?;
        catalog.sort_entries();
        Ok(catalog)
    }

    fn sort_entries(&mut self) {
        for versions in self.entries.values_mut() {
            versions.retain(|v| !v.version.is_empty());
            versions.sort_by(|a, b| compare_newest_first(&a.version, &b.version));
        }
    }

    /// Newest version of `name` satisfying `constraint`
    ///
    /// An empty constraint is read as `*`, so it selects the newest stable
    /// version. A version string equal to a non-empty constraint wins before
    /// any semver evaluation. Unparseable versions never match a range.
    pub fn get(&self, name: &str, constraint: &str) -> Result<&ChartVersion, CatalogError> {
        let not_found = || CatalogError::NotFound {
            name: name.to_string(),
            constraint: constraint.to_string(),
        };

        let versions = self
            .entries
            .get(name)
            .filter(|versions| !versions.is_empty())
            .ok_or_else(not_found)?;

        let is_empty = constraint.trim().is_empty();
        let range = if is_empty { "*" } else { constraint };
        let req = parse_constraint(range).map_err(|source| CatalogError::InvalidConstraint {
            constraint: constraint.to_string(),
            source,
        })?;

        if !is_empty {
            if let Some(exact) = versions.iter().find(|v| v.version == constraint) {
                return Ok(exact);
            }
        }

        versions
            .iter()
            .find(|v| parse_version(&v.version).is_some_and(|parsed| req.matches(&parsed)))
            .ok_or_else(not_found)
    }
}
