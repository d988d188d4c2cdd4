use std::cmp::Ordering;

use semver::{Version, VersionReq};

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros, and
/// strips a leading 'v'.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a chart version constraint.
///
/// A bare version such as `1.0.5` or `v2.1` pins that version (`=1.0.5`);
/// anything else is read as a semver requirement (`*`, `^1.2`, `>=1, <2`).
pub fn parse_constraint(constraint: &str) -> Result<VersionReq, semver::Error> {
    let constraint = constraint.trim();
    let stripped = constraint.strip_prefix('v').unwrap_or(constraint);

    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        VersionReq::parse(&format!("={}", stripped))
    } else {
        VersionReq::parse(constraint)
    }
}

/// Order two version strings newest first.
///
/// Unparseable versions sort after every valid one and keep their
/// relative order under a stable sort.
pub fn compare_newest_first(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
