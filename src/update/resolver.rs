//! Decides whether an annotated line needs a new version

use tracing::{debug, info};

use crate::config::{AutoUpdateConfig, ChartSpec};
use crate::parser::file::PendingUpdate;
use crate::update::error::UpdateError;
use crate::version::cache::CachedSource;
use crate::version::registry::VersionIndexSource;

/// Look up the newest matching version for `chart` and compare it to the line
///
/// Returns `None` when the line already carries that version (compared after
/// trimming). Otherwise returns a copy of `request` with the new version; the
/// request itself is left untouched.
pub async fn check_for_update<S: VersionIndexSource>(
    cache: &CachedSource<S>,
    chart: &ChartSpec,
    request: &PendingUpdate,
) -> Result<Option<PendingUpdate>, UpdateError> {
    let catalog = cache
        .get(&chart.repository)
        .await
        .map_err(|source| UpdateError::Fetch {
            repository: chart.repository.clone(),
            source,
        })?;

    let resolved = catalog
        .get(&chart.name, &chart.version)
        .map_err(|source| UpdateError::Catalog {
            chart: chart.name.clone(),
            source,
        })?;

    if resolved.version.trim() == request.parsed.current_version.trim() {
        debug!(
            "{} is up to date at {}",
            request.parsed.identity, resolved.version
        );
        return Ok(None);
    }

    info!(
        "{}: {} -> {}",
        request.parsed.identity, request.parsed.current_version, resolved.version
    );
    Ok(Some(PendingUpdate {
        line_number: request.line_number,
        parsed: request.parsed.with_version(resolved.version.clone()),
    }))
}

/// Resolve a pending update against the configured charts
///
/// Lines whose identity has no configured chart are skipped (`Ok(None)`).
pub async fn resolve<S: VersionIndexSource>(
    update: &PendingUpdate,
    config: &AutoUpdateConfig,
    cache: &CachedSource<S>,
) -> Result<Option<PendingUpdate>, UpdateError> {
    let Some(chart) = config.find_chart(&update.parsed.identity) else {
        debug!(
            "No chart configured for identity {}, skipping line {}",
            update.parsed.identity,
            update.line_number + 1
        );
        return Ok(None);
    };

    check_for_update(cache, chart, update).await
}
