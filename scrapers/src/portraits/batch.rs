//! Sequential fetch-and-store loop with partial failure reporting.

use std::path::PathBuf;

use thiserror::Error;

use super::store::{PortraitStore, StoreError};
use crate::congress::{PortraitApiError, PortraitClient, PortraitSource};

/// Why a single portrait could not be saved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Download(#[from] PortraitApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A portrait to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitTarget {
    pub bioguide_id: String,
    pub name: String,
    /// Console label; defaults to "name (id)".
    pub label: String,
}

impl PortraitTarget {
    pub fn new(bioguide_id: impl Into<String>, name: impl Into<String>) -> Self {
        let bioguide_id = bioguide_id.into();
        let name = name.into();
        let label = format!("{name} ({bioguide_id})");
        Self {
            bioguide_id,
            name,
            label,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A target that failed, kept for the end-of-run summary.
#[derive(Debug)]
pub struct FailedDownload {
    pub bioguide_id: String,
    pub name: String,
    pub error: FetchError,
}

/// Run-scoped accumulator threaded through the batch loop.
#[derive(Debug, Default)]
pub struct RunReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<FailedDownload>,
}

impl RunReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, target: &PortraitTarget, result: Result<PathBuf, FetchError>) {
        self.attempted += 1;
        match result {
            Ok(_) => self.succeeded += 1,
            Err(error) => self.failures.push(FailedDownload {
                bioguide_id: target.bioguide_id.clone(),
                name: target.name.clone(),
                error,
            }),
        }
    }
}

/// Download one portrait and write it to the store.
///
/// # Errors
/// Returns `FetchError::Download` for network or HTTP status failures and
/// `FetchError::Store` if the image cannot be written.
pub async fn fetch_one<C>(
    client: &C,
    store: &PortraitStore,
    source: &PortraitSource,
    bioguide_id: &str,
) -> Result<PathBuf, FetchError>
where
    C: PortraitClient + ?Sized,
{
    let url = source.portrait_url(bioguide_id);
    let bytes = client.fetch_portrait(&url).await?;
    let path = store.write_image(bioguide_id, &bytes)?;
    Ok(path)
}

/// Fetch every target in order, one at a time.
///
/// A failure is recorded and the loop moves on; nothing is retried.
/// `on_result` is called once per target as soon as its outcome is known.
pub async fn run_batch<C, F>(
    client: &C,
    store: &PortraitStore,
    source: &PortraitSource,
    targets: &[PortraitTarget],
    mut on_result: F,
) -> RunReport
where
    C: PortraitClient + ?Sized,
    F: FnMut(&PortraitTarget, &Result<PathBuf, FetchError>),
{
    let mut report = RunReport::default();

    for target in targets {
        let result = fetch_one(client, store, source, &target.bioguide_id).await;

        match &result {
            Ok(path) => tracing::info!(
                bioguide_id = %target.bioguide_id,
                path = %path.display(),
                "portrait saved"
            ),
            Err(error) => tracing::warn!(
                bioguide_id = %target.bioguide_id,
                error = %error,
                "portrait download failed"
            ),
        }

        on_result(target, &result);
        report.record(target, result);
    }

    tracing::info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed(),
        "batch complete"
    );
    report
}
