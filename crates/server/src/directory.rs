//! Post-fetch directory state shared with every request handler.

use std::sync::Arc;

use meddir_core::{Practitioner, normalize_all};

use crate::error::AppError;
use crate::upstream::UpstreamClient;

/// Message surfaced to clients while the directory is unavailable.
const UNAVAILABLE_MESSAGE: &str = "Failed to load practitioners. Please try again later.";

/// The practitioner directory, immutable once loaded.
///
/// A failed fetch pins the process in `Unavailable` for its whole
/// lifetime; a restart is the only recovery path.
#[derive(Clone)]
pub enum Directory {
    Ready(Arc<Vec<Practitioner>>),
    Unavailable { reason: Arc<str> },
}

impl Directory {
    /// Fetch and normalize the upstream feed.
    ///
    /// Fetch failures are absorbed into the `Unavailable` state rather
    /// than propagated; malformed records are absorbed by normalization.
    pub async fn load(client: &UpstreamClient) -> Self {
        match client.fetch_records().await {
            Ok(records) => {
                let practitioners = normalize_all(&records);
                tracing::info!(count = practitioners.len(), "directory loaded");
                Directory::Ready(Arc::new(practitioners))
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load directory");
                Directory::Unavailable {
                    reason: UNAVAILABLE_MESSAGE.into(),
                }
            }
        }
    }

    /// Build a ready directory from already-normalized entries.
    pub fn from_practitioners(practitioners: Vec<Practitioner>) -> Self {
        Directory::Ready(Arc::new(practitioners))
    }

    /// The loaded list, or the terminal failure to surface to the client.
    pub fn practitioners(&self) -> Result<&[Practitioner], AppError> {
        match self {
            Directory::Ready(list) => Ok(list.as_slice()),
            Directory::Unavailable { reason } => Err(AppError::Unavailable(reason.to_string())),
        }
    }
}
