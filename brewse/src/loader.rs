//! Catalog fetching as a side-effect boundary.
//!
//! The reducer only ever talks to [`CatalogLoader`]. Production spawns tokio
//! tasks that report back over the data channel; tests swap in a recorder.

use std::sync::Arc;

use brewse_api::{sample, Client};
use tokio::sync::mpsc;

use crate::events::DataEvent;
use crate::state::FetchStatus;

/// Side-effect seam between the reducer and the outside world
pub trait CatalogLoader {
    /// Start one catalog fetch. Every call is independent; resolutions
    /// arrive as [`DataEvent`]s in completion order.
    fn start_fetch(&mut self);
}

/// Production loader: each fetch runs in its own tokio task.
///
/// Tasks are never aborted, so overlapping fetches race and the channel
/// decides the order in which resolutions reach the reducer.
pub struct FetchLoader {
    client: Arc<Client>,
    data_tx: mpsc::UnboundedSender<DataEvent>,
    sample_fallback: bool,
}

impl FetchLoader {
    pub fn new(
        client: Arc<Client>,
        data_tx: mpsc::UnboundedSender<DataEvent>,
        sample_fallback: bool,
    ) -> Self {
        Self {
            client,
            data_tx,
            sample_fallback,
        }
    }
}

impl CatalogLoader for FetchLoader {
    fn start_fetch(&mut self) {
        let client = self.client.clone();
        let data_tx = self.data_tx.clone();
        let sample_fallback = self.sample_fallback;

        tokio::spawn(async move {
            let event = match client.fetch_catalog().await {
                Ok(records) => {
                    tracing::info!("Fetched {} catalog records", records.len());
                    DataEvent::CatalogFetched {
                        status: FetchStatus::Ok,
                        records,
                    }
                }
                Err(e) if sample_fallback => {
                    tracing::warn!("Catalog fetch failed ({}), serving sample data", e);
                    DataEvent::CatalogFetched {
                        status: FetchStatus::Ok,
                        records: sample::sample_records(),
                    }
                }
                Err(e) => {
                    tracing::error!("Catalog fetch failed: {}", e);
                    DataEvent::CatalogFetched {
                        status: FetchStatus::Error,
                        records: Vec::new(),
                    }
                }
            };

            // The receiver only disappears during shutdown
            let _ = data_tx.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port, so connects fail immediately.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/catalog";

    #[tokio::test]
    async fn failed_fetch_resolves_to_error_with_empty_records() {
        let (data_tx, mut data_rx) = mpsc::unbounded_channel();
        let mut loader = FetchLoader::new(Arc::new(Client::new(UNREACHABLE_URL)), data_tx, false);

        loader.start_fetch();

        let DataEvent::CatalogFetched { status, records } =
            data_rx.recv().await.expect("fetch should always resolve");
        assert_eq!(status, FetchStatus::Error);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_with_fallback_serves_the_sample_catalog() {
        let (data_tx, mut data_rx) = mpsc::unbounded_channel();
        let mut loader = FetchLoader::new(Arc::new(Client::new(UNREACHABLE_URL)), data_tx, true);

        loader.start_fetch();

        let DataEvent::CatalogFetched { status, records } =
            data_rx.recv().await.expect("fetch should always resolve");
        assert_eq!(status, FetchStatus::Ok);
        assert_eq!(records, sample::sample_records());
    }

    #[tokio::test]
    async fn overlapping_fetches_each_resolve() {
        let (data_tx, mut data_rx) = mpsc::unbounded_channel();
        let mut loader = FetchLoader::new(Arc::new(Client::new(UNREACHABLE_URL)), data_tx, false);

        loader.start_fetch();
        loader.start_fetch();

        assert!(data_rx.recv().await.is_some());
        assert!(data_rx.recv().await.is_some());
    }
}
