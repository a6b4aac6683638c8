//! Background file fetching.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use filepeek_core::FileDescriptor;
use filepeek_fetch::{FetchError, Fetcher};

use super::constants::FETCH_CHANNEL_SIZE;

/// Result of one fetch attempt.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Descriptor that was fetched.
    pub file: &'static FileDescriptor,
    /// Body text or the reason it could not be loaded.
    pub result: Result<String, FetchError>,
}

/// Start a background fetch of one file.
///
/// Returns a receiver that yields the outcome. Nothing is sent if `cancel`
/// fires first or if the receiver has already been dropped.
pub fn start_fetch(
    fetcher: Arc<dyn Fetcher>,
    file: &'static FileDescriptor,
    cancel: CancellationToken,
) -> mpsc::Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel(FETCH_CHANNEL_SIZE);

    tokio::spawn(async move {
        info!(id = file.id, path = file.path, "fetching");

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                debug!(id = file.id, "fetch cancelled");
                return;
            }
            caught = AssertUnwindSafe(fetcher.fetch_text(file.path)).catch_unwind() => {
                caught.unwrap_or_else(|payload| Err(FetchError::Panicked {
                    message: panic_message(payload.as_ref()),
                }))
            }
        };

        if let Ok(ref text) = result {
            info!(id = file.id, bytes = text.len(), "fetched");
        }

        let _ = tx.send(FetchOutcome { file, result }).await;
    });

    rx
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
