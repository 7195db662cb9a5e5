use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

use crate::client::{RecipeSource, SearchOutcome};
use crate::{SearchError, SearchQuery};

/// Runs searches against one source, keeping at most one in flight.
///
/// Starting a search aborts the previous one if it has not finished yet; the
/// aborted call resolves to [`SearchError::Superseded`]. Every call still
/// resolves exactly once.
pub struct SearchSession {
    source: Arc<dyn RecipeSource>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl SearchSession {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            in_flight: Mutex::new(None),
        }
    }

    pub async fn search(&self, query: SearchQuery) -> Result<SearchOutcome, SearchError> {
        let handle = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(previous) = in_flight.take() {
                if !previous.is_finished() {
                    debug!("Aborting stale search before searching for {:?}", query.as_str());
                }
                previous.abort();
            }

            let source = Arc::clone(&self.source);
            let handle = tokio::spawn(async move { source.search(&query).await });
            *in_flight = Some(handle.abort_handle());
            handle
        };

        match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(SearchError::Superseded),
            Err(e) => Err(SearchError::NetworkError {
                cause: format!("search task failed: {}", e),
            }),
        }
    }
}
