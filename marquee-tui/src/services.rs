//! Catalog service adapter for the TUI
//!
//! Bridges the async catalog client to the synchronous event loop.
//! Fetches run on a dedicated tokio runtime; completions come back over
//! a crossbeam channel the loop drains between frames.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libmarquee::{Config, MovieDetail, MovieListPage, SessionSnapshot, TmdbClient};

use crate::app::Action;
use crate::error::Result;

/// Completion events sent back from fetch tasks
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    /// A listing page arrived
    ListLoaded {
        snapshot: SessionSnapshot,
        page: MovieListPage,
    },

    /// A listing fetch failed
    ListFailed { message: String },

    /// A detail record arrived
    DetailLoaded { generation: u64, detail: MovieDetail },

    /// A detail fetch failed
    DetailFailed { generation: u64, message: String },
}

impl From<ServiceEvent> for Action {
    fn from(event: ServiceEvent) -> Self {
        match event {
            ServiceEvent::ListLoaded { snapshot, page } => Action::ListLoaded { snapshot, page },
            ServiceEvent::ListFailed { message } => Action::ListFailed { message },
            ServiceEvent::DetailLoaded { generation, detail } => {
                Action::DetailLoaded { generation, detail }
            }
            ServiceEvent::DetailFailed {
                generation,
                message,
            } => Action::DetailFailed {
                generation,
                message,
            },
        }
    }
}

/// Service handle for TUI operations
///
/// Owns the catalog client and a tokio runtime so fetches run without
/// blocking the UI.
pub struct ServiceHandle {
    client: Arc<TmdbClient>,
    runtime: tokio::runtime::Runtime,
    event_tx: Sender<ServiceEvent>,
    event_rx: Receiver<ServiceEvent>,
}

impl ServiceHandle {
    /// Load configuration, build the catalog client, and start a runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be read or has no API key
    /// - The tokio runtime cannot be created
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        let config = Config::load()?;
        let client = TmdbClient::from_config(&config)?;

        let (event_tx, event_rx) = unbounded();

        Ok(Self {
            client: Arc::new(client),
            runtime,
            event_tx,
            event_rx,
        })
    }

    /// Receiver side of the completion channel.
    ///
    /// The event loop drains this with `try_recv` once per frame.
    pub fn events(&self) -> Receiver<ServiceEvent> {
        self.event_rx.clone()
    }

    /// Image host for composing poster URLs.
    pub fn image_base(&self) -> String {
        self.client.image_base().to_string()
    }

    /// Fetch one listing page for the given frozen session view.
    ///
    /// Returns immediately; the response arrives on the event channel
    /// tagged with the snapshot it was fetched for.
    pub fn fetch_list(&self, snapshot: SessionSnapshot) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();

        self.runtime.spawn(async move {
            let event = match client.fetch_movie_list(&snapshot).await {
                Ok(page) => ServiceEvent::ListLoaded { snapshot, page },
                Err(e) => {
                    tracing::warn!("listing fetch failed: {}", e);
                    ServiceEvent::ListFailed {
                        message: e.to_string(),
                    }
                }
            };

            // Send fails only when the UI is shutting down
            let _ = tx.send(event);
        });
    }

    /// Fetch one movie's detail record.
    ///
    /// `generation` is echoed back with the response so the reducer can
    /// tell whether the modal that asked for it is still the one on
    /// screen.
    pub fn fetch_detail(&self, movie_id: u64, generation: u64) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();

        self.runtime.spawn(async move {
            let event = match client.fetch_movie_detail(movie_id).await {
                Ok(detail) => ServiceEvent::DetailLoaded { generation, detail },
                Err(e) => {
                    tracing::warn!("detail fetch failed for movie {}: {}", movie_id, e);
                    ServiceEvent::DetailFailed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };

            let _ = tx.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libmarquee::Listing;

    #[test]
    fn test_list_event_converts_to_action() {
        let snapshot = SessionSnapshot {
            listing: Listing::Popular,
            page: 1,
            query: None,
        };
        let page = MovieListPage {
            page: 1,
            results: vec![],
            total_pages: 0,
            total_results: 0,
        };
        let event = ServiceEvent::ListLoaded {
            snapshot: snapshot.clone(),
            page: page.clone(),
        };

        match Action::from(event) {
            Action::ListLoaded {
                snapshot: converted_snapshot,
                page: converted_page,
            } => {
                assert_eq!(converted_snapshot, snapshot);
                assert_eq!(converted_page, page);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_detail_failure_keeps_its_generation() {
        let event = ServiceEvent::DetailFailed {
            generation: 7,
            message: "404 컨텐츠를 찾을 수 없습니다.".to_string(),
        };

        match Action::from(event) {
            Action::DetailFailed {
                generation,
                message,
            } => {
                assert_eq!(generation, 7);
                assert_eq!(message, "404 컨텐츠를 찾을 수 없습니다.");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
