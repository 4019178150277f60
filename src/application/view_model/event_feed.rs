//! Live event list with search and category chips.
//!
//! [`EventFeedViewModel::follow`] consumes the store's event stream and
//! re-applies the current filter on every snapshot. It stops when the
//! stream ends or the view is dropped.

use std::sync::{Arc, Weak};

use futures::StreamExt;
use tokio::sync::{watch, Mutex};

use crate::domain::discovery::EntityFilter;
use crate::domain::event::Event;
use crate::domain::foundation::DomainError;
use crate::ports::EventRepository;

/// Events screen state.
///
/// Holds the sending half of a channel that is never written to; followers
/// watch it close to learn that the screen is gone.
#[derive(Debug)]
pub struct EventFeedViewModel {
    events: Vec<Event>,
    filter: EntityFilter,
    last_error: Option<DomainError>,
    snapshots: usize,
    alive: watch::Sender<()>,
}

impl Default for EventFeedViewModel {
    fn default() -> Self {
        let (alive, _) = watch::channel(());
        Self {
            events: Vec::new(),
            filter: EntityFilter::default(),
            last_error: None,
            snapshots: 0,
            alive,
        }
    }
}

impl EventFeedViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    /// Replaces the mirrored list.
    pub fn apply_snapshot(&mut self, events: Vec<Event>) {
        self.events = events;
        self.last_error = None;
        self.snapshots += 1;
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
    }

    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.filter.toggle_category(category)
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    pub fn filter(&self) -> &EntityFilter {
        &self.filter
    }

    /// Events matching the current filter, in store order.
    pub fn visible(&self) -> Vec<&Event> {
        self.filter.apply(&self.events)
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Stream error that arrived after the last good snapshot.
    pub fn last_error(&self) -> Option<&DomainError> {
        self.last_error.as_ref()
    }

    /// Number of snapshots applied so far.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots
    }

    /// Mirrors the store's event stream into `view` until the stream ends
    /// or the view is dropped. Stream errors keep the previous list.
    pub async fn follow(view: Weak<Mutex<Self>>, events: Arc<dyn EventRepository>) {
        let Some(strong) = view.upgrade() else {
            return;
        };
        let mut alive = strong.lock().await.alive.subscribe();
        drop(strong);

        let mut stream = events.watch_events();
        loop {
            let item = tokio::select! {
                biased;

                // Only errors once the sender is dropped with the view.
                _ = alive.changed() => None,
                item = stream.next() => item,
            };
            let Some(item) = item else {
                break;
            };
            let Some(strong) = view.upgrade() else {
                break;
            };
            let mut vm = strong.lock().await;
            match item {
                Ok(snapshot) => vm.apply_snapshot(snapshot),
                Err(e) => {
                    tracing::warn!(error = %e, "event stream error, keeping last snapshot");
                    vm.last_error = Some(e);
                }
            }
        }

        tracing::debug!("event feed stopped, unsubscribing");
    }
}
