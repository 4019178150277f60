//! Event repository port (read side of the remote store).
//!
//! Events are created and edited by organizers elsewhere; the client only
//! reads them, either once or as a live stream of full snapshots.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId};

/// Read access to events in the remote store.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find an event by its ID.
    ///
    /// Returns `None` if the event does not exist (or was deleted).
    async fn find_event(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// List every event, newest start time first.
    async fn list_events(&self) -> Result<Vec<Event>, DomainError>;

    /// Live listing: yields the full list now and again after every change.
    ///
    /// The stream ends when the store shuts down.
    fn watch_events(&self) -> BoxStream<'static, Result<Vec<Event>, DomainError>>;
}
