//! Search handlers - list from the store and apply an [`EntityFilter`].

use std::sync::Arc;

use crate::domain::discovery::EntityFilter;
use crate::domain::event::Event;
use crate::domain::foundation::DomainError;
use crate::domain::post::ShowcasePost;
use crate::ports::{EventRepository, PostRepository};

/// Query for events matching a filter.
#[derive(Debug, Clone, Default)]
pub struct SearchEventsQuery {
    pub filter: EntityFilter,
}

/// Query for showcase posts matching a filter.
#[derive(Debug, Clone, Default)]
pub struct SearchPostsQuery {
    pub filter: EntityFilter,
}

pub struct SearchEventsHandler {
    events: Arc<dyn EventRepository>,
}

impl SearchEventsHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Matching events in store order (newest start first).
    pub async fn handle(&self, query: SearchEventsQuery) -> Result<Vec<Event>, DomainError> {
        let events = self.events.list_events().await?;
        let total = events.len();
        let matched: Vec<Event> = events.into_iter().filter(|e| query.filter.matches(e)).collect();

        tracing::debug!(query = query.filter.query(), total, matched = matched.len(), "events searched");
        Ok(matched)
    }
}

pub struct SearchPostsHandler {
    posts: Arc<dyn PostRepository>,
}

impl SearchPostsHandler {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Matching posts, newest first.
    pub async fn handle(&self, query: SearchPostsQuery) -> Result<Vec<ShowcasePost>, DomainError> {
        let posts = self.posts.list_posts().await?;
        Ok(posts.into_iter().filter(|p| query.filter.matches(p)).collect())
    }
}
