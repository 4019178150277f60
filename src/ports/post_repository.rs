//! Showcase post repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PostId};
use crate::domain::post::ShowcasePost;

/// Read access to showcase posts in the remote store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns `None` if the post does not exist.
    async fn find_post(&self, id: &PostId) -> Result<Option<ShowcasePost>, DomainError>;

    /// Feed order: newest first.
    async fn list_posts(&self) -> Result<Vec<ShowcasePost>, DomainError>;
}
