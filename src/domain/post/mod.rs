//! Showcase post module - student work shared on the social feed.

use serde::{Deserialize, Serialize};

use crate::domain::engagement::{HasMembers, MembershipSet};
use crate::domain::foundation::{EntityRef, PostId, Timestamp, UserId, ValidationError};

/// A showcase post as mirrored from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcasePost {
    pub id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub media_urls: Vec<String>,

    /// Users who liked the post.
    #[serde(default)]
    pub liked_by: MembershipSet,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShowcasePost {
    pub fn new(
        author_id: UserId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: PostId::new(),
            author_id,
            title,
            description: description.into(),
            category: category.into(),
            media_urls: Vec::new(),
            liked_by: MembershipSet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }
}

impl HasMembers for ShowcasePost {
    fn entity_ref(&self) -> EntityRef {
        EntityRef::Post(self.id)
    }

    fn members(&self) -> &MembershipSet {
        &self.liked_by
    }

    fn members_mut(&mut self) -> &mut MembershipSet {
        &mut self.liked_by
    }
}
