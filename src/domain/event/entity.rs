//! Campus event entity.

use serde::{Deserialize, Serialize};

use crate::domain::engagement::{HasMembers, MembershipSet};
use crate::domain::foundation::{EntityRef, EventId, Timestamp, ValidationError};

use super::RegistrationWindow;

/// An event as mirrored from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    pub starts_at: Timestamp,

    /// `None` for events created before registration existed.
    #[serde(default)]
    pub registration: Option<RegistrationWindow>,

    /// Users who favorited the event.
    #[serde(default)]
    pub favorited_by: MembershipSet,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    /// Creates an event with a fresh id and no registration window.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        starts_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ValidationError::empty_field("category"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: EventId::new(),
            title,
            description: description.into(),
            category,
            location: None,
            media_url: None,
            starts_at,
            registration: None,
            favorited_by: MembershipSet::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_registration(mut self, window: RegistrationWindow) -> Self {
        self.registration = Some(window);
        self
    }
}

impl HasMembers for Event {
    fn entity_ref(&self) -> EntityRef {
        EntityRef::Event(self.id)
    }

    fn members(&self) -> &MembershipSet {
        &self.favorited_by
    }

    fn members_mut(&mut self) -> &mut MembershipSet {
        &mut self.favorited_by
    }
}
