//! In-memory campus store.
//!
//! Stands in for the hosted document store in tests and local demos. It
//! holds events, posts and registrations in one place so membership
//! commands and registration counts see the same data.
//!
//! Features:
//! - Live event feed via [`EventRepository::watch_events`]
//! - Outage simulation with [`InMemoryStore::set_unavailable`]
//! - Mutation counting for "exactly one remote call" assertions

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::{watch, RwLock};

use crate::domain::engagement::{HasMembers, MembershipChange};
use crate::domain::event::Event;
use crate::domain::foundation::{
    DomainError, EntityRef, ErrorCode, EventId, PostId, RegistrationId, Timestamp, UserId,
};
use crate::domain::post::ShowcasePost;
use crate::domain::registration::Registration;
use crate::ports::{EventRepository, MembershipStore, PostRepository, RegistrationRepository};

/// Shared in-memory store implementing every data port.
pub struct InMemoryStore {
    events: RwLock<BTreeMap<EventId, Event>>,
    posts: RwLock<BTreeMap<PostId, ShowcasePost>>,
    registrations: RwLock<Vec<Registration>>,
    event_feed: watch::Sender<Vec<Event>>,
    unavailable: AtomicBool,
    mutations: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (event_feed, _) = watch::channel(Vec::new());
        Self {
            events: RwLock::new(BTreeMap::new()),
            posts: RwLock::new(BTreeMap::new()),
            registrations: RwLock::new(Vec::new()),
            event_feed,
            unavailable: AtomicBool::new(false),
            mutations: AtomicUsize::new(0),
        }
    }

    // === Seeding ===

    /// Inserts or replaces an event and notifies feed subscribers.
    pub async fn put_event(&self, event: Event) {
        let mut events = self.events.write().await;
        events.insert(event.id, event);
        self.publish_events(&events);
    }

    /// Deletes an event, as an organizer would from the admin console.
    pub async fn delete_event(&self, id: &EventId) -> bool {
        let mut events = self.events.write().await;
        let removed = events.remove(id).is_some();
        if removed {
            self.publish_events(&events);
        }
        removed
    }

    pub async fn put_post(&self, post: ShowcasePost) {
        self.posts.write().await.insert(post.id, post);
    }

    // === Failure injection ===

    /// While set, every call fails with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of write calls received (including failed ones).
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    // === Internals ===

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::unavailable("store offline"));
        }
        Ok(())
    }

    fn record_mutation(&self) -> Result<(), DomainError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }

    fn publish_events(&self, events: &BTreeMap<EventId, Event>) {
        self.event_feed.send_replace(sorted_events(events));
    }

    async fn set_membership(
        &self,
        entity: EntityRef,
        user_id: &UserId,
        member: bool,
    ) -> Result<MembershipChange, DomainError> {
        self.record_mutation()?;

        match entity {
            EntityRef::Event(id) => {
                let mut events = self.events.write().await;
                let event = events.get_mut(&id).ok_or_else(|| {
                    DomainError::new(ErrorCode::EventNotFound, format!("event {id} not found"))
                })?;
                let change = event.members_mut().set(user_id, member);
                if change.is_change() {
                    self.publish_events(&events);
                }
                Ok(change)
            }
            EntityRef::Post(id) => {
                let mut posts = self.posts.write().await;
                let post = posts.get_mut(&id).ok_or_else(|| {
                    DomainError::new(ErrorCode::PostNotFound, format!("post {id} not found"))
                })?;
                Ok(post.members_mut().set(user_id, member))
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest start time first.
fn sorted_events(events: &BTreeMap<EventId, Event>) -> Vec<Event> {
    let mut list: Vec<Event> = events.values().cloned().collect();
    list.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
    list
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_event(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        self.check_available()?;
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>, DomainError> {
        self.check_available()?;
        Ok(sorted_events(&*self.events.read().await))
    }

    fn watch_events(&self) -> BoxStream<'static, Result<Vec<Event>, DomainError>> {
        let receiver = self.event_feed.subscribe();
        stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first {
                receiver.changed().await.ok()?;
            }
            let snapshot = receiver.borrow_and_update().clone();
            Some((Ok(snapshot), (receiver, false)))
        })
        .boxed()
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn find_post(&self, id: &PostId) -> Result<Option<ShowcasePost>, DomainError> {
        self.check_available()?;
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<ShowcasePost>, DomainError> {
        self.check_available()?;
        let mut posts: Vec<ShowcasePost> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}

#[async_trait]
impl MembershipStore for InMemoryStore {
    async fn add_membership(
        &self,
        entity: EntityRef,
        user_id: &UserId,
    ) -> Result<MembershipChange, DomainError> {
        self.set_membership(entity, user_id, true).await
    }

    async fn remove_membership(
        &self,
        entity: EntityRef,
        user_id: &UserId,
    ) -> Result<MembershipChange, DomainError> {
        self.set_membership(entity, user_id, false).await
    }

    async fn is_member(&self, entity: EntityRef, user_id: &UserId) -> Result<bool, DomainError> {
        self.check_available()?;
        let member = match entity {
            EntityRef::Event(id) => self
                .events
                .read()
                .await
                .get(&id)
                .is_some_and(|event| event.members().contains(user_id)),
            EntityRef::Post(id) => self
                .posts
                .read()
                .await
                .get(&id)
                .is_some_and(|post| post.members().contains(user_id)),
        };
        Ok(member)
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn create(&self, registration: &Registration) -> Result<(), DomainError> {
        self.record_mutation()?;

        let capacity = match self.events.read().await.get(&registration.event_id) {
            Some(event) => event.registration.as_ref().and_then(|w| w.capacity),
            None => {
                return Err(DomainError::new(
                    ErrorCode::EventNotFound,
                    format!("event {} not found", registration.event_id),
                ))
            }
        };

        let mut registrations = self.registrations.write().await;
        let active: Vec<&Registration> = registrations
            .iter()
            .filter(|r| r.is_active() && r.event_id == registration.event_id)
            .collect();
        if active.iter().any(|r| r.user_id == registration.user_id) {
            return Err(DomainError::new(
                ErrorCode::AlreadyRegistered,
                "user already holds an active registration",
            )
            .with_detail("event_id", registration.event_id.to_string()));
        }
        // Seats are checked under the write lock so two racing clients
        // cannot both take the last one.
        if capacity.is_some_and(|c| active.len() >= c as usize) {
            return Err(DomainError::new(ErrorCode::RegistrationClosed, "event is full")
                .with_detail("event_id", registration.event_id.to_string()));
        }

        registrations.push(registration.clone());
        Ok(())
    }

    async fn update(&self, registration: &Registration) -> Result<(), DomainError> {
        self.record_mutation()?;

        let mut registrations = self.registrations.write().await;
        let existing = registrations
            .iter_mut()
            .find(|r| r.id == registration.id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RegistrationNotFound,
                    format!("registration {} not found", registration.id),
                )
            })?;
        *existing = Registration {
            updated_at: Timestamp::now(),
            ..registration.clone()
        };
        Ok(())
    }

    async fn find(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        self.check_available()?;
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn find_active(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<Registration>, DomainError> {
        self.check_available()?;
        Ok(self
            .registrations
            .read()
            .await
            .iter()
            .find(|r| r.is_active() && &r.event_id == event_id && &r.user_id == user_id)
            .cloned())
    }

    async fn count_active(&self, event_id: &EventId) -> Result<u32, DomainError> {
        self.check_available()?;
        let count = self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| r.is_active() && &r.event_id == event_id)
            .count();
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Registration>, DomainError> {
        self.check_available()?;
        let mut list: Vec<Registration> = self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(list)
    }
}
