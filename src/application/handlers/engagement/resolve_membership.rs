//! ResolveMembershipHandler - Query handler for "is this favorited/liked by me".

use std::sync::Arc;

use crate::domain::foundation::EntityRef;
use crate::ports::{MembershipStore, SessionProvider};

/// Query for the signed-in user's membership on one entity.
#[derive(Debug, Clone, Copy)]
pub struct ResolveMembershipQuery {
    pub entity: EntityRef,
}

/// Handler resolving membership against the store.
///
/// Fails closed: a store error, or nobody signed in, resolves to `false`.
/// The UI then offers the "add" action, which is idempotent, so a wrong
/// `false` costs at most one no-op command.
pub struct ResolveMembershipHandler {
    store: Arc<dyn MembershipStore>,
    sessions: Arc<dyn SessionProvider>,
}

impl ResolveMembershipHandler {
    pub fn new(store: Arc<dyn MembershipStore>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self { store, sessions }
    }

    pub async fn handle(&self, query: ResolveMembershipQuery) -> bool {
        let Some(user_id) = self.sessions.current_user_id() else {
            return false;
        };

        match self.store.is_member(query.entity, &user_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!(
                    entity = %query.entity,
                    user_id = %user_id,
                    error = %e,
                    "membership query failed, resolving as not a member"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engagement::MembershipChange;
    use crate::domain::foundation::{DomainError, EventId, PostId, UserId, UserSession};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockMembershipStore {
        members: Mutex<Vec<(EntityRef, UserId)>>,
        fail_query: bool,
        queries: AtomicUsize,
    }

    impl MockMembershipStore {
        fn with_member(entity: EntityRef, user_id: UserId) -> Self {
            Self {
                members: Mutex::new(vec![(entity, user_id)]),
                fail_query: false,
                queries: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                members: Mutex::new(Vec::new()),
                fail_query: true,
                queries: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MembershipStore for MockMembershipStore {
        async fn add_membership(
            &self,
            _entity: EntityRef,
            _user_id: &UserId,
        ) -> Result<MembershipChange, DomainError> {
            unreachable!("resolver never writes")
        }

        async fn remove_membership(
            &self,
            _entity: EntityRef,
            _user_id: &UserId,
        ) -> Result<MembershipChange, DomainError> {
            unreachable!("resolver never writes")
        }

        async fn is_member(&self, entity: EntityRef, user_id: &UserId) -> Result<bool, DomainError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if self.fail_query {
                return Err(DomainError::unavailable("Simulated query failure"));
            }
            let members = self.members.lock().unwrap();
            Ok(members.iter().any(|(e, u)| *e == entity && u == user_id))
        }
    }

    struct FixedSession(Option<UserSession>);

    impl SessionProvider for FixedSession {
        fn current_session(&self) -> Option<UserSession> {
            self.0.clone()
        }
    }

    fn signed_in(id: &str) -> Arc<FixedSession> {
        Arc::new(FixedSession(Some(UserSession::new(
            UserId::new(id).unwrap(),
            "student@campus.edu",
            None,
        ))))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn member_resolves_true() {
        let entity = EntityRef::Event(EventId::new());
        let store = Arc::new(MockMembershipStore::with_member(entity, UserId::new("u1").unwrap()));
        let handler = ResolveMembershipHandler::new(store, signed_in("u1"));

        assert!(handler.handle(ResolveMembershipQuery { entity }).await);
    }

    #[tokio::test]
    async fn other_user_resolves_false() {
        let entity = EntityRef::Post(PostId::new());
        let store = Arc::new(MockMembershipStore::with_member(entity, UserId::new("u1").unwrap()));
        let handler = ResolveMembershipHandler::new(store, signed_in("u2"));

        assert!(!handler.handle(ResolveMembershipQuery { entity }).await);
    }

    #[tokio::test]
    async fn store_failure_fails_closed() {
        let handler = ResolveMembershipHandler::new(Arc::new(MockMembershipStore::failing()), signed_in("u1"));

        let resolved = handler
            .handle(ResolveMembershipQuery {
                entity: EntityRef::Event(EventId::new()),
            })
            .await;
        assert!(!resolved);
    }

    #[tokio::test]
    async fn signed_out_skips_the_store() {
        let entity = EntityRef::Event(EventId::new());
        let store = Arc::new(MockMembershipStore::with_member(entity, UserId::new("u1").unwrap()));
        let handler = ResolveMembershipHandler::new(store.clone(), Arc::new(FixedSession(None)));

        assert!(!handler.handle(ResolveMembershipQuery { entity }).await);
        assert_eq!(store.queries.load(Ordering::SeqCst), 0);
    }
}
