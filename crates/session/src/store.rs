//! The session store: durable state plus the unified change signal.
//!
//! Design rule: call sites subscribe once, against the store, and never
//! learn whether a notification came from this context (synchronous
//! listener registry) or another one (cross-context bus). The two
//! mechanisms are private plumbing behind [`SessionStore::subscribe`].

use std::sync::{Arc, Mutex};

use vetrina_core::{ContextId, Role, Session, VerificationStatus};
use vetrina_events::{
    CrossContextBus, ListenerRegistry, SessionChange, SessionChanged, Subscription,
    SubscriptionGuard,
};

use crate::keys;
use crate::memory::MemoryStorage;
use crate::storage::{StorageBackend, StorageError};

/// Handle to the origin-scoped session state for one browsing context.
///
/// Clones share the backend, the context identity, and the listener set:
/// a clone is the same context. A *separate* context is built with
/// [`SessionStore::open`] against the same backend and bus.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
    context: ContextId,
    listeners: ListenerRegistry<SessionChanged>,
    bus: Arc<CrossContextBus<SessionChanged>>,
    remote: Arc<Mutex<Subscription<SessionChanged>>>,
}

impl SessionStore {
    /// Open a store for a fresh browsing context.
    pub fn open(
        backend: Arc<dyn StorageBackend>,
        bus: Arc<CrossContextBus<SessionChanged>>,
    ) -> Self {
        let context = ContextId::new();
        let remote = bus.subscribe(context);

        Self {
            backend,
            context,
            listeners: ListenerRegistry::new(),
            bus,
            remote: Arc::new(Mutex::new(remote)),
        }
    }

    /// Single-context convenience over [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStorage::new()), Arc::new(CrossContextBus::new()))
    }

    pub fn context_id(&self) -> ContextId {
        self.context
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads (fail-safe)
    // ─────────────────────────────────────────────────────────────────────

    /// Current session.
    ///
    /// Storage errors and unrecognized values degrade to a guest session;
    /// nothing here ever locks a user out over storage drift.
    pub fn get(&self) -> Session {
        let is_authenticated = match self.backend.read(keys::IS_AUTHENTICATED) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!("session read failed, treating as signed out: {err}");
                return Session::guest();
            }
        };

        let role = match self.backend.read(keys::USER_ROLE) {
            Ok(value) => Role::from_stored(value.as_deref()),
            Err(err) => {
                tracing::warn!("role read failed, treating as guest: {err}");
                Role::Guest
            }
        };

        Session {
            is_authenticated,
            role,
        }
        .normalized()
    }

    /// Stored partner approval status; absent reads as pending.
    pub fn verification_status(&self) -> VerificationStatus {
        match self.backend.read(keys::VERIFICATION_STATUS) {
            Ok(value) => VerificationStatus::from_stored(value.as_deref()),
            Err(err) => {
                tracing::warn!("verification read failed, treating as pending: {err}");
                VerificationStatus::Pending
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes (synchronous, pair with `emit`)
    // ─────────────────────────────────────────────────────────────────────

    /// Write both session keys.
    ///
    /// The write completes before this returns; pair it with [`emit`] so
    /// mounted surfaces re-read after the write, never before.
    ///
    /// [`emit`]: SessionStore::emit
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        let session = session.normalized();

        if session.is_authenticated {
            self.backend.write(keys::IS_AUTHENTICATED, "true")?;
        } else {
            self.backend.remove(keys::IS_AUTHENTICATED)?;
        }
        self.backend.write(keys::USER_ROLE, session.role.as_str())
    }

    /// Reset to the signed-out default: both session keys removed.
    ///
    /// The verification record survives; it is never deleted, only
    /// transitioned.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(keys::IS_AUTHENTICATED)?;
        self.backend.remove(keys::USER_ROLE)
    }

    pub fn set_verification_status(&self, status: VerificationStatus) -> Result<(), StorageError> {
        self.backend
            .write(keys::VERIFICATION_STATUS, status.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Change signal
    // ─────────────────────────────────────────────────────────────────────

    /// Subscribe to session changes, local or remote alike.
    ///
    /// The guard unsubscribes when dropped; hold it for exactly the
    /// lifetime of the mounted surface.
    #[must_use = "dropping the guard unsubscribes immediately"]
    pub fn subscribe(
        &self,
        listener: impl Fn(&SessionChanged) + Send + Sync + 'static,
    ) -> SubscriptionGuard<SessionChanged> {
        self.listeners.subscribe(listener)
    }

    /// Notify this context synchronously, then fan out to every other
    /// context of the same origin.
    ///
    /// Call only after the paired storage write has completed.
    pub fn emit(&self, change: SessionChange) {
        let event = SessionChanged::now(self.context, change);

        self.listeners.emit(&event);

        if let Err(err) = self.bus.publish(self.context, event) {
            tracing::warn!("cross-context publish failed: {err}");
        }
    }

    /// Drain changes produced by other contexts and replay them into this
    /// context's listeners. Returns how many were replayed.
    ///
    /// This is the moment "the tab checks storage": cross-context delivery
    /// is best-effort and becomes visible here, not at publish time.
    pub fn poll_remote(&self) -> usize {
        let drained = match self.remote.lock() {
            Ok(subscription) => subscription.drain(),
            Err(_) => return 0,
        };

        for event in &drained {
            self.listeners.emit(event);
        }
        drained.len()
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("context", &self.context)
            .field("listeners", &self.listeners.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fresh_store_reads_as_guest_and_pending() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(), Session::guest());
        assert_eq!(store.verification_status(), VerificationStatus::Pending);
    }

    #[test]
    fn set_then_get_roundtrip() {
        let store = SessionStore::in_memory();
        let session = Session::authenticated(Role::Affiliate);

        store.set(&session).unwrap();
        assert_eq!(store.get(), session);
    }

    #[test]
    fn set_writes_the_exact_storage_values() {
        let backend = Arc::new(MemoryStorage::new());
        let store = SessionStore::open(
            Arc::clone(&backend) as Arc<dyn StorageBackend>,
            Arc::new(CrossContextBus::new()),
        );

        store.set(&Session::authenticated(Role::User)).unwrap();

        assert_eq!(
            backend.read(keys::IS_AUTHENTICATED).unwrap(),
            Some("true".to_string())
        );
        assert_eq!(
            backend.read(keys::USER_ROLE).unwrap(),
            Some("user".to_string())
        );

        store.clear().unwrap();
        assert_eq!(backend.read(keys::IS_AUTHENTICATED).unwrap(), None);
        assert_eq!(backend.read(keys::USER_ROLE).unwrap(), None);
    }

    #[test]
    fn malformed_role_reads_as_guest() {
        let backend = Arc::new(MemoryStorage::new());
        backend.write(keys::IS_AUTHENTICATED, "true").unwrap();
        backend.write(keys::USER_ROLE, "overlord").unwrap();

        let store = SessionStore::open(backend, Arc::new(CrossContextBus::new()));
        let session = store.get();
        assert!(session.is_authenticated);
        assert_eq!(session.role, Role::Guest);
    }

    #[test]
    fn role_without_flag_reads_as_guest() {
        let backend = Arc::new(MemoryStorage::new());
        backend.write(keys::USER_ROLE, "admin").unwrap();

        let store = SessionStore::open(backend, Arc::new(CrossContextBus::new()));
        assert_eq!(store.get(), Session::guest());
    }

    #[test]
    fn clear_resets_session_but_keeps_verification() {
        let store = SessionStore::in_memory();
        store.set(&Session::authenticated(Role::Merchant)).unwrap();
        store
            .set_verification_status(VerificationStatus::Approved)
            .unwrap();

        store.clear().unwrap();

        assert_eq!(store.get(), Session::guest());
        assert_eq!(store.verification_status(), VerificationStatus::Approved);
    }

    #[test]
    fn emit_notifies_local_listeners_before_returning() {
        let store = SessionStore::in_memory();
        let count = Arc::new(AtomicUsize::new(0));

        let count_for_listener = Arc::clone(&count);
        let _guard = store.subscribe(move |_| {
            count_for_listener.fetch_add(1, Ordering::SeqCst);
        });

        store.emit(SessionChange::LoggedOut);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn remote_changes_arrive_only_on_poll() {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        let bus = Arc::new(CrossContextBus::new());

        let tab_a = SessionStore::open(Arc::clone(&backend), Arc::clone(&bus));
        let tab_b = SessionStore::open(Arc::clone(&backend), Arc::clone(&bus));

        let seen_by_b = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&seen_by_b);
        let _guard = tab_b.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        tab_a.set(&Session::authenticated(Role::User)).unwrap();
        tab_a.emit(SessionChange::LoggedIn { role: Role::User });

        // Nothing until tab B checks storage.
        assert_eq!(seen_by_b.load(Ordering::SeqCst), 0);

        assert_eq!(tab_b.poll_remote(), 1);
        assert_eq!(seen_by_b.load(Ordering::SeqCst), 1);

        // The underlying state was already visible to a direct read.
        assert_eq!(tab_b.get(), Session::authenticated(Role::User));
    }

    #[test]
    fn a_clone_is_the_same_context() {
        let store = SessionStore::in_memory();
        let clone = store.clone();

        assert_eq!(store.context_id(), clone.context_id());

        let count = Arc::new(AtomicUsize::new(0));
        let count_for_listener = Arc::clone(&count);
        let _guard = store.subscribe(move |_| {
            count_for_listener.fetch_add(1, Ordering::SeqCst);
        });

        // Emitting through the clone reaches listeners on the original.
        clone.emit(SessionChange::LoggedOut);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
