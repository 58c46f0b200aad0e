//! Audience-specific portal shells.
//!
//! Each shell mounts its own header instance and tracks the session store
//! independently: subscribe on mount, re-read on every notification,
//! unsubscribe on drop. No shell ever reads another shell's state.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use vetrina_core::{Session, VerificationStatus};
use vetrina_events::{SessionChange, SessionChanged, SubscriptionGuard};
use vetrina_session::{SessionStore, StorageError};

use crate::header::HeaderView;
use crate::overlay::{GateView, VerificationGate};

/// The audience a shell serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// Marketing and login surfaces.
    Public,
    /// Signed-in shopper storefront.
    Shopper,
    /// Admin back office.
    Admin,
    /// Affiliate/merchant portal (verification-gated).
    Partner,
}

#[derive(Debug, Clone, Copy)]
struct ShellState {
    session: Session,
    verification: VerificationStatus,
    /// Change notifications applied since mount. The shell is never
    /// remounted by a change; this only ever grows.
    generation: u64,
}

/// One mounted layout wrapper.
pub struct PortalShell {
    audience: Audience,
    store: SessionStore,
    state: Arc<Mutex<ShellState>>,
    gate: VerificationGate,
    _subscription: SubscriptionGuard<SessionChanged>,
}

impl PortalShell {
    /// Mount a shell: snapshot the store, then subscribe for changes.
    pub fn mount(audience: Audience, store: &SessionStore) -> Self {
        let state = Arc::new(Mutex::new(ShellState {
            session: store.get(),
            verification: store.verification_status(),
            generation: 0,
        }));

        let listener_store = store.clone();
        let listener_state = Arc::clone(&state);
        let subscription = store.subscribe(move |_event| {
            // Re-read rather than trusting the payload: the store is the
            // source of truth and writes are last-write-wins.
            let session = listener_store.get();
            let verification = listener_store.verification_status();

            let mut state = listener_state.lock().unwrap_or_else(PoisonError::into_inner);
            state.session = session;
            state.verification = verification;
            state.generation += 1;
        });

        tracing::debug!(audience = ?audience, "portal shell mounted");

        Self {
            audience,
            store: store.clone(),
            state,
            gate: VerificationGate::new(),
            _subscription: subscription,
        }
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    /// Latest observed session snapshot.
    pub fn session(&self) -> Session {
        self.snapshot().session
    }

    /// Latest observed verification status.
    pub fn verification(&self) -> VerificationStatus {
        self.snapshot().verification
    }

    /// Number of change notifications applied since mount.
    pub fn generation(&self) -> u64 {
        self.snapshot().generation
    }

    /// Dismiss the current overlay (the approved congratulation).
    pub fn dismiss_overlay(&mut self) {
        self.gate.dismiss();
    }

    /// Walk the verification demo cycle one step, through the store, so
    /// every mounted surface observes the change and not just this shell.
    pub fn demo_advance_verification(&self) -> Result<VerificationStatus, StorageError> {
        let next = self.store.verification_status().demo_next();

        self.store.set_verification_status(next)?;
        self.store
            .emit(SessionChange::VerificationChanged { status: next });

        tracing::debug!(status = %next, "verification demo toggled");
        Ok(next)
    }

    /// Current view model.
    pub fn view(&mut self) -> ShellView {
        let snapshot = self.snapshot();

        // The gate only applies to the partner portal, and only when the
        // session role is a verification subject at all.
        let gate = match self.audience {
            Audience::Partner if snapshot.session.role.is_verification_subject() => {
                Some(self.gate.view(snapshot.verification))
            }
            _ => None,
        };

        ShellView {
            audience: self.audience,
            session: snapshot.session,
            header: HeaderView::for_session(&snapshot.session),
            gate,
            generation: snapshot.generation,
        }
    }

    fn snapshot(&self) -> ShellState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PortalShell {
    fn drop(&mut self) {
        // The subscription guard does the actual teardown.
        tracing::debug!(audience = ?self.audience, "portal shell unmounted");
    }
}

impl core::fmt::Debug for PortalShell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("PortalShell")
            .field("audience", &self.audience)
            .field("session", &snapshot.session)
            .field("generation", &snapshot.generation)
            .finish()
    }
}

/// Snapshot view of one mounted shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellView {
    pub audience: Audience,
    pub session: Session,
    pub header: HeaderView,
    /// Present only on the partner portal for verification subjects.
    pub gate: Option<GateView>,
    pub generation: u64,
}
