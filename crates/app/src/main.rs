//! Demo walkthrough: two browsing contexts of one storefront origin.
//!
//! Runs the whole engine end to end (guarded navigation, login, header
//! synchronization across contexts, the verification demo cycle, logout)
//! and logs every step. Set `VETRINA_DURABLE=1` to use the on-disk session
//! document instead of memory (state then survives between runs, exactly
//! like a real origin).

use std::sync::Arc;

use anyhow::Context as _;

use vetrina_auth::{AuthFlow, Credentials};
use vetrina_core::RoutePath;
use vetrina_events::CrossContextBus;
use vetrina_portal::{Audience, PortalShell};
use vetrina_routing::{RouteDecision, resolve};
use vetrina_session::{FileStorage, MemoryStorage, SessionStore, StorageBackend};

fn main() -> anyhow::Result<()> {
    vetrina_observability::init_with_filter("info,vetrina_session=debug,vetrina_portal=debug");

    let backend: Arc<dyn StorageBackend> = if std::env::var_os("VETRINA_DURABLE").is_some() {
        let file = FileStorage::open_default().context("resolving the session document path")?;
        tracing::info!(path = %file.path().display(), "using file-backed session storage");
        Arc::new(file)
    } else {
        tracing::info!("using in-memory session storage (set VETRINA_DURABLE=1 to persist)");
        Arc::new(MemoryStorage::new())
    };

    let bus = Arc::new(CrossContextBus::new());

    // Two independent "tabs" of the same origin.
    let tab_a = SessionStore::open(Arc::clone(&backend), Arc::clone(&bus));
    let tab_b = SessionStore::open(backend, bus);

    // Start the walkthrough from a known state.
    tab_a.clear().context("resetting the session")?;
    tab_a
        .set_verification_status(vetrina_core::VerificationStatus::Pending)
        .context("resetting the verification record")?;

    let mut header_a = PortalShell::mount(Audience::Public, &tab_a);
    let mut portal_b = PortalShell::mount(Audience::Partner, &tab_b);

    // Signed out, the affiliate portal bounces to the login surface.
    let attempt = RoutePath::new("/affiliate/dashboard");
    match resolve(&attempt, &tab_a.get()) {
        RouteDecision::Redirect {
            to,
            resume_after_login,
        } => {
            tracing::info!(to = %to, resume = ?resume_after_login.as_ref().map(RoutePath::as_str), "guard bounced the guest");
        }
        RouteDecision::Allow => anyhow::bail!("a guest session must not enter the affiliate portal"),
    }

    // Log in as the demo affiliate in tab A, resuming the attempted path.
    let flow = AuthFlow::new(tab_a.clone());
    let outcome = flow
        .login(
            &Credentials::new("affiliate", "affiliate123"),
            Some(attempt.clone()),
        )
        .context("demo affiliate login")?;
    tracing::info!(
        role = %outcome.session.role,
        redirect = ?outcome.redirect.as_ref().map(RoutePath::as_str),
        "logged in"
    );
    anyhow::ensure!(
        resolve(&attempt, &tab_a.get()).is_allowed(),
        "the portal must open after login"
    );

    // Tab A's header saw the change synchronously.
    let view_a = header_a.view();
    tracing::info!(
        authenticated = view_a.header.authenticated,
        primary = %view_a.header.navigation.primary_action.path,
        "tab A header re-rendered"
    );

    // Tab B observes on its next storage check.
    let replayed = tab_b.poll_remote();
    tracing::info!(replayed, "tab B drained cross-context changes");

    let view_b = portal_b.view();
    let gate = view_b
        .gate
        .context("the partner portal should be gated for an affiliate")?;
    tracing::info!(
        blocking = gate.is_blocking(),
        overlay = ?gate.overlay.as_ref().map(|o| o.title.clone()),
        "tab B portal gate"
    );

    // Walk the verification demo cycle from tab B; tab A follows suit.
    for _ in 0..3 {
        let status = portal_b.demo_advance_verification()?;
        let gate = portal_b.view().gate;
        tracing::info!(
            status = %status,
            blocking = gate.as_ref().is_some_and(|g| g.is_blocking()),
            "verification stepped"
        );
    }
    tab_a.poll_remote();

    // Log out from tab A; every surface sees guest before the redirect runs.
    let logout = flow.logout()?;
    anyhow::ensure!(
        header_a.view().session.is_guest(),
        "tab A must be signed out before the redirect"
    );
    tracing::info!(redirect = %logout.redirect, "logged out");

    tab_b.poll_remote();
    anyhow::ensure!(
        portal_b.view().session.is_guest(),
        "tab B must observe the logout on its next check"
    );
    tracing::info!("both contexts are back to guest; walkthrough complete");

    Ok(())
}
