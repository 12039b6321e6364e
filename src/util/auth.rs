//! Shared login orchestration.
//!
//! ARCHITECTURE
//! ============
//! Every sign-in entry point (email form, GitHub button, Google button) runs
//! the same attempt protocol: mark in flight, await the auth service, push the
//! user into the session store, then navigate. At most one attempt may be in
//! flight across all mechanisms; the gate lives here, not in the stateless
//! auth service.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation of an in-flight call; an aborted social popup
//! surfaces as `ProviderCancelled` from the gateway. Failed attempts are
//! never retried automatically — retry is a user-initiated resubmission.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::auth::{AuthProvider, AuthService, LoginMethod};
use crate::state::session::SessionStore;

/// Landing route after a successful login or logout.
pub const HOME_PATH: &str = "/";

/// How a login attempt concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The store now holds the authenticated user and navigation fired.
    LoggedIn,
    /// The attempt settled with an error; the store is unchanged.
    Failed,
    /// Another attempt was already in flight; nothing was started.
    Rejected,
    /// A user was already signed in; navigated without an auth call.
    AlreadyAuthenticated,
}

/// Run one login attempt end to end.
///
/// Ordering is strict: suspend on the network, resume on settle, mutate the
/// store, then navigate. The store mutation is visible to every observer
/// before navigation because signal writes complete synchronously.
pub async fn run_login_attempt<F>(
    service: &AuthService,
    store: SessionStore,
    method: LoginMethod,
    in_flight: RwSignal<Option<AuthProvider>>,
    error: RwSignal<Option<String>>,
    navigate: F,
) -> AttemptOutcome
where
    F: Fn(&str),
{
    if store.snapshot().is_authenticated {
        navigate(HOME_PATH);
        return AttemptOutcome::AlreadyAuthenticated;
    }

    let provider = method.provider();
    if in_flight.get_untracked().is_some() {
        return AttemptOutcome::Rejected;
    }
    in_flight.set(Some(provider));
    error.set(None);

    match service.login(&method).await {
        Ok(user) => {
            store.login(user);
            in_flight.set(None);
            navigate(HOME_PATH);
            AttemptOutcome::LoggedIn
        }
        Err(err) => {
            log::warn!("{} sign-in failed: {err}", provider.label());
            error.set(Some(err.to_string()));
            in_flight.set(None);
            AttemptOutcome::Failed
        }
    }
}

/// Redirect home whenever an already-authenticated user lands on a login
/// route.
pub fn install_authed_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.is_authenticated() {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
