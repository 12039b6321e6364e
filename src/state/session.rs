//! Session store: the single source of truth for the signed-in user and
//! the active search term.
//!
//! DESIGN
//! ======
//! `SessionStore` is a `Copy` handle over `RwSignal`s, instantiated once at
//! application start and provided via context. `is_authenticated` is derived
//! from user presence, so a half-populated session cannot exist. Mutation
//! happens only through the methods here; signal writes are synchronous, so
//! a read issued after a mutation returns always sees the new state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Untracked snapshot of the session dimensions, as of the most recent
/// completed mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    /// The signed-in user, if any.
    pub current_user: Option<User>,
    /// True iff `current_user` is present.
    pub is_authenticated: bool,
    /// Active search term; empty means cleared.
    pub search_query: String,
}

/// Observable session state shared by all views.
#[derive(Clone, Copy)]
pub struct SessionStore {
    user: RwSignal<Option<User>>,
    search_query: RwSignal<String>,
}

impl SessionStore {
    /// Create the store in its initial state: anonymous, empty search.
    #[must_use]
    pub fn new() -> Self {
        Self { user: RwSignal::new(None), search_query: RwSignal::new(String::new()) }
    }

    /// Record a successful authentication. Replaces any current user.
    ///
    /// Callers hand over already-validated users; the store itself never
    /// fails.
    pub fn login(&self, user: User) {
        debug_assert!(
            !user.id.is_empty() && !user.username.is_empty() && !user.email.is_empty(),
            "session store requires a fully populated user"
        );
        self.user.set(Some(user));
    }

    /// Clear the current user. Safe to call when already anonymous.
    pub fn logout(&self) {
        self.user.set(None);
    }

    /// Replace the active search term. Empty string is a valid cleared state.
    pub fn set_search_query(&self, query: String) {
        self.search_query.set(query);
    }

    /// Reactive read access to the current user.
    #[must_use]
    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Reactive read access to the search term.
    #[must_use]
    pub fn search_query(&self) -> ReadSignal<String> {
        self.search_query.read_only()
    }

    /// Whether a user is currently signed in. Tracks when called inside a
    /// reactive scope.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// Untracked snapshot of all session dimensions.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let current_user = self.user.get_untracked();
        SessionSnapshot {
            is_authenticated: current_user.is_some(),
            current_user,
            search_query: self.search_query.get_untracked(),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
