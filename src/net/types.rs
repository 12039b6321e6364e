//! Shared DTOs for the client/identity-provider boundary.
//!
//! DESIGN
//! ======
//! `User` is the canonical session-scoped profile shape every provider result
//! is mapped into; `ProviderProfile` mirrors the looser provider payloads so
//! serde round-trips stay lossless before normalization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user in canonical shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, stable per account.
    pub id: String,
    /// Display name; non-empty once authenticated.
    pub username: String,
    /// Contact address; non-empty once authenticated.
    pub email: String,
    /// Avatar image URL. Views fall back to a placeholder when absent.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Informational reputation score, never negative.
    pub reputation: i64,
    /// ISO 8601 date the account joined; informational.
    pub join_date: String,
    /// Badge labels. Insertion order is kept for display stability.
    #[serde(default)]
    pub badges: Vec<String>,
}

/// A provider-shaped profile as returned by an identity endpoint.
///
/// Everything beyond `id` is optional; the auth service fills the gaps with
/// documented defaults or rejects the profile when a required field is
/// missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    /// Provider-scoped account identifier.
    pub id: String,
    /// Display name or login, if the provider supplies one.
    #[serde(default)]
    pub username: Option<String>,
    /// Verified email address, if the provider supplies one.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Reputation score from the profile backend, if tracked.
    #[serde(default)]
    pub reputation: Option<i64>,
    /// ISO 8601 date of account creation, if tracked.
    #[serde(default)]
    pub member_since: Option<String>,
    /// Badge labels from the profile backend, if tracked.
    #[serde(default)]
    pub badges: Option<Vec<String>>,
}
