//! Auth service — provider dispatch, profile normalization, failure taxonomy.
//!
//! ARCHITECTURE
//! ============
//! `AuthService` is a stateless façade over an `IdentityGateway`
//! implementation. It performs exactly one authentication attempt per call,
//! maps provider-shaped profiles into the canonical `User`, and is the single
//! point where external failures become `AuthError` values. It holds no
//! session state, so concurrent callers are coordinated upstream.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use async_trait::async_trait;

use super::api::HttpIdentityGateway;
use super::types::{ProviderProfile, User};

/// Reputation granted when the provider does not track one.
const DEFAULT_REPUTATION: i64 = 1;

/// The fixed set of supported sign-in mechanisms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthProvider {
    Email,
    GitHub,
    Google,
}

impl AuthProvider {
    /// Human-readable provider name for messages and button labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::GitHub => "GitHub",
            Self::Google => "Google",
        }
    }

    /// Lowercase identifier used in endpoint paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::GitHub => "github",
            Self::Google => "google",
        }
    }
}

/// One authentication attempt's input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMethod {
    /// Email + password pair, delegated to the credential verifier.
    Credentials { email: String, password: String },
    /// OAuth-style external flow for the named provider.
    Social(AuthProvider),
}

impl LoginMethod {
    /// The mechanism this attempt runs through, for in-flight marking.
    #[must_use]
    pub fn provider(&self) -> AuthProvider {
        match self {
            Self::Credentials { .. } => AuthProvider::Email,
            Self::Social(provider) => *provider,
        }
    }
}

/// Closed failure taxonomy for authentication. Display strings are the
/// user-visible messages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Sign-in was cancelled.")]
    ProviderCancelled,
    #[error("Sign-in failed: {0}")]
    ProviderError(String),
    #[error("Network error: {0}")]
    NetworkFailure(String),
    #[error("{0}")]
    Unknown(String),
}

/// External identity-provider collaborator boundary.
///
/// Implementations return provider-shaped profiles on success and already
/// classified `AuthError` values on failure; nothing rawer crosses this
/// seam.
#[async_trait(?Send)]
pub trait IdentityGateway {
    /// Verify an email/password pair against the credential backend.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<ProviderProfile, AuthError>;

    /// Complete an OAuth-style external flow for the given provider.
    async fn social_sign_in(&self, provider: AuthProvider) -> Result<ProviderProfile, AuthError>;
}

/// Stateless authentication façade. Cheap to clone and reentrant.
#[derive(Clone)]
pub struct AuthService {
    gateway: Rc<dyn IdentityGateway>,
}

impl AuthService {
    #[must_use]
    pub fn new(gateway: Rc<dyn IdentityGateway>) -> Self {
        Self { gateway }
    }

    /// Service talking to the real identity endpoints over HTTP.
    #[must_use]
    pub fn over_http() -> Self {
        Self::new(Rc::new(HttpIdentityGateway))
    }

    /// Run one authentication attempt, dispatching on the method's variant.
    ///
    /// # Errors
    ///
    /// Returns the gateway's `AuthError` unchanged; no partial user is ever
    /// produced on failure.
    pub async fn login(&self, method: &LoginMethod) -> Result<User, AuthError> {
        match method {
            LoginMethod::Credentials { email, password } => self.login_with_email(email, password).await,
            LoginMethod::Social(AuthProvider::GitHub) => self.login_with_github().await,
            LoginMethod::Social(AuthProvider::Google) => self.login_with_google().await,
            LoginMethod::Social(AuthProvider::Email) => {
                Err(AuthError::Unknown("email sign-in requires credentials".to_owned()))
            }
        }
    }

    /// Authenticate against the external credential verifier.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the verifier rejects the pair,
    /// `NetworkFailure` on transport failure.
    pub async fn login_with_email(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let profile = self.gateway.verify_credentials(email, password).await?;
        normalize_profile(AuthProvider::Email, profile)
    }

    /// Authenticate through the GitHub-shaped OAuth flow.
    ///
    /// # Errors
    ///
    /// `ProviderCancelled` when the user aborts the external flow,
    /// `ProviderError` on provider-side failure, `NetworkFailure` on
    /// transport failure.
    pub async fn login_with_github(&self) -> Result<User, AuthError> {
        self.social(AuthProvider::GitHub).await
    }

    /// Authenticate through the Google-shaped OAuth flow. Same contract as
    /// [`AuthService::login_with_github`].
    ///
    /// # Errors
    ///
    /// See [`AuthService::login_with_github`].
    pub async fn login_with_google(&self) -> Result<User, AuthError> {
        self.social(AuthProvider::Google).await
    }

    async fn social(&self, provider: AuthProvider) -> Result<User, AuthError> {
        let profile = self.gateway.social_sign_in(provider).await?;
        normalize_profile(provider, profile)
    }
}

/// Map a provider-shaped profile into the canonical `User`.
///
/// Defaults for fields the provider does not supply: reputation starts at
/// [`DEFAULT_REPUTATION`], badges start empty, the join date stays blank,
/// and the display name falls back to the email local part. A profile
/// without an account id or email is rejected, keeping the session store's
/// fully-populated precondition intact.
pub(crate) fn normalize_profile(provider: AuthProvider, profile: ProviderProfile) -> Result<User, AuthError> {
    if profile.id.trim().is_empty() {
        return Err(AuthError::ProviderError(format!(
            "{} profile is missing an account id",
            provider.label()
        )));
    }

    let email = profile
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| AuthError::ProviderError(format!("{} profile is missing an email address", provider.label())))?;

    let username = profile
        .username
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| name_from_email(&email));

    Ok(User {
        id: profile.id,
        username,
        email,
        avatar: profile.avatar_url,
        reputation: profile.reputation.unwrap_or(DEFAULT_REPUTATION).max(0),
        join_date: profile.member_since.unwrap_or_default(),
        badges: profile.badges.unwrap_or_default(),
    })
}

fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}
