//! HTTP gateway to the external identity endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `AuthError::Unknown` since sign-in is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP statuses are mapped into the closed `AuthError` taxonomy here, so
//! callers never see a raw status code or transport error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::auth::{AuthError, AuthProvider, IdentityGateway};
use super::types::ProviderProfile;

#[cfg(any(test, feature = "hydrate"))]
const CREDENTIAL_LOGIN_ENDPOINT: &str = "/api/auth/login";

#[cfg(not(feature = "hydrate"))]
const SERVER_RENDER_MESSAGE: &str = "Sign-in is not available during server rendering.";

#[cfg(any(test, feature = "hydrate"))]
fn social_login_endpoint(provider: AuthProvider) -> String {
    format!("/api/auth/oauth/{}", provider.slug())
}

/// Classify a non-OK status from the credential verifier.
#[cfg(any(test, feature = "hydrate"))]
fn map_credential_failure(status: u16) -> AuthError {
    match status {
        401 | 403 => AuthError::InvalidCredentials,
        status => AuthError::ProviderError(format!("credential verifier returned {status}")),
    }
}

/// Classify a non-OK status from a social provider's flow endpoint.
///
/// 401 means the user aborted the external flow; the provider callback
/// reports it, this core never cancels its own request.
#[cfg(any(test, feature = "hydrate"))]
fn map_social_failure(provider: AuthProvider, status: u16) -> AuthError {
    match status {
        401 => AuthError::ProviderCancelled,
        502 | 503 | 504 => AuthError::NetworkFailure(format!("{} gateway returned {status}", provider.label())),
        status => AuthError::ProviderError(format!("{} provider returned {status}", provider.label())),
    }
}

/// Gateway that talks to the real identity endpoints. Stateless.
pub struct HttpIdentityGateway;

#[async_trait(?Send)]
impl IdentityGateway for HttpIdentityGateway {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<ProviderProfile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(CREDENTIAL_LOGIN_ENDPOINT)
                .json(&payload)
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            if !resp.ok() {
                return Err(map_credential_failure(resp.status()));
            }
            resp.json::<ProviderProfile>()
                .await
                .map_err(|e| AuthError::ProviderError(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Unknown(SERVER_RENDER_MESSAGE.to_owned()))
        }
    }

    async fn social_sign_in(&self, provider: AuthProvider) -> Result<ProviderProfile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = social_login_endpoint(provider);
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            if !resp.ok() {
                return Err(map_social_failure(provider, resp.status()));
            }
            resp.json::<ProviderProfile>()
                .await
                .map_err(|e| AuthError::ProviderError(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
            Err(AuthError::Unknown(SERVER_RENDER_MESSAGE.to_owned()))
        }
    }
}
