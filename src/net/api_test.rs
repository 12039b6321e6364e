use super::*;

#[test]
fn social_login_endpoint_formats_expected_paths() {
    assert_eq!(social_login_endpoint(AuthProvider::GitHub), "/api/auth/oauth/github");
    assert_eq!(social_login_endpoint(AuthProvider::Google), "/api/auth/oauth/google");
}

#[test]
fn credential_endpoint_is_stable() {
    assert_eq!(CREDENTIAL_LOGIN_ENDPOINT, "/api/auth/login");
}

#[test]
fn credential_rejection_statuses_map_to_invalid_credentials() {
    assert_eq!(map_credential_failure(401), AuthError::InvalidCredentials);
    assert_eq!(map_credential_failure(403), AuthError::InvalidCredentials);
}

#[test]
fn other_credential_failures_are_provider_errors() {
    assert!(matches!(
        map_credential_failure(500),
        AuthError::ProviderError(msg) if msg.contains("500")
    ));
}

#[test]
fn social_abort_maps_to_provider_cancelled() {
    assert_eq!(map_social_failure(AuthProvider::GitHub, 401), AuthError::ProviderCancelled);
}

#[test]
fn social_gateway_statuses_map_to_network_failure() {
    for status in [502, 503, 504] {
        assert!(matches!(
            map_social_failure(AuthProvider::Google, status),
            AuthError::NetworkFailure(msg) if msg.contains("Google")
        ));
    }
}

#[test]
fn other_social_failures_are_provider_errors() {
    assert!(matches!(
        map_social_failure(AuthProvider::GitHub, 500),
        AuthError::ProviderError(msg) if msg.contains("GitHub")
    ));
}
