use super::*;

#[test]
fn user_serializes_with_camel_case_field_names() {
    let user = User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: Some("https://cdn.example.com/a.png".to_owned()),
        reputation: 1250,
        join_date: "2023-01-15".to_owned(),
        badges: vec!["Contributor".to_owned(), "Helper".to_owned()],
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["joinDate"], "2023-01-15");
    assert_eq!(json["reputation"], 1250);
    assert_eq!(json["badges"][0], "Contributor");
}

#[test]
fn user_round_trips_through_json() {
    let user = User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar: None,
        reputation: 0,
        join_date: String::new(),
        badges: Vec::new(),
    };

    let json = serde_json::to_string(&user).unwrap();
    let restored: User = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, user);
}

#[test]
fn provider_profile_tolerates_sparse_payloads() {
    let profile: ProviderProfile = serde_json::from_str(r#"{"id":"gh-42"}"#).unwrap();
    assert_eq!(profile.id, "gh-42");
    assert!(profile.username.is_none());
    assert!(profile.email.is_none());
    assert!(profile.reputation.is_none());
    assert!(profile.badges.is_none());
}

#[test]
fn provider_profile_reads_camel_case_fields() {
    let profile: ProviderProfile = serde_json::from_str(
        r#"{"id":"gh-42","avatarUrl":"https://cdn.example.com/a.png","memberSince":"2021-06-01"}"#,
    )
    .unwrap();
    assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example.com/a.png"));
    assert_eq!(profile.member_since.as_deref(), Some("2021-06-01"));
}
