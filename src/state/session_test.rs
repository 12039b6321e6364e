use super::*;

fn sample_user(id: &str, username: &str) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        avatar: None,
        reputation: 1,
        join_date: "2023-01-15".to_owned(),
        badges: Vec::new(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_is_anonymous_with_empty_search() {
    let store = SessionStore::new();
    let snapshot = store.snapshot();
    assert!(snapshot.current_user.is_none());
    assert!(!snapshot.is_authenticated);
    assert_eq!(snapshot.search_query, "");
}

#[test]
fn default_equals_new() {
    assert_eq!(SessionStore::default().snapshot(), SessionStore::new().snapshot());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn login_sets_user_and_authenticated() {
    let store = SessionStore::new();
    store.login(sample_user("u1", "alice"));

    let snapshot = store.snapshot();
    assert!(snapshot.is_authenticated);
    assert_eq!(snapshot.current_user.map(|u| u.username), Some("alice".to_owned()));
}

#[test]
fn logout_clears_user_and_authenticated() {
    let store = SessionStore::new();
    store.login(sample_user("u1", "alice"));
    store.logout();

    let snapshot = store.snapshot();
    assert!(!snapshot.is_authenticated);
    assert!(snapshot.current_user.is_none());
}

#[test]
fn logout_when_anonymous_is_a_no_op() {
    let store = SessionStore::new();
    let before = store.snapshot();
    store.logout();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn second_login_replaces_user_without_merging() {
    let store = SessionStore::new();
    store.login(sample_user("u1", "alice"));
    store.login(sample_user("u2", "bob"));

    let user = store.snapshot().current_user.unwrap();
    assert_eq!(user.id, "u2");
    assert_eq!(user.username, "bob");
    assert_eq!(user.email, "bob@example.com");
}

#[test]
fn authenticated_tracks_most_recent_transition_across_cycles() {
    let store = SessionStore::new();
    for round in 0..3 {
        store.login(sample_user(&format!("u{round}"), "cycler"));
        assert!(store.is_authenticated());
        store.logout();
        assert!(!store.is_authenticated());
    }
}

// =============================================================
// Search query dimension
// =============================================================

#[test]
fn set_search_query_replaces_value() {
    let store = SessionStore::new();
    store.set_search_query("rust borrow checker".to_owned());
    assert_eq!(store.snapshot().search_query, "rust borrow checker");

    store.set_search_query(String::new());
    assert_eq!(store.snapshot().search_query, "");
}

#[test]
fn search_query_does_not_affect_auth_dimension() {
    let store = SessionStore::new();
    store.login(sample_user("u1", "alice"));
    store.set_search_query("lifetimes".to_owned());

    let snapshot = store.snapshot();
    assert!(snapshot.is_authenticated);
    assert_eq!(snapshot.current_user.map(|u| u.id), Some("u1".to_owned()));
}

#[test]
fn auth_transitions_do_not_affect_search_query() {
    let store = SessionStore::new();
    store.set_search_query("async traits".to_owned());
    store.login(sample_user("u1", "alice"));
    store.logout();
    assert_eq!(store.snapshot().search_query, "async traits");
}

// =============================================================
// Snapshot consistency
// =============================================================

#[test]
fn snapshot_reflects_most_recent_mutation() {
    let store = SessionStore::new();
    store.login(sample_user("u1", "alice"));
    assert!(store.snapshot().is_authenticated);

    store.logout();
    assert!(!store.snapshot().is_authenticated);
}
