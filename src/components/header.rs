//! Sticky site header: brand, search, and the auth-aware action block.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header never talks to the auth service. It observes the session store
//! for `Anonymous` vs `Authenticated` rendering and issues `logout` and
//! `set_search_query` mutations directly.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::auth::HOME_PATH;

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Account menu entries shown alongside the logout action.
const PROFILE_MENU_LINKS: [(&str, &str); 3] =
    [("/profile", "Profile"), ("/settings", "Settings"), ("/help", "Help")];

#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Local draft of the search input; committed to the store on submit.
    // Seeded from the active query so the term survives a header re-render.
    let local_search = RwSignal::new(search_draft_seed(store));

    let search_navigate = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.set_search_query(local_search.get().trim().to_owned());
        search_navigate(HOME_PATH, NavigateOptions::default());
    };

    let logout_navigate = navigate.clone();
    let on_logout = move |_| {
        store.logout();
        logout_navigate(HOME_PATH, NavigateOptions::default());
    };

    let username = move || store.user().get().map(|u| u.username).unwrap_or_default();
    let reputation_line = move || {
        store
            .user()
            .get()
            .map(|u| format_reputation(u.reputation))
            .unwrap_or_default()
    };
    let avatar = move || {
        store
            .user()
            .get()
            .as_ref()
            .map_or_else(|| PLACEHOLDER_AVATAR.to_owned(), avatar_src)
    };
    let initial = move || avatar_initial(&username());

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">"Stack Echo"</a>

                <nav class="site-header__nav">
                    <a href="/">"Questions"</a>
                    <a href="/tags">"Tags"</a>
                    <a href="/users">"Users"</a>
                </nav>

                <form class="site-header__search" on:submit=on_search>
                    <input
                        class="site-header__search-input"
                        type="text"
                        placeholder="Search questions..."
                        prop:value=move || local_search.get()
                        on:input=move |ev| local_search.set(event_target_value(&ev))
                    />
                </form>

                <Show
                    when=move || store.is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="site-header__actions">
                                <a class="btn" href="/login">"Log in"</a>
                                <a class="btn btn--primary" href="/register">"Sign up"</a>
                            </div>
                        }
                    }
                >
                    <div class="site-header__actions">
                        <a class="btn btn--primary" href="/ask">"Ask Question"</a>
                        <span class="site-header__avatar" title=username>
                            <img class="site-header__avatar-img" src=avatar alt=username/>
                            <span class="site-header__avatar-fallback">{initial}</span>
                        </span>
                        <span class="site-header__identity">
                            {username}
                            <span class="site-header__reputation">{reputation_line}</span>
                        </span>
                        <nav class="site-header__account-menu">
                            {PROFILE_MENU_LINKS
                                .into_iter()
                                .map(|(href, label)| view! { <a href=href>{label}</a> })
                                .collect_view()}
                        </nav>
                        <button class="btn site-header__logout" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Initial value for the header's search input: the store's current query.
fn search_draft_seed(store: SessionStore) -> String {
    store.snapshot().search_query
}

fn avatar_src(user: &User) -> String {
    user.avatar
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
}

/// First letter of the username, uppercased; `"U"` when there is none.
fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

fn format_reputation(reputation: i64) -> String {
    format!("{} reputation", group_thousands(reputation))
}

fn group_thousands(value: i64) -> String {
    let raw = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 { format!("-{grouped}") } else { grouped }
}
