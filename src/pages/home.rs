//! Questions landing page.
//!
//! Question listing itself lives behind a separate data service; this page
//! renders the heading derived from the shared search term so the header's
//! search submissions are immediately visible.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let heading = move || results_heading(&store.search_query().get());

    view! {
        <div class="home-page">
            <h1 class="home-page__heading">{heading}</h1>
            <p class="home-page__hint">
                "Browse questions from the community, or use the search bar to narrow them down."
            </p>
        </div>
    }
}

fn results_heading(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        "Top Questions".to_owned()
    } else {
        format!("Search results for \"{query}\"")
    }
}
