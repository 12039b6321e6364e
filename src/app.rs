//! App shell: context provision and routing.
//!
//! DESIGN
//! ======
//! The session store and the HTTP-backed auth service are created exactly
//! once here and provided via context, so every route observes the same
//! authentication truth and no view ever constructs its own store.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::net::auth::AuthService;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::session::SessionStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::new());
    provide_context(StoredValue::new_local(AuthService::over_http()));

    view! {
        <Title text="Stack Echo"/>
        <Router>
            <Header/>
            <main class="page-main">
                <Routes fallback=|| view! { <p class="page-missing">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
        </Router>
    }
}
