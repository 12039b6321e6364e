//! Login page supporting email credentials and GitHub/Google social sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three entry points run the shared attempt protocol in `util::auth`;
//! this page only validates raw form input, tracks which mechanism is busy,
//! and renders the single error message per failed attempt.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::{AuthProvider, AuthService};
use crate::state::session::SessionStore;
use crate::util::auth::install_authed_redirect;

pub(crate) const DEMO_EMAIL: &str = "demo@example.com";
pub(crate) const DEMO_PASSWORD: &str = "demo";

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let service = expect_context::<StoredValue<AuthService, LocalStorage>>().get_value();
    let navigate = use_navigate();

    // Already signed in: skip straight to the landing view.
    install_authed_redirect(store, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let in_flight = RwSignal::new(None::<AuthProvider>);

    let on_fill_demo = move |_| {
        email.set(DEMO_EMAIL.to_owned());
        password.set(DEMO_PASSWORD.to_owned());
    };

    let submit_service = service.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_credentials_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        let service = submit_service.clone();
        let navigate = submit_navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let method =
                crate::net::auth::LoginMethod::Credentials { email: email_value, password: password_value };
            crate::util::auth::run_login_attempt(&service, store, method, in_flight, error, move |path| {
                navigate(path, NavigateOptions::default());
            })
            .await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (service, navigate, email_value, password_value);
    };

    let social_attempt = {
        let service = service.clone();
        let navigate = navigate.clone();
        move |provider: AuthProvider| {
            let service = service.clone();
            let navigate = navigate.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let method = crate::net::auth::LoginMethod::Social(provider);
                crate::util::auth::run_login_attempt(&service, store, method, in_flight, error, move |path| {
                    navigate(path, NavigateOptions::default());
                })
                .await;
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (service, navigate, provider);
        }
    };
    let on_github = {
        let social_attempt = social_attempt.clone();
        move |_| social_attempt(AuthProvider::GitHub)
    };
    let on_google = {
        let social_attempt = social_attempt.clone();
        move |_| social_attempt(AuthProvider::Google)
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="login-card__brand" href="/">"Stack Echo"</a>
                <h1>"Sign in to your account"</h1>
                <p class="login-card__subtitle">
                    "Sign in to ask questions, provide answers, and join the community."
                </p>

                <div class="login-demo">
                    <p>
                        <strong>"Demo: "</strong>
                        "use email demo@example.com, password demo"
                    </p>
                    <button
                        class="login-button login-button--ghost"
                        on:click=on_fill_demo
                        disabled=move || in_flight.get().is_some()
                    >
                        "Fill Demo"
                    </button>
                </div>

                <div class="login-social">
                    <button
                        class="login-button"
                        on:click=on_github
                        disabled=move || in_flight.get().is_some()
                    >
                        {move || social_button_label(AuthProvider::GitHub, in_flight.get())}
                    </button>
                    <button
                        class="login-button"
                        on:click=on_google
                        disabled=move || in_flight.get().is_some()
                    >
                        {move || social_button_label(AuthProvider::Google, in_flight.get())}
                    </button>
                </div>

                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or continue with email"</p>

                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || in_flight.get().is_some()
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || in_flight.get().is_some()
                    />
                    <button
                        class="login-button login-button--primary"
                        type="submit"
                        disabled=move || in_flight.get().is_some()
                    >
                        {move || submit_label(in_flight.get())}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign up for free"</a>
                </p>
            </div>
        </div>
    }
}

/// Trim and check raw form input before it reaches the auth service.
fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn social_button_label(provider: AuthProvider, in_flight: Option<AuthProvider>) -> String {
    if in_flight == Some(provider) {
        format!("Signing in with {}...", provider.label())
    } else {
        format!("Continue with {}", provider.label())
    }
}

fn submit_label(in_flight: Option<AuthProvider>) -> &'static str {
    if in_flight == Some(AuthProvider::Email) { "Signing in..." } else { "Sign in" }
}
