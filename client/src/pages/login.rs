//! Login page: username + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::route_gate::RouteGate;
use crate::net::types::Credentials;
use crate::state::session::use_session;
use crate::state::toast::use_toasts;
use crate::util::auth::RouteAccess;

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RouteGate access=RouteAccess::RequiresAnonymous>
            <LoginForm/>
        </RouteGate>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        // On success the route guard sees the new session and leaves this page.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let name = credentials.username.clone();
            match crate::net::api::login(credentials).await {
                Ok(resp) => match session.login(&resp.token, &name) {
                    Ok(()) => {
                        toasts.success(resp.message.unwrap_or_else(|| "Logged in successfully!".to_owned()));
                    }
                    Err(_) => toasts.error("Could not save your session. Check browser storage settings."),
                },
                Err(e) => {
                    log::warn!("login failed: {e}");
                    toasts.error("Invalid username or password");
                }
            }
            let _ = busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, session, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
