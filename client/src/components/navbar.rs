//! Top navigation bar with identity and logout.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    // Full reload so no page keeps state from the previous user.
    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"PostCraft"</a>
            <span class="navbar__spacer"></span>
            <Show when=move || session.is_ready()>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="navbar__link">"Login"</a>
                            <a href="/register" class="btn btn--primary navbar__link">"Register"</a>
                        }
                    }
                >
                    <a href="/dashboard" class="navbar__link">"Dashboard"</a>
                    <span class="navbar__user">{move || session.username().unwrap_or_default()}</span>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </Show>
        </nav>
    }
}
