//! Wrapper that renders a page body only when the route guard allows it.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{GateDecision, RouteAccess, install_route_guard};

fn pending_label(ready: bool, decision: GateDecision) -> &'static str {
    match (ready, decision) {
        (false, _) | (true, GateDecision::Render) => "Loading...",
        (true, GateDecision::RedirectToLogin) => "Redirecting to login...",
        (true, GateDecision::RedirectToDashboard) => "Redirecting to dashboard...",
    }
}

/// Renders `children` once hydrated and `access` is satisfied; otherwise a
/// short status line while the guard redirects.
#[component]
pub fn RouteGate(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = install_route_guard(session, access, use_navigate());

    view! {
        <Show
            when=move || session.is_ready() && decision.get() == GateDecision::Render
            fallback=move || {
                view! {
                    <p class="route-gate__pending">
                        {move || pending_label(session.is_ready(), decision.get())}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
