//! Route guard shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The decision is a
//! pure function of the session flag and the page's access requirement; the
//! installer wires it to the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionContext;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    RequiresAuth,
    RequiresAnonymous,
}

/// Outcome of checking a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GateDecision {
    /// Target path for redirects; `None` for `Render`.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

pub fn gate_decision(is_authenticated: bool, access: RouteAccess) -> GateDecision {
    match (access, is_authenticated) {
        (RouteAccess::RequiresAuth, false) => GateDecision::RedirectToLogin,
        (RouteAccess::RequiresAnonymous, true) => GateDecision::RedirectToDashboard,
        _ => GateDecision::Render,
    }
}

/// Redirect whenever the session no longer satisfies `access`.
///
/// Returns a memo the page can use to hide its body while redirecting.
pub fn install_route_guard<F>(session: SessionContext, access: RouteAccess, navigate: F) -> Memo<GateDecision>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let decision = Memo::new(move |_| gate_decision(session.is_authenticated(), access));
    Effect::new(move || {
        if let Some(path) = decision.get().redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    decision
}
