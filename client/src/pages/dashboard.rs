//! Dashboard page: post composer beside the saved-post gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The composer and gallery keep
//! independent state; a successful save bumps `reload` so the gallery refetches.

use leptos::prelude::*;

use crate::components::post_composer::PostComposer;
use crate::components::route_gate::RouteGate;
use crate::components::saved_posts::SavedPosts;
use crate::util::auth::RouteAccess;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGate access=RouteAccess::RequiresAuth>
            <Dashboard/>
        </RouteGate>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let on_saved = Callback::new(move |()| reload.update(|n| *n = n.wrapping_add(1)));

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__column">
                <PostComposer on_saved=on_saved/>
            </div>
            <div class="dashboard-page__column">
                <SavedPosts reload=reload/>
            </div>
        </div>
    }
}
