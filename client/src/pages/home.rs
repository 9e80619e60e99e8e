//! Public landing page.

use leptos::prelude::*;

use crate::state::session::use_session;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Content",
        "Leverage advanced AI to generate engaging posts tailored to your brand's voice.",
    ),
    (
        "Multi-Platform Support",
        "Create optimized content for LinkedIn, Facebook, and Twitter in one go.",
    ),
    (
        "Instant Generation",
        "Get platform-specific posts in seconds, saving you hours of work.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let get_started_href = move || {
        if session.is_ready() && session.is_authenticated() { "/dashboard" } else { "/register" }
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Transform Your Social Media Presence with " <span class="accent">"AI"</span></h1>
                <p class="home-page__lead">
                    "Generate engaging, platform-optimized social media posts in seconds using advanced AI technology."
                </p>
                <a href=get_started_href class="btn btn--primary">
                    "Get Started"
                </a>
            </section>
            <section class="home-page__features">
                <h2>"Features"</h2>
                <div class="home-page__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
