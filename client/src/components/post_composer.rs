//! Generation form, result panel, and save/copy actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each instance owns its own `ComposerState`. Network responses are applied
//! only while the component is mounted and only if they answer the latest
//! request (see `state::composer`).

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::{Platform, Tone};
use crate::state::composer::{ComposerState, PostForm};
use crate::state::session::use_session;
use crate::state::toast::use_toasts;

/// Post generator card. `on_saved` fires after each successful save.
#[component]
pub fn PostComposer(on_saved: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let composer = RwSignal::new(ComposerState::default());
    let form = RwSignal::new(PostForm::default());

    // Held in a StoredValue so the handlers stay Copy inside `Show` children.
    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
        StoredValue::new(alive)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form_value = form.get_untracked();
        let Some(ticket) = composer.try_update(|c| c.begin_submit(&form_value)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(alive) = alive.try_get_value() else {
                return;
            };
            let token = session.token();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::generate_post(token, ticket.request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let ok = result.is_ok();
                if let Err(e) = &result {
                    log::warn!("generation failed: {e}");
                }
                if composer.try_update(|c| c.finish_submit(ticket.seq, result)) == Some(true) {
                    if ok {
                        toasts.success("Post generated successfully!");
                    } else {
                        toasts.error("Failed to generate post. Please try again.");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, session);
        }
    };

    let on_save = move |_| {
        let Some(ticket) = composer.try_update(ComposerState::begin_save).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(alive) = alive.try_get_value() else {
                return;
            };
            let token = session.token();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_post(token, ticket.request).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let ok = result.is_ok();
                if composer.try_update(|c| c.finish_save(ticket.seq, result)) == Some(true) {
                    if ok {
                        toasts.success("Post saved successfully!");
                        on_saved.run(());
                    } else {
                        toasts.error("Failed to save post");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, on_saved);
        }
    };

    let on_copy = move |_| {
        let Some(text) = composer.with_untracked(|c| c.generated_post().map(str::to_owned)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::copy_text(&text).await {
                Ok(()) => toasts.success("Copied to clipboard!"),
                Err(e) => {
                    log::warn!("copy failed: {e}");
                    toasts.error("Failed to copy to clipboard");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, toasts);
        }
    };

    let submitting = move || composer.with(ComposerState::is_submitting);
    let field_error = move |msg: Option<&'static str>| msg.map(|m| view! { <p class="field-error">{m}</p> });

    view! {
        <section class="card composer">
            <h1 class="card__title">"Generate Social Media Post"</h1>
            <form class="composer__form" on:submit=on_submit>
                <label class="composer__label">
                    "Platform"
                    <select
                        class="composer__input"
                        prop:value=move || form.with(|f| f.platform.clone())
                        on:change=move |ev| form.update(|f| f.platform = event_target_value(&ev))
                    >
                        <option value="">"Select platform"</option>
                        {Platform::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {move || field_error(composer.with(|c| c.errors.platform))}

                <label class="composer__label">
                    "Tone"
                    <select
                        class="composer__input"
                        prop:value=move || form.with(|f| f.tone_style.clone())
                        on:change=move |ev| form.update(|f| f.tone_style = event_target_value(&ev))
                    >
                        <option value="">"Select tone"</option>
                        {Tone::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {move || field_error(composer.with(|c| c.errors.tone_style))}

                <label class="composer__label">
                    "Content"
                    <textarea
                        class="composer__input composer__textarea"
                        rows="4"
                        placeholder="Enter your content here..."
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </label>
                {move || field_error(composer.with(|c| c.errors.content))}

                <button class="btn btn--primary composer__submit" type="submit" disabled=submitting>
                    {move || if submitting() { "Generating..." } else { "Generate Post" }}
                </button>
            </form>
        </section>

        <Show when=move || composer.with(|c| c.generated_post().is_some())>
            <section class="card composer__result">
                <header class="composer__result-header">
                    <h2 class="card__title">"Generated Post"</h2>
                    <div class="composer__actions">
                        <button class="btn" on:click=on_copy>
                            "Copy to clipboard"
                        </button>
                        <button
                            class="btn btn--primary"
                            on:click=on_save
                            disabled=move || !composer.with(ComposerState::can_save)
                        >
                            {move || if composer.with(ComposerState::is_saving) { "Saving..." } else { "Save Post" }}
                        </button>
                    </div>
                </header>
                <p class="composer__post">
                    {move || composer.with(|c| c.generated_post().unwrap_or_default().to_owned())}
                </p>
            </section>
        </Show>
    }
}
