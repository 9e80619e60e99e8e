//! Saved post list with a single-item detail overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full list on mount and whenever `reload` changes. Order is the
//! server's. A failed fetch empties the list and raises a toast; there is no
//! automatic retry.

#[cfg(test)]
#[path = "saved_posts_test.rs"]
mod saved_posts_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::SavedPost;
use crate::state::gallery::GalleryState;
use crate::state::session::use_session;
use crate::state::toast::use_toasts;

/// Uppercase the first character for display (`"twitter"` -> `"Twitter"`).
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn post_meta(post: &SavedPost) -> String {
    format!("{} • {}", capitalize(&post.platform), capitalize(&post.style))
}

#[component]
pub fn SavedPosts(#[prop(into)] reload: Signal<u32>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let gallery = RwSignal::new(GalleryState::default());

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
        alive
    };

    // Effects only run in the browser, so SSR renders the empty list.
    Effect::new(move || {
        reload.track();
        let Some(seq) = gallery.try_update(GalleryState::begin_load) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let token = session.token();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_saved_posts(token).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let failed = result.is_err();
                if gallery.try_update(|g| g.finish_load(seq, result)) == Some(true) && failed {
                    toasts.error("Failed to fetch saved posts");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, session, toasts);
        }
    });

    let on_close = Callback::new(move |()| gallery.update(GalleryState::close));

    view! {
        <section class="card gallery">
            <h2 class="card__title">"Saved Posts"</h2>
            <Show when=move || gallery.with(|g| g.loading && g.posts.is_empty())>
                <p class="gallery__status">"Loading saved posts..."</p>
            </Show>
            <Show when=move || gallery.with(|g| !g.loading && g.posts.is_empty() && g.error.is_none())>
                <p class="gallery__status">"No saved posts yet."</p>
            </Show>
            <ul class="gallery__list">
                {move || {
                    gallery
                        .get()
                        .posts
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| {
                            let meta = post_meta(&post);
                            view! {
                                <li
                                    class="gallery__item"
                                    on:click=move |_| {
                                        gallery.update(|g| {
                                            g.select(index);
                                        });
                                    }
                                >
                                    <h3 class="gallery__item-title">{post.title}</h3>
                                    <p class="gallery__item-meta">{meta}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            {move || {
                gallery
                    .with(|g| g.selected_post().cloned())
                    .map(|post| view! { <PostDetailModal post=post on_close=on_close/> })
            }}
        </section>
    }
}

/// Full-detail overlay for one saved post.
#[component]
fn PostDetailModal(post: SavedPost, on_close: Callback<()>) -> impl IntoView {
    let meta = post_meta(&post);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--post"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <header class="dialog__header">
                    <h3>{post.title}</h3>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "×"
                    </button>
                </header>
                <h4 class="dialog__label">"Original Content"</h4>
                <p class="dialog__text">{post.content}</p>
                <h4 class="dialog__label">"Generated Post"</h4>
                <p class="dialog__text">{post.generated_post}</p>
                <p class="dialog__meta">{meta}</p>
            </div>
        </div>
    }
}
