//! Toast stack rendered once at the application root.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, use_toasts};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .items()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast_class(toast.kind)>
                                <span class="toast__message">{toast.message}</span>
                                <button class="toast__dismiss" on:click=move |_| toasts.dismiss(id) title="Dismiss">
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
