//! Transient user notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fire-and-forget: callers push a message and never look at it again. The
//! `Toaster` component renders the queue; in the browser each toast removes
//! itself after `TOAST_TTL_MS`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

pub const MAX_TOASTS: usize = 5;
pub const TOAST_TTL_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast, dropping the oldest beyond `MAX_TOASTS`.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Context handle for raising notifications.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.state.with(|s| s.items.clone())
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.state.try_update(|s| s.push(kind, message)).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                let _ = state.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// Read the notification handle provided by `App`.
///
/// # Panics
///
/// Panics when called outside the component tree rooted at `App`.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(|| panic!("use_toasts called outside the toast provider"))
}
