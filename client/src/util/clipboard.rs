//! Clipboard access for the copy-to-clipboard action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Failure of a clipboard write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard exists (SSR, no window).
    #[error("clipboard unavailable")]
    Unavailable,
    /// The browser refused the write (permissions, insecure context).
    #[error("clipboard write rejected")]
    Rejected,
}

/// Write `text` to the system clipboard and wait for the browser to accept it.
///
/// # Errors
///
/// Returns `ClipboardError` when there is no clipboard or the write promise
/// rejects.
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|_| ClipboardError::Rejected)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
