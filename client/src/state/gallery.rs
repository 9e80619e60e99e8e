//! Saved-post gallery state: the fetched list and the single open detail.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::api::ApiError;
use crate::net::types::SavedPost;

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub posts: Vec<SavedPost>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
    load_seq: u64,
}

impl GalleryState {
    /// Mark a fetch as started and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.load_seq += 1;
        self.load_seq
    }

    /// Apply a fetch result. Returns `false` if a newer fetch superseded it.
    ///
    /// Failure leaves the list empty. Either way the detail overlay closes,
    /// since indices may no longer match.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<SavedPost>, ApiError>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        self.selected = None;
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
            }
            Err(e) => {
                self.posts.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Open the detail overlay for `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.posts.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected_post(&self) -> Option<&SavedPost> {
        self.selected.and_then(|i| self.posts.get(i))
    }
}
