//! Post composer state: form validation and the generate/save cycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by a single `PostComposer` instance. The component drives the async
//! calls; this module decides which calls may be issued and which responses
//! may be applied.
//!
//! DESIGN
//! ======
//! Every issued request carries a sequence number. A response is applied only
//! when its number matches the latest request of that kind, so an older
//! response can never overwrite a newer result.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::api::ApiError;
use crate::net::types::{GenerateRequest, Platform, SaveRequest, Tone};

pub const MIN_CONTENT_LEN: usize = 10;

pub const PLATFORM_REQUIRED: &str = "Please select a platform";
pub const TONE_REQUIRED: &str = "Please select a tone";
pub const CONTENT_TOO_SHORT: &str = "Content must be at least 10 characters";

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub platform: String,
    pub tone_style: String,
    pub content: String,
}

/// Field-scoped validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub platform: Option<&'static str>,
    pub tone_style: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.tone_style.is_none() && self.content.is_none()
    }
}

impl PostForm {
    /// Check all three fields and build the generation request.
    ///
    /// # Errors
    ///
    /// Returns every failing field's message at once.
    pub fn validate(&self) -> Result<GenerateRequest, FieldErrors> {
        let platform = self.platform.parse::<Platform>().ok();
        let tone = self.tone_style.parse::<Tone>().ok();
        let content_ok = self.content.chars().count() >= MIN_CONTENT_LEN;

        match (platform, tone, content_ok) {
            (Some(platform), Some(tone_style), true) => Ok(GenerateRequest {
                platform,
                tone_style,
                content: self.content.clone(),
            }),
            _ => Err(FieldErrors {
                platform: platform.is_none().then_some(PLATFORM_REQUIRED),
                tone_style: tone.is_none().then_some(TONE_REQUIRED),
                content: (!content_ok).then_some(CONTENT_TOO_SHORT),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposerPhase {
    #[default]
    Idle,
    Submitting,
    Generated,
    SubmitFailed,
    Saving,
    Saved,
    SaveFailed,
}

/// A request the component is allowed to send, tagged with its sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket<T> {
    pub seq: u64,
    pub request: T,
}

#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub phase: ComposerPhase,
    pub errors: FieldErrors,
    /// Most recent generated post with the request that produced it.
    generated: Option<(GenerateRequest, String)>,
    /// Request currently awaiting a generation response.
    in_flight: Option<GenerateRequest>,
    submit_seq: u64,
    save_seq: u64,
}

impl ComposerState {
    pub fn generated_post(&self) -> Option<&str> {
        self.generated.as_ref().map(|(_, post)| post.as_str())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ComposerPhase::Submitting
    }

    pub fn is_saving(&self) -> bool {
        self.phase == ComposerPhase::Saving
    }

    pub fn can_save(&self) -> bool {
        self.generated.is_some() && !self.is_submitting() && !self.is_saving()
    }

    /// Validate `form` and, if valid, start a generation.
    ///
    /// Returns `None` (and issues nothing) when validation fails or a
    /// generation is already pending.
    pub fn begin_submit(&mut self, form: &PostForm) -> Option<RequestTicket<GenerateRequest>> {
        if self.is_submitting() {
            return None;
        }
        match form.validate() {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.phase = ComposerPhase::Submitting;
                self.submit_seq += 1;
                self.in_flight = Some(request.clone());
                Some(RequestTicket { seq: self.submit_seq, request })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply a generation response. Returns `false` if it was stale.
    pub fn finish_submit(&mut self, seq: u64, result: Result<String, ApiError>) -> bool {
        if seq != self.submit_seq || !self.is_submitting() {
            log::debug!("dropping stale generation response {seq}");
            return false;
        }
        let request = self.in_flight.take();
        match (result, request) {
            (Ok(post), Some(request)) => {
                self.generated = Some((request, post));
                self.phase = ComposerPhase::Generated;
            }
            _ => self.phase = ComposerPhase::SubmitFailed,
        }
        true
    }

    /// Start saving the current generated post.
    ///
    /// Returns `None` when there is nothing to save or a request is pending.
    pub fn begin_save(&mut self) -> Option<RequestTicket<SaveRequest>> {
        if !self.can_save() {
            return None;
        }
        let (source, post) = self.generated.as_ref()?;
        let request = SaveRequest {
            platform: source.platform,
            tone_style: source.tone_style,
            content: source.content.clone(),
            generated_post: post.clone(),
        };
        self.phase = ComposerPhase::Saving;
        self.save_seq += 1;
        Some(RequestTicket { seq: self.save_seq, request })
    }

    /// Apply a save response. Returns `false` if it was stale.
    ///
    /// The phase only moves if no new generation has started meanwhile.
    pub fn finish_save(&mut self, seq: u64, result: Result<(), ApiError>) -> bool {
        if seq != self.save_seq {
            return false;
        }
        if self.is_saving() {
            self.phase = if result.is_ok() { ComposerPhase::Saved } else { ComposerPhase::SaveFailed };
        }
        true
    }
}
