//! Wire types exchanged with the post-generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field names follow the backend's JSON schema verbatim (`tone_style` on
//! requests, `style` on saved records).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target social network for a generated post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::LinkedIn, Self::Facebook, Self::Twitter];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writing style requested from the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Humorous,
    Formal,
    Inspirational,
}

impl Tone {
    pub const ALL: [Self; 6] = [
        Self::Professional,
        Self::Casual,
        Self::Friendly,
        Self::Humorous,
        Self::Formal,
        Self::Inspirational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Friendly => "friendly",
            Self::Humorous => "humorous",
            Self::Formal => "formal",
            Self::Inspirational => "inspirational",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Casual => "Casual",
            Self::Friendly => "Friendly",
            Self::Humorous => "Humorous",
            Self::Formal => "Formal",
            Self::Inspirational => "Inspirational",
        }
    }
}

impl FromStr for Tone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /generate_post/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub platform: Platform,
    pub tone_style: Tone,
    pub content: String,
}

/// Response of `POST /generate_post/`.
#[derive(Clone, Debug, Deserialize)]
pub struct GenerateResponse {
    pub post: String,
}

/// Body of `POST /generate_post/save`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SaveRequest {
    pub platform: Platform,
    pub tone_style: Tone,
    pub content: String,
    pub generated_post: String,
}

/// A post persisted by the backend. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPost {
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub generated_post: String,
    pub platform: String,
    pub style: String,
}

/// Envelope returned by `GET /home/`.
#[derive(Clone, Debug, Deserialize)]
pub struct SavedPostList {
    #[serde(default)]
    pub result: Vec<SavedPost>,
}

/// Username/password pair for login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}
