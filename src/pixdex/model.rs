use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which hosted operation produced a record.
///
/// The set is closed: tool collaborators hand us loosely-typed strings, and
/// anything outside this set is rejected at the boundary (CLI parse, stored
/// blob decode) instead of being carried along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageKind {
    Generated,
    Unblurred,
    Upscaled,
    BackgroundRemoved,
    Batch,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Generated => "generated",
            ImageKind::Unblurred => "unblurred",
            ImageKind::Upscaled => "upscaled",
            ImageKind::BackgroundRemoved => "background-removed",
            ImageKind::Batch => "batch",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generated" => Ok(ImageKind::Generated),
            "unblurred" => Ok(ImageKind::Unblurred),
            "upscaled" => Ok(ImageKind::Upscaled),
            "background-removed" => Ok(ImageKind::BackgroundRemoved),
            "batch" => Ok(ImageKind::Batch),
            other => Err(format!("Unknown image kind: {}", other)),
        }
    }
}

/// One entry in the gallery.
///
/// Records arrive pre-formed from the tool collaborators (or the CLI `add`
/// command); the gallery never fabricates them. `id` is an opaque
/// caller-assigned string and `created_at` never changes after insertion.
/// The image asset itself lives with the external object store; `url` is a
/// reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub kind: ImageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl ImageRecord {
    pub fn new(id: String, url: String, prompt: String, kind: ImageKind) -> Self {
        Self {
            id,
            url,
            prompt,
            kind,
            filename: None,
            created_at: Utc::now(),
            is_favorite: false,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Label used in listings and export entry names.
    pub fn display_name(&self) -> &str {
        match &self.filename {
            Some(name) if !name.is_empty() => name,
            _ => &self.prompt,
        }
    }
}
