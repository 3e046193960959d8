//! Normalized external content records.
//!
//! These are the validated shapes the matcher and enrichment services work
//! with. Raw wire objects are converted into them at the service boundary
//! (see `showroom-content`), so every access site here can trust the fields.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Size label requested when resolving a display URL for a [`MediaRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSize {
    Thumbnail,
    Medium,
    MediumLarge,
    Large,
    Full,
    /// Theme-registered size, e.g. `"post-thumbnail"`.
    Custom(String),
}

impl ImageSize {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ImageSize::Thumbnail => "thumbnail",
            ImageSize::Medium => "medium",
            ImageSize::MediumLarge => "medium_large",
            ImageSize::Large => "large",
            ImageSize::Full => "full",
            ImageSize::Custom(label) => label,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An image from a remote media collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: i64,
    /// Free-text title the matcher searches.
    pub title: String,
    pub mime_type: String,
    /// Originally uploaded file. Final fallback for URL resolution.
    pub source_url: String,
    /// Size label → sized variant URL. Never contains empty URLs.
    #[serde(default)]
    pub sizes: BTreeMap<String, String>,
}

impl MediaRecord {
    /// Synthetic single-image record wrapping an item's card image, used when
    /// a gallery has nothing better to show.
    #[must_use]
    pub fn fallback(item_name: &str, image_url: &str) -> Self {
        Self {
            id: 0,
            title: item_name.to_string(),
            mime_type: "image/jpeg".to_string(),
            source_url: image_url.to_string(),
            sizes: BTreeMap::new(),
        }
    }

    /// Resolves the display URL for `size`.
    ///
    /// Precedence: the exact `size` variant, then the `full` variant, then
    /// the bare `source_url`.
    #[must_use]
    pub fn resolve_url(&self, size: &ImageSize) -> &str {
        resolve_url(self, size)
    }
}

/// Resolves the display URL of `record` for `size`. See
/// [`MediaRecord::resolve_url`].
#[must_use]
pub fn resolve_url<'a>(record: &'a MediaRecord, size: &ImageSize) -> &'a str {
    let sized = move |label: &str| {
        record
            .sizes
            .get(label)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    };

    sized(size.label())
        .or_else(|| sized(ImageSize::Full.label()))
        .unwrap_or(record.source_url.as_str())
}

/// A blog post from a remote article collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: i64,
    pub title: String,
    /// Rendered HTML body.
    pub content: String,
    /// Permalink of the post.
    pub source_url: String,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
}
