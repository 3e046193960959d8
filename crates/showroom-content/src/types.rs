//! REST response types for `/wp/v2/media` and `/wp/v2/posts`.
//!
//! ## Observed shape
//!
//! ### Rendered fields
//! `title` and `content` are objects with a `rendered` HTML string, never
//! bare strings. Post `content` also carries `protected: true` for
//! password-protected posts, in which case `rendered` is empty.
//!
//! ### `media_details`
//! Only `sizes` is read. It maps a size label (`thumbnail`, `medium`,
//! `medium_large`, `large`, `full`, or anything a theme registers) to an
//! object with its own `source_url`. Some uploads have an empty `sizes` map; non-image
//! attachments may omit `sizes` entirely.
//!
//! ### `date`
//! Site-local naive timestamp, e.g. `"2025-06-01T10:15:00"`. No offset.
//!
//! Fields the enrichment never reads are left out; serde ignores them.
//! Every field except `id` is modelled as optional so that one odd record
//! deserializes instead of failing the whole page; validation happens in
//! `normalize.rs`.

use std::collections::HashMap;

use serde::Deserialize;

/// A `{ "rendered": "..." }` object.
#[derive(Debug, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// A `{ "rendered": "...", "protected": bool }` object.
#[derive(Debug, Default, Deserialize)]
pub struct RenderedContent {
    #[serde(default)]
    pub rendered: String,
    #[serde(default)]
    pub protected: bool,
}

/// A single attachment from `GET /wp/v2/media`.
#[derive(Debug, Deserialize)]
pub struct WpMediaItem {
    pub id: i64,

    /// Free-text title the uploader typed, e.g. `"Brio RS Promo Photo"`.
    #[serde(default)]
    pub title: Option<Rendered>,

    /// `"image/jpeg"`, `"image/png"`, `"application/pdf"`, ...
    #[serde(default)]
    pub mime_type: Option<String>,

    /// The originally uploaded file.
    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub media_details: Option<WpMediaDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WpMediaDetails {
    #[serde(default)]
    pub sizes: HashMap<String, WpImageSize>,
}

/// One generated size variant of an image attachment.
#[derive(Debug, Deserialize)]
pub struct WpImageSize {
    #[serde(default)]
    pub source_url: Option<String>,
}

/// A single post from `GET /wp/v2/posts` (restricted with `_fields`).
#[derive(Debug, Deserialize)]
pub struct WpPost {
    pub id: i64,

    #[serde(default)]
    pub date: Option<String>,

    /// Permalink.
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub title: Option<Rendered>,

    #[serde(default)]
    pub content: Option<RenderedContent>,
}
