//! Conversion from raw `wp/v2` types to [`MediaRecord`] / [`ArticleRecord`].
//!
//! Records that cannot be used are dropped here (`None`) rather than
//! reported as errors: non-image attachments, images without any URL, and
//! posts missing a title or body.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use showroom_core::{ArticleRecord, ImageSize, MediaRecord};

use crate::types::{WpMediaItem, WpPost};

const WP_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Normalizes a raw media attachment into a [`MediaRecord`].
///
/// Returns `None` for non-image attachments and for images with neither a
/// `source_url` nor any sized variant URL. When `source_url` is missing it
/// is backfilled from the `full` variant (or any variant).
#[must_use]
pub fn normalize_media(item: WpMediaItem) -> Option<MediaRecord> {
    let mime_type = item.mime_type.unwrap_or_default();
    if !mime_type.starts_with("image/") {
        return None;
    }

    let sizes: BTreeMap<String, String> = item
        .media_details
        .map(|details| details.sizes)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(label, size)| {
            size.source_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .map(|url| (label, url))
        })
        .collect();

    let source_url = non_blank(item.source_url)
        .or_else(|| sizes.get(ImageSize::Full.label()).cloned())
        .or_else(|| sizes.values().next().cloned())?;

    Some(MediaRecord {
        id: item.id,
        title: item.title.map(|t| t.rendered).unwrap_or_default(),
        mime_type,
        source_url,
        sizes,
    })
}

/// Normalizes a raw post into an [`ArticleRecord`].
///
/// Returns `None` when the rendered title or content is blank, or the
/// content is password-protected.
#[must_use]
pub fn normalize_post(post: WpPost) -> Option<ArticleRecord> {
    let title = non_blank(post.title.map(|t| t.rendered))?;

    let content = post
        .content
        .filter(|c| !c.protected)
        .map(|c| c.rendered)
        .and_then(|c| non_blank(Some(c)))?;

    let date = post
        .date
        .as_deref()
        .and_then(|d| NaiveDateTime::parse_from_str(d, WP_DATE_FORMAT).ok());

    Some(ArticleRecord {
        id: post.id,
        title,
        content,
        source_url: post.link.unwrap_or_default(),
        date,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
