//! HTTP client for `wp/v2` media and post collections.

mod collection;

use std::time::Duration;

use reqwest::Client;
use showroom_core::{ArticleRecord, MediaRecord};

use crate::error::ContentError;
use crate::normalize::{normalize_media, normalize_post};
use crate::types::{WpMediaItem, WpPost};

/// Fields requested from the posts endpoint. Keeps responses small; the
/// embedded author/term blobs are never used.
pub(super) const POST_FIELDS: &str = "id,date,link,title,content";

/// HTTP client for the content sources.
///
/// Each fetch is a single page request. Any non-2xx status or an
/// unparseable body fails the whole fetch; individual records that do not
/// deserialize or normalize are skipped.
pub struct ContentClient {
    pub(super) client: Client,
}

impl ContentClient {
    /// Creates a `ContentClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches up to `per_page` image records from a media collection.
    ///
    /// # Errors
    ///
    /// - [`ContentError::InvalidUrl`] if `media_url` cannot be parsed.
    /// - [`ContentError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ContentError::Http`] on network or TLS failure.
    /// - [`ContentError::Deserialize`] if the body is not a JSON array.
    pub async fn fetch_media(
        &self,
        media_url: &str,
        per_page: u32,
    ) -> Result<Vec<MediaRecord>, ContentError> {
        let url = Self::media_url(media_url, per_page)?;
        let items: Vec<WpMediaItem> = self.fetch_collection(&url, "media").await?;
        let fetched = items.len();
        let records: Vec<MediaRecord> = items.into_iter().filter_map(normalize_media).collect();

        tracing::debug!(
            url = %url,
            fetched,
            kept = records.len(),
            "fetched media collection"
        );
        Ok(records)
    }

    /// Fetches up to `per_page` posts, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_media`].
    pub async fn fetch_articles(
        &self,
        posts_url: &str,
        per_page: u32,
    ) -> Result<Vec<ArticleRecord>, ContentError> {
        let url = Self::posts_url(posts_url, per_page)?;
        let posts: Vec<WpPost> = self.fetch_collection(&url, "posts").await?;
        let fetched = posts.len();
        let records: Vec<ArticleRecord> = posts.into_iter().filter_map(normalize_post).collect();

        tracing::debug!(
            url = %url,
            fetched,
            kept = records.len(),
            "fetched post collection"
        );
        Ok(records)
    }

    /// Builds the media collection URL with the page size.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidUrl`] if `media_url` is not absolute.
    fn media_url(media_url: &str, per_page: u32) -> Result<String, ContentError> {
        let mut url = parse_source_url(media_url)?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());
        Ok(url.to_string())
    }

    /// Builds the post collection URL: page size, newest first, and the
    /// trimmed field list.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidUrl`] if `posts_url` is not absolute.
    fn posts_url(posts_url: &str, per_page: u32) -> Result<String, ContentError> {
        let mut url = parse_source_url(posts_url)?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("orderby", "date")
            .append_pair("order", "desc")
            .append_pair("_fields", POST_FIELDS);
        Ok(url.to_string())
    }
}

fn parse_source_url(raw: &str) -> Result<reqwest::Url, ContentError> {
    let url = reqwest::Url::parse(raw.trim()).map_err(|e| ContentError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ContentError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
