//! Concurrent card/article enrichment and the per-field catalog merge.

use std::collections::HashMap;

use showroom_core::{AppConfig, CatalogItem, KeywordResolver};

use crate::client::ContentClient;
use crate::error::ContentError;

/// Banner text when the card image source could not be loaded.
pub const CARD_IMAGES_WARNING: &str = "Gagal memuat gambar mobil.";

/// Banner text when the article source could not be loaded.
pub const ARTICLES_WARNING: &str = "Gagal memuat info tambahan.";

/// Endpoints and page sizes of the three content sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSources {
    pub card_media_url: String,
    pub gallery_media_url: String,
    pub posts_url: String,
    pub media_page_size: u32,
    pub posts_page_size: u32,
}

impl ContentSources {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            card_media_url: config.card_media_url.clone(),
            gallery_media_url: config.gallery_media_url.clone(),
            posts_url: config.posts_url.clone(),
            media_page_size: config.media_page_size,
            posts_page_size: config.posts_page_size,
        }
    }
}

/// Outcome of one enrichment path.
///
/// A failed fetch still yields a full catalog (the base, untouched) plus the
/// warning to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub catalog: Vec<CatalogItem>,
    pub warning: Option<String>,
}

impl Enrichment {
    pub(crate) fn enriched(catalog: Vec<CatalogItem>) -> Self {
        Self {
            catalog,
            warning: None,
        }
    }

    pub(crate) fn unchanged(base: &[CatalogItem], warning: &str) -> Self {
        Self {
            catalog: base.to_vec(),
            warning: Some(warning.to_owned()),
        }
    }
}

/// Merged catalog plus the warnings collected while loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    pub catalog: Vec<CatalogItem>,
    pub warnings: Vec<String>,
}

impl LoadedCatalog {
    /// All warnings joined into one informational line, or `None` when the
    /// load was clean.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        if self.warnings.is_empty() {
            None
        } else {
            Some(self.warnings.join(" "))
        }
    }
}

/// Enrichment services over one HTTP client and keyword resolver.
pub struct ContentService {
    pub(crate) client: ContentClient,
    pub(crate) resolver: KeywordResolver,
    pub(crate) sources: ContentSources,
}

impl ContentService {
    #[must_use]
    pub fn new(client: ContentClient, resolver: KeywordResolver, sources: ContentSources) -> Self {
        Self {
            client,
            resolver,
            sources,
        }
    }

    /// Builds the service from application config.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the HTTP client cannot be built.
    pub fn from_app_config(
        config: &AppConfig,
        resolver: KeywordResolver,
    ) -> Result<Self, ContentError> {
        let client = ContentClient::new(config.request_timeout_secs, &config.user_agent)?;
        Ok(Self::new(
            client,
            resolver,
            ContentSources::from_app_config(config),
        ))
    }

    /// Runs card and article enrichment concurrently against `base` and
    /// merges the results over `current`.
    ///
    /// `current` is the in-memory catalog being replaced; values only it
    /// holds (AI descriptions, fetched galleries) survive the merge. Never
    /// fails: a failed path contributes the base values and one warning.
    pub async fn load_enriched_catalog(
        &self,
        base: &[CatalogItem],
        current: &[CatalogItem],
    ) -> LoadedCatalog {
        let (cards, articles) = tokio::join!(self.enrich_cards(base), self.enrich_articles(base));

        let warnings: Vec<String> = [cards.warning, articles.warning]
            .into_iter()
            .flatten()
            .collect();
        let catalog = merge_catalog(base, current, &cards.catalog, &articles.catalog);

        tracing::info!(
            items = catalog.len(),
            warnings = warnings.len(),
            "catalog enrichment complete"
        );
        LoadedCatalog { catalog, warnings }
    }
}

/// Merges the enrichment paths per item, keyed by `id`.
///
/// For every item of `base`, in base order:
/// - `image_url` comes from `cards`
/// - `article_content` comes from `articles`
/// - `ai_description` and `gallery_images` come from `current`
///
/// An id missing from any source falls back to the base item's own value
/// for that field. Argument order of `cards` and `articles` is the only
/// thing that decides precedence; arrival order does not matter.
#[must_use]
pub fn merge_catalog(
    base: &[CatalogItem],
    current: &[CatalogItem],
    cards: &[CatalogItem],
    articles: &[CatalogItem],
) -> Vec<CatalogItem> {
    let cards = index_by_id(cards);
    let articles = index_by_id(articles);
    let current = index_by_id(current);

    base.iter()
        .map(|item| {
            let mut merged = item.clone();
            if let Some(card) = cards.get(item.id.as_str()) {
                merged.image_url.clone_from(&card.image_url);
            }
            if let Some(article) = articles.get(item.id.as_str()) {
                merged.article_content.clone_from(&article.article_content);
            }
            if let Some(existing) = current.get(item.id.as_str()) {
                if existing.ai_description.is_some() {
                    merged.ai_description.clone_from(&existing.ai_description);
                }
                if !existing.gallery_images.is_empty() {
                    merged.gallery_images.clone_from(&existing.gallery_images);
                }
            }
            merged
        })
        .collect()
}

fn index_by_id(items: &[CatalogItem]) -> HashMap<&str, &CatalogItem> {
    items.iter().map(|item| (item.id.as_str(), item)).collect()
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
