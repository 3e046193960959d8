//! Card image and gallery enrichment from the media sources.

use std::collections::HashSet;

use showroom_core::{
    find_all_matches, find_best_match, CatalogItem, ImageSize, KeywordResolver, KeywordSet,
    MediaRecord,
};

use crate::orchestrator::{ContentService, Enrichment, CARD_IMAGES_WARNING};

/// Most images a gallery shows.
pub const MAX_GALLERY_IMAGES: usize = 10;

/// Why a gallery shows only the item's card image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryFallback {
    /// The gallery source had no image for the item.
    NoMatches,
    /// The gallery source could not be fetched.
    FetchFailed,
}

impl GalleryFallback {
    /// Note shown under the gallery.
    #[must_use]
    pub fn notice(self, item_name: &str) -> String {
        match self {
            GalleryFallback::NoMatches => {
                "Tidak ada gambar galeri tambahan, menampilkan gambar utama.".to_owned()
            }
            GalleryFallback::FetchFailed => format!("Gagal memuat galeri untuk {item_name}."),
        }
    }
}

/// Gallery for one catalog item. `images` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryResult {
    pub item_id: String,
    pub images: Vec<MediaRecord>,
    pub fallback: Option<GalleryFallback>,
}

impl GalleryResult {
    /// Single-image gallery wrapping the item's current card image.
    #[must_use]
    pub fn fallback(item: &CatalogItem, reason: GalleryFallback) -> Self {
        Self {
            item_id: item.id.clone(),
            images: vec![MediaRecord::fallback(&item.name, &item.image_url)],
            fallback: Some(reason),
        }
    }
}

/// Sets each item's `image_url` to the large variant of its best-matching
/// image. Items without a match keep their current URL.
#[must_use]
pub fn map_card_images(
    resolver: &KeywordResolver,
    catalog: &[CatalogItem],
    media: &[MediaRecord],
) -> Vec<CatalogItem> {
    catalog
        .iter()
        .map(|item| {
            let keywords = resolver.resolve(&item.name);
            let mut item = item.clone();
            if let Some(record) = find_best_match(&keywords, media, |m| m.title.as_str()) {
                let url = record.resolve_url(&ImageSize::Large);
                tracing::debug!(
                    item = %item.id,
                    media_id = record.id,
                    url,
                    "matched card image"
                );
                url.clone_into(&mut item.image_url);
            } else {
                tracing::debug!(item = %item.id, keyword = keywords.primary(), "no card image match");
            }
            item
        })
        .collect()
}

/// Collects up to [`MAX_GALLERY_IMAGES`] images matching `keywords`.
///
/// Records are taken in match order. Distinct records whose full-size URL is
/// the same file are kept once (the first one).
#[must_use]
pub fn collect_gallery(keywords: &KeywordSet, media: &[MediaRecord]) -> Vec<MediaRecord> {
    let matches = find_all_matches(keywords, media, |m| m.title.as_str(), |m| m.id);
    let mut seen_urls: HashSet<&str> = HashSet::new();

    matches
        .into_iter()
        .filter(|record| seen_urls.insert(record.resolve_url(&ImageSize::Full)))
        .take(MAX_GALLERY_IMAGES)
        .cloned()
        .collect()
}

impl ContentService {
    /// Fetches the card media source and matches one image per item.
    ///
    /// On fetch failure returns `base` unchanged with
    /// [`CARD_IMAGES_WARNING`].
    pub async fn enrich_cards(&self, base: &[CatalogItem]) -> Enrichment {
        let media = match self
            .client
            .fetch_media(&self.sources.card_media_url, self.sources.media_page_size)
            .await
        {
            Ok(media) => media,
            Err(e) => {
                tracing::warn!(
                    source = %self.sources.card_media_url,
                    error = %e,
                    "card image fetch failed; keeping placeholders"
                );
                return Enrichment::unchanged(base, CARD_IMAGES_WARNING);
            }
        };

        tracing::info!(images = media.len(), "card media loaded");
        Enrichment::enriched(map_card_images(&self.resolver, base, &media))
    }

    /// Fetches the gallery media source and collects images for `item`.
    ///
    /// Falls back to a single record wrapping `item.image_url` when the
    /// fetch fails or nothing matches.
    pub async fn enrich_gallery(&self, item: &CatalogItem) -> GalleryResult {
        let media = match self
            .client
            .fetch_media(&self.sources.gallery_media_url, self.sources.media_page_size)
            .await
        {
            Ok(media) => media,
            Err(e) => {
                tracing::warn!(
                    item = %item.id,
                    source = %self.sources.gallery_media_url,
                    error = %e,
                    "gallery fetch failed; showing card image"
                );
                return GalleryResult::fallback(item, GalleryFallback::FetchFailed);
            }
        };

        let keywords = self.resolver.resolve(&item.name);
        let images = collect_gallery(&keywords, &media);
        tracing::debug!(item = %item.id, images = images.len(), "gallery collected");

        if images.is_empty() {
            return GalleryResult::fallback(item, GalleryFallback::NoMatches);
        }
        GalleryResult {
            item_id: item.id.clone(),
            images,
            fallback: None,
        }
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
