//! Catalog state for one browsing session.
//!
//! Detail-view fetches (gallery, AI description) are keyed by item id and
//! may complete after the visitor has moved on. Results whose id is not the
//! active selection are dropped instead of cancelled.

use showroom_core::CatalogItem;

use crate::media::GalleryResult;
use crate::orchestrator::{ContentService, LoadedCatalog};

/// The open detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub item_id: String,
    /// `None` until the gallery fetch lands.
    pub gallery: Option<GalleryResult>,
    pub description_error: Option<String>,
}

impl DetailView {
    fn new(item_id: &str) -> Self {
        Self {
            item_id: item_id.to_owned(),
            gallery: None,
            description_error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Showroom {
    base: Vec<CatalogItem>,
    catalog: Vec<CatalogItem>,
    warnings: Vec<String>,
    active: Option<DetailView>,
}

impl Showroom {
    /// Starts a session showing `base` as-is (placeholders, no enrichment).
    #[must_use]
    pub fn new(base: Vec<CatalogItem>) -> Self {
        Self {
            catalog: base.clone(),
            base,
            warnings: Vec::new(),
            active: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| item.id == item_id)
    }

    /// Replaces the catalog and warnings with a finished load.
    pub fn apply_loaded(&mut self, loaded: LoadedCatalog) {
        self.catalog = loaded.catalog;
        self.warnings = loaded.warnings;
    }

    /// Re-runs catalog enrichment from the base catalog, merging over the
    /// current one.
    pub async fn refresh(&mut self, service: &ContentService) {
        let loaded = service
            .load_enriched_catalog(&self.base, &self.catalog)
            .await;
        self.apply_loaded(loaded);
    }

    /// Opens the detail view for `item_id`, replacing any open view.
    ///
    /// Returns the item, or `None` (and leaves the selection unchanged) if
    /// the id is not in the catalog.
    pub fn open(&mut self, item_id: &str) -> Option<&CatalogItem> {
        let idx = self.catalog.iter().position(|item| item.id == item_id)?;
        self.active = Some(DetailView::new(item_id));
        Some(&self.catalog[idx])
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active(&self) -> Option<&DetailView> {
        self.active.as_ref()
    }

    /// Applies a finished gallery fetch. Returns `false` (and changes
    /// nothing) if the result belongs to an item that is no longer open.
    pub fn apply_gallery(&mut self, result: GalleryResult) -> bool {
        let Some(view) = self.active_view_for(&result.item_id) else {
            tracing::debug!(item = %result.item_id, "discarding stale gallery result");
            return false;
        };

        let images = result.images.clone();
        let item_id = result.item_id.clone();
        view.gallery = Some(result);
        if let Some(item) = self.catalog.iter_mut().find(|item| item.id == item_id) {
            item.gallery_images = images;
        }
        true
    }

    /// Stores a generated description on the item, open or not, so later
    /// merges keep it. Clears any shown error for the open view.
    pub fn record_description(&mut self, item_id: &str, description: String) {
        if let Some(view) = self.active_view_for(item_id) {
            view.description_error = None;
        }
        if let Some(item) = self.catalog.iter_mut().find(|item| item.id == item_id) {
            item.ai_description = Some(description);
        } else {
            tracing::debug!(item = %item_id, "description for unknown item");
        }
    }

    /// Shows a description failure in the open view. Returns `false` if
    /// `item_id` is not the open item.
    pub fn record_description_failure(&mut self, item_id: &str, message: String) -> bool {
        let Some(view) = self.active_view_for(item_id) else {
            tracing::debug!(item = %item_id, "discarding stale description failure");
            return false;
        };
        view.description_error = Some(message);
        true
    }

    fn active_view_for(&mut self, item_id: &str) -> Option<&mut DetailView> {
        self.active
            .as_mut()
            .filter(|view| view.item_id == item_id)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
