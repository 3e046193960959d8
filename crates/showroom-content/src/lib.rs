//! Content enrichment for the showroom catalog.
//!
//! Pulls media and post collections from `wp/v2` REST endpoints, matches
//! them to catalog items by keyword, and merges the independent enrichment
//! paths into one catalog without letting a failed source clobber the
//! others.

pub mod articles;
pub mod client;
pub mod error;
pub mod media;
pub mod normalize;
pub mod orchestrator;
pub mod session;
pub mod types;

pub use articles::map_articles;
pub use client::ContentClient;
pub use error::ContentError;
pub use media::{collect_gallery, map_card_images, GalleryFallback, GalleryResult, MAX_GALLERY_IMAGES};
pub use normalize::{normalize_media, normalize_post};
pub use orchestrator::{
    merge_catalog, ContentService, ContentSources, Enrichment, LoadedCatalog, ARTICLES_WARNING,
    CARD_IMAGES_WARNING,
};
pub use session::{DetailView, Showroom};
