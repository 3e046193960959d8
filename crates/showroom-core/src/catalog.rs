use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::records::{ArticleRecord, MediaRecord};
use crate::ConfigError;

/// Shown until a card image is matched from the media source.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/default-car-placeholder/400/225";

fn default_image_url() -> String {
    PLACEHOLDER_IMAGE_URL.to_string()
}

/// Article text attached to a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub html_body: String,
    pub source_url: String,
}

impl From<&ArticleRecord> for ArticleContent {
    fn from(article: &ArticleRecord) -> Self {
        Self {
            title: article.title.clone(),
            html_body: article.content.clone(),
            source_url: article.source_url.clone(),
        }
    }
}

/// One vehicle listing.
///
/// `id` and the presentation fields come from the catalog file and never
/// change. The enrichment fields (`image_url`, `gallery_images`,
/// `article_content`, `ai_description`) are filled in after start-up and may
/// be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default)]
    pub price_estimate: String,
    #[serde(default)]
    pub engine_specs: Option<String>,
    #[serde(default)]
    pub fuel_economy: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    /// Instruction handed to the AI description service.
    pub base_prompt: String,
    #[serde(default)]
    pub gallery_images: Vec<MediaRecord>,
    #[serde(default)]
    pub article_content: Option<ArticleContent>,
    #[serde(default)]
    pub ai_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<CatalogItem>,
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog_named(&content, &path.display().to_string())
}

/// Parse and validate a catalog from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_catalog(yaml: &str) -> Result<Vec<CatalogItem>, ConfigError> {
    parse_catalog_named(yaml, "<inline catalog>")
}

fn parse_catalog_named(yaml: &str, name: &str) -> Result<Vec<CatalogItem>, ConfigError> {
    let file: CatalogFile = serde_yaml::from_str(yaml).map_err(|e| ConfigError::FileParse {
        path: name.to_string(),
        source: e,
    })?;

    validate_catalog(&file.items)?;

    Ok(file.items)
}

fn validate_catalog(items: &[CatalogItem]) -> Result<(), ConfigError> {
    if items.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must contain at least one item".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for item in items {
        if item.id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty id",
                item.name
            )));
        }

        if item.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty name",
                item.id
            )));
        }

        if item.base_prompt.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty base_prompt",
                item.id
            )));
        }

        if item.image_url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "item '{}' has an empty image_url; omit the field to use the placeholder",
                item.id
            )));
        }

        if !seen_ids.insert(item.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate item id: '{}'",
                item.id
            )));
        }
    }

    Ok(())
}
