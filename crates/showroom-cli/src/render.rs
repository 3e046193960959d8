//! Plain-text rendering of cards and detail views.

use std::sync::LazyLock;

use regex::Regex;
use showroom_content::DetailView;
use showroom_core::{CatalogItem, ImageSize};

/// Features shown on a card before the "more" marker.
const CARD_FEATURES: usize = 3;

pub(crate) const AI_KEY_BANNER: &str =
    "Perhatian: Fitur deskripsi AI mungkin tidak berfungsi karena API Key belum dikonfigurasi.";

const DEGRADED_DATA_NOTE: &str =
    "Beberapa gambar atau informasi tambahan mungkin tidak tersedia. Menggunakan data placeholder.";

static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|tr)>").expect("valid regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").expect("valid regex"));

/// Informational banner for load warnings, or `None` when there are none.
pub(crate) fn warning_banner(warnings: &[String]) -> Option<String> {
    if warnings.is_empty() {
        return None;
    }
    Some(format!(
        "Informasi: {}\n{DEGRADED_DATA_NOTE}",
        warnings.join(" ")
    ))
}

/// Machine-readable catalog with the load warnings, so consumers can tell
/// placeholder data from enriched data.
pub(crate) fn catalog_json(catalog: &[CatalogItem], warnings: &[String]) -> serde_json::Value {
    serde_json::json!({
        "catalog": catalog,
        "warnings": warnings,
    })
}

/// One catalog card.
pub(crate) fn card(item: &CatalogItem, contact_link: &str) -> String {
    let mut lines = vec![format!("== {} ==", item.name)];
    push_non_empty(&mut lines, &item.tagline);
    push_non_empty(&mut lines, &item.price_estimate);
    lines.push(format!("Gambar: {}", item.image_url));

    if !item.key_features.is_empty() {
        lines.push("Fitur Utama:".to_owned());
        lines.extend(
            item.key_features
                .iter()
                .take(CARD_FEATURES)
                .map(|feature| format!("  - {feature}")),
        );
        if item.key_features.len() > CARD_FEATURES {
            lines.push("  ...dan lainnya".to_owned());
        }
    }
    lines.push(format!("WhatsApp: {contact_link}"));
    lines.join("\n")
}

/// Full detail view of `item` in its current session state.
pub(crate) fn detail(item: &CatalogItem, view: &DetailView) -> String {
    let mut lines = vec![format!("==== {} ====", item.name)];
    push_non_empty(&mut lines, &item.tagline);
    push_non_empty(&mut lines, &item.price_estimate);

    lines.push(String::new());
    lines.push("Galeri:".to_owned());
    if let Some(gallery) = &view.gallery {
        for (idx, image) in gallery.images.iter().enumerate() {
            lines.push(format!(
                "  {}. {} (thumbnail: {})",
                idx + 1,
                image.resolve_url(&ImageSize::Large),
                image.resolve_url(&ImageSize::Thumbnail)
            ));
        }
        if let Some(reason) = gallery.fallback {
            lines.push(format!("  {}", reason.notice(&item.name)));
        }
    } else {
        lines.push(format!("  {}", item.image_url));
    }

    lines.push(String::new());
    if let Some(engine) = &item.engine_specs {
        lines.push(format!("Mesin: {engine}"));
    }
    if let Some(fuel) = &item.fuel_economy {
        lines.push(format!("Konsumsi BBM: {fuel}"));
    }
    if !item.key_features.is_empty() {
        lines.push("Fitur Utama:".to_owned());
        lines.extend(item.key_features.iter().map(|feature| format!("  - {feature}")));
    }

    lines.push(String::new());
    lines.push("Deskripsi Model (AI):".to_owned());
    lines.push(match (&view.description_error, &item.ai_description) {
        (Some(error), _) => format!("Oops! {error}"),
        (None, Some(description)) => description.clone(),
        (None, None) => "Deskripsi AI untuk model ini belum tersedia atau sedang dimuat.".to_owned(),
    });

    if let Some(article) = &item.article_content {
        lines.push(String::new());
        lines.push(format!("Informasi Tambahan: {}", article.title));
        lines.push(html_to_text(&article.html_body));
        if !article.source_url.is_empty() {
            lines.push(format!("Sumber: {}", article.source_url));
        }
    }
    lines.join("\n")
}

fn push_non_empty(lines: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        lines.push(value.to_owned());
    }
}

/// Rendered post HTML to readable text: block ends become line breaks,
/// remaining tags are dropped, common entities decoded.
pub(crate) fn html_to_text(html: &str) -> String {
    let with_breaks = BLOCK_BREAK.replace_all(html, "\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);
    let collapsed = BLANK_LINES.replace_all(&decoded, "\n\n");
    collapsed
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&nbsp;", " ")
        .replace("&#8211;", "-")
        .replace("&#8217;", "'")
        .replace("&#8220;", "\"")
        .replace("&#8221;", "\"")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
