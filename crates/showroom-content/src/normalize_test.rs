use std::collections::HashMap;

use super::*;
use crate::types::{Rendered, RenderedContent, WpImageSize, WpMediaDetails};

// -----------------------------------------------------------------------
// normalize_media
// -----------------------------------------------------------------------

fn make_size(url: Option<&str>) -> WpImageSize {
    WpImageSize {
        source_url: url.map(str::to_owned),
    }
}

fn make_media(mime: &str, source_url: Option<&str>, sizes: &[(&str, Option<&str>)]) -> WpMediaItem {
    let sizes: HashMap<String, WpImageSize> = sizes
        .iter()
        .map(|(label, url)| ((*label).to_owned(), make_size(*url)))
        .collect();
    WpMediaItem {
        id: 42,
        title: Some(Rendered {
            rendered: "Brio RS Promo Photo".to_owned(),
        }),
        mime_type: Some(mime.to_owned()),
        source_url: source_url.map(str::to_owned),
        media_details: Some(WpMediaDetails {
            sizes,
        }),
    }
}

#[test]
fn normalize_media_keeps_title_and_sizes() {
    let item = make_media(
        "image/jpeg",
        Some("https://cdn.example/brio.jpg"),
        &[
            ("large", Some("https://cdn.example/brio-1024.jpg")),
            ("thumbnail", Some("https://cdn.example/brio-150.jpg")),
        ],
    );
    let record = normalize_media(item).unwrap();
    assert_eq!(record.id, 42);
    assert_eq!(record.title, "Brio RS Promo Photo");
    assert_eq!(record.source_url, "https://cdn.example/brio.jpg");
    assert_eq!(record.sizes.len(), 2);
    assert_eq!(
        record.sizes.get("large").map(String::as_str),
        Some("https://cdn.example/brio-1024.jpg")
    );
}

#[test]
fn normalize_media_drops_non_images() {
    let item = make_media("application/pdf", Some("https://cdn.example/brochure.pdf"), &[]);
    assert!(normalize_media(item).is_none());
}

#[test]
fn normalize_media_drops_missing_mime_type() {
    let mut item = make_media("image/png", Some("https://cdn.example/a.png"), &[]);
    item.mime_type = None;
    assert!(normalize_media(item).is_none());
}

#[test]
fn normalize_media_discards_empty_size_urls() {
    let item = make_media(
        "image/jpeg",
        Some("https://cdn.example/brio.jpg"),
        &[("large", Some("")), ("medium", None), ("full", Some("  "))],
    );
    let record = normalize_media(item).unwrap();
    assert!(record.sizes.is_empty());
}

#[test]
fn normalize_media_backfills_source_url_from_full_size() {
    let item = make_media(
        "image/jpeg",
        None,
        &[
            ("full", Some("https://cdn.example/full.jpg")),
            ("large", Some("https://cdn.example/large.jpg")),
        ],
    );
    let record = normalize_media(item).unwrap();
    assert_eq!(record.source_url, "https://cdn.example/full.jpg");
}

#[test]
fn normalize_media_backfills_source_url_from_any_size() {
    let item = make_media(
        "image/webp",
        Some(""),
        &[("medium", Some("https://cdn.example/medium.webp"))],
    );
    let record = normalize_media(item).unwrap();
    assert_eq!(record.source_url, "https://cdn.example/medium.webp");
}

#[test]
fn normalize_media_drops_images_without_any_url() {
    let item = make_media("image/jpeg", None, &[("large", Some(""))]);
    assert!(normalize_media(item).is_none());
}

#[test]
fn normalize_media_tolerates_missing_details_and_title() {
    let mut item = make_media("image/jpeg", Some("https://cdn.example/x.jpg"), &[]);
    item.media_details = None;
    item.title = None;
    let record = normalize_media(item).unwrap();
    assert_eq!(record.title, "");
    assert!(record.sizes.is_empty());
}

// -----------------------------------------------------------------------
// normalize_post
// -----------------------------------------------------------------------

fn make_post(title: &str, content: &str, protected: bool) -> WpPost {
    WpPost {
        id: 901,
        date: Some("2025-05-20T08:30:00".to_owned()),
        link: Some("https://blog.example/promo-brio-rs/".to_owned()),
        title: Some(Rendered {
            rendered: title.to_owned(),
        }),
        content: Some(RenderedContent {
            rendered: content.to_owned(),
            protected,
        }),
    }
}

#[test]
fn normalize_post_maps_fields() {
    let post = make_post("Promo Brio RS Juni", "<p>Diskon spesial.</p>", false);
    let record = normalize_post(post).unwrap();
    assert_eq!(record.id, 901);
    assert_eq!(record.title, "Promo Brio RS Juni");
    assert_eq!(record.content, "<p>Diskon spesial.</p>");
    assert_eq!(record.source_url, "https://blog.example/promo-brio-rs/");
    assert_eq!(
        record.date.as_ref().map(ToString::to_string).as_deref(),
        Some("2025-05-20 08:30:00")
    );
}

#[test]
fn normalize_post_drops_blank_title() {
    assert!(normalize_post(make_post("  ", "<p>Body</p>", false)).is_none());
}

#[test]
fn normalize_post_drops_blank_content() {
    assert!(normalize_post(make_post("Promo", "", false)).is_none());
}

#[test]
fn normalize_post_drops_protected_content() {
    assert!(normalize_post(make_post("Promo", "<p>secret</p>", true)).is_none());
}

#[test]
fn normalize_post_tolerates_missing_link_and_bad_date() {
    let mut post = make_post("Promo", "<p>Body</p>", false);
    post.link = None;
    post.date = Some("kemarin".to_owned());
    let record = normalize_post(post).unwrap();
    assert_eq!(record.source_url, "");
    assert!(record.date.is_none());
}

#[test]
fn wire_types_ignore_unread_fields() {
    let item: WpMediaItem = serde_json::from_value(serde_json::json!({
        "id": 7,
        "slug": "brio-rs",
        "caption": { "rendered": "<p>Brio</p>" },
        "alt_text": "Brio RS",
        "title": { "rendered": "Brio RS" },
        "mime_type": "image/png",
        "source_url": "https://cdn.example/brio.png",
        "media_details": {
            "width": 800,
            "file": "2025/06/brio.png",
            "sizes": {
                "large": { "file": "brio-1024.png", "width": 1024, "source_url": "https://cdn.example/brio-1024.png" }
            }
        }
    }))
    .expect("extra fields are ignored");
    let record = normalize_media(item).unwrap();
    assert_eq!(
        record.sizes.get("large").map(String::as_str),
        Some("https://cdn.example/brio-1024.png")
    );
}
