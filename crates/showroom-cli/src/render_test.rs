use showroom_content::{GalleryFallback, GalleryResult};
use showroom_core::{ArticleContent, MediaRecord};

use super::*;

fn brio() -> CatalogItem {
    CatalogItem {
        id: "brio-rs".to_owned(),
        name: "Honda Brio RS".to_owned(),
        tagline: "Hatchback sporty untuk anak muda".to_owned(),
        image_url: "https://cdn.example/brio-1024.jpg".to_owned(),
        price_estimate: "Rp 250 Juta-an".to_owned(),
        engine_specs: Some("1.2L i-VTEC".to_owned()),
        fuel_economy: None,
        key_features: vec![
            "Desain sporty".to_owned(),
            "Honda Sensing".to_owned(),
            "Layar sentuh 7 inci".to_owned(),
            "6 airbag".to_owned(),
        ],
        base_prompt: "Tulis deskripsi.".to_owned(),
        gallery_images: Vec::new(),
        article_content: None,
        ai_description: None,
    }
}

fn view(gallery: Option<GalleryResult>, description_error: Option<&str>) -> DetailView {
    DetailView {
        item_id: "brio-rs".to_owned(),
        gallery,
        description_error: description_error.map(str::to_owned),
    }
}

// -----------------------------------------------------------------------
// banners
// -----------------------------------------------------------------------

#[test]
fn no_banner_without_warnings() {
    assert!(warning_banner(&[]).is_none());
}

#[test]
fn banner_lists_warnings_with_placeholder_note() {
    let banner = warning_banner(&["Gagal memuat gambar mobil.".to_owned()]).unwrap();
    assert!(banner.starts_with("Informasi: Gagal memuat gambar mobil.\n"));
    assert!(banner.ends_with(DEGRADED_DATA_NOTE));
}

#[test]
fn catalog_json_carries_warnings() {
    let warnings = vec![
        "Gagal memuat gambar mobil.".to_owned(),
        "Gagal memuat info tambahan.".to_owned(),
    ];
    let value = catalog_json(&[brio()], &warnings);
    assert_eq!(value["catalog"][0]["id"], "brio-rs");
    assert_eq!(value["warnings"][0], "Gagal memuat gambar mobil.");
    assert_eq!(value["warnings"][1], "Gagal memuat info tambahan.");
}

#[test]
fn catalog_json_has_empty_warnings_on_clean_load() {
    let value = catalog_json(&[brio()], &[]);
    assert_eq!(value["warnings"], serde_json::json!([]));
    assert_eq!(value["catalog"].as_array().map(Vec::len), Some(1));
}

// -----------------------------------------------------------------------
// card
// -----------------------------------------------------------------------

#[test]
fn card_shows_first_three_features_and_more_marker() {
    let out = card(&brio(), "https://wa.me/62811?text=x");
    assert!(out.contains("  - Layar sentuh 7 inci"));
    assert!(!out.contains("6 airbag"));
    assert!(out.contains("...dan lainnya"));
    assert!(out.ends_with("WhatsApp: https://wa.me/62811?text=x"));
}

#[test]
fn card_without_extra_features_has_no_more_marker() {
    let mut item = brio();
    item.key_features.truncate(2);
    assert!(!card(&item, "link").contains("dan lainnya"));
}

// -----------------------------------------------------------------------
// detail
// -----------------------------------------------------------------------

#[test]
fn detail_lists_gallery_large_and_thumbnail() {
    let mut image = MediaRecord::fallback("Brio", "https://cdn.example/a.jpg");
    image
        .sizes
        .insert("large".to_owned(), "https://cdn.example/a-1024.jpg".to_owned());
    image
        .sizes
        .insert("thumbnail".to_owned(), "https://cdn.example/a-150.jpg".to_owned());
    let gallery = GalleryResult {
        item_id: "brio-rs".to_owned(),
        images: vec![image],
        fallback: None,
    };

    let out = detail(&brio(), &view(Some(gallery), None));
    assert!(out.contains(
        "  1. https://cdn.example/a-1024.jpg (thumbnail: https://cdn.example/a-150.jpg)"
    ));
    assert!(out.contains("Mesin: 1.2L i-VTEC"));
    assert!(!out.contains("Konsumsi BBM"));
    assert!(out.contains("  - 6 airbag"));
}

#[test]
fn detail_explains_gallery_fallback() {
    let item = brio();
    let gallery = GalleryResult::fallback(&item, GalleryFallback::FetchFailed);
    let out = detail(&item, &view(Some(gallery), None));
    assert!(out.contains("Gagal memuat galeri untuk Honda Brio RS."));
}

#[test]
fn detail_prefers_description_error() {
    let mut item = brio();
    item.ai_description = Some("Lama.".to_owned());
    let out = detail(&item, &view(None, Some("Kunci API Gemini tidak valid.")));
    assert!(out.contains("Oops! Kunci API Gemini tidak valid."));
    assert!(!out.contains("Lama."));
}

#[test]
fn detail_shows_description_or_pending_note() {
    let mut item = brio();
    assert!(detail(&item, &view(None, None)).contains("belum tersedia"));
    item.ai_description = Some("Brio RS lincah.\n\nIrit.".to_owned());
    assert!(detail(&item, &view(None, None)).contains("Brio RS lincah.\n\nIrit."));
}

#[test]
fn detail_renders_article_as_text() {
    let mut item = brio();
    item.article_content = Some(ArticleContent {
        title: "Promo Brio Juni".to_owned(),
        html_body: "<p>Diskon <strong>DP 0%</strong></p><p>Hubungi kami</p>".to_owned(),
        source_url: "https://blog.example/promo/".to_owned(),
    });
    let out = detail(&item, &view(None, None));
    assert!(out.contains("Informasi Tambahan: Promo Brio Juni\nDiskon DP 0%\nHubungi kami"));
    assert!(out.contains("Sumber: https://blog.example/promo/"));
}

// -----------------------------------------------------------------------
// html_to_text
// -----------------------------------------------------------------------

#[test]
fn html_to_text_breaks_blocks_and_decodes_entities() {
    let html = "<h2>Spesifikasi</h2>\n<p>Mesin&nbsp;1.5L &amp; CVT</p><br/><ul><li>ABS</li><li>VSA</li></ul>";
    assert_eq!(
        html_to_text(html),
        "Spesifikasi\n\nMesin 1.5L & CVT\n\nABS\nVSA"
    );
}

#[test]
fn html_to_text_of_plain_text_is_unchanged() {
    assert_eq!(html_to_text("Tanpa tag"), "Tanpa tag");
}
