use showroom_core::{ArticleContent, MediaRecord};

use super::*;

fn item(id: &str, name: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_owned(),
        name: name.to_owned(),
        tagline: String::new(),
        image_url: format!("https://placeholder/{id}.jpg"),
        price_estimate: String::new(),
        engine_specs: None,
        fuel_economy: None,
        key_features: Vec::new(),
        base_prompt: "Describe it.".to_owned(),
        gallery_images: Vec::new(),
        article_content: None,
        ai_description: None,
    }
}

fn base() -> Vec<CatalogItem> {
    vec![item("brio-rs", "Honda Brio RS"), item("wrv", "Honda WR-V")]
}

fn with_image(mut item: CatalogItem, url: &str) -> CatalogItem {
    url.clone_into(&mut item.image_url);
    item
}

fn with_article(mut item: CatalogItem, title: &str) -> CatalogItem {
    item.article_content = Some(ArticleContent {
        title: title.to_owned(),
        html_body: "<p>Body</p>".to_owned(),
        source_url: "https://blog.example/post/".to_owned(),
    });
    item
}

// -----------------------------------------------------------------------
// merge_catalog
// -----------------------------------------------------------------------

#[test]
fn merge_takes_each_field_from_its_path() {
    let base = base();
    let cards = vec![
        with_image(base[0].clone(), "https://cdn.example/brio.jpg"),
        base[1].clone(),
    ];
    let articles = vec![base[0].clone(), with_article(base[1].clone(), "WR-V review")];

    let merged = merge_catalog(&base, &base, &cards, &articles);
    assert_eq!(merged[0].image_url, "https://cdn.example/brio.jpg");
    assert!(merged[0].article_content.is_none());
    assert_eq!(merged[1].image_url, base[1].image_url);
    assert_eq!(
        merged[1].article_content.as_ref().map(|c| c.title.as_str()),
        Some("WR-V review")
    );
}

#[test]
fn merge_is_keyed_by_id_not_position() {
    let base = base();
    let cards = vec![
        with_image(base[1].clone(), "https://cdn.example/wrv.jpg"),
        with_image(base[0].clone(), "https://cdn.example/brio.jpg"),
    ];

    let merged = merge_catalog(&base, &base, &cards, &base);
    assert_eq!(merged[0].id, "brio-rs");
    assert_eq!(merged[0].image_url, "https://cdn.example/brio.jpg");
    assert_eq!(merged[1].image_url, "https://cdn.example/wrv.jpg");
}

#[test]
fn merge_falls_back_to_base_for_missing_ids() {
    let base = base();
    let cards = vec![with_image(base[0].clone(), "https://cdn.example/brio.jpg")];
    let articles: Vec<CatalogItem> = Vec::new();

    let merged = merge_catalog(&base, &[], &cards, &articles);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[1], base[1]);
}

#[test]
fn merge_never_overwrites_existing_description() {
    let base = base();
    let mut current = base.clone();
    current[0].ai_description = Some("Hatchback sporty untuk kota.".to_owned());
    current[1].gallery_images = vec![MediaRecord::fallback("Honda WR-V", "https://cdn.example/wrv.jpg")];

    let cards = vec![with_image(base[0].clone(), "https://cdn.example/brio.jpg")];
    let merged = merge_catalog(&base, &current, &cards, &base);

    assert_eq!(
        merged[0].ai_description.as_deref(),
        Some("Hatchback sporty untuk kota.")
    );
    assert_eq!(merged[0].image_url, "https://cdn.example/brio.jpg");
    assert_eq!(merged[1].gallery_images.len(), 1);
}

#[test]
fn merge_ignores_ids_not_in_base() {
    let base = base();
    let cards = vec![with_image(item("ghost", "Ghost"), "https://cdn.example/ghost.jpg")];
    let merged = merge_catalog(&base, &base, &cards, &base);
    assert_eq!(merged, base);
}

// -----------------------------------------------------------------------
// LoadedCatalog
// -----------------------------------------------------------------------

#[test]
fn banner_is_absent_without_warnings() {
    let loaded = LoadedCatalog {
        catalog: base(),
        warnings: Vec::new(),
    };
    assert!(loaded.banner().is_none());
}

#[test]
fn banner_joins_warnings() {
    let loaded = LoadedCatalog {
        catalog: base(),
        warnings: vec![CARD_IMAGES_WARNING.to_owned(), ARTICLES_WARNING.to_owned()],
    };
    assert_eq!(
        loaded.banner().as_deref(),
        Some("Gagal memuat gambar mobil. Gagal memuat info tambahan.")
    );
}

#[test]
fn unchanged_enrichment_carries_warning() {
    let base = base();
    let enrichment = Enrichment::unchanged(&base, CARD_IMAGES_WARNING);
    assert_eq!(enrichment.catalog, base);
    assert_eq!(enrichment.warning.as_deref(), Some(CARD_IMAGES_WARNING));
}
