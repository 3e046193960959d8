//! Command handlers.

use futures::stream::{self, StreamExt};
use showroom_content::{ContentService, GalleryResult, Showroom};
use showroom_copywriter::{CopyError, DescriptionClient};
use showroom_core::{contact_link, load_catalog, AppConfig, CatalogItem, KeywordResolver};

use crate::render;

/// Detail views fetched at once by `detail`.
const DETAIL_CONCURRENCY: usize = 4;

fn load_base_catalog(config: &AppConfig) -> anyhow::Result<Vec<CatalogItem>> {
    let catalog = load_catalog(&config.catalog_path)?;
    tracing::info!(
        path = %config.catalog_path.display(),
        items = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn load_resolver(config: &AppConfig) -> anyhow::Result<KeywordResolver> {
    let Some(path) = &config.keyword_rules_path else {
        return Ok(KeywordResolver::default());
    };
    let resolver = KeywordResolver::load(path)?;
    tracing::info!(
        path = %path.display(),
        rules = resolver.rules().len(),
        "keyword rules loaded"
    );
    Ok(resolver)
}

/// Base catalog, content service and an enriched session.
async fn open_showroom(config: &AppConfig) -> anyhow::Result<(Showroom, ContentService)> {
    let base = load_base_catalog(config)?;
    let service = ContentService::from_app_config(config, load_resolver(config)?)?;
    let mut showroom = Showroom::new(base);
    showroom.refresh(&service).await;
    Ok((showroom, service))
}

fn print_banners(config: &AppConfig, showroom: &Showroom) {
    if let Some(banner) = render::warning_banner(showroom.warnings()) {
        println!("{banner}");
    }
    if !config.ai_enabled() {
        println!("{}", render::AI_KEY_BANNER);
    }
}

/// Load, enrich and print the catalog.
///
/// # Errors
///
/// Returns an error if the catalog or keyword rules cannot be loaded, or
/// the HTTP client cannot be built. Enrichment failures only add banners.
pub(crate) async fn run_catalog(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let (showroom, _service) = open_showroom(config).await?;

    if json {
        let output = render::catalog_json(showroom.catalog(), showroom.warnings());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_banners(config, &showroom);
    for item in showroom.catalog() {
        let link = contact_link(&config.whatsapp_number, &item.name);
        println!("{}", render::card(item, &link));
    }
    Ok(())
}

/// Open the detail view of each id.
///
/// Galleries and descriptions for all ids are fetched concurrently; each
/// result is applied to the session under its own item id.
///
/// # Errors
///
/// Returns an error if any id is not in the catalog, or setup fails.
pub(crate) async fn run_detail(config: &AppConfig, ids: &[String]) -> anyhow::Result<()> {
    let (mut showroom, service) = open_showroom(config).await?;
    let copywriter = DescriptionClient::from_app_config(config)?;

    let items: Vec<CatalogItem> = ids
        .iter()
        .map(|id| {
            showroom
                .item(id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("item '{id}' not found in catalog"))
        })
        .collect::<anyhow::Result<_>>()?;

    let fetched: Vec<(GalleryResult, Result<String, CopyError>)> = stream::iter(&items)
        .map(|item| {
            let service = &service;
            let copywriter = &copywriter;
            async move {
                let description = async {
                    if let Some(existing) = &item.ai_description {
                        Ok(existing.clone())
                    } else {
                        copywriter
                            .generate_description(&item.name, &item.base_prompt)
                            .await
                    }
                };
                tokio::join!(service.enrich_gallery(item), description)
            }
        })
        .buffered(DETAIL_CONCURRENCY)
        .collect()
        .await;

    print_banners(config, &showroom);
    for (item, (gallery, description)) in items.iter().zip(fetched) {
        if showroom.open(&item.id).is_none() {
            continue;
        }
        showroom.apply_gallery(gallery);
        match description {
            Ok(text) => showroom.record_description(&item.id, text),
            Err(e) => {
                tracing::warn!(item = %item.id, error = %e, "AI description unavailable");
                showroom.record_description_failure(&item.id, e.user_message(&item.name));
            }
        }

        if let (Some(current), Some(view)) = (showroom.item(&item.id), showroom.active()) {
            println!("{}", render::detail(current, view));
        }
        showroom.close();
    }
    Ok(())
}

/// Print the `wa.me` contact link for one item.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or `id` is not in it.
pub(crate) fn run_contact(config: &AppConfig, id: &str) -> anyhow::Result<()> {
    let catalog = load_base_catalog(config)?;
    let item = catalog
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| anyhow::anyhow!("item '{id}' not found in catalog"))?;
    println!("{}", contact_link(&config.whatsapp_number, &item.name));
    Ok(())
}
