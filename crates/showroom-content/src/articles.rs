//! Article enrichment from the post source.

use showroom_core::{find_best_match, ArticleContent, ArticleRecord, CatalogItem, KeywordResolver};

use crate::orchestrator::{ContentService, Enrichment, ARTICLES_WARNING};

/// Attaches the best-matching article to each item.
///
/// `articles` is expected newest-first, so within the first keyword that
/// matches anything the most recent post wins. Unmatched items are left as
/// they are.
#[must_use]
pub fn map_articles(
    resolver: &KeywordResolver,
    catalog: &[CatalogItem],
    articles: &[ArticleRecord],
) -> Vec<CatalogItem> {
    catalog
        .iter()
        .map(|item| {
            let keywords = resolver.resolve(&item.name);
            let mut item = item.clone();
            if let Some(article) = find_best_match(&keywords, articles, |a| a.title.as_str()) {
                tracing::debug!(item = %item.id, post_id = article.id, "matched article");
                item.article_content = Some(ArticleContent::from(article));
            }
            item
        })
        .collect()
}

impl ContentService {
    /// Fetches the post source and attaches at most one article per item.
    ///
    /// On fetch failure returns `base` unchanged with [`ARTICLES_WARNING`].
    /// An empty collection is not a failure.
    pub async fn enrich_articles(&self, base: &[CatalogItem]) -> Enrichment {
        let articles = match self
            .client
            .fetch_articles(&self.sources.posts_url, self.sources.posts_page_size)
            .await
        {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(
                    source = %self.sources.posts_url,
                    error = %e,
                    "article fetch failed; continuing without articles"
                );
                return Enrichment::unchanged(base, ARTICLES_WARNING);
            }
        };

        tracing::info!(posts = articles.len(), "articles loaded");
        Enrichment::enriched(map_articles(&self.resolver, base, &articles))
    }
}
