use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub catalog_path: PathBuf,
    /// Custom keyword rule table. `None` uses the built-in table.
    pub keyword_rules_path: Option<PathBuf>,
    /// Media collection used for catalog card images.
    pub card_media_url: String,
    /// Media collection used for detail-view galleries.
    pub gallery_media_url: String,
    pub posts_url: String,
    pub media_page_size: u32,
    pub posts_page_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Credential gating the AI description service. AI features are
    /// disabled when absent; catalog browsing is unaffected.
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub ai_base_url: String,
    pub whatsapp_number: String,
}

impl AppConfig {
    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.ai_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("keyword_rules_path", &self.keyword_rules_path)
            .field("card_media_url", &self.card_media_url)
            .field("gallery_media_url", &self.gallery_media_url)
            .field("posts_url", &self.posts_url)
            .field("media_page_size", &self.media_page_size)
            .field("posts_page_size", &self.posts_page_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "ai_api_key",
                &self.ai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("ai_model", &self.ai_model)
            .field("ai_base_url", &self.ai_base_url)
            .field("whatsapp_number", &self.whatsapp_number)
            .finish()
    }
}
