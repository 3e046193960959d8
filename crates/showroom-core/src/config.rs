use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_CARD_MEDIA_URL: &str = "https://honda-salemba.com/wp-json/wp/v2/media";
pub const DEFAULT_GALLERY_MEDIA_URL: &str = "https://hondafatmawati.co.id/wp-json/wp/v2/media";
pub const DEFAULT_POSTS_URL: &str = "https://hondafatmawati.co.id/wp-json/wp/v2/posts";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "6281289998402";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// configuration with AI features disabled.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("SHOWROOM_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "SHOWROOM_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let keyword_rules_path = optional("SHOWROOM_KEYWORD_RULES_PATH").map(PathBuf::from);

    let card_media_url = or_default("SHOWROOM_CARD_MEDIA_URL", DEFAULT_CARD_MEDIA_URL);
    let gallery_media_url = or_default("SHOWROOM_GALLERY_MEDIA_URL", DEFAULT_GALLERY_MEDIA_URL);
    let posts_url = or_default("SHOWROOM_POSTS_URL", DEFAULT_POSTS_URL);

    let media_page_size = parse_u32("SHOWROOM_MEDIA_PAGE_SIZE", "100")?;
    let posts_page_size = parse_u32("SHOWROOM_POSTS_PAGE_SIZE", "50")?;
    for (var, value) in [
        ("SHOWROOM_MEDIA_PAGE_SIZE", media_page_size),
        ("SHOWROOM_POSTS_PAGE_SIZE", posts_page_size),
    ] {
        // WordPress rejects per_page outside 1..=100.
        if !(1..=100).contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is outside 1..=100"),
            });
        }
    }

    let request_timeout_secs = parse_u64("SHOWROOM_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOWROOM_USER_AGENT", "showroom/0.1 (catalog-enrichment)");

    let ai_api_key = optional("GEMINI_API_KEY");
    let ai_model = or_default("SHOWROOM_AI_MODEL", "gemini-2.5-flash");
    let ai_base_url = or_default("SHOWROOM_AI_BASE_URL", DEFAULT_AI_BASE_URL);

    let whatsapp_number = or_default("SHOWROOM_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
    if !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOWROOM_WHATSAPP_NUMBER".to_string(),
            reason: "must contain digits only (international format, no '+')".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        catalog_path,
        keyword_rules_path,
        card_media_url,
        gallery_media_url,
        posts_url,
        media_page_size,
        posts_page_size,
        request_timeout_secs,
        user_agent,
        ai_api_key,
        ai_model,
        ai_base_url,
        whatsapp_number,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
