//! Domain types, configuration and content matching for the showroom catalog.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod keywords;
pub mod matching;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, parse_catalog, ArticleContent, CatalogFile, CatalogItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{contact_link, contact_message};
pub use keywords::{KeywordResolver, KeywordRule, KeywordRules, KeywordSet};
pub use matching::{find_all_matches, find_best_match};
pub use records::{ArticleRecord, ImageSize, MediaRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config validation failed: {0}")]
    Validation(String),
}
