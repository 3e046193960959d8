//! AI-generated marketing descriptions for catalog items.
//!
//! Thin client over the Gemini `generateContent` endpoint. Without an API
//! key every call fails fast with [`CopyError::MissingCredential`] and no
//! request is made.

pub mod client;
pub mod error;
pub mod prompt;
pub(crate) mod types;

pub use client::DescriptionClient;
pub use error::CopyError;
pub use prompt::{description_prompt, SYSTEM_INSTRUCTION};
