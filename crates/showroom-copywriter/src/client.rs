//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use showroom_core::config::DEFAULT_AI_BASE_URL;
use showroom_core::AppConfig;

use crate::error::CopyError;
use crate::prompt::{description_prompt, SYSTEM_INSTRUCTION, TEMPERATURE, TOP_K, TOP_P};
use crate::types::{
    Content, ErrorEnvelope, GenerateRequest, GenerateResponse, GenerationConfig, RequestPart,
};

/// Substring of the upstream message when the key itself is bad.
const INVALID_KEY_MARKER: &str = "API key not valid";

/// Client for description generation.
///
/// Use [`DescriptionClient::new`] for the production API or
/// [`DescriptionClient::with_base_url`] to point at a mock server in tests.
pub struct DescriptionClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: Url,
}

impl DescriptionClient {
    /// Creates a client for the production API.
    ///
    /// A `None` or blank `api_key` is accepted; calls then fail with
    /// [`CopyError::MissingCredential`].
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CopyError> {
        Self::with_base_url(api_key, model, timeout_secs, user_agent, DEFAULT_AI_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CopyError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: Option<&str>,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CopyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CopyError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            model: model.to_owned(),
            base_url: parsed,
        })
    }

    /// Builds the client from application config.
    ///
    /// # Errors
    ///
    /// Same as [`Self::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, CopyError> {
        Self::with_base_url(
            config.ai_api_key.as_deref(),
            &config.ai_model,
            config.request_timeout_secs,
            &config.user_agent,
            &config.ai_base_url,
        )
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generates a marketing description for `subject_name` following
    /// `instruction_prompt`.
    ///
    /// # Errors
    ///
    /// - [`CopyError::MissingCredential`] without an API key (no request sent).
    /// - [`CopyError::InvalidCredential`] if the service rejects the key.
    /// - [`CopyError::Rejected`] for any other non-2xx status.
    /// - [`CopyError::EmptyResponse`] if the answer holds no text.
    /// - [`CopyError::Http`] on network failure.
    /// - [`CopyError::Deserialize`] if a 2xx body is not the expected shape.
    pub async fn generate_description(
        &self,
        subject_name: &str,
        instruction_prompt: &str,
    ) -> Result<String, CopyError> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!(subject = subject_name, "AI description requested without an API key");
            return Err(CopyError::MissingCredential);
        };

        let url = self.endpoint()?;
        let prompt = description_prompt(subject_name, instruction_prompt);
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![RequestPart {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
            },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body, status);
            tracing::warn!(
                subject = subject_name,
                status = status.as_u16(),
                message = %message,
                "AI description request rejected"
            );
            if message.contains(INVALID_KEY_MARKER) {
                return Err(CopyError::InvalidCredential(message));
            }
            return Err(CopyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| CopyError::Deserialize {
                context: format!("generateContent for {subject_name}"),
                source: e,
            })?;

        let text = parsed.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(CopyError::EmptyResponse);
        }

        tracing::debug!(subject = subject_name, chars = text.len(), "AI description generated");
        Ok(text.to_owned())
    }

    /// `{base}models/{model}:generateContent`
    fn endpoint(&self) -> Result<Url, CopyError> {
        let path = format!("models/{}:generateContent", self.model);
        self.base_url
            .join(&path)
            .map_err(|e| CopyError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: format!("cannot append \"{path}\": {e}"),
            })
    }
}

/// Upstream error message from an error body, or the status text when the
/// body is not the usual envelope.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        })
}
