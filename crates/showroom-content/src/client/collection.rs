//! Single-request fetch of a JSON array collection.

use serde::de::DeserializeOwned;

use crate::error::ContentError;

use super::ContentClient;

impl ContentClient {
    /// GETs `url` and decodes the body as a JSON array of `T`.
    ///
    /// The body must be an array; elements that fail to decode as `T` are
    /// logged and skipped so one malformed record cannot sink the page.
    pub(super) async fn fetch_collection<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<Vec<T>, ContentError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let raw = serde_json::from_str::<Vec<serde_json::Value>>(&body).map_err(|e| {
            ContentError::Deserialize {
                context: format!("{context} collection from {url}"),
                source: e,
            }
        })?;

        let mut items = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<T>(value) {
                Ok(item) => items.push(item),
                Err(e) => {
                    tracing::debug!(url, context, error = %e, "skipping malformed record");
                }
            }
        }
        Ok(items)
    }
}
