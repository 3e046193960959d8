use thiserror::Error;

/// Errors returned by [`crate::DescriptionClient`].
#[derive(Debug, Error)]
pub enum CopyError {
    /// No API key configured. No request was sent.
    #[error("AI API key is not configured")]
    MissingCredential,

    /// The service rejected the configured API key.
    #[error("AI API key was rejected: {0}")]
    InvalidCredential(String),

    /// The service answered 2xx but without any text.
    #[error("AI service returned an empty description")]
    EmptyResponse,

    /// Any other non-2xx answer.
    #[error("AI service returned HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid AI base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CopyError {
    /// Message shown in the detail view in place of the description.
    #[must_use]
    pub fn user_message(&self, subject_name: &str) -> String {
        match self {
            CopyError::MissingCredential => {
                "Kunci API Gemini belum dikonfigurasi. Deskripsi AI tidak dapat dimuat.".to_owned()
            }
            CopyError::InvalidCredential(_) => {
                "Kunci API Gemini tidak valid. Harap periksa konfigurasi Anda.".to_owned()
            }
            CopyError::EmptyResponse => {
                format!("Gagal memuat deskripsi dari AI untuk {subject_name}: respons kosong.")
            }
            CopyError::Rejected { message, .. } => {
                format!("Gagal memuat deskripsi dari AI untuk {subject_name}: {message}")
            }
            CopyError::Http(e) => {
                format!("Gagal memuat deskripsi dari AI untuk {subject_name}: {e}")
            }
            CopyError::InvalidBaseUrl { .. } | CopyError::Deserialize { .. } => format!(
                "Terjadi kesalahan tidak diketahui saat memuat deskripsi untuk {subject_name}."
            ),
        }
    }
}
