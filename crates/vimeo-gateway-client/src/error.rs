//! Provider client error types
//!
//! Maps Vimeo HTTP statuses and transport failures onto a small taxonomy.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Maximum response body size accepted from Vimeo metadata calls (16 MB).
pub const MAX_RESPONSE_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Vimeo rejected the access token: {0}")]
    Unauthorized(String),

    #[error("Vimeo denied access: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Vimeo rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Vimeo API error {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Vimeo unreachable: {0}")]
    Unavailable(String),

    #[error("Invalid Vimeo response: {0}")]
    InvalidResponse(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure of a single binary transfer to an upload link.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The request never produced a response (connect failure, timeout).
    #[error("{method} request failed: {message}")]
    Transport {
        method: &'static str,
        message: String,
    },

    /// The upload server answered with a non-2xx status.
    #[error("{method} returned {status}: {body}")]
    Status {
        method: &'static str,
        status: StatusCode,
        body: String,
    },
}

impl From<TransferError> for ProviderError {
    fn from(err: TransferError) -> Self {
        ProviderError::UploadFailed(err.to_string())
    }
}

impl ProviderError {
    /// Classify a non-success HTTP status returned by Vimeo.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ProviderError::Unauthorized(body),
            StatusCode::FORBIDDEN => ProviderError::Forbidden(body),
            StatusCode::NOT_FOUND => ProviderError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(body),
            _ => ProviderError::Upstream { status, body },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::InvalidResponse(err.to_string())
        } else {
            ProviderError::Unavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(err.to_string())
    }
}

/// Pass a successful response through; otherwise log the upstream body and classify it.
pub async fn check_response(response: reqwest::Response) -> ProviderResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        status = status.as_u16(),
        url = %url,
        body = %body,
        "Vimeo API error"
    );
    Err(ProviderError::from_status(status, body))
}

/// Read a response body with size limit and deserialize it as JSON.
pub async fn json_with_limit<T: DeserializeOwned>(response: reqwest::Response) -> ProviderResult<T> {
    if let Some(len) = response.content_length() {
        if len as usize > MAX_RESPONSE_SIZE {
            return Err(ProviderError::InvalidResponse(format!(
                "response too large ({} bytes)",
                len
            )));
        }
    }
    let bytes = response.bytes().await?;
    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(ProviderError::InvalidResponse(format!(
            "response too large ({} bytes)",
            bytes.len()
        )));
    }
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode Vimeo response");
        ProviderError::from(e)
    })
}
