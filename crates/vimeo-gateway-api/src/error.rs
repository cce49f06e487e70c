//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Provider and
//! extractor failures convert into `HttpAppError` so every error renders the
//! same JSON body and is logged at the level its variant declares.

use axum::{
    extract::rejection::QueryRejection,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;
use vimeo_gateway_client::ProviderError;
use vimeo_gateway_core::{AppError, ErrorMetadata, LogLevel};

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub detail: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether retrying the same request may succeed
    pub recoverable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
    /// Error variant name; omitted in production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Wrapper so `IntoResponse` (axum) can be implemented for `AppError` (core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<QueryRejection> for HttpAppError {
    fn from(rejection: QueryRejection) -> Self {
        HttpAppError(AppError::Validation(format!(
            "Invalid query parameters: {}",
            rejection.body_text()
        )))
    }
}

impl From<ProviderError> for HttpAppError {
    fn from(err: ProviderError) -> Self {
        let app = match err {
            ProviderError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ProviderError::Forbidden(msg) => AppError::Forbidden(msg),
            ProviderError::NotFound(_) => AppError::NotFound("Resource not found".to_string()),
            ProviderError::RateLimited(msg) => AppError::RateLimited(msg),
            ProviderError::Upstream { status, body } => AppError::Upstream {
                status: status.as_u16(),
                body,
            },
            ProviderError::Unavailable(msg) => AppError::Unavailable(msg),
            ProviderError::InvalidResponse(msg) => AppError::Upstream {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                body: msg,
            },
            ProviderError::UploadFailed(msg) => AppError::UploadFailed(msg),
            ProviderError::InvalidConfig(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

/// Query string extractor that rejects with our ErrorResponse format (400 + JSON)
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(inner) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedQuery(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

fn is_production_env() -> bool {
    std::env::var("ENVIRONMENT")
        .or_else(|_| std::env::var("APP_ENV"))
        .map(|env| {
            let env = env.to_lowercase();
            env == "production" || env == "prod"
        })
        .unwrap_or(false)
}

impl ErrorResponse {
    fn from_app_error(error: &AppError, include_type: bool) -> Self {
        Self {
            detail: error.client_message(),
            code: error.error_code().to_string(),
            recoverable: error.is_recoverable(),
            suggested_action: error.suggested_action().map(String::from),
            error_type: include_type.then(|| error.error_type().to_string()),
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = ErrorResponse::from_app_error(app_error, !is_production_env());
        (status, Json(body)).into_response()
    }
}
