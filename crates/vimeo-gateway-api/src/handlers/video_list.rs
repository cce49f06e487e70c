use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::error::{ErrorResponse, HttpAppError, ValidatedQuery};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use vimeo_gateway_core::models::{SortOrder, VideoPage};
use vimeo_gateway_core::AppError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(minimum = 1, default = 1)]
    pub page: u32,
    #[serde(default = "default_per_page")]
    #[param(minimum = 1, maximum = 100, default = 25)]
    pub per_page: u32,
    #[serde(default)]
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Free-text query; surrounding whitespace is ignored
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_page")]
    #[param(minimum = 1, default = 1)]
    pub page: u32,
    #[serde(default = "default_per_page")]
    #[param(minimum = 1, maximum = 100, default = 25)]
    pub per_page: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn validate_pagination(page: u32, per_page: u32) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::Validation("page must be at least 1".to_string()));
    }
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(AppError::Validation(format!(
            "per_page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    Ok(())
}

/// Trimmed search text, or a validation error when there is nothing to search for.
fn normalize_query(q: Option<&str>) -> Result<&str, AppError> {
    match q.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(AppError::Validation(
            "Query parameter 'q' must not be empty".to_string(),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/v1/videos",
    tag = "videos",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of the account's videos", body = VideoPage),
        (status = 400, description = "Invalid pagination or sort", body = ErrorResponse),
        (status = 401, description = "Vimeo rejected the token", body = ErrorResponse),
        (status = 502, description = "Vimeo API error", body = ErrorResponse),
        (status = 503, description = "Vimeo unreachable", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_videos"))]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<VideoPage>, HttpAppError> {
    validate_pagination(query.page, query.per_page)?;

    let page = state
        .provider
        .list_videos(query.page, query.per_page, query.sort)
        .await?;

    tracing::debug!(returned = page.data.len(), total = page.total, "Listed videos");
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/v1/videos/search",
    tag = "videos",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching videos", body = VideoPage),
        (status = 400, description = "Missing or empty query", body = ErrorResponse),
        (status = 502, description = "Vimeo API error", body = ErrorResponse),
        (status = 503, description = "Vimeo unreachable", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "search_videos"))]
pub async fn search_videos(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Result<Json<VideoPage>, HttpAppError> {
    let q = normalize_query(query.q.as_deref())?;
    validate_pagination(query.page, query.per_page)?;

    let page = state
        .provider
        .search_videos(q, query.page, query.per_page)
        .await?;

    Ok(Json(page))
}
