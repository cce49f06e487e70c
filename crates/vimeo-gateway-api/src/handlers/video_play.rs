use crate::error::{ErrorResponse, HttpAppError, ValidatedQuery};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use vimeo_gateway_core::models::{PlayMode, PlaybackInfo};
use vimeo_gateway_core::AppError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayQuery {
    /// `json` (default) or `redirect`
    #[serde(default)]
    pub mode: PlayMode,
}

fn redirect_to(link: &str) -> Result<Response, AppError> {
    let unusable = || AppError::Upstream {
        status: StatusCode::BAD_GATEWAY.as_u16(),
        body: "video has no playable link".to_string(),
    };
    if link.is_empty() {
        return Err(unusable());
    }
    let location = HeaderValue::from_str(link).map_err(|_| unusable())?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

#[utoipa::path(
    get,
    path = "/v1/videos/{id}/play",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Vimeo video ID"),
        PlayQuery
    ),
    responses(
        (status = 200, description = "Playback link and embed markup", body = PlaybackInfo),
        (status = 302, description = "Redirect to the video's public page"),
        (status = 400, description = "Invalid mode", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 502, description = "Vimeo API error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "play_video"))]
pub async fn play_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<PlayQuery>,
) -> Result<Response, HttpAppError> {
    let video = state.provider.get_video(&id).await?;
    let playback = PlaybackInfo::from(video);

    match query.mode {
        PlayMode::Json => Ok(Json(playback).into_response()),
        PlayMode::Redirect => Ok(redirect_to(&playback.link)?),
    }
}
