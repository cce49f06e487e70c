//! OpenAPI documentation, served at `/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use vimeo_gateway_core::models;

/// Returns the OpenAPI document with the crate version filled in.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    let mut spec = ApiDoc::openapi();
    spec.info.version = env!("CARGO_PKG_VERSION").to_string();
    spec
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vimeo Gateway API",
        description = "Thin HTTP layer over the Vimeo REST API: list and search the account's videos, resolve playback links and upload new videos. Video endpoints are versioned under /v1/."
    ),
    paths(
        health::health_check,
        handlers::video_list::list_videos,
        handlers::video_list::search_videos,
        handlers::video_play::play_video,
        handlers::video_upload::upload_video,
    ),
    components(schemas(
        error::ErrorResponse,
        health::HealthResponse,
        models::VideoPage,
        models::VideoRecord,
        models::Pictures,
        models::PictureSize,
        models::PlaybackInfo,
        models::UploadResult,
        models::SortOrder,
        models::PlayMode,
    )),
    tags(
        (name = "videos", description = "Video listing, search, playback and upload"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
