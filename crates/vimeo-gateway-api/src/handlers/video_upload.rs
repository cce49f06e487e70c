use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;
use vimeo_gateway_core::models::UploadResult;

#[utoipa::path(
    post,
    path = "/v1/videos/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video accepted; transcoding is pending", body = UploadResult),
        (status = 400, description = "Missing, duplicate or empty file part", body = ErrorResponse),
        (status = 413, description = "Body exceeds the upload size limit"),
        (status = 502, description = "Upload to Vimeo failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResult>, HttpAppError> {
    let file = extract_multipart_file(multipart).await?;
    let size = file.size();

    tracing::info!(
        size,
        filename = ?file.filename,
        content_type = ?file.content_type,
        "Forwarding upload to Vimeo"
    );

    let result = state.provider.upload_video(file.data, size).await?;

    tracing::info!(video_id = %result.video_id, "Upload accepted by Vimeo");
    Ok(Json(result))
}
