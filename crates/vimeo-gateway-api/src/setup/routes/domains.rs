//! Video route group.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn video_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/videos", API_PREFIX),
            get(handlers::video_list::list_videos),
        )
        .route(
            &format!("{}/videos/search", API_PREFIX),
            get(handlers::video_list::search_videos),
        )
        .route(
            &format!("{}/videos/{{id}}/play", API_PREFIX),
            get(handlers::video_play::play_video),
        )
        .route(
            &format!("{}/videos/upload", API_PREFIX),
            post(handlers::video_upload::upload_video),
        )
        .with_state(state)
}
