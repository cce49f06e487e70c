//! Video provider abstraction trait

use async_trait::async_trait;
use bytes::Bytes;
use vimeo_gateway_core::models::{SortOrder, UploadResult, VideoPage, VideoRecord};

use crate::error::ProviderResult;

/// Operations the API layer needs from the video host.
///
/// Handlers hold an `Arc<dyn VideoProvider>`, so tests can substitute a fake
/// without touching transport code.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// List the authenticated account's videos. `sort` is omitted from the
    /// provider request when `None`.
    async fn list_videos(
        &self,
        page: u32,
        per_page: u32,
        sort: Option<SortOrder>,
    ) -> ProviderResult<VideoPage>;

    /// Search the authenticated account's videos. Callers must reject empty
    /// queries before calling.
    async fn search_videos(&self, query: &str, page: u32, per_page: u32)
        -> ProviderResult<VideoPage>;

    /// Fetch a single video by id.
    async fn get_video(&self, video_id: &str) -> ProviderResult<VideoRecord>;

    /// Create an upload ticket for `size` bytes and transfer `data` to it.
    async fn upload_video(&self, data: Bytes, size: u64) -> ProviderResult<UploadResult>;
}
