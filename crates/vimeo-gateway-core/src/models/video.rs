use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Status reported for an upload whose bytes were accepted but not yet transcoded.
pub const UPLOAD_STATUS_PENDING_TRANSCODE: &str = "uploaded_pending_transcode";

/// Derive a video id from a provider resource URI (`/videos/123` -> `123`).
///
/// Always the last `/`-separated segment, so a trailing slash yields an empty id.
pub fn id_from_uri(uri: &str) -> String {
    uri.rsplit('/').next().unwrap_or_default().to_string()
}

/// Sort keys accepted by the provider's listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Date,
    Alphabetical,
    Duration,
    LastUserAction,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::Duration => "duration",
            SortOrder::LastUserAction => "last_user_action",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// How the play endpoint hands the video back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    #[default]
    Json,
    Redirect,
}

/// One rendition of a video thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PictureSize {
    pub width: u32,
    pub height: u32,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_with_play_button: Option<String>,
}

/// Active thumbnail set of a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Pictures {
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub sizes: Vec<PictureSize>,
    pub resource_key: String,
}

/// Normalized video returned to API consumers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoRecord {
    /// Last path segment of the provider URI
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Duration in seconds
    pub duration: u64,
    /// Public page of the video on the provider
    pub link: String,
    pub embed_html: Option<String>,
    pub pictures: Option<Pictures>,
}

/// One page of videos as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VideoPage {
    pub data: Vec<VideoRecord>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Playback projection of a [`VideoRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PlaybackInfo {
    pub link: String,
    pub embed_html: Option<String>,
}

impl From<VideoRecord> for PlaybackInfo {
    fn from(video: VideoRecord) -> Self {
        PlaybackInfo {
            link: video.link,
            embed_html: video.embed_html,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct UploadResult {
    pub video_id: String,
    pub link: String,
    pub status: String,
}
