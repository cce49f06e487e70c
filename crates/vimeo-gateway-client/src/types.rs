//! Raw Vimeo payloads and their normalization into core models.
//!
//! Every raw field is optional; defaults are applied in one place, the
//! `normalize_*` functions, so unexpected gaps in provider data never reach
//! API consumers.

use serde::Deserialize;
use vimeo_gateway_core::models::{
    id_from_uri, PictureSize, Pictures, VideoPage, VideoRecord,
};

/// Name used when the provider omits a video title.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawVideo {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u64>,
    pub link: Option<String>,
    pub embed: Option<RawEmbed>,
    pub pictures: Option<RawPictures>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawEmbed {
    pub html: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPictures {
    pub active: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sizes: Option<Vec<RawPictureSize>>,
    pub resource_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawPictureSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub link: Option<String>,
    pub link_with_play_button: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawVideoList {
    pub data: Option<Vec<RawVideo>>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub total: Option<u64>,
}

/// Response to the upload ticket request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUploadTicket {
    pub uri: Option<String>,
    pub link: Option<String>,
    pub upload: Option<RawUploadSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUploadSpec {
    pub approach: Option<String>,
    pub upload_link: Option<String>,
    pub size: Option<u64>,
}

pub fn normalize_video(raw: RawVideo) -> VideoRecord {
    VideoRecord {
        id: id_from_uri(raw.uri.as_deref().unwrap_or_default()),
        name: raw.name.unwrap_or_else(|| UNTITLED.to_string()),
        description: raw.description,
        duration: raw.duration.unwrap_or(0),
        link: raw.link.unwrap_or_default(),
        embed_html: raw.embed.and_then(|embed| embed.html),
        pictures: raw.pictures.map(normalize_pictures),
    }
}

fn normalize_pictures(raw: RawPictures) -> Pictures {
    Pictures {
        active: raw.active.unwrap_or(false),
        kind: raw.kind.unwrap_or_default(),
        sizes: raw
            .sizes
            .unwrap_or_default()
            .into_iter()
            .map(|size| PictureSize {
                width: size.width.unwrap_or(0),
                height: size.height.unwrap_or(0),
                link: size.link.unwrap_or_default(),
                link_with_play_button: size.link_with_play_button,
            })
            .collect(),
        resource_key: raw.resource_key.unwrap_or_default(),
    }
}

/// Normalize a listing; pagination falls back to what was requested.
pub fn normalize_page(raw: RawVideoList, page: u32, per_page: u32) -> VideoPage {
    VideoPage {
        data: raw
            .data
            .unwrap_or_default()
            .into_iter()
            .map(normalize_video)
            .collect(),
        page: raw.page.unwrap_or(page),
        per_page: raw.per_page.unwrap_or(per_page),
        total: raw.total.unwrap_or(0),
    }
}
