//! Vimeo implementation of [`VideoProvider`].

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::json;
use vimeo_gateway_core::models::{
    id_from_uri, SortOrder, UploadResult, VideoPage, VideoRecord, UPLOAD_STATUS_PENDING_TRANSCODE,
};
use vimeo_gateway_core::Config;

use crate::error::{
    check_response, json_with_limit, ProviderError, ProviderResult, TransferError,
};
use crate::provider::VideoProvider;
use crate::types::{normalize_page, normalize_video, RawUploadTicket, RawVideo, RawVideoList};

const VIMEO_ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";
const UPLOAD_APPROACH: &str = "post";
const UPLOAD_NAME: &str = "Uploaded via API";

/// HTTP method used to send video bytes to a ticket's upload link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMethod {
    /// `PUT` of the raw body
    Put,
    /// Single tus `PATCH` at offset 0
    TusPatch,
}

impl TransferMethod {
    /// Primary method for the approach declared in the upload ticket.
    pub fn for_approach(approach: Option<&str>) -> Self {
        match approach {
            Some(a) if a.eq_ignore_ascii_case("tus") => TransferMethod::TusPatch,
            _ => TransferMethod::Put,
        }
    }

    pub fn fallback(self) -> Self {
        match self {
            TransferMethod::Put => TransferMethod::TusPatch,
            TransferMethod::TusPatch => TransferMethod::Put,
        }
    }
}

impl TransferMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMethod::Put => "PUT",
            TransferMethod::TusPatch => "PATCH",
        }
    }
}

impl Display for TransferMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Client for the Vimeo REST API authenticated with a static bearer token.
#[derive(Clone)]
pub struct VimeoClient {
    client: Client,
    base_url: String,
    authorization: HeaderValue,
    upload_timeout: Duration,
}

impl std::fmt::Debug for VimeoClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VimeoClient")
            .field("base_url", &self.base_url)
            .field("upload_timeout", &self.upload_timeout)
            .finish()
    }
}

impl VimeoClient {
    pub fn new(
        base_url: impl Into<String>,
        access_token: &str,
        timeout: Duration,
        upload_timeout: Duration,
    ) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| {
                ProviderError::InvalidConfig(format!("Failed to create HTTP client: {}", e))
            })?;

        let mut authorization = HeaderValue::from_str(&format!("bearer {}", access_token))
            .map_err(|_| {
                ProviderError::InvalidConfig("access token is not a valid header value".to_string())
            })?;
        authorization.set_sensitive(true);

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization,
            upload_timeout,
        })
    }

    pub fn from_config(config: &Config) -> ProviderResult<Self> {
        Self::new(
            config.vimeo_base_url.clone(),
            &config.vimeo_access_token,
            Duration::from_secs(config.vimeo_timeout_secs),
            Duration::from_secs(config.vimeo_upload_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/videos/{id}` with the id percent-encoded as a single segment.
    fn video_url(&self, video_id: &str) -> ProviderResult<Url> {
        let mut url = Url::parse(&self.build_url("/videos"))
            .map_err(|e| ProviderError::InvalidConfig(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidConfig("Base URL cannot have a path".to_string()))?
            .push(video_id);
        Ok(url)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, VIMEO_ACCEPT)
    }

    /// Send an authenticated metadata request and decode its JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ProviderResult<T> {
        let response = self.apply_auth(request).send().await.map_err(|e| {
            tracing::error!(error = %e, "Vimeo request failed");
            ProviderError::Unavailable(e.to_string())
        })?;
        let response = check_response(response).await?;
        json_with_limit(response).await
    }

    async fn fetch_page(
        &self,
        query: &[(&str, String)],
        page: u32,
        per_page: u32,
    ) -> ProviderResult<VideoPage> {
        let request = self.client.get(self.build_url("/me/videos")).query(query);
        let raw: RawVideoList = self.send_json(request).await?;
        Ok(normalize_page(raw, page, per_page))
    }

    /// Send the whole buffer to the upload link.
    async fn transfer(
        &self,
        upload_link: &str,
        method: TransferMethod,
        data: Bytes,
    ) -> Result<(), TransferError> {
        let request = match method {
            TransferMethod::Put => self
                .client
                .put(upload_link)
                .header(CONTENT_TYPE, "video/mp4"),
            TransferMethod::TusPatch => self
                .client
                .patch(upload_link)
                .header("Tus-Resumable", "1.0.0")
                .header("Upload-Offset", "0")
                .header(CONTENT_TYPE, "application/offset+octet-stream"),
        };

        let response = request
            .timeout(self.upload_timeout)
            .body(data)
            .send()
            .await
            .map_err(|e| TransferError::Transport {
                method: method.as_str(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(TransferError::Status {
            method: method.as_str(),
            status,
            body,
        })
    }
}

#[async_trait]
impl VideoProvider for VimeoClient {
    async fn list_videos(
        &self,
        page: u32,
        per_page: u32,
        sort: Option<SortOrder>,
    ) -> ProviderResult<VideoPage> {
        let mut query = vec![("page", page.to_string()), ("per_page", per_page.to_string())];
        if let Some(sort) = sort {
            query.push(("sort", sort.as_str().to_string()));
        }
        self.fetch_page(&query, page, per_page).await
    }

    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> ProviderResult<VideoPage> {
        let params = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        self.fetch_page(&params, page, per_page).await
    }

    async fn get_video(&self, video_id: &str) -> ProviderResult<VideoRecord> {
        let request = self.client.get(self.video_url(video_id)?);
        let raw: RawVideo = self.send_json(request).await?;
        Ok(normalize_video(raw))
    }

    async fn upload_video(&self, data: Bytes, size: u64) -> ProviderResult<UploadResult> {
        let body = json!({
            "upload": {
                "approach": UPLOAD_APPROACH,
                "size": size,
            },
            "name": UPLOAD_NAME,
        });
        let request = self.client.post(self.build_url("/me/videos")).json(&body);
        let ticket: RawUploadTicket = self.send_json(request).await?;

        let spec = ticket.upload.unwrap_or_default();
        let upload_link = spec
            .upload_link
            .filter(|link| !link.is_empty())
            .ok_or_else(|| {
                tracing::error!("Vimeo upload ticket has no upload link");
                ProviderError::UploadFailed("upload ticket has no upload link".to_string())
            })?;
        let video_uri = ticket.uri.filter(|uri| !uri.is_empty()).ok_or_else(|| {
            tracing::error!("Vimeo upload ticket has no video URI");
            ProviderError::UploadFailed("upload ticket has no video URI".to_string())
        })?;

        let primary = TransferMethod::for_approach(spec.approach.as_deref());
        tracing::info!(
            size,
            approach = ?spec.approach,
            method = %primary,
            "Uploading video bytes to Vimeo"
        );

        match self.transfer(&upload_link, primary, data.clone()).await {
            Ok(()) => {}
            Err(first @ TransferError::Status { .. }) => {
                let fallback = primary.fallback();
                tracing::warn!(
                    error = %first,
                    fallback = %fallback,
                    "Upload transfer rejected, trying fallback method"
                );
                self.transfer(&upload_link, fallback, data)
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, "Upload to Vimeo failed");
                        ProviderError::from(e)
                    })?;
            }
            Err(err @ TransferError::Transport { .. }) => {
                tracing::error!(error = %err, "Upload to Vimeo failed");
                return Err(err.into());
            }
        }

        Ok(UploadResult {
            video_id: id_from_uri(&video_uri),
            link: ticket.link.unwrap_or_default(),
            status: UPLOAD_STATUS_PENDING_TRANSCODE.to_string(),
        })
    }
}
