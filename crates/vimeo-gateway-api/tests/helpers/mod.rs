//! Test helpers: scripted provider, config and router for integration tests.
//!
//! Run from workspace root: `cargo test -p vimeo-gateway-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use bytes::Bytes;
use std::sync::{Arc, Mutex};
use vimeo_gateway_api::constants;
use vimeo_gateway_api::setup::routes;
use vimeo_gateway_api::state::AppState;
use vimeo_gateway_client::{ProviderResult, VideoProvider};
use vimeo_gateway_core::models::{
    SortOrder, UploadResult, VideoPage, VideoRecord, UPLOAD_STATUS_PENDING_TRANSCODE,
};
use vimeo_gateway_core::Config;

/// API path with the version prefix (e.g. `/v1/videos`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// A provider call as the handler issued it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        page: u32,
        per_page: u32,
        sort: Option<SortOrder>,
    },
    Search {
        query: String,
        page: u32,
        per_page: u32,
    },
    Get {
        id: String,
    },
    Upload {
        size: u64,
        data: Vec<u8>,
    },
}

type PageResponder = Box<dyn Fn(u32, u32) -> ProviderResult<VideoPage> + Send + Sync>;
type VideoResponder = Box<dyn Fn(&str) -> ProviderResult<VideoRecord> + Send + Sync>;
type UploadResponder = Box<dyn Fn() -> ProviderResult<UploadResult> + Send + Sync>;

/// In-memory [`VideoProvider`] that records calls and answers from scripts.
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    page: PageResponder,
    video: VideoResponder,
    upload: UploadResponder,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            page: Box::new(|page, per_page| Ok(sample_page(page, per_page))),
            video: Box::new(|id| Ok(sample_video(id))),
            upload: Box::new(|| Ok(sample_upload("987"))),
        }
    }
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page<F>(mut self, f: F) -> Self
    where
        F: Fn(u32, u32) -> ProviderResult<VideoPage> + Send + Sync + 'static,
    {
        self.page = Box::new(f);
        self
    }

    pub fn with_video<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> ProviderResult<VideoRecord> + Send + Sync + 'static,
    {
        self.video = Box::new(f);
        self
    }

    pub fn with_upload<F>(mut self, f: F) -> Self
    where
        F: Fn() -> ProviderResult<UploadResult> + Send + Sync + 'static,
    {
        self.upload = Box::new(f);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VideoProvider for FakeProvider {
    async fn list_videos(
        &self,
        page: u32,
        per_page: u32,
        sort: Option<SortOrder>,
    ) -> ProviderResult<VideoPage> {
        self.record(Call::List {
            page,
            per_page,
            sort,
        });
        (self.page)(page, per_page)
    }

    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> ProviderResult<VideoPage> {
        self.record(Call::Search {
            query: query.to_string(),
            page,
            per_page,
        });
        (self.page)(page, per_page)
    }

    async fn get_video(&self, video_id: &str) -> ProviderResult<VideoRecord> {
        self.record(Call::Get {
            id: video_id.to_string(),
        });
        (self.video)(video_id)
    }

    async fn upload_video(&self, data: Bytes, size: u64) -> ProviderResult<UploadResult> {
        self.record(Call::Upload {
            size,
            data: data.to_vec(),
        });
        (self.upload)()
    }
}

pub fn sample_video(id: &str) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        name: format!("Video {}", id),
        description: None,
        duration: 42,
        link: format!("https://example.com/v/{}", id),
        embed_html: None,
        pictures: None,
    }
}

pub fn sample_page(page: u32, per_page: u32) -> VideoPage {
    VideoPage {
        data: vec![sample_video("1"), sample_video("2")],
        page,
        per_page,
        total: 2,
    }
}

pub fn sample_upload(video_id: &str) -> UploadResult {
    UploadResult {
        video_id: video_id.to_string(),
        link: format!("https://vimeo.com/{}", video_id),
        status: UPLOAD_STATUS_PENDING_TRANSCODE.to_string(),
    }
}

pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(move |key: &str| {
        if key == "VIMEO_ACCESS_TOKEN" {
            return Some("test-token".to_string());
        }
        vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    })
    .expect("test config")
}

/// Test application: server plus the provider it talks to.
pub struct TestApp<P> {
    pub server: TestServer,
    pub provider: Arc<P>,
}

impl<P> TestApp<P> {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

impl TestApp<FakeProvider> {
    pub fn calls(&self) -> Vec<Call> {
        self.provider.calls()
    }
}

/// Router with default config around the given provider.
pub fn setup_test_app<P: VideoProvider + 'static>(provider: P) -> TestApp<P> {
    setup_test_app_with_config(test_config(&[]), provider)
}

pub fn setup_test_app_with_config<P: VideoProvider + 'static>(
    config: Config,
    provider: P,
) -> TestApp<P> {
    let provider = Arc::new(provider);
    let state = Arc::new(AppState::new(provider.clone()));
    let app = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");
    TestApp { server, provider }
}
