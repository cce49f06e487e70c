//! Listing, search and playback integration tests.
//!
//! Run with: `cargo test -p vimeo-gateway-api --test videos_test`

mod helpers;

use axum::http::StatusCode;
use helpers::{api_path, sample_video, setup_test_app, Call, FakeProvider};
use serde_json::{json, Value};
use vimeo_gateway_client::ProviderError;
use vimeo_gateway_core::models::SortOrder;

#[tokio::test]
async fn test_health_reports_version() {
    let app = setup_test_app(FakeProvider::new());

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_list_uses_default_pagination() {
    let app = setup_test_app(FakeProvider::new());

    let response = app.client().get(&api_path("/videos")).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 25);
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"][0]["id"], "1");
    assert_eq!(
        app.calls(),
        vec![Call::List {
            page: 1,
            per_page: 25,
            sort: None
        }]
    );
}

#[tokio::test]
async fn test_list_forwards_pagination_unchanged() {
    let app = setup_test_app(FakeProvider::new());

    for (page, per_page) in [(1u32, 1u32), (3, 50), (17, 100)] {
        let response = app
            .client()
            .get(&api_path("/videos"))
            .add_query_param("page", page)
            .add_query_param("per_page", per_page)
            .await;

        assert_eq!(response.status_code(), 200);
        let body: Value = response.json();
        assert_eq!(body["page"], page);
        assert_eq!(body["per_page"], per_page);
    }

    let forwarded: Vec<(u32, u32)> = app
        .calls()
        .into_iter()
        .map(|call| match call {
            Call::List { page, per_page, .. } => (page, per_page),
            other => panic!("Unexpected call {:?}", other),
        })
        .collect();
    assert_eq!(forwarded, vec![(1, 1), (3, 50), (17, 100)]);
}

#[tokio::test]
async fn test_list_forwards_sort() {
    let app = setup_test_app(FakeProvider::new());

    let response = app
        .client()
        .get(&api_path("/videos"))
        .add_query_param("sort", "alphabetical")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        app.calls(),
        vec![Call::List {
            page: 1,
            per_page: 25,
            sort: Some(SortOrder::Alphabetical)
        }]
    );
}

#[tokio::test]
async fn test_list_rejects_invalid_parameters() {
    let app = setup_test_app(FakeProvider::new());

    for (key, value) in [
        ("page", "0"),
        ("page", "-1"),
        ("page", "abc"),
        ("per_page", "0"),
        ("per_page", "101"),
        ("sort", "plays"),
    ] {
        let response = app
            .client()
            .get(&api_path("/videos"))
            .add_query_param(key, value)
            .await;

        assert_eq!(response.status_code(), 400, "{}={}", key, value);
        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["detail"].as_str().is_some());
    }

    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_search_trims_and_forwards_query() {
    let app = setup_test_app(FakeProvider::new());

    let response = app
        .client()
        .get(&api_path("/videos/search"))
        .add_query_param("q", "  launch video ")
        .add_query_param("per_page", 10)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        app.calls(),
        vec![Call::Search {
            query: "launch video".to_string(),
            page: 1,
            per_page: 10
        }]
    );
}

#[tokio::test]
async fn test_search_empty_query_rejected_before_provider_call() {
    let app = setup_test_app(FakeProvider::new());

    for q in ["", " ", "\t  \n"] {
        let response = app
            .client()
            .get(&api_path("/videos/search"))
            .add_query_param("q", q)
            .await;
        assert_eq!(response.status_code(), 400, "q={:?}", q);
        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let response = app.client().get(&api_path("/videos/search")).await;
    assert_eq!(response.status_code(), 400);

    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_play_json_mode_by_default() {
    let app = setup_test_app(FakeProvider::new());

    let response = app.client().get(&api_path("/videos/123/play")).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"link": "https://example.com/v/123", "embed_html": null})
    );
    assert_eq!(
        app.calls(),
        vec![Call::Get {
            id: "123".to_string()
        }]
    );
}

#[tokio::test]
async fn test_play_json_includes_embed() {
    let app = setup_test_app(FakeProvider::new().with_video(|id| {
        let mut video = sample_video(id);
        video.embed_html = Some("<iframe src=\"https://player.vimeo.com/video/5\"></iframe>".into());
        Ok(video)
    }));

    let response = app
        .client()
        .get(&api_path("/videos/5/play"))
        .add_query_param("mode", "json")
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body["embed_html"],
        "<iframe src=\"https://player.vimeo.com/video/5\"></iframe>"
    );
}

#[tokio::test]
async fn test_play_redirect_mode() {
    let app = setup_test_app(FakeProvider::new());

    let response = app
        .client()
        .get(&api_path("/videos/123/play"))
        .add_query_param("mode", "redirect")
        .await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/v/123");
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_play_redirect_without_link_is_upstream_error() {
    let app = setup_test_app(FakeProvider::new().with_video(|id| {
        let mut video = sample_video(id);
        video.link = String::new();
        Ok(video)
    }));

    let response = app
        .client()
        .get(&api_path("/videos/123/play"))
        .add_query_param("mode", "redirect")
        .await;

    assert_eq!(response.status_code(), 502);
    let body: Value = response.json();
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_play_rejects_unknown_mode() {
    let app = setup_test_app(FakeProvider::new());

    let response = app
        .client()
        .get(&api_path("/videos/123/play"))
        .add_query_param("mode", "stream")
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_provider_errors_map_to_statuses() {
    let cases: Vec<(fn() -> ProviderError, u16, &str)> = vec![
        (|| ProviderError::NotFound("gone".into()), 404, "NOT_FOUND"),
        (|| ProviderError::RateLimited("slow".into()), 429, "RATE_LIMITED"),
        (|| ProviderError::Unauthorized("token".into()), 401, "UNAUTHORIZED"),
        (|| ProviderError::Forbidden("scope".into()), 403, "FORBIDDEN"),
        (|| ProviderError::Unavailable("timeout".into()), 503, "SERVICE_UNAVAILABLE"),
        (
            || ProviderError::Upstream {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".into(),
            },
            502,
            "UPSTREAM_ERROR",
        ),
        (
            || ProviderError::InvalidResponse("expected value".into()),
            502,
            "UPSTREAM_ERROR",
        ),
    ];

    for (make_error, status, code) in cases {
        let app = setup_test_app(FakeProvider::new().with_video(move |_| Err(make_error())));

        let response = app.client().get(&api_path("/videos/1/play")).await;

        assert_eq!(response.status_code(), status, "{}", code);
        let body: Value = response.json();
        assert_eq!(body["code"], code);
        assert_eq!(app.calls().len(), 1, "{} must not be retried", code);
    }
}

#[tokio::test]
async fn test_upstream_detail_carries_provider_body() {
    let app = setup_test_app(FakeProvider::new().with_page(|_, _| {
        Err(ProviderError::Upstream {
            status: StatusCode::BAD_REQUEST,
            body: "invalid sort".into(),
        })
    }));

    let response = app.client().get(&api_path("/videos")).await;

    assert_eq!(response.status_code(), 502);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Vimeo API error: invalid sort");
    assert_eq!(body["recoverable"], true);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app(FakeProvider::new());

    let response = app.client().get("/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["paths"]["/v1/videos/{id}/play"].is_object());
    assert!(body["paths"]["/v1/videos/upload"].is_object());
}
