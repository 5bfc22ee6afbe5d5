use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use serde_json::{json, Value};

use kaala_api::api::{create_router, AppState};
use kaala_api::error::{AppError, AppResult};
use kaala_api::models::{
    ResourceId, SearchRequest, SearchResultItem, Snippet, Thumbnail, Thumbnails, VIDEO_KIND,
};
use kaala_api::services::{providers::SearchProvider, VideoSearch};

/// Stub provider: records the request it was handed, returns a canned list
struct StubProvider {
    items: Vec<SearchResultItem>,
    error: Option<String>,
    last_request: Arc<Mutex<Option<SearchRequest>>>,
}

#[async_trait::async_trait]
impl SearchProvider for StubProvider {
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchResultItem>> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        if let Some(message) = &self.error {
            return Err(AppError::Service(message.clone()));
        }
        Ok(self.items.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn video_item(video_id: &str, title: &str, thumbnail: &str) -> SearchResultItem {
    SearchResultItem {
        id: ResourceId {
            kind: VIDEO_KIND.to_string(),
            video_id: Some(video_id.to_string()),
        },
        snippet: Some(Snippet {
            title: title.to_string(),
            thumbnails: Some(Thumbnails {
                default: Some(Thumbnail {
                    url: thumbnail.to_string(),
                }),
            }),
        }),
    }
}

fn channel_item() -> SearchResultItem {
    SearchResultItem {
        id: ResourceId {
            kind: "youtube#channel".to_string(),
            video_id: None,
        },
        snippet: None,
    }
}

fn create_test_server(
    items: Vec<SearchResultItem>,
) -> (TestServer, Arc<Mutex<Option<SearchRequest>>>) {
    let last_request = Arc::new(Mutex::new(None));
    let provider = StubProvider {
        items,
        error: None,
        last_request: Arc::clone(&last_request),
    };
    let state = AppState::new(VideoSearch::new(Arc::new(provider), 25));
    let server = TestServer::new(create_router(state)).unwrap();
    (server, last_request)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = create_test_server(vec![]);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_search_end_to_end() {
    let (server, last_request) = create_test_server(vec![
        video_item("abc123", "Test Song", "http://x/default.jpg"),
        channel_item(),
    ]);

    let response = server
        .post("/search")
        .text(
            r#"{"band": "aspirin", "genres": ["hardcore","punk"], "location": "JP", "channelId": "UCy_BjjSacnwR-kEVPU5KOWA"}"#,
        )
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "result": [{
                "videoId": "abc123",
                "Title": "Test Song",
                "Thumbnail": "http://x/default.jpg"
            }]
        })
    );

    let request = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.q, "aspirin hardcore punk");
    assert_eq!(request.region_code, "JP");
    assert_eq!(
        request.channel_id,
        Some("UCy_BjjSacnwR-kEVPU5KOWA".to_string())
    );
    assert_eq!(request.max_results, 25);
}

#[tokio::test]
async fn test_search_no_matches_yields_bare_object() {
    let (server, _) = create_test_server(vec![]);

    let response = server
        .post("/search")
        .text(r#"{"band": "aspirin", "location": "JP"}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "{}");
}

#[tokio::test]
async fn test_search_all_items_filtered_yields_bare_object() {
    let (server, _) = create_test_server(vec![channel_item(), channel_item()]);

    let response = server
        .post("/search")
        .text(r#"{"band": "aspirin", "location": "JP"}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "{}");
}

#[tokio::test]
async fn test_search_malformed_query_is_bad_request() {
    let (server, last_request) = create_test_server(vec![]);

    let response = server.post("/search").text("not json").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    // parser failed, so the provider was never called
    assert!(last_request.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_search_max_results_override() {
    let (server, last_request) = create_test_server(vec![]);

    let response = server
        .post("/search?maxResults=5")
        .text(r#"{"band": "aspirin", "location": "JP"}"#)
        .await;

    response.assert_status_ok();
    let request = last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.max_results, 5);
}

#[tokio::test]
async fn test_search_service_error_is_bad_gateway() {
    let last_request = Arc::new(Mutex::new(None));
    let provider = StubProvider {
        items: vec![],
        error: Some("quota exceeded".to_string()),
        last_request: Arc::clone(&last_request),
    };
    let state = AppState::new(VideoSearch::new(Arc::new(provider), 25));
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/search")
        .text(r#"{"band": "aspirin", "location": "JP"}"#)
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("quota exceeded"));
}
