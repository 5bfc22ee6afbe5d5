/// YouTube Data API v3 provider
///
/// Issues a single `search.list` call per request. The field projection keeps
/// the response down to what the projector reads; `part` stays `id,snippet`
/// to match it.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{SearchListResponse, SearchRequest, SearchResultItem},
    services::providers::SearchProvider,
};

pub struct YouTubeProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl YouTubeProvider {
    /// Creates a provider from an already-resolved API key and base URL
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Assemble the query string for one search call
    fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("part", "id,snippet".to_string()),
            ("q", request.q.clone()),
            ("regionCode", request.region_code.clone()),
            ("type", SearchRequest::RESOURCE_TYPE.to_string()),
            ("fields", SearchRequest::FIELDS.to_string()),
            ("maxResults", request.max_results.to_string()),
        ];

        if let Some(channel_id) = &request.channel_id {
            params.push(("channelId", channel_id.clone()));
        }

        params
    }
}

#[async_trait::async_trait]
impl SearchProvider for YouTubeProvider {
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchResultItem>> {
        let url = format!("{}/search", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&self.query_params(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Service(format!(
                "YouTube API returned status {}: {}",
                status, body
            )));
        }

        let list: SearchListResponse = response.json().await?;

        tracing::info!(
            query = %request.q,
            region = %request.region_code,
            results = list.items.len(),
            provider = "youtube",
            "Video search completed"
        );

        Ok(list.items)
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}
