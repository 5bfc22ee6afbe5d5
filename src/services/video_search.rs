use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Query, SearchOutput, SearchRequest, SearchResultItem, VideoRecord, VIDEO_KIND},
    services::providers::SearchProvider,
};

/// The search pipeline: decode the query document, build the outbound
/// request, call the provider, project the result list.
///
/// Stateless between invocations apart from the configured result size,
/// which is set once at construction and read on each call.
pub struct VideoSearch {
    provider: Arc<dyn SearchProvider>,
    result_size: u32,
}

impl VideoSearch {
    pub fn new(provider: Arc<dyn SearchProvider>, result_size: u32) -> Self {
        Self {
            provider,
            result_size,
        }
    }

    /// Run the pipeline for one raw query document. `result_size` overrides
    /// the configured limit for this call only.
    pub async fn run(
        &self,
        raw_query: &str,
        result_size: Option<u32>,
    ) -> AppResult<SearchOutput> {
        let query = Query::from_json(raw_query)?;
        let request =
            SearchRequest::from_query(&query, result_size.unwrap_or(self.result_size));

        let items = self.provider.search(&request).await?;

        tracing::debug!(
            provider = self.provider.name(),
            items = items.len(),
            "Projecting result list"
        );

        project(items)
    }
}

/// Filter the result list to video-kind items and project each into the
/// output record shape, preserving the service's order.
///
/// Zero survivors (empty input included) produce the bare `{}` document, not
/// an empty array. A video-kind item missing its id, snippet or default
/// thumbnail is a malformed service response and is reported, not skipped.
pub fn project(items: Vec<SearchResultItem>) -> AppResult<SearchOutput> {
    let mut records = Vec::new();

    for item in items {
        if item.id.kind != VIDEO_KIND {
            continue;
        }

        let video_id = item
            .id
            .video_id
            .ok_or_else(|| AppError::Projection("video item missing videoId".to_string()))?;
        let snippet = item.snippet.ok_or_else(|| {
            AppError::Projection(format!("video {} missing snippet", video_id))
        })?;
        let thumbnail = snippet
            .thumbnails
            .and_then(|t| t.default)
            .ok_or_else(|| {
                AppError::Projection(format!("video {} missing default thumbnail", video_id))
            })?;

        records.push(VideoRecord {
            video_id,
            title: snippet.title,
            thumbnail: thumbnail.url,
        });
    }

    if records.is_empty() {
        return Ok(SearchOutput::default());
    }

    Ok(SearchOutput {
        result: Some(records),
    })
}
