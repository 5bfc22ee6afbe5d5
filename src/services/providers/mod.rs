/// Search provider abstraction
///
/// The pipeline talks to the video-search service through this trait so the
/// transport can be swapped for a stub in tests. Exactly one call is made per
/// pipeline invocation; retries, timeouts and rate-limit handling are the
/// provider's business, not the pipeline's.
use crate::{
    error::AppResult,
    models::{SearchRequest, SearchResultItem},
};

pub mod youtube;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Execute one search call and return the raw result list
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<SearchResultItem>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
