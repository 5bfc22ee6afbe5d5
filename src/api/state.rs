use std::sync::Arc;

use crate::services::VideoSearch;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub video_search: Arc<VideoSearch>,
}

impl AppState {
    pub fn new(video_search: VideoSearch) -> Self {
        Self {
            video_search: Arc::new(video_search),
        }
    }
}
