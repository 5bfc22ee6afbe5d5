use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kaala_api::{
    api::{create_router, AppState},
    config::Config,
    services::{providers::youtube::YouTubeProvider, VideoSearch},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kaala_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(app_name = %config.app_name, "Starting video search service");

    let provider = YouTubeProvider::new(
        config.youtube_api_key.clone(),
        config.youtube_api_url.clone(),
    );
    let video_search = VideoSearch::new(Arc::new(provider), config.max_results);

    let app = create_router(AppState::new(video_search));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
