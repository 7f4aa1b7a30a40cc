use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::LoungeClient;
use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::PlayerCache;
use crate::config::AppConfig;
use crate::services::aggregator::PlayerAggregator;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let client = LoungeClient::new(&self.config.upstream)?;
        let cache = PlayerCache::new(self.config.cache.ttl());

        let state = Arc::new(AppState {
            aggregator: PlayerAggregator::new(client, cache),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!(
            "Server listening on {} (upstream {})",
            addr, self.config.upstream.base_url
        );

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
