use anyhow::Result;
use log::{info, warn};
use urlencoding::encode;

use crate::config::UpstreamSettings;
use crate::domain::{GameMode, PlayerDetailsResponse};
use crate::errors::UpstreamError;
use crate::http::HttpClient;
use crate::services::aggregator::PlayerSource;

/// MK Lounge API client
pub struct LoungeClient {
    client: HttpClient,
    base_url: String,
}

impl LoungeClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch player details for one game mode. No retries.
    pub async fn fetch_player_details(
        &self,
        name: &str,
        mode: GameMode,
    ) -> Result<PlayerDetailsResponse, UpstreamError> {
        let url = self.build_player_details_url(name, mode);
        info!("Fetching player details from {}", url);

        let response = self
            .client
            .get(&url)
            .await
            .map_err(UpstreamError::Transport)?;

        if !response.status().is_success() {
            warn!("Lounge API returned {} for {}", response.status(), name);
            return Err(UpstreamError::Status(response.status()));
        }

        response.json().await.map_err(UpstreamError::Decode)
    }

    // --- Helper Methods ---

    fn build_player_details_url(&self, name: &str, mode: GameMode) -> String {
        format!(
            "{}/api/player/details?name={}&game={}",
            self.base_url,
            encode(name),
            mode.upstream_id()
        )
    }
}

impl PlayerSource for LoungeClient {
    async fn fetch_details(
        &self,
        name: &str,
        mode: GameMode,
    ) -> Result<PlayerDetailsResponse, UpstreamError> {
        self.fetch_player_details(name, mode).await
    }
}
