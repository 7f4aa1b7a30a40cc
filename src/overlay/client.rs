use anyhow::{Context, Result, bail};
use log::{info, warn};
use urlencoding::encode;

use crate::domain::DisplayRecord;
use crate::http::HttpClient;

pub const PLAYER_NOT_FOUND: &str = "Player not found";

const USER_AGENT: &str = "LoungeOverlay/1.0";
const TIMEOUT_SECS: u64 = 10;

/// Where the overlay is in fetching its player
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(DisplayRecord),
    Failed(String),
}

impl LoadState {
    /// Panels only rotate once a record has loaded.
    pub fn rotates(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}

/// Fetches the display record from the overlay server's player endpoint
pub struct OverlayClient {
    client: HttpClient,
    server_url: String,
}

impl OverlayClient {
    pub fn new(server_url: &str) -> Result<Self> {
        let client = HttpClient::new(USER_AGENT, TIMEOUT_SECS)?;
        Ok(Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Every kind of failure ends up as the same "Player not found" state.
    pub async fn load(&self, name: &str, game: &str) -> LoadState {
        match self.fetch_player(name, game).await {
            Ok(record) => {
                info!("Loaded stats for {}", record.name);
                LoadState::Ready(record)
            }
            Err(e) => {
                warn!("Failed to load player {}: {:#}", name, e);
                LoadState::Failed(PLAYER_NOT_FOUND.to_string())
            }
        }
    }

    async fn fetch_player(&self, name: &str, game: &str) -> Result<DisplayRecord> {
        let url = self.build_player_url(name, game);
        let response = self
            .client
            .get(&url)
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))?;

        if !response.status().is_success() {
            bail!("Server returned status: {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse player record")
    }

    fn build_player_url(&self, name: &str, game: &str) -> String {
        format!(
            "{}/api/player?name={}&game={}",
            self.server_url,
            encode(name),
            encode(game)
        )
    }
}
