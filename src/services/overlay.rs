use anyhow::{Context, Result};
use log::info;

use crate::domain::GameMode;
use crate::overlay::{LoadState, OverlayClient, PlayerCard, render_frame, render_status};
use crate::rotation::{RotationEngine, RotationTimings};

/// Terminal rendition of the overlay card: load once, then rotate panels
/// until interrupted.
pub struct OverlayService {
    server_url: String,
    name: String,
    game: String,
    timings: RotationTimings,
}

impl OverlayService {
    pub fn new(server_url: String, name: String, game: String, timings: RotationTimings) -> Self {
        Self {
            server_url,
            name,
            game,
            timings,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let client = OverlayClient::new(&self.server_url)?;

        let mut state = LoadState::Loading;
        println!("{}", render_status(&state));

        state = client.load(&self.name, &self.game).await;
        println!("{}", render_status(&state));
        if !state.rotates() {
            return Ok(());
        }

        match &state {
            LoadState::Ready(record) => {
                let mode = GameMode::from_code(Some(self.game.as_str()));
                self.rotate(&PlayerCard::new(record, mode)).await
            }
            _ => Ok(()),
        }
    }

    async fn rotate(&self, card: &PlayerCard<'_>) -> Result<()> {
        let handle = RotationEngine::start(self.timings);
        let mut frames = handle.subscribe();
        println!("{}\n", render_frame(card, handle.frame()));

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let result = loop {
            tokio::select! {
                changed = frames.changed() => {
                    if changed.is_err() {
                        break Ok(());
                    }
                    let frame = *frames.borrow_and_update();
                    println!("{}\n", render_frame(card, frame));
                }
                signal = &mut shutdown => {
                    info!("Interrupted, tearing down overlay");
                    break signal.context("Failed to listen for Ctrl-C");
                }
            }
        };

        handle.stop().await;
        result
    }
}
