mod card;
mod client;
mod render;

pub use card::{Panel, PlayerCard, Tone, Visibility};
pub use client::{LoadState, OverlayClient, PLAYER_NOT_FOUND};
pub use render::{render_frame, render_status};
