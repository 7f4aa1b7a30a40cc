pub mod derived;
pub mod game_mode;
pub mod models;
pub mod rank;

pub use derived::{last_match_delta, partner_average, table_events};
pub use game_mode::{GameMode, PlayerKey};
pub use models::*;
pub use rank::{RankTier, rank_icon_url};
