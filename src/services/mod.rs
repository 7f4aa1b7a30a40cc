pub mod aggregator;
pub mod overlay;
pub mod server;

pub use aggregator::{PlayerAggregator, PlayerSource};
pub use overlay::OverlayService;
pub use server::ServerService;
