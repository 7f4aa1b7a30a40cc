pub mod handlers;
pub mod lounge_client;
pub mod models;
pub mod routes;

pub use lounge_client::LoungeClient;
