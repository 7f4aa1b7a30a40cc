pub mod settings;

pub use settings::{AppConfig, CacheSettings, RotationSettings, UpstreamSettings};
