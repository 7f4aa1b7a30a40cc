use std::time::Duration;

pub struct CacheSettings {
    pub ttl_ms: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_ms: 60_000 }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

pub struct UpstreamSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://lounge.mkcentral.com".to_string(),
            user_agent: "LoungeOverlay/1.0",
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSettings {
    pub default_dwell_ms: u64,
    pub highlight_dwell_ms: u64,
    pub transition_ms: u64,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            default_dwell_ms: 6000,
            highlight_dwell_ms: 4000,
            transition_ms: 600,
        }
    }
}

pub struct AppConfig {
    pub cache: CacheSettings,
    pub upstream: UpstreamSettings,
    pub rotation: RotationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            cache: CacheSettings::default(),
            upstream: UpstreamSettings::default(),
            rotation: RotationSettings::default(),
        }
    }

    /// Defaults, with `LOUNGE_API_URL` replacing the upstream base URL when set.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(base_url) = std::env::var("LOUNGE_API_URL") {
            config.upstream.base_url = base_url.trim_end_matches('/').to_string();
        }
        config
    }
}
