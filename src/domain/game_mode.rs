use std::fmt;

/// Lounge game mode, keyed by the short code the overlay sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    TwelvePlayer,
    TwentyFourPlayer,
}

impl GameMode {
    /// Unknown or missing codes fall back to 24p.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("12p") => GameMode::TwelvePlayer,
            _ => GameMode::TwentyFourPlayer,
        }
    }

    pub fn upstream_id(&self) -> &'static str {
        match self {
            GameMode::TwelvePlayer => "mkworld12p",
            GameMode::TwentyFourPlayer => "mkworld24p",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            GameMode::TwelvePlayer => "12P",
            GameMode::TwentyFourPlayer => "24P",
        }
    }
}

/// Cache identity of a player lookup: name is compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerKey {
    name: String,
    mode: GameMode,
}

impl PlayerKey {
    pub fn new(name: &str, mode: GameMode) -> Self {
        Self {
            name: name.to_lowercase(),
            mode,
        }
    }
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.mode.upstream_id())
    }
}
