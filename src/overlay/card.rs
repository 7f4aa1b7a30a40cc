use crate::domain::{DisplayRecord, GameMode};
use crate::rotation::{Frame, ViewState};

/// How a panel participates in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Active,
    SlidingOut,
    SlidingIn,
    Hidden,
}

impl Visibility {
    pub fn for_panel(panel: ViewState, frame: Frame) -> Self {
        if frame.current == panel {
            if frame.is_transitioning() {
                Visibility::SlidingOut
            } else {
                Visibility::Active
            }
        } else if frame.incoming == Some(panel) {
            Visibility::SlidingIn
        } else {
            Visibility::Hidden
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Visibility::Active => "active",
            Visibility::SlidingOut => "active slide-out",
            Visibility::SlidingIn => "active slide-in",
            Visibility::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// Label and value shown by one panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl Panel {
    fn plain(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            tone: Tone::Neutral,
        }
    }
}

/// Presentation rules for a player's overlay card
pub struct PlayerCard<'a> {
    record: &'a DisplayRecord,
    mode: GameMode,
}

impl<'a> PlayerCard<'a> {
    pub fn new(record: &'a DisplayRecord, mode: GameMode) -> Self {
        Self { record, mode }
    }

    pub fn record(&self) -> &DisplayRecord {
        self.record
    }

    pub fn mode_badge(&self) -> &'static str {
        self.mode.badge()
    }

    pub fn flag_url(&self) -> Option<String> {
        self.record
            .country_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(|code| format!("https://flagcdn.com/w40/{}.png", code.to_lowercase()))
    }

    pub fn last_match_text(&self) -> String {
        match self.record.last_diff {
            None => "N/A".to_string(),
            Some(diff) if diff > 0 => format!("+{}", diff),
            Some(diff) => diff.to_string(),
        }
    }

    pub fn last_match_tone(&self) -> Tone {
        match self.record.last_diff {
            Some(diff) if diff > 0 => Tone::Positive,
            Some(diff) if diff < 0 => Tone::Negative,
            _ => Tone::Neutral,
        }
    }

    pub fn average_text(&self) -> String {
        self.record
            .average_score
            .map_or_else(|| "0".to_string(), |avg| avg.to_string())
    }

    pub fn rank_text(&self) -> String {
        match self.record.overall_rank {
            Some(rank) => format!("#{}", rank),
            None => "#N/A".to_string(),
        }
    }

    /// Style class for the rank icon, e.g. "rank-grandmaster"
    pub fn rank_class(&self) -> Option<String> {
        self.record
            .rank
            .as_deref()
            .map(|rank| format!("rank-{}", rank.to_lowercase().replacen(' ', "", 1)))
    }

    pub fn panel(&self, view: ViewState) -> Panel {
        match view {
            ViewState::Default => Panel::plain(
                &self.record.name,
                self.record.mmr.map(|mmr| mmr.to_string()).unwrap_or_default(),
            ),
            ViewState::Events => Panel::plain(
                "Events",
                self.record
                    .events_played
                    .map_or_else(|| "N/A".to_string(), |events| events.to_string()),
            ),
            ViewState::WinLoss => Panel::plain("AVG", self.average_text()),
            ViewState::LastMatch => Panel {
                label: "Last Match".to_string(),
                value: self.last_match_text(),
                tone: self.last_match_tone(),
            },
            ViewState::Rank => Panel::plain("Rank", self.rank_text()),
        }
    }
}
