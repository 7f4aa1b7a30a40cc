use std::time::Duration;

use crate::config::RotationSettings;

/// Panels the overlay card can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    Default,
    // Has a panel but is never part of the highlight sequence.
    Events,
    WinLoss,
    Rank,
    LastMatch,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Default => "default",
            ViewState::Events => "events",
            ViewState::WinLoss => "winloss",
            ViewState::Rank => "rank",
            ViewState::LastMatch => "lastmatch",
        }
    }
}

/// Order in which highlight panels take turns with the default panel
pub const HIGHLIGHT_SEQUENCE: [ViewState; 3] =
    [ViewState::LastMatch, ViewState::Rank, ViewState::WinLoss];

/// Rotation state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing(ViewState),
    Transitioning { from: ViewState, to: ViewState },
}

impl Phase {
    pub fn frame(&self) -> Frame {
        match *self {
            Phase::Showing(view) => Frame::showing(view),
            Phase::Transitioning { from, to } => Frame {
                current: from,
                incoming: Some(to),
            },
        }
    }
}

/// What the card displays at one instant: the current panel, plus the panel
/// sliding in while a transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub current: ViewState,
    pub incoming: Option<ViewState>,
}

impl Frame {
    pub fn showing(view: ViewState) -> Self {
        Self {
            current: view,
            incoming: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.incoming.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimings {
    pub default_dwell: Duration,
    pub highlight_dwell: Duration,
    pub transition: Duration,
}

impl From<&RotationSettings> for RotationTimings {
    fn from(settings: &RotationSettings) -> Self {
        Self {
            default_dwell: Duration::from_millis(settings.default_dwell_ms),
            highlight_dwell: Duration::from_millis(settings.highlight_dwell_ms),
            transition: Duration::from_millis(settings.transition_ms),
        }
    }
}

impl Default for RotationTimings {
    fn default() -> Self {
        Self::from(&RotationSettings::default())
    }
}
