use std::time::Duration;

use super::types::{Frame, HIGHLIGHT_SEQUENCE, Phase, RotationTimings, ViewState};

/// Pure rotation state machine: knows how long the current phase lasts and
/// what comes next, but owns no timers.
#[derive(Debug, Clone)]
pub struct Rotation {
    timings: RotationTimings,
    sequence: &'static [ViewState],
    index: usize,
    phase: Phase,
}

impl Rotation {
    pub fn new(timings: RotationTimings) -> Self {
        Self {
            timings,
            sequence: &HIGHLIGHT_SEQUENCE,
            index: 0,
            phase: Phase::Showing(ViewState::Default),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> Frame {
        self.phase.frame()
    }

    /// Highlight panel the next default → highlight transition will bring in
    pub fn next_highlight(&self) -> ViewState {
        self.sequence[self.index]
    }

    /// How long the current phase lasts before `advance` should run
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Transitioning { .. } => self.timings.transition,
            Phase::Showing(ViewState::Default) => self.timings.default_dwell,
            Phase::Showing(_) => self.timings.highlight_dwell,
        }
    }

    pub fn advance(&mut self) -> Frame {
        self.phase = match self.phase {
            Phase::Showing(ViewState::Default) => Phase::Transitioning {
                from: ViewState::Default,
                to: self.next_highlight(),
            },
            Phase::Showing(view) => Phase::Transitioning {
                from: view,
                to: ViewState::Default,
            },
            Phase::Transitioning { to, .. } => {
                if to == ViewState::Default {
                    self.index = (self.index + 1) % self.sequence.len();
                }
                Phase::Showing(to)
            }
        };
        self.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_default() {
        let rotation = Rotation::new(RotationTimings::default());

        assert_eq!(rotation.frame(), Frame::showing(ViewState::Default));
        assert_eq!(rotation.next_delay(), Duration::from_millis(6000));
        assert_eq!(rotation.next_highlight(), ViewState::LastMatch);
    }

    #[test]
    fn test_one_highlight_cycle() {
        let mut rotation = Rotation::new(RotationTimings::default());

        let frame = rotation.advance();
        assert_eq!(frame.current, ViewState::Default);
        assert_eq!(frame.incoming, Some(ViewState::LastMatch));
        assert_eq!(rotation.next_delay(), Duration::from_millis(600));

        assert_eq!(rotation.advance(), Frame::showing(ViewState::LastMatch));
        assert_eq!(rotation.next_delay(), Duration::from_millis(4000));

        let frame = rotation.advance();
        assert_eq!(
            rotation.phase(),
            Phase::Transitioning {
                from: ViewState::LastMatch,
                to: ViewState::Default
            }
        );
        assert!(frame.is_transitioning());
        assert_eq!(rotation.next_delay(), Duration::from_millis(600));

        assert_eq!(rotation.advance(), Frame::showing(ViewState::Default));
        assert_eq!(rotation.next_highlight(), ViewState::Rank);
    }

    #[test]
    fn test_sequence_wraps_and_skips_events() {
        let mut rotation = Rotation::new(RotationTimings::default());
        let mut shown = Vec::new();

        for _ in 0..4 {
            rotation.advance();
            shown.push(rotation.advance().current);
            rotation.advance();
            rotation.advance();
        }

        assert_eq!(
            shown,
            vec![
                ViewState::LastMatch,
                ViewState::Rank,
                ViewState::WinLoss,
                ViewState::LastMatch
            ]
        );
        assert!(!shown.contains(&ViewState::Events));
    }

    #[test]
    fn test_custom_timings() {
        let timings = RotationTimings {
            default_dwell: Duration::from_millis(10),
            highlight_dwell: Duration::from_millis(20),
            transition: Duration::from_millis(1),
        };
        let mut rotation = Rotation::new(timings);

        let delays: Vec<Duration> = (0..4)
            .map(|_| {
                let delay = rotation.next_delay();
                rotation.advance();
                delay
            })
            .collect();

        assert_eq!(
            delays,
            [10, 1, 20, 1].map(Duration::from_millis).to_vec()
        );
    }
}
