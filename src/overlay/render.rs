use colored::{ColoredString, Colorize};

use super::card::{Panel, PlayerCard, Tone, Visibility};
use super::client::LoadState;
use crate::rotation::{Frame, ViewState};

const PANEL_ORDER: [ViewState; 5] = [
    ViewState::Default,
    ViewState::WinLoss,
    ViewState::LastMatch,
    ViewState::Rank,
    ViewState::Events,
];

/// Status line shown while loading, on failure, and once the player is in.
pub fn render_status(state: &LoadState) -> String {
    match state {
        LoadState::Loading => "Loading Stats...".dimmed().to_string(),
        LoadState::Failed(message) => message.red().bold().to_string(),
        LoadState::Ready(record) => format!("Loaded {}", record.name.bold()),
    }
}

/// Text rendering of the card for one frame; hidden panels are left out.
pub fn render_frame(card: &PlayerCard<'_>, frame: Frame) -> String {
    let mut lines = vec![render_header(card)];

    for view in PANEL_ORDER {
        let visibility = Visibility::for_panel(view, frame);
        if visibility == Visibility::Hidden {
            continue;
        }
        let panel = card.panel(view);
        lines.push(format!(
            "  {:<16} | {}",
            visibility.class(),
            render_panel(card, view, &panel)
        ));
    }

    lines.join("\n")
}

fn render_header(card: &PlayerCard<'_>) -> String {
    let mut header = format!("[{}]", card.mode_badge()).cyan().to_string();
    if let Some(rank) = card.record().rank.as_deref() {
        header.push(' ');
        header.push_str(&rank.bold().to_string());
    }
    if let Some(icon) = card.record().rank_icon_url.as_deref() {
        match card.rank_class() {
            Some(class) => header.push_str(&format!(" ({} .{})", icon, class)),
            None => header.push_str(&format!(" ({})", icon)),
        }
    }
    header
}

fn render_panel(card: &PlayerCard<'_>, view: ViewState, panel: &Panel) -> String {
    let value = toned(&panel.value, panel.tone);
    match (view, card.flag_url()) {
        (ViewState::Default, Some(flag)) => {
            format!("{} [{}] {}", panel.label.bold(), flag, value)
        }
        (ViewState::Default, None) => format!("{} {}", panel.label.bold(), value),
        _ => format!("{} {}", panel.label, value),
    }
}

fn toned(value: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Positive => value.green(),
        Tone::Negative => value.red(),
        Tone::Neutral => value.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisplayRecord, GameMode};

    #[test]
    fn test_render_steady_frame() {
        colored::control::set_override(false);
        let record = DisplayRecord::sample("Julian");
        let card = PlayerCard::new(&record, GameMode::TwelvePlayer);

        let text = render_frame(&card, Frame::showing(ViewState::Default));

        assert_eq!(
            text,
            "[12P] Diamond (/images/diamond.png .rank-diamond)\n  \
             active           | Julian [https://flagcdn.com/w40/de.png] 8000"
        );
    }

    #[test]
    fn test_render_transition_shows_both_panels() {
        colored::control::set_override(false);
        let record = DisplayRecord::sample("Julian");
        let card = PlayerCard::new(&record, GameMode::TwelvePlayer);
        let frame = Frame {
            current: ViewState::LastMatch,
            incoming: Some(ViewState::Default),
        };

        let text = render_frame(&card, frame);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  active slide-in "));
        assert!(lines[2].ends_with("| Last Match +31"));
    }

    #[test]
    fn test_render_status_lines() {
        colored::control::set_override(false);
        let failed = LoadState::Failed("Player not found".to_string());
        let ready = LoadState::Ready(DisplayRecord::sample("Julian"));

        assert_eq!(render_status(&LoadState::Loading), "Loading Stats...");
        assert_eq!(render_status(&failed), "Player not found");
        assert_eq!(render_status(&ready), "Loaded Julian");
    }

    #[test]
    fn test_render_header_carries_rank_class() {
        colored::control::set_override(false);
        let mut record = DisplayRecord::sample("Julian");
        record.rank = Some("Grand Master".to_string());
        record.rank_icon_url = Some("/images/grandmaster.png".to_string());
        let card = PlayerCard::new(&record, GameMode::TwelvePlayer);

        let text = render_frame(&card, Frame::showing(ViewState::Rank));

        assert_eq!(
            text.lines().next(),
            Some("[12P] Grand Master (/images/grandmaster.png .rank-grandmaster)")
        );
    }
}
