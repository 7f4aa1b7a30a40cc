use super::models::MmrChange;

/// Events that came from a scored table, in upstream (most recent first) order.
pub fn table_events(changes: &[MmrChange]) -> Vec<&MmrChange> {
    changes.iter().filter(|c| c.is_table()).collect()
}

/// Mean of every partner score across the given events, to two decimals.
pub fn partner_average(events: &[&MmrChange]) -> Option<f64> {
    let scores: Vec<f64> = events
        .iter()
        .flat_map(|e| e.partner_scores.iter().copied())
        .collect();

    if scores.is_empty() {
        return None;
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Some(round_to_hundredths(mean))
}

pub fn last_match_delta(events: &[&MmrChange]) -> Option<i32> {
    events.first().and_then(|e| e.mmr_delta)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
