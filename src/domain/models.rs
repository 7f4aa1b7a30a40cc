use serde::{Deserialize, Deserializer, Serialize};

// --- API Response Structures ---

/// Raw player details response from the Lounge API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailsResponse {
    pub name: String,
    #[serde(default)]
    pub mmr: Option<i32>,
    #[serde(default)]
    pub max_mmr: Option<i32>,
    #[serde(default)]
    pub overall_rank: Option<u32>,
    #[serde(default)]
    pub events_played: Option<u32>,
    #[serde(default)]
    pub win_rate: Option<f64>,
    #[serde(default)]
    pub win_loss_last_ten: Option<String>,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub average_last_ten: Option<f64>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mmr_changes: Vec<MmrChange>,
}

/// One rating-affecting event, most recent first
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MmrChange {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub partner_scores: Vec<f64>,
    #[serde(default)]
    pub mmr_delta: Option<i32>,
}

impl MmrChange {
    pub fn is_table(&self) -> bool {
        self.reason.as_deref() == Some("Table")
    }
}

// The Lounge sends `null` for empty lists as often as it omits them.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Display Structures ---

/// UI-ready projection of a player's Lounge stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub name: String,
    pub mmr: Option<i32>,
    pub max_mmr: Option<i32>,
    pub overall_rank: Option<u32>,
    pub events_played: Option<u32>,
    pub win_rate: Option<f64>,
    pub win_loss_last_ten: Option<String>,
    pub average_score: Option<f64>,
    pub average_last_ten: Option<f64>,
    pub rank: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub partner_avg: Option<f64>,
    pub last_diff: Option<i32>,
    #[serde(
        rename = "rank_icon_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rank_icon_url: Option<String>,
}

#[cfg(test)]
impl DisplayRecord {
    pub fn sample(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mmr: Some(8000),
            max_mmr: Some(8500),
            overall_rank: Some(42),
            events_played: Some(120),
            win_rate: Some(0.55),
            win_loss_last_ten: Some("6-4".to_string()),
            average_score: Some(78.5),
            average_last_ten: Some(81.2),
            rank: Some("Diamond".to_string()),
            country_code: Some("DE".to_string()),
            country_name: Some("Germany".to_string()),
            partner_avg: Some(74.25),
            last_diff: Some(31),
            rank_icon_url: Some("/images/diamond.png".to_string()),
        }
    }
}
