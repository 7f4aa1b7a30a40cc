use log::info;
use std::future::Future;
use std::sync::Arc;

use crate::cache::PlayerCache;
use crate::domain::{
    DisplayRecord, GameMode, PlayerDetailsResponse, PlayerKey, last_match_delta,
    partner_average, rank_icon_url, table_events,
};
use crate::errors::{ResolveError, UpstreamError};

/// Where raw player details come from
pub trait PlayerSource: Send + Sync {
    fn fetch_details(
        &self,
        name: &str,
        mode: GameMode,
    ) -> impl Future<Output = Result<PlayerDetailsResponse, UpstreamError>> + Send;
}

/// Resolves a player lookup into a display record, going upstream only when
/// the cache has nothing fresh for the key.
pub struct PlayerAggregator<S> {
    source: S,
    cache: PlayerCache,
}

impl<S: PlayerSource> PlayerAggregator<S> {
    pub fn new(source: S, cache: PlayerCache) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &PlayerCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve(
        &self,
        name: Option<&str>,
        mode_code: Option<&str>,
    ) -> Result<Arc<DisplayRecord>, ResolveError> {
        let name = name
            .filter(|name| !name.is_empty())
            .ok_or(ResolveError::Validation)?;
        let mode = GameMode::from_code(mode_code);
        let key = PlayerKey::new(name, mode);

        if let Some(record) = self.cache.get_fresh(&key) {
            return Ok(record);
        }

        info!("Fetching Lounge details for {}", key);
        let details = self.source.fetch_details(name, mode).await?;
        let record = Arc::new(build_display_record(details));

        self.cache.put(key, Arc::clone(&record));
        Ok(record)
    }
}

pub fn build_display_record(details: PlayerDetailsResponse) -> DisplayRecord {
    let events = table_events(&details.mmr_changes);
    let partner_avg = partner_average(&events);
    let last_diff = last_match_delta(&events);
    let icon_url = details
        .rank
        .as_deref()
        .and_then(rank_icon_url)
        .map(str::to_string);

    DisplayRecord {
        name: details.name,
        mmr: details.mmr,
        max_mmr: details.max_mmr,
        overall_rank: details.overall_rank,
        events_played: details.events_played,
        win_rate: details.win_rate,
        win_loss_last_ten: details.win_loss_last_ten,
        average_score: details.average_score,
        average_last_ten: details.average_last_ten,
        rank: details.rank,
        country_code: details.country_code,
        country_name: details.country_name,
        partner_avg,
        last_diff,
        rank_icon_url: icon_url,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeSource, julian_payload};
    use super::*;
    use reqwest::StatusCode;
    use std::time::Duration;

    fn aggregator(source: FakeSource) -> PlayerAggregator<FakeSource> {
        PlayerAggregator::new(source, PlayerCache::new(Duration::from_millis(60_000)))
    }

    #[tokio::test]
    async fn test_resolve_builds_display_record() {
        let aggregator = aggregator(FakeSource::returning(julian_payload()));

        let record = aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();

        assert_eq!(record.name, "Julian");
        assert_eq!(record.mmr, Some(9120));
        assert_eq!(record.partner_avg, Some(2.0));
        assert_eq!(record.last_diff, Some(45));
        assert_eq!(record.rank_icon_url.as_deref(), Some("/images/grandmaster.png"));
        assert_eq!(record.win_loss_last_ten.as_deref(), Some("7-3"));
        assert_eq!(
            aggregator.source.requests.lock().unwrap()[0],
            ("Julian".to_string(), GameMode::TwelvePlayer)
        );
    }

    #[tokio::test]
    async fn test_name_case_shares_cache_entry() {
        let aggregator = aggregator(FakeSource::returning(julian_payload()));

        for name in ["Julian", "julian", "JULIAN"] {
            aggregator.resolve(Some(name), Some("12p")).await.unwrap();
        }

        assert_eq!(aggregator.source.call_count(), 1);
        assert_eq!(aggregator.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_modes_are_cached_separately() {
        let aggregator = aggregator(FakeSource::returning(julian_payload()));

        aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();
        aggregator.resolve(Some("Julian"), Some("24p")).await.unwrap();
        aggregator.resolve(Some("Julian"), Some("bogus")).await.unwrap();
        aggregator.resolve(Some("Julian"), None).await.unwrap();

        assert_eq!(aggregator.source.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refetches_once_after_ttl() {
        let aggregator = aggregator(FakeSource::returning(julian_payload()));

        aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();
        tokio::time::advance(Duration::from_millis(30_000)).await;
        aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();
        assert_eq!(aggregator.source.call_count(), 1);

        tokio::time::advance(Duration::from_millis(30_000)).await;
        aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();
        aggregator.resolve(Some("julian"), Some("12p")).await.unwrap();
        assert_eq!(aggregator.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_name_skips_upstream() {
        let aggregator = aggregator(FakeSource::returning(julian_payload()));

        let missing = aggregator.resolve(None, Some("12p")).await;
        let empty = aggregator.resolve(Some(""), Some("12p")).await;

        assert!(matches!(missing, Err(ResolveError::Validation)));
        assert!(matches!(empty, Err(ResolveError::Validation)));
        assert_eq!(aggregator.source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_not_cached() {
        let aggregator = aggregator(FakeSource::failing(StatusCode::NOT_FOUND));

        let result = aggregator.resolve(Some("Nobody"), None).await;

        assert!(matches!(
            result,
            Err(ResolveError::Upstream(UpstreamError::Status(StatusCode::NOT_FOUND)))
        ));
        assert!(aggregator.cache().is_empty());

        aggregator.resolve(Some("Nobody"), None).await.unwrap_err();
        assert_eq!(aggregator.source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_null_lists_still_resolve() {
        let aggregator = aggregator(FakeSource::returning(serde_json::json!({
            "name": "Julian",
            "rank": "Gold",
            "mmrChanges": null
        })));

        let record = aggregator.resolve(Some("Julian"), Some("12p")).await.unwrap();

        assert_eq!(record.partner_avg, None);
        assert_eq!(record.last_diff, None);
        assert_eq!(record.rank_icon_url.as_deref(), Some("/images/gold.png"));
        assert_eq!(aggregator.cache().len(), 1);
    }

    #[test]
    fn test_sparse_details_pass_through() {
        let details: PlayerDetailsResponse = serde_json::from_value(serde_json::json!({
            "name": "Newcomer",
            "rank": "Iron",
            "mmrChanges": [{ "reason": "Placement", "mmrDelta": 2000 }]
        }))
        .unwrap();

        let record = build_display_record(details);

        assert_eq!(record.name, "Newcomer");
        assert_eq!(record.partner_avg, None);
        assert_eq!(record.last_diff, None);
        assert_eq!(record.rank_icon_url, None);
        assert_eq!(record.rank.as_deref(), Some("Iron"));
    }
}
