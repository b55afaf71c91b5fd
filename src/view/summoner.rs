use crate::api::client::SummonerApi;
use crate::api::endpoints;
use crate::api::models::{LeagueEntryDto, SummonerDto};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

pub const SOLO_DUO_QUEUE: &str = "RANKED_SOLO_5x5";
pub const UNRANKED: &str = "UNRANKED";
const NO_RECORD: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RankedStanding {
    Ranked {
        tier: String,
        division: String,
        league_points: i64,
        wins: i64,
        losses: i64,
    },
    Unranked,
}

impl RankedStanding {
    /// Picks the solo/duo entry. A failed fetch, an empty list, or a list
    /// without that queue all mean unranked.
    pub fn from_entries(entries: Option<&[LeagueEntryDto]>) -> Self {
        entries
            .unwrap_or_default()
            .iter()
            .find(|entry| entry.queue_type == SOLO_DUO_QUEUE)
            .map(|entry| RankedStanding::Ranked {
                tier: entry.tier.clone(),
                division: entry.rank.clone(),
                league_points: entry.league_points,
                wins: entry.wins,
                losses: entry.losses,
            })
            .unwrap_or(RankedStanding::Unranked)
    }

    pub fn tier(&self) -> &str {
        match self {
            RankedStanding::Ranked { tier, .. } => tier,
            RankedStanding::Unranked => UNRANKED,
        }
    }

    pub fn division(&self) -> &str {
        match self {
            RankedStanding::Ranked { division, .. } => division,
            RankedStanding::Unranked => UNRANKED,
        }
    }

    pub fn wins(&self) -> String {
        match self {
            RankedStanding::Ranked { wins, .. } => wins.to_string(),
            RankedStanding::Unranked => NO_RECORD.to_string(),
        }
    }

    pub fn losses(&self) -> String {
        match self {
            RankedStanding::Ranked { losses, .. } => losses.to_string(),
            RankedStanding::Unranked => NO_RECORD.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    pub level: i64,
    pub profile_icon_url: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub queue_type: &'static str,
    pub standing: RankedStanding,
    /// Match list exactly as upstream returned it.
    pub matches: Option<Value>,
}

impl PlayerProfile {
    pub fn build(
        summoner: &SummonerDto,
        entries: Option<&[LeagueEntryDto]>,
        matches: Option<Value>,
        data_version: &str,
    ) -> Self {
        PlayerProfile {
            name: summoner.name.clone(),
            level: summoner.summoner_level,
            profile_icon_url: endpoints::profile_icon_url(data_version, summoner.profile_icon_id),
            last_modified: timestamp(summoner.revision_date),
            queue_type: SOLO_DUO_QUEUE,
            standing: RankedStanding::from_entries(entries),
            matches,
        }
    }
}

/// Runs the profile → ranked → match-list chain. The account and summoner
/// ids from the first call feed the other two. Only the first call can fail
/// the lookup; the other two degrade to unranked / no matches.
pub fn lookup_profile<A: SummonerApi>(
    api: &A,
    name: &str,
    data_version: &str,
) -> Result<PlayerProfile, AppError> {
    let summoner = api
        .get_summoner_by_name(name)
        .map_err(|e| e.into_lookup_failure("Summoner", name))?
        .ok_or_else(|| AppError::summoner_not_found(name))?;

    let entries = api.get_league_entries(&summoner.id).unwrap_or_else(|e| {
        tracing::warn!(summoner = %summoner.name, error = %e, "rank fetch failed");
        None
    });
    let matches = api.get_matchlist(&summoner.account_id).unwrap_or_else(|e| {
        tracing::warn!(summoner = %summoner.name, error = %e, "match history fetch failed");
        None
    });

    tracing::info!(
        summoner = %summoner.name,
        ranked_queues = entries.as_ref().map(Vec::len).unwrap_or(0),
        has_matches = matches.is_some(),
        "profile assembled"
    );

    Ok(PlayerProfile::build(
        &summoner,
        entries.as_deref(),
        matches,
        data_version,
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub champion: Option<i64>,
    pub queue: Option<i64>,
    pub lane: String,
    pub role: String,
    pub played_at: Option<DateTime<Utc>>,
}

/// Reads the first `limit` entries of `matches[]`, tolerating missing fields.
pub fn recent_matches(matches: &Value, limit: usize) -> Vec<MatchSummary> {
    let text = |entry: &Value, field: &str| {
        entry
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or("-")
            .to_string()
    };

    matches
        .get("matches")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .take(limit)
                .map(|entry| MatchSummary {
                    champion: entry.get("champion").and_then(Value::as_i64),
                    queue: entry.get("queue").and_then(Value::as_i64),
                    lane: text(entry, "lane"),
                    role: text(entry, "role"),
                    played_at: entry
                        .get("timestamp")
                        .and_then(Value::as_i64)
                        .and_then(timestamp),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn timestamp(millis: i64) -> Option<DateTime<Utc>> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summoner() -> SummonerDto {
        serde_json::from_value(json!({
            "id": "enc-summoner",
            "accountId": "enc-account",
            "puuid": "enc-puuid",
            "name": "Doublelift",
            "profileIconId": 4568,
            "revisionDate": 1578000000000i64,
            "summonerLevel": 212
        }))
        .unwrap()
    }

    fn entry(queue: &str, tier: &str) -> LeagueEntryDto {
        serde_json::from_value(json!({
            "queueType": queue,
            "tier": tier,
            "rank": "II",
            "leaguePoints": 75,
            "wins": 40,
            "losses": 30
        }))
        .unwrap()
    }

    #[test]
    fn empty_entries_are_unranked() {
        let standing = RankedStanding::from_entries(Some(&[][..]));
        assert_eq!(standing, RankedStanding::Unranked);
        assert_eq!(standing.tier(), "UNRANKED");
        assert_eq!(standing.division(), "UNRANKED");
        assert_eq!(standing.wins(), "None");
        assert_eq!(standing.losses(), "None");
    }

    #[test]
    fn failed_rank_fetch_is_unranked() {
        assert_eq!(RankedStanding::from_entries(None), RankedStanding::Unranked);
    }

    #[test]
    fn selects_solo_queue_entry() {
        let entries = vec![entry("RANKED_FLEX_SR", "GOLD"), entry(SOLO_DUO_QUEUE, "DIAMOND")];
        let standing = RankedStanding::from_entries(Some(entries.as_slice()));
        assert_eq!(standing.tier(), "DIAMOND");
        assert_eq!(standing.division(), "II");
        assert_eq!(standing.wins(), "40");
        assert_eq!(standing.losses(), "30");
    }

    #[test]
    fn flex_only_is_unranked() {
        let entries = vec![entry("RANKED_FLEX_SR", "GOLD")];
        assert_eq!(
            RankedStanding::from_entries(Some(entries.as_slice())),
            RankedStanding::Unranked
        );
    }

    #[test]
    fn builds_profile() {
        let profile = PlayerProfile::build(&summoner(), None, None, "10.1.1");
        assert_eq!(profile.name, "Doublelift");
        assert_eq!(profile.level, 212);
        assert_eq!(
            profile.profile_icon_url,
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/img/profileicon/4568.png"
        );
        assert_eq!(profile.queue_type, "RANKED_SOLO_5x5");
        assert!(profile.last_modified.is_some());
        assert!(profile.matches.is_none());
    }

    #[test]
    fn profile_serializes_standing_state() {
        let profile = PlayerProfile::build(&summoner(), Some(&[][..]), None, "10.1.1");
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["standing"]["state"], "unranked");
    }

    #[test]
    fn reads_recent_matches_leniently() {
        let matches = json!({
            "matches": [
                {"champion": 32, "queue": 420, "lane": "JUNGLE", "role": "NONE", "timestamp": 1578000000000i64},
                {"champion": 1},
                {"champion": 2}
            ],
            "totalGames": 3
        });
        let rows = recent_matches(&matches, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].champion, Some(32));
        assert_eq!(rows[0].lane, "JUNGLE");
        assert!(rows[0].played_at.is_some());
        assert_eq!(rows[1].lane, "-");
        assert_eq!(rows[1].played_at, None);
    }

    #[test]
    fn non_matchlist_document_has_no_rows() {
        assert!(recent_matches(&json!({"status": {"status_code": 404}}), 5).is_empty());
    }

    #[derive(Clone, Copy)]
    enum Failure {
        Malformed,
        Transport,
        Throttled,
        Undecodable,
    }

    impl Failure {
        fn error(self) -> AppError {
            match self {
                Failure::Malformed => AppError::MalformedResource("summoner payload".to_string()),
                Failure::Transport => AppError::HttpError("connection reset".to_string()),
                Failure::Throttled => AppError::RateLimited,
                Failure::Undecodable => AppError::JsonError("expected a sequence".to_string()),
            }
        }
    }

    struct StubApi {
        summoner: Result<Option<SummonerDto>, Failure>,
        entries: Result<Option<Vec<LeagueEntryDto>>, Failure>,
        matches: Result<Option<Value>, Failure>,
    }

    impl StubApi {
        fn healthy() -> Self {
            StubApi {
                summoner: Ok(Some(summoner())),
                entries: Ok(Some(vec![entry(SOLO_DUO_QUEUE, "PLATINUM")])),
                matches: Ok(Some(json!({"matches": [{"champion": 32}], "totalGames": 1}))),
            }
        }
    }

    impl SummonerApi for StubApi {
        fn get_summoner_by_name(&self, _name: &str) -> Result<Option<SummonerDto>, AppError> {
            self.summoner.clone().map_err(Failure::error)
        }

        fn get_league_entries(
            &self,
            summoner_id: &str,
        ) -> Result<Option<Vec<LeagueEntryDto>>, AppError> {
            assert_eq!(summoner_id, "enc-summoner");
            self.entries.clone().map_err(Failure::error)
        }

        fn get_matchlist(&self, account_id: &str) -> Result<Option<Value>, AppError> {
            assert_eq!(account_id, "enc-account");
            self.matches.clone().map_err(Failure::error)
        }
    }

    fn assert_summoner_not_found(result: Result<PlayerProfile, AppError>) {
        match result {
            Err(AppError::NotFound { kind, name }) => {
                assert_eq!(kind, "Summoner");
                assert_eq!(name, "Doublelift");
            }
            other => panic!("expected summoner not found, got {:?}", other.map(|p| p.name)),
        }
    }

    #[test]
    fn lookup_chains_ids_into_profile() {
        let profile = lookup_profile(&StubApi::healthy(), "Doublelift", "10.1.1").unwrap();
        assert_eq!(profile.standing.tier(), "PLATINUM");
        assert_eq!(recent_matches(profile.matches.as_ref().unwrap(), 5).len(), 1);
    }

    #[test]
    fn unknown_summoner_is_not_found() {
        let api = StubApi {
            summoner: Ok(None),
            ..StubApi::healthy()
        };
        assert_summoner_not_found(lookup_profile(&api, "Doublelift", "10.1.1"));
    }

    #[test]
    fn malformed_summoner_is_not_found() {
        let api = StubApi {
            summoner: Err(Failure::Malformed),
            ..StubApi::healthy()
        };
        assert_summoner_not_found(lookup_profile(&api, "Doublelift", "10.1.1"));
    }

    #[test]
    fn failed_secondary_fetches_degrade() {
        let api = StubApi {
            entries: Err(Failure::Transport),
            matches: Err(Failure::Throttled),
            ..StubApi::healthy()
        };
        let profile = lookup_profile(&api, "Doublelift", "10.1.1").unwrap();
        assert_eq!(profile.standing, RankedStanding::Unranked);
        assert!(profile.matches.is_none());
        assert_eq!(profile.level, 212);
    }

    #[test]
    fn undecodable_rank_payload_degrades() {
        let api = StubApi {
            entries: Err(Failure::Undecodable),
            ..StubApi::healthy()
        };
        let profile = lookup_profile(&api, "Doublelift", "10.1.1").unwrap();
        assert_eq!(profile.standing.wins(), "None");
        assert!(profile.matches.is_some());
    }
}
