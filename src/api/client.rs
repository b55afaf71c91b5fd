use crate::config::Config;
use crate::error::AppError;

use super::endpoints;
use super::http::HttpFetcher;
use super::models::*;

/// The live API calls behind a summoner lookup.
pub trait SummonerApi {
    fn get_summoner_by_name(&self, name: &str) -> Result<Option<SummonerDto>, AppError>;

    fn get_league_entries(&self, summoner_id: &str)
        -> Result<Option<Vec<LeagueEntryDto>>, AppError>;

    fn get_matchlist(&self, account_id: &str) -> Result<Option<serde_json::Value>, AppError>;
}

/// Adapter for the live gameplay API (summoner, league and match endpoints).
pub struct RiotApiClient {
    fetcher: HttpFetcher,
    api_key: String,
    region: String,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(RiotApiClient {
            fetcher: HttpFetcher::new(config.timeout),
            api_key: config.require_api_key()?.to_string(),
            region: config.region.clone(),
        })
    }

    fn fetch(&self, url: &str) -> Result<Option<String>, AppError> {
        self.fetcher.get(url, Some(&self.api_key))
    }
}

impl SummonerApi for RiotApiClient {
    fn get_summoner_by_name(&self, name: &str) -> Result<Option<SummonerDto>, AppError> {
        let url = endpoints::summoner_by_name(&self.region, name)?;

        match self.fetch(&url)? {
            Some(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| AppError::MalformedResource(format!("summoner payload: {}", e))),
            None => Ok(None),
        }
    }

    fn get_league_entries(
        &self,
        summoner_id: &str,
    ) -> Result<Option<Vec<LeagueEntryDto>>, AppError> {
        let url = endpoints::league_entries_by_summoner(&self.region, summoner_id)?;

        match self.fetch(&url)? {
            Some(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| AppError::JsonError(e.to_string())),
            None => Ok(None),
        }
    }

    // The match list stays opaque; the display layer reads what it needs.
    fn get_matchlist(&self, account_id: &str) -> Result<Option<serde_json::Value>, AppError> {
        let url = endpoints::matchlist_by_account(&self.region, account_id)?;

        match self.fetch(&url)? {
            Some(body) => serde_json::from_str(&body)
                .map(Some)
                .map_err(|e| AppError::JsonError(e.to_string())),
            None => Ok(None),
        }
    }
}
