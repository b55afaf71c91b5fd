use crate::config::Config;
use crate::error::AppError;
use serde_json::Value;

use super::endpoints;
use super::http::HttpFetcher;
use super::models::{ChampionCatalogDto, ChampionDto};

/// Champion detail lookup against one data version.
pub trait ChampionSource {
    fn version(&self) -> &str;

    fn get_champion(&self, champion_id: &str) -> Result<Option<ChampionDto>, AppError>;
}

/// Adapter for the static game-data CDN. No API key is involved.
pub struct DataDragonClient {
    fetcher: HttpFetcher,
    version: String,
}

impl DataDragonClient {
    pub fn new(config: &Config) -> Self {
        DataDragonClient {
            fetcher: HttpFetcher::new(config.timeout),
            version: config.data_version.clone(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get_champion_catalog(&self) -> Result<ChampionCatalogDto, AppError> {
        let url = endpoints::champion_catalog(&self.version);

        let body = self.fetcher.get(&url, None)?.ok_or_else(|| AppError::NotFound {
            kind: "data version",
            name: self.version.clone(),
        })?;

        serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))
    }
}

impl ChampionSource for DataDragonClient {
    fn version(&self) -> &str {
        &self.version
    }

    fn get_champion(&self, champion_id: &str) -> Result<Option<ChampionDto>, AppError> {
        let url = endpoints::champion_detail(&self.version, champion_id)?;

        match self.fetcher.get(&url, None)? {
            Some(body) => {
                let document: Value =
                    serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;
                extract_champion(document, champion_id)
            }
            None => Ok(None),
        }
    }
}

/// Pulls `data[champion_id]` out of a champion document. A document without
/// that entry is treated as an unknown champion.
pub fn extract_champion(mut document: Value, champion_id: &str) -> Result<Option<ChampionDto>, AppError> {
    let entry = match document
        .get_mut("data")
        .and_then(|data| data.get_mut(champion_id))
    {
        Some(entry) => entry.take(),
        None => return Ok(None),
    };

    serde_json::from_value(entry)
        .map(Some)
        .map_err(|e| AppError::MalformedResource(format!("champion {}: {}", champion_id, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_entry_is_absent() {
        let document = json!({"type": "champion", "data": {"Annie": {}}});
        assert!(extract_champion(document, "Amumu").unwrap().is_none());
    }

    #[test]
    fn incomplete_entry_is_malformed() {
        let document = json!({"data": {"Amumu": {"id": "Amumu", "name": "Amumu"}}});
        assert!(matches!(
            extract_champion(document, "Amumu"),
            Err(AppError::MalformedResource(_))
        ));
    }
}
