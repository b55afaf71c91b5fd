// URL builders for the live gameplay API and the Data Dragon CDN.

use crate::error::AppError;
use url::Url;

pub const DATA_DRAGON_HOST: &str = "https://ddragon.leagueoflegends.com";

pub fn platform_host(region: &str) -> String {
    format!("https://{}.api.riotgames.com", region)
}

/// Appends each segment to `base`, percent-encoding it as a single path segment.
fn with_segments(base: &str, segments: &[&str]) -> Result<String, AppError> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::ConfigError(format!("invalid base URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("{} cannot take a path", base)))?
        .extend(segments);
    Ok(url.into())
}

pub fn summoner_by_name(region: &str, name: &str) -> Result<String, AppError> {
    with_segments(
        &platform_host(region),
        &["lol", "summoner", "v4", "summoners", "by-name", name],
    )
}

pub fn league_entries_by_summoner(region: &str, summoner_id: &str) -> Result<String, AppError> {
    with_segments(
        &platform_host(region),
        &["lol", "league", "v4", "entries", "by-summoner", summoner_id],
    )
}

pub fn matchlist_by_account(region: &str, account_id: &str) -> Result<String, AppError> {
    with_segments(
        &platform_host(region),
        &["lol", "match", "v4", "matchlists", "by-account", account_id],
    )
}

pub fn champion_catalog(version: &str) -> String {
    format!("{}/cdn/{}/data/en_US/champion.json", DATA_DRAGON_HOST, version)
}

pub fn champion_detail(version: &str, champion_id: &str) -> Result<String, AppError> {
    let file = format!("{}.json", champion_id);
    with_segments(
        DATA_DRAGON_HOST,
        &["cdn", version, "data", "en_US", "champion", &file],
    )
}

pub fn profile_icon_url(version: &str, icon_id: i64) -> String {
    format!("{}/cdn/{}/img/profileicon/{}.png", DATA_DRAGON_HOST, version, icon_id)
}

// Splash art is not versioned on the CDN.
pub fn splash_url(champion_id: &str) -> String {
    format!("{}/cdn/img/champion/splash/{}_0.jpg", DATA_DRAGON_HOST, champion_id)
}

pub fn passive_image_url(version: &str, file: &str) -> String {
    format!("{}/cdn/{}/img/passive/{}", DATA_DRAGON_HOST, version, file)
}

pub fn spell_image_url(version: &str, file: &str) -> String {
    format!("{}/cdn/{}/img/spell/{}", DATA_DRAGON_HOST, version, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summoner_names_are_encoded() {
        assert_eq!(
            summoner_by_name("na1", "Doublelift Jr").unwrap(),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Doublelift%20Jr"
        );
    }

    #[test]
    fn non_ascii_names_are_utf8_encoded() {
        assert_eq!(
            summoner_by_name("euw1", "Hé").unwrap(),
            "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/H%C3%A9"
        );
    }

    #[test]
    fn slashes_stay_inside_one_segment() {
        assert_eq!(
            league_entries_by_summoner("na1", "abc/def").unwrap(),
            "https://na1.api.riotgames.com/lol/league/v4/entries/by-summoner/abc%2Fdef"
        );
    }

    #[test]
    fn bad_region_is_config_error() {
        assert!(matches!(
            matchlist_by_account("na 1", "acct"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn image_urls_follow_cdn_layout() {
        assert_eq!(
            profile_icon_url("10.1.1", 4568),
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/img/profileicon/4568.png"
        );
        assert_eq!(
            splash_url("Amumu"),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Amumu_0.jpg"
        );
        assert_eq!(
            spell_image_url("10.1.1", "BandageToss.png"),
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/img/spell/BandageToss.png"
        );
        assert_eq!(
            passive_image_url("10.1.1", "Amumu_Passive.png"),
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/img/passive/Amumu_Passive.png"
        );
    }

    #[test]
    fn champion_detail_uses_version() {
        assert_eq!(
            champion_detail("10.1.1", "DrMundo").unwrap(),
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/data/en_US/champion/DrMundo.json"
        );
        assert_eq!(
            champion_catalog("10.1.1"),
            "https://ddragon.leagueoflegends.com/cdn/10.1.1/data/en_US/champion.json"
        );
    }
}
