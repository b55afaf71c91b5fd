use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// Summoner V4 response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub summoner_level: i64,
    pub profile_icon_id: i64,
    #[serde(default)]
    pub revision_date: i64,
}

// League V4 response (one element per queue)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    #[serde(default)]
    pub league_points: i64,
    pub wins: i64,
    pub losses: i64,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct ChampionCatalogDto {
    pub data: BTreeMap<String, ChampionSummaryDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionSummaryDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
}

// Data Dragon champion/{id}.json, the object under data[id]
#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub lore: String,
    pub allytips: Vec<String>,
    pub enemytips: Vec<String>,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: BTreeMap<String, f64>,
    pub passive: PassiveDto,
    pub spells: Vec<SpellDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageDto {
    pub full: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PassiveDto {
    pub name: String,
    pub description: String,
    pub image: ImageDto,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpellDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub range_burn: String,
    pub cooldown_burn: String,
    pub cost_burn: String,
    #[serde(default)]
    pub resource: Option<String>,
    /// Index 0 is usually `null` upstream.
    #[serde(default)]
    pub effect_burn: Vec<Option<String>>,
    #[serde(default)]
    pub vars: Vec<SpellVarDto>,
    pub image: ImageDto,
}

/// One scaling binding, e.g. `{"link": "spelldamage", "coeff": 0.6, "key": "a1"}`.
#[derive(Debug, Deserialize, Clone)]
pub struct SpellVarDto {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub coeff: Option<Coefficient>,
}

impl SpellVarDto {
    pub fn binds(&self, token: &str) -> bool {
        self.key == token || self.link == token
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coefficient {
    Scalar(serde_json::Number),
    PerRank(Vec<serde_json::Number>),
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Scalar(value) => write!(f, "{}", value),
            Coefficient::PerRank(values) => {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", joined.join("/"))
            }
        }
    }
}
