use crate::api::data_dragon::ChampionSource;
use crate::api::endpoints;
use crate::api::models::{ChampionCatalogDto, ChampionDto, SpellDto};
use crate::error::AppError;
use crate::resolve::cost::ResourceKind;
use crate::resolve::markup::strip_markup;
use crate::resolve::resolve_ability;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 4] = [AbilitySlot::Q, AbilitySlot::W, AbilitySlot::E, AbilitySlot::R];
}

impl fmt::Display for AbilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            AbilitySlot::Q => "Q",
            AbilitySlot::W => "W",
            AbilitySlot::E => "E",
            AbilitySlot::R => "R",
        };
        f.write_str(key)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AbilityView {
    pub slot: AbilitySlot,
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub tooltip: String,
    pub range: String,
    pub cooldown: String,
    pub cost: String,
}

impl AbilityView {
    fn build(slot: AbilitySlot, spell: &SpellDto, kind: &ResourceKind, data_version: &str) -> Self {
        let resolved = resolve_ability(kind, spell);
        AbilityView {
            slot,
            id: spell.id.clone(),
            name: spell.name.clone(),
            image_url: endpoints::spell_image_url(data_version, &spell.image.full),
            description: resolved.description,
            tooltip: resolved.tooltip,
            range: spell.range_burn.clone(),
            cooldown: spell.cooldown_burn.clone(),
            cost: resolved.cost,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PassiveView {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChampionProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub splash_url: String,
    pub lore: String,
    pub ally_tips: Vec<String>,
    pub enemy_tips: Vec<String>,
    pub tags: Vec<String>,
    pub partype: String,
    pub base_stats: BTreeMap<String, f64>,
    pub passive: PassiveView,
    pub abilities: [AbilityView; 4],
}

impl ChampionProfile {
    pub fn build(champion: &ChampionDto, data_version: &str) -> Result<Self, AppError> {
        let spells: &[SpellDto; 4] = champion.spells.as_slice().try_into().map_err(|_| {
            AppError::MalformedResource(format!(
                "{} has {} spells, expected 4",
                champion.id,
                champion.spells.len()
            ))
        })?;

        let kind = ResourceKind::from(champion.partype.as_str());
        let abilities = [0usize, 1, 2, 3]
            .map(|i| AbilityView::build(AbilitySlot::ALL[i], &spells[i], &kind, data_version));

        Ok(ChampionProfile {
            id: champion.id.clone(),
            name: champion.name.clone(),
            title: champion.title.clone(),
            splash_url: endpoints::splash_url(&champion.id),
            lore: champion.lore.clone(),
            ally_tips: champion.allytips.clone(),
            enemy_tips: champion.enemytips.clone(),
            tags: champion.tags.clone(),
            partype: champion.partype.clone(),
            base_stats: champion.stats.clone(),
            passive: PassiveView {
                name: champion.passive.name.clone(),
                description: strip_markup(&champion.passive.description),
                image_url: endpoints::passive_image_url(data_version, &champion.passive.image.full),
            },
            abilities,
        })
    }
}

/// Fetches one champion and builds its view. An unknown id, an undecodable
/// entry and a spell list that isn't Q/W/E/R all surface as not-found.
pub fn lookup_champion<S: ChampionSource>(source: &S, name: &str) -> Result<ChampionProfile, AppError> {
    let champion = source
        .get_champion(name)
        .map_err(|e| e.into_lookup_failure("Champion", name))?
        .ok_or_else(|| AppError::champion_not_found(name))?;

    ChampionProfile::build(&champion, source.version())
        .map_err(|e| e.into_lookup_failure("Champion", name))
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub title: String,
    pub splash_url: String,
}

/// Catalog entries in champion-id order.
pub fn build_catalog(catalog: &ChampionCatalogDto) -> Vec<CatalogEntry> {
    catalog
        .data
        .values()
        .map(|summary| CatalogEntry {
            id: summary.id.clone(),
            name: summary.name.clone(),
            title: summary.title.clone(),
            splash_url: endpoints::splash_url(&summary.id),
        })
        .collect()
}
