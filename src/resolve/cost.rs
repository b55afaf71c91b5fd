use crate::api::models::SpellDto;
use std::fmt;

use super::placeholder::{resolve_resource, unresolved_marker};

pub const NO_COST: &str = "No Cost";

/// The resource a champion's abilities draw from (`partype`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Mana,
    Energy,
    Fury,
    /// Health costs or free abilities; the per-spell `resource` field decides.
    None,
    /// Narrative resources such as "Blood Well", "Flow" or "Shield".
    Other(String),
}

impl From<&str> for ResourceKind {
    fn from(partype: &str) -> Self {
        match partype {
            "Mana" => ResourceKind::Mana,
            "Energy" => ResourceKind::Energy,
            "Fury" => ResourceKind::Fury,
            "None" => ResourceKind::None,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

impl ResourceKind {
    pub fn label(&self) -> &str {
        match self {
            ResourceKind::Mana => "Mana",
            ResourceKind::Energy => "Energy",
            ResourceKind::Fury => "Fury",
            ResourceKind::None => "None",
            ResourceKind::Other(label) => label,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The cost-related fields of one spell.
#[derive(Debug, Clone, Copy)]
pub struct SpellCost<'a> {
    pub cost_burn: &'a str,
    pub resource: Option<&'a str>,
    pub effect_burn: &'a [Option<String>],
}

impl<'a> From<&'a SpellDto> for SpellCost<'a> {
    fn from(spell: &'a SpellDto) -> Self {
        SpellCost {
            cost_burn: &spell.cost_burn,
            resource: spell.resource.as_deref(),
            effect_burn: &spell.effect_burn,
        }
    }
}

pub fn derive_cost(kind: &ResourceKind, spell: SpellCost<'_>) -> String {
    match kind {
        ResourceKind::Mana | ResourceKind::Energy | ResourceKind::Fury => {
            format!("{} {}", spell.cost_burn, kind.label())
        }
        ResourceKind::None => match spell.resource {
            Some(NO_COST) => NO_COST.to_string(),
            Some(resource) => resolve_resource(resource, spell.effect_burn),
            None => {
                tracing::warn!("spell has no resource field");
                unresolved_marker("resource")
            }
        },
        ResourceKind::Other(_) => NO_COST.to_string(),
    }
}
