pub mod cost;
pub mod markup;
pub mod placeholder;

use crate::api::models::SpellDto;

use cost::{derive_cost, ResourceKind};
use markup::strip_markup;
use placeholder::resolve_tooltip;

/// Display text for one ability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAbility {
    pub description: String,
    pub tooltip: String,
    pub cost: String,
}

pub fn resolve_ability(kind: &ResourceKind, spell: &SpellDto) -> ResolvedAbility {
    ResolvedAbility {
        description: strip_markup(&spell.description),
        tooltip: resolve_tooltip(&spell.tooltip, &spell.effect_burn, &spell.vars),
        cost: derive_cost(kind, spell.into()),
    }
}
