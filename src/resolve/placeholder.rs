//! Placeholder scanning and tooltip resolution.
//!
//! Tooltips embed `{{ e1 }}` (per-rank effect values) and `{{ a1 }}` (scaling
//! coefficients). Resolution runs in three steps: scan the raw tooltip into
//! tokens, resolve each distinct token text once, then substitute all of them
//! in a single pass over the markup-stripped text. Replacement values are never
//! re-scanned.

use crate::api::models::SpellVarDto;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

use super::markup::strip_markup;

/// What the official champion pages show for a missing effect slot.
pub const EFFECT_FALLBACK: &str = "[object Object]";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{ (\D)([0-9]) \}\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    pub letter: char,
    pub index: usize,
    /// Exact matched text, e.g. `{{ e1 }}`.
    pub text: String,
    /// Byte offset in the scanned string.
    pub position: usize,
}

impl PlaceholderToken {
    /// The bare key, e.g. `e1` or `a2`.
    pub fn key(&self) -> String {
        format!("{}{}", self.letter, self.index)
    }
}

pub fn unresolved_marker(detail: &str) -> String {
    format!("[unresolved: {}]", detail)
}

/// All placeholder tokens in scan order, duplicates included.
pub fn scan_placeholders(text: &str) -> Vec<PlaceholderToken> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps[1].chars().next()?;
            let index = caps[2].parse::<usize>().ok()?;
            Some(PlaceholderToken {
                letter,
                index,
                text: whole.as_str().to_string(),
                position: whole.start(),
            })
        })
        .collect()
}

/// `effectBurn[index]`, or the fallback literal when the slot is out of
/// range or `null`. An empty string is a real value and is kept.
pub fn effect_value(effect_burn: &[Option<String>], index: usize) -> String {
    match effect_burn.get(index).and_then(|slot| slot.as_deref()) {
        Some(value) => value.to_string(),
        None => {
            tracing::debug!(index, "effect slot missing, using fallback");
            EFFECT_FALLBACK.to_string()
        }
    }
}

/// Looks the token up in the first `vars` record only.
fn coefficient_value(vars: &[SpellVarDto], key: &str) -> Option<String> {
    vars.first()
        .filter(|binding| binding.binds(key))
        .and_then(|binding| binding.coeff.as_ref())
        .map(|coeff| coeff.to_string())
}

fn resolve_token(
    token: &PlaceholderToken,
    effect_burn: &[Option<String>],
    vars: &[SpellVarDto],
) -> String {
    match token.letter {
        'e' => effect_value(effect_burn, token.index),
        'a' => coefficient_value(vars, &token.key()).unwrap_or_else(|| {
            tracing::warn!(token = %token.text, position = token.position, "no coefficient binding for placeholder");
            unresolved_marker(&token.key())
        }),
        _ => {
            tracing::warn!(token = %token.text, position = token.position, "unknown placeholder letter");
            unresolved_marker(&token.key())
        }
    }
}

/// Replaces every match of the placeholder pattern in `text` whose exact text
/// has an entry in `replacements`. Other matches are left alone.
fn substitute(text: &str, replacements: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            replacements
                .get(&caps[0])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Produces the display tooltip: markup stripped, placeholders substituted.
pub fn resolve_tooltip(
    tooltip: &str,
    effect_burn: &[Option<String>],
    vars: &[SpellVarDto],
) -> String {
    let cleaned = strip_markup(tooltip);
    let tokens = scan_placeholders(tooltip);
    if tokens.is_empty() {
        return cleaned;
    }

    let mut replacements: HashMap<String, String> = HashMap::new();
    for token in tokens.iter().rev() {
        replacements
            .entry(token.text.clone())
            .or_insert_with(|| resolve_token(token, effect_burn, vars));
    }

    substitute(&cleaned, &replacements)
}

/// Substitutes the effect value into a `resource` string such as
/// `"{{ e3 }} Health"`. The letter is not consulted: resource placeholders
/// always index `effectBurn`.
pub fn resolve_resource(resource: &str, effect_burn: &[Option<String>]) -> String {
    let tokens = scan_placeholders(resource);
    if tokens.is_empty() {
        tracing::warn!(%resource, "resource string has no placeholder");
        return unresolved_marker(resource);
    }

    let replacements: HashMap<String, String> = tokens
        .iter()
        .map(|token| (token.text.clone(), effect_value(effect_burn, token.index)))
        .collect();

    substitute(resource, &replacements)
}
