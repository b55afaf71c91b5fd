use crate::error::AppError;
use crate::view::champion::{CatalogEntry, ChampionProfile};
use crate::view::summoner::{recent_matches, PlayerProfile};
use colored::*;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    queue: String,
    lane: String,
    role: String,
    played: String,
}

#[derive(Tabled)]
struct AbilityRow {
    key: String,
    name: String,
    cost: String,
    cooldown: String,
    range: String,
}

#[derive(Tabled)]
struct StatRow {
    stat: String,
    value: String,
}

#[derive(Tabled)]
struct CatalogRow {
    champion: String,
    title: String,
    splash: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::JsonError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn heading(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

pub fn display_profile(profile: &PlayerProfile, match_limit: usize) {
    heading(&format!("🎮 {} (Level {})", profile.name, profile.level), 60);

    println!("{} {}", "Icon:".bold(), profile.profile_icon_url);
    if let Some(updated) = profile.last_modified {
        println!("{} {}", "Last updated:".bold(), updated.format("%Y-%m-%d %H:%M UTC"));
    }

    println!(
        "\n{} {} {} ({} W / {} L)",
        format!("{}:", profile.queue_type).bold(),
        profile.standing.tier().yellow(),
        profile.standing.division().yellow(),
        profile.standing.wins().green(),
        profile.standing.losses().red()
    );

    let Some(matches) = profile.matches.as_ref() else {
        println!("\n{}", "No match history available".yellow());
        return;
    };

    let summaries = recent_matches(matches, match_limit);
    if summaries.is_empty() {
        println!("\n{}", "No match history available".yellow());
        return;
    }

    heading(&format!("📊 RECENT MATCHES (Last {})", summaries.len()), 80);

    let optional = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
    let rows: Vec<MatchRow> = summaries
        .into_iter()
        .enumerate()
        .map(|(idx, summary)| MatchRow {
            number: format!("{}", idx + 1),
            champion: optional(summary.champion),
            queue: optional(summary.queue),
            lane: summary.lane,
            role: summary.role,
            played: summary
                .played_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion(champion: &ChampionProfile) {
    heading(&format!("🛡️ {}, {}", champion.name, champion.title), 80);

    println!("{} {}", "Splash:".bold(), champion.splash_url);
    println!("{} {}", "Tags:".bold(), champion.tags.join(", "));
    println!("{} {}", "Resource:".bold(), champion.partype);
    println!("\n{}\n", champion.lore.italic());

    if !champion.ally_tips.is_empty() {
        println!("{}", "Playing as".bold().green());
        for tip in &champion.ally_tips {
            println!("  • {}", tip);
        }
    }
    if !champion.enemy_tips.is_empty() {
        println!("{}", "Playing against".bold().red());
        for tip in &champion.enemy_tips {
            println!("  • {}", tip);
        }
    }

    heading("Base Stats", 40);
    let stats: Vec<StatRow> = champion
        .base_stats
        .iter()
        .map(|(stat, value)| StatRow {
            stat: stat.clone(),
            value: value.to_string(),
        })
        .collect();
    let mut table = Table::new(stats);
    table.with(Style::rounded());
    println!("{}", table);

    heading("Abilities", 80);
    println!("{} {}", format!("Passive: {}", champion.passive.name).bold().yellow(), champion.passive.image_url.dimmed());
    println!("  {}\n", champion.passive.description);

    let rows: Vec<AbilityRow> = champion
        .abilities
        .iter()
        .map(|ability| AbilityRow {
            key: ability.slot.to_string(),
            name: ability.name.clone(),
            cost: ability.cost.clone(),
            cooldown: ability.cooldown.clone(),
            range: ability.range.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    for ability in &champion.abilities {
        println!(
            "{} {}",
            format!("[{}] {}", ability.slot, ability.name).bold().yellow(),
            ability.image_url.dimmed()
        );
        println!("  {}", ability.description);
        println!("  {}\n", ability.tooltip.dimmed());
    }
}

pub fn display_catalog(entries: &[CatalogEntry], version: &str) {
    heading(&format!("📚 Champions ({} on patch {})", entries.len(), version), 80);

    let rows: Vec<CatalogRow> = entries
        .iter()
        .map(|entry| CatalogRow {
            champion: entry.id.clone(),
            title: entry.title.clone(),
            splash: entry.splash_url.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
