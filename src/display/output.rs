use crate::analysis::aggregate::{ChampionStats, OverallStats, RoleStats};
use crate::analysis::normalize::{display_game_mode, format_game_duration, NormalizedMatch};
use crate::analysis::presentation::{DateGroup, SortDirection, SortState};
use crate::assets::resolver::{resolve_champion, resolve_item, resolve_rune, resolve_spell};
use crate::assets::snapshot::ReferenceSnapshot;
use chrono::{Local, TimeZone};
use clap::ValueEnum;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RoleRow {
    role: String,
    games: String,
    record: String,
    win_rate: String,
    kda: String,
    #[tabled(rename = "cs/min")]
    cs_per_min: String,
    vision: String,
    #[tabled(rename = "kp")]
    kill_participation: String,
}

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    games: String,
    win_rate: String,
    kda: String,
    #[tabled(rename = "best / worst")]
    best_worst: String,
    #[tabled(rename = "cs/min")]
    cs_per_min: String,
    damage: String,
    last_played: String,
    icon: String,
}

#[derive(Tabled)]
struct MatchRow {
    result: String,
    champion: String,
    mode: String,
    #[tabled(rename = "k/d/a")]
    score: String,
    kda: String,
    #[tabled(rename = "cs/min | place")]
    cs_or_place: String,
    duration: String,
    spells: String,
    runes: String,
    items: String,
}

fn win_rate_colored(win_rate: f64) -> String {
    let text = format!("{:.1}%", win_rate);
    if win_rate >= 55.0 {
        text.green().to_string()
    } else if win_rate < 45.0 {
        text.red().to_string()
    } else {
        text
    }
}

pub fn display_overall(overall: &OverallStats, player: &str) {
    println!("\n{}", format!("📊 OVERVIEW for {}", player).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if overall.games_played == 0 {
        println!("{}", "No games to summarise".yellow());
        return;
    }

    println!(
        "{} {} W / {} L ({} WR over {} games)",
        "📈 Record:".bold(),
        overall.wins.to_string().green(),
        overall.losses.to_string().red(),
        win_rate_colored(overall.win_rate),
        overall.games_played
    );
    println!(
        "{} {:.1} / {:.1} / {:.1} ({:.2} KDA)",
        "⚔️  Average:".bold(),
        overall.avg_kills,
        overall.avg_deaths,
        overall.avg_assists,
        overall.kda
    );
    println!(
        "• CS/min {:.2}   • Gold/min {:.0}   • Vision {:.1}   • Damage {:.0}   • KP {:.0}%",
        overall.avg_cs_per_min,
        overall.avg_gold_per_min,
        overall.avg_vision_score,
        overall.avg_damage_to_champions,
        overall.avg_kill_participation * 100.0
    );
    println!(
        "• Avg game {}   • Total time played {}\n",
        format_game_duration(overall.avg_game_duration.round() as i64),
        format_game_duration(overall.total_game_time)
    );
}

pub fn display_role_stats(roles: &[RoleStats]) {
    if roles.is_empty() {
        return;
    }

    println!("\n{}", "🧭 PERFORMANCE BY ROLE".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<RoleRow> = roles
        .iter()
        .map(|r| RoleRow {
            role: r.role.long_name().to_string(),
            games: r.stats.games_played.to_string(),
            record: format!("{}W {}L", r.stats.wins, r.stats.losses),
            win_rate: win_rate_colored(r.stats.win_rate),
            kda: format!("{:.2}", r.stats.kda),
            cs_per_min: format!("{:.2}", r.stats.avg_cs_per_min),
            vision: format!("{:.1}", r.stats.avg_vision_score),
            kill_participation: format!("{:.0}%", r.stats.avg_kill_participation * 100.0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_stats(
    champions: &[ChampionStats],
    sort: SortState,
    top_n: usize,
    snapshot: Option<&ReferenceSnapshot>,
) {
    if champions.is_empty() {
        return;
    }

    let arrow = match sort.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };
    let column = sort
        .column
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default();

    println!("\n{}", "🏆 CHAMPION PERFORMANCE".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!(
        "{}\n",
        format!("Sorted by {} {} • Showing top {}", column, arrow, top_n.min(champions.len())).dimmed()
    );

    let rows: Vec<ChampionRow> = champions
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, c)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: c.champion_name.clone(),
            games: c.stats.games_played.to_string(),
            win_rate: win_rate_colored(c.stats.win_rate),
            kda: format!("{:.2}", c.stats.kda),
            best_worst: format!("{:.2} / {:.2}", c.best_kda, c.worst_kda),
            cs_per_min: format!("{:.2}", c.stats.avg_cs_per_min),
            damage: format!("{:.0}", c.stats.avg_damage_to_champions),
            last_played: format_timestamp(c.last_played),
            icon: resolve_champion(snapshot, Some(&c.champion_name), Some(c.champion_id)).url(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_match_history(
    groups: &[DateGroup<'_>],
    snapshot: Option<&ReferenceSnapshot>,
    remaining: usize,
) {
    println!("\n{}", "🕹️  MATCH HISTORY".bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if groups.is_empty() {
        println!("{}", "No recent matches found for this player.".yellow());
        return;
    }

    for group in groups {
        println!(
            "{}  {} {}",
            group.label().bold(),
            format!("{}W", group.wins()).green(),
            format!("{}L", group.losses()).red()
        );

        let rows: Vec<MatchRow> = group
            .matches
            .iter()
            .map(|record| {
                let game = NormalizedMatch::new(record);
                let champion = resolve_champion(snapshot, Some(&record.champion_name), Some(record.champion_id));

                let cs_or_place = if game.is_arena() {
                    record
                        .placement
                        .map(|p| format!("#{}", p))
                        .unwrap_or_else(|| "?".to_string())
                } else {
                    format!("{:.2}", game.cs_per_min)
                };

                let spells = record
                    .summoner_spells
                    .iter()
                    .map(|id| resolve_spell(snapshot, *id).name().unwrap_or("-").to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                let runes = [record.primary_rune, record.secondary_style]
                    .iter()
                    .map(|id| resolve_rune(snapshot, *id).name().unwrap_or("-").to_string())
                    .collect::<Vec<_>>()
                    .join(" / ");

                let items = record
                    .equipped_items()
                    .map(|id| {
                        resolve_item(snapshot, id)
                            .name()
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("Item {}", id))
                    })
                    .collect::<Vec<_>>()
                    .join(", ");

                MatchRow {
                    result: if record.win {
                        "WIN".green().to_string()
                    } else {
                        "LOSS".red().to_string()
                    },
                    champion: format!(
                        "{} (lvl {})",
                        champion.name().unwrap_or(&record.champion_name),
                        record.champ_level
                    ),
                    mode: display_game_mode(&record.game_mode, record.queue_id),
                    score: format!("{}/{}/{}", record.kills, record.deaths, record.assists),
                    kda: format!("{:.2}", game.kda),
                    cs_or_place,
                    duration: format_game_duration(record.game_duration),
                    spells,
                    runes,
                    items,
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}\n", table);
    }

    if remaining > 0 {
        println!(
            "{}",
            format!("… {} more matches (use --show-more to load them)", remaining).dimmed()
        );
    }
}

fn format_timestamp(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
