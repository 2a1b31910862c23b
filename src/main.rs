use anyhow::{Context, Result};
use clap::Parser;
use league_insights::analysis::record::MatchHistoryDocument;
use league_insights::api::extract::extract_player_matches;
use league_insights::api::models::MatchDto;
use league_insights::display::output::{
    display_champion_stats, display_error, display_info, display_match_history, display_overall,
    display_role_stats, display_success,
};
use league_insights::{
    aggregate, group_by_date, load_snapshot, sort_roles_by_games, sort_rows, AppError, Config,
    MatchRecord, MatchWindow, SnapshotStore, SortColumn, SortDirection, SortState,
};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "League Insights")]
#[command(about = "Summarise a player's match history by role and champion", long_about = None)]
struct Args {
    /// JSON file with the player's matches (records, `{ "matches": [...] }`, or Match-v5 documents with --puuid)
    matches: PathBuf,

    /// Treat the file as raw Match-v5 documents and extract this player's lines
    #[arg(long)]
    puuid: Option<String>,

    /// Reference snapshot file or Data Dragon directory (overrides LEAGUE_INSIGHTS_SNAPSHOT)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Column to sort the champion table by
    #[arg(long, value_enum, default_value = "games-played")]
    sort: SortColumn,

    /// Sort ascending instead of descending
    #[arg(long)]
    asc: bool,

    /// Number of matches shown initially (overrides LEAGUE_INSIGHTS_WINDOW)
    #[arg(short, long)]
    window: Option<usize>,

    /// Grow the match window this many times
    #[arg(long, default_value = "0")]
    show_more: usize,

    /// Number of champions to display
    #[arg(short, long, default_value = "10")]
    top: usize,

    /// Print the aggregates as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MatchesFile {
    Records(Vec<MatchRecord>),
    Document(MatchHistoryDocument),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(path) = args.snapshot.clone() {
        config.snapshot_path = path;
    }
    if let Some(window) = args.window {
        config.window = window;
    }
    debug!("config: {:?}", config);

    let store = SnapshotStore::new();
    match load_snapshot(&config.snapshot_path) {
        Ok(snapshot) => {
            store.replace(snapshot);
        }
        Err(e) => warn!("continuing without reference data: {}", e),
    }
    let snapshot = store.current();
    let snapshot = snapshot.as_deref();

    let records = read_matches(&args.matches, args.puuid.as_deref(), snapshot)?;
    if records.is_empty() {
        return Err(AppError::NoMatches(args.matches.display().to_string()).into());
    }

    let mut aggregates = aggregate(&records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aggregates)?);
        return Ok(());
    }

    let player = args.puuid.as_deref().unwrap_or("player");
    display_success(&format!("Loaded {} matches", records.len()));
    if snapshot.is_none() {
        display_info("No reference snapshot loaded; names and icons fall back to placeholders");
    }

    display_overall(&aggregates.overall, player);

    sort_roles_by_games(&mut aggregates.by_role);
    display_role_stats(&aggregates.by_role);

    let sort = SortState {
        column: args.sort,
        direction: if args.asc {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
    };
    sort_rows(&mut aggregates.by_champion, sort.column, sort.direction);
    display_champion_stats(&aggregates.by_champion, sort, args.top, snapshot);

    let mut ordered = records;
    ordered.sort_by(|a, b| b.game_creation.cmp(&a.game_creation));

    let mut window = MatchWindow::new(config.window, config.window_step);
    for _ in 0..args.show_more {
        window.grow();
    }
    let visible = window.visible(&ordered);
    let groups = group_by_date(visible, &chrono::Local);
    display_match_history(&groups, snapshot, ordered.len() - visible.len());

    Ok(())
}

fn read_matches(
    path: &Path,
    puuid: Option<&str>,
    snapshot: Option<&league_insights::ReferenceSnapshot>,
) -> Result<Vec<MatchRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read matches from {}", path.display()))?;

    let records = match puuid {
        Some(puuid) => {
            let documents: Vec<MatchDto> = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a list of Match-v5 documents", path.display()))?;
            extract_player_matches(&documents, puuid, snapshot)
        }
        None => match serde_json::from_str::<MatchesFile>(&content)
            .with_context(|| format!("{} is not a match list", path.display()))?
        {
            MatchesFile::Records(records) => records,
            MatchesFile::Document(document) => document.matches,
        },
    };

    Ok(records)
}
