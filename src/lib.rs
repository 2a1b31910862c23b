//! Per-player performance analytics over League of Legends match records, plus a
//! tolerant lookup layer from champion/item/spell/rune identifiers onto Data Dragon
//! image references.

#![recursion_limit = "256"]
pub mod analysis;
pub mod api;
pub mod assets;
pub mod config;
pub mod display;
pub mod error;

pub use analysis::aggregate::{aggregate, Aggregates, ChampionStats, OverallStats, RoleStats, StatsTracker};
pub use analysis::normalize::{NormalizedMatch, RoleBucket};
pub use analysis::presentation::{
    group_by_date, sort_roles_by_games, sort_rows, DateGroup, MatchWindow, SortColumn, SortDirection, SortState,
};
pub use analysis::record::MatchRecord;
pub use assets::resolver::{resolve_champion, resolve_item, resolve_rune, resolve_spell, AssetRef, ImageRef};
pub use assets::snapshot::ReferenceSnapshot;
pub use assets::store::{load_snapshot, SnapshotStore};
pub use config::Config;
pub use error::AppError;
