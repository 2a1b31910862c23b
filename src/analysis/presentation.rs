//! Arranging aggregates and match lists for display: date buckets, column sorting and
//! the growable "show more" window.

use super::aggregate::{ChampionStats, RoleStats};
use super::record::MatchRecord;
use chrono::{NaiveDate, TimeZone};
use clap::ValueEnum;

/// Games played on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub matches: Vec<&'a MatchRecord>,
}

impl DateGroup<'_> {
    pub fn wins(&self) -> usize {
        self.matches.iter().filter(|m| m.win).count()
    }

    pub fn losses(&self) -> usize {
        self.matches.len() - self.wins()
    }

    /// e.g. `"Mar 7"`.
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Buckets matches by the calendar day of `game_creation` in `tz`.
///
/// Days come back newest first. Within a day, matches keep their input order.
/// A timestamp outside chrono's range lands on 1970-01-01.
pub fn group_by_date<'a, Tz: TimeZone>(matches: &'a [MatchRecord], tz: &Tz) -> Vec<DateGroup<'a>> {
    let mut groups: Vec<DateGroup<'a>> = Vec::new();

    for record in matches {
        let date = tz
            .timestamp_millis_opt(record.game_creation)
            .single()
            .map(|dt| dt.date_naive())
            .unwrap_or_default();

        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.matches.push(record),
            None => groups.push(DateGroup {
                date,
                matches: vec![record],
            }),
        }
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Name,
    GamesPlayed,
    WinRate,
    Kda,
    CsPerMin,
    Damage,
    LastPlayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active column and direction of a sortable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            column: SortColumn::GamesPlayed,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Picking the active column flips direction; a new column starts descending.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggle();
        } else {
            self.column = column;
            self.direction = SortDirection::Descending;
        }
    }
}

/// A row of a group-keyed aggregate table.
pub trait SortableRow {
    fn label(&self) -> &str;
    fn column_value(&self, column: SortColumn) -> f64;
}

impl SortableRow for ChampionStats {
    fn label(&self) -> &str {
        &self.champion_name
    }

    fn column_value(&self, column: SortColumn) -> f64 {
        match column {
            SortColumn::Name => 0.0,
            SortColumn::GamesPlayed => self.stats.games_played as f64,
            SortColumn::WinRate => self.stats.win_rate,
            SortColumn::Kda => self.stats.kda,
            SortColumn::CsPerMin => self.stats.avg_cs_per_min,
            SortColumn::Damage => self.stats.avg_damage_to_champions,
            SortColumn::LastPlayed => self.last_played as f64,
        }
    }
}

impl SortableRow for RoleStats {
    fn label(&self) -> &str {
        self.role.as_str()
    }

    // Roles carry no last-played time; it sorts as 0.
    fn column_value(&self, column: SortColumn) -> f64 {
        match column {
            SortColumn::Name | SortColumn::LastPlayed => 0.0,
            SortColumn::GamesPlayed => self.stats.games_played as f64,
            SortColumn::WinRate => self.stats.win_rate,
            SortColumn::Kda => self.stats.kda,
            SortColumn::CsPerMin => self.stats.avg_cs_per_min,
            SortColumn::Damage => self.stats.avg_damage_to_champions,
        }
    }
}

/// Stable sort by one column. Equal keys keep their input order in both directions.
pub fn sort_rows<T: SortableRow>(rows: &mut [T], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.label().cmp(b.label()),
            // adding 0.0 folds -0.0 into 0.0 so signed zeros tie
            _ => (a.column_value(column) + 0.0).total_cmp(&(b.column_value(column) + 0.0)),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Roles by games played, most played first.
pub fn sort_roles_by_games(roles: &mut [RoleStats]) {
    sort_rows(roles, SortColumn::GamesPlayed, SortDirection::Descending);
}

/// Visible prefix of an already arranged list, grown a step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    size: usize,
    step: usize,
}

impl MatchWindow {
    pub fn new(initial: usize, step: usize) -> Self {
        MatchWindow { size: initial, step }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grow(&mut self) {
        self.size = self.size.saturating_add(self.step);
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.size.min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.size
    }
}

impl Default for MatchWindow {
    fn default() -> Self {
        MatchWindow::new(crate::config::DEFAULT_WINDOW, crate::config::DEFAULT_WINDOW_STEP)
    }
}
