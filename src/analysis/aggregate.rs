use super::normalize::{kda_ratio, NormalizedMatch, RoleBucket};
use super::record::MatchRecord;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Aggregate over a set of games. Every `avg_*` field is a plain mean over the games;
/// `kda` is computed from the summed kills, deaths and assists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub games_played: usize,
    pub wins: usize,
    pub losses: usize,
    /// Percentage, 0..=100.
    pub win_rate: f64,
    pub total_kills: i64,
    pub total_deaths: i64,
    pub total_assists: i64,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    pub kda: f64,
    pub avg_cs_per_min: f64,
    pub avg_gold_per_min: f64,
    pub avg_vision_score: f64,
    pub avg_damage_to_champions: f64,
    pub avg_kill_participation: f64,
    /// Seconds.
    pub avg_game_duration: f64,
    pub total_game_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    pub role: RoleBucket,
    #[serde(flatten)]
    pub stats: OverallStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    pub champion_name: String,
    pub champion_id: i32,
    #[serde(flatten)]
    pub stats: OverallStats,
    pub best_kda: f64,
    pub worst_kda: f64,
    /// Epoch millis of the most recent game.
    pub last_played: i64,
}

/// The three views produced from one match set. Groups are listed in the order their
/// first game appears in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub overall: OverallStats,
    pub by_role: Vec<RoleStats>,
    pub by_champion: Vec<ChampionStats>,
}

impl Aggregates {
    pub fn role(&self, role: &str) -> Option<&RoleStats> {
        self.by_role.iter().find(|r| r.role.as_str() == role)
    }

    pub fn champion(&self, name: &str) -> Option<&ChampionStats> {
        self.by_champion.iter().find(|c| c.champion_name == name)
    }
}

#[derive(Debug, Clone, Default)]
struct StatsAccumulator {
    games: usize,
    wins: usize,
    kills: i64,
    deaths: i64,
    assists: i64,
    game_time: i64,
    vision_score: i64,
    damage_to_champions: i64,
    cs_per_min: f64,
    gold_per_min: f64,
    kill_participation: f64,
}

impl StatsAccumulator {
    fn add(&mut self, game: &NormalizedMatch<'_>) {
        let record = game.record;

        self.games += 1;
        if record.win {
            self.wins += 1;
        }
        self.kills += record.kills as i64;
        self.deaths += record.deaths as i64;
        self.assists += record.assists as i64;
        self.game_time += record.game_duration;
        self.vision_score += record.vision_score as i64;
        self.damage_to_champions += record.damage_to_champions;
        self.cs_per_min += game.cs_per_min;
        self.gold_per_min += game.gold_per_min;
        self.kill_participation += game.kill_participation;
    }

    fn finish(&self) -> OverallStats {
        if self.games == 0 {
            return OverallStats::default();
        }

        let games = self.games as f64;
        OverallStats {
            games_played: self.games,
            wins: self.wins,
            losses: self.games - self.wins,
            win_rate: self.wins as f64 / games * 100.0,
            total_kills: self.kills,
            total_deaths: self.deaths,
            total_assists: self.assists,
            avg_kills: self.kills as f64 / games,
            avg_deaths: self.deaths as f64 / games,
            avg_assists: self.assists as f64 / games,
            kda: kda_ratio(self.kills + self.assists, self.deaths),
            avg_cs_per_min: self.cs_per_min / games,
            avg_gold_per_min: self.gold_per_min / games,
            avg_vision_score: self.vision_score as f64 / games,
            avg_damage_to_champions: self.damage_to_champions as f64 / games,
            avg_kill_participation: self.kill_participation / games,
            avg_game_duration: self.game_time as f64 / games,
            total_game_time: self.game_time,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ChampionAccumulator {
    champion_id: i32,
    stats: StatsAccumulator,
    best_kda: f64,
    worst_kda: f64,
    last_played: i64,
}

impl ChampionAccumulator {
    fn add(&mut self, game: &NormalizedMatch<'_>) {
        if self.stats.games == 0 {
            self.champion_id = game.record.champion_id;
            self.best_kda = game.kda;
            self.worst_kda = game.kda;
            self.last_played = game.record.game_creation;
        } else {
            self.best_kda = self.best_kda.max(game.kda);
            self.worst_kda = self.worst_kda.min(game.kda);
            self.last_played = self.last_played.max(game.record.game_creation);
        }
        self.stats.add(game);
    }
}

/// Keyed accumulators that remember first-seen order.
#[derive(Debug)]
struct Groups<K, A> {
    index: HashMap<K, usize>,
    entries: Vec<(K, A)>,
}

impl<K, A> Default for Groups<K, A> {
    fn default() -> Self {
        Groups {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, A: Default> Groups<K, A> {
    fn entry(&mut self, key: &K) -> &mut A {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.clone(), A::default()));
                self.index.insert(key.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }
}

/// Feeds games one at a time into the overall, per-role and per-champion views.
#[derive(Debug, Default)]
pub struct StatsTracker {
    overall: StatsAccumulator,
    roles: Groups<RoleBucket, StatsAccumulator>,
    champions: Groups<String, ChampionAccumulator>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_match(&mut self, game: &NormalizedMatch<'_>) {
        self.overall.add(game);
        self.roles.entry(&game.role).add(game);
        self.champions.entry(&game.record.champion_name).add(game);
    }

    pub fn finish(&self) -> Aggregates {
        let by_role = self
            .roles
            .entries
            .iter()
            .map(|(role, acc)| RoleStats {
                role: role.clone(),
                stats: acc.finish(),
            })
            .collect();

        let by_champion = self
            .champions
            .entries
            .iter()
            .map(|(name, acc)| ChampionStats {
                champion_name: name.clone(),
                champion_id: acc.champion_id,
                stats: acc.stats.finish(),
                best_kda: acc.best_kda,
                worst_kda: acc.worst_kda,
                last_played: acc.last_played,
            })
            .collect();

        Aggregates {
            overall: self.overall.finish(),
            by_role,
            by_champion,
        }
    }
}

/// Reduces a match set into its overall, per-role and per-champion aggregates.
///
/// Never fails: an empty set gives zeroed aggregates and empty groups.
pub fn aggregate(records: &[MatchRecord]) -> Aggregates {
    let mut tracker = StatsTracker::new();
    for record in records {
        tracker.add_match(&NormalizedMatch::new(record));
    }

    let aggregates = tracker.finish();
    debug!(
        "aggregated {} games into {} roles and {} champions",
        aggregates.overall.games_played,
        aggregates.by_role.len(),
        aggregates.by_champion.len()
    );
    aggregates
}
