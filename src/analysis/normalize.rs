//! Per-match derived figures: CS/min, KDA, kill participation and the role bucket a
//! game is filed under.

use super::record::MatchRecord;
use serde::{Serialize, Serializer};
use std::fmt;

/// Queue id of the Arena mode. Some clients report it under another game mode.
pub const ARENA_QUEUE_ID: i32 = 1700;

/// Display bucket a game is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleBucket {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
    Aram,
    Arena,
    Unknown,
    /// Unrecognised tag, kept verbatim.
    Other(String),
}

impl RoleBucket {
    /// Bucket for a raw position tag in a given game mode.
    ///
    /// Mode wins over position: every ARAM game is `Aram` and every Arena game
    /// (`CHERRY`/`ARENA` mode or queue 1700) is `Arena`.
    pub fn classify(team_position: &str, game_mode: &str, queue_id: i32) -> Self {
        if is_arena(game_mode, queue_id) {
            return RoleBucket::Arena;
        }
        if game_mode.eq_ignore_ascii_case("ARAM") {
            return RoleBucket::Aram;
        }

        match team_position.to_ascii_uppercase().as_str() {
            "TOP" => RoleBucket::Top,
            "JUNGLE" => RoleBucket::Jungle,
            "MID" | "MIDDLE" => RoleBucket::Mid,
            "BOT" | "BOTTOM" | "ADC" => RoleBucket::Bot,
            "SUPPORT" | "UTILITY" => RoleBucket::Support,
            // tags already spelled as a bucket label share that bucket
            "ARAM" => RoleBucket::Aram,
            "ARENA" => RoleBucket::Arena,
            "" | "NONE" | "UNKNOWN" => RoleBucket::Unknown,
            _ => RoleBucket::Other(team_position.to_string()),
        }
    }

    /// Short label, also used as the grouping key.
    pub fn as_str(&self) -> &str {
        match self {
            RoleBucket::Top => "Top",
            RoleBucket::Jungle => "Jungle",
            RoleBucket::Mid => "Mid",
            RoleBucket::Bot => "Bot",
            RoleBucket::Support => "Support",
            RoleBucket::Aram => "ARAM",
            RoleBucket::Arena => "Arena",
            RoleBucket::Unknown => "Unknown",
            RoleBucket::Other(tag) => tag,
        }
    }

    pub fn long_name(&self) -> &str {
        match self {
            RoleBucket::Top => "Top Lane",
            RoleBucket::Mid => "Mid Lane",
            RoleBucket::Bot => "Bot Lane",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for RoleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RoleBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn is_arena(game_mode: &str, queue_id: i32) -> bool {
    queue_id == ARENA_QUEUE_ID
        || game_mode.eq_ignore_ascii_case("CHERRY")
        || game_mode.eq_ignore_ascii_case("ARENA")
}

/// Zero deaths counts as a denominator of one.
pub fn kda(kills: i32, deaths: i32, assists: i32) -> f64 {
    kda_ratio(kills as i64 + assists as i64, deaths as i64)
}

pub(crate) fn kda_ratio(takedowns: i64, deaths: i64) -> f64 {
    if deaths == 0 {
        takedowns as f64
    } else {
        takedowns as f64 / deaths as f64
    }
}

/// `0` for a zero-length game.
pub fn per_minute(amount: i64, game_duration: i64) -> f64 {
    if game_duration == 0 {
        0.0
    } else {
        amount as f64 / (game_duration as f64 / 60.0)
    }
}

pub fn cs_per_min(total_minions_killed: i32, game_duration: i64) -> f64 {
    per_minute(total_minions_killed as i64, game_duration)
}

/// Kill participation as a 0..1 fraction; `0` when the team scored no kills.
pub fn kill_participation(kills: i32, assists: i32, team_kills: i32) -> f64 {
    if team_kills == 0 {
        0.0
    } else {
        (kills as i64 + assists as i64) as f64 / team_kills as f64
    }
}

/// Human-facing game mode label.
pub fn display_game_mode(game_mode: &str, queue_id: i32) -> String {
    if game_mode.eq_ignore_ascii_case("CHERRY") || queue_id == ARENA_QUEUE_ID {
        return "Arena".to_string();
    }

    let spaced = game_mode.replacen('_', " ", 1);
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `"{minutes}m {seconds:02}s"`.
pub fn format_game_duration(seconds: i64) -> String {
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}

/// A record together with the figures derived from it.
#[derive(Debug, Clone)]
pub struct NormalizedMatch<'a> {
    pub record: &'a MatchRecord,
    pub role: RoleBucket,
    pub kda: f64,
    pub cs_per_min: f64,
    pub gold_per_min: f64,
    pub kill_participation: f64,
}

impl<'a> NormalizedMatch<'a> {
    pub fn new(record: &'a MatchRecord) -> Self {
        // A known team total wins over the upstream figure.
        let kill_participation = match (record.team_kills, record.kill_participation) {
            (Some(team_kills), _) => kill_participation(record.kills, record.assists, team_kills),
            (None, Some(upstream)) => upstream,
            (None, None) => 0.0,
        };

        NormalizedMatch {
            record,
            role: RoleBucket::classify(&record.team_position, &record.game_mode, record.queue_id),
            kda: kda(record.kills, record.deaths, record.assists),
            cs_per_min: cs_per_min(record.total_minions_killed, record.game_duration),
            gold_per_min: per_minute(record.gold_earned as i64, record.game_duration),
            kill_participation,
        }
    }

    pub fn is_arena(&self) -> bool {
        self.role == RoleBucket::Arena
    }
}
