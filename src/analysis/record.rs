use serde::{Deserialize, Serialize};

/// Maximum number of item slots in a record (six items plus the trinket).
pub const ITEM_SLOTS: usize = 7;

/// One player's line from one game.
///
/// Records come from an upstream collaborator already decoded; nothing in this crate
/// mutates them after construction. Missing fields deserialize to their zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    pub match_id: String,
    /// Epoch milliseconds.
    pub game_creation: i64,
    /// Seconds.
    pub game_duration: i64,
    pub game_mode: String,
    pub queue_id: i32,
    pub champion_name: String,
    pub champion_id: i32,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub total_minions_killed: i32,
    pub vision_score: i32,
    pub gold_earned: i32,
    pub team_position: String,
    /// Item ids, `0` marks an empty slot.
    pub items: Vec<i32>,
    pub summoner_spells: Vec<i32>,
    pub primary_rune: i32,
    pub secondary_style: i32,
    pub champ_level: i32,
    pub damage_to_champions: i64,
    pub damage_to_objectives: i64,
    pub damage_to_turrets: i64,
    pub total_damage_taken: i64,
    pub team_id: i32,
    /// Upstream-computed kill participation as a 0..1 fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_participation: Option<f64>,
    /// Sum of kills across the player's team, when the caller knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_kills: Option<i32>,
    /// Arena finishing place. Supplied by the caller, never derived here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<u32>,
}

impl MatchRecord {
    /// Filled item slots, at most [`ITEM_SLOTS`] of them in slot order.
    pub fn equipped_items(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().take(ITEM_SLOTS).copied().filter(|id| *id != 0)
    }
}

/// Wrapper shape used by stored player documents: `{ "matches": [...] }`.
#[derive(Debug, Deserialize)]
pub struct MatchHistoryDocument {
    pub matches: Vec<MatchRecord>,
}
