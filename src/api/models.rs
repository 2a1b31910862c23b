use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Match V5 response
#[derive(Debug, Deserialize, Clone)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    #[serde(default)]
    pub game_creation: i64,
    pub game_duration: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub queue_id: i32,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub champion_id: i32,
    pub champion_name: String,
    pub team_id: i32,
    pub win: bool,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub vision_score: i32,
    pub gold_earned: i32,
    pub team_position: String,  // TOP, JUNGLE, MIDDLE, BOTTOM, UTILITY
    pub lane: String,
    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32, // trinket
    pub summoner1_id: i32,
    pub summoner2_id: i32,
    pub champ_level: i32,
    pub damage_dealt_to_turrets: i64,
    pub damage_dealt_to_objectives: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub challenges: Option<ChallengesDto>,
    pub perks: Option<PerksDto>,
    // Arena only
    pub placement: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengesDto {
    pub kda: Option<f64>,
    pub kill_participation: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PerksDto {
    pub styles: Vec<StyleDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StyleDto {
    pub description: String, // "primaryStyle" or "subStyle"
    pub selections: Vec<SelectionDto>,
    pub style: i32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SelectionDto {
    pub perk: i32,
}

// Data Dragon documents

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageDto {
    pub full: String,
    pub sprite: String,
    pub group: String,
}

#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ChampionInfo>, // keyed by champion id, e.g. "Aatrox"
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChampionInfo {
    pub id: String,  // "Chogath"
    pub key: String, // "31"
    pub name: String, // "Cho'Gath"
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: ImageDto,
}

#[derive(Debug, Deserialize)]
pub struct DataDragonItems {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ItemInfo>, // keyed by item id, e.g. "1001"
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemInfo {
    pub name: String,
    #[serde(default)]
    pub plaintext: String,
    #[serde(default)]
    pub image: ImageDto,
}

#[derive(Debug, Deserialize)]
pub struct DataDragonSpells {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, SpellInfo>, // keyed by spell id, e.g. "SummonerFlash"
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpellInfo {
    pub id: String,  // "SummonerFlash"
    pub key: String, // "4"
    pub name: String,
    #[serde(default)]
    pub image: ImageDto,
}

// runesReforged.json is a bare array of trees
#[derive(Debug, Deserialize, Clone)]
pub struct RunePathInfo {
    pub id: i32,
    pub key: String,
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub slots: Vec<RuneSlotInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RuneSlotInfo {
    pub runes: Vec<RuneInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuneInfo {
    pub id: i32,
    pub key: String,
    pub icon: String, // already a full relative path
    pub name: String,
    #[serde(default)]
    pub short_desc: String,
}
