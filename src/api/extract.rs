use super::models::{MatchDto, ParticipantDto};
use crate::analysis::record::MatchRecord;
use crate::assets::resolver::find_champion;
use crate::assets::snapshot::ReferenceSnapshot;
use crate::error::AppError;
use log::{debug, warn};

impl MatchRecord {
    /// Pulls one player's line out of a full Match-v5 document.
    ///
    /// The team kill total is summed over the player's team so kill participation can
    /// be derived; an empty champion name is filled from the snapshot by champion key.
    pub fn from_match(
        match_data: &MatchDto,
        puuid: &str,
        snapshot: Option<&ReferenceSnapshot>,
    ) -> Result<Self, AppError> {
        let info = &match_data.info;
        let player = info
            .participants
            .iter()
            .find(|p| p.puuid == puuid)
            .ok_or_else(|| AppError::PlayerNotInMatch {
                puuid: puuid.to_string(),
                match_id: match_data.metadata.match_id.clone(),
            })?;

        let team_kills = info
            .participants
            .iter()
            .filter(|p| p.team_id == player.team_id)
            .fold(0i32, |total, p| total.saturating_add(p.kills));

        let mut champion_name = player.champion_name.clone();
        if champion_name.is_empty() {
            if let Some(champion) = snapshot.and_then(|s| find_champion(s, None, Some(player.champion_id))) {
                debug!("filled champion {} for key {}", champion.name, player.champion_id);
                champion_name = champion.name.clone();
            } else {
                warn!("match {} has no champion name for key {}", match_data.metadata.match_id, player.champion_id);
            }
        }

        let (primary_rune, secondary_style) = runes(player);

        Ok(MatchRecord {
            match_id: match_data.metadata.match_id.clone(),
            game_creation: info.game_creation,
            game_duration: info.game_duration,
            game_mode: info.game_mode.clone(),
            queue_id: info.queue_id,
            champion_name,
            champion_id: player.champion_id,
            win: player.win,
            kills: player.kills,
            deaths: player.deaths,
            assists: player.assists,
            total_minions_killed: player
                .total_minions_killed
                .saturating_add(player.neutral_minions_killed),
            vision_score: player.vision_score,
            gold_earned: player.gold_earned,
            team_position: player.team_position.clone(),
            items: vec![
                player.item0,
                player.item1,
                player.item2,
                player.item3,
                player.item4,
                player.item5,
                player.item6,
            ],
            summoner_spells: vec![player.summoner1_id, player.summoner2_id],
            primary_rune,
            secondary_style,
            champ_level: player.champ_level,
            damage_to_champions: player.total_damage_dealt_to_champions,
            damage_to_objectives: player.damage_dealt_to_objectives,
            damage_to_turrets: player.damage_dealt_to_turrets,
            total_damage_taken: player.total_damage_taken,
            team_id: player.team_id,
            kill_participation: player.challenges.as_ref().and_then(|c| c.kill_participation),
            team_kills: Some(team_kills),
            placement: player.placement,
        })
    }
}

/// Keystone of the primary style and the tree id of the secondary style.
fn runes(player: &ParticipantDto) -> (i32, i32) {
    let mut primary = 0;
    let mut secondary = 0;
    if let Some(perks) = &player.perks {
        for style in &perks.styles {
            match style.description.as_str() {
                "primaryStyle" => {
                    if let Some(first) = style.selections.first() {
                        primary = first.perk;
                    }
                }
                "subStyle" => secondary = style.style,
                _ => {}
            }
        }
    }
    (primary, secondary)
}

/// Extracts the player's record from every match they appear in, skipping the rest.
pub fn extract_player_matches(
    matches: &[MatchDto],
    puuid: &str,
    snapshot: Option<&ReferenceSnapshot>,
) -> Vec<MatchRecord> {
    matches
        .iter()
        .filter_map(|m| match MatchRecord::from_match(m, puuid, snapshot) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping match: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::ChampionInfo;
    use serde_json::json;

    fn match_dto() -> MatchDto {
        serde_json::from_value(json!({
            "metadata": {"matchId": "NA1_5000000001", "participants": ["me", "ally", "enemy"]},
            "info": {
                "gameCreation": 1_709_805_600_000i64,
                "gameDuration": 1800,
                "gameMode": "CLASSIC",
                "queueId": 420,
                "participants": [
                    {
                        "puuid": "me", "championId": 31, "championName": "", "teamId": 100, "win": true,
                        "kills": 6, "deaths": 2, "assists": 9,
                        "totalMinionsKilled": 150, "neutralMinionsKilled": 12,
                        "visionScore": 25, "goldEarned": 11000, "teamPosition": "TOP",
                        "item0": 3068, "item1": 0, "item2": 0, "item3": 0, "item4": 0, "item5": 0, "item6": 3340,
                        "summoner1Id": 4, "summoner2Id": 12, "champLevel": 16,
                        "totalDamageDealtToChampions": 21000,
                        "challenges": {"killParticipation": 0.62},
                        "perks": {"styles": [
                            {"description": "primaryStyle", "style": 8400, "selections": [{"perk": 8437}, {"perk": 8446}]},
                            {"description": "subStyle", "style": 8000, "selections": [{"perk": 9111}]}
                        ]}
                    },
                    {"puuid": "ally", "teamId": 100, "kills": 14, "championName": "Jinx"},
                    {"puuid": "enemy", "teamId": 200, "kills": 30, "championName": "Zed"}
                ]
            }
        }))
        .unwrap()
    }

    fn snapshot() -> ReferenceSnapshot {
        let mut snapshot = ReferenceSnapshot::default();
        snapshot.champions.insert(
            "31".to_string(),
            ChampionInfo {
                id: "Chogath".to_string(),
                key: "31".to_string(),
                name: "Cho'Gath".to_string(),
                title: String::new(),
                image: Default::default(),
            },
        );
        snapshot
    }

    #[test]
    fn extracts_the_players_line() {
        let s = snapshot();
        let record = MatchRecord::from_match(&match_dto(), "me", Some(&s)).unwrap();

        assert_eq!(record.match_id, "NA1_5000000001");
        assert_eq!(record.champion_name, "Cho'Gath");
        assert_eq!(record.total_minions_killed, 162);
        assert_eq!(record.items, vec![3068, 0, 0, 0, 0, 0, 3340]);
        assert_eq!(record.summoner_spells, vec![4, 12]);
        assert_eq!(record.primary_rune, 8437);
        assert_eq!(record.secondary_style, 8000);
        assert_eq!(record.team_kills, Some(20));
        assert_eq!(record.kill_participation, Some(0.62));
        assert_eq!(record.placement, None);
    }

    #[test]
    fn oversized_counts_saturate() {
        let dto: MatchDto = serde_json::from_value(json!({
            "metadata": {"matchId": "NA1_5000000002"},
            "info": {
                "gameDuration": 1800,
                "gameMode": "CLASSIC",
                "participants": [
                    {"puuid": "me", "teamId": 100, "kills": i32::MAX, "totalMinionsKilled": i32::MAX, "neutralMinionsKilled": 5},
                    {"puuid": "ally", "teamId": 100, "kills": 3}
                ]
            }
        }))
        .unwrap();

        let record = MatchRecord::from_match(&dto, "me", None).unwrap();
        assert_eq!(record.team_kills, Some(i32::MAX));
        assert_eq!(record.total_minions_killed, i32::MAX);
    }

    #[test]
    fn unknown_player_is_an_error() {
        let err = MatchRecord::from_match(&match_dto(), "stranger", None).unwrap_err();
        assert!(matches!(err, AppError::PlayerNotInMatch { .. }));
    }

    #[test]
    fn name_stays_empty_without_snapshot() {
        let record = MatchRecord::from_match(&match_dto(), "me", None).unwrap();
        assert_eq!(record.champion_name, "");
    }

    #[test]
    fn batch_extraction_skips_foreign_matches() {
        let records = extract_player_matches(&[match_dto(), match_dto()], "ally", None);
        assert_eq!(records.len(), 2);
        assert!(extract_player_matches(&[match_dto()], "stranger", None).is_empty());
    }
}
