//! Integration tests for aggregation, normalization and presentation over match records.

use league_insights::analysis::normalize::{cs_per_min, kda};
use league_insights::{
    aggregate, group_by_date, sort_rows, ChampionStats, MatchRecord, MatchWindow, OverallStats,
    RoleBucket, SortColumn, SortDirection,
};
use serde_json::json;

fn game(champion: &str, position: &str, win: bool, k: i32, d: i32, a: i32) -> MatchRecord {
    MatchRecord {
        match_id: format!("NA1_{}_{}{}{}", champion, k, d, a),
        game_creation: 1_709_805_600_000,
        game_duration: 1800,
        game_mode: "CLASSIC".to_string(),
        queue_id: 420,
        champion_name: champion.to_string(),
        win,
        kills: k,
        deaths: d,
        assists: a,
        total_minions_killed: 180,
        gold_earned: 12_000,
        team_position: position.to_string(),
        ..Default::default()
    }
}

fn sample() -> Vec<MatchRecord> {
    vec![
        game("Ahri", "MIDDLE", true, 8, 2, 6),
        game("Garen", "TOP", false, 3, 5, 2),
        game("Ahri", "MIDDLE", false, 4, 4, 4),
        game("Thresh", "UTILITY", true, 1, 3, 17),
        game("Ahri", "", true, 10, 0, 5),
    ]
}

#[test]
fn wins_and_losses_cover_every_game() {
    let records = sample();
    let result = aggregate(&records);

    assert_eq!(result.overall.wins + result.overall.losses, records.len());
    assert_eq!(result.overall.games_played, records.len());
    for role in &result.by_role {
        assert_eq!(role.stats.wins + role.stats.losses, role.stats.games_played);
    }
    for champion in &result.by_champion {
        assert_eq!(champion.stats.wins + champion.stats.losses, champion.stats.games_played);
    }
}

#[test]
fn win_rate_is_a_bounded_percentage() {
    let result = aggregate(&sample());
    assert!((0.0..=100.0).contains(&result.overall.win_rate));
    assert!((result.overall.win_rate - 60.0).abs() < 1e-9);

    assert_eq!(aggregate(&[]).overall.win_rate, 0.0);
    assert_eq!(aggregate(&[]).overall, OverallStats::default());
}

#[test]
fn kda_and_cs_guards() {
    assert_eq!(kda(5, 0, 3), 8.0);
    assert_eq!(kda(4, 2, 6), 5.0);
    assert_eq!(cs_per_min(100, 0), 0.0);
    assert_eq!(cs_per_min(300, 1800), 10.0);
}

#[test]
fn groups_by_role_and_champion() {
    let result = aggregate(&sample());

    let roles: Vec<&str> = result.by_role.iter().map(|r| r.role.as_str()).collect();
    assert_eq!(roles, ["Mid", "Top", "Support", "Unknown"]);
    assert_eq!(result.role("Mid").map(|r| r.stats.games_played), Some(2));

    let ahri = result.champion("Ahri").expect("Ahri aggregated");
    assert_eq!(ahri.stats.games_played, 3);
    assert_eq!(ahri.best_kda, 15.0);
    assert_eq!(ahri.worst_kda, 2.0);
    // (8+10+4 kills + 6+4+5 assists) / 6 deaths
    assert!((ahri.stats.kda - 37.0 / 6.0).abs() < 1e-9);
}

#[test]
fn aram_and_arena_take_their_own_buckets() {
    let mut aram = game("Lux", "MIDDLE", true, 10, 5, 20);
    aram.game_mode = "ARAM".to_string();
    aram.queue_id = 450;
    let mut arena = game("Lux", "", false, 7, 4, 3);
    arena.game_mode = "CHERRY".to_string();
    arena.queue_id = 1700;
    arena.placement = Some(3);

    let result = aggregate(&[aram, arena]);
    let roles: Vec<&RoleBucket> = result.by_role.iter().map(|r| &r.role).collect();
    assert_eq!(roles, [&RoleBucket::Aram, &RoleBucket::Arena]);
}

#[test]
fn aggregation_is_deterministic() {
    let records = sample();
    let first = aggregate(&records);
    let second = aggregate(&records);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn records_parse_from_camel_case_json() {
    let records: Vec<MatchRecord> = serde_json::from_value(json!([{
        "matchId": "EUW1_1",
        "gameCreation": 1_709_805_600_000i64,
        "gameDuration": 0,
        "gameMode": "CLASSIC",
        "championName": "Jinx",
        "win": true,
        "kills": 5,
        "deaths": 0,
        "assists": 3,
        "totalMinionsKilled": 100,
        "teamPosition": "BOTTOM",
        "items": [3031, 0, 0, 0, 0, 0, 3363]
    }]))
    .unwrap();

    let result = aggregate(&records);
    assert_eq!(result.overall.kda, 8.0);
    assert_eq!(result.overall.avg_cs_per_min, 0.0);
    assert_eq!(result.by_role[0].role, RoleBucket::Bot);
}

#[test]
fn equal_keys_stay_in_input_order() {
    let row = |name: &str| ChampionStats {
        champion_name: name.to_string(),
        champion_id: 0,
        stats: OverallStats {
            games_played: 3,
            ..Default::default()
        },
        best_kda: 0.0,
        worst_kda: 0.0,
        last_played: 0,
    };
    let mut rows = vec![row("A"), row("B")];

    sort_rows(&mut rows, SortColumn::GamesPlayed, SortDirection::Descending);

    let names: Vec<&str> = rows.iter().map(|r| r.champion_name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn window_clamps_to_the_list() {
    let list: Vec<usize> = (0..30).collect();
    let mut window = MatchWindow::new(25, 10);

    assert_eq!(window.visible(&list).len(), 25);
    assert_eq!(window.visible(&list), &list[0..25]);

    window.grow();
    assert_eq!(window.visible(&list), &list[0..30]);
}

#[test]
fn date_groups_partition_the_visible_window() {
    let mut records = sample();
    for (i, record) in records.iter_mut().enumerate() {
        record.game_creation += i as i64 * 86_400_000;
    }

    let groups = group_by_date(&records, &chrono::Utc);
    assert_eq!(groups.len(), records.len());
    assert!(groups.windows(2).all(|pair| pair[0].date > pair[1].date));
    let total: usize = groups.iter().map(|g| g.matches.len()).sum();
    assert_eq!(total, records.len());
}
