use crate::api::models::{
    ChampionInfo, DataDragonChampions, DataDragonItems, DataDragonSpells, ItemInfo, RuneInfo,
    RunePathInfo, SpellInfo,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One version of the static game data.
///
/// Never patched in place: a refresh builds a new snapshot and swaps it in whole
/// (see [`super::store::SnapshotStore`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSnapshot {
    pub latest_version: String,
    /// Keyed by numeric champion key as a string, e.g. `"266"`.
    pub champions: BTreeMap<String, ChampionInfo>,
    /// Keyed by item id as a string.
    pub items: BTreeMap<String, ItemInfo>,
    /// Keyed by numeric spell key as a string, e.g. `"4"` for Flash.
    pub summoner_spells: BTreeMap<String, SpellInfo>,
    pub runes: BTreeMap<i32, RuneInfo>,
}

impl ReferenceSnapshot {
    /// Builds a snapshot from the four Data Dragon documents, re-keying champions and
    /// spells by their numeric key and flattening the rune trees.
    pub fn from_data_dragon(
        champions: DataDragonChampions,
        items: DataDragonItems,
        spells: DataDragonSpells,
        rune_paths: Vec<RunePathInfo>,
    ) -> Self {
        let latest_version = [&champions.version, &items.version, &spells.version]
            .into_iter()
            .find(|v| !v.is_empty())
            .cloned()
            .unwrap_or_default();

        ReferenceSnapshot {
            latest_version,
            champions: champions
                .data
                .into_values()
                .map(|c| (c.key.clone(), c))
                .collect(),
            items: items.data.into_iter().collect(),
            summoner_spells: spells
                .data
                .into_values()
                .map(|s| (s.key.clone(), s))
                .collect(),
            runes: flatten_runes(rune_paths),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
            && self.items.is_empty()
            && self.summoner_spells.is_empty()
            && self.runes.is_empty()
    }
}

/// Every rune keyed by id. Trees are included too so a secondary style id resolves.
fn flatten_runes(paths: Vec<RunePathInfo>) -> BTreeMap<i32, RuneInfo> {
    let mut runes = BTreeMap::new();
    for path in paths {
        for slot in path.slots {
            for rune in slot.runes {
                runes.insert(rune.id, rune);
            }
        }
        runes.insert(
            path.id,
            RuneInfo {
                id: path.id,
                key: path.key,
                icon: path.icon,
                name: path.name,
                short_desc: String::new(),
            },
        );
    }
    runes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_dragon_snapshot() -> ReferenceSnapshot {
        let champions: DataDragonChampions = serde_json::from_value(json!({
            "version": "14.10.1",
            "data": {
                "Aatrox": {"id": "Aatrox", "key": "266", "name": "Aatrox", "image": {"full": "Aatrox.png"}},
                "Chogath": {"id": "Chogath", "key": "31", "name": "Cho'Gath", "image": {"full": "Chogath.png"}}
            }
        }))
        .unwrap();
        let items: DataDragonItems = serde_json::from_value(json!({
            "version": "14.10.1",
            "data": {"1001": {"name": "Boots", "image": {"full": "1001.png"}}}
        }))
        .unwrap();
        let spells: DataDragonSpells = serde_json::from_value(json!({
            "data": {"SummonerFlash": {"id": "SummonerFlash", "key": "4", "name": "Flash", "image": {"full": "SummonerFlash.png"}}}
        }))
        .unwrap();
        let runes: Vec<RunePathInfo> = serde_json::from_value(json!([{
            "id": 8000, "key": "Precision", "icon": "perk-images/Styles/7201_Precision.png", "name": "Precision",
            "slots": [{"runes": [{"id": 8005, "key": "PressTheAttack", "icon": "perk-images/Styles/Precision/PressTheAttack/PressTheAttack.png", "name": "Press the Attack", "shortDesc": "..."}]}]
        }]))
        .unwrap();

        ReferenceSnapshot::from_data_dragon(champions, items, spells, runes)
    }

    #[test]
    fn champions_and_spells_are_rekeyed_by_numeric_key() {
        let snapshot = data_dragon_snapshot();
        assert_eq!(snapshot.latest_version, "14.10.1");
        assert_eq!(snapshot.champions["266"].id, "Aatrox");
        assert_eq!(snapshot.champions["31"].name, "Cho'Gath");
        assert_eq!(snapshot.summoner_spells["4"].id, "SummonerFlash");
        assert_eq!(snapshot.items["1001"].name, "Boots");
    }

    #[test]
    fn rune_trees_are_flattened() {
        let snapshot = data_dragon_snapshot();
        assert_eq!(snapshot.runes[&8005].key, "PressTheAttack");
        assert_eq!(snapshot.runes[&8000].name, "Precision");
        assert_eq!(snapshot.runes.len(), 2);
    }

    #[test]
    fn serialized_form_round_trips_integer_rune_keys() {
        let snapshot = data_dragon_snapshot();
        let text = serde_json::to_string(&snapshot).unwrap();
        assert!(text.contains("\"summonerSpells\""));
        let back: ReferenceSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn default_snapshot_is_empty() {
        assert!(ReferenceSnapshot::default().is_empty());
        assert!(!data_dragon_snapshot().is_empty());
    }
}
