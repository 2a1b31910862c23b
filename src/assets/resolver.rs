//! Maps volatile game-asset identifiers (champion names or keys, item/spell/rune ids)
//! onto image references in a [`ReferenceSnapshot`].
//!
//! Every entry point is total: a miss, a missing snapshot or an empty identifier all
//! produce [`AssetRef::Sentinel`], which renders as a placeholder image.

use super::snapshot::ReferenceSnapshot;
use crate::api::models::ChampionInfo;
use log::debug;

pub const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Champion,
    Item,
    Spell,
    Rune,
}

/// A resolved image, with the path relative to the Data Dragon CDN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub kind: AssetKind,
    pub name: String,
    pub path: String,
}

impl ImageRef {
    pub fn url(&self) -> String {
        match self.kind {
            // rune icons are served from the unversioned image root
            AssetKind::Rune => format!("{}/img/{}", DDRAGON_CDN, self.path),
            _ => format!("{}/{}", DDRAGON_CDN, self.path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    Image(ImageRef),
    Sentinel,
}

impl AssetRef {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, AssetRef::Sentinel)
    }

    pub fn path(&self) -> &str {
        match self {
            AssetRef::Image(image) => &image.path,
            AssetRef::Sentinel => PLACEHOLDER_IMAGE,
        }
    }

    pub fn url(&self) -> String {
        match self {
            AssetRef::Image(image) => image.url(),
            AssetRef::Sentinel => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AssetRef::Image(image) => Some(&image.name),
            AssetRef::Sentinel => None,
        }
    }
}

/// A champion name as typed upstream, with its comparison forms computed once.
pub struct NameQuery<'a> {
    raw: &'a str,
    lower: String,
    stripped: String,
}

impl<'a> NameQuery<'a> {
    pub fn new(raw: &'a str) -> Self {
        NameQuery {
            raw,
            lower: raw.to_lowercase(),
            stripped: strip_name(raw),
        }
    }
}

/// Lowercased, with apostrophes and whitespace removed: `"Cho'Gath"` -> `"chogath"`.
pub fn strip_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub struct NameRule {
    pub label: &'static str,
    pub matches: fn(&ChampionInfo, &NameQuery<'_>) -> bool,
}

fn exact_name(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    c.name == q.raw
}

fn lowercase_name(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    c.name.to_lowercase() == q.lower
}

fn exact_id(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    c.id == q.raw
}

fn lowercase_id(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    c.id.to_lowercase() == q.lower
}

fn stripped_name(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    strip_name(&c.name) == q.stripped
}

fn stripped_id(c: &ChampionInfo, q: &NameQuery<'_>) -> bool {
    strip_name(&c.id) == q.stripped
}

/// Name fallbacks, strongest first. Resolution stops at the first rule any entry
/// satisfies.
pub const CHAMPION_NAME_RULES: [NameRule; 6] = [
    NameRule { label: "exact name", matches: exact_name },
    NameRule { label: "case-insensitive name", matches: lowercase_name },
    NameRule { label: "exact id", matches: exact_id },
    NameRule { label: "case-insensitive id", matches: lowercase_id },
    NameRule { label: "stripped name", matches: stripped_name },
    NameRule { label: "stripped id", matches: stripped_id },
];

/// The champion entry a name resolves to, with the label of the rule that matched.
pub fn find_champion_by_name<'s>(
    snapshot: &'s ReferenceSnapshot,
    name: &str,
) -> Option<(&'s ChampionInfo, &'static str)> {
    if name.is_empty() {
        return None;
    }

    let query = NameQuery::new(name);
    CHAMPION_NAME_RULES.iter().find_map(|rule| {
        snapshot
            .champions
            .values()
            .find(|champion| (rule.matches)(champion, &query))
            .map(|champion| (champion, rule.label))
    })
}

/// Champion entry by key first, then by name.
pub fn find_champion<'s>(
    snapshot: &'s ReferenceSnapshot,
    name: Option<&str>,
    id: Option<i32>,
) -> Option<&'s ChampionInfo> {
    if let Some(id) = id.filter(|id| *id != 0) {
        if let Some(champion) = snapshot.champions.get(&id.to_string()) {
            return Some(champion);
        }
        debug!("champion key {} not in snapshot {}", id, snapshot.latest_version);
    }

    let (champion, rule) = find_champion_by_name(snapshot, name?)?;
    debug!("champion {:?} matched {} by {}", name, champion.id, rule);
    Some(champion)
}

pub fn resolve_champion(snapshot: Option<&ReferenceSnapshot>, name: Option<&str>, id: Option<i32>) -> AssetRef {
    let Some(snapshot) = snapshot else {
        return AssetRef::Sentinel;
    };

    match find_champion(snapshot, name, id) {
        Some(champion) => AssetRef::Image(ImageRef {
            kind: AssetKind::Champion,
            name: champion.name.clone(),
            path: format!("{}/img/champion/{}", snapshot.latest_version, champion.image.full),
        }),
        None => {
            debug!("champion {:?} (key {:?}) unresolved", name, id);
            AssetRef::Sentinel
        }
    }
}

pub fn resolve_item(snapshot: Option<&ReferenceSnapshot>, id: i32) -> AssetRef {
    // 0 is an empty slot
    let Some(snapshot) = snapshot.filter(|_| id != 0) else {
        return AssetRef::Sentinel;
    };

    match snapshot.items.get(&id.to_string()) {
        Some(item) => AssetRef::Image(ImageRef {
            kind: AssetKind::Item,
            name: item.name.clone(),
            path: format!("{}/img/item/{}", snapshot.latest_version, item.image.full),
        }),
        None => {
            debug!("item {} unresolved", id);
            AssetRef::Sentinel
        }
    }
}

pub fn resolve_spell(snapshot: Option<&ReferenceSnapshot>, id: i32) -> AssetRef {
    let Some(snapshot) = snapshot.filter(|_| id != 0) else {
        return AssetRef::Sentinel;
    };

    match snapshot.summoner_spells.get(&id.to_string()) {
        Some(spell) => AssetRef::Image(ImageRef {
            kind: AssetKind::Spell,
            name: spell.name.clone(),
            path: format!("{}/img/spell/{}", snapshot.latest_version, spell.image.full),
        }),
        None => {
            debug!("summoner spell {} unresolved", id);
            AssetRef::Sentinel
        }
    }
}

pub fn resolve_rune(snapshot: Option<&ReferenceSnapshot>, id: i32) -> AssetRef {
    let Some(snapshot) = snapshot.filter(|_| id != 0) else {
        return AssetRef::Sentinel;
    };

    match snapshot.runes.get(&id) {
        Some(rune) => AssetRef::Image(ImageRef {
            kind: AssetKind::Rune,
            name: rune.name.clone(),
            path: rune.icon.clone(),
        }),
        None => {
            debug!("rune {} unresolved", id);
            AssetRef::Sentinel
        }
    }
}
