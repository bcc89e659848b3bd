//! Champion aggression tables, grouped by role.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Lane or position a champion is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, poise::ChoiceParameter)]
pub enum Role {
    /// Top lane
    #[name = "top"]
    Top,

    /// Jungle
    #[name = "jungle"]
    Jungle,

    /// Mid lane
    #[name = "mid"]
    Mid,

    /// Bot lane carry
    #[name = "adc"]
    Adc,

    /// Bot lane support
    #[name = "support"]
    Support,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Self; 5] = [Self::Top, Self::Jungle, Self::Mid, Self::Adc, Self::Support];

    /// Key used in commands and in the roll history.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Jungle => "jungle",
            Self::Mid => "mid",
            Self::Adc => "adc",
            Self::Support => "support",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

/// Aggression score of a champion in a given role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterScore {
    pub role: Role,
    pub name: String,
    pub score: u8,
}

/// Everything known about one champion across roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionProfile {
    pub name: String,
    pub scores: Vec<(Role, u8)>,
}

/// Immutable set of per-role aggression tables.
///
/// A name is unique inside a role (a later entry replaces an earlier one) but may appear in several
/// roles with different scores.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    tables: BTreeMap<Role, BTreeMap<String, u8>>,
}

impl Roster {
    /// Builds the roster shipped with the bot.
    pub fn builtin() -> Self {
        let entries = [
            (Role::Top, TOP_LANE),
            (Role::Jungle, JUNGLE),
            (Role::Mid, MID_LANE),
            (Role::Adc, ADC),
            (Role::Support, SUPPORT),
        ]
        .into_iter()
        .flat_map(|(role, table)| {
            table.iter().map(move |&(name, score)| CharacterScore {
                role,
                name: name.to_owned(),
                score,
            })
        });
        Self::from_scores(entries)
    }

    pub fn from_scores(scores: impl IntoIterator<Item = CharacterScore>) -> Self {
        let mut tables: BTreeMap<Role, BTreeMap<String, u8>> = BTreeMap::new();
        for CharacterScore { role, name, score } in scores {
            tables.entry(role).or_default().insert(name, score);
        }
        Self { tables }
    }

    /// Score of `name` in `role`, if the champion is listed there.
    pub fn score(&self, role: Role, name: &str) -> Option<u8> {
        self.tables.get(&role)?.get(name).copied()
    }

    /// Roles covered by `scope`: every role when no filter is given.
    pub fn roles_in_scope(scope: Option<Role>) -> Vec<Role> {
        scope.map_or_else(|| Role::ALL.to_vec(), |role| vec![role])
    }

    /// Sorted, deduplicated names whose score lies in `range` for at least one role in scope.
    pub fn candidates(&self, scope: Option<Role>, range: &RangeInclusive<u8>) -> Vec<&str> {
        Self::roles_in_scope(scope)
            .into_iter()
            .filter_map(|role| self.tables.get(&role))
            .flat_map(|table| table.iter())
            .filter(|(_, score)| range.contains(*score))
            .map(|(name, _)| name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn names(&self) -> BTreeSet<&str> {
        self.tables.values().flat_map(|table| table.keys()).map(String::as_str).collect()
    }

    /// Case-insensitive lookup. Punctuation and spaces are ignored when no exact match exists, so
    /// `chogath` finds `Cho'Gath`.
    pub fn find(&self, query: &str) -> Option<ChampionProfile> {
        let query = query.trim();
        let names = self.names();
        let name = names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(query))
            .or_else(|| {
                let wanted = letters(query);
                names.iter().find(|name| !wanted.is_empty() && letters(name) == wanted)
            })?;

        let scores = Role::ALL
            .into_iter()
            .filter_map(|role| self.score(role, name).map(|score| (role, score)))
            .collect();
        Some(ChampionProfile {
            name: (*name).to_owned(),
            scores,
        })
    }

    /// At most `limit` names containing `query`, ignoring case and punctuation.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let wanted = letters(query);
        if wanted.is_empty() {
            return Vec::new();
        }
        self.names()
            .into_iter()
            .filter(|name| letters(name).contains(&wanted))
            .take(limit)
            .collect()
    }
}

/// Lowercased ASCII letters of `text`
fn letters(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphabetic).map(|c| c.to_ascii_lowercase()).collect()
}

const TOP_LANE: &[(&str, u8)] = &[
    ("Aatrox", 17),
    ("Camille", 17),
    ("Cho'Gath", 10),
    ("Darius", 17),
    ("Dr. Mundo", 9),
    ("Fiora", 17),
    ("Garen", 12),
    ("Gnar", 12),
    ("Illaoi", 14),
    ("Irelia", 18),
    ("Jax", 16),
    ("Jayce", 16),
    ("Kayle", 7),
    ("Kennen", 13),
    ("Kled", 20),
    ("Malphite", 10),
    ("Maokai", 9),
    ("Mordekaiser", 14),
    ("Nasus", 9),
    ("Ornn", 8),
    ("Poppy", 10),
    ("Quinn", 15),
    ("Renekton", 17),
    ("Riven", 18),
    ("Rumble", 14),
    ("Sett", 15),
    ("Shen", 8),
    ("Singed", 14),
    ("Sion", 9),
    ("Tryndamere", 18),
    ("Urgot", 15),
    ("Volibear", 14),
    ("Yorick", 12),
    ("Teemo", 1),
];

const SUPPORT: &[(&str, u8)] = &[
    ("Alistar", 15),
    ("Bard", 11),
    ("Blitzcrank", 16),
    ("Braum", 10),
    ("Janna", 6),
    ("Karma", 9),
    ("Leona", 17),
    ("Lulu", 7),
    ("Morgana", 10),
    ("Nami", 8),
    ("Nautilus", 16),
    ("Pyke", 18),
    ("Rakan", 14),
    ("Rell", 15),
    ("Renata Glasc", 10),
    ("Sona", 5),
    ("Soraka", 4),
    ("Tahm Kench", 9),
    ("Taric", 6),
    ("Thresh", 16),
    ("Yuumi", 2),
    ("Zilean", 7),
    ("Zyra", 13),
    ("Milio", 5),
    ("Malphite", 20),
    ("Teemo", 1),
];

const JUNGLE: &[(&str, u8)] = &[
    ("Amumu", 10),
    ("Bel'Veth", 16),
    ("Briar", 19),
    ("Diana", 16),
    ("Ekko", 15),
    ("Elise", 17),
    ("Evelynn", 17),
    ("Fiddlesticks", 13),
    ("Gragas", 12),
    ("Graves", 16),
    ("Hecarim", 17),
    ("Ivern", 2),
    ("Jarvan IV", 16),
    ("Jax", 16),
    ("Karthus", 14),
    ("Kayn", 17),
    ("Kindred", 16),
    ("Kha'Zix", 18),
    ("Lee Sin", 17),
    ("Lillia", 13),
    ("Maokai", 9),
    ("Master Yi", 17),
    ("Nidalee", 16),
    ("Nocturne", 16),
    ("Nunu & Willump", 7),
    ("Poppy", 9),
    ("Rammus", 9),
    ("Rek'Sai", 17),
    ("Rengar", 18),
    ("Sejuani", 10),
    ("Shaco", 18),
    ("Skarner", 8),
    ("Talon", 17),
    ("Trundle", 12),
    ("Udyr", 15),
    ("Vi", 16),
    ("Viego", 16),
    ("Warwick", 14),
    ("Wukong", 15),
    ("Xin Zhao", 15),
    ("Zac", 9),
    ("Teemo", 1),
    ("Malphite", 20),
];

const ADC: &[(&str, u8)] = &[
    ("Aphelios", 13),
    ("Ashe", 10),
    ("Caitlyn", 12),
    ("Draven", 18),
    ("Ezreal", 11),
    ("Jhin", 12),
    ("Jinx", 13),
    ("Kai'Sa", 15),
    ("Kalista", 17),
    ("Kog'Maw", 9),
    ("Lucian", 20),
    ("Miss Fortune", 12),
    ("Nilah", 16),
    ("Samira", 18),
    ("Senna", 8),
    ("Sivir", 10),
    ("Tristana", 16),
    ("Twitch", 14),
    ("Varus", 12),
    ("Vayne", 15),
    ("Xayah", 12),
    ("Zeri", 15),
    ("Teemo", 1),
];

const MID_LANE: &[(&str, u8)] = &[
    ("Ahri", 12),
    ("Akali", 17),
    ("Anivia", 7),
    ("Annie", 9),
    ("Aurelion Sol", 9),
    ("Azir", 12),
    ("Cassiopeia", 14),
    ("Corki", 11),
    ("Diana", 16),
    ("Ekko", 15),
    ("Fizz", 17),
    ("Galio", 8),
    ("Irelia", 17),
    ("Jayce", 16),
    ("Kassadin", 13),
    ("Katarina", 17),
    ("LeBlanc", 16),
    ("Lissandra", 10),
    ("Lux", 9),
    ("Malzahar", 8),
    ("Neeko", 11),
    ("Orianna", 10),
    ("Qiyana", 18),
    ("Ryze", 11),
    ("Seraphine", 6),
    ("Sylas", 16),
    ("Syndra", 12),
    ("Taliyah", 12),
    ("Talon", 17),
    ("Twisted Fate", 10),
    ("Veigar", 10),
    ("Vel'Koz", 10),
    ("Viktor", 11),
    ("Vladimir", 11),
    ("Xerath", 10),
    ("Yasuo", 17),
    ("Yone", 17),
    ("Zed", 18),
    ("Ziggs", 10),
    ("Zoe", 14),
    ("Teemo", 1),
    ("Malphite", 20),
];
