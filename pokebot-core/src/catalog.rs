//! Static reference data shared by the configuration pages.
//!
//! Channels, item names and NPC names are fixed mock lists. Nothing in the
//! dashboard creates or destroys them.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const LATEST_RELEVANT_GAME_VERSION: &str = "scarlet-violet";
pub const FALLBACK_GAME_VERSION: &str = "ultra-sun-ultra-moon";
pub const DEFAULT_SHINY_CHANCE: &str = "1/4096";

/// A Discord channel the bot can be pointed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

const CHANNELS: [(&str, &str); 7] = [
    ("channel-1", "general"),
    ("channel-2", "pokemon-spawns"),
    ("channel-3", "battle-zone-alpha"),
    ("channel-4", "trading-hub"),
    ("channel-5", "event-arena"),
    ("channel-6", "off-topic-chat"),
    ("channel-7", "moderator-logs"),
];

/// The fixed channel list served by the mock backend.
#[must_use]
pub fn mock_channels() -> Vec<Channel> {
    CHANNELS
        .iter()
        .map(|(id, name)| Channel::new(id, name))
        .collect()
}

/// Resolve a channel id to its display name.
#[must_use]
pub fn channel_name(id: &str) -> Option<&'static str> {
    CHANNELS
        .iter()
        .find(|(channel_id, _)| *channel_id == id)
        .map(|(_, name)| *name)
}

/// Resolve a channel display name to its id.
#[must_use]
pub fn channel_id_by_name(name: &str) -> Option<&'static str> {
    CHANNELS
        .iter()
        .find(|(_, channel_name)| *channel_name == name)
        .map(|(id, _)| *id)
}

pub const POKEMON_NAMES: [&str; 13] = [
    "Bulbasaur",
    "Ivysaur",
    "Venusaur",
    "Charmander",
    "Charmeleon",
    "Charizard",
    "Squirtle",
    "Wartortle",
    "Blastoise",
    "Pikachu",
    "Raichu",
    "Eevee",
    "Snorlax",
];

pub const ITEM_NAMES: [&str; 12] = [
    "Pokeball",
    "Greatball",
    "Ultraball",
    "Masterball",
    "Potion",
    "Super Potion",
    "Hyper Potion",
    "Revive",
    "Max Revive",
    "Full Heal",
    "Escape Rope",
    "Repel",
];

pub const NPC_NAMES: [&str; 6] = [
    "Youngster Joey",
    "Bug Catcher Rick",
    "Lass Susie",
    "Ace Trainer AI",
    "Gym Leader Brock",
    "Elite Four Lorelei",
];

pub const POKEMON_TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Spawn rarity tier. Serialized by name so it can key JSON maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
}

impl Rarity {
    pub const ALL: [Self; 6] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythical,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythical => "Mythical",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.label().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_lookup_is_bidirectional() {
        assert_eq!(channel_name("channel-1"), Some("general"));
        assert_eq!(channel_id_by_name("trading-hub"), Some("channel-4"));
        assert_eq!(channel_name("channel-99"), None);
        assert_eq!(mock_channels().len(), 7);
    }

    #[test]
    fn rarity_parses_case_insensitively_and_keys_json_maps() {
        assert_eq!(Rarity::parse(" legendary "), Some(Rarity::Legendary));
        assert_eq!(Rarity::parse("shiny"), None);

        let mut map = std::collections::BTreeMap::new();
        map.insert(Rarity::Common, 70_u8);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Common":70}"#);
    }
}
