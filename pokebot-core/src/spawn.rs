//! Spawn configuration draft and its six-step wizard.

use crate::Record;
use crate::catalog::{DEFAULT_SHINY_CHANCE, Rarity};
use crate::form::{count_input, is_blank, percentage_input, toggle_selection};
use crate::steps::WizardStep;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Odds written as `numerator/denominator`, e.g. `1/4096`.
#[must_use]
pub fn is_shiny_chance_valid(value: &str) -> bool {
    regex::Regex::new(r"^\d+\s*/\s*\d+$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStep {
    Channels,
    Timing,
    ShinyChance,
    Roster,
    RarityPercentages,
    Finalize,
}

impl WizardStep for SpawnStep {
    const ALL: &'static [Self] = &[
        Self::Channels,
        Self::Timing,
        Self::ShinyChance,
        Self::Roster,
        Self::RarityPercentages,
        Self::Finalize,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Channels => "Channels",
            Self::Timing => "Timing",
            Self::ShinyChance => "Shiny Chance",
            Self::Roster => "Pokémon Roster",
            Self::RarityPercentages => "Rarity %",
            Self::Finalize => "Finalize & Save",
        }
    }
}

/// Why a spawn wizard step cannot be left yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnIssue {
    #[error("Load the channel list first.")]
    ChannelsNotLoaded,
    #[error("Select at least one channel.")]
    NoChannels,
    #[error("Both timings must be greater than zero.")]
    InvalidTiming,
    #[error("Shiny chance must look like 1/4096.")]
    InvalidShinyChance,
    #[error("Add at least one Pokémon to the roster.")]
    EmptyRoster,
    #[error("Rarity percentages must total exactly 100% (currently {0}%).")]
    PercentageTotal(u32),
    #[error("Give this configuration a name.")]
    MissingName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub selected_channel_ids: Vec<String>,
    /// Minutes between spawns.
    pub time_between_spawns: u32,
    /// Minutes before a spawn flees.
    pub time_to_flee: u32,
    pub shiny_chance: String,
    pub pokemon_roster: BTreeMap<Rarity, Vec<String>>,
    pub rarity_percentages: BTreeMap<Rarity, u8>,
    pub is_enabled: bool,
}

impl SpawnConfig {
    /// Fresh draft: 30/15 minute timing, default shiny odds, every tier empty at 0%.
    #[must_use]
    pub fn new_draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            selected_channel_ids: Vec::new(),
            time_between_spawns: 30,
            time_to_flee: 15,
            shiny_chance: DEFAULT_SHINY_CHANCE.to_string(),
            pokemon_roster: Rarity::ALL.iter().map(|r| (*r, Vec::new())).collect(),
            rarity_percentages: Rarity::ALL.iter().map(|r| (*r, 0)).collect(),
            is_enabled: true,
        }
    }

    pub fn toggle_channel(&mut self, channel_id: &str) {
        toggle_selection(&mut self.selected_channel_ids, channel_id);
    }

    pub fn set_time_between_spawns(&mut self, raw: &str) {
        self.time_between_spawns = count_input(raw);
    }

    pub fn set_time_to_flee(&mut self, raw: &str) {
        self.time_to_flee = count_input(raw);
    }

    /// Add a trimmed name to a tier. Blank input and duplicates are ignored.
    /// Returns whether the roster changed.
    pub fn add_to_roster(&mut self, rarity: Rarity, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let tier = self.pokemon_roster.entry(rarity).or_default();
        if tier.iter().any(|existing| existing == name) {
            return false;
        }
        tier.push(name.to_string());
        true
    }

    pub fn remove_from_roster(&mut self, rarity: Rarity, name: &str) {
        if let Some(tier) = self.pokemon_roster.get_mut(&rarity) {
            tier.retain(|existing| existing != name);
        }
    }

    pub fn set_percentage(&mut self, rarity: Rarity, raw: &str) {
        self.rarity_percentages
            .insert(rarity, percentage_input(raw));
    }

    #[must_use]
    pub fn percentage_total(&self) -> u32 {
        self.rarity_percentages.values().map(|p| u32::from(*p)).sum()
    }

    #[must_use]
    pub fn roster_size(&self) -> usize {
        self.pokemon_roster.values().map(Vec::len).sum()
    }

    /// Check a single step against the current draft.
    ///
    /// # Errors
    ///
    /// Returns the first issue blocking the step.
    pub fn validate_step(&self, step: SpawnStep, channels_loaded: bool) -> Result<(), SpawnIssue> {
        match step {
            SpawnStep::Channels if !channels_loaded => Err(SpawnIssue::ChannelsNotLoaded),
            SpawnStep::Channels if self.selected_channel_ids.is_empty() => {
                Err(SpawnIssue::NoChannels)
            }
            SpawnStep::Timing if self.time_between_spawns == 0 || self.time_to_flee == 0 => {
                Err(SpawnIssue::InvalidTiming)
            }
            SpawnStep::ShinyChance if !is_shiny_chance_valid(&self.shiny_chance) => {
                Err(SpawnIssue::InvalidShinyChance)
            }
            SpawnStep::Roster if self.roster_size() == 0 => Err(SpawnIssue::EmptyRoster),
            SpawnStep::RarityPercentages if self.percentage_total() != 100 => {
                Err(SpawnIssue::PercentageTotal(self.percentage_total()))
            }
            SpawnStep::Finalize if is_blank(&self.name) => Err(SpawnIssue::MissingName),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn is_step_valid(&self, step: SpawnStep, channels_loaded: bool) -> bool {
        self.validate_step(step, channels_loaded).is_ok()
    }

    /// Whether every step passes, i.e. the draft may be saved.
    #[must_use]
    pub fn is_complete(&self, channels_loaded: bool) -> bool {
        SpawnStep::ALL
            .iter()
            .all(|step| self.is_step_valid(*step, channels_loaded))
    }

    #[must_use]
    pub fn success_message(&self) -> String {
        format!("Configuration \"{}\" saved successfully", self.name)
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self::new_draft()
    }
}

impl Record for SpawnConfig {
    const COLLECTION: &'static str = "spawn-configs";
    const ID_PREFIX: &'static str = "spawn";

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_draft() -> SpawnConfig {
        let mut draft = SpawnConfig::new_draft();
        draft.toggle_channel("channel-1");
        draft.add_to_roster(Rarity::Common, "Pidgey");
        draft.set_percentage(Rarity::Common, "100");
        draft.name = "Test".into();
        draft
    }

    #[test]
    fn drafts_are_independent() {
        let mut first = SpawnConfig::new_draft();
        first.add_to_roster(Rarity::Rare, "Pikachu");
        let second = SpawnConfig::new_draft();
        assert_eq!(second.roster_size(), 0);
        assert_eq!(second.rarity_percentages.len(), Rarity::ALL.len());
    }

    #[test]
    fn finalize_requires_exactly_one_hundred_percent() {
        let mut draft = ready_draft();
        assert!(draft.is_step_valid(SpawnStep::RarityPercentages, true));
        assert!(draft.is_complete(true));

        draft.set_percentage(Rarity::Common, "99");
        assert_eq!(
            draft.validate_step(SpawnStep::RarityPercentages, true),
            Err(SpawnIssue::PercentageTotal(99))
        );
        assert!(!draft.is_complete(true));

        draft.set_percentage(Rarity::Common, "100");
        draft.set_percentage(Rarity::Mythical, "1");
        assert_eq!(draft.percentage_total(), 101);
        assert!(!draft.is_complete(true));
    }

    #[test]
    fn roster_add_trims_and_dedups() {
        let mut draft = SpawnConfig::new_draft();
        assert!(draft.add_to_roster(Rarity::Common, "  Rattata "));
        assert!(!draft.add_to_roster(Rarity::Common, "Rattata"));
        assert!(!draft.add_to_roster(Rarity::Common, "   "));
        assert_eq!(draft.pokemon_roster[&Rarity::Common], vec!["Rattata"]);
        draft.remove_from_roster(Rarity::Common, "Rattata");
        assert!(!draft.is_step_valid(SpawnStep::Roster, true));
    }

    #[test]
    fn channel_step_needs_loaded_list_and_selection() {
        let mut draft = SpawnConfig::new_draft();
        assert_eq!(
            draft.validate_step(SpawnStep::Channels, false),
            Err(SpawnIssue::ChannelsNotLoaded)
        );
        assert_eq!(
            draft.validate_step(SpawnStep::Channels, true),
            Err(SpawnIssue::NoChannels)
        );
        draft.toggle_channel("channel-2");
        assert!(draft.is_step_valid(SpawnStep::Channels, true));
    }

    #[test]
    fn shiny_chance_and_timing_rules() {
        let mut draft = ready_draft();
        draft.shiny_chance = "1 / 8192".into();
        assert!(draft.is_step_valid(SpawnStep::ShinyChance, true));
        draft.shiny_chance = "one in 4096".into();
        assert!(!draft.is_step_valid(SpawnStep::ShinyChance, true));

        draft.set_time_to_flee("abc");
        assert_eq!(draft.time_to_flee, 0);
        assert!(!draft.is_step_valid(SpawnStep::Timing, true));
    }

    #[test]
    fn percentage_input_is_clamped() {
        let mut draft = SpawnConfig::new_draft();
        draft.set_percentage(Rarity::Epic, "250");
        assert_eq!(draft.rarity_percentages[&Rarity::Epic], 100);
        draft.set_percentage(Rarity::Epic, "nope");
        assert_eq!(draft.rarity_percentages[&Rarity::Epic], 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(ready_draft()).unwrap();
        assert_eq!(json["timeBetweenSpawns"], 30);
        assert_eq!(json["pokemonRoster"]["Common"][0], "Pidgey");
        assert!(json.get("id").is_none());
    }
}
