//! CPU battlers: battle UI settings, AI battler drafts and the roster.

use crate::Record;
use crate::catalog::ITEM_NAMES;
use crate::form::{count_input, is_blank, toggle_selection};
use crate::steps::WizardStep;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const TEAM_SIZE: usize = 6;
pub const BATTLE_UI_SAVED_MESSAGE: &str = "Battle UI settings saved successfully!";
pub const AI_DELETED_MESSAGE: &str = "AI Battler deleted.";

#[must_use]
pub fn is_avatar_url_valid(url: &str) -> bool {
    regex::Regex::new(r"^https?://.+\..+")
        .map(|re| re.is_match(url))
        .unwrap_or(false)
}

/// Top-level sections of the CPU setup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuSetupStep {
    BattleUi,
    AiBattlers,
}

impl WizardStep for CpuSetupStep {
    const ALL: &'static [Self] = &[Self::BattleUi, Self::AiBattlers];

    fn label(self) -> &'static str {
        match self {
            Self::BattleUi => "Battle UI",
            Self::AiBattlers => "AI Battlers",
        }
    }
}

/// Steps of the add/edit battler form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiStep {
    Details,
    Team,
    RewardsAndChannels,
}

impl WizardStep for AiStep {
    const ALL: &'static [Self] = &[Self::Details, Self::Team, Self::RewardsAndChannels];

    fn label(self) -> &'static str {
        match self {
            Self::Details => "Details",
            Self::Team => "Pokémon Team",
            Self::RewardsAndChannels => "Rewards & Channels",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Novice,
    Intermediate,
    Expert,
    Professional,
    LeagueChallenger,
    MastersApprentice,
    PokemonMaster,
}

impl Difficulty {
    pub const ALL: [Self; 8] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Expert,
        Self::Professional,
        Self::LeagueChallenger,
        Self::MastersApprentice,
        Self::PokemonMaster,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
            Self::Professional => "Professional",
            Self::LeagueChallenger => "League Challenger",
            Self::MastersApprentice => "Master's Apprentice",
            Self::PokemonMaster => "Pokémon Master",
        }
    }

    /// Inclusive level range of the battler's team.
    #[must_use]
    pub const fn level_range(self) -> (u8, u8) {
        match self {
            Self::Beginner => (3, 7),
            Self::Novice => (8, 15),
            Self::Intermediate => (16, 25),
            Self::Expert => (23, 32),
            Self::Professional => (33, 45),
            Self::LeagueChallenger => (46, 60),
            Self::MastersApprentice => (60, 79),
            Self::PokemonMaster => (80, 100),
        }
    }

    /// Select label, e.g. `Beginner (Lv. 3-7)`.
    #[must_use]
    pub fn label(self) -> String {
        let (low, high) = self.level_range();
        format!("{} (Lv. {low}-{high})", self.name())
    }

    /// Stable value used by form controls.
    #[must_use]
    pub fn value(self) -> String {
        format!("{self:?}")
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six team slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "pokemonName", rename_all = "camelCase")]
pub enum PokemonSlot {
    #[default]
    Empty,
    Species(String),
    Random,
}

impl PokemonSlot {
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        !matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }

    /// Text shown in the slot's name input.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Species(name) => name,
            Self::Empty | Self::Random => "",
        }
    }

    /// Lowercased, trimmed name for the sprite lookup.
    #[must_use]
    pub fn sprite_query(&self) -> Option<String> {
        match self {
            Self::Species(name) if !is_blank(name) => Some(name.trim().to_lowercase()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardItem {
    pub item_name: String,
    pub min_amount: u32,
    pub max_amount: u32,
}

impl RewardItem {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.item_name) && self.min_amount > 0 && self.max_amount >= self.min_amount
    }
}

impl Default for RewardItem {
    fn default() -> Self {
        Self {
            item_name: ITEM_NAMES[0].to_string(),
            min_amount: 1,
            max_amount: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardField {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiIssue {
    #[error("Give this AI battler a name.")]
    MissingName,
    #[error("Please enter a valid URL.")]
    InvalidAvatarUrl,
    #[error("Assign at least one Pokémon or mark slots as random.")]
    EmptyTeam,
    #[error("Min gold should not exceed max gold.")]
    GoldRange,
    #[error("Select at least one channel for this AI.")]
    NoChannels,
    #[error("Item amounts must be valid (min > 0, max >= min).")]
    InvalidReward,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ai_name: String,
    pub avatar_url: String,
    pub pokemon_slots: [PokemonSlot; TEAM_SIZE],
    pub difficulty: Difficulty,
    pub item_rewards: Vec<RewardItem>,
    pub min_gold_reward: u32,
    pub max_gold_reward: u32,
    pub allowed_channel_ids: Vec<String>,
}

impl AiConfig {
    #[must_use]
    pub fn new_draft() -> Self {
        Self {
            id: None,
            ai_name: String::new(),
            avatar_url: String::new(),
            pokemon_slots: Default::default(),
            difficulty: Difficulty::Beginner,
            item_rewards: Vec::new(),
            min_gold_reward: 10,
            max_gold_reward: 50,
            allowed_channel_ids: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Typed name for a slot. Ignored while the slot is random.
    pub fn set_slot_name(&mut self, index: usize, raw: &str) {
        let Some(slot) = self.pokemon_slots.get_mut(index) else {
            return;
        };
        if slot.is_random() {
            return;
        }
        *slot = if is_blank(raw) {
            PokemonSlot::Empty
        } else {
            PokemonSlot::Species(raw.to_string())
        };
    }

    /// Marking a slot random clears its name; unmarking leaves it empty.
    pub fn set_slot_random(&mut self, index: usize, random: bool) {
        if let Some(slot) = self.pokemon_slots.get_mut(index) {
            *slot = if random {
                PokemonSlot::Random
            } else {
                PokemonSlot::Empty
            };
        }
    }

    #[must_use]
    pub fn filled_slots(&self) -> usize {
        self.pokemon_slots.iter().filter(|s| s.is_filled()).count()
    }

    pub fn set_min_gold(&mut self, raw: &str) {
        self.min_gold_reward = count_input(raw);
    }

    pub fn set_max_gold(&mut self, raw: &str) {
        self.max_gold_reward = count_input(raw);
    }

    pub fn toggle_channel(&mut self, channel_id: &str) {
        toggle_selection(&mut self.allowed_channel_ids, channel_id);
    }

    pub fn add_reward(&mut self) {
        self.item_rewards.push(RewardItem::default());
    }

    pub fn remove_reward(&mut self, index: usize) {
        if index < self.item_rewards.len() {
            self.item_rewards.remove(index);
        }
    }

    pub fn set_reward_item(&mut self, index: usize, item_name: &str) {
        if let Some(reward) = self.item_rewards.get_mut(index) {
            reward.item_name = item_name.to_string();
        }
    }

    pub fn set_reward_amount(&mut self, index: usize, field: RewardField, raw: &str) {
        if let Some(reward) = self.item_rewards.get_mut(index) {
            let value = count_input(raw);
            match field {
                RewardField::Min => reward.min_amount = value,
                RewardField::Max => reward.max_amount = value,
            }
        }
    }

    /// # Errors
    ///
    /// Returns the first issue blocking the step.
    pub fn validate_step(&self, step: AiStep) -> Result<(), AiIssue> {
        match step {
            AiStep::Details if is_blank(&self.ai_name) => Err(AiIssue::MissingName),
            AiStep::Details if !is_avatar_url_valid(self.avatar_url.trim()) => {
                Err(AiIssue::InvalidAvatarUrl)
            }
            AiStep::Team if self.filled_slots() == 0 => Err(AiIssue::EmptyTeam),
            AiStep::RewardsAndChannels if self.min_gold_reward > self.max_gold_reward => {
                Err(AiIssue::GoldRange)
            }
            AiStep::RewardsAndChannels if self.allowed_channel_ids.is_empty() => {
                Err(AiIssue::NoChannels)
            }
            AiStep::RewardsAndChannels if !self.item_rewards.iter().all(RewardItem::is_valid) => {
                Err(AiIssue::InvalidReward)
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn is_step_valid(&self, step: AiStep) -> bool {
        self.validate_step(step).is_ok()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        AiStep::ALL.iter().all(|step| self.is_step_valid(*step))
    }

    #[must_use]
    pub fn success_message(&self) -> String {
        format!("AI Battler \"{}\" saved successfully!", self.ai_name)
    }

    #[must_use]
    pub fn form_title(&self) -> String {
        if self.is_editing() {
            let name = if is_blank(&self.ai_name) { "AI" } else { &self.ai_name };
            format!("Edit {name}")
        } else {
            "Add New AI Battler".to_string()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new_draft()
    }
}

impl Record for AiConfig {
    const COLLECTION: &'static str = "ai-battlers";
    const ID_PREFIX: &'static str = "ai";

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Configured battlers in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiRoster {
    battlers: Vec<AiConfig>,
}

impl AiRoster {
    #[must_use]
    pub const fn from_battlers(battlers: Vec<AiConfig>) -> Self {
        Self { battlers }
    }

    /// The seeded roster shown before anything is saved.
    #[must_use]
    pub fn mock() -> Self {
        let team = ["Garchomp", "Lucario", "Milotic", "Spiritomb", "Togekiss", "Roserade"]
            .map(|name| PokemonSlot::Species(name.to_string()));
        Self::from_battlers(vec![AiConfig {
            id: Some("mock-ai-1".to_string()),
            ai_name: "Champion Cynthia".to_string(),
            avatar_url: "https://archives.bulbagarden.net/media/upload/thumb/2/27/Cynthia_Masters.png/200px-Cynthia_Masters.png".to_string(),
            pokemon_slots: team,
            difficulty: Difficulty::PokemonMaster,
            item_rewards: vec![RewardItem {
                item_name: "Masterball".to_string(),
                min_amount: 1,
                max_amount: 1,
            }],
            min_gold_reward: 5000,
            max_gold_reward: 10000,
            allowed_channel_ids: vec!["channel-3".to_string(), "channel-5".to_string()],
        }])
    }

    #[must_use]
    pub fn battlers(&self) -> &[AiConfig] {
        &self.battlers
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.battlers.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AiConfig> {
        self.battlers.iter().find(|ai| ai.id.as_deref() == Some(id))
    }

    /// Replace the battler with the same id, or append it.
    pub fn upsert(&mut self, config: AiConfig) {
        let existing = config
            .id
            .as_deref()
            .and_then(|id| self.battlers.iter().position(|ai| ai.id.as_deref() == Some(id)));
        match existing {
            Some(pos) => self.battlers[pos] = config,
            None => self.battlers.push(config),
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.battlers.len();
        self.battlers.retain(|ai| ai.id.as_deref() != Some(id));
        self.battlers.len() != before
    }
}

/// Look and pacing of the battle screen. Stored as a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleUiSettings {
    pub background_color: String,
    pub accent_color: String,
    /// Playback multiplier, 0.5 to 3.
    pub battle_speed: f64,
    /// Seconds before a turn is forfeited.
    pub turn_time_limit: u32,
}

impl BattleUiSettings {
    pub fn set_battle_speed(&mut self, raw: &str) {
        if let Ok(speed) = raw.trim().parse::<f64>() {
            self.battle_speed = speed.clamp(0.5, 3.0);
        }
    }

    pub fn set_turn_time_limit(&mut self, raw: &str) {
        self.turn_time_limit = count_input(raw).max(5);
    }
}

impl Default for BattleUiSettings {
    fn default() -> Self {
        Self {
            background_color: "#F3F4F6".to_string(),
            accent_color: "#3B82F6".to_string(),
            battle_speed: 1.0,
            turn_time_limit: 30,
        }
    }
}

impl Record for BattleUiSettings {
    const COLLECTION: &'static str = "battle-ui";
    const ID_PREFIX: &'static str = "battle-ui";

    fn record_id(&self) -> Option<&str> {
        Some("current")
    }

    fn assign_id(&mut self, _id: String) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_battler() -> AiConfig {
        let mut ai = AiConfig::new_draft();
        ai.ai_name = "Youngster Joey".into();
        ai.avatar_url = "https://example.com/joey.png".into();
        ai.set_slot_name(0, "Rattata");
        ai.toggle_channel("channel-3");
        ai
    }

    #[test]
    fn difficulty_labels_carry_level_ranges() {
        assert_eq!(Difficulty::Beginner.label(), "Beginner (Lv. 3-7)");
        assert_eq!(Difficulty::Expert.label(), "Expert (Lv. 23-32)");
        assert_eq!(Difficulty::PokemonMaster.label(), "Pokémon Master (Lv. 80-100)");
        assert_eq!(
            Difficulty::from_value(&Difficulty::LeagueChallenger.value()),
            Some(Difficulty::LeagueChallenger)
        );
    }

    #[test]
    fn avatar_url_needs_scheme_and_dot() {
        assert!(is_avatar_url_valid("http://a.b"));
        assert!(!is_avatar_url_valid("ftp://a.b"));
        assert!(!is_avatar_url_valid("https://localhost"));

        let mut ai = valid_battler();
        ai.avatar_url = "not a url".into();
        assert_eq!(ai.validate_step(AiStep::Details), Err(AiIssue::InvalidAvatarUrl));
    }

    #[test]
    fn random_slot_clears_name_and_ignores_typing() {
        let mut ai = AiConfig::new_draft();
        ai.set_slot_name(2, "Eevee");
        assert_eq!(ai.pokemon_slots[2].sprite_query().as_deref(), Some("eevee"));
        ai.set_slot_random(2, true);
        ai.set_slot_name(2, "Snorlax");
        assert_eq!(ai.pokemon_slots[2], PokemonSlot::Random);
        assert_eq!(ai.pokemon_slots[2].name(), "");
        assert!(ai.is_step_valid(AiStep::Team));
        ai.set_slot_random(2, false);
        assert!(!ai.is_step_valid(AiStep::Team));
    }

    #[test]
    fn rewards_step_checks_gold_channels_and_items() {
        let mut ai = valid_battler();
        assert!(ai.is_complete());

        ai.add_reward();
        assert_eq!(ai.item_rewards[0].item_name, "Pokeball");
        ai.set_reward_amount(0, RewardField::Max, "0");
        assert_eq!(
            ai.validate_step(AiStep::RewardsAndChannels),
            Err(AiIssue::InvalidReward)
        );
        ai.remove_reward(0);

        ai.set_min_gold("100");
        assert_eq!(ai.validate_step(AiStep::RewardsAndChannels), Err(AiIssue::GoldRange));
        ai.set_max_gold("100");
        ai.toggle_channel("channel-3");
        assert_eq!(ai.validate_step(AiStep::RewardsAndChannels), Err(AiIssue::NoChannels));
    }

    #[test]
    fn roster_upserts_by_id() {
        let mut roster = AiRoster::mock();
        let mut cynthia = roster.battlers()[0].clone();
        cynthia.min_gold_reward = 1;
        roster.upsert(cynthia);
        assert_eq!(roster.battlers().len(), 1);
        assert_eq!(roster.get("mock-ai-1").unwrap().min_gold_reward, 1);

        let mut joey = valid_battler();
        joey.id = Some("ai-1".into());
        roster.upsert(joey);
        assert_eq!(roster.battlers().len(), 2);
        assert!(roster.remove("mock-ai-1"));
        assert!(!roster.remove("mock-ai-1"));
    }

    #[test]
    fn slots_serialize_as_tagged_values() {
        let json = serde_json::to_value(valid_battler()).unwrap();
        assert_eq!(json["pokemonSlots"][0]["kind"], "species");
        assert_eq!(json["pokemonSlots"][0]["pokemonName"], "Rattata");
        assert_eq!(json["pokemonSlots"][1]["kind"], "empty");
    }

    #[test]
    fn battle_ui_inputs_are_bounded() {
        let mut ui = BattleUiSettings::default();
        ui.set_battle_speed("9");
        assert!((ui.battle_speed - 3.0).abs() < f64::EPSILON);
        ui.set_battle_speed("fast");
        assert!((ui.battle_speed - 3.0).abs() < f64::EPSILON);
        ui.set_turn_time_limit("1");
        assert_eq!(ui.turn_time_limit, 5);
    }
}
