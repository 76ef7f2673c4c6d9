//! Item drop configuration draft and its five-step wizard.

use crate::Record;
use crate::catalog::ITEM_NAMES;
use crate::form::{count_input, is_blank, percentage_input, quantity_input, toggle_selection};
use crate::steps::WizardStep;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStep {
    Channels,
    ItemsAndRates,
    Quantities,
    Cooldown,
    Finalize,
}

impl WizardStep for ItemStep {
    const ALL: &'static [Self] = &[
        Self::Channels,
        Self::ItemsAndRates,
        Self::Quantities,
        Self::Cooldown,
        Self::Finalize,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Channels => "Channels",
            Self::ItemsAndRates => "Items & Rates",
            Self::Quantities => "Quantities",
            Self::Cooldown => "Timing/Cooldown",
            Self::Finalize => "Finalize & Save",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemIssue {
    #[error("Select at least one channel.")]
    NoChannels,
    #[error("Add at least one item.")]
    NoItems,
    #[error("The combined drop rate must be above 0%.")]
    ZeroDropRate,
    #[error("{0}: minimum must be at least 1 and not exceed the maximum.")]
    InvalidQuantity(String),
    #[error("Cooldown must be greater than zero minutes.")]
    InvalidCooldown,
    #[error("Give this configuration a name.")]
    MissingName,
}

/// Inclusive drop quantity bounds for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min > 0 && self.min <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityBound {
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub selected_channel_ids: Vec<String>,
    /// Independent per-item drop rates, each 0..=100.
    pub item_drop_rates: BTreeMap<String, u8>,
    pub item_quantities: BTreeMap<String, QuantityRange>,
    pub cooldown_minutes: u32,
    pub is_enabled: bool,
}

impl ItemConfig {
    /// Fresh draft seeded with the first five catalog items at 10%, 1-3 each.
    #[must_use]
    pub fn new_draft() -> Self {
        let seeded = ITEM_NAMES.iter().take(5);
        Self {
            id: None,
            name: String::new(),
            selected_channel_ids: Vec::new(),
            item_drop_rates: seeded.clone().map(|item| ((*item).to_string(), 10)).collect(),
            item_quantities: seeded
                .map(|item| ((*item).to_string(), QuantityRange::new(1, 3)))
                .collect(),
            cooldown_minutes: 60,
            is_enabled: true,
        }
    }

    pub fn toggle_channel(&mut self, channel_id: &str) {
        toggle_selection(&mut self.selected_channel_ids, channel_id);
    }

    /// Add an item at 10% with a 1-1 quantity. Blank names and items already
    /// present are ignored. Returns whether the list changed.
    pub fn add_item(&mut self, item_name: &str) -> bool {
        let item_name = item_name.trim();
        if item_name.is_empty() || self.item_drop_rates.contains_key(item_name) {
            return false;
        }
        self.item_drop_rates.insert(item_name.to_string(), 10);
        self.item_quantities
            .insert(item_name.to_string(), QuantityRange::new(1, 1));
        true
    }

    /// Remove an item together with its quantity bounds.
    pub fn remove_item(&mut self, item_name: &str) {
        self.item_drop_rates.remove(item_name);
        self.item_quantities.remove(item_name);
    }

    pub fn set_rate(&mut self, item_name: &str, raw: &str) {
        self.item_drop_rates
            .insert(item_name.to_string(), percentage_input(raw));
    }

    pub fn set_quantity(&mut self, item_name: &str, bound: QuantityBound, raw: &str) {
        let range = self
            .item_quantities
            .entry(item_name.to_string())
            .or_insert(QuantityRange::new(1, 1));
        let value = quantity_input(raw);
        match bound {
            QuantityBound::Min => range.min = value,
            QuantityBound::Max => range.max = value,
        }
    }

    pub fn set_cooldown(&mut self, raw: &str) {
        self.cooldown_minutes = count_input(raw);
    }

    #[must_use]
    pub fn total_drop_rate(&self) -> u32 {
        self.item_drop_rates.values().map(|r| u32::from(*r)).sum()
    }

    /// Items not yet in the drop table, for the add picker.
    #[must_use]
    pub fn available_items(&self) -> Vec<&'static str> {
        ITEM_NAMES
            .iter()
            .copied()
            .filter(|item| !self.item_drop_rates.contains_key(*item))
            .collect()
    }

    /// # Errors
    ///
    /// Returns the first issue blocking the step.
    pub fn validate_step(&self, step: ItemStep) -> Result<(), ItemIssue> {
        match step {
            ItemStep::Channels if self.selected_channel_ids.is_empty() => {
                Err(ItemIssue::NoChannels)
            }
            ItemStep::ItemsAndRates if self.item_drop_rates.is_empty() => Err(ItemIssue::NoItems),
            ItemStep::ItemsAndRates if self.total_drop_rate() == 0 => Err(ItemIssue::ZeroDropRate),
            ItemStep::Quantities => self
                .item_quantities
                .iter()
                .find(|(_, range)| !range.is_valid())
                .map_or(Ok(()), |(item, _)| {
                    Err(ItemIssue::InvalidQuantity(item.clone()))
                }),
            ItemStep::Cooldown if self.cooldown_minutes == 0 => Err(ItemIssue::InvalidCooldown),
            ItemStep::Finalize if is_blank(&self.name) => Err(ItemIssue::MissingName),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn is_step_valid(&self, step: ItemStep) -> bool {
        self.validate_step(step).is_ok()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        ItemStep::ALL.iter().all(|step| self.is_step_valid(*step))
    }

    #[must_use]
    pub fn success_message(&self) -> String {
        format!("Item configuration \"{}\" saved successfully", self.name)
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self::new_draft()
    }
}

impl Record for ItemConfig {
    const COLLECTION: &'static str = "item-configs";
    const ID_PREFIX: &'static str = "items";

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

    #[test]
    fn new_draft_seeds_first_five_items() {
        let draft = ItemConfig::new_draft();
        assert_eq!(draft.item_drop_rates.len(), 5);
        assert_eq!(draft.item_drop_rates["Pokeball"], 10);
        assert_eq!(draft.item_quantities["Potion"], QuantityRange::new(1, 3));
        assert!(!draft.item_drop_rates.contains_key("Revive"));
        assert_eq!(draft.total_drop_rate(), 50);
    }

    #[test]
    fn quantities_gate_requires_min_at_least_one_and_not_above_max() {
        let mut draft = ItemConfig::new_draft();
        assert!(draft.is_step_valid(ItemStep::Quantities));

        draft.item_quantities.insert("Potion".into(), QuantityRange::new(4, 2));
        assert_eq!(
            draft.validate_step(ItemStep::Quantities),
            Err(ItemIssue::InvalidQuantity("Potion".into()))
        );

        draft.item_quantities.insert("Potion".into(), QuantityRange::new(0, 2));
        assert!(!draft.is_step_valid(ItemStep::Quantities));

        draft.item_quantities.insert("Potion".into(), QuantityRange::new(2, 2));
        assert!(draft.is_step_valid(ItemStep::Quantities));
    }

    #[test]
    fn quantity_input_never_drops_below_one() {
        let mut draft = ItemConfig::new_draft();
        draft.set_quantity("Pokeball", QuantityBound::Min, "0");
        assert_eq!(draft.item_quantities["Pokeball"].min, 1);
        draft.set_quantity("Pokeball", QuantityBound::Max, "junk");
        assert_eq!(draft.item_quantities["Pokeball"].max, 1);
    }

    #[test]
    fn add_and_remove_keep_rates_and_quantities_in_step() {
        let mut draft = ItemConfig::new_draft();
        assert!(draft.add_item("Revive"));
        assert!(!draft.add_item("Revive"));
        assert_eq!(draft.item_drop_rates["Revive"], 10);
        assert_eq!(draft.item_quantities["Revive"], QuantityRange::new(1, 1));
        draft.remove_item("Revive");
        assert!(!draft.item_quantities.contains_key("Revive"));
        assert!(draft.available_items().contains(&"Revive"));
    }

    #[test]
    fn zero_total_rate_blocks_items_step() {
        let mut draft = ItemConfig::new_draft();
        for item in ITEM_NAMES.iter().take(5) {
            draft.set_rate(item, "0");
        }
        assert_eq!(
            draft.validate_step(ItemStep::ItemsAndRates),
            Err(ItemIssue::ZeroDropRate)
        );
    }

    #[test]
    fn completes_with_channel_cooldown_and_name() {
        let mut draft = ItemConfig::new_draft();
        assert!(!draft.is_complete());
        draft.toggle_channel("channel-2");
        draft.name = "Daily drops".into();
        assert!(draft.is_complete());
        draft.set_cooldown("0");
        assert_eq!(
            draft.validate_step(ItemStep::Cooldown),
            Err(ItemIssue::InvalidCooldown)
        );
    }
}
