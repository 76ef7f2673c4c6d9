//! Scheduled bot events: the editor form, derived status and the event board.

use crate::Record;
use crate::form::{is_blank, parse_leading_int, toggle_selection};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use thiserror::Error;

/// Format produced by `<input type="datetime-local">`.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const EVENT_DELETED_MESSAGE: &str = "Event deleted.";

/// Parse a `datetime-local` value, with or without seconds.
#[must_use]
pub fn parse_datetime_input(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[must_use]
pub fn format_datetime_input(value: NaiveDateTime) -> String {
    value.format(DATETIME_INPUT_FORMAT).to_string()
}

/// Kind of event without its payload; drives the type select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventType {
    ShinyBoost,
    SpawnBoostPokemon,
    SpawnBoostType,
    XpBoost,
    ItemDropBoost,
    #[default]
    Custom,
}

impl EventType {
    pub const ALL: [Self; 6] = [
        Self::ShinyBoost,
        Self::SpawnBoostPokemon,
        Self::SpawnBoostType,
        Self::XpBoost,
        Self::ItemDropBoost,
        Self::Custom,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShinyBoost => "Shiny Rate Boost",
            Self::SpawnBoostPokemon => "Increased Spawn Rate (Specific Pokémon)",
            Self::SpawnBoostType => "Increased Spawn Rate (Specific Type)",
            Self::XpBoost => "Experience Point Boost",
            Self::ItemDropBoost => "Item Drop Rate Boost",
            Self::Custom => "Custom Event",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    #[must_use]
    pub const fn takes_boost(self) -> bool {
        matches!(self, Self::ShinyBoost | Self::XpBoost | Self::ItemDropBoost)
    }
}

/// Event payload; each variant carries only the fields its type uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "eventType",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum EventKind {
    ShinyBoost { boost_percentage: u32 },
    SpawnBoostPokemon { pokemon_name: String },
    SpawnBoostType { pokemon_type: String },
    XpBoost { boost_percentage: u32 },
    ItemDropBoost { boost_percentage: u32 },
    Custom { details: String },
}

impl EventKind {
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::ShinyBoost { .. } => EventType::ShinyBoost,
            Self::SpawnBoostPokemon { .. } => EventType::SpawnBoostPokemon,
            Self::SpawnBoostType { .. } => EventType::SpawnBoostType,
            Self::XpBoost { .. } => EventType::XpBoost,
            Self::ItemDropBoost { .. } => EventType::ItemDropBoost,
            Self::Custom { .. } => EventType::Custom,
        }
    }

    /// Card detail line for the payload, if it has one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ShinyBoost { boost_percentage }
            | Self::XpBoost { boost_percentage }
            | Self::ItemDropBoost { boost_percentage } => Some(format!("Boost: {boost_percentage}%")),
            Self::SpawnBoostPokemon { pokemon_name } => Some(format!("Pokémon: {pokemon_name}")),
            Self::SpawnBoostType { pokemon_type } => Some(format!("Type: {pokemon_type}")),
            Self::Custom { details } if !is_blank(details) => Some(details.clone()),
            Self::Custom { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub const ALL: [Self; 4] = [Self::None, Self::Daily, Self::Weekly, Self::Monthly];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Disabled,
    Scheduled,
    Active,
    Past,
}

impl EventStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::Scheduled => "Scheduled",
            Self::Active => "Active",
            Self::Past => "Past",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub kind: EventKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub target_channel_ids: Vec<String>,
    pub recurrence: Recurrence,
    pub is_enabled: bool,
}

impl ScheduledEvent {
    /// Derived from the enabled flag and the window around `now`.
    #[must_use]
    pub fn status(&self, now: NaiveDateTime) -> EventStatus {
        if !self.is_enabled {
            EventStatus::Disabled
        } else if now < self.start {
            EventStatus::Scheduled
        } else if now <= self.end {
            EventStatus::Active
        } else {
            EventStatus::Past
        }
    }

    #[must_use]
    pub fn is_active_or_upcoming(&self, now: NaiveDateTime) -> bool {
        self.is_enabled && self.end >= now
    }

    /// Editable copy of this event.
    #[must_use]
    pub fn to_draft(&self) -> EventDraft {
        let mut draft = EventDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            event_type: self.kind.event_type(),
            start: format_datetime_input(self.start),
            end: format_datetime_input(self.end),
            target_channel_ids: self.target_channel_ids.clone(),
            recurrence: self.recurrence,
            is_enabled: self.is_enabled,
            ..EventDraft::default()
        };
        match &self.kind {
            EventKind::ShinyBoost { boost_percentage }
            | EventKind::XpBoost { boost_percentage }
            | EventKind::ItemDropBoost { boost_percentage } => {
                draft.boost_percentage = Some(i64::from(*boost_percentage));
            }
            EventKind::SpawnBoostPokemon { pokemon_name } => draft.pokemon_name.clone_from(pokemon_name),
            EventKind::SpawnBoostType { pokemon_type } => draft.pokemon_type.clone_from(pokemon_type),
            EventKind::Custom { details } => draft.custom_details.clone_from(details),
        }
        draft
    }
}

impl Record for ScheduledEvent {
    const COLLECTION: &'static str = "scheduled-events";
    const ID_PREFIX: &'static str = "evt";

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Name,
    Start,
    End,
    PokemonName,
    PokemonType,
    BoostPercentage,
    TargetChannels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventFieldError {
    #[error("Event name is required.")]
    NameRequired,
    #[error("Start date is required.")]
    StartRequired,
    #[error("End date is required.")]
    EndRequired,
    #[error("End date must be after start date.")]
    EndNotAfterStart,
    #[error("Pokémon name is required for this event type.")]
    PokemonNameRequired,
    #[error("Pokémon type is required for this event type.")]
    PokemonTypeRequired,
    #[error("Boost percentage must be a positive number.")]
    BoostNotPositive,
    #[error("Select at least one target channel.")]
    NoTargetChannels,
}

impl EventFieldError {
    #[must_use]
    pub const fn field(self) -> EventField {
        match self {
            Self::NameRequired => EventField::Name,
            Self::StartRequired => EventField::Start,
            Self::EndRequired | Self::EndNotAfterStart => EventField::End,
            Self::PokemonNameRequired => EventField::PokemonName,
            Self::PokemonTypeRequired => EventField::PokemonType,
            Self::BoostNotPositive => EventField::BoostPercentage,
            Self::NoTargetChannels => EventField::TargetChannels,
        }
    }
}

/// Error message for `field`, if any.
#[must_use]
pub fn field_error(errors: &[EventFieldError], field: EventField) -> Option<String> {
    errors
        .iter()
        .find(|err| err.field() == field)
        .map(ToString::to_string)
}

/// Modal form state. Dates are kept as `datetime-local` strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub event_type: EventType,
    pub boost_percentage: Option<i64>,
    pub pokemon_name: String,
    pub pokemon_type: String,
    pub custom_details: String,
    pub start: String,
    pub end: String,
    pub target_channel_ids: Vec<String>,
    pub recurrence: Recurrence,
    pub is_enabled: bool,
}

impl EventDraft {
    /// Blank custom event spanning `now` to `now`, enabled.
    #[must_use]
    pub fn new_at(now: NaiveDateTime) -> Self {
        Self {
            start: format_datetime_input(now),
            end: format_datetime_input(now),
            is_enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Switching type clears every type-dependent field.
    pub fn set_event_type(&mut self, event_type: EventType) {
        self.event_type = event_type;
        self.boost_percentage = None;
        self.pokemon_name.clear();
        self.pokemon_type.clear();
        self.custom_details.clear();
    }

    /// An empty box clears the boost.
    pub fn set_boost(&mut self, raw: &str) {
        self.boost_percentage = if is_blank(raw) {
            None
        } else {
            parse_leading_int(raw)
        };
    }

    pub fn toggle_channel(&mut self, channel_id: &str) {
        toggle_selection(&mut self.target_channel_ids, channel_id);
    }

    fn kind(&self) -> Result<EventKind, EventFieldError> {
        let boost = || {
            self.boost_percentage
                .filter(|boost| *boost > 0)
                .and_then(|boost| u32::try_from(boost).ok())
                .ok_or(EventFieldError::BoostNotPositive)
        };
        match self.event_type {
            EventType::ShinyBoost => boost().map(|boost_percentage| EventKind::ShinyBoost { boost_percentage }),
            EventType::XpBoost => boost().map(|boost_percentage| EventKind::XpBoost { boost_percentage }),
            EventType::ItemDropBoost => {
                boost().map(|boost_percentage| EventKind::ItemDropBoost { boost_percentage })
            }
            EventType::SpawnBoostPokemon if is_blank(&self.pokemon_name) => {
                Err(EventFieldError::PokemonNameRequired)
            }
            EventType::SpawnBoostPokemon => Ok(EventKind::SpawnBoostPokemon {
                pokemon_name: self.pokemon_name.trim().to_string(),
            }),
            EventType::SpawnBoostType if is_blank(&self.pokemon_type) => {
                Err(EventFieldError::PokemonTypeRequired)
            }
            EventType::SpawnBoostType => Ok(EventKind::SpawnBoostType {
                pokemon_type: self.pokemon_type.clone(),
            }),
            EventType::Custom => Ok(EventKind::Custom {
                details: self.custom_details.trim().to_string(),
            }),
        }
    }

    /// Check every field and build the event.
    ///
    /// # Errors
    ///
    /// Returns all field errors found, in form order.
    pub fn validate(&self) -> Result<ScheduledEvent, Vec<EventFieldError>> {
        let mut errors = Vec::new();
        if is_blank(&self.name) {
            errors.push(EventFieldError::NameRequired);
        }
        let start = parse_datetime_input(&self.start);
        let end = parse_datetime_input(&self.end);
        if start.is_none() {
            errors.push(EventFieldError::StartRequired);
        }
        match (start, end) {
            (_, None) => errors.push(EventFieldError::EndRequired),
            (Some(start), Some(end)) if start >= end => {
                errors.push(EventFieldError::EndNotAfterStart);
            }
            _ => {}
        }
        let kind = self.kind().map_err(|err| errors.push(err)).ok();
        if self.target_channel_ids.is_empty() {
            errors.push(EventFieldError::NoTargetChannels);
        }

        match (kind, start, end) {
            (Some(kind), Some(start), Some(end)) if errors.is_empty() => Ok(ScheduledEvent {
                id: self.id.clone(),
                name: self.name.trim().to_string(),
                description: self.description.trim().to_string(),
                kind,
                start,
                end,
                target_channel_ids: self.target_channel_ids.clone(),
                recurrence: self.recurrence,
                is_enabled: self.is_enabled,
            }),
            _ => Err(errors),
        }
    }
}

/// Board split into the two rendered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSections<'a> {
    /// Enabled and not yet ended, soonest start first.
    pub active_upcoming: Vec<&'a ScheduledEvent>,
    /// Disabled or ended, latest end first.
    pub past_disabled: Vec<&'a ScheduledEvent>,
}

impl EventSections<'_> {
    /// An empty upcoming section is hidden while other events exist.
    #[must_use]
    pub fn show_active_upcoming(&self) -> bool {
        !self.active_upcoming.is_empty() || self.past_disabled.is_empty()
    }
}

/// The scheduler's in-memory event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBoard {
    events: Vec<ScheduledEvent>,
}

impl EventBoard {
    #[must_use]
    pub const fn from_events(events: Vec<ScheduledEvent>) -> Self {
        Self { events }
    }

    /// The two seeded demo events.
    #[must_use]
    pub fn mock() -> Self {
        let at = |raw: &str| parse_datetime_input(raw).unwrap_or_default();
        Self::from_events(vec![
            ScheduledEvent {
                id: Some("evt1".to_string()),
                name: "Weekend Shiny Hunt!".to_string(),
                description: "Increased shiny rates for all Pokémon.".to_string(),
                kind: EventKind::ShinyBoost {
                    boost_percentage: 50,
                },
                start: at("2024-08-10T10:00"),
                end: at("2024-08-12T22:00"),
                target_channel_ids: vec!["channel-2".to_string()],
                recurrence: Recurrence::None,
                is_enabled: true,
            },
            ScheduledEvent {
                id: Some("evt2".to_string()),
                name: "Pikachu Outbreak".to_string(),
                description: "Pikachu will spawn more frequently.".to_string(),
                kind: EventKind::SpawnBoostPokemon {
                    pokemon_name: "Pikachu".to_string(),
                },
                start: at("2024-07-20T00:00"),
                end: at("2024-07-21T23:59"),
                target_channel_ids: vec!["channel-2".to_string(), "channel-3".to_string()],
                recurrence: Recurrence::None,
                is_enabled: false,
            },
        ])
    }

    #[must_use]
    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Validate `draft` and create or update the matching event. New events
    /// get an `evt-{now_ms}` id.
    ///
    /// # Errors
    ///
    /// Returns the draft's field errors; the board is left unchanged.
    pub fn save(&mut self, draft: &EventDraft, now_ms: u64) -> Result<String, Vec<EventFieldError>> {
        let mut event = draft.validate()?;
        let existing = event
            .id
            .as_deref()
            .and_then(|id| self.events.iter().position(|e| e.id.as_deref() == Some(id)));
        if let Some(pos) = existing {
            let message = format!("Event \"{}\" updated.", event.name);
            self.events[pos] = event;
            return Ok(message);
        }
        event.id = Some(format!("evt-{now_ms}"));
        let message = format!("Event \"{}\" created.", event.name);
        self.events.push(event);
        Ok(message)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id.as_deref() != Some(id));
        self.events.len() != before
    }

    #[must_use]
    pub fn sections(&self, now: NaiveDateTime) -> EventSections<'_> {
        let (mut active_upcoming, mut past_disabled): (Vec<_>, Vec<_>) = self
            .events
            .iter()
            .partition(|event| event.is_active_or_upcoming(now));
        active_upcoming.sort_by_key(|event| event.start);
        past_disabled.sort_by_key(|event| Reverse(event.end));
        EventSections {
            active_upcoming,
            past_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_datetime_input(raw).unwrap()
    }

    fn shiny_draft() -> EventDraft {
        let mut draft = EventDraft::new_at(at("2024-08-01T09:00"));
        draft.name = "Shiny Sunday".into();
        draft.set_event_type(EventType::ShinyBoost);
        draft.set_boost("25");
        draft.end = "2024-08-02T09:00".into();
        draft.toggle_channel("channel-1");
        draft
    }

    #[test]
    fn valid_draft_becomes_event() {
        let event = shiny_draft().validate().unwrap();
        assert_eq!(event.kind, EventKind::ShinyBoost { boost_percentage: 25 });
        assert_eq!(event.end, at("2024-08-02T09:00"));
        assert!(event.id.is_none());
    }

    #[test]
    fn start_not_before_end_yields_end_error() {
        let mut draft = shiny_draft();
        draft.end.clone_from(&draft.start);
        assert_eq!(draft.validate(), Err(vec![EventFieldError::EndNotAfterStart]));
        draft.end = "2024-07-01T00:00".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            field_error(&errors, EventField::End).as_deref(),
            Some("End date must be after start date.")
        );
    }

    #[test]
    fn empty_draft_reports_every_missing_field() {
        let mut draft = EventDraft::default();
        draft.set_event_type(EventType::SpawnBoostPokemon);
        assert_eq!(
            draft.validate(),
            Err(vec![
                EventFieldError::NameRequired,
                EventFieldError::StartRequired,
                EventFieldError::EndRequired,
                EventFieldError::PokemonNameRequired,
                EventFieldError::NoTargetChannels,
            ])
        );
    }

    #[test]
    fn boost_must_be_positive_and_type_change_resets_payload() {
        let mut draft = shiny_draft();
        draft.set_boost("0");
        assert_eq!(draft.validate(), Err(vec![EventFieldError::BoostNotPositive]));
        draft.set_boost("");
        assert_eq!(draft.boost_percentage, None);

        draft.set_boost("40");
        draft.set_event_type(EventType::SpawnBoostType);
        assert_eq!(draft.boost_percentage, None);
        assert_eq!(draft.validate(), Err(vec![EventFieldError::PokemonTypeRequired]));
        draft.pokemon_type = "Fire".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn status_follows_window_and_enabled_flag() {
        let mut event = shiny_draft().validate().unwrap();
        assert_eq!(event.status(at("2024-07-31T00:00")), EventStatus::Scheduled);
        assert_eq!(event.status(at("2024-08-01T09:00")), EventStatus::Active);
        assert_eq!(event.status(at("2024-08-02T09:00")), EventStatus::Active);
        assert_eq!(event.status(at("2024-08-03T00:00")), EventStatus::Past);
        event.is_enabled = false;
        for now in ["2024-07-31T00:00", "2024-08-01T12:00", "2024-09-01T00:00"] {
            assert_eq!(event.status(at(now)), EventStatus::Disabled);
        }
    }

    #[test]
    fn board_creates_updates_and_deletes() {
        let mut board = EventBoard::mock();
        let message = board.save(&shiny_draft(), 1_722_500_000_000).unwrap();
        assert_eq!(message, "Event \"Shiny Sunday\" created.");
        let created = board.events().last().unwrap().clone();
        assert_eq!(created.id.as_deref(), Some("evt-1722500000000"));

        let mut edit = created.to_draft();
        edit.name = "Shiny Monday".into();
        assert_eq!(board.save(&edit, 0).unwrap(), "Event \"Shiny Monday\" updated.");
        assert_eq!(board.events().len(), 3);

        assert!(board.delete("evt-1722500000000"));
        assert_eq!(board.events().len(), 2);
    }

    #[test]
    fn sections_split_and_sort() {
        let mut board = EventBoard::mock();
        board.save(&shiny_draft(), 1).unwrap();
        let sections = board.sections(at("2024-08-01T12:00"));
        let names = |events: &[&ScheduledEvent]| {
            events.iter().map(|e| e.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(
            names(&sections.active_upcoming),
            ["Shiny Sunday", "Weekend Shiny Hunt!"]
        );
        assert_eq!(names(&sections.past_disabled), ["Pikachu Outbreak"]);

        let later = board.sections(at("2025-01-01T00:00"));
        assert!(later.active_upcoming.is_empty());
        assert!(!later.show_active_upcoming());
        assert_eq!(later.past_disabled[0].name, "Weekend Shiny Hunt!");
    }

    #[test]
    fn event_roundtrips_with_flattened_kind() {
        let event = EventBoard::mock().events()[1].clone();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "spawnBoostPokemon");
        assert_eq!(json["pokemonName"], "Pikachu");
        let back: ScheduledEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
