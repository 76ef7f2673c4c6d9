//! Pokédex browsing: PokeAPI models, batched loading, filtering and the
//! detail page derivations.

pub mod api;
pub mod batch;
pub mod detail;
pub mod filters;

pub use api::{PokemonDetail, PokemonSpecies, ResourceList};
pub use batch::{BatchOutcome, BatchPlan, CancelToken, RequestGate, load_in_batches};
pub use filters::PokedexFilter;

use crate::form::capitalize;
use api::{NamedResource, resource_id};

pub const COUNT_UNAVAILABLE_MESSAGE: &str = "Could not retrieve total Pokémon count from API.";

/// Banner text for a failed list load.
#[must_use]
pub fn load_error_message(detail: &str) -> String {
    format!(
        "Failed to load Pokedex data: {detail}. Please ensure you have internet connectivity."
    )
}

/// Banner text when the species list of a generation cannot be fetched.
#[must_use]
pub fn generation_filter_error(detail: &str) -> String {
    format!("Could not apply generation filter: {detail}")
}

pub const MOVE_DETAIL_ERROR: &str = "Failed to load move details.";

/// Banner text for a failed detail fetch.
#[must_use]
pub fn fetch_error_message(name: &str, status: u16) -> String {
    format!("Could not fetch Pokémon data for \"{name}\". Status: {status}")
}

/// One grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    pub id: u32,
    /// Capitalized display name.
    pub name: String,
    pub sprite_url: String,
    /// Capitalized type names in slot order.
    pub types: Vec<String>,
}

impl PokemonSummary {
    #[must_use]
    pub fn from_detail(detail: &PokemonDetail) -> Self {
        let name = capitalize(&detail.name);
        let sprite_url = detail.sprites.front_default.clone().unwrap_or_else(|| {
            let initial: String = name.chars().take(1).collect();
            format!("https://via.placeholder.com/96?text={initial}")
        });
        let mut types: Vec<_> = detail.types.iter().collect();
        types.sort_by_key(|t| t.slot);
        Self {
            id: detail.id,
            name,
            sprite_url,
            types: types.iter().map(|t| capitalize(&t.kind.name)).collect(),
        }
    }

    /// Detail route segment.
    #[must_use]
    pub fn route_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A generation filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub id: u32,
    /// e.g. "GENERATION III".
    pub label: String,
    pub url: String,
}

impl Generation {
    #[must_use]
    pub fn from_resource(resource: &NamedResource) -> Self {
        Self {
            id: resource_id(&resource.url).unwrap_or_default(),
            label: resource
                .name
                .replace("generation-", "Generation ")
                .to_uppercase(),
            url: resource.url.clone(),
        }
    }
}

/// Generation options sorted by id.
#[must_use]
pub fn generations(list: &ResourceList) -> Vec<Generation> {
    let mut out: Vec<_> = list.results.iter().map(Generation::from_resource).collect();
    out.sort_by_key(|g| g.id);
    out
}

/// Sort loaded summaries by dex number.
pub fn sort_by_id(summaries: &mut [PokemonSummary]) {
    summaries.sort_by_key(|s| s.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_capitalizes_and_falls_back_to_placeholder() {
        let detail: PokemonDetail = serde_json::from_str(
            r#"{"id": 1, "name": "bulbasaur",
                "types": [{"slot": 2, "type": {"name": "poison", "url": ""}},
                          {"slot": 1, "type": {"name": "grass", "url": ""}}],
                "species": {"name": "bulbasaur", "url": ""},
                "sprites": {"front_default": null}}"#,
        )
        .unwrap();
        let summary = PokemonSummary::from_detail(&detail);
        assert_eq!(summary.name, "Bulbasaur");
        assert_eq!(summary.types, vec!["Grass", "Poison"]);
        assert_eq!(summary.sprite_url, "https://via.placeholder.com/96?text=B");
        assert_eq!(summary.route_name(), "bulbasaur");
    }

    #[test]
    fn generation_labels_and_order() {
        let list: ResourceList = serde_json::from_str(
            r#"{"count": 2, "results": [
                {"name": "generation-ii", "url": "https://pokeapi.co/api/v2/generation/2/"},
                {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"}]}"#,
        )
        .unwrap();
        let gens = generations(&list);
        assert_eq!(gens[0].label, "GENERATION I");
        assert_eq!(gens[1].id, 2);
    }

    #[test]
    fn messages_match_banners() {
        assert_eq!(
            fetch_error_message("missingno", 404),
            "Could not fetch Pokémon data for \"missingno\". Status: 404"
        );
        assert!(load_error_message("offline").starts_with("Failed to load Pokedex data: offline."));
    }
}
