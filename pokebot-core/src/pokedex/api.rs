//! PokeAPI response models and request URLs.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! responses is ignored.

use crate::catalog::POKEAPI_BASE_URL;
use serde::Deserialize;

#[must_use]
pub fn generation_list_url() -> String {
    format!("{POKEAPI_BASE_URL}/generation")
}

#[must_use]
pub fn pokemon_count_url() -> String {
    format!("{POKEAPI_BASE_URL}/pokemon?limit=1")
}

#[must_use]
pub fn pokemon_list_url(limit: u32) -> String {
    format!("{POKEAPI_BASE_URL}/pokemon?limit={limit}")
}

/// Detail URL for a name as typed by a user: trimmed and lowercased.
#[must_use]
pub fn pokemon_url(name: &str) -> String {
    format!("{POKEAPI_BASE_URL}/pokemon/{}", name.trim().to_lowercase())
}

#[must_use]
pub fn move_url(name: &str) -> String {
    format!("{POKEAPI_BASE_URL}/move/{}", name.trim().to_lowercase())
}

/// Numeric id from the last path segment of a resource URL
/// (`.../generation/3/` → 3).
#[must_use]
pub fn resource_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// A paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationDetail {
    pub pokemon_species: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatInfo {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeInfo {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilityInfo {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AnimatedSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BlackWhiteSprites {
    pub animated: Option<AnimatedSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GenerationVSprites {
    #[serde(rename = "black-white")]
    pub black_white: Option<BlackWhiteSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SpriteVersions {
    #[serde(rename = "generation-v")]
    pub generation_v: Option<GenerationVSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub versions: Option<SpriteVersions>,
}

impl Sprites {
    /// Gen V animated sprite, else the default front sprite.
    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.versions
            .as_ref()
            .and_then(|v| v.generation_v.as_ref())
            .and_then(|g| g.black_white.as_ref())
            .and_then(|bw| bw.animated.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// `/pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatInfo>,
    pub types: Vec<TypeInfo>,
    #[serde(default)]
    pub abilities: Vec<AbilityInfo>,
    #[serde(default)]
    pub sprites: Sprites,
    pub species: NamedResource,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneraEntry {
    pub genus: String,
    pub language: NamedResource,
}

/// `/pokemon-species/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub growth_rate: Option<NamedResource>,
    pub generation: NamedResource,
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub genera: Vec<GeneraEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<UrlResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub min_level: Option<u32>,
    pub item: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: String,
    pub min_happiness: Option<u32>,
    pub gender: Option<u8>,
    pub min_affection: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EffectEntry {
    pub effect: String,
    pub language: NamedResource,
}

/// `/move/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveDetail {
    pub id: u32,
    pub name: String,
    pub accuracy: Option<u32>,
    pub effect_chance: Option<u32>,
    #[serde(default)]
    pub pp: u32,
    pub power: Option<u32>,
    pub damage_class: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_ids_come_from_the_last_segment() {
        assert_eq!(resource_id("https://pokeapi.co/api/v2/generation/3/"), Some(3));
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/25"), Some(25));
        assert_eq!(resource_id("https://pokeapi.co/api/v2/pokemon/"), None);
    }

    #[test]
    fn urls_normalise_names() {
        assert_eq!(
            pokemon_url("  Mr-Mime "),
            "https://pokeapi.co/api/v2/pokemon/mr-mime"
        );
        assert_eq!(pokemon_list_url(1302), "https://pokeapi.co/api/v2/pokemon?limit=1302");
    }

    #[test]
    fn detail_decodes_with_sparse_fields() {
        let detail: PokemonDetail = serde_json::from_str(
            r#"{
                "id": 25, "name": "pikachu",
                "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}],
                "species": {"name": "pikachu", "url": "s"},
                "sprites": {"front_default": null, "versions": {"generation-v": {"black-white": {"animated": {"front_default": "anim.gif"}}}}},
                "unknown_field": true
            }"#,
        )
        .unwrap();
        assert_eq!(detail.types[0].kind.name, "electric");
        assert_eq!(detail.sprites.fallback(), Some("anim.gif"));
        assert!(detail.moves.is_empty());
    }
}
