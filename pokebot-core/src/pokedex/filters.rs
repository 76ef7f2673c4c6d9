//! Client-side filtering of the loaded Pokédex.

use super::PokemonSummary;
use std::collections::HashSet;

/// Generation, type and text filters. All three combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokedexFilter {
    /// Selected generation URL, or `None` for all generations.
    pub generation: Option<String>,
    /// Lowercased type names; a Pokémon matches if it has any of them.
    types: Vec<String>,
    pub search: String,
}

impl PokedexFilter {
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    #[must_use]
    pub fn is_type_selected(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.types.contains(&name)
    }

    pub fn toggle_type(&mut self, name: &str) {
        let name = name.to_lowercase();
        if let Some(pos) = self.types.iter().position(|t| *t == name) {
            self.types.remove(pos);
        } else {
            self.types.push(name);
        }
    }

    pub fn clear_types(&mut self) {
        self.types.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.generation.is_some() || !self.types.is_empty() || !self.search.trim().is_empty()
    }

    /// Apply the filters. `generation_species` holds the lowercase species
    /// names of the selected generation and is ignored when no generation is
    /// selected.
    #[must_use]
    pub fn apply<'a>(
        &self,
        all: &'a [PokemonSummary],
        generation_species: Option<&HashSet<String>>,
    ) -> Vec<&'a PokemonSummary> {
        let species = self.generation.as_ref().and(generation_species);
        let term = self.search.trim().to_lowercase();

        all.iter()
            .filter(|p| species.is_none_or(|names| names.contains(&p.name.to_lowercase())))
            .filter(|p| {
                self.types.is_empty()
                    || p.types
                        .iter()
                        .any(|t| self.types.contains(&t.to_lowercase()))
            })
            .filter(|p| term.is_empty() || matches_search(p, &term))
            .collect()
    }
}

fn matches_search(pokemon: &PokemonSummary, term: &str) -> bool {
    pokemon.name.to_lowercase().contains(term)
        || pokemon.id.to_string().contains(term)
        || pokemon
            .types
            .iter()
            .any(|t| t.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u32, name: &str, types: &[&str]) -> PokemonSummary {
        PokemonSummary {
            id,
            name: name.to_string(),
            sprite_url: String::new(),
            types: types.iter().map(ToString::to_string).collect(),
        }
    }

    fn dex() -> Vec<PokemonSummary> {
        vec![
            summary(1, "Bulbasaur", &["Grass", "Poison"]),
            summary(4, "Charmander", &["Fire"]),
            summary(25, "Pikachu", &["Electric"]),
            summary(152, "Chikorita", &["Grass"]),
        ]
    }

    fn names(list: &[&PokemonSummary]) -> Vec<String> {
        list.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn no_filters_returns_everything() {
        let all = dex();
        assert_eq!(PokedexFilter::default().apply(&all, None).len(), 4);
    }

    #[test]
    fn types_match_any_selected() {
        let all = dex();
        let mut filter = PokedexFilter::default();
        filter.toggle_type("Grass");
        filter.toggle_type("fire");
        assert!(filter.is_type_selected("GRASS"));
        assert_eq!(
            names(&filter.apply(&all, None)),
            vec!["Bulbasaur", "Charmander", "Chikorita"]
        );
        filter.toggle_type("grass");
        assert_eq!(names(&filter.apply(&all, None)), vec!["Charmander"]);
    }

    #[test]
    fn search_covers_name_id_and_type() {
        let all = dex();
        let mut filter = PokedexFilter {
            search: " 25 ".into(),
            ..PokedexFilter::default()
        };
        assert_eq!(names(&filter.apply(&all, None)), vec!["Pikachu"]);
        filter.search = "poi".into();
        assert_eq!(names(&filter.apply(&all, None)), vec!["Bulbasaur"]);
        filter.search = "CHI".into();
        assert_eq!(names(&filter.apply(&all, None)), vec!["Chikorita"]);
    }

    #[test]
    fn generation_uses_species_names() {
        let all = dex();
        let gen_two: HashSet<String> = ["chikorita".to_string()].into();
        let mut filter = PokedexFilter {
            generation: Some("https://pokeapi.co/api/v2/generation/2/".into()),
            ..PokedexFilter::default()
        };
        filter.toggle_type("grass");
        assert_eq!(names(&filter.apply(&all, Some(&gen_two))), vec!["Chikorita"]);

        filter.generation = None;
        assert_eq!(filter.apply(&all, Some(&gen_two)).len(), 2);
    }
}
