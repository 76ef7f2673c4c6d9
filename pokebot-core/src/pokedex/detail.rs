//! Display derivations for the Pokémon detail page.

use super::api::{
    ChainLink, EvolutionDetail, FlavorTextEntry, MoveDetail, PokemonMove, PokemonSpecies,
    StatInfo, VersionGroupDetail,
};
use crate::catalog::{FALLBACK_GAME_VERSION, LATEST_RELEVANT_GAME_VERSION};
use crate::form::capitalize;
use std::collections::{HashSet, VecDeque};

pub const MAX_FLAVOR_TEXTS: usize = 3;
/// How long a move row pulses after being selected.
pub const MOVE_PULSE_MS: u32 = 700;
pub const DEFAULT_TYPE_COLOR: &str = "#A8A77A";

const SHOWDOWN_SPRITE_BASE: &str = "https://play.pokemonshowdown.com/sprites";

const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A77A"),
    ("fire", "#EE8130"),
    ("water", "#6390F0"),
    ("electric", "#F7D02C"),
    ("grass", "#7AC74C"),
    ("ice", "#96D9D6"),
    ("fighting", "#C22E28"),
    ("poison", "#A33EA1"),
    ("ground", "#E2BF65"),
    ("flying", "#A98FF3"),
    ("psychic", "#F95587"),
    ("bug", "#A6B91A"),
    ("rock", "#B6A136"),
    ("ghost", "#735797"),
    ("dragon", "#6F35FC"),
    ("dark", "#705746"),
    ("steel", "#B7B7CE"),
    ("fairy", "#D685AD"),
];

/// Hex colour for a Pokémon or move type, case-insensitive.
#[must_use]
pub fn type_color(name: &str) -> &'static str {
    let name = name.to_lowercase();
    TYPE_COLORS
        .iter()
        .find(|(t, _)| *t == name)
        .map_or(DEFAULT_TYPE_COLOR, |(_, hex)| hex)
}

/// `kebab-case` → `kebab case`.
#[must_use]
pub fn humanize(name: &str) -> String {
    name.replace('-', " ")
}

/// `water-stone` → `Water Stone`.
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split(['-', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `#001`-style dex number.
#[must_use]
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Decimetres as metres with one decimal.
#[must_use]
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", f64::from(decimetres) / 10.0)
}

/// Hectograms as kilograms with one decimal.
#[must_use]
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Animated Showdown sprite for a display name.
#[must_use]
pub fn showdown_sprite_url(name: &str, shiny: bool) -> String {
    let lowered = name.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || c.is_whitespace())
        .collect();
    let slug = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let folder = if shiny { "ani-shiny" } else { "ani" };
    format!("{SHOWDOWN_SPRITE_BASE}/{folder}/{slug}.gif")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub value: u32,
    /// Radar chart axis maximum.
    pub full_mark: u32,
}

#[must_use]
pub fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => title_case(other),
    }
}

#[must_use]
pub fn stat_rows(stats: &[StatInfo]) -> Vec<StatRow> {
    stats
        .iter()
        .map(|s| StatRow {
            label: stat_label(&s.stat.name),
            value: s.base_stat,
            full_mark: if s.stat.name.contains("hp") { 255 } else { 200 },
        })
        .collect()
}

#[must_use]
pub fn stat_total(stats: &[StatInfo]) -> u32 {
    stats.iter().map(|s| s.base_stat).sum()
}

/// English genus, e.g. "Mouse Pokémon".
#[must_use]
pub fn english_genus(species: &PokemonSpecies) -> String {
    species
        .genera
        .iter()
        .find(|g| g.language.name == "en")
        .map_or_else(|| "Unknown Genus".to_string(), |g| g.genus.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorText {
    pub version: String,
    pub text: String,
}

fn clean_flavor(entry: &FlavorTextEntry) -> FlavorText {
    FlavorText {
        version: humanize(&entry.version.name),
        text: entry
            .flavor_text
            .replace(['\u{c}', '\n'], " "),
    }
}

/// Up to three distinct English entries. A preferred game version's entry
/// leads; the rest follow newest first.
#[must_use]
pub fn flavor_texts(species: &PokemonSpecies) -> Vec<FlavorText> {
    let english: Vec<&FlavorTextEntry> = species
        .flavor_text_entries
        .iter()
        .filter(|e| e.language.name == "en")
        .collect();
    let preferred = [LATEST_RELEVANT_GAME_VERSION, FALLBACK_GAME_VERSION]
        .iter()
        .find_map(|version| english.iter().find(|e| e.version.name == *version));

    let mut seen = HashSet::new();
    preferred
        .into_iter()
        .chain(english.iter().rev())
        .map(|e| clean_flavor(e))
        .filter(|t| seen.insert(t.text.clone()))
        .take(MAX_FLAVOR_TEXTS)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedMove {
    /// API name, used to fetch move details.
    pub api_name: String,
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveGroups {
    pub level_up: Vec<LearnedMove>,
    pub machine: Vec<LearnedMove>,
    pub egg: Vec<LearnedMove>,
    pub tutor: Vec<LearnedMove>,
}

impl MoveGroups {
    /// Non-empty sections with their headings, in display order.
    #[must_use]
    pub fn sections(&self) -> Vec<(&'static str, &[LearnedMove])> {
        [
            ("Level Up Moves", self.level_up.as_slice()),
            ("TM/HM Moves", self.machine.as_slice()),
            ("Egg Moves", self.egg.as_slice()),
            ("Tutor Moves", self.tutor.as_slice()),
        ]
        .into_iter()
        .filter(|(_, moves)| !moves.is_empty())
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }
}

fn relevant_version(details: &[VersionGroupDetail]) -> Option<&VersionGroupDetail> {
    [LATEST_RELEVANT_GAME_VERSION, FALLBACK_GAME_VERSION]
        .iter()
        .find_map(|version| details.iter().find(|d| d.version_group.name == *version))
        .or_else(|| details.last())
}

/// Group moves by how they are learned in the most relevant game.
#[must_use]
pub fn group_moves(moves: &[PokemonMove]) -> MoveGroups {
    let mut groups = MoveGroups::default();
    for entry in moves {
        let Some(detail) = relevant_version(&entry.version_group_details) else {
            continue;
        };
        let learned = LearnedMove {
            api_name: entry.move_ref.name.clone(),
            name: humanize(&entry.move_ref.name),
            level: detail.level_learned_at,
        };
        match detail.move_learn_method.name.as_str() {
            "level-up" => groups.level_up.push(learned),
            "machine" => groups.machine.push(learned),
            "egg" => groups.egg.push(learned),
            "tutor" => groups.tutor.push(learned),
            _ => {}
        }
    }
    groups.level_up.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
    for list in [&mut groups.machine, &mut groups.egg, &mut groups.tutor] {
        list.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}

/// Human-readable evolution requirement, e.g. "Level up at Lv 16".
#[must_use]
pub fn evolution_method(detail: Option<&EvolutionDetail>) -> String {
    let Some(detail) = detail else {
        return "Unknown".to_string();
    };
    let mut text = detail
        .trigger
        .as_ref()
        .map_or_else(|| "Unknown".to_string(), |t| capitalize(&humanize(&t.name)));
    if let Some(level) = detail.min_level {
        text.push_str(&format!(" at Lv {level}"));
    }
    if let Some(item) = &detail.item {
        text.push_str(&format!(" with {}", title_case(&item.name)));
    }
    if let Some(held) = &detail.held_item {
        text.push_str(&format!(" holding {}", title_case(&held.name)));
    }
    if let Some(known) = &detail.known_move {
        text.push_str(&format!(" knowing {}", title_case(&known.name)));
    }
    if !detail.time_of_day.is_empty() {
        text.push_str(&format!(" during {}", detail.time_of_day));
    }
    if detail.min_happiness.is_some() {
        text.push_str(" w/ high happiness");
    }
    match detail.gender {
        Some(1) => text.push_str(" (Female)"),
        Some(2) => text.push_str(" (Male)"),
        _ => {}
    }
    if detail.min_affection.is_some() {
        text.push_str(" w/ high affection");
    }
    text
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub species: String,
    pub display_name: String,
    /// 0 for the base form.
    pub depth: usize,
    /// `None` for the base form.
    pub method: Option<String>,
    pub sprite_url: String,
}

/// Breadth-first walk of an evolution chain. Each species appears once.
#[must_use]
pub fn evolution_stages(root: &ChainLink) -> Vec<EvolutionStage> {
    let mut stages = Vec::new();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([(root, 0usize, true)]);

    while let Some((link, depth, is_root)) = queue.pop_front() {
        if !seen.insert(link.species.name.clone()) {
            continue;
        }
        let display_name = capitalize(&link.species.name);
        stages.push(EvolutionStage {
            species: link.species.name.clone(),
            sprite_url: showdown_sprite_url(&display_name, false),
            display_name,
            depth,
            method: (!is_root).then(|| evolution_method(link.evolution_details.first())),
        });
        queue.extend(link.evolves_to.iter().map(|next| (next, depth + 1, false)));
    }
    stages
}

/// Stages grouped by depth for row-per-stage rendering.
#[must_use]
pub fn stages_by_depth(stages: &[EvolutionStage]) -> Vec<Vec<&EvolutionStage>> {
    let mut rows: Vec<Vec<&EvolutionStage>> = Vec::new();
    for stage in stages {
        if rows.len() <= stage.depth {
            rows.resize_with(stage.depth + 1, Vec::new);
        }
        rows[stage.depth].push(stage);
    }
    rows.retain(|row| !row.is_empty());
    rows
}

/// English effect text with the chance placeholder filled in.
#[must_use]
pub fn move_effect(detail: &MoveDetail) -> String {
    detail
        .effect_entries
        .iter()
        .find(|e| e.language.name == "en")
        .map_or_else(
            || "No English description available.".to_string(),
            |e| {
                let chance = detail.effect_chance.map(|c| c.to_string()).unwrap_or_default();
                e.effect.replace("$effect_chance", &chance)
            },
        )
}

/// Power or accuracy, "N/A" when absent.
#[must_use]
pub fn optional_stat(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::api::NamedResource;

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn link(name: &str, detail: Option<EvolutionDetail>, next: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: named(name),
            evolution_details: detail.into_iter().collect(),
            evolves_to: next,
        }
    }

    fn level_up(level: u32) -> EvolutionDetail {
        EvolutionDetail {
            trigger: Some(named("level-up")),
            min_level: Some(level),
            ..EvolutionDetail::default()
        }
    }

    #[test]
    fn evolution_text_reads_naturally() {
        assert_eq!(evolution_method(Some(&level_up(16))), "Level up at Lv 16");
        let stone = EvolutionDetail {
            trigger: Some(named("use-item")),
            item: Some(named("water-stone")),
            ..EvolutionDetail::default()
        };
        assert_eq!(evolution_method(Some(&stone)), "Use item with Water Stone");
        let friend = EvolutionDetail {
            trigger: Some(named("level-up")),
            time_of_day: "day".into(),
            min_happiness: Some(220),
            gender: Some(1),
            ..EvolutionDetail::default()
        };
        assert_eq!(
            evolution_method(Some(&friend)),
            "Level up during day w/ high happiness (Female)"
        );
        assert_eq!(evolution_method(None), "Unknown");
    }

    #[test]
    fn branching_chain_is_walked_breadth_first() {
        let chain = link(
            "eevee",
            None,
            vec![
                link("vaporeon", None, vec![]),
                link("jolteon", None, vec![]),
                link("vaporeon", None, vec![]),
            ],
        );
        let stages = evolution_stages(&chain);
        let names: Vec<_> = stages.iter().map(|s| s.display_name.as_str()).collect();
        assert_eq!(names, vec!["Eevee", "Vaporeon", "Jolteon"]);
        assert_eq!(stages[0].method, None);
        assert_eq!(stages[1].method.as_deref(), Some("Unknown"));
        assert_eq!(stages_by_depth(&stages).len(), 2);
    }

    #[test]
    fn linear_chain_carries_methods() {
        let chain = link(
            "bulbasaur",
            None,
            vec![link("ivysaur", Some(level_up(16)), vec![link("venusaur", Some(level_up(32)), vec![])])],
        );
        let stages = evolution_stages(&chain);
        assert_eq!(stages[2].depth, 2);
        assert_eq!(stages[2].method.as_deref(), Some("Level up at Lv 32"));
        assert_eq!(
            stages[1].sprite_url,
            "https://play.pokemonshowdown.com/sprites/ani/ivysaur.gif"
        );
    }

    #[test]
    fn showdown_slugs_strip_punctuation() {
        assert_eq!(
            showdown_sprite_url("Mr. Mime", true),
            "https://play.pokemonshowdown.com/sprites/ani-shiny/mr-mime.gif"
        );
        assert_eq!(
            showdown_sprite_url("Farfetch'd", false),
            "https://play.pokemonshowdown.com/sprites/ani/farfetchd.gif"
        );
    }

    #[test]
    fn stats_get_short_labels_and_axis_maxima() {
        let stats = vec![
            StatInfo { base_stat: 35, stat: named("hp") },
            StatInfo { base_stat: 50, stat: named("special-attack") },
            StatInfo { base_stat: 10, stat: named("special-evasion") },
        ];
        let rows = stat_rows(&stats);
        assert_eq!(rows[0].label, "HP");
        assert_eq!(rows[0].full_mark, 255);
        assert_eq!(rows[1].label, "Sp. Atk");
        assert_eq!(rows[1].full_mark, 200);
        assert_eq!(rows[2].label, "Special Evasion");
        assert_eq!(stat_total(&stats), 95);
    }

    #[test]
    fn moves_prefer_latest_game_and_sort() {
        let mv = |name: &str, method: &str, level: u32, version: &str| PokemonMove {
            move_ref: named(name),
            version_group_details: vec![
                VersionGroupDetail {
                    level_learned_at: 99,
                    move_learn_method: named("tutor"),
                    version_group: named("red-blue"),
                },
                VersionGroupDetail {
                    level_learned_at: level,
                    move_learn_method: named(method),
                    version_group: named(version),
                },
            ],
        };
        let groups = group_moves(&[
            mv("thunder-shock", "level-up", 5, "scarlet-violet"),
            mv("growl", "level-up", 1, "scarlet-violet"),
            mv("thunderbolt", "machine", 0, "ultra-sun-ultra-moon"),
            mv("agility", "machine", 0, "ultra-sun-ultra-moon"),
        ]);
        assert_eq!(groups.level_up[0].name, "growl");
        assert_eq!(groups.level_up[1].name, "thunder shock");
        assert_eq!(groups.machine[0].name, "agility");
        let headings: Vec<_> = groups.sections().iter().map(|(h, _)| *h).collect();
        assert_eq!(headings, vec!["Level Up Moves", "TM/HM Moves"]);
    }

    #[test]
    fn measurements_and_numbers_format() {
        assert_eq!(format_height(4), "0.4 m");
        assert_eq!(format_weight(60), "6.0 kg");
        assert_eq!(dex_number(25), "#025");
        assert_eq!(type_color("Fire"), "#EE8130");
        assert_eq!(type_color("shadow"), DEFAULT_TYPE_COLOR);
        assert_eq!(optional_stat(None), "N/A");
    }
}
