//! Registered bot users and the dashboard overview figures. Both are static
//! mock data.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUser {
    pub id: &'static str,
    pub discord_name: &'static str,
    pub pokemon_count: u32,
    pub items_count: u32,
    pub gold: u32,
    pub is_shiny_hunter: bool,
}

const fn user(
    id: &'static str,
    discord_name: &'static str,
    pokemon_count: u32,
    items_count: u32,
    gold: u32,
    is_shiny_hunter: bool,
) -> BotUser {
    BotUser {
        id,
        discord_name,
        pokemon_count,
        items_count,
        gold,
        is_shiny_hunter,
    }
}

pub const MOCK_USERS: [BotUser; 4] = [
    user("user1", "TrainerAsh", 15, 50, 1200, false),
    user("user2", "MistyFan_01", 8, 30, 800, false),
    user("user3", "BrockTheRock", 22, 75, 2500, false),
    user("user4", "ShinyHunterGary", 5, 100, 5000, true),
];

/// Case-insensitive match on Discord name or id. A blank query matches all.
#[must_use]
pub fn search_users<'a>(users: &'a [BotUser], query: &str) -> Vec<&'a BotUser> {
    let query = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.discord_name.to_lowercase().contains(&query)
                || u.id.to_lowercase().contains(&query)
        })
        .collect()
}

/// One bar in an overview chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u32,
}

pub const COMMANDS_PER_MONTH: [ChartPoint; 6] = [
    ChartPoint { label: "Jan", value: 400 },
    ChartPoint { label: "Feb", value: 300 },
    ChartPoint { label: "Mar", value: 500 },
    ChartPoint { label: "Apr", value: 450 },
    ChartPoint { label: "May", value: 600 },
    ChartPoint { label: "Jun", value: 550 },
];

pub const POPULAR_SPAWNS: [ChartPoint; 5] = [
    ChartPoint { label: "Pikachu", value: 120 },
    ChartPoint { label: "Eevee", value: 98 },
    ChartPoint { label: "Charmander", value: 86 },
    ChartPoint { label: "Bulbasaur", value: 72 },
    ChartPoint { label: "Squirtle", value: 65 },
];

/// Bar width as a percentage of the largest value in `points`.
#[must_use]
pub fn bar_percent(points: &[ChartPoint], value: u32) -> u32 {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    if max == 0 {
        0
    } else {
        value * 100 / max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_by_name_or_id() {
        assert_eq!(search_users(&MOCK_USERS, "").len(), 4);
        let hits = search_users(&MOCK_USERS, "misty");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gold, 800);
        assert_eq!(search_users(&MOCK_USERS, "USER4")[0].discord_name, "ShinyHunterGary");
        assert!(search_users(&MOCK_USERS, "oak").is_empty());
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar_percent(&COMMANDS_PER_MONTH, 600), 100);
        assert_eq!(bar_percent(&COMMANDS_PER_MONTH, 300), 50);
        assert_eq!(bar_percent(&[], 10), 0);
    }
}
