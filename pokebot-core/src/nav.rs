//! Sidebar navigation tree and header title lookup.

pub const FALLBACK_TITLE: &str = "D0GzBotz Dashboard";
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// Glyph shown next to the label.
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub link: NavLink,
    pub children: &'static [NavLink],
}

impl NavGroup {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when `pathname` is inside this group.
    #[must_use]
    pub fn contains(&self, pathname: &str) -> bool {
        is_within(pathname, self.link.path)
            || self.children.iter().any(|c| is_within(pathname, c.path))
    }
}

const fn link(
    id: &'static str,
    label: &'static str,
    path: &'static str,
    icon: &'static str,
) -> NavLink {
    NavLink {
        id,
        label,
        path,
        icon,
    }
}

static DASHBOARD_LINKS: [NavLink; 3] = [
    link("dashboard-overview", "Overview", "/dashboard", "📊"),
    link(
        "dashboard-control-terminal",
        "Control Terminal",
        "/dashboard/control-terminal",
        "🖥️",
    ),
    link("dashboard-settings", "Settings", "/dashboard/settings", "⚙️"),
];

static POKEMON_LINKS: [NavLink; 7] = [
    link("spawn-config", "Spawn Config", "/pokemon/spawn-config", "🌱"),
    link("user-management", "User Management", "/pokemon/user-management", "👥"),
    link("items-config", "Items Config", "/pokemon/items-config", "🎁"),
    link("pokedex", "Pokedex", "/pokemon/pokedex", "📖"),
    link("shop-setup", "Shop Setup", "/pokemon/shop-setup", "🛒"),
    link("cpu-setup", "CPU Setup", "/pokemon/cpu-setup", "🧠"),
    link("event-scheduler", "Event Scheduler", "/pokemon/event-scheduler", "📅"),
];

static UI_LINKS: [NavLink; 3] = [
    link("my-uploads", "My Uploads", "/ui/my-uploads", "☁️"),
    link("customize", "Customize", "/ui/customize", "🛠️"),
    link("colorfy", "Colorfy", "/ui/colorfy", "🎨"),
];

pub static NAVIGATION: [NavGroup; 4] = [
    NavGroup {
        link: link("dashboard", "Dashboard", "/dashboard", "🏠"),
        children: &DASHBOARD_LINKS,
    },
    NavGroup {
        link: link("pokemon", "Pokemon", "/pokemon", "🐛"),
        children: &POKEMON_LINKS,
    },
    NavGroup {
        link: link("discord-listener", "Discord Listener", "/discord-listener", "👂"),
        children: &[],
    },
    NavGroup {
        link: link("ui", "UI Customization", "/ui", "🖌️"),
        children: &UI_LINKS,
    },
];

/// `pathname` equals `base` or is nested below it.
fn is_within(pathname: &str, base: &str) -> bool {
    pathname
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Every clickable link, leaves and children alike.
pub fn all_links() -> impl Iterator<Item = &'static NavLink> {
    NAVIGATION.iter().flat_map(|group| {
        if group.is_leaf() {
            std::slice::from_ref(&group.link)
        } else {
            group.children
        }
    })
}

/// Header title for a path: exact link match, else the longest link path
/// the path is nested under, else [`FALLBACK_TITLE`].
#[must_use]
pub fn page_title(pathname: &str) -> &'static str {
    let pathname = match pathname.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    };
    if let Some(exact) = all_links().find(|l| l.path == pathname) {
        return exact.label;
    }
    all_links()
        .filter(|l| is_within(pathname, l.path))
        .max_by_key(|l| l.path.len())
        .map_or(FALLBACK_TITLE, |l| l.label)
}

/// The link to highlight for a path, using the same rules as [`page_title`].
#[must_use]
pub fn active_link(pathname: &str) -> Option<&'static NavLink> {
    let title = page_title(pathname);
    all_links().find(|l| l.label == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_paths_resolve() {
        assert_eq!(page_title("/dashboard"), "Overview");
        assert_eq!(page_title("/dashboard/settings"), "Settings");
        assert_eq!(page_title("/discord-listener"), "Discord Listener");
        assert_eq!(page_title("/ui/colorfy/"), "Colorfy");
    }

    #[test]
    fn nested_paths_use_longest_prefix() {
        assert_eq!(page_title("/pokemon/pokedex/pikachu"), "Pokedex");
        assert_eq!(page_title("/dashboard/control-terminal/x"), "Control Terminal");
    }

    #[test]
    fn root_and_unknown_paths() {
        assert_eq!(page_title("/"), "Overview");
        assert_eq!(page_title("/twitch"), FALLBACK_TITLE);
        assert_eq!(page_title("/pokemon/pokedexx"), FALLBACK_TITLE);
    }

    #[test]
    fn tree_shape() {
        assert_eq!(all_links().count(), 14);
        assert!(NAVIGATION[1].contains("/pokemon/shop-setup"));
        assert!(!NAVIGATION[0].contains("/pokemon/shop-setup"));
        assert_eq!(active_link("/pokemon/pokedex/eevee").map(|l| l.id), Some("pokedex"));
    }
}
