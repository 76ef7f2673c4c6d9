use crate::pages::{
    ColorfyPage, ControlTerminalPage, CpuSetupPage, CustomizePage, DiscordListenerPage,
    EventSchedulerPage, ItemsConfigPage, MyUploadsPage, OverviewPage, PokedexPage,
    PokemonDetailPage, SettingsPage, ShopSetupPage, SpawnConfigPage, UserManagementPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/overview")]
    DashboardOverview,
    #[at("/dashboard/control-terminal")]
    ControlTerminal,
    #[at("/dashboard/settings")]
    Settings,
    #[at("/pokemon/spawn-config")]
    SpawnConfig,
    #[at("/pokemon/user-management")]
    UserManagement,
    #[at("/pokemon/items-config")]
    ItemsConfig,
    #[at("/pokemon/pokedex")]
    Pokedex,
    #[at("/pokemon/pokedex/:name")]
    PokemonDetail { name: String },
    #[at("/pokemon/shop-setup")]
    ShopSetup,
    #[at("/pokemon/cpu-setup")]
    CpuSetup,
    #[at("/pokemon/event-scheduler")]
    EventScheduler,
    #[at("/discord-listener")]
    DiscordListener,
    #[at("/ui/my-uploads")]
    MyUploads,
    #[at("/ui/customize")]
    Customize,
    #[at("/ui/colorfy")]
    Colorfy,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes that only forward to the dashboard home.
    #[must_use]
    pub const fn redirects_home(&self) -> bool {
        matches!(self, Self::Root | Self::DashboardOverview | Self::NotFound)
    }

    #[must_use]
    pub fn pokemon_detail(name: &str) -> Self {
        Self::PokemonDetail {
            name: name.trim().to_lowercase(),
        }
    }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    if route.redirects_home() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }
    match route {
        Route::ControlTerminal => html! { <ControlTerminalPage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::SpawnConfig => html! { <SpawnConfigPage /> },
        Route::UserManagement => html! { <UserManagementPage /> },
        Route::ItemsConfig => html! { <ItemsConfigPage /> },
        Route::Pokedex => html! { <PokedexPage /> },
        Route::PokemonDetail { name } => html! { <PokemonDetailPage name={name} /> },
        Route::ShopSetup => html! { <ShopSetupPage /> },
        Route::CpuSetup => html! { <CpuSetupPage /> },
        Route::EventScheduler => html! { <EventSchedulerPage /> },
        Route::DiscordListener => html! { <DiscordListenerPage /> },
        Route::MyUploads => html! { <MyUploadsPage /> },
        Route::Customize => html! { <CustomizePage /> },
        Route::Colorfy => html! { <ColorfyPage /> },
        Route::Dashboard | Route::Root | Route::DashboardOverview | Route::NotFound => {
            html! { <OverviewPage /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use pokebot_core::nav::{HOME_PATH, all_links};
    use yew_router::Routable;

    #[test]
    fn every_navigation_link_resolves_to_a_page() {
        for link in all_links() {
            let route = Route::recognize(link.path)
                .unwrap_or_else(|| panic!("{} should be routable", link.path));
            assert!(!route.redirects_home(), "{} redirects", link.path);
        }
    }

    #[test]
    fn home_path_matches_dashboard_route() {
        assert_eq!(Route::Dashboard.to_path(), HOME_PATH);
    }

    #[test]
    fn legacy_and_unknown_paths_redirect_home() {
        assert!(Route::recognize("/").is_some_and(|r| r.redirects_home()));
        assert!(
            Route::recognize("/dashboard/overview").is_some_and(|r| r.redirects_home())
        );
        assert!(Route::recognize("/nowhere/at/all").is_some_and(|r| r.redirects_home()));
    }

    #[test]
    fn pokemon_detail_route_carries_the_name() {
        assert_eq!(
            Route::recognize("/pokemon/pokedex/pikachu"),
            Some(Route::PokemonDetail {
                name: "pikachu".into()
            })
        );
        assert_eq!(
            Route::pokemon_detail(" Mr-Mime ").to_path(),
            "/pokemon/pokedex/mr-mime"
        );
    }
}
