use futures::executor::block_on;
use pokebot_web::app::AppShell;
use pokebot_web::pages::{
    ColorfyPage, ControlTerminalPage, CpuSetupPage, CustomizePage, DiscordListenerPage,
    EventSchedulerPage, ItemsConfigPage, MyUploadsPage, OverviewPage, PokedexPage,
    PokemonDetailPage, SettingsPage, ShopSetupPage, SpawnConfigPage, UserManagementPage,
};
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
struct RoutedProps {
    path: AttrValue,
    #[prop_or_default]
    children: Children,
}

/// Mounts children below a memory router sitting at `path`.
#[function_component(Routed)]
fn routed(props: &RoutedProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        AnyHistory::from(MemoryHistory::with_entries(vec![path.to_string()]))
    });
    html! {
        <Router history={(*history).clone()}>
            { for props.children.iter() }
        </Router>
    }
}

#[derive(Properties, PartialEq)]
struct ShellAtProps {
    path: AttrValue,
}

#[function_component(ShellAt)]
fn shell_at(props: &ShellAtProps) -> Html {
    html! {
        <Routed path={props.path.clone()}>
            <AppShell />
        </Routed>
    }
}

fn render_path(path: &'static str) -> String {
    block_on(
        LocalServerRenderer::<ShellAt>::with_props(ShellAtProps {
            path: AttrValue::from(path),
        })
        .render(),
    )
}

#[derive(Properties, PartialEq)]
struct PageProps {
    page: Html,
}

#[function_component(RoutedPage)]
fn routed_page(props: &PageProps) -> Html {
    html! {
        <Routed path="/dashboard">
            { props.page.clone() }
        </Routed>
    }
}

fn render_page(page: Html) -> String {
    block_on(LocalServerRenderer::<RoutedPage>::with_props(PageProps { page }).render())
}

#[test]
fn shell_renders_sidebar_header_and_page() {
    let html = render_path("/dashboard/settings");
    assert!(html.contains("id=\"page-title\""));
    assert!(html.contains("Settings"));
    assert!(html.contains("id=\"main\""));
    assert!(html.contains("Spawn Config"));
    assert!(html.contains("Discord Listener"));
    assert!(html.contains("id=\"settings\""));
}

#[test]
fn each_route_renders_its_page() {
    let cases = [
        ("/dashboard", "id=\"overview\""),
        ("/dashboard/control-terminal", "id=\"control-terminal\""),
        ("/dashboard/settings", "id=\"settings\""),
        ("/pokemon/spawn-config", "id=\"spawn-config\""),
        ("/pokemon/user-management", "Registered Users"),
        ("/pokemon/items-config", "id=\"items-config\""),
        ("/pokemon/pokedex", "id=\"pokedex\""),
        ("/pokemon/pokedex/pikachu", "id=\"pokemon-detail\""),
        ("/pokemon/shop-setup", "id=\"shop-setup\""),
        ("/pokemon/cpu-setup", "id=\"cpu-setup\""),
        ("/pokemon/event-scheduler", "id=\"event-scheduler\""),
        ("/discord-listener", "id=\"discord-listener\""),
        ("/ui/my-uploads", "id=\"my-uploads\""),
        ("/ui/customize", "id=\"customize\""),
        ("/ui/colorfy", "id=\"colorfy\""),
    ];
    for (path, marker) in cases {
        let html = render_path(path);
        assert!(html.contains(marker), "{path} should render {marker}");
    }
}

#[test]
fn header_title_follows_the_route() {
    let html = render_path("/pokemon/shop-setup");
    assert!(html.contains("Shop Setup"));
    let nested = render_path("/pokemon/pokedex/bulbasaur");
    assert!(nested.contains("Pokedex"));
}

#[test]
fn redirecting_routes_render_only_the_shell() {
    for path in ["/", "/dashboard/overview", "/definitely/not/here"] {
        let html = render_path(path);
        assert!(html.contains("id=\"main\""), "{path} should keep the shell");
        assert!(!html.contains("id=\"overview\""), "{path} should redirect first");
    }
    assert!(render_path("/definitely/not/here").contains("D0GzBotz Dashboard"));
}

#[test]
fn overview_shows_stats_and_charts() {
    let html = render_page(html! { <OverviewPage /> });
    assert!(html.contains("Commands per Month"));
    assert!(html.contains("Popular Spawns"));
}

#[test]
fn control_terminal_starts_offline() {
    let html = render_page(html! { <ControlTerminalPage /> });
    assert!(html.contains("id=\"start-bot\""));
    assert!(html.contains("id=\"stop-bot\""));
    assert!(html.contains("id=\"terminal-log\""));
    assert!(html.contains("id=\"terminal-input\""));
}

#[test]
fn settings_page_lists_message_and_developer_cards() {
    let html = render_page(html! { <SettingsPage /> });
    assert!(html.contains("Welcome Message"));
    assert!(html.contains("Leaving Message"));
    assert!(html.contains("Developer Settings"));
    assert!(html.contains("id=\"development-mode\""));
}

#[test]
fn spawn_wizard_opens_on_first_step() {
    let html = render_page(html! { <SpawnConfigPage /> });
    assert!(html.contains("Spawn Configuration"));
    assert!(html.contains("Shiny Chance"));
    assert!(html.contains("Loading channels..."));
    assert!(html.contains("id=\"wizard-next\""));
    assert!(!html.contains("id=\"wizard-save\""));
}

#[test]
fn items_wizard_opens_on_first_step() {
    let html = render_page(html! { <ItemsConfigPage /> });
    assert!(html.contains("Item Drop Configuration"));
    assert!(html.contains("id=\"wizard-next\""));
}

#[test]
fn user_management_lists_every_user() {
    let html = render_page(html! { <UserManagementPage /> });
    for name in ["TrainerAsh", "MistyFan_01", "BrockTheRock", "ShinyHunterGary"] {
        assert!(html.contains(name), "missing {name}");
    }
    assert!(html.contains("id=\"user-search\""));
}

#[test]
fn pokedex_starts_in_loading_state() {
    let html = render_page(html! { <PokedexPage /> });
    assert!(html.contains("id=\"pokedex-loading\""));
    assert!(html.contains("id=\"pokedex-search\""));
    assert!(html.contains("id=\"generation-filter\""));
    assert!(html.contains("All Generations"));
    assert!(!html.contains("id=\"pokedex-grid\""));
}

#[test]
fn pokemon_detail_starts_loading() {
    let html = render_page(html! {
        <PokemonDetailPage name="pikachu" />
    });
    assert!(html.contains("id=\"pokemon-detail\""));
    assert!(html.contains("Loading Pikachu..."));
    assert!(!html.contains("id=\"base-stats\""));
}

#[test]
fn shop_setup_waits_for_the_catalog() {
    let html = render_page(html! { <ShopSetupPage /> });
    assert!(html.contains("Shop Setup"));
    assert!(html.contains("id=\"toggle-add-item\""));
    assert!(html.contains("id=\"save-shop\""));
    assert!(html.contains("Save All (0)"));
    assert!(!html.contains("id=\"add-shop-item\""));
}

#[test]
fn cpu_setup_opens_on_the_battle_ui_tab() {
    let html = render_page(html! { <CpuSetupPage /> });
    assert!(html.contains("id=\"cpu-setup\""));
    assert!(html.contains("id=\"battle-ui\""));
    assert!(html.contains("id=\"battle-speed\""));
    assert!(html.contains("AI Battlers"));
    assert!(!html.contains("id=\"add-ai\""));
}

#[test]
fn event_scheduler_shows_mock_events() {
    let html = render_page(html! { <EventSchedulerPage /> });
    assert!(html.contains("id=\"create-event\""));
    assert!(html.contains("Weekend Shiny Hunt!"));
    assert!(html.contains("Pikachu Outbreak"));
    assert!(!html.contains("id=\"save-event\""));
}

#[test]
fn discord_listener_renders_feed_controls() {
    let html = render_page(html! { <DiscordListenerPage /> });
    assert!(html.contains("Live Discord Feed"));
    assert!(html.contains("id=\"feed-channel\""));
    assert!(html.contains("id=\"feed-pause\""));
    assert!(html.contains("id=\"feed-log\""));
}

#[test]
fn uploads_page_starts_empty() {
    let html = render_page(html! { <MyUploadsPage /> });
    assert!(html.contains("id=\"upload-input\""));
    assert!(html.contains("My Files"));
}

#[test]
fn customize_page_renders_preference_controls() {
    let html = render_page(html! { <CustomizePage /> });
    for id in ["theme-preference", "font-size", "layout-density", "primary-color"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
    assert!(html.contains("id=\"save-customize\""));
}

#[test]
fn colorfy_page_renders_preview() {
    let html = render_page(html! { <ColorfyPage /> });
    assert!(html.contains("Color Palette"));
    assert!(html.contains("id=\"palette-preview\""));
    assert!(html.contains("id=\"save-palette\""));
}
