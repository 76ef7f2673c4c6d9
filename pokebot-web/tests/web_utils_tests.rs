#[cfg(target_arch = "wasm32")]
use pokebot_web::dom;
use pokebot_web::api::{ApiError, PokeApi};
use pokebot_web::router::Route;
use pokebot_core::nav::all_links;
use pokebot_core::pokedex::fetch_error_message;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_the_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn every_sidebar_path_is_a_known_route() {
    for link in all_links() {
        let route = Route::recognize(link.path);
        assert!(
            route.is_some_and(|r| r != Route::NotFound),
            "{} has no route",
            link.path
        );
    }
}

#[test]
fn pokemon_detail_route_normalises_name() {
    let route = Route::pokemon_detail("  Pikachu ");
    assert_eq!(
        route,
        Route::PokemonDetail {
            name: "pikachu".to_string()
        }
    );
    assert_eq!(route.to_path(), "/pokemon/pokedex/pikachu");
    assert_eq!(
        Route::recognize("/pokemon/pokedex/mr-mime"),
        Some(Route::PokemonDetail {
            name: "mr-mime".to_string()
        })
    );
}

#[test]
fn root_legacy_overview_and_unknown_paths_go_home() {
    assert_eq!(Route::recognize("/"), Some(Route::Root));
    assert!(Route::Root.redirects_home());
    assert!(Route::DashboardOverview.redirects_home());
    assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    assert!(Route::NotFound.redirects_home());
    assert!(!Route::Dashboard.redirects_home());
    assert!(!Route::Pokedex.redirects_home());
}

#[test]
fn api_errors_read_like_fetch_failures() {
    assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
    assert!(ApiError::Aborted.is_aborted());
    assert!(!ApiError::Request("offline".into()).is_aborted());
    assert!(fetch_error_message("missingno", 404).contains("missingno"));
}

#[test]
fn poke_api_can_be_built_and_aborted_without_a_browser() {
    let api = PokeApi::new();
    api.abort();
}
