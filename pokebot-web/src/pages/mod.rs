pub mod colorfy;
pub mod control_terminal;
pub mod cpu_setup;
pub mod customize;
pub mod discord_listener;
pub mod event_scheduler;
pub mod items_config;
pub mod my_uploads;
pub mod overview;
pub mod pokedex;
pub mod pokemon_detail;
pub mod settings;
pub mod shop_setup;
pub mod spawn_config;
pub mod user_management;

pub use colorfy::ColorfyPage;
pub use control_terminal::ControlTerminalPage;
pub use cpu_setup::CpuSetupPage;
pub use customize::CustomizePage;
pub use discord_listener::DiscordListenerPage;
pub use event_scheduler::EventSchedulerPage;
pub use items_config::ItemsConfigPage;
pub use my_uploads::MyUploadsPage;
pub use overview::OverviewPage;
pub use pokedex::PokedexPage;
pub use pokemon_detail::PokemonDetailPage;
pub use settings::SettingsPage;
pub use shop_setup::ShopSetupPage;
pub use spawn_config::SpawnConfigPage;
pub use user_management::UserManagementPage;

use yew::{Callback, UseStateHandle};

/// A callback that clones the state, applies `apply` with the emitted value
/// and stores the result.
pub(crate) fn edit<T, A>(state: &UseStateHandle<T>, apply: impl Fn(&mut T, A) + 'static) -> Callback<A>
where
    T: Clone + 'static,
    A: 'static,
{
    let state = state.clone();
    Callback::from(move |arg: A| {
        let mut next = (*state).clone();
        apply(&mut next, arg);
        state.set(next);
    })
}
