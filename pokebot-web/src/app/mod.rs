use crate::components::{Header, Sidebar};
use crate::router::{Route, switch};
#[cfg(target_arch = "wasm32")]
use crate::storage::BackendHandle;
use pokebot_core::nav::{HOME_PATH, page_title};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;

pub use state::ThemeContext;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    let backend = use_memo((), |()| BackendHandle::browser());
    html! {
        <BrowserRouter basename={router_base}>
            <ContextProvider<BackendHandle> context={(*backend).clone()}>
                <AppShell />
            </ContextProvider<BackendHandle>>
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
pub fn app_shell() -> Html {
    html! {
        <Layout>
            <Switch<Route> render={switch} />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Sidebar, header and the routed page. Must sit inside a router.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let shell = state::use_shell_state();
    let path = use_location()
        .map_or_else(|| HOME_PATH.to_string(), |loc| crate::paths::app_path(loc.path()));
    let title = page_title(&path);
    html! {
        <ContextProvider<ThemeContext> context={shell.theme_context()}>
            <div class="flex h-screen overflow-hidden bg-base-200 text-base-content">
                <Sidebar
                    path={AttrValue::from(path)}
                    open={*shell.sidebar_open}
                    expanded={(*shell.expanded_groups).clone()}
                    on_toggle_group={shell.toggle_group()}
                    on_navigate={shell.close_sidebar()}
                />
                <div class="flex flex-1 flex-col overflow-hidden">
                    <Header
                        title={AttrValue::from(title)}
                        dark={shell.theme.is_dark()}
                        on_toggle_theme={shell.toggle_theme()}
                        on_toggle_sidebar={shell.toggle_sidebar()}
                    />
                    <main id="main" class="flex-1 overflow-y-auto p-4 md:p-6">
                        { for props.children.iter() }
                    </main>
                </div>
            </div>
        </ContextProvider<ThemeContext>>
    }
}
