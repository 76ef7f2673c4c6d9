use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub dark: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sidebar = {
        let cb = p.on_toggle_sidebar.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (icon, label) = if p.dark {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };
    html! {
        <header role="banner" class="navbar border-b border-base-300 bg-base-100 px-4">
            <a href="#main" class="sr-only">{"Skip to content"}</a>
            <div class="flex-none lg:hidden">
                <button type="button" class="btn btn-ghost btn-square" aria-label="Toggle navigation" onclick={toggle_sidebar}>
                    {"☰"}
                </button>
            </div>
            <div class="flex-1">
                <h1 id="page-title" class="text-xl font-semibold">{ p.title.clone() }</h1>
            </div>
            <div class="flex-none">
                <button
                    id="theme-toggle"
                    type="button"
                    class="btn btn-ghost btn-circle"
                    aria-label={label}
                    aria-pressed={if p.dark { "true" } else { "false" }}
                    onclick={toggle_theme}
                >
                    { icon }
                </button>
            </div>
        </header>
    }
}
