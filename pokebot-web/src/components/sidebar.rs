use crate::router::Route;
use pokebot_core::nav::{NAVIGATION, NavGroup, NavLink, active_link};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Current app path, base already stripped.
    pub path: AttrValue,
    /// Open on small screens; always shown from `lg` up.
    pub open: bool,
    /// Group ids the user expanded by hand.
    pub expanded: Vec<&'static str>,
    pub on_toggle_group: Callback<&'static str>,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

fn route_for(link: &NavLink) -> Route {
    Route::recognize(link.path).unwrap_or(Route::Dashboard)
}

fn link_item(link: &'static NavLink, active: bool, on_navigate: &Callback<()>) -> Html {
    let onclick = {
        let cb = on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let classes = classes!(
        "flex",
        "items-center",
        "gap-3",
        active.then_some("active")
    );
    html! {
        <li key={link.id} onclick={onclick}>
            <Link<Route> to={route_for(link)} classes={classes}>
                <span aria-hidden="true">{ link.icon }</span>
                <span>{ link.label }</span>
            </Link<Route>>
        </li>
    }
}

fn group_item(group: &'static NavGroup, props: &Props, active_id: Option<&str>) -> Html {
    if group.is_leaf() {
        return link_item(
            &group.link,
            active_id == Some(group.link.id),
            &props.on_navigate,
        );
    }
    let open = group.contains(&props.path) || props.expanded.contains(&group.link.id);
    let toggle = {
        let cb = props.on_toggle_group.clone();
        let id = group.link.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let panel_id = format!("nav-{}", group.link.id);
    html! {
        <li key={group.link.id}>
            <button
                type="button"
                class="flex w-full items-center gap-3"
                aria-expanded={if open { "true" } else { "false" }}
                aria-controls={panel_id.clone()}
                onclick={toggle}
            >
                <span aria-hidden="true">{ group.link.icon }</span>
                <span class="flex-1 text-left">{ group.link.label }</span>
                <span aria-hidden="true">{ if open { "▾" } else { "▸" } }</span>
            </button>
            if open {
                <ul id={panel_id}>
                    { for group.children.iter().map(|child| {
                        link_item(child, active_id == Some(child.id), &props.on_navigate)
                    }) }
                </ul>
            }
        </li>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let active_id = active_link(&props.path).map(|link| link.id);
    let class = classes!(
        "sidebar",
        "w-64",
        "shrink-0",
        "bg-base-100",
        "border-r",
        "border-base-300",
        "overflow-y-auto",
        "lg:block",
        (!props.open).then_some("hidden")
    );
    html! {
        <aside class={class} aria-label="Main navigation">
            <div class="px-4 py-5 text-lg font-bold">{"D0GzBotz"}</div>
            <ul class="menu w-full">
                { for NAVIGATION.iter().map(|group| group_item(group, props, active_id)) }
            </ul>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::route_for;
    use crate::router::Route;
    use pokebot_core::nav::all_links;

    #[test]
    fn every_link_maps_to_its_own_route() {
        for link in all_links() {
            let route = route_for(link);
            assert_eq!(yew_router::Routable::to_path(&route), link.path);
        }
    }
}
