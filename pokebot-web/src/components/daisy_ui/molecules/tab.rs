use crate::components::daisy_ui::foundation as f;
use yew::use_state;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: f::AttrValue,
    pub label: f::AttrValue,
    pub disabled: bool,
    pub content: Option<f::Html>,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct TabProps {
    pub tabs: Vec<TabItem>,
    /// Tab shown on first render; defaults to the first tab.
    #[prop_or_default]
    pub active_id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

fn dom_id(id: &str) -> String {
    let slug: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("tab-{slug}")
}

/// Boxed tab bar; only the active tab's content is mounted.
#[f::function_component(Tab)]
pub fn tab(props: &TabProps) -> f::Html {
    let initial = props
        .active_id
        .clone()
        .or_else(|| props.tabs.first().map(|tab| tab.id.clone()))
        .unwrap_or_default();
    let active = use_state(|| initial);
    let panel = props.tabs.iter().find(|tab| tab.id == *active);
    let panel_id = panel.map(|tab| format!("{}-panel", dom_id(&tab.id)));

    f::html! {
        <div>
            <div class={f::class_list(&["tabs", "tabs-box"], &props.class)} role="tablist">
                { for props.tabs.iter().map(|tab| {
                    let selected = tab.id == *active;
                    let onclick = {
                        let (active, on_change) = (active.clone(), props.on_change.clone());
                        let id = tab.id.clone();
                        f::Callback::from(move |_: f::MouseEvent| {
                            active.set(id.clone());
                            on_change.emit(id.clone());
                        })
                    };
                    f::html! {
                        <button
                            type="button"
                            id={dom_id(&tab.id)}
                            class={f::classes!("tab", selected.then_some("tab-active"), tab.disabled.then_some("tab-disabled"))}
                            role="tab"
                            aria-selected={selected.to_string()}
                            disabled={tab.disabled}
                            onclick={onclick}
                        >
                            { tab.label.clone() }
                        </button>
                    }
                }) }
            </div>
            <div class="mt-4" role="tabpanel" id={panel_id}>
                { panel.and_then(|tab| tab.content.clone()).unwrap_or_default() }
            </div>
        </div>
    }
}
