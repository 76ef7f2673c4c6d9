use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct LoadingProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub size: Option<f::DaisySize>,
    /// Centre the spinner in a padded block, as pages do while fetching.
    #[prop_or_default]
    pub block: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Loading)]
pub fn loading(props: &LoadingProps) -> f::Html {
    let mut class = f::class_list(&["loading", "loading-spinner", "text-primary"], &props.class);
    if let Some(size) = props.size {
        class.push(size.class("loading"));
    }
    let wrapper = if props.block {
        "flex flex-col items-center justify-center gap-2 py-10"
    } else {
        "inline-flex items-center gap-2"
    };
    f::html! {
        <div class={wrapper} role="status" aria-live="polite">
            <span class={class}></span>
            { props.label.as_ref().map(|l| f::html! { <span>{ l.clone() }</span> }).unwrap_or_default() }
        </div>
    }
}
