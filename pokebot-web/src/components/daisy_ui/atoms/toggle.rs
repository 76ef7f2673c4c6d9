use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ToggleProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    /// Secondary line under the label, e.g. what enabling a feature does.
    #[prop_or_default]
    pub hint: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

/// Switch-styled checkbox for on/off settings.
#[f::function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> f::Html {
    let mut class = f::class_list(&["toggle"], &props.class);
    class.push(props.variant.unwrap_or(f::DaisyColor::Success).class("toggle"));
    f::html! {
        <label class="label cursor-pointer justify-between gap-3">
            <span class="flex flex-col">
                if let Some(label) = &props.label {
                    <span class="label-text font-medium">{ label.clone() }</span>
                }
                if let Some(hint) = &props.hint {
                    <span class="label-text-alt opacity-70">{ hint.clone() }</span>
                }
            </span>
            <input
                id={props.id.clone()}
                class={class}
                type="checkbox"
                role="switch"
                aria-checked={props.checked.to_string()}
                checked={props.checked}
                disabled={props.disabled}
                onchange={f::checked_callback(&props.on_toggle)}
            />
        </label>
    }
}
