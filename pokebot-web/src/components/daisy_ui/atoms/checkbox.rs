use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

#[f::function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> f::Html {
    f::html! {
        <label class="label cursor-pointer justify-start gap-2">
            <input
                id={props.id.clone()}
                class={f::class_list(&["checkbox", "checkbox-primary", "checkbox-sm"], &props.class)}
                type="checkbox"
                checked={props.checked}
                disabled={props.disabled}
                onchange={f::checked_callback(&props.on_toggle)}
            />
            if let Some(label) = &props.label {
                <span class="label-text">{ label.clone() }</span>
            }
        </label>
    }
}
