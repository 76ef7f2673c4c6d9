use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct RangeProps {
    pub value: f64,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(100.0)]
    pub max: f64,
    #[prop_or(1.0)]
    pub step: f64,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
    /// Receives the raw slider text so callers parse it like any other field.
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

#[f::function_component(Range)]
pub fn range(props: &RangeProps) -> f::Html {
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let mut class = f::class_list(&["range"], &props.class);
    if let Some(variant) = props.variant {
        class.push(variant.class("range"));
    }
    f::html! {
        <input
            id={f::attr_value(&props.id)}
            class={class}
            type="range"
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            oninput={on_change}
        />
    }
}
