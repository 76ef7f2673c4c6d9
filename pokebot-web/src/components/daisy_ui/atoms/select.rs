use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
    pub disabled: bool,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// Options whose value and label are the same text.
    #[must_use]
    pub fn plain<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        names
            .into_iter()
            .map(|name| Self::new(name.to_string(), name.to_string()))
            .collect()
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    /// Leading disabled option shown while nothing is chosen.
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let mut class = f::class_list(&["select", "select-bordered", "w-full"], &props.class);
    if props.invalid {
        class.push("select-error");
    }
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                    cb.emit(sel.value().into());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let current = props.value.clone().unwrap_or_default();
    f::html! {
        <select
            id={f::attr_value(&props.id)}
            class={class}
            value={current.clone()}
            disabled={props.disabled}
            onchange={on_change}
        >
            { props.placeholder.as_ref().map(|text| f::html! {
                <option value="" disabled={true} selected={current.is_empty()}>{ text.clone() }</option>
            }).unwrap_or_default() }
            { for props.options.iter().map(|opt| {
                f::html! {
                    <option value={opt.value.clone()} disabled={opt.disabled} selected={opt.value == current}>
                        { opt.label.clone() }
                    </option>
                }
            })}
        </select>
    }
}
