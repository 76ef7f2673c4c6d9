use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TextareaProps {
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or(3)]
    pub rows: u32,
    /// Caps input length and shows a running character count.
    #[prop_or_default]
    pub max_length: Option<u32>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> f::Html {
    let oninput = props.oninput.reform(|e: f::InputEvent| {
        e.target_dyn_into::<f::HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default()
    });
    let field = f::html! {
        <textarea
            id={props.id.clone()}
            class={f::class_list(&["textarea", "textarea-bordered", "w-full"], &props.class)}
            placeholder={props.placeholder.clone()}
            rows={props.rows.to_string()}
            maxlength={props.max_length.map(|max| max.to_string())}
            value={props.value.clone()}
            disabled={props.disabled}
            oninput={oninput}
        />
    };
    let Some(max) = props.max_length else {
        return field;
    };
    let used = props.value.chars().count();
    f::html! {
        <div class="w-full">
            { field }
            <div class="text-right text-xs opacity-60" aria-live="polite">
                { format!("{used} / {max}") }
            </div>
        </div>
    }
}
