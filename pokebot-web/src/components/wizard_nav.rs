use crate::components::daisy_ui::{Button, DaisyColor};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub is_first: bool,
    pub is_last: bool,
    /// The current step's own check. Gates both Next and Save.
    pub step_valid: bool,
    #[prop_or_default]
    pub saving: bool,
    /// Why the step cannot be left yet.
    #[prop_or_default]
    pub issue: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("Save Configuration"))]
    pub save_label: AttrValue,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
    pub on_save: Callback<()>,
}

/// Back / Next / Save row under a wizard step.
#[function_component(WizardNav)]
pub fn wizard_nav(p: &Props) -> Html {
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let forward = if p.is_last {
        let cb = p.on_save.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    } else {
        let cb = p.on_next.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let forward_label = if p.is_last {
        p.save_label.clone()
    } else {
        AttrValue::from("Next")
    };
    html! {
        <div class="mt-6 flex flex-col gap-3">
            { p.issue.as_ref().filter(|_| !p.step_valid).map(|issue| html! {
                <p class="text-sm text-error" role="alert">{ issue.clone() }</p>
            }).unwrap_or_default() }
            <div class="flex justify-between">
                <Button outline={true} disabled={p.is_first || p.saving} onclick={back}>{"Back"}</Button>
                <Button
                    id={AttrValue::from(if p.is_last { "wizard-save" } else { "wizard-next" })}
                    variant={if p.is_last { DaisyColor::Success } else { DaisyColor::Primary }}
                    disabled={!p.step_valid}
                    busy={p.saving}
                    onclick={forward}
                >
                    { forward_label }
                </Button>
            </div>
        </div>
    }
}
