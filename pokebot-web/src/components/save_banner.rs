use crate::components::daisy_ui::{Alert, DaisyColor, Loading};
use pokebot_core::SaveStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: SaveStatus,
    #[prop_or_default]
    pub saving_label: Option<AttrValue>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Outcome banner for a page's save action.
#[function_component(SaveBanner)]
pub fn save_banner(p: &Props) -> Html {
    match &p.status {
        SaveStatus::Idle => Html::default(),
        SaveStatus::Saving => html! {
            <Loading label={p.saving_label.clone().unwrap_or_else(|| "Saving...".into())} />
        },
        SaveStatus::Saved(message) => html! {
            <Alert
                class="save-banner"
                variant={DaisyColor::Success}
                message={AttrValue::from(message.clone())}
                on_dismiss={p.on_dismiss.clone()}
            />
        },
        SaveStatus::Failed(message) => html! {
            <Alert
                class="save-banner"
                variant={DaisyColor::Error}
                title={AttrValue::from("Save failed")}
                message={AttrValue::from(message.clone())}
                on_dismiss={p.on_dismiss.clone()}
            />
        },
    }
}
