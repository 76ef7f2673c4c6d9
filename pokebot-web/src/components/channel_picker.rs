use crate::components::daisy_ui::{Alert, Button, DaisyColor, DaisySize, Loading};
use pokebot_core::Channel;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub channels: Vec<Channel>,
    pub selected: Vec<String>,
    #[prop_or_default]
    pub loading: bool,
    /// Load failure; replaces the spinner with an error banner.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Receives the clicked channel id.
    pub on_toggle: Callback<String>,
}

/// Grid of channel chips; a click toggles membership in the selection.
#[function_component(ChannelPicker)]
pub fn channel_picker(p: &Props) -> Html {
    if let Some(message) = &p.error {
        let retry = p.on_retry.clone().map(|cb| {
            html! {
                <Button
                    id="retry-channels"
                    size={DaisySize::Sm}
                    variant={DaisyColor::Error}
                    outline={true}
                    label="Retry"
                    onclick={cb.reform(|_: MouseEvent| ())}
                />
            }
        });
        return html! {
            <Alert class="channel-error" variant={DaisyColor::Error} message={message.clone()}>
                { retry.unwrap_or_default() }
            </Alert>
        };
    }
    if p.loading {
        return html! { <Loading block={true} label={AttrValue::from("Loading channels...")} /> };
    }
    if p.channels.is_empty() {
        return html! { <p class="text-base-content/60">{"No channels available."}</p> };
    }
    html! {
        <div class="grid grid-cols-2 gap-3 md:grid-cols-3" role="group" aria-label="Channels">
            { for p.channels.iter().map(|channel| {
                let selected = p.selected.contains(&channel.id);
                let onclick = {
                    let cb = p.on_toggle.clone();
                    let id = channel.id.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
                };
                let class = classes!(
                    "btn",
                    "justify-start",
                    if selected { "btn-primary" } else { "btn-outline" }
                );
                html! {
                    <button
                        key={channel.id.clone()}
                        type="button"
                        class={class}
                        aria-pressed={if selected { "true" } else { "false" }}
                        onclick={onclick}
                    >
                        { format!("#{}", channel.name) }
                    </button>
                }
            }) }
        </div>
    }
}
