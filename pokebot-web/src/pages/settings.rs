use crate::components::SaveBanner;
use crate::components::daisy_ui::{
    Button, Card, DaisyColor, Input, Select, SelectOption, Textarea, Toggle,
};
use crate::hooks::use_cancel_token;
use crate::storage::{self, use_backend};
use pokebot_core::catalog::mock_channels;
use pokebot_core::settings::{DashboardSettings, MESSAGE_LIMIT, MessageSetting, persist};
use pokebot_core::SaveStatus;
use yew::prelude::*;

const PREVIEW_USER: &str = "NewTrainer";
const PREVIEW_SERVER: &str = "PokéBot HQ";

#[derive(Properties, PartialEq, Clone)]
pub struct MessageEditorProps {
    pub id: AttrValue,
    pub title: AttrValue,
    pub setting: MessageSetting,
    /// The message with placeholders filled in.
    pub preview: AttrValue,
    pub on_change: Callback<MessageSetting>,
}

/// Enable toggle, target channel and template for a join or leave message.
#[function_component(MessageEditor)]
pub fn message_editor(p: &MessageEditorProps) -> Html {
    let update = |apply: fn(&mut MessageSetting, String)| {
        let setting = p.setting.clone();
        let cb = p.on_change.clone();
        Callback::from(move |value: String| {
            let mut next = setting.clone();
            apply(&mut next, value);
            cb.emit(next);
        })
    };
    let on_toggle = {
        let setting = p.setting.clone();
        let cb = p.on_change.clone();
        Callback::from(move |enabled: bool| {
            cb.emit(MessageSetting {
                enabled,
                ..setting.clone()
            });
        })
    };
    let channel_options: Vec<SelectOption> = mock_channels()
        .into_iter()
        .map(|c| SelectOption::new(c.id, format!("#{}", c.name)))
        .collect();
    let on_channel = update(|s, v| s.channel_id = v).reform(|v: AttrValue| v.to_string());

    html! {
        <Card id={p.id.clone()} title={p.title.clone()}>
            <Toggle
                id={format!("{}-enabled", p.id)}
                label="Enabled"
                checked={p.setting.enabled}
                on_toggle={on_toggle}
            />
            <label class="form-control w-full">
                <span class="label-text">{"Channel"}</span>
                <Select
                    id={format!("{}-channel", p.id)}
                    options={channel_options}
                    placeholder="Select a channel"
                    value={(!p.setting.channel_id.is_empty())
                        .then(|| AttrValue::from(p.setting.channel_id.clone()))}
                    disabled={!p.setting.enabled}
                    on_change={on_channel}
                />
            </label>
            <label class="form-control w-full">
                <span class="label-text">{"Message"}</span>
                <Textarea
                    id={format!("{}-message", p.id)}
                    rows={3}
                    max_length={MESSAGE_LIMIT}
                    value={AttrValue::from(p.setting.message.clone())}
                    disabled={!p.setting.enabled}
                    oninput={update(|s, v| s.message = v)}
                />
                <span class="label-text-alt opacity-70">
                    {"Use {user} and {server} as placeholders."}
                </span>
            </label>
            <div class="rounded bg-base-200 p-3 text-sm">
                <span class="font-semibold">{"Preview: "}</span>{ p.preview.clone() }
            </div>
        </Card>
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let settings = use_state(DashboardSettings::default);
    let status = use_state(SaveStatus::default);

    {
        let (settings, status) = (settings.clone(), status.clone());
        use_effect_with((), move |()| {
            match storage::preferences().dashboard_settings() {
                Ok(stored) => settings.set(stored),
                Err(err) => {
                    log::error!("Could not load settings: {err}");
                    status.set(SaveStatus::Failed(format!("Could not load settings: {err}")));
                }
            }
            || {}
        });
    }

    let edit = |apply: fn(&mut DashboardSettings, String)| {
        let settings = settings.clone();
        Callback::from(move |value: String| {
            let mut next = (*settings).clone();
            apply(&mut next, value);
            settings.set(next);
        })
    };
    let edit_message = |apply: fn(&mut DashboardSettings, MessageSetting)| {
        let settings = settings.clone();
        Callback::from(move |value: MessageSetting| {
            let mut next = (*settings).clone();
            apply(&mut next, value);
            settings.set(next);
        })
    };
    let on_dev_mode = {
        let settings = settings.clone();
        Callback::from(move |enabled: bool| {
            settings.set(DashboardSettings {
                development_mode_enabled: enabled,
                ..(*settings).clone()
            });
        })
    };

    let on_save = {
        let settings = settings.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(SaveStatus::Saving);
            let current = (*settings).clone();
            let backend = backend.clone();
            let status = status.clone();
            let cancel = cancel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let banner = persist(&*backend, &storage::preferences(), current).await;
                if cancel.is_cancelled() {
                    return;
                }
                status.set(banner);
            });
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };

    html! {
        <div class="space-y-6" id="settings">
            <SaveBanner status={(*status).clone()} on_dismiss={on_dismiss} />
            <div class="grid gap-6 lg:grid-cols-2">
                <MessageEditor
                    id="welcome"
                    title="Welcome Message"
                    setting={settings.welcome_message.clone()}
                    preview={AttrValue::from(settings.render_welcome(PREVIEW_USER, PREVIEW_SERVER))}
                    on_change={edit_message(|s, m| s.welcome_message = m)}
                />
                <MessageEditor
                    id="leaving"
                    title="Leaving Message"
                    setting={settings.leaving_message.clone()}
                    preview={AttrValue::from(settings.render_leaving(PREVIEW_USER, PREVIEW_SERVER))}
                    on_change={edit_message(|s, m| s.leaving_message = m)}
                />
            </div>
            <Card id="developer" title="Developer Settings">
                <Toggle
                    id="development-mode"
                    label="Development mode"
                    checked={settings.development_mode_enabled}
                    on_toggle={on_dev_mode}
                />
                <label class="form-control w-full">
                    <span class="label-text">{"Test API Key"}</span>
                    <Input
                        id="test-api-key"
                        input_type="password"
                        value={AttrValue::from(settings.test_api_key.clone())}
                        oninput={edit(|s, v| s.test_api_key = v)}
                    />
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"Bot Token"}</span>
                    <Input
                        id="bot-token"
                        input_type="password"
                        value={AttrValue::from(settings.bot_token.clone())}
                        oninput={edit(|s, v| s.bot_token = v)}
                    />
                </label>
                <label class="form-control w-full">
                    <span class="label-text">{"Server ID"}</span>
                    <Input
                        id="server-id"
                        value={AttrValue::from(settings.server_id.clone())}
                        oninput={edit(|s, v| s.server_id = v)}
                    />
                </label>
            </Card>
            <div class="flex justify-end">
                <Button
                    id="save-settings"
                    variant={DaisyColor::Primary}
                    busy={status.is_saving()}
                    label="Save Settings"
                    onclick={on_save}
                />
            </div>
        </div>
    }
}
