use super::edit;
use crate::components::daisy_ui::{
    Button, Card, DaisyColor, DaisySize, Input, Select, SelectOption, StepIndicator, Table,
    Toggle,
};
use crate::components::{ChannelPicker, SaveBanner, WizardNav};
use crate::hooks::{use_cancel_token, use_channels, use_wizard};
use crate::storage::use_backend;
use pokebot_core::items::{ItemConfig, ItemStep, QuantityBound};
use pokebot_core::{SaveStatus, WizardStep, wizard};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DropRatesProps {
    pub draft: ItemConfig,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
    /// Item name and raw rate text.
    pub on_rate: Callback<(String, String)>,
}

#[function_component(DropRates)]
pub fn drop_rates(p: &DropRatesProps) -> Html {
    let options: Vec<SelectOption> = SelectOption::plain(p.draft.available_items());
    let rows: Vec<Vec<Html>> = p
        .draft
        .item_drop_rates
        .iter()
        .map(|(item, rate)| {
            let on_rate = {
                let item = item.clone();
                p.on_rate.reform(move |raw: String| (item.clone(), raw))
            };
            let on_remove = {
                let cb = p.on_remove.clone();
                let item = item.clone();
                Callback::from(move |_: MouseEvent| cb.emit(item.clone()))
            };
            vec![
                html! { <span class="font-semibold">{ item.clone() }</span> },
                html! {
                    <Input
                        class="input-sm w-24"
                        input_type="number"
                        min="0"
                        max="100"
                        value={AttrValue::from(rate.to_string())}
                        oninput={on_rate}
                    />
                },
                html! {
                    <Button
                        size={DaisySize::Sm}
                        variant={DaisyColor::Error}
                        outline={true}
                        label="Remove"
                        aria_label={format!("Remove {item}")}
                        onclick={on_remove}
                    />
                },
            ]
        })
        .collect();
    let total = p.draft.total_drop_rate();

    html! {
        <div class="space-y-3">
            <Select
                id="add-item"
                class="max-w-xs"
                options={options}
                placeholder="Add an item..."
                on_change={p.on_add.reform(|name: AttrValue| name.to_string())}
            />
            <Table
                headers={vec![AttrValue::from("Item"), AttrValue::from("Drop rate %"), AttrValue::from("")]}
                rows={rows}
                empty_message="No items added yet."
            />
            <p id="drop-rate-total" class="text-sm">{ format!("Combined drop rate: {total}%") }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct QuantityEditorProps {
    pub draft: ItemConfig,
    /// Item, bound and raw text.
    pub on_change: Callback<(String, QuantityBound, String)>,
}

#[function_component(QuantityEditor)]
pub fn quantity_editor(p: &QuantityEditorProps) -> Html {
    if p.draft.item_quantities.is_empty() {
        return html! { <p class="opacity-60">{"Add items first."}</p> };
    }
    let rows: Vec<Vec<Html>> = p
        .draft
        .item_quantities
        .iter()
        .map(|(item, range)| {
            let bound_input = |bound: QuantityBound, value: u32| {
                let item = item.clone();
                let oninput = p.on_change.reform(move |raw: String| (item.clone(), bound, raw));
                html! {
                    <Input
                        class="input-sm w-24"
                        input_type="number"
                        min="1"
                        value={AttrValue::from(value.to_string())}
                        invalid={!range.is_valid()}
                        oninput={oninput}
                    />
                }
            };
            vec![
                html! { <span class="font-semibold">{ item.clone() }</span> },
                bound_input(QuantityBound::Min, range.min),
                bound_input(QuantityBound::Max, range.max),
            ]
        })
        .collect();
    html! {
        <Table
            headers={vec![AttrValue::from("Item"), AttrValue::from("Min"), AttrValue::from("Max")]}
            rows={rows}
        />
    }
}

#[function_component(ItemsConfigPage)]
pub fn items_config_page() -> Html {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let steps = use_wizard::<ItemStep>();
    let draft = use_state(ItemConfig::new_draft);
    let (channels, retry_channels) = use_channels();
    let status = use_state(SaveStatus::default);

    let Some(step) = steps.step() else {
        return Html::default();
    };
    let issue = draft.validate_step(step).err();
    let step_valid = issue.is_none();
    let issue_text = issue.map(|i| AttrValue::from(i.to_string()));

    let on_next = {
        let next = steps.next();
        Callback::from(move |()| {
            if step_valid {
                next.emit(());
            }
        })
    };
    let on_save = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |()| {
            if !draft.is_complete() || status.is_saving() {
                return;
            }
            status.set(SaveStatus::Saving);
            let (backend, cancel) = (backend.clone(), cancel.clone());
            let (draft, status) = (draft.clone(), status.clone());
            let record = (*draft).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (banner, result) =
                    wizard::submit(&*backend, record, ItemConfig::success_message).await;
                if cancel.is_cancelled() {
                    return;
                }
                if let Ok(saved) = result {
                    log::info!("Saved item configuration {:?}", saved.id);
                    draft.set(saved);
                }
                status.set(banner);
            });
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };
    let on_new = {
        let (draft, status, steps) = (draft.clone(), status.clone(), steps.clone());
        Callback::from(move |_: MouseEvent| {
            draft.set(ItemConfig::new_draft());
            status.set(SaveStatus::Idle);
            steps.reset();
        })
    };

    let body = match step {
        ItemStep::Channels => html! {
            <ChannelPicker
                channels={channels.channels().to_vec()}
                selected={draft.selected_channel_ids.clone()}
                loading={!channels.is_loaded()}
                error={channels.error().map(|e| AttrValue::from(e.to_string()))}
                on_retry={retry_channels.clone()}
                on_toggle={edit(&draft, |d: &mut ItemConfig, id: String| d.toggle_channel(&id))}
            />
        },
        ItemStep::ItemsAndRates => html! {
            <DropRates
                draft={(*draft).clone()}
                on_add={edit(&draft, |d: &mut ItemConfig, name: String| {
                    d.add_item(&name);
                })}
                on_remove={edit(&draft, |d: &mut ItemConfig, name: String| d.remove_item(&name))}
                on_rate={edit(&draft, |d: &mut ItemConfig, (name, raw): (String, String)| d.set_rate(&name, &raw))}
            />
        },
        ItemStep::Quantities => html! {
            <QuantityEditor
                draft={(*draft).clone()}
                on_change={edit(&draft, |d: &mut ItemConfig, (name, bound, raw): (String, QuantityBound, String)| {
                    d.set_quantity(&name, bound, &raw);
                })}
            />
        },
        ItemStep::Cooldown => html! {
            <label class="form-control max-w-sm">
                <span class="label-text">{"Cooldown between drops (minutes)"}</span>
                <Input
                    id="cooldown"
                    input_type="number"
                    min="1"
                    value={AttrValue::from(draft.cooldown_minutes.to_string())}
                    invalid={!step_valid}
                    oninput={edit(&draft, |d: &mut ItemConfig, v: String| d.set_cooldown(&v))}
                />
            </label>
        },
        ItemStep::Finalize => html! {
            <div class="space-y-4">
                <label class="form-control max-w-md">
                    <span class="label-text">{"Configuration name"}</span>
                    <Input
                        id="config-name"
                        placeholder="e.g. Daily Drops"
                        value={AttrValue::from(draft.name.clone())}
                        oninput={edit(&draft, |d: &mut ItemConfig, v: String| d.name = v)}
                    />
                </label>
                <Toggle
                    id="config-enabled"
                    label="Enable this configuration"
                    checked={draft.is_enabled}
                    on_toggle={edit(&draft, |d: &mut ItemConfig, on: bool| d.is_enabled = on)}
                />
                <p class="text-sm opacity-70">
                    { format!(
                        "{} item(s) across {} channel(s), {} minute cooldown.",
                        draft.item_drop_rates.len(),
                        draft.selected_channel_ids.len(),
                        draft.cooldown_minutes,
                    ) }
                </p>
            </div>
        },
    };

    html! {
        <div class="space-y-6" id="items-config">
            <SaveBanner
                status={(*status).clone()}
                saving_label="Saving configuration..."
                on_dismiss={on_dismiss}
            />
            <Card
                title="Item Drop Configuration"
                subtitle={AttrValue::from(step.label())}
                header_actions={html! {
                    <Button size={DaisySize::Sm} variant={DaisyColor::Ghost} label="New Draft" onclick={on_new} />
                }}
            >
                <StepIndicator
                    steps={steps.labels()}
                    current={steps.current()}
                    on_select={steps.select()}
                />
                <div class="wizard-step min-h-48 py-4">{ body }</div>
                <WizardNav
                    is_first={steps.is_first()}
                    is_last={steps.is_last()}
                    step_valid={step_valid}
                    saving={status.is_saving()}
                    issue={issue_text}
                    on_back={steps.back()}
                    on_next={on_next}
                    on_save={on_save}
                />
            </Card>
        </div>
    }
}
