use super::edit;
use crate::components::daisy_ui::{
    Badge, Button, Card, DaisyColor, DaisySize, Input, Select, SelectOption, StepIndicator, Toggle,
};
use crate::components::{ChannelPicker, SaveBanner, WizardNav};
use crate::hooks::{use_cancel_token, use_channels, use_wizard};
use crate::storage::use_backend;
use pokebot_core::catalog::{POKEMON_NAMES, Rarity, channel_name};
use pokebot_core::spawn::{SpawnConfig, SpawnStep};
use pokebot_core::{SaveStatus, WizardStep, wizard};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RosterTierProps {
    pub rarity: Rarity,
    pub names: Vec<String>,
    pub on_add: Callback<(Rarity, String)>,
    pub on_remove: Callback<(Rarity, String)>,
}

/// One rarity tier: its Pokémon chips plus a picker for adding more.
#[function_component(RosterTier)]
pub fn roster_tier(p: &RosterTierProps) -> Html {
    let rarity = p.rarity;
    let options: Vec<SelectOption> = POKEMON_NAMES
        .iter()
        .filter(|name| !p.names.iter().any(|n| n == *name))
        .map(|name| SelectOption::new(*name, *name))
        .collect();
    let on_add = p
        .on_add
        .reform(move |name: AttrValue| (rarity, name.to_string()));
    html! {
        <div class="roster-tier space-y-2 rounded border border-base-300 p-3">
            <div class="flex items-center justify-between">
                <h4 class="font-semibold">{ rarity.label() }</h4>
                <span class="text-xs opacity-60">{ format!("{} Pokémon", p.names.len()) }</span>
            </div>
            <div class="flex flex-wrap gap-2">
                { for p.names.iter().map(|name| {
                    let on_remove = {
                        let cb = p.on_remove.clone();
                        let name = name.clone();
                        Callback::from(move |_: MouseEvent| cb.emit((rarity, name.clone())))
                    };
                    html! {
                        <Badge variant={DaisyColor::Primary} class="gap-1">
                            { name.clone() }
                            <button
                                type="button"
                                class="ml-1"
                                aria-label={format!("Remove {name}")}
                                onclick={on_remove}
                            >{"×"}</button>
                        </Badge>
                    }
                }) }
            </div>
            <Select
                id={format!("roster-{}", rarity.label().to_lowercase())}
                class="select-sm"
                options={options}
                placeholder="Add Pokémon..."
                on_change={on_add}
            />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SpawnSummaryProps {
    pub draft: SpawnConfig,
}

#[function_component(SpawnSummary)]
pub fn spawn_summary(p: &SpawnSummaryProps) -> Html {
    let draft = &p.draft;
    let channels = draft
        .selected_channel_ids
        .iter()
        .map(|id| format!("#{}", channel_name(id).unwrap_or(id.as_str())))
        .collect::<Vec<_>>()
        .join(", ");
    html! {
        <dl class="spawn-summary grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 text-sm">
            <dt class="font-semibold">{"Channels"}</dt><dd>{ channels }</dd>
            <dt class="font-semibold">{"Timing"}</dt>
            <dd>{ format!("Every {} min, flees after {} min", draft.time_between_spawns, draft.time_to_flee) }</dd>
            <dt class="font-semibold">{"Shiny Chance"}</dt><dd>{ draft.shiny_chance.clone() }</dd>
            { for Rarity::ALL.into_iter().filter_map(|rarity| {
                let names = draft.pokemon_roster.get(&rarity).filter(|n| !n.is_empty())?;
                let percent = draft.rarity_percentages.get(&rarity).copied().unwrap_or(0);
                Some(html! {
                    <>
                        <dt class="font-semibold">{ format!("{} ({percent}%)", rarity.label()) }</dt>
                        <dd>{ names.join(", ") }</dd>
                    </>
                })
            }) }
        </dl>
    }
}

#[function_component(SpawnConfigPage)]
pub fn spawn_config_page() -> Html {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let steps = use_wizard::<SpawnStep>();
    let draft = use_state(SpawnConfig::new_draft);
    let (channels, retry_channels) = use_channels();
    let status = use_state(SaveStatus::default);

    let Some(step) = steps.step() else {
        return Html::default();
    };
    let issue = draft.validate_step(step, channels.is_loaded()).err();
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
        let loaded = channels.is_loaded();
        Callback::from(move |()| {
            if !draft.is_complete(loaded) || status.is_saving() {
                return;
            }
            status.set(SaveStatus::Saving);
            let (backend, cancel) = (backend.clone(), cancel.clone());
            let (draft, status) = (draft.clone(), status.clone());
            let record = (*draft).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (banner, result) =
                    wizard::submit(&*backend, record, SpawnConfig::success_message).await;
                if cancel.is_cancelled() {
                    return;
                }
                if let Ok(saved) = result {
                    log::info!("Saved spawn configuration {:?}", saved.id);
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
            draft.set(SpawnConfig::new_draft());
            status.set(SaveStatus::Idle);
            steps.reset();
        })
    };

    let body = match step {
        SpawnStep::Channels => html! {
            <>
                <p class="opacity-70">{"Choose where wild Pokémon appear."}</p>
                <ChannelPicker
                    channels={channels.channels().to_vec()}
                    selected={draft.selected_channel_ids.clone()}
                    loading={!channels.is_loaded()}
                    error={channels.error().map(|e| AttrValue::from(e.to_string()))}
                    on_retry={retry_channels.clone()}
                    on_toggle={edit(&draft, |d: &mut SpawnConfig, id: String| d.toggle_channel(&id))}
                />
            </>
        },
        SpawnStep::Timing => html! {
            <div class="grid gap-4 md:grid-cols-2">
                <label class="form-control">
                    <span class="label-text">{"Time between spawns (minutes)"}</span>
                    <Input
                        id="time-between-spawns"
                        input_type="number"
                        min="1"
                        value={AttrValue::from(draft.time_between_spawns.to_string())}
                        invalid={draft.time_between_spawns == 0}
                        oninput={edit(&draft, |d: &mut SpawnConfig, v: String| d.set_time_between_spawns(&v))}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Time to flee (minutes)"}</span>
                    <Input
                        id="time-to-flee"
                        input_type="number"
                        min="1"
                        value={AttrValue::from(draft.time_to_flee.to_string())}
                        invalid={draft.time_to_flee == 0}
                        oninput={edit(&draft, |d: &mut SpawnConfig, v: String| d.set_time_to_flee(&v))}
                    />
                </label>
            </div>
        },
        SpawnStep::ShinyChance => html! {
            <label class="form-control max-w-sm">
                <span class="label-text">{"Shiny chance"}</span>
                <Input
                    id="shiny-chance"
                    placeholder="1/4096"
                    value={AttrValue::from(draft.shiny_chance.clone())}
                    invalid={!step_valid}
                    oninput={edit(&draft, |d: &mut SpawnConfig, v: String| d.shiny_chance = v)}
                />
                <span class="label-text-alt opacity-70">{"Odds written as 1/4096 or 1 / 8192."}</span>
            </label>
        },
        SpawnStep::Roster => {
            let on_add = edit(&draft, |d: &mut SpawnConfig, (rarity, name): (Rarity, String)| {
                d.add_to_roster(rarity, &name);
            });
            let on_remove = edit(&draft, |d: &mut SpawnConfig, (rarity, name): (Rarity, String)| {
                d.remove_from_roster(rarity, &name);
            });
            html! {
                <div class="grid gap-3 md:grid-cols-2">
                    { for Rarity::ALL.into_iter().map(|rarity| html! {
                        <RosterTier
                            rarity={rarity}
                            names={draft.pokemon_roster.get(&rarity).cloned().unwrap_or_default()}
                            on_add={on_add.clone()}
                            on_remove={on_remove.clone()}
                        />
                    }) }
                </div>
            }
        }
        SpawnStep::RarityPercentages => {
            let total = draft.percentage_total();
            html! {
                <div class="space-y-3">
                    <div class="grid gap-3 md:grid-cols-3">
                        { for Rarity::ALL.into_iter().map(|rarity| {
                            let value = draft.rarity_percentages.get(&rarity).copied().unwrap_or(0);
                            html! {
                                <label class="form-control">
                                    <span class="label-text">{ format!("{} %", rarity.label()) }</span>
                                    <Input
                                        input_type="number"
                                        min="0"
                                        max="100"
                                        value={AttrValue::from(value.to_string())}
                                        oninput={edit(&draft, move |d: &mut SpawnConfig, v: String| d.set_percentage(rarity, &v))}
                                    />
                                </label>
                            }
                        }) }
                    </div>
                    <p
                        id="percentage-total"
                        class={classes!("font-semibold", if total == 100 { "text-success" } else { "text-error" })}
                    >
                        { format!("Total: {total}%") }
                    </p>
                </div>
            }
        }
        SpawnStep::Finalize => html! {
            <div class="space-y-4">
                <label class="form-control max-w-md">
                    <span class="label-text">{"Configuration name"}</span>
                    <Input
                        id="config-name"
                        placeholder="e.g. Weekend Spawns"
                        value={AttrValue::from(draft.name.clone())}
                        oninput={edit(&draft, |d: &mut SpawnConfig, v: String| d.name = v)}
                    />
                </label>
                <Toggle
                    id="config-enabled"
                    label="Enable this configuration"
                    checked={draft.is_enabled}
                    on_toggle={edit(&draft, |d: &mut SpawnConfig, on: bool| d.is_enabled = on)}
                />
                <SpawnSummary draft={(*draft).clone()} />
            </div>
        },
    };

    html! {
        <div class="space-y-6" id="spawn-config">
            <SaveBanner
                status={(*status).clone()}
                saving_label="Saving configuration..."
                on_dismiss={on_dismiss}
            />
            <Card
                title="Spawn Configuration"
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
