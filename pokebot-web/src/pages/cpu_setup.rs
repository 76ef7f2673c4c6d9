use super::edit;
use crate::components::daisy_ui::{
    Avatar, Badge, Button, Card, Checkbox, DaisyColor, DaisySize, Input, Loading, Modal, Range,
    Select, SelectOption, StepIndicator, Tab, TabItem,
};
use crate::components::{ChannelPicker, SaveBanner, WizardNav};
use crate::hooks::{use_cancel_token, use_poke_api, use_wizard};
use crate::storage::use_backend;
use pokebot_core::ai::{
    AI_DELETED_MESSAGE, AiConfig, AiRoster, AiStep, BATTLE_UI_SAVED_MESSAGE, BattleUiSettings,
    CpuSetupStep, Difficulty, PokemonSlot, RewardField,
};
use pokebot_core::catalog::{ITEM_NAMES, channel_name, mock_channels};
use pokebot_core::pokedex::CancelToken;
use pokebot_core::{ConfigPort, SaveStatus, WizardStep, wizard};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpritePreviewProps {
    /// Lowercased species name, if the slot has one.
    #[prop_or_default]
    pub query: Option<AttrValue>,
}

/// Front sprite for a typed team member, looked up as the name changes.
#[function_component(SpritePreview)]
pub fn sprite_preview(p: &SpritePreviewProps) -> Html {
    let api = use_poke_api();
    let sprite = use_state(|| None::<String>);
    let loading = use_state(|| false);

    {
        let (sprite, loading) = (sprite.clone(), loading.clone());
        use_effect_with(p.query.clone(), move |query| {
            let run = CancelToken::new();
            sprite.set(None);
            if let Some(name) = query.clone() {
                loading.set(true);
                let run = run.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api.pokemon(&name).await;
                    if run.is_cancelled() {
                        return;
                    }
                    match result {
                        Ok(detail) => sprite.set(detail.sprites.front_default),
                        Err(err) if err.is_aborted() => return,
                        Err(err) => log::debug!("No sprite for {name}: {err}"),
                    }
                    loading.set(false);
                });
            } else {
                loading.set(false);
            }
            move || run.cancel()
        });
    }

    html! {
        <div class="sprite-preview flex h-16 w-16 items-center justify-center rounded bg-base-200">
            if *loading {
                <Loading size={DaisySize::Sm} />
            } else if let Some(src) = (*sprite).clone() {
                <img src={src} alt={p.query.clone().unwrap_or_default()} class="h-16 w-16 [image-rendering:pixelated]" />
            } else {
                <span class="text-xs opacity-40">{"?"}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BattleUiCardProps {
    pub settings: BattleUiSettings,
    pub saving: bool,
    pub on_change: Callback<BattleUiSettings>,
    pub on_save: Callback<()>,
}

#[function_component(BattleUiCard)]
pub fn battle_ui_card(p: &BattleUiCardProps) -> Html {
    let update = |apply: fn(&mut BattleUiSettings, &str)| {
        let settings = p.settings.clone();
        let cb = p.on_change.clone();
        Callback::from(move |raw: String| {
            let mut next = settings.clone();
            apply(&mut next, &raw);
            cb.emit(next);
        })
    };
    let on_save = p.on_save.reform(|_: MouseEvent| ());
    let settings = &p.settings;
    let preview = format!(
        "background-color: {}; border-color: {};",
        settings.background_color, settings.accent_color
    );

    html! {
        <Card
            id="battle-ui"
            title="Battle UI"
            subtitle="How battles look and pace in Discord"
            actions={html! {
                <Button
                    id="save-battle-ui"
                    variant={DaisyColor::Primary}
                    busy={p.saving}
                    disabled={p.saving}
                    label="Save Battle UI"
                    onclick={on_save}
                />
            }}
        >
            <div class="grid gap-4 md:grid-cols-2">
                <label class="form-control">
                    <span class="label-text">{"Background color"}</span>
                    <Input
                        id="battle-background"
                        input_type="color"
                        class="h-10 w-16 p-1"
                        value={AttrValue::from(settings.background_color.clone())}
                        oninput={update(|s, v| s.background_color = v.to_string())}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Accent color"}</span>
                    <Input
                        id="battle-accent"
                        input_type="color"
                        class="h-10 w-16 p-1"
                        value={AttrValue::from(settings.accent_color.clone())}
                        oninput={update(|s, v| s.accent_color = v.to_string())}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ format!("Battle speed ({:.1}x)", settings.battle_speed) }</span>
                    <Range
                        id="battle-speed"
                        value={settings.battle_speed}
                        min={0.5}
                        max={3.0}
                        step={0.1}
                        on_change={update(BattleUiSettings::set_battle_speed)}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Turn time limit (seconds)"}</span>
                    <Input
                        id="turn-time-limit"
                        input_type="number"
                        min="5"
                        value={AttrValue::from(settings.turn_time_limit.to_string())}
                        oninput={update(BattleUiSettings::set_turn_time_limit)}
                    />
                </label>
            </div>
            <div class="mt-4 rounded-lg border-4 p-4 text-sm" style={preview}>
                {"Preview of the battle frame."}
            </div>
        </Card>
    }
}

fn slot_text(slot: &PokemonSlot) -> &str {
    match slot {
        PokemonSlot::Empty => "-",
        PokemonSlot::Random => "Random",
        PokemonSlot::Species(name) => name,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BattlerCardProps {
    pub battler: AiConfig,
    pub on_edit: Callback<AiConfig>,
    pub on_delete: Callback<String>,
}

#[function_component(BattlerCard)]
pub fn battler_card(p: &BattlerCardProps) -> Html {
    let ai = &p.battler;
    let on_edit = {
        let (cb, ai) = (p.on_edit.clone(), ai.clone());
        Callback::from(move |_: MouseEvent| cb.emit(ai.clone()))
    };
    let on_delete = {
        let cb = p.on_delete.clone();
        let id = ai.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = &id {
                cb.emit(id.clone());
            }
        })
    };
    let channels = ai
        .allowed_channel_ids
        .iter()
        .map(|id| format!("#{}", channel_name(id).unwrap_or(id.as_str())))
        .collect::<Vec<_>>()
        .join(", ");
    let initials = ai.ai_name.chars().next().map(|c| c.to_string());

    html! {
        <Card
            class="battler-card shadow"
            actions={html! {
                <>
                    <Button size={DaisySize::Sm} outline={true} label="Edit" onclick={on_edit} />
                    <Button size={DaisySize::Sm} variant={DaisyColor::Error} label="Delete" onclick={on_delete} />
                </>
            }}
        >
            <div class="flex items-center gap-3">
                <Avatar
                    size={DaisySize::Md}
                    src={Some(AttrValue::from(ai.avatar_url.clone())).filter(|url| !url.is_empty())}
                    alt={AttrValue::from(ai.ai_name.clone())}
                    initials={initials.map(AttrValue::from)}
                />
                <div>
                    <h3 class="text-lg font-bold">{ ai.ai_name.clone() }</h3>
                    <Badge variant={DaisyColor::Secondary} label={ai.difficulty.label()} />
                </div>
            </div>
            <ul class="mt-3 flex flex-wrap gap-1">
                { for ai.pokemon_slots.iter().map(|slot| html! {
                    <li class="badge badge-outline">{ slot_text(slot) }</li>
                }) }
            </ul>
            <p class="mt-2 text-sm">
                { format!("Gold: {} - {}", ai.min_gold_reward, ai.max_gold_reward) }
            </p>
            if !ai.item_rewards.is_empty() {
                <p class="text-sm">
                    { format!(
                        "Items: {}",
                        ai.item_rewards
                            .iter()
                            .map(|r| format!("{} x{}-{}", r.item_name, r.min_amount, r.max_amount))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ) }
                </p>
            }
            <p class="text-xs opacity-60">{ format!("Channels: {channels}") }</p>
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AiFormStepProps {
    pub step: AiStep,
    pub draft: AiConfig,
    pub on_change: Callback<AiConfig>,
}

/// Body of the battler modal for one step.
#[function_component(AiFormStep)]
pub fn ai_form_step(p: &AiFormStepProps) -> Html {
    let update = |apply: fn(&mut AiConfig, &str)| {
        let (draft, cb) = (p.draft.clone(), p.on_change.clone());
        Callback::from(move |raw: String| {
            let mut next = draft.clone();
            apply(&mut next, &raw);
            cb.emit(next);
        })
    };
    let mutate = |apply: Box<dyn Fn(&mut AiConfig)>| {
        let (draft, cb) = (p.draft.clone(), p.on_change.clone());
        move || {
            let mut next = draft.clone();
            apply(&mut next);
            cb.emit(next);
        }
    };
    let draft = &p.draft;

    match p.step {
        AiStep::Details => {
            let difficulty_options: Vec<SelectOption> = Difficulty::ALL
                .into_iter()
                .map(|level| SelectOption::new(level.value(), level.label()))
                .collect();
            let on_difficulty = update(|d, v| {
                if let Some(level) = Difficulty::from_value(v) {
                    d.difficulty = level;
                }
            })
            .reform(|v: AttrValue| v.to_string());
            html! {
                <div class="space-y-4">
                    <label class="form-control">
                        <span class="label-text">{"AI name"}</span>
                        <Input
                            id="ai-name"
                            placeholder="e.g. Gym Leader Brock"
                            value={AttrValue::from(draft.ai_name.clone())}
                            oninput={update(|d, v| d.ai_name = v.to_string())}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Avatar URL"}</span>
                        <Input
                            id="ai-avatar-url"
                            input_type="url"
                            placeholder="https://..."
                            value={AttrValue::from(draft.avatar_url.clone())}
                            oninput={update(|d, v| d.avatar_url = v.to_string())}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Difficulty"}</span>
                        <Select
                            id="ai-difficulty"
                            options={difficulty_options}
                            value={AttrValue::from(draft.difficulty.value())}
                            on_change={on_difficulty}
                        />
                    </label>
                </div>
            }
        }
        AiStep::Team => html! {
            <div class="grid gap-3 md:grid-cols-2">
                { for draft.pokemon_slots.iter().enumerate().map(|(index, slot)| {
                    let on_name = {
                        let (draft, cb) = (draft.clone(), p.on_change.clone());
                        Callback::from(move |raw: String| {
                            let mut next = draft.clone();
                            next.set_slot_name(index, &raw);
                            cb.emit(next);
                        })
                    };
                    let on_random = {
                        let (draft, cb) = (draft.clone(), p.on_change.clone());
                        Callback::from(move |random: bool| {
                            let mut next = draft.clone();
                            next.set_slot_random(index, random);
                            cb.emit(next);
                        })
                    };
                    html! {
                        <div class="team-slot flex items-center gap-3 rounded border border-base-300 p-2">
                            <SpritePreview query={slot.sprite_query().map(AttrValue::from)} />
                            <div class="flex-1 space-y-1">
                                <Input
                                    id={format!("slot-{index}")}
                                    placeholder={format!("Pokémon #{}", index + 1)}
                                    value={AttrValue::from(slot.name().to_string())}
                                    disabled={slot.is_random()}
                                    oninput={on_name}
                                />
                                <Checkbox
                                    id={format!("slot-{index}-random")}
                                    label="Random"
                                    checked={slot.is_random()}
                                    on_toggle={on_random}
                                />
                            </div>
                        </div>
                    }
                }) }
            </div>
        },
        AiStep::RewardsAndChannels => {
            let add_reward = mutate(Box::new(AiConfig::add_reward));
            let on_add_reward = Callback::from(move |_: MouseEvent| add_reward());
            let on_channel = {
                let (draft, cb) = (draft.clone(), p.on_change.clone());
                Callback::from(move |id: String| {
                    let mut next = draft.clone();
                    next.toggle_channel(&id);
                    cb.emit(next);
                })
            };
            html! {
                <div class="space-y-5">
                    <div class="grid gap-4 md:grid-cols-2">
                        <label class="form-control">
                            <span class="label-text">{"Min gold reward"}</span>
                            <Input
                                id="min-gold"
                                input_type="number"
                                min="0"
                                value={AttrValue::from(draft.min_gold_reward.to_string())}
                                oninput={update(AiConfig::set_min_gold)}
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Max gold reward"}</span>
                            <Input
                                id="max-gold"
                                input_type="number"
                                min="0"
                                value={AttrValue::from(draft.max_gold_reward.to_string())}
                                invalid={draft.min_gold_reward > draft.max_gold_reward}
                                oninput={update(AiConfig::set_max_gold)}
                            />
                        </label>
                    </div>
                    <div class="space-y-2">
                        <div class="flex items-center justify-between">
                            <h4 class="font-semibold">{"Item rewards"}</h4>
                            <Button id="add-reward" size={DaisySize::Sm} outline={true} label="Add Reward" onclick={on_add_reward} />
                        </div>
                        { for draft.item_rewards.iter().enumerate().map(|(index, reward)| {
                            let amount = |field: RewardField| {
                                let (draft, cb) = (draft.clone(), p.on_change.clone());
                                Callback::from(move |raw: String| {
                                    let mut next = draft.clone();
                                    next.set_reward_amount(index, field, &raw);
                                    cb.emit(next);
                                })
                            };
                            let on_item = {
                                let (draft, cb) = (draft.clone(), p.on_change.clone());
                                Callback::from(move |name: AttrValue| {
                                    let mut next = draft.clone();
                                    next.set_reward_item(index, &name);
                                    cb.emit(next);
                                })
                            };
                            let remove = mutate(Box::new(move |d: &mut AiConfig| d.remove_reward(index)));
                            let on_remove = Callback::from(move |_: MouseEvent| remove());
                            html! {
                                <div class="reward-row flex flex-wrap items-center gap-2">
                                    <Select
                                        class="select-sm"
                                        options={SelectOption::plain(ITEM_NAMES.iter().copied())}
                                        value={AttrValue::from(reward.item_name.clone())}
                                        on_change={on_item}
                                    />
                                    <Input
                                        class="input-sm w-20"
                                        input_type="number"
                                        min="1"
                                        value={AttrValue::from(reward.min_amount.to_string())}
                                        invalid={!reward.is_valid()}
                                        oninput={amount(RewardField::Min)}
                                    />
                                    <Input
                                        class="input-sm w-20"
                                        input_type="number"
                                        min="1"
                                        value={AttrValue::from(reward.max_amount.to_string())}
                                        invalid={!reward.is_valid()}
                                        oninput={amount(RewardField::Max)}
                                    />
                                    <Button
                                        size={DaisySize::Sm}
                                        variant={DaisyColor::Ghost}
                                        label="Remove"
                                        onclick={on_remove}
                                    />
                                </div>
                            }
                        }) }
                    </div>
                    <div class="space-y-2">
                        <h4 class="font-semibold">{"Allowed channels"}</h4>
                        <ChannelPicker
                            channels={mock_channels()}
                            selected={draft.allowed_channel_ids.clone()}
                            on_toggle={on_channel}
                        />
                    </div>
                </div>
            }
        }
    }
}

#[function_component(CpuSetupPage)]
pub fn cpu_setup_page() -> Html {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let steps = use_wizard::<AiStep>();
    let battle_ui = use_state(BattleUiSettings::default);
    let battle_status = use_state(SaveStatus::default);
    let roster = use_state(AiRoster::mock);
    let draft = use_state(|| None::<AiConfig>);
    let status = use_state(SaveStatus::default);
    let deleting = use_state(|| false);

    {
        let (backend, cancel) = (backend.clone(), cancel.clone());
        let (battle_ui, roster) = (battle_ui.clone(), roster.clone());
        let (battle_status, status) = (battle_status.clone(), status.clone());
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let stored = backend.load::<BattleUiSettings>("current").await;
                let saved = backend.list::<AiConfig>().await;
                if cancel.is_cancelled() {
                    return;
                }
                match stored {
                    Ok(Some(settings)) => battle_ui.set(settings),
                    Ok(None) => {}
                    Err(err) => {
                        log::error!("Could not load battle UI settings: {err}");
                        battle_status.set(SaveStatus::Failed(format!(
                            "Could not load battle UI settings: {err}"
                        )));
                    }
                }
                match saved {
                    Ok(battlers) if !battlers.is_empty() => {
                        let mut next = (*roster).clone();
                        for battler in battlers {
                            next.upsert(battler);
                        }
                        roster.set(next);
                    }
                    Ok(_) => {}
                    Err(err) => {
                        log::error!("Could not load AI battlers: {err}");
                        status.set(SaveStatus::Failed(format!("Could not load AI battlers: {err}")));
                    }
                }
            });
            || {}
        });
    }

    let on_save_battle_ui = {
        let (backend, cancel) = (backend.clone(), cancel.clone());
        let (battle_ui, battle_status) = (battle_ui.clone(), battle_status.clone());
        Callback::from(move |()| {
            if battle_status.is_saving() {
                return;
            }
            battle_status.set(SaveStatus::Saving);
            let (backend, cancel, battle_status) =
                (backend.clone(), cancel.clone(), battle_status.clone());
            let settings = (*battle_ui).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = backend.save(settings).await;
                if cancel.is_cancelled() {
                    return;
                }
                battle_status.set(SaveStatus::settle(
                    &result,
                    |_| BATTLE_UI_SAVED_MESSAGE.to_string(),
                    "Error saving battle UI settings",
                ));
            });
        })
    };

    let open_form = {
        let (draft, status, steps) = (draft.clone(), status.clone(), steps.clone());
        Callback::from(move |config: AiConfig| {
            status.set(SaveStatus::Idle);
            steps.reset();
            draft.set(Some(config));
        })
    };
    let on_add = open_form.reform(|_: MouseEvent| AiConfig::new_draft());
    let on_delete = {
        let (backend, cancel) = (backend.clone(), cancel.clone());
        let (roster, status, deleting) = (roster.clone(), status.clone(), deleting.clone());
        Callback::from(move |id: String| {
            if roster.get(&id).is_none() || status.is_saving() {
                return;
            }
            deleting.set(true);
            status.set(SaveStatus::Saving);
            let (backend, cancel) = (backend.clone(), cancel.clone());
            let (roster, status, deleting) = (roster.clone(), status.clone(), deleting.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let banner =
                    wizard::remove::<_, AiConfig>(&*backend, &id, AI_DELETED_MESSAGE).await;
                if cancel.is_cancelled() {
                    return;
                }
                if matches!(banner, SaveStatus::Saved(_)) {
                    let mut next = (*roster).clone();
                    next.remove(&id);
                    roster.set(next);
                }
                deleting.set(false);
                status.set(banner);
            });
        })
    };
    let on_close = {
        let draft = draft.clone();
        Callback::from(move |()| draft.set(None))
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };
    let on_dismiss_battle = {
        let battle_status = battle_status.clone();
        Callback::from(move |()| battle_status.set(SaveStatus::Idle))
    };

    let modal = match ((*draft).clone(), steps.step()) {
        (Some(current), Some(step)) => {
            let issue = current.validate_step(step).err();
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
                let (draft, roster, status) = (draft.clone(), roster.clone(), status.clone());
                let record = current.clone();
                Callback::from(move |()| {
                    if !record.is_complete() || status.is_saving() {
                        return;
                    }
                    status.set(SaveStatus::Saving);
                    let (backend, cancel) = (backend.clone(), cancel.clone());
                    let (draft, roster, status) = (draft.clone(), roster.clone(), status.clone());
                    let record = record.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let (banner, result) =
                            wizard::submit(&*backend, record, AiConfig::success_message).await;
                        if cancel.is_cancelled() {
                            return;
                        }
                        if let Ok(saved) = result {
                            log::info!("Saved AI battler {:?}", saved.id);
                            let mut next = (*roster).clone();
                            next.upsert(saved);
                            roster.set(next);
                            draft.set(None);
                        }
                        status.set(banner);
                    });
                })
            };
            let on_change = edit(&draft, |slot: &mut Option<AiConfig>, next: AiConfig| {
                *slot = Some(next);
            });
            html! {
                <Modal
                    open={true}
                    wide={true}
                    title={current.form_title()}
                    description={AttrValue::from(step.label())}
                    on_close={on_close}
                >
                    <StepIndicator steps={steps.labels()} current={steps.current()} on_select={steps.select()} />
                    <div class="wizard-step min-h-40 py-4">
                        <AiFormStep step={step} draft={current} on_change={on_change} />
                    </div>
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
                </Modal>
            }
        }
        _ => Html::default(),
    };

    let battlers = html! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <Button id="add-ai" variant={DaisyColor::Primary} label="Add AI Battler" onclick={on_add} />
            </div>
            if roster.is_empty() {
                <p class="opacity-60">{"No AI battlers configured yet."}</p>
            }
            <div id="ai-roster" class="grid gap-4 lg:grid-cols-2">
                { for roster.battlers().iter().map(|battler| html! {
                    <BattlerCard
                        key={battler.id.clone().unwrap_or_default()}
                        battler={battler.clone()}
                        on_edit={open_form.clone()}
                        on_delete={on_delete.clone()}
                    />
                }) }
            </div>
        </div>
    };
    let battle = html! {
        <div class="space-y-4">
            <SaveBanner status={(*battle_status).clone()} on_dismiss={on_dismiss_battle} />
            <BattleUiCard
                settings={(*battle_ui).clone()}
                saving={battle_status.is_saving()}
                on_change={edit(&battle_ui, |s: &mut BattleUiSettings, next: BattleUiSettings| *s = next)}
                on_save={on_save_battle_ui}
            />
        </div>
    };
    let section = |step: CpuSetupStep, content: Html| TabItem {
        id: AttrValue::from(step.label()),
        label: AttrValue::from(step.label()),
        disabled: false,
        content: Some(content),
    };

    html! {
        <div class="space-y-6" id="cpu-setup">
            <SaveBanner
                status={(*status).clone()}
                saving_label={if *deleting { "Deleting AI battler..." } else { "Saving AI battler..." }}
                on_dismiss={on_dismiss}
            />
            <Card title="CPU Setup" subtitle="Computer opponents and the battle screen">
                <Tab
                    tabs={vec![
                        section(CpuSetupStep::BattleUi, battle),
                        section(CpuSetupStep::AiBattlers, battlers),
                    ]}
                />
            </Card>
            { modal }
        </div>
    }
}
