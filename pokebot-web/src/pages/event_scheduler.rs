use super::edit;
use crate::components::daisy_ui::{
    Alert, Badge, Button, Card, DaisyColor, DaisySize, Input, Modal, Select, SelectOption,
    Textarea, Toggle,
};
use crate::components::{ChannelPicker, SaveBanner};
use crate::dom;
use chrono::NaiveDateTime;
use pokebot_core::SaveStatus;
use pokebot_core::catalog::{POKEMON_NAMES, POKEMON_TYPES, channel_name, mock_channels};
use pokebot_core::events::{
    EVENT_DELETED_MESSAGE, EventBoard, EventDraft, EventField, EventFieldError, EventStatus,
    EventType, Recurrence, ScheduledEvent, field_error,
};
use yew::prelude::*;

const CARD_TIME_FORMAT: &str = "%b %-d, %Y %H:%M";

const fn status_color(status: EventStatus) -> DaisyColor {
    match status {
        EventStatus::Active => DaisyColor::Success,
        EventStatus::Scheduled => DaisyColor::Info,
        EventStatus::Past => DaisyColor::Neutral,
        EventStatus::Disabled => DaisyColor::Warning,
    }
}

fn field_hint(errors: &[EventFieldError], field: EventField) -> Html {
    field_error(errors, field).map_or_else(Html::default, |message| {
        html! { <span class="label-text-alt text-error" role="alert">{ message }</span> }
    })
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventCardProps {
    pub event: ScheduledEvent,
    pub now: NaiveDateTime,
    pub on_edit: Callback<ScheduledEvent>,
    pub on_delete: Callback<String>,
}

#[function_component(EventCard)]
pub fn event_card(p: &EventCardProps) -> Html {
    let event = &p.event;
    let status = event.status(p.now);
    let channels = event
        .target_channel_ids
        .iter()
        .map(|id| format!("#{}", channel_name(id).unwrap_or(id.as_str())))
        .collect::<Vec<_>>()
        .join(", ");
    let on_edit = {
        let (cb, event) = (p.on_edit.clone(), event.clone());
        Callback::from(move |_: MouseEvent| cb.emit(event.clone()))
    };
    let on_delete = {
        let cb = p.on_delete.clone();
        let id = event.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = &id {
                cb.emit(id.clone());
            }
        })
    };
    html! {
        <Card
            class="event-card shadow"
            title={AttrValue::from(event.name.clone())}
            subtitle={AttrValue::from(event.kind.event_type().label())}
            header_actions={html! {
                <Badge variant={status_color(status)} label={status.label()} />
            }}
            actions={html! {
                <>
                    <Button size={DaisySize::Sm} outline={true} label="Edit" onclick={on_edit} />
                    <Button size={DaisySize::Sm} variant={DaisyColor::Error} label="Delete" onclick={on_delete} />
                </>
            }}
        >
            if !event.description.is_empty() {
                <p class="opacity-80">{ event.description.clone() }</p>
            }
            if let Some(detail) = event.kind.detail() {
                <p class="text-sm font-semibold">{ detail }</p>
            }
            <p class="text-sm">
                { format!(
                    "{} to {}",
                    event.start.format(CARD_TIME_FORMAT),
                    event.end.format(CARD_TIME_FORMAT),
                ) }
            </p>
            <p class="text-xs opacity-60">{ format!("Channels: {channels}") }</p>
            if event.recurrence != Recurrence::None {
                <p class="text-xs opacity-60">{ format!("Repeats: {}", event.recurrence.label()) }</p>
            }
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventFormProps {
    pub draft: EventDraft,
    pub errors: Vec<EventFieldError>,
    pub on_change: Callback<EventDraft>,
}

/// Fields of the create/edit modal. The type select swaps the payload inputs.
#[function_component(EventForm)]
pub fn event_form(p: &EventFormProps) -> Html {
    let update = |apply: fn(&mut EventDraft, &str)| {
        let draft = p.draft.clone();
        let cb = p.on_change.clone();
        Callback::from(move |raw: String| {
            let mut next = draft.clone();
            apply(&mut next, &raw);
            cb.emit(next);
        })
    };
    let select = |apply: fn(&mut EventDraft, &str)| update(apply).reform(|v: AttrValue| v.to_string());
    let on_type = select(|d, v| {
        if let Some(kind) = EventType::from_label(v) {
            d.set_event_type(kind);
        }
    });
    let on_recurrence = select(|d, v| {
        if let Some(recurrence) = Recurrence::from_label(v) {
            d.recurrence = recurrence;
        }
    });
    let on_channel = {
        let (draft, cb) = (p.draft.clone(), p.on_change.clone());
        Callback::from(move |id: String| {
            let mut next = draft.clone();
            next.toggle_channel(&id);
            cb.emit(next);
        })
    };
    let on_enabled = {
        let (draft, cb) = (p.draft.clone(), p.on_change.clone());
        Callback::from(move |is_enabled: bool| cb.emit(EventDraft { is_enabled, ..draft.clone() }))
    };
    let errors = &p.errors;
    let has = |field: EventField| field_error(errors, field).is_some();
    let draft = &p.draft;

    let payload = match draft.event_type {
        kind if kind.takes_boost() => html! {
            <label class="form-control">
                <span class="label-text">{"Boost percentage"}</span>
                <Input
                    id="event-boost"
                    input_type="number"
                    min="1"
                    value={AttrValue::from(draft.boost_percentage.map(|b| b.to_string()).unwrap_or_default())}
                    invalid={has(EventField::BoostPercentage)}
                    oninput={update(EventDraft::set_boost)}
                />
                { field_hint(errors, EventField::BoostPercentage) }
            </label>
        },
        EventType::SpawnBoostPokemon => html! {
            <label class="form-control">
                <span class="label-text">{"Pokémon"}</span>
                <Select
                    id="event-pokemon"
                    options={SelectOption::plain(POKEMON_NAMES.iter().copied())}
                    value={AttrValue::from(draft.pokemon_name.clone())}
                    placeholder="Choose a Pokémon..."
                    invalid={has(EventField::PokemonName)}
                    on_change={select(|d, v| d.pokemon_name = v.to_string())}
                />
                { field_hint(errors, EventField::PokemonName) }
            </label>
        },
        EventType::SpawnBoostType => html! {
            <label class="form-control">
                <span class="label-text">{"Pokémon type"}</span>
                <Select
                    id="event-type-target"
                    options={SelectOption::plain(POKEMON_TYPES.iter().copied())}
                    value={AttrValue::from(draft.pokemon_type.clone())}
                    placeholder="Choose a type..."
                    invalid={has(EventField::PokemonType)}
                    on_change={select(|d, v| d.pokemon_type = v.to_string())}
                />
                { field_hint(errors, EventField::PokemonType) }
            </label>
        },
        _ => html! {
            <label class="form-control">
                <span class="label-text">{"Custom details"}</span>
                <Textarea
                    id="event-custom-details"
                    rows={3}
                    value={AttrValue::from(draft.custom_details.clone())}
                    oninput={update(|d, v| d.custom_details = v.to_string())}
                />
            </label>
        },
    };

    html! {
        <div class="event-form space-y-4">
            <label class="form-control">
                <span class="label-text">{"Event name"}</span>
                <Input
                    id="event-name"
                    value={AttrValue::from(draft.name.clone())}
                    invalid={has(EventField::Name)}
                    oninput={update(|d, v| d.name = v.to_string())}
                />
                { field_hint(errors, EventField::Name) }
            </label>
            <label class="form-control">
                <span class="label-text">{"Description"}</span>
                <Textarea
                    id="event-description"
                    rows={2}
                    value={AttrValue::from(draft.description.clone())}
                    oninput={update(|d, v| d.description = v.to_string())}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"Event type"}</span>
                <Select
                    id="event-type"
                    options={SelectOption::plain(EventType::ALL.iter().map(|kind| kind.label()))}
                    value={AttrValue::from(draft.event_type.label())}
                    on_change={on_type}
                />
            </label>
            { payload }
            <div class="grid gap-4 md:grid-cols-2">
                <label class="form-control">
                    <span class="label-text">{"Start"}</span>
                    <Input
                        id="event-start"
                        input_type="datetime-local"
                        value={AttrValue::from(draft.start.clone())}
                        invalid={has(EventField::Start)}
                        oninput={update(|d, v| d.start = v.to_string())}
                    />
                    { field_hint(errors, EventField::Start) }
                </label>
                <label class="form-control">
                    <span class="label-text">{"End"}</span>
                    <Input
                        id="event-end"
                        input_type="datetime-local"
                        value={AttrValue::from(draft.end.clone())}
                        invalid={has(EventField::End)}
                        oninput={update(|d, v| d.end = v.to_string())}
                    />
                    { field_hint(errors, EventField::End) }
                </label>
            </div>
            <div class="form-control">
                <span class="label-text">{"Target channels"}</span>
                <ChannelPicker
                    channels={mock_channels()}
                    selected={draft.target_channel_ids.clone()}
                    on_toggle={on_channel}
                />
                { field_hint(errors, EventField::TargetChannels) }
            </div>
            <label class="form-control max-w-xs">
                <span class="label-text">{"Recurrence"}</span>
                <Select
                    id="event-recurrence"
                    options={SelectOption::plain(Recurrence::ALL.iter().map(|r| r.label()))}
                    value={AttrValue::from(draft.recurrence.label())}
                    on_change={on_recurrence}
                />
            </label>
            <Toggle id="event-enabled" label="Event enabled" checked={draft.is_enabled} on_toggle={on_enabled} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct EventSectionProps {
    title: AttrValue,
    id: AttrValue,
    events: Vec<ScheduledEvent>,
    now: NaiveDateTime,
    on_edit: Callback<ScheduledEvent>,
    on_delete: Callback<String>,
}

#[function_component(EventSection)]
fn event_section(p: &EventSectionProps) -> Html {
    html! {
        <section id={p.id.clone()} class="space-y-3">
            <h3 class="text-lg font-semibold">{ p.title.clone() }</h3>
            if p.events.is_empty() {
                <p class="opacity-60">{"No events here."}</p>
            }
            <div class="grid gap-4 lg:grid-cols-2">
                { for p.events.iter().map(|event| html! {
                    <EventCard
                        key={event.id.clone().unwrap_or_default()}
                        event={event.clone()}
                        now={p.now}
                        on_edit={p.on_edit.clone()}
                        on_delete={p.on_delete.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(EventSchedulerPage)]
pub fn event_scheduler_page() -> Html {
    let board = use_state(EventBoard::mock);
    let now = use_state(NaiveDateTime::default);
    let draft = use_state(|| None::<EventDraft>);
    let errors = use_state(Vec::<EventFieldError>::new);
    let status = use_state(SaveStatus::default);

    {
        let now = now.clone();
        use_effect_with((), move |()| {
            now.set(dom::local_now());
            || {}
        });
    }

    let on_create = {
        let (draft, errors) = (draft.clone(), errors.clone());
        Callback::from(move |_: MouseEvent| {
            errors.set(Vec::new());
            draft.set(Some(EventDraft::new_at(dom::local_now())));
        })
    };
    let on_edit = {
        let (draft, errors) = (draft.clone(), errors.clone());
        Callback::from(move |event: ScheduledEvent| {
            errors.set(Vec::new());
            draft.set(Some(event.to_draft()));
        })
    };
    let on_delete = {
        let (board, status) = (board.clone(), status.clone());
        Callback::from(move |id: String| {
            let mut next = (*board).clone();
            if next.delete(&id) {
                log::info!("Deleted event {id}");
                board.set(next);
                status.set(SaveStatus::Saved(EVENT_DELETED_MESSAGE.to_string()));
            }
        })
    };
    let on_close = {
        let (draft, errors) = (draft.clone(), errors.clone());
        Callback::from(move |()| {
            errors.set(Vec::new());
            draft.set(None);
        })
    };
    let on_submit = {
        let (board, draft, errors, status, now) =
            (board.clone(), draft.clone(), errors.clone(), status.clone(), now.clone());
        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*draft).clone() else {
                return;
            };
            let mut next = (*board).clone();
            match next.save(&current, dom::now_ms()) {
                Ok(message) => {
                    board.set(next);
                    draft.set(None);
                    errors.set(Vec::new());
                    now.set(dom::local_now());
                    status.set(SaveStatus::Saved(message));
                }
                Err(found) => {
                    log::debug!("Event form has {} error(s)", found.len());
                    errors.set(found);
                }
            }
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };

    let sections = board.sections(*now);
    let owned = |events: &[&ScheduledEvent]| events.iter().map(|e| (*e).clone()).collect::<Vec<_>>();

    let modal = (*draft).clone().map_or_else(Html::default, |current| {
        let title = if current.is_editing() { "Edit Event" } else { "Create Event" };
        let on_cancel = on_close.reform(|_: MouseEvent| ());
        let on_change = edit(&draft, |slot: &mut Option<EventDraft>, next: EventDraft| {
            *slot = Some(next);
        });
        html! {
            <Modal
                open={true}
                wide={true}
                title={title}
                on_close={on_close.clone()}
                actions={html! {
                    <>
                        <Button variant={DaisyColor::Ghost} label="Cancel" onclick={on_cancel} />
                        <Button id="save-event" variant={DaisyColor::Primary} label="Save Event" onclick={on_submit} />
                    </>
                }}
            >
                <EventForm draft={current} errors={(*errors).clone()} on_change={on_change} />
            </Modal>
        }
    });

    html! {
        <div class="space-y-6" id="event-scheduler">
            <SaveBanner status={(*status).clone()} on_dismiss={on_dismiss} />
            <Card
                title="Event Scheduler"
                subtitle="Plan boosts and special events for your server"
                header_actions={html! {
                    <Button id="create-event" variant={DaisyColor::Primary} label="Create Event" onclick={on_create} />
                }}
            >
                if board.is_empty() {
                    <Alert variant={DaisyColor::Info}>{"No events scheduled yet."}</Alert>
                } else {
                    <div class="space-y-8">
                        if sections.show_active_upcoming() {
                            <EventSection
                                id="active-upcoming"
                                title="Active & Upcoming"
                                events={owned(&sections.active_upcoming)}
                                now={*now}
                                on_edit={on_edit.clone()}
                                on_delete={on_delete.clone()}
                            />
                        }
                        if !sections.past_disabled.is_empty() {
                            <EventSection
                                id="past-disabled"
                                title="Past & Disabled"
                                events={owned(&sections.past_disabled)}
                                now={*now}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        }
                    </div>
                }
            </Card>
            { modal }
        </div>
    }
}
