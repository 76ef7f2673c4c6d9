use crate::api::ApiError;
use crate::components::TypeBadge;
use crate::components::daisy_ui::{
    Alert, Badge, Card, DaisyColor, DaisySize, Loading, Progress, Toggle,
};
use crate::dom;
use crate::hooks::{use_cancel_token, use_poke_api, use_request_gate};
use crate::router::Route;
use pokebot_core::form::capitalize;
use pokebot_core::pokedex::detail::{
    EvolutionStage, LearnedMove, MOVE_PULSE_MS, dex_number, english_genus, evolution_stages,
    flavor_texts, format_height, format_weight, group_moves, humanize, move_effect, optional_stat,
    showdown_sprite_url, stages_by_depth, stat_rows, stat_total, type_color,
};
use pokebot_core::pokedex::api::{EvolutionChain, MoveDetail};
use pokebot_core::pokedex::{
    CancelToken, MOVE_DETAIL_ERROR, PokemonDetail, PokemonSpecies, fetch_error_message,
};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Debug, Clone, PartialEq)]
struct Loaded {
    pokemon: Rc<PokemonDetail>,
    species: Option<Rc<PokemonSpecies>>,
    chain: Option<Rc<EvolutionChain>>,
    /// Species lookup failed; the base record still renders.
    species_error: Option<String>,
}

fn describe(name: &str, err: &ApiError) -> String {
    match err {
        ApiError::Status(status) => fetch_error_message(name, *status),
        other => format!("Could not fetch Pokémon data for \"{name}\". {other}"),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub pokemon: Rc<PokemonDetail>,
}

#[function_component(StatsPanel)]
pub fn stats_panel(p: &StatsPanelProps) -> Html {
    let rows = stat_rows(&p.pokemon.stats);
    html! {
        <Card title="Base Stats" id="base-stats">
            <table class="w-full text-sm">
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>
                            <th class="w-20 pr-3 text-left font-semibold">{ row.label.clone() }</th>
                            <td class="w-10 text-right">{ row.value }</td>
                            <td class="pl-3">
                                <Progress
                                    value={f64::from(row.value)}
                                    max={f64::from(row.full_mark)}
                                    variant={DaisyColor::Primary}
                                />
                            </td>
                        </tr>
                    }) }
                    <tr class="border-t border-base-300">
                        <th class="pt-2 text-left">{"Total"}</th>
                        <td class="pt-2 text-right font-bold">{ stat_total(&p.pokemon.stats) }</td>
                        <td></td>
                    </tr>
                </tbody>
            </table>
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EvolutionPanelProps {
    pub chain: Rc<EvolutionChain>,
    /// Species currently shown, highlighted in the chain.
    pub current: AttrValue,
}

#[function_component(EvolutionPanel)]
pub fn evolution_panel(p: &EvolutionPanelProps) -> Html {
    let stages = evolution_stages(&p.chain.chain);
    let stage_card = |stage: &EvolutionStage| {
        let current = stage.species == p.current.as_str();
        html! {
            <Link<Route>
                to={Route::pokemon_detail(&stage.species)}
                classes={classes!(
                    "evolution-stage", "flex", "flex-col", "items-center", "rounded", "p-2",
                    current.then_some("bg-base-200"),
                )}
            >
                <img src={stage.sprite_url.clone()} alt={stage.display_name.clone()} class="h-16" />
                <span class="font-semibold">{ stage.display_name.clone() }</span>
                if let Some(method) = &stage.method {
                    <span class="text-xs opacity-70">{ method.clone() }</span>
                }
            </Link<Route>>
        }
    };
    html! {
        <Card title="Evolution Chain" id="evolution-chain">
            if stages.len() <= 1 {
                <p class="opacity-60">{"This Pokémon does not evolve."}</p>
            } else {
                <div class="flex flex-wrap items-center gap-4">
                    { for stages_by_depth(&stages).into_iter().enumerate().map(|(depth, row)| html! {
                        <>
                            if depth > 0 {
                                <span class="text-2xl opacity-40" aria-hidden="true">{"→"}</span>
                            }
                            <div class="flex flex-col gap-2">
                                { for row.into_iter().map(|stage| stage_card(stage)) }
                            </div>
                        </>
                    }) }
                </div>
            }
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MoveListProps {
    pub pokemon: Rc<PokemonDetail>,
    pub selected: Option<AttrValue>,
    pub detail: Option<Rc<MoveDetail>>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub pulse: bool,
    pub on_select: Callback<String>,
}

#[function_component(MoveList)]
pub fn move_list(p: &MoveListProps) -> Html {
    let groups = group_moves(&p.pokemon.moves);
    if groups.is_empty() {
        return html! { <Card title="Moves"><p class="opacity-60">{"No move data."}</p></Card> };
    }
    let move_button = |learned: &LearnedMove, show_level: bool| {
        let selected = p.selected.as_deref() == Some(learned.api_name.as_str());
        let onclick = {
            let cb = p.on_select.clone();
            let api_name = learned.api_name.clone();
            Callback::from(move |_: MouseEvent| cb.emit(api_name.clone()))
        };
        html! {
            <li>
                <button
                    type="button"
                    class={classes!("btn", "btn-xs", "capitalize", if selected { "btn-primary" } else { "btn-ghost" })}
                    onclick={onclick}
                >
                    if show_level {
                        <span class="opacity-60">{ format!("Lv {}", learned.level) }</span>
                    }
                    { learned.name.clone() }
                </button>
            </li>
        }
    };
    let detail = p.detail.as_ref().map(|detail| {
        let color = type_color(&detail.kind.name);
        let style = if p.pulse {
            format!("box-shadow: 0 0 0 4px {color}; transition: box-shadow 0.3s;")
        } else {
            "transition: box-shadow 0.3s;".to_string()
        };
        html! {
            <div id="move-detail" class="rounded-lg border border-base-300 p-4" style={style}>
                <div class="flex items-center gap-2">
                    <h4 class="text-lg font-bold capitalize">{ humanize(&detail.name) }</h4>
                    <TypeBadge name={AttrValue::from(detail.kind.name.clone())} />
                    <Badge outline={true} label={capitalize(&detail.damage_class.name)} />
                </div>
                <dl class="mt-2 grid grid-cols-3 gap-2 text-sm">
                    <div><dt class="opacity-60">{"Power"}</dt><dd>{ optional_stat(detail.power) }</dd></div>
                    <div><dt class="opacity-60">{"Accuracy"}</dt><dd>{ optional_stat(detail.accuracy) }</dd></div>
                    <div><dt class="opacity-60">{"PP"}</dt><dd>{ detail.pp }</dd></div>
                </dl>
                <p class="mt-2 text-sm">{ move_effect(detail) }</p>
            </div>
        }
    });

    html! {
        <Card title="Moves" id="moves">
            if p.loading {
                <Loading size={DaisySize::Sm} label="Loading move..." />
            } else if let Some(detail) = detail {
                { detail }
            }
            { for groups.sections().into_iter().map(|(heading, moves)| {
                let show_level = heading.starts_with("Level");
                html! {
                    <section class="mt-4">
                        <h4 class="mb-1 font-semibold">{ heading }</h4>
                        <ul class="flex flex-wrap gap-1">
                            { for moves.iter().map(|m| move_button(m, show_level)) }
                        </ul>
                    </section>
                }
            }) }
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PokemonDetailPageProps {
    pub name: AttrValue,
}

#[function_component(PokemonDetailPage)]
pub fn pokemon_detail_page(p: &PokemonDetailPageProps) -> Html {
    let api = use_poke_api();
    let cancel = use_cancel_token();
    let loaded = use_state(|| None::<Loaded>);
    let error = use_state(|| None::<String>);
    let shiny = use_state(|| false);
    let move_cache = use_mut_ref(HashMap::<String, Rc<MoveDetail>>::new);
    let selected_move = use_state(|| None::<AttrValue>);
    let move_detail = use_state(|| None::<Rc<MoveDetail>>);
    let move_loading = use_state(|| false);
    let pulse = use_state(|| false);
    let move_error = use_state(|| None::<String>);
    let move_gate = use_request_gate();

    {
        let (api, cancel) = (Rc::clone(&api), cancel.clone());
        let (loaded, error) = (loaded.clone(), error.clone());
        let (selected_move, move_detail) = (selected_move.clone(), move_detail.clone());
        let (move_loading, move_error, move_gate) =
            (move_loading.clone(), move_error.clone(), move_gate.clone());
        use_effect_with(p.name.clone(), move |name| {
            let run = CancelToken::new();
            loaded.set(None);
            error.set(None);
            move_gate.invalidate();
            selected_move.set(None);
            move_detail.set(None);
            move_loading.set(false);
            move_error.set(None);
            let name = name.to_string();
            {
                let run = run.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let stale = || run.is_cancelled() || cancel.is_cancelled();
                    let pokemon = match api.pokemon(&name).await {
                        Ok(pokemon) => Rc::new(pokemon),
                        Err(err) => {
                            if !err.is_aborted() && !stale() {
                                log::error!("Pokémon fetch failed for {name}: {err}");
                                error.set(Some(describe(&name, &err)));
                            }
                            return;
                        }
                    };
                    if stale() {
                        return;
                    }
                    loaded.set(Some(Loaded {
                        pokemon: Rc::clone(&pokemon),
                        species: None,
                        chain: None,
                        species_error: None,
                    }));

                    let species = match api.species(&pokemon.species.url).await {
                        Ok(species) => Rc::new(species),
                        Err(err) => {
                            if !err.is_aborted() && !stale() {
                                log::warn!("Species fetch failed for {name}: {err}");
                                loaded.set(Some(Loaded {
                                    pokemon,
                                    species: None,
                                    chain: None,
                                    species_error: Some(format!(
                                        "Could not load species details for \"{name}\". {err}"
                                    )),
                                }));
                            }
                            return;
                        }
                    };
                    if stale() {
                        return;
                    }
                    let chain = match &species.evolution_chain {
                        Some(link) => match api.evolution_chain(&link.url).await {
                            Ok(chain) => Some(Rc::new(chain)),
                            Err(err) => {
                                log::warn!("Evolution chain fetch failed for {name}: {err}");
                                None
                            }
                        },
                        None => None,
                    };
                    if stale() {
                        return;
                    }
                    loaded.set(Some(Loaded {
                        pokemon,
                        species: Some(species),
                        chain,
                        species_error: None,
                    }));
                });
            }
            move || run.cancel()
        });
    }

    let on_select_move = {
        let (api, cancel, gate) = (Rc::clone(&api), cancel.clone(), move_gate.clone());
        let (selected_move, move_detail, move_loading, pulse, move_error) = (
            selected_move.clone(),
            move_detail.clone(),
            move_loading.clone(),
            pulse.clone(),
            move_error.clone(),
        );
        Callback::from(move |api_name: String| {
            let ticket = gate.issue();
            selected_move.set(Some(AttrValue::from(api_name.clone())));
            move_error.set(None);
            pulse.set(false);
            let cached = move_cache.borrow().get(&api_name).cloned();
            let (api, cancel, gate, cache) =
                (Rc::clone(&api), cancel.clone(), gate.clone(), move_cache.clone());
            let (move_detail, move_loading, pulse, move_error) = (
                move_detail.clone(),
                move_loading.clone(),
                pulse.clone(),
                move_error.clone(),
            );
            wasm_bindgen_futures::spawn_local(async move {
                let current = || !cancel.is_cancelled() && gate.is_current(ticket);
                let detail = if let Some(detail) = cached {
                    move_loading.set(false);
                    detail
                } else {
                    move_loading.set(true);
                    let result = api.move_detail(&api_name).await;
                    let detail = result.map(|detail| {
                        let detail = Rc::new(detail);
                        cache.borrow_mut().insert(api_name.clone(), Rc::clone(&detail));
                        detail
                    });
                    if !current() {
                        return;
                    }
                    move_loading.set(false);
                    match detail {
                        Ok(detail) => detail,
                        Err(err) => {
                            log::error!("Move fetch failed for {api_name}: {err}");
                            move_detail.set(None);
                            if !err.is_aborted() {
                                move_error.set(Some(format!("{MOVE_DETAIL_ERROR} {err}")));
                            }
                            return;
                        }
                    }
                };
                move_detail.set(Some(detail));
                pulse.set(true);
                if let Err(err) = dom::sleep_ms(MOVE_PULSE_MS).await {
                    log::warn!("Timer failed: {}", dom::js_error_message(&err));
                }
                if current() {
                    pulse.set(false);
                }
            });
        })
    };
    let dismiss_move_error = {
        let move_error = move_error.clone();
        Callback::from(move |()| move_error.set(None))
    };
    let on_shiny = {
        let shiny = shiny.clone();
        Callback::from(move |on: bool| shiny.set(on))
    };

    let back = html! {
        <Link<Route> to={Route::Pokedex} classes="btn btn-ghost btn-sm">{"← Back to Pokédex"}</Link<Route>>
    };

    if let Some(message) = (*error).clone() {
        return html! {
            <div class="space-y-4" id="pokemon-detail">
                { back }
                <Alert variant={DaisyColor::Error} title="Error" message={message} />
            </div>
        };
    }
    let Some(data) = (*loaded).clone() else {
        return html! {
            <div class="space-y-4" id="pokemon-detail">
                { back }
                <Loading block={true} label={format!("Loading {}...", capitalize(&p.name))} />
            </div>
        };
    };

    let pokemon = &data.pokemon;
    let display_name = capitalize(&pokemon.name);
    let sprite = showdown_sprite_url(&display_name, *shiny);
    let mut types: Vec<_> = pokemon.types.iter().collect();
    types.sort_by_key(|t| t.slot);
    let species = data.species.as_deref();

    html! {
        <div class="space-y-6" id="pokemon-detail">
            { back }
            <Card>
                <div class="flex flex-col items-center gap-6 md:flex-row">
                    <div class="flex flex-col items-center gap-2">
                        <img
                            id="pokemon-sprite"
                            src={sprite}
                            alt={display_name.clone()}
                            class="h-32 [image-rendering:pixelated]"
                        />
                        <Toggle id="shiny-toggle" label="Shiny" checked={*shiny} on_toggle={on_shiny} />
                    </div>
                    <div class="flex-1 space-y-2">
                        <p class="text-sm opacity-60">{ dex_number(pokemon.id) }</p>
                        <h2 class="text-3xl font-bold">{ display_name.clone() }</h2>
                        if let Some(species) = species {
                            <p class="italic opacity-80">{ english_genus(species) }</p>
                        }
                        <div class="flex gap-2">
                            { for types.iter().map(|t| html! {
                                <TypeBadge name={AttrValue::from(t.kind.name.clone())} />
                            }) }
                        </div>
                        <dl class="grid grid-cols-2 gap-2 text-sm md:grid-cols-4">
                            <div><dt class="opacity-60">{"Height"}</dt><dd>{ format_height(pokemon.height) }</dd></div>
                            <div><dt class="opacity-60">{"Weight"}</dt><dd>{ format_weight(pokemon.weight) }</dd></div>
                            if let Some(species) = species {
                                <div><dt class="opacity-60">{"Capture rate"}</dt><dd>{ species.capture_rate }</dd></div>
                                <div><dt class="opacity-60">{"Generation"}</dt><dd>{ humanize(&species.generation.name) }</dd></div>
                            }
                        </dl>
                        <div class="flex flex-wrap gap-1">
                            { for pokemon.abilities.iter().map(|a| html! {
                                <Badge
                                    outline={true}
                                    variant={if a.is_hidden { DaisyColor::Secondary } else { DaisyColor::Neutral }}
                                    label={if a.is_hidden {
                                        format!("{} (Hidden)", humanize(&a.ability.name))
                                    } else {
                                        humanize(&a.ability.name)
                                    }}
                                />
                            }) }
                        </div>
                    </div>
                </div>
            </Card>
            if let Some(species) = species {
                <Card title="Pokédex Entries" id="flavor-texts">
                    { for flavor_texts(species).into_iter().map(|entry| html! {
                        <blockquote class="border-l-4 border-base-300 pl-3">
                            <p>{ entry.text }</p>
                            <footer class="text-xs opacity-60">{ entry.version }</footer>
                        </blockquote>
                    }) }
                </Card>
            }
            <div class="grid gap-6 lg:grid-cols-2">
                <StatsPanel pokemon={Rc::clone(pokemon)} />
                if let Some(chain) = data.chain.clone() {
                    <EvolutionPanel chain={chain} current={AttrValue::from(pokemon.species.name.clone())} />
                } else if let Some(message) = data.species_error.clone() {
                    <Alert class="species-error" variant={DaisyColor::Warning} message={message} />
                } else if species.is_none() {
                    <Card title="Evolution Chain"><Loading size={DaisySize::Sm} /></Card>
                }
            </div>
            if let Some(message) = (*move_error).clone() {
                <Alert
                    class="move-error"
                    variant={DaisyColor::Error}
                    message={message}
                    on_dismiss={dismiss_move_error}
                />
            }
            <MoveList
                pokemon={Rc::clone(pokemon)}
                selected={(*selected_move).clone()}
                detail={(*move_detail).clone()}
                loading={*move_loading}
                pulse={*pulse}
                on_select={on_select_move}
            />
        </div>
    }
}
