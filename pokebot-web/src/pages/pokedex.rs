use crate::components::TypeBadge;
use crate::components::daisy_ui::{
    Alert, Button, Card, DaisyColor, DaisySize, Input, Loading, Progress, Select, SelectOption,
};
use crate::hooks::{use_cancel_token, use_poke_api, use_request_gate};
use crate::router::Route;
use crate::storage::BrowserSleeper;
use pokebot_core::catalog::POKEMON_TYPES;
use pokebot_core::pokedex::api::NamedResource;
use pokebot_core::pokedex::batch::BATCH_SIZE;
use pokebot_core::pokedex::detail::dex_number;
use pokebot_core::pokedex::{
    Generation, PokedexFilter, PokemonSummary, generation_filter_error, generations,
    load_error_message, load_in_batches, sort_by_id,
};
use std::collections::HashSet;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LoadProgress {
    done: usize,
    total: usize,
}

impl LoadProgress {
    fn percent(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 * 100.0 / self.total as f64
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PokemonCardProps {
    pub pokemon: PokemonSummary,
}

#[function_component(PokemonCard)]
pub fn pokemon_card(p: &PokemonCardProps) -> Html {
    let pokemon = &p.pokemon;
    html! {
        <Link<Route>
            to={Route::pokemon_detail(&pokemon.route_name())}
            classes="pokemon-card card bg-base-100 shadow transition hover:-translate-y-1 hover:shadow-lg"
        >
            <figure class="bg-base-200 pt-3">
                <img
                    src={pokemon.sprite_url.clone()}
                    alt={pokemon.name.clone()}
                    loading="lazy"
                    class="h-24 w-24 [image-rendering:pixelated]"
                />
            </figure>
            <div class="card-body items-center p-3 text-center">
                <span class="text-xs opacity-60">{ dex_number(pokemon.id) }</span>
                <h3 class="font-semibold">{ pokemon.name.clone() }</h3>
                <div class="flex flex-wrap justify-center gap-1">
                    { for pokemon.types.iter().map(|t| html! {
                        <TypeBadge name={AttrValue::from(t.clone())} />
                    }) }
                </div>
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FilterBarProps {
    pub filter: PokedexFilter,
    pub generations: Vec<Generation>,
    #[prop_or_default]
    pub generation_loading: bool,
    pub on_generation: Callback<Option<String>>,
    pub on_toggle_type: Callback<String>,
    pub on_search: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &FilterBarProps) -> Html {
    let options: Vec<SelectOption> = p
        .generations
        .iter()
        .map(|g| SelectOption::new(g.url.clone(), g.label.clone()))
        .collect();
    let on_generation = p.on_generation.reform(|value: AttrValue| {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    });
    let on_clear = p.on_clear.reform(|_: MouseEvent| ());

    html! {
        <div class="pokedex-filters space-y-3">
            <div class="flex flex-wrap items-center gap-3">
                <Input
                    id="pokedex-search"
                    class="max-w-xs"
                    placeholder="Search by name, number or type"
                    value={AttrValue::from(p.filter.search.clone())}
                    oninput={p.on_search.clone()}
                />
                <Select
                    id="generation-filter"
                    class="max-w-xs"
                    options={options}
                    value={AttrValue::from(p.filter.generation.clone().unwrap_or_default())}
                    placeholder="All Generations"
                    on_change={on_generation}
                />
                if p.generation_loading {
                    <Loading size={DaisySize::Sm} />
                }
                <Button
                    id="clear-filters"
                    variant={DaisyColor::Ghost}
                    disabled={!p.filter.is_active()}
                    label="Clear Filters"
                    onclick={on_clear}
                />
            </div>
            <div class="flex flex-wrap gap-2" role="group" aria-label="Type filters">
                { for POKEMON_TYPES.iter().map(|name| {
                    let selected = p.filter.is_type_selected(name);
                    let onclick = {
                        let cb = p.on_toggle_type.clone();
                        Callback::from(move |_: MouseEvent| cb.emit((*name).to_string()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("type-toggle", "rounded-full", (!selected).then_some("opacity-40"))}
                            aria-pressed={selected.to_string()}
                            onclick={onclick}
                        >
                            <TypeBadge name={*name} />
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(PokedexPage)]
pub fn pokedex_page() -> Html {
    let api = use_poke_api();
    let cancel = use_cancel_token();
    let all = use_state(|| Rc::new(Vec::<PokemonSummary>::new()));
    let generation_options = use_state(Vec::<Generation>::new);
    let generation_species = use_state(|| None::<Rc<HashSet<String>>>);
    let generation_loading = use_state(|| false);
    let filter = use_state(PokedexFilter::default);
    let progress = use_state(LoadProgress::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let generation_gate = use_request_gate();

    {
        let (api, cancel) = (Rc::clone(&api), cancel.clone());
        let (all, generation_options, progress) =
            (all.clone(), generation_options.clone(), progress.clone());
        let (loading, error, notice) = (loading.clone(), error.clone(), notice.clone());
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.generations().await {
                    Ok(list) => generation_options.set(generations(&list)),
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        log::warn!("Could not load generations: {err}");
                        notice.set(Some(err.to_string()));
                    }
                }
                let references = match api.pokemon_count().await {
                    Ok(count) => api.pokemon_list(count).await.map(|list| list.results),
                    Err(err) => Err(err),
                };
                let references: Vec<NamedResource> = match references {
                    Ok(references) => references,
                    Err(err) => {
                        if !err.is_aborted() && !cancel.is_cancelled() {
                            log::error!("Pokédex load failed: {err}");
                            error.set(Some(load_error_message(&err.to_string())));
                            loading.set(false);
                        }
                        return;
                    }
                };
                progress.set(LoadProgress {
                    done: 0,
                    total: references.len(),
                });

                let fetch = |reference: &NamedResource| {
                    let api = Rc::clone(&api);
                    let url = reference.url.clone();
                    async move {
                        api.pokemon_by_url(&url)
                            .await
                            .map(|detail| PokemonSummary::from_detail(&detail))
                    }
                };
                let on_progress = {
                    let progress = progress.clone();
                    move |done: usize, total: usize| progress.set(LoadProgress { done, total })
                };
                let outcome = load_in_batches(
                    &references,
                    BATCH_SIZE,
                    fetch,
                    &BrowserSleeper,
                    &cancel,
                    on_progress,
                )
                .await;
                if outcome.cancelled || cancel.is_cancelled() {
                    return;
                }
                if outcome.failed > 0 {
                    log::warn!("{} Pokémon failed to load", outcome.failed);
                }
                let mut loaded = outcome.loaded;
                sort_by_id(&mut loaded);
                log::info!("Pokédex loaded {} entries", loaded.len());
                all.set(Rc::new(loaded));
                loading.set(false);
            });
            || {}
        });
    }

    let on_generation = {
        let (api, cancel, gate) = (Rc::clone(&api), cancel.clone(), generation_gate.clone());
        let (filter, generation_species, generation_loading, notice) = (
            filter.clone(),
            generation_species.clone(),
            generation_loading.clone(),
            notice.clone(),
        );
        Callback::from(move |url: Option<String>| {
            let mut next = (*filter).clone();
            next.generation.clone_from(&url);
            filter.set(next);
            generation_species.set(None);
            let ticket = gate.issue();
            let Some(url) = url else {
                generation_loading.set(false);
                return;
            };
            generation_loading.set(true);
            let (api, cancel, gate) = (Rc::clone(&api), cancel.clone(), gate.clone());
            let (generation_species, generation_loading, notice) = (
                generation_species.clone(),
                generation_loading.clone(),
                notice.clone(),
            );
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.generation_species(&url).await;
                if cancel.is_cancelled() || !gate.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(names) => generation_species.set(Some(Rc::new(names.into_iter().collect()))),
                    Err(err) => {
                        log::error!("Could not load generation species: {err}");
                        notice.set(Some(generation_filter_error(&err.to_string())));
                    }
                }
                generation_loading.set(false);
            });
        })
    };
    let on_toggle_type = {
        let filter = filter.clone();
        Callback::from(move |name: String| {
            let mut next = (*filter).clone();
            next.toggle_type(&name);
            filter.set(next);
        })
    };
    let on_search = {
        let filter = filter.clone();
        Callback::from(move |search: String| {
            let mut next = (*filter).clone();
            next.search = search;
            filter.set(next);
        })
    };
    let on_clear = {
        let (filter, generation_species) = (filter.clone(), generation_species.clone());
        let (generation_loading, gate) = (generation_loading.clone(), generation_gate.clone());
        Callback::from(move |()| {
            gate.invalidate();
            generation_loading.set(false);
            generation_species.set(None);
            filter.set(PokedexFilter::default());
        })
    };
    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let body = if let Some(message) = (*error).clone() {
        html! { <Alert variant={DaisyColor::Error} title="Error" message={message} /> }
    } else if *loading {
        let current = *progress;
        html! {
            <div id="pokedex-loading" class="space-y-3 py-8 text-center">
                <Loading label="Loading Pokédex..." />
                if current.total > 0 {
                    <Progress
                        value={current.percent()}
                        variant={DaisyColor::Primary}
                        label={format!("{} / {}", current.done, current.total)}
                    />
                }
            </div>
        }
    } else {
        let visible = filter.apply(&all, generation_species.as_deref());
        html! {
            <>
                <p class="text-sm opacity-60">
                    { format!("Showing {} of {} Pokémon", visible.len(), all.len()) }
                </p>
                if visible.is_empty() {
                    <p id="pokedex-empty" class="py-8 text-center opacity-60">{"No Pokémon match the current filters."}</p>
                }
                <div id="pokedex-grid" class="grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4 xl:grid-cols-6">
                    { for visible.into_iter().map(|pokemon| html! {
                        <PokemonCard key={pokemon.id} pokemon={pokemon.clone()} />
                    }) }
                </div>
            </>
        }
    };

    html! {
        <div class="space-y-6" id="pokedex">
            <Card title="Pokédex" subtitle="Every Pokémon from PokeAPI">
                <FilterBar
                    filter={(*filter).clone()}
                    generations={(*generation_options).clone()}
                    generation_loading={*generation_loading}
                    on_generation={on_generation}
                    on_toggle_type={on_toggle_type}
                    on_search={on_search}
                    on_clear={on_clear}
                />
            </Card>
            if let Some(message) = (*notice).clone() {
                <Alert
                    class="pokedex-notice"
                    variant={DaisyColor::Error}
                    message={message}
                    on_dismiss={dismiss_notice}
                />
            }
            { body }
        </div>
    }
}
