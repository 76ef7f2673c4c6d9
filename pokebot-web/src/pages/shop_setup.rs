use crate::components::SaveBanner;
use crate::components::daisy_ui::{
    Alert, Button, Card, Checkbox, DaisyColor, DaisySize, Input, Loading, Select, SelectOption,
};
use crate::dom;
use crate::hooks::use_cancel_token;
use crate::storage::use_backend;
use pokebot_core::catalog::ITEM_NAMES;
use pokebot_core::shop::{
    REMOVED_MESSAGE, SAVED_MESSAGE, ShopCatalog, ShopItem, ShopItemDraft, ShopItemError,
    format_gold,
};
use pokebot_core::{ConfigPort, SaveStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AddItemFormProps {
    pub draft: ShopItemDraft,
    #[prop_or_default]
    pub error: Option<ShopItemError>,
    pub on_change: Callback<ShopItemDraft>,
    pub on_submit: Callback<()>,
}

#[function_component(AddItemForm)]
pub fn add_item_form(p: &AddItemFormProps) -> Html {
    let update = |apply: fn(&mut ShopItemDraft, &str)| {
        let draft = p.draft.clone();
        let cb = p.on_change.clone();
        Callback::from(move |raw: String| {
            let mut next = draft.clone();
            apply(&mut next, &raw);
            cb.emit(next);
        })
    };
    let on_name = update(|d, v| d.item_name = v.to_string()).reform(|v: AttrValue| v.to_string());
    let on_price = update(ShopItemDraft::set_price);
    let on_stock = update(ShopItemDraft::set_stock);
    let on_description = update(|d, v| d.description = v.to_string());
    let on_unlimited = {
        let draft = p.draft.clone();
        let cb = p.on_change.clone();
        Callback::from(move |unlimited: bool| {
            let mut next = draft.clone();
            next.set_unlimited(unlimited);
            cb.emit(next);
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let stock_value = if p.draft.unlimited {
        AttrValue::default()
    } else {
        AttrValue::from(p.draft.stock.to_string())
    };

    html! {
        <div id="add-shop-item" class="space-y-4 rounded-lg bg-base-200 p-4">
            <h3 class="font-semibold">{"Add New Item"}</h3>
            <div class="grid gap-4 md:grid-cols-2">
                <label class="form-control">
                    <span class="label-text">{"Item Name"}</span>
                    <Select
                        id="shop-item-name"
                        options={SelectOption::plain(ITEM_NAMES.iter().copied())}
                        value={AttrValue::from(p.draft.item_name.clone())}
                        invalid={p.error == Some(ShopItemError::MissingName)}
                        on_change={on_name}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Price (Gold)"}</span>
                    <Input
                        id="shop-item-price"
                        input_type="number"
                        min="1"
                        value={AttrValue::from(p.draft.price.to_string())}
                        invalid={p.error == Some(ShopItemError::InvalidPrice)}
                        oninput={on_price}
                    />
                </label>
                <div class="form-control">
                    <span class="label-text">{"Stock"}</span>
                    <div class="flex items-center gap-3">
                        <Input
                            id="shop-item-stock"
                            input_type="number"
                            min="1"
                            class="flex-1"
                            value={stock_value}
                            disabled={p.draft.unlimited}
                            invalid={p.error == Some(ShopItemError::InvalidStock)}
                            oninput={on_stock}
                        />
                        <Checkbox
                            id="shop-item-unlimited"
                            label="Unlimited"
                            checked={p.draft.unlimited}
                            on_toggle={on_unlimited}
                        />
                    </div>
                </div>
                <label class="form-control md:col-span-2">
                    <span class="label-text">{"Description (optional)"}</span>
                    <Input
                        id="shop-item-description"
                        value={AttrValue::from(p.draft.description.clone())}
                        oninput={on_description}
                    />
                </label>
            </div>
            if let Some(error) = &p.error {
                <p class="text-sm text-error" role="alert">{ error.to_string() }</p>
            }
            <div class="text-right">
                <Button id="add-shop-item-submit" variant={DaisyColor::Primary} label="Add Item to List" onclick={on_submit} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShopItemCardProps {
    pub item: ShopItem,
    #[prop_or_default]
    pub disabled: bool,
    pub on_remove: Callback<String>,
}

#[function_component(ShopItemCard)]
pub fn shop_item_card(p: &ShopItemCardProps) -> Html {
    let item = &p.item;
    let on_remove = {
        let cb = p.on_remove.clone();
        let key = item.key().map(str::to_string);
        Callback::from(move |_: MouseEvent| {
            if let Some(key) = &key {
                cb.emit(key.clone());
            }
        })
    };
    html! {
        <Card
            class="shop-item shadow-md"
            title={AttrValue::from(item.item_name.clone())}
            actions={html! {
                <Button
                    size={DaisySize::Sm}
                    variant={DaisyColor::Error}
                    label="Remove Item"
                    aria_label={format!("Remove {}", item.item_name)}
                    disabled={p.disabled}
                    onclick={on_remove}
                />
            }}
        >
            <dl class="grid gap-3 md:grid-cols-3">
                <div>
                    <dt class="text-sm opacity-60">{"Price"}</dt>
                    <dd class="font-semibold">{ format_gold(item.price) }</dd>
                </div>
                <div>
                    <dt class="text-sm opacity-60">{"Stock"}</dt>
                    <dd class="font-semibold">{ item.stock.to_string() }</dd>
                </div>
                <div class="md:col-span-3">
                    <dt class="text-sm opacity-60">{"Description"}</dt>
                    <dd>{ item.description_or_placeholder() }</dd>
                </div>
            </dl>
        </Card>
    }
}

#[function_component(ShopSetupPage)]
pub fn shop_setup_page() -> Html {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let catalog = use_state(ShopCatalog::default);
    let loading = use_state(|| true);
    let adding = use_state(|| false);
    let draft = use_state(ShopItemDraft::default);
    let form_error = use_state(|| None::<ShopItemError>);
    let status = use_state(SaveStatus::default);

    {
        let (backend, cancel) = (backend.clone(), cancel.clone());
        let (catalog, loading, status) = (catalog.clone(), loading.clone(), status.clone());
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = backend.list::<ShopItem>().await;
                if cancel.is_cancelled() {
                    return;
                }
                match result {
                    Ok(items) => {
                        log::debug!("Loaded {} shop items", items.len());
                        catalog.set(ShopCatalog::from_items(items));
                    }
                    Err(err) => {
                        log::error!("Could not load shop items: {err}");
                        status.set(SaveStatus::Failed(format!("Error loading items: {err}")));
                    }
                }
                loading.set(false);
            });
            || {}
        });
    }

    let busy = *loading || status.is_saving();

    let on_toggle_form = {
        let (adding, form_error) = (adding.clone(), form_error.clone());
        Callback::from(move |_: MouseEvent| {
            form_error.set(None);
            adding.set(!*adding);
        })
    };
    let on_add = {
        let (catalog, draft, adding) = (catalog.clone(), draft.clone(), adding.clone());
        let (form_error, status) = (form_error.clone(), status.clone());
        Callback::from(move |()| {
            let mut next = (*catalog).clone();
            match next.add(&draft, dom::now_ms()) {
                Ok(message) => {
                    catalog.set(next);
                    draft.set(ShopItemDraft::default());
                    form_error.set(None);
                    adding.set(false);
                    status.set(SaveStatus::Saved(message));
                }
                Err(err) => form_error.set(Some(err)),
            }
        })
    };
    let on_remove = {
        let (catalog, status) = (catalog.clone(), status.clone());
        Callback::from(move |key: String| {
            let mut next = (*catalog).clone();
            if next.remove(&key) {
                catalog.set(next);
                status.set(SaveStatus::Saved(REMOVED_MESSAGE.to_string()));
            }
        })
    };
    let on_save_all = {
        let (catalog, status) = (catalog.clone(), status.clone());
        Callback::from(move |_: MouseEvent| {
            if catalog.is_empty() || status.is_saving() {
                return;
            }
            status.set(SaveStatus::Saving);
            let (backend, cancel) = (backend.clone(), cancel.clone());
            let (catalog, status) = (catalog.clone(), status.clone());
            let items = catalog.to_vec();
            wasm_bindgen_futures::spawn_local(async move {
                let result = backend.save_all(items).await;
                if cancel.is_cancelled() {
                    return;
                }
                let banner =
                    SaveStatus::settle(&result, |_| SAVED_MESSAGE.to_string(), "Error saving items");
                if let Ok(saved) = result {
                    let mut next = (*catalog).clone();
                    next.replace(saved);
                    catalog.set(next);
                }
                status.set(banner);
            });
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };
    let on_draft = {
        let (draft, form_error) = (draft.clone(), form_error.clone());
        Callback::from(move |next: ShopItemDraft| {
            form_error.set(None);
            draft.set(next);
        })
    };

    let list = if *loading && catalog.is_empty() {
        html! { <Loading block={true} label="Loading shop items..." /> }
    } else if catalog.is_empty() && !*adding {
        html! {
            <Alert variant={DaisyColor::Info} class="shop-empty">
                {"No items currently in the shop. Add a new item to begin, then save all changes."}
            </Alert>
        }
    } else {
        html! {
            <div id="shop-items" class="space-y-4">
                { for catalog.items().iter().map(|item| html! {
                    <ShopItemCard
                        key={item.key().unwrap_or(item.item_name.as_str()).to_string()}
                        item={item.clone()}
                        disabled={busy}
                        on_remove={on_remove.clone()}
                    />
                }) }
            </div>
        }
    };

    html! {
        <div class="space-y-6" id="shop-setup">
            <SaveBanner status={(*status).clone()} saving_label="Saving shop items..." on_dismiss={on_dismiss} />
            <Card
                title="Shop Setup"
                subtitle="Items available for purchase in the bot's shop"
                header_actions={html! {
                    <>
                        <Button
                            id="toggle-add-item"
                            outline={true}
                            disabled={busy}
                            label={if *adding { "Cancel Adding Item" } else { "Add New Shop Item" }}
                            onclick={on_toggle_form}
                        />
                        <Button
                            id="save-shop"
                            variant={DaisyColor::Primary}
                            busy={status.is_saving()}
                            disabled={busy || catalog.is_empty()}
                            label={format!("Save All ({})", catalog.len())}
                            onclick={on_save_all}
                        />
                    </>
                }}
            >
                if *adding {
                    <AddItemForm
                        draft={(*draft).clone()}
                        error={(*form_error).clone()}
                        on_change={on_draft}
                        on_submit={on_add}
                    />
                }
                { list }
            </Card>
        </div>
    }
}
