use crate::app::ThemeContext;
use crate::app::bootstrap::apply_ui_preferences;
use crate::components::SaveBanner;
use crate::components::daisy_ui::{Button, Card, DaisyColor, Input, Select, SelectOption, Toggle};
use crate::dom;
use crate::storage;
use pokebot_core::SaveStatus;
use pokebot_core::theme::{Density, FontSize, ThemePreference, UiPreferences};
use yew::prelude::*;

const SAVED_MESSAGE: &str = "Customization settings saved!";

fn options<T: Copy>(
    all: &[T],
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter()
        .map(|item| SelectOption::new(value(*item), label(*item)))
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct CustomizeFormProps {
    pub prefs: UiPreferences,
    pub on_change: Callback<UiPreferences>,
}

/// The preference controls. Every edit emits the whole updated document.
#[function_component(CustomizeForm)]
pub fn customize_form(p: &CustomizeFormProps) -> Html {
    let update = |apply: fn(&mut UiPreferences, &str)| {
        let prefs = p.prefs.clone();
        let cb = p.on_change.clone();
        Callback::from(move |value: AttrValue| {
            let mut next = prefs.clone();
            apply(&mut next, &value);
            cb.emit(next);
        })
    };
    let on_theme = update(|prefs, v| {
        if let Some(theme) = ThemePreference::from_value(v) {
            prefs.theme = theme;
        }
    });
    let on_font = update(|prefs, v| {
        if let Some(size) = FontSize::from_value(v) {
            prefs.font_size = size;
        }
    });
    let on_density = update(|prefs, v| {
        if let Some(density) = Density::from_value(v) {
            prefs.density = density;
        }
    });
    let on_color = update(|prefs, v| prefs.primary_color = v.to_string())
        .reform(|v: String| AttrValue::from(v));
    let on_tooltips = {
        let prefs = p.prefs.clone();
        let cb = p.on_change.clone();
        Callback::from(move |show_tooltips: bool| {
            cb.emit(UiPreferences {
                show_tooltips,
                ..prefs.clone()
            });
        })
    };

    html! {
        <div class="grid gap-4 md:grid-cols-2">
            <label class="form-control">
                <span class="label-text">{"Theme"}</span>
                <Select
                    id="theme-preference"
                    options={options(&ThemePreference::ALL, ThemePreference::value, ThemePreference::label)}
                    value={AttrValue::from(p.prefs.theme.value())}
                    on_change={on_theme}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"Font Size"}</span>
                <Select
                    id="font-size"
                    options={options(&FontSize::ALL, FontSize::value, FontSize::label)}
                    value={AttrValue::from(p.prefs.font_size.value())}
                    on_change={on_font}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"Layout Density"}</span>
                <Select
                    id="layout-density"
                    options={options(&Density::ALL, Density::value, Density::label)}
                    value={AttrValue::from(p.prefs.density.value())}
                    on_change={on_density}
                />
            </label>
            <label class="form-control">
                <span class="label-text">{"Primary Color"}</span>
                <div class="flex items-center gap-2">
                    <Input
                        id="primary-color"
                        input_type="color"
                        class="h-10 w-16 p-1"
                        value={AttrValue::from(p.prefs.primary_color.clone())}
                        oninput={on_color.clone()}
                    />
                    <Input
                        class="font-mono"
                        value={AttrValue::from(p.prefs.primary_color.clone())}
                        oninput={on_color}
                    />
                </div>
            </label>
            <Toggle
                id="show-tooltips"
                label="Show tooltips"
                checked={p.prefs.show_tooltips}
                on_toggle={on_tooltips}
            />
        </div>
    }
}

#[function_component(CustomizePage)]
pub fn customize_page() -> Html {
    let prefs = use_state(UiPreferences::default);
    let status = use_state(SaveStatus::default);
    let theme = use_context::<ThemeContext>();

    {
        let (prefs, status) = (prefs.clone(), status.clone());
        use_effect_with((), move |()| {
            match storage::preferences().ui_preferences() {
                Ok(stored) => prefs.set(stored),
                Err(err) => {
                    log::error!("Could not load UI preferences: {err}");
                    status.set(SaveStatus::Failed(format!("Could not load UI preferences: {err}")));
                }
            }
            || {}
        });
    }

    let on_change = {
        let prefs = prefs.clone();
        let status = status.clone();
        Callback::from(move |next: UiPreferences| {
            status.set(SaveStatus::Idle);
            prefs.set(next);
        })
    };
    let on_save = {
        let prefs = prefs.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            apply_ui_preferences(&prefs);
            if let Some(ctx) = &theme {
                ctx.set_mode.emit(prefs.theme.mode(dom::prefers_dark()));
            }
            let result = storage::preferences().save_ui_preferences(&prefs);
            if result.is_ok() {
                log::info!("UI preferences saved");
            }
            status.set(SaveStatus::settle(
                &result,
                |_| SAVED_MESSAGE.to_string(),
                "Error saving customization",
            ));
        })
    };
    let on_reset = {
        let prefs = prefs.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(SaveStatus::Idle);
            prefs.set(UiPreferences::default());
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };

    html! {
        <div class="space-y-6" id="customize">
            <SaveBanner status={(*status).clone()} on_dismiss={on_dismiss} />
            <Card
                title="UI Customization"
                subtitle="Adjust how the dashboard looks on this device"
                actions={html! {
                    <>
                        <Button variant={DaisyColor::Ghost} label="Reset to Defaults" onclick={on_reset} />
                        <Button id="save-customize" variant={DaisyColor::Primary} label="Save Changes" onclick={on_save} />
                    </>
                }}
            >
                <CustomizeForm prefs={(*prefs).clone()} on_change={on_change} />
            </Card>
        </div>
    }
}
