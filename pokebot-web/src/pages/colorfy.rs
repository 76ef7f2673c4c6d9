use crate::app::bootstrap::{apply_palette, stored_theme};
use crate::components::SaveBanner;
use crate::components::daisy_ui::foundation::swatch_style;
use crate::components::daisy_ui::{Button, Card, DaisyColor, Input};
use crate::storage;
use pokebot_core::SaveStatus;
use pokebot_core::theme::{
    ColorPalette, PaletteField, SHADE_COUNT, contrasting_text_color, generate_shades,
};
use yew::prelude::*;

const SAVED_MESSAGE: &str = "Color palette saved!";

#[derive(Properties, PartialEq, Clone)]
pub struct ColorFieldProps {
    pub field: PaletteField,
    pub value: AttrValue,
    /// Receives the field and its new hex value.
    pub on_change: Callback<(PaletteField, String)>,
}

/// Picker, hex input and, for shaded fields, the generated 100..900 scale.
#[function_component(ColorField)]
pub fn color_field(p: &ColorFieldProps) -> Html {
    let field = p.field;
    let id = format!("color-{}", field.key());
    let oninput = p.on_change.reform(move |value: String| (field, value));
    html! {
        <div class="color-field space-y-2">
            <label class="label-text font-semibold" for={id.clone()}>{ field.label() }</label>
            <div class="flex items-center gap-2">
                <Input
                    id={id}
                    input_type="color"
                    class="h-10 w-16 p-1"
                    value={p.value.clone()}
                    oninput={oninput.clone()}
                />
                <Input class="font-mono" value={p.value.clone()} oninput={oninput} />
            </div>
            if field.has_shades() {
                <div class="flex overflow-hidden rounded" aria-label={format!("{} shades", field.label())}>
                    { for generate_shades(&p.value, SHADE_COUNT).into_iter().map(|(key, shade)| html! {
                        <div
                            class="shade flex h-8 flex-1 items-center justify-center text-[10px]"
                            style={swatch_style(&shade, contrasting_text_color(&shade))}
                            title={shade.clone()}
                        >
                            { key }
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PalettePreviewProps {
    pub palette: ColorPalette,
}

#[function_component(PalettePreview)]
pub fn palette_preview(p: &PalettePreviewProps) -> Html {
    let palette = &p.palette;
    let surface = format!(
        "background-color: {}; color: {};",
        palette.background, palette.text
    );
    let chip = |field: PaletteField| {
        let color = palette.get(field).to_string();
        html! {
            <span
                class="rounded px-3 py-1 text-sm"
                style={swatch_style(&color, contrasting_text_color(&color))}
            >
                { field.label() }
            </span>
        }
    };
    html! {
        <div id="palette-preview" class="space-y-3 rounded-lg p-4" style={surface}>
            <h3 class="text-lg font-bold">{"Preview"}</h3>
            <p>{"This is how your dashboard text reads on the chosen background."}</p>
            <div class="flex flex-wrap gap-2">
                { chip(PaletteField::Primary) }
                { chip(PaletteField::Secondary) }
                { chip(PaletteField::Accent) }
            </div>
        </div>
    }
}

#[function_component(ColorfyPage)]
pub fn colorfy_page() -> Html {
    let palette = use_state(ColorPalette::default);
    let status = use_state(SaveStatus::default);

    {
        let (palette, status) = (palette.clone(), status.clone());
        use_effect_with((), move |()| {
            let loaded = match storage::preferences().palette() {
                Ok(Some(stored)) => stored,
                Ok(None) => ColorPalette::for_mode(stored_theme()),
                Err(err) => {
                    log::error!("Could not load palette: {err}");
                    status.set(SaveStatus::Failed(format!("Could not load palette: {err}")));
                    ColorPalette::for_mode(stored_theme())
                }
            };
            palette.set(loaded);
            || {}
        });
    }
    {
        use_effect_with((*palette).clone(), |palette| {
            apply_palette(palette);
            || {}
        });
    }

    let on_change = {
        let palette = palette.clone();
        let status = status.clone();
        Callback::from(move |(field, value): (PaletteField, String)| {
            let mut next = (*palette).clone();
            next.set(field, &value);
            status.set(SaveStatus::Idle);
            palette.set(next);
        })
    };
    let on_preset = {
        let palette = palette.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*palette).clone();
            next.apply_mode_preset(stored_theme());
            palette.set(next);
        })
    };
    let on_reset = {
        let palette = palette.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            status.set(SaveStatus::Idle);
            palette.set(ColorPalette::default());
        })
    };
    let on_save = {
        let palette = palette.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let result = storage::preferences().save_palette(&palette);
            status.set(SaveStatus::settle(
                &result,
                |_| SAVED_MESSAGE.to_string(),
                "Error saving palette",
            ));
        })
    };
    let on_dismiss = {
        let status = status.clone();
        Callback::from(move |()| status.set(SaveStatus::Idle))
    };

    html! {
        <div class="space-y-6" id="colorfy">
            <SaveBanner status={(*status).clone()} on_dismiss={on_dismiss} />
            <div class="grid gap-6 lg:grid-cols-2">
                <Card
                    title="Color Palette"
                    header_actions={html! {
                        <Button
                            id="apply-preset"
                            outline={true}
                            label="Apply Theme Preset"
                            onclick={on_preset}
                        />
                    }}
                    actions={html! {
                        <>
                            <Button variant={DaisyColor::Ghost} label="Reset" onclick={on_reset} />
                            <Button id="save-palette" variant={DaisyColor::Primary} label="Save Palette" onclick={on_save} />
                        </>
                    }}
                >
                    { for PaletteField::ALL.into_iter().map(|field| html! {
                        <ColorField
                            field={field}
                            value={AttrValue::from(palette.get(field).to_string())}
                            on_change={on_change.clone()}
                        />
                    }) }
                </Card>
                <Card title="Live Preview">
                    <PalettePreview palette={(*palette).clone()} />
                </Card>
            </div>
        </div>
    }
}
