//! Appearance applied to `<html>`: light/dark class, palette variables and
//! the customize page's font size and density classes.

use crate::dom;
use crate::storage;
use pokebot_core::theme::{ColorPalette, Density, FontSize, ThemeMode, UiPreferences};

/// Toggle the `dark` class daisyUI and Tailwind key off.
pub fn apply_theme(mode: ThemeMode) {
    dom::set_root_class("dark", mode.is_dark());
    if let Some(root) = dom::root_element()
        && let Err(err) = root.set_attribute("data-theme", mode.as_str())
    {
        log::warn!("Failed to set data-theme: {}", dom::js_error_message(&err));
    }
}

pub fn apply_palette(palette: &ColorPalette) {
    for (name, value) in palette.css_variables() {
        dom::set_root_style(&name, &value);
    }
}

pub fn apply_ui_preferences(prefs: &UiPreferences) {
    apply_scale_classes(prefs);
    dom::set_root_style("--color-primary-custom", &prefs.primary_color);
    apply_theme(prefs.theme.mode(dom::prefers_dark()));
}

fn apply_scale_classes(prefs: &UiPreferences) {
    for size in FontSize::ALL {
        dom::set_root_class(&font_class(size), size == prefs.font_size);
    }
    for density in Density::ALL {
        dom::set_root_class(&density_class(density), density == prefs.density);
    }
}

fn font_class(size: FontSize) -> String {
    format!("font-size-{}", size.value())
}

fn density_class(density: Density) -> String {
    format!("density-{}", density.value())
}

/// Stored light/dark mode, else the system preference.
#[must_use]
pub fn stored_theme() -> ThemeMode {
    let stored = storage::preferences()
        .theme()
        .map_err(|err| log::warn!("Could not read theme: {err}"))
        .ok()
        .flatten();
    ThemeMode::resolve(stored, dom::prefers_dark())
}

/// Run once at start-up, before the first render.
pub fn apply_stored_appearance() {
    let prefs = storage::preferences();
    apply_theme(stored_theme());
    match prefs.palette() {
        Ok(Some(palette)) => apply_palette(&palette),
        Ok(None) => {}
        Err(err) => log::warn!("Could not read palette: {err}"),
    }
    match prefs.ui_preferences() {
        Ok(ui) => apply_scale_classes(&ui),
        Err(err) => log::warn!("Could not read UI preferences: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{density_class, font_class};
    use pokebot_core::theme::{Density, FontSize};

    #[test]
    fn root_classes_follow_preference_values() {
        assert_eq!(font_class(FontSize::Lg), "font-size-lg");
        assert_eq!(density_class(Density::Compact), "density-compact");
    }
}
