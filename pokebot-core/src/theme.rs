//! Colour palettes, shade generation and UI appearance preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SHADE_COUNT: usize = 9;
const FALLBACK_SHADE: &str = "#808080";

/// Parse `#rgb` or `#rrggbb`.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let mut chars = digits.chars().map(|c| c.to_string().repeat(2));
            Some((
                channel(&chars.next()?)?,
                channel(&chars.next()?)?,
                channel(&chars.next()?)?,
            ))
        }
        6 if digits.is_ascii() => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

#[must_use]
pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `count` shades keyed 100, 200, ... The middle entry is the input colour;
/// lower keys are lighter, higher keys darker, 15% per step. Invalid input
/// yields `#808080` for every key.
#[must_use]
pub fn generate_shades(hex: &str, count: usize) -> Vec<(u16, String)> {
    let key = |i: usize| u16::try_from((i + 1) * 100).unwrap_or(u16::MAX);
    let Some(rgb) = parse_hex(hex) else {
        log::warn!("Invalid hex colour for shade generation: {hex}");
        return (0..count).map(|i| (key(i), FALLBACK_SHADE.to_string())).collect();
    };
    let middle = count / 2;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let factor = (i as f64 - middle as f64) * 0.15;
            let scale = |c: u8| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let scaled = (f64::from(c) * (1.0 - factor)).round().clamp(0.0, 255.0) as u8;
                scaled
            };
            (key(i), to_hex((scale(rgb.0), scale(rgb.1), scale(rgb.2))))
        })
        .collect()
}

/// Black or white, whichever reads better on `background`.
#[must_use]
pub fn contrasting_text_color(background: &str) -> Option<&'static str> {
    let (r, g, b) = parse_hex(background)?;
    let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    Some(if luminance > 0.5 { "#000000" } else { "#FFFFFF" })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteField {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl PaletteField {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Text,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary Color",
            Self::Secondary => "Secondary Color",
            Self::Accent => "Accent Color",
            Self::Background => "Background Color",
            Self::Text => "Text Color",
        }
    }

    /// Whether the field also gets a 100..900 shade scale.
    #[must_use]
    pub const fn has_shades(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary | Self::Accent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#10b981".to_string(),
            background: "#f3f4f6".to_string(),
            text: "#111827".to_string(),
        }
    }
}

impl ColorPalette {
    /// Defaults with the background and text preset for `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        let mut palette = Self::default();
        palette.apply_mode_preset(mode);
        palette
    }

    pub fn apply_mode_preset(&mut self, mode: ThemeMode) {
        let (background, text) = match mode {
            ThemeMode::Dark => ("#0f172a", "#f1f5f9"),
            ThemeMode::Light => ("#f8fafc", "#0f172a"),
        };
        self.background = background.to_string();
        self.text = text.to_string();
    }

    #[must_use]
    pub fn get(&self, field: PaletteField) -> &str {
        match field {
            PaletteField::Primary => &self.primary,
            PaletteField::Secondary => &self.secondary,
            PaletteField::Accent => &self.accent,
            PaletteField::Background => &self.background,
            PaletteField::Text => &self.text,
        }
    }

    pub fn set(&mut self, field: PaletteField, value: &str) {
        let slot = match field {
            PaletteField::Primary => &mut self.primary,
            PaletteField::Secondary => &mut self.secondary,
            PaletteField::Accent => &mut self.accent,
            PaletteField::Background => &mut self.background,
            PaletteField::Text => &mut self.text,
        };
        *slot = value.to_string();
    }

    /// CSS custom properties: `--color-{name}` for every field plus
    /// `--color-{name}-{100..900}` for the shaded ones. Blank fields are skipped.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        for field in PaletteField::ALL {
            let value = self.get(field);
            if value.is_empty() {
                continue;
            }
            vars.push((format!("--color-{}", field.key()), value.to_string()));
            if field.has_shades() {
                vars.extend(
                    generate_shades(value, SHADE_COUNT)
                        .into_iter()
                        .map(|(key, shade)| (format!("--color-{}-{key}", field.key()), shade)),
                );
            }
        }
        vars
    }
}

/// The applied light/dark mode, stored under the `theme` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored value wins, otherwise follow the system.
    #[must_use]
    pub fn resolve(stored: Option<Self>, system_dark: bool) -> Self {
        stored.unwrap_or(if system_dark { Self::Dark } else { Self::Light })
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme choice on the customize page, including "follow the system".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
            Self::System => "System Preference",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }

    #[must_use]
    pub const fn mode(self, system_dark: bool) -> ThemeMode {
        match self {
            Self::Light => ThemeMode::Light,
            Self::Dark => ThemeMode::Dark,
            Self::System if system_dark => ThemeMode::Dark,
            Self::System => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Base,
    Lg,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Sm, Self::Base, Self::Lg];

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sm => "Small",
            Self::Base => "Medium (Default)",
            Self::Lg => "Large",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    pub const ALL: [Self; 3] = [Self::Compact, Self::Comfortable, Self::Spacious];

    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
            Self::Spacious => "spacious",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Comfortable => "Comfortable (Default)",
            Self::Spacious => "Spacious",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiPreferences {
    pub theme: ThemePreference,
    pub font_size: FontSize,
    #[serde(rename = "layoutDensity")]
    pub density: Density,
    pub primary_color: String,
    pub show_tooltips: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            font_size: FontSize::Base,
            density: Density::Comfortable,
            primary_color: "#3b82f6".to_string(),
            show_tooltips: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shades_center_on_the_input_colour() {
        let shades = generate_shades("#3b82f6", SHADE_COUNT);
        assert_eq!(shades.len(), 9);
        assert_eq!(shades[4], (500, "#3b82f6".to_string()));
        assert_eq!(shades[0].0, 100);
        assert_eq!(shades[8].0, 900);
        // 0x3b * 1.6 = 94.4, 0x82 * 1.6 = 208, 0xf6 * 1.6 clamps to 255
        assert_eq!(shades[0].1, "#5ed0ff");
        // 0x3b * 0.4 = 23.6, 0x82 * 0.4 = 52, 0xf6 * 0.4 = 98.4
        assert_eq!(shades[8].1, "#183462");
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(generate_shades("#000", 9)[0].1, "#000000");
    }

    #[test]
    fn invalid_input_yields_grey() {
        for bad in ["", "3b82f6", "#12", "#zzzzzz", "#1234567"] {
            let shades = generate_shades(bad, SHADE_COUNT);
            assert_eq!(shades.len(), 9);
            assert!(shades.iter().all(|(_, shade)| shade == "#808080"), "{bad}");
        }
    }

    #[test]
    fn css_variables_cover_fields_and_shades() {
        let vars = ColorPalette::default().css_variables();
        assert_eq!(vars.len(), 5 + 3 * 9);
        assert!(vars.contains(&("--color-text".to_string(), "#111827".to_string())));
        assert!(vars.iter().any(|(name, _)| name == "--color-accent-900"));
        assert!(!vars.iter().any(|(name, _)| name == "--color-background-100"));
    }

    #[test]
    fn mode_presets_and_contrast() {
        let dark = ColorPalette::for_mode(ThemeMode::Dark);
        assert_eq!(dark.background, "#0f172a");
        assert_eq!(dark.text, "#f1f5f9");
        assert_eq!(contrasting_text_color("#ffffff"), Some("#000000"));
        assert_eq!(contrasting_text_color("#0f172a"), Some("#FFFFFF"));
        assert_eq!(contrasting_text_color("blue"), None);
    }

    #[test]
    fn theme_mode_resolution() {
        assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(Some(ThemeMode::Light), true), ThemeMode::Light);
        assert_eq!(ThemePreference::System.mode(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn ui_preferences_use_browser_key_names() {
        let json = serde_json::to_value(UiPreferences::default()).unwrap();
        assert_eq!(json["theme"], "system");
        assert_eq!(json["fontSize"], "base");
        assert_eq!(json["layoutDensity"], "comfortable");
        let partial: UiPreferences = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(partial.theme, ThemePreference::Dark);
        assert!(partial.show_tooltips);
    }
}
