pub use wasm_bindgen::JsCast;
pub use web_sys::{
    Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent,
};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DaisyColor {
    Neutral,
    #[default]
    Primary,
    Secondary,
    Accent,
    Ghost,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Ghost => "ghost",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaisySize {
    Xs,
    Sm,
    Md,
    Lg,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

/// `change` handler for a checkbox input that reports its checked state.
#[must_use]
pub fn checked_callback(on_toggle: &Callback<bool>) -> Callback<Event> {
    let on_toggle = on_toggle.clone();
    Callback::from(move |e: Event| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            on_toggle.emit(input.checked());
        }
    })
}

/// Inline style for a solid swatch, e.g. a type badge or palette chip.
#[must_use]
pub fn swatch_style(background: &str, text: Option<&str>) -> AttrValue {
    text.map_or_else(
        || format!("background-color: {background};").into(),
        |text| format!("background-color: {background}; color: {text};").into(),
    )
}

/// Inline width for bar charts; `percent` is clamped to 0..=100.
#[must_use]
pub fn width_style(percent: f64) -> AttrValue {
    format!("width: {:.0}%;", percent.clamp(0.0, 100.0)).into()
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, DaisySize, attr_value, class_list, swatch_style, width_style};
    use yew::Classes;

    #[test]
    fn daisy_color_classes_include_prefix_and_suffix() {
        assert_eq!(DaisyColor::Ghost.class("btn"), "btn-ghost");
        assert_eq!(DaisyColor::Error.class("alert"), "alert-error");
        assert_eq!(DaisyColor::default().class("badge"), "badge-primary");
    }

    #[test]
    fn daisy_size_classes_include_prefix_and_suffix() {
        assert_eq!(DaisySize::Sm.class("btn"), "btn-sm");
        assert_eq!(DaisySize::Lg.class("loading"), "loading-lg");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["btn", "btn-primary"], &extra).to_string();
        assert!(rendered.contains("btn-primary"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("test"));
        assert_eq!(attr_value(&value).as_deref(), Some("test"));
    }

    #[test]
    fn style_helpers_format_css() {
        assert_eq!(
            swatch_style("#F08030", Some("#FFFFFF")).as_str(),
            "background-color: #F08030; color: #FFFFFF;"
        );
        assert_eq!(width_style(150.0).as_str(), "width: 100%;");
        assert_eq!(width_style(42.4).as_str(), "width: 42%;");
    }
}
