use crate::app::bootstrap;
use crate::storage;
use pokebot_core::theme::ThemeMode;
use yew::prelude::*;

/// Current light/dark mode and a setter that applies and persists it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub set_mode: Callback<ThemeMode>,
}

impl ThemeContext {
    /// A context that never writes anywhere, for rendering outside the app shell.
    #[must_use]
    pub fn detached(mode: ThemeMode) -> Self {
        Self {
            mode,
            set_mode: Callback::noop(),
        }
    }
}

#[derive(Clone)]
pub struct ShellState {
    pub theme: UseStateHandle<ThemeMode>,
    pub sidebar_open: UseStateHandle<bool>,
    pub expanded_groups: UseStateHandle<Vec<&'static str>>,
}

#[hook]
pub fn use_shell_state() -> ShellState {
    let state = ShellState {
        theme: use_state(ThemeMode::default),
        sidebar_open: use_state(|| false),
        expanded_groups: use_state(Vec::new),
    };
    {
        let theme = state.theme.clone();
        use_effect_with((), move |()| {
            theme.set(bootstrap::stored_theme());
            || {}
        });
    }
    state
}

impl ShellState {
    #[must_use]
    pub fn theme_context(&self) -> ThemeContext {
        let theme = self.theme.clone();
        ThemeContext {
            mode: *self.theme,
            set_mode: Callback::from(move |mode: ThemeMode| {
                bootstrap::apply_theme(mode);
                if let Err(err) = storage::preferences().set_theme(mode) {
                    log::error!("Could not store theme: {err}");
                }
                theme.set(mode);
            }),
        }
    }

    #[must_use]
    pub fn toggle_theme(&self) -> Callback<()> {
        let ctx = self.theme_context();
        Callback::from(move |()| ctx.set_mode.emit(ctx.mode.toggled()))
    }

    #[must_use]
    pub fn toggle_sidebar(&self) -> Callback<()> {
        let open = self.sidebar_open.clone();
        Callback::from(move |()| open.set(!*open))
    }

    #[must_use]
    pub fn close_sidebar(&self) -> Callback<()> {
        let open = self.sidebar_open.clone();
        Callback::from(move |()| open.set(false))
    }

    #[must_use]
    pub fn toggle_group(&self) -> Callback<&'static str> {
        let expanded = self.expanded_groups.clone();
        Callback::from(move |id: &'static str| {
            let mut next = (*expanded).clone();
            if let Some(pos) = next.iter().position(|group| *group == id) {
                next.remove(pos);
            } else {
                next.push(id);
            }
            expanded.set(next);
        })
    }
}
