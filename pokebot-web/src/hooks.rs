//! Component-lifetime helpers for async work.

use crate::api::PokeApi;
use crate::storage::use_backend;
use pokebot_core::ChannelLoad;
use pokebot_core::pokedex::{CancelToken, RequestGate};
use pokebot_core::steps::{StepNavigator, WizardStep};
use std::marker::PhantomData;
use std::rc::Rc;
use yew::prelude::*;

/// A token cancelled when the calling component unmounts. Async tasks check
/// it before touching component state.
#[hook]
pub fn use_cancel_token() -> CancelToken {
    let token = use_memo((), |()| CancelToken::new());
    {
        let token = (*token).clone();
        use_effect_with((), move |()| move || token.cancel());
    }
    (*token).clone()
}

/// Ticket source for a selection whose fetch may be overtaken by a newer one.
#[hook]
pub fn use_request_gate() -> RequestGate {
    (*use_memo((), |()| RequestGate::new())).clone()
}

/// A PokeAPI client whose in-flight requests are aborted on unmount.
#[hook]
pub fn use_poke_api() -> Rc<PokeApi> {
    let api = use_memo((), |()| PokeApi::new());
    {
        let api = Rc::clone(&api);
        use_effect_with((), move |()| move || api.abort());
    }
    api
}

/// Channel list for a wizard page, fetched on mount, plus a retry callback.
#[hook]
pub fn use_channels() -> (ChannelLoad, Callback<()>) {
    let backend = use_backend();
    let cancel = use_cancel_token();
    let load = use_state(ChannelLoad::default);
    let fetch = {
        let load = load.clone();
        Callback::from(move |()| {
            load.set(ChannelLoad::Loading);
            let (backend, cancel, load) = (backend.clone(), cancel.clone(), load.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = ChannelLoad::fetch(&*backend).await;
                if !cancel.is_cancelled() {
                    load.set(result);
                }
            });
        })
    };
    {
        let fetch = fetch.clone();
        use_effect_with((), move |()| {
            fetch.emit(());
            || {}
        });
    }
    ((*load).clone(), fetch)
}

/// Step cursor for one of the configuration wizards.
pub struct WizardHandle<S> {
    nav: UseStateHandle<StepNavigator>,
    _steps: PhantomData<S>,
}

impl<S> Clone for WizardHandle<S> {
    fn clone(&self) -> Self {
        Self {
            nav: self.nav.clone(),
            _steps: PhantomData,
        }
    }
}

impl<S: WizardStep> WizardHandle<S> {
    /// The current step. Only `None` for a wizard with no steps.
    #[must_use]
    pub fn step(&self) -> Option<S> {
        S::from_index(self.nav.current())
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.nav.current()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.nav.is_first()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.nav.is_last()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<AttrValue> {
        S::labels().into_iter().map(AttrValue::from).collect()
    }

    fn update(&self, apply: impl Fn(&mut StepNavigator) + 'static) -> Callback<()> {
        let nav = self.nav.clone();
        Callback::from(move |()| {
            let mut next = *nav;
            apply(&mut next);
            nav.set(next);
        })
    }

    /// Advances. Callers gate this on the current step's own check.
    #[must_use]
    pub fn next(&self) -> Callback<()> {
        self.update(StepNavigator::next)
    }

    #[must_use]
    pub fn back(&self) -> Callback<()> {
        self.update(StepNavigator::previous)
    }

    #[must_use]
    pub fn select(&self) -> Callback<usize> {
        let nav = self.nav.clone();
        Callback::from(move |index: usize| {
            let mut next = *nav;
            next.go_to(index);
            nav.set(next);
        })
    }

    pub fn reset(&self) {
        self.nav.set(S::navigator());
    }
}

#[hook]
pub fn use_wizard<S: WizardStep>() -> WizardHandle<S> {
    WizardHandle {
        nav: use_state(S::navigator),
        _steps: PhantomData,
    }
}
