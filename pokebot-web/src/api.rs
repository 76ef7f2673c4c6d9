//! PokeAPI client over `fetch`, cancellable through an `AbortController`.

use crate::dom;
use pokebot_core::pokedex::api::{
    EvolutionChain, GenerationDetail, MoveDetail, PokemonDetail, PokemonSpecies, ResourceList,
    generation_list_url, move_url, pokemon_count_url, pokemon_list_url, pokemon_url,
};
use pokebot_core::pokedex::COUNT_UNAVAILABLE_MESSAGE;
use serde::de::DeserializeOwned;
use std::cell::{Cell, OnceCell};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, RequestInit, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("Request aborted")]
    Aborted,
    #[error("{0}")]
    Missing(&'static str),
}

impl ApiError {
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// One client per page. Unmounting the page calls [`PokeApi::abort`].
///
/// The `AbortController` is created on the first request so a client can be
/// built during server-side rendering.
pub struct PokeApi {
    controller: OnceCell<Option<AbortController>>,
    aborted: Cell<bool>,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApi {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            controller: OnceCell::new(),
            aborted: Cell::new(false),
        }
    }

    pub fn abort(&self) {
        self.aborted.set(true);
        if let Some(Some(controller)) = self.controller.get() {
            controller.abort();
        }
    }

    fn is_aborted(&self) -> bool {
        self.aborted.get()
    }

    fn controller(&self) -> Option<&AbortController> {
        self.controller
            .get_or_init(|| {
                AbortController::new()
                    .map_err(|err| {
                        log::warn!("AbortController unavailable: {}", dom::js_error_message(&err));
                    })
                    .ok()
            })
            .as_ref()
    }

    async fn fetch(&self, url: &str) -> Result<Response, ApiError> {
        if self.is_aborted() {
            return Err(ApiError::Aborted);
        }
        let window = dom::window().ok_or(ApiError::Missing("window unavailable"))?;
        let init = RequestInit::new();
        init.set_method("GET");
        if let Some(controller) = self.controller() {
            init.set_signal(Some(&controller.signal()));
        }
        let value = JsFuture::from(window.fetch_with_str_and_init(url, &init))
            .await
            .map_err(|err| {
                if self.is_aborted() {
                    ApiError::Aborted
                } else {
                    ApiError::Request(dom::js_error_message(&err))
                }
            })?;
        value
            .dyn_into::<Response>()
            .map_err(|err| ApiError::Request(dom::js_error_message(&err)))
    }

    /// GET `url` and decode the JSON body.
    ///
    /// # Errors
    /// Fails on network errors, non-2xx statuses, undecodable bodies, or abort.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let response = self.fetch(url).await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        let body = response
            .json()
            .map_err(|err| ApiError::Decode(dom::js_error_message(&err)))?;
        let json = JsFuture::from(body).await.map_err(|err| {
            if self.is_aborted() {
                ApiError::Aborted
            } else {
                ApiError::Decode(dom::js_error_message(&err))
            }
        })?;
        serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn generations(&self) -> Result<ResourceList, ApiError> {
        self.get_json(&generation_list_url()).await
    }

    /// Species names of one generation, lowercased.
    ///
    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn generation_species(&self, url: &str) -> Result<Vec<String>, ApiError> {
        let detail: GenerationDetail = self.get_json(url).await?;
        Ok(detail
            .pokemon_species
            .into_iter()
            .map(|s| s.name.to_lowercase())
            .collect())
    }

    /// # Errors
    /// Fails as [`PokeApi::get_json`] does, or when the API reports no Pokémon.
    pub async fn pokemon_count(&self) -> Result<u32, ApiError> {
        let list: ResourceList = self.get_json(&pokemon_count_url()).await?;
        if list.count == 0 {
            return Err(ApiError::Missing(COUNT_UNAVAILABLE_MESSAGE));
        }
        Ok(list.count)
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn pokemon_list(&self, limit: u32) -> Result<ResourceList, ApiError> {
        self.get_json(&pokemon_list_url(limit)).await
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn pokemon_by_url(&self, url: &str) -> Result<PokemonDetail, ApiError> {
        self.get_json(url).await
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail, ApiError> {
        self.get_json(&pokemon_url(name)).await
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn species(&self, url: &str) -> Result<PokemonSpecies, ApiError> {
        self.get_json(url).await
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        self.get_json(url).await
    }

    /// # Errors
    /// See [`PokeApi::get_json`].
    pub async fn move_detail(&self, name: &str) -> Result<MoveDetail, ApiError> {
        self.get_json(&move_url(name)).await
    }
}
