#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init();
    // Stored theme and palette go on <html> before the first paint.
    app::bootstrap::apply_stored_appearance();
    log::info!("PokéBot dashboard starting");
    yew::Renderer::<app::App>::new().render();
}
