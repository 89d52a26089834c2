#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod storage;

/// Title injected into the document head at startup.
pub const PAGE_TITLE: &str = "For my cutest flower";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    dom::set_document_title(PAGE_TITLE);
    yew::Renderer::<app::App>::new().render();
}
