//! Boardly UI entry point for WASM.

#![no_main]

use boardly_ui::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Mounts the Boardly topbar once the WASM module loads.
///
/// `index.html` shows a `#loading` placeholder until this runs.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Some(loading) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("loading"))
    {
        loading.remove();
    }

    // The host page has no session wiring yet; the topbar infers login state
    // from the location.
    mount_to_body(|| view! { <App /> });
}
