#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod navigation;
pub mod particles;
pub mod portfolio;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // already set when the bundle is reloaded in place
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
