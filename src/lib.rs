#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod motion;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("couldn't initialize browser logging");
    if let Err(err) = crate::config::email_config() {
        log::error!("contact delivery disabled: {err}");
    }
    if let Err(err) = crate::config::chat_config() {
        log::warn!("chat assistant disabled: {err}");
    }
    leptos::mount::hydrate_body(App);
}
