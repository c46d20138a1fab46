//! Dark/light theme controller for a server-rendered page.
//!
//! The page persists a single boolean preference in localStorage, mirrors
//! it as a marker class on the body, injects the dark-mode stylesheet once,
//! and flips state from an optional toggle button. The controller itself is
//! browser-free: it talks to [`PreferenceStore`] and [`DomPort`] seams, and
//! the wasm entry point binds those to localStorage and the live document.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod config;
mod controller;
mod ports;
#[cfg(test)]
mod test_support;

pub use config::ThemeOptions;
pub use controller::{Theme, ThemeController, MOON_ICON, SUN_ICON};
pub use ports::{DomPort, PreferenceStore};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("theme-manager starting");

    browser::run_when_ready(|| {
        ThemeController::new(browser::LocalStorage::new(), browser::BrowserDom::new())
            .initialize();
    });
}
