use leptos::*;

pub mod components;
pub mod config;
mod pages;
pub mod state;
#[cfg(test)]
mod test_support;

pub use components::filter_bar::{FilterBar, FilterField, FilterSetters};
pub use state::filters::{Category, DateFilter, StatusFilter};

use pages::DashboardPage;

#[cfg_attr(not(test), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting Expense Dashboard frontend (wasm)");

    mount_to_body(|| view! { <DashboardPage/> });
}
