//! Firewall Console Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use fwconsole_core::ConsoleConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };
    if let Err(e) = console_logger::init_logger("fwconsole", config.level()) {
        web_sys::console::error_1(&format!("logger already installed: {}", e).into());
    }
    if let Some(problem) = problem {
        warn!("ignoring {}: {}", config::CONFIG_GLOBAL, problem);
    }
    info!("starting console, api base {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
