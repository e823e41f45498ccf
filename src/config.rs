//! Page Configuration
//!
//! `index.html` may define `window.FWCONSOLE_CONFIG` before the wasm module
//! loads. A missing object means defaults.

use fwconsole_core::ConsoleConfig;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "FWCONSOLE_CONFIG";

/// Read the page configuration; `Err` carries why the object was unusable
pub fn load_config() -> Result<ConsoleConfig, String> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(ConsoleConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// `scheme://host:port` of the page, empty outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
