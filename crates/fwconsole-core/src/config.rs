//! Console Configuration
//!
//! Settings the page can override through `window.FWCONSOLE_CONFIG`.
//! Every field has a default so a partial object is fine.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "/api".to_string()
}

fn default_tenant() -> String {
    "empresa_teste".to_string()
}

fn default_toast_ms() -> u32 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Absolute URL or path relative to the page origin
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Sent as `empresa` when creating entities
    #[serde(default = "default_tenant")]
    pub tenant: String,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            tenant: default_tenant(),
            toast_ms: default_toast_ms(),
            log_level: default_log_level(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute API base; relative bases are joined onto `origin`
    pub fn api_url(&self, origin: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        if base.starts_with("http://") || base.starts_with("https://") {
            return base.to_string();
        }
        let origin = origin.trim_end_matches('/');
        if base.starts_with('/') {
            format!("{}{}", origin, base)
        } else {
            format!("{}/{}", origin, base)
        }
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
