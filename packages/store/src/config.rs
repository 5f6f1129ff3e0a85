//! # Client configuration: `taskdeck.toml`
//!
//! Defines the TOML document bundled with the web client. It tells the client
//! where the task API lives and how long transient banners stay on screen.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # scheme + host + port, no trailing /api
//!
//! [ui]
//! success_banner_ms = 3000             # how long success banners stay visible
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers (`new`, `with_banner_ms`), TOML (de)serialisation, and the canonical filename constant. |
//! | [`ApiConfig`] | API section: the REST base address. |
//! | [`UiConfig`] | UI section: the success banner delay, default **3000 ms**. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// REST API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Presentation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Milliseconds before a success banner clears itself.
    #[serde(default = "default_success_banner_ms")]
    pub success_banner_ms: u32,
}

fn default_success_banner_ms() -> u32 {
    3000
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            success_banner_ms: default_success_banner_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ui: UiConfig::default(),
        }
    }

    /// Builder method to set the success banner delay.
    pub fn with_banner_ms(mut self, ms: u32) -> Self {
        self.ui.success_banner_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskdeck.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
