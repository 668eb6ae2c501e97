//! Site settings
//!
//! Read from an optional JSON block in the page:
//! `<script id="site-settings" type="application/json">{...}</script>`.
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::POSTS_STORAGE_KEY;

/// How navigation buttons scroll to their section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "smooth" => Some(ScrollBehavior::Smooth),
            "instant" | "auto" => Some(ScrollBehavior::Instant),
            _ => None,
        }
    }
}

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// LocalStorage key for posts
    pub posts_key: String,
    /// Scrolling used by navigation buttons
    pub scroll_behavior: ScrollBehavior,
    /// Console log level (`error` .. `trace`)
    pub log_level: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            posts_key: POSTS_STORAGE_KEY.to_string(),
            scroll_behavior: ScrollBehavior::Smooth,
            log_level: "info".to_string(),
        }
    }
}

impl SiteSettings {
    /// Parse settings JSON, falling back to defaults if it is malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<SiteSettings>(json) {
            Ok(mut settings) => {
                if settings.posts_key.trim().is_empty() {
                    log::warn!("Empty posts key in settings, using default");
                    settings.posts_key = POSTS_STORAGE_KEY.to_string();
                }
                settings
            }
            Err(e) => {
                log::warn!("Invalid site settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Configured log level, `Info` if unrecognized
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::consts::ids::SETTINGS))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
