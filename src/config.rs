use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

pub const CONSENT_STORAGE_KEY: &str = "flowlocal-cookie-consent";
pub const BANNER_DELAY_MS: u32 = 1500;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const VOICE_FALLBACK_URL: &str = "https://www.flow-local.com";
pub const PRICING_MESSAGE: &str = "Professional £300/mo (setup waived for first 10 Belfast businesses). Premium £450/mo with unlimited AI and WhatsApp.";
// Placeholders; production pages set real ids through #page-config.
pub const ANALYTICS_ID: &str = "G-XXXXXXXXXX";
pub const PIXEL_ID: &str = "000000000000000";

/// Id of the optional `<script type="application/json">` block that overrides
/// the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub storage_key: String,
    pub banner_delay_ms: u32,
    pub resize_debounce_ms: u32,
    /// Empty disables the analytics tag.
    pub analytics_id: String,
    /// Empty disables the pixel.
    pub pixel_id: String,
    pub voice_fallback_url: String,
    pub pricing_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: CONSENT_STORAGE_KEY.to_string(),
            banner_delay_ms: BANNER_DELAY_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            analytics_id: ANALYTICS_ID.to_string(),
            pixel_id: PIXEL_ID.to_string(),
            voice_fallback_url: VOICE_FALLBACK_URL.to_string(),
            pricing_message: PRICING_MESSAGE.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_document(document: &Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let raw = element.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn overrides_selected_fields() {
        let config =
            PageConfig::from_json(r#"{"analyticsId": "G-TEST", "bannerDelayMs": 0}"#).unwrap();
        assert_eq!(config.analytics_id, "G-TEST");
        assert_eq!(config.banner_delay_ms, 0);
        assert_eq!(config.storage_key, CONSENT_STORAGE_KEY);
        assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PageConfig::from_json("{analyticsId:").is_err());
        assert!(PageConfig::from_json(r#"{"bannerDelayMs": "soon"}"#).is_err());
    }
}
