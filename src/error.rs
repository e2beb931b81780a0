use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(&'static str),
    #[error("modal `{0}` has no close button")]
    MissingCloseButton(&'static str),
    #[error("local storage unavailable: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl PageError {
    /// Missing markup is expected on trimmed-down pages and only worth a
    /// debug line; everything else is a degraded page.
    pub fn log(&self, context: &str) {
        match self {
            PageError::MissingElement(_) => debug!("{}: {}", context, self),
            _ => warn!("{}: {}", context, self),
        }
    }
}

pub type Result<T, E = PageError> = std::result::Result<T, E>;
