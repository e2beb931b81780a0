use log::{debug, info, warn};
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use crate::config::PageConfig;
use crate::error::{PageError, Result};

pub const GTAG_LOADER_URL: &str = "https://www.googletagmanager.com/gtag/js";
pub const PIXEL_LOADER_URL: &str = "https://connect.facebook.net/en_US/fbevents.js";

pub const GTAG_LOADER_ID: &str = "tracking-gtag-loader";
pub const GTAG_CONFIG_ID: &str = "tracking-gtag-config";
pub const PIXEL_ID: &str = "tracking-meta-pixel";

/// One `<script>` to inject: either external (`src`) or inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub id: &'static str,
    pub src: Option<String>,
    pub inline: Option<String>,
}

/// A JS string literal holding `value`, quotes and escapes included.
fn js_string(value: &str) -> String {
    Value::from(value).to_string()
}

pub fn gtag_snippets(measurement_id: &str) -> Vec<Snippet> {
    let id = js_string(measurement_id);
    vec![
        Snippet {
            id: GTAG_LOADER_ID,
            src: Some(format!(
                "{}?id={}",
                GTAG_LOADER_URL,
                urlencoding::encode(measurement_id)
            )),
            inline: None,
        },
        Snippet {
            id: GTAG_CONFIG_ID,
            src: None,
            inline: Some(format!(
                "window.dataLayer = window.dataLayer || [];\
                 function gtag(){{dataLayer.push(arguments);}}\
                 gtag('js', new Date());\
                 gtag('config', {});",
                id
            )),
        },
    ]
}

pub fn pixel_snippet(pixel_id: &str) -> Snippet {
    let loader = js_string(PIXEL_LOADER_URL);
    let id = js_string(pixel_id);
    Snippet {
        id: PIXEL_ID,
        src: None,
        inline: Some(format!(
            "!function(f,b,e,v,n,t,s){{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?\
             n.callMethod.apply(n,arguments):n.queue.push(arguments)}};\
             if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\
             n.queue=[];t=b.createElement(e);t.async=!0;\
             t.src=v;s=b.getElementsByTagName(e)[0];\
             s.parentNode.insertBefore(t,s)}}(window,document,'script',{});\
             fbq('init', {});\
             fbq('track', 'PageView');",
            loader, id
        )),
    }
}

/// Every snippet the consented page loads. An empty id skips that vendor.
pub fn tracking_snippets(config: &PageConfig) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    if config.analytics_id.is_empty() {
        warn!("No analytics id configured, skipping gtag");
    } else {
        snippets.extend(gtag_snippets(&config.analytics_id));
    }
    if config.pixel_id.is_empty() {
        warn!("No pixel id configured, skipping pixel");
    } else {
        snippets.push(pixel_snippet(&config.pixel_id));
    }
    snippets
}

/// Appends a script per snippet to `<head>`, skipping any whose id is
/// already in the document. Returns how many were added.
pub fn inject(document: &Document, snippets: &[Snippet]) -> Result<usize> {
    let head = document
        .head()
        .ok_or(PageError::MissingElement("head"))?;
    let mut added = 0;
    for snippet in snippets {
        if document.get_element_by_id(snippet.id).is_some() {
            debug!("Tracking snippet {} already present", snippet.id);
            continue;
        }
        let script = document
            .create_element("script")?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| PageError::Js("created element is not a script".into()))?;
        script.set_id(snippet.id);
        if let Some(src) = &snippet.src {
            script.set_async(true);
            script.set_src(src);
        }
        if let Some(inline) = &snippet.inline {
            script.set_text(inline)?;
        }
        head.append_child(&script)?;
        added += 1;
    }
    info!("Injected {} tracking scripts", added);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gtag_loader_encodes_the_id() {
        let snippets = gtag_snippets("G-AB 12");
        assert_eq!(
            snippets[0].src.as_deref(),
            Some("https://www.googletagmanager.com/gtag/js?id=G-AB%2012")
        );
        assert!(snippets[1].inline.as_deref().unwrap().ends_with("gtag('config', \"G-AB 12\");"));
    }

    #[test]
    fn pixel_id_is_escaped() {
        let snippet = pixel_snippet("12\"); alert(1); (\"");
        let inline = snippet.inline.unwrap();
        assert!(inline.contains(r#"fbq('init', "12\"); alert(1); (\"");"#));
        assert!(inline.contains("\"https://connect.facebook.net/en_US/fbevents.js\""));
    }

    #[test]
    fn snippet_ids_are_distinct() {
        let config = PageConfig::default();
        let snippets = tracking_snippets(&config);
        assert_eq!(snippets.len(), 3);
        let mut ids: Vec<_> = snippets.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn empty_ids_skip_vendors() {
        let config = PageConfig {
            analytics_id: String::new(),
            ..PageConfig::default()
        };
        let snippets = tracking_snippets(&config);
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].id, PIXEL_ID);
    }
}
