use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

use crate::error::{PageError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(PageError::NoDocument)
}

/// Runs `f` now if the document has finished parsing, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(PageError::MissingElement(id))
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Inline style for HTML and SVG elements alike.
pub fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        element.dyn_ref::<SvgElement>().map(|svg| svg.style())
    }
}

pub fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<()> {
    let Some(style) = style_of(element) else {
        return Ok(());
    };
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_expanded(element: &Element, expanded: bool) -> Result<()> {
    element.set_attribute("aria-expanded", if expanded { "true" } else { "false" })?;
    Ok(())
}

/// Whether the element is currently laid out, going by its computed style.
pub fn is_displayed(window: &Window, element: &Element) -> bool {
    window
        .get_computed_style(element)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("display").ok())
        .map_or(false, |display| display != "none")
}

/// Logs `result` under `context` and drops it.
pub fn log_err(result: Result<()>, context: &str) {
    if let Err(e) = result {
        e.log(context);
    }
}
