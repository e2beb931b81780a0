use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom;
use crate::error::{PageError, Result};
use crate::page::{Env, Shared};

pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";
pub const TRY_DEMO_ID: &str = "try-demo-btn";
pub const DEMO_SECTION_SELECTOR: &str = "[data-section=\"5\"]";

/// Runs the latest call `delay_ms` after the calls stop coming.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        // replacing the old timeout cancels it
        let timeout = Timeout::new(self.delay_ms, f);
        *self.pending.borrow_mut() = Some(timeout);
    }
}

/// Recomputes scroll trigger positions once layout settles. Window resize,
/// window load and every image load share one debounce.
pub struct ResizeWatcher {
    _listeners: Vec<EventListener>,
}

impl ResizeWatcher {
    /// `None` under reduced motion, where there are no triggers to move.
    pub fn init(env: &Env, shared: Weak<Shared>) -> Option<Self> {
        if env.motion.is_reduced() {
            return None;
        }
        let debouncer = Debouncer::new(env.config.resize_debounce_ms);
        let refresh: Rc<dyn Fn()> = Rc::new(move || {
            let shared = shared.clone();
            debouncer.call(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.refresh_scroll();
                }
            });
        });

        let mut listeners = Vec::new();
        for event_type in ["resize", "load"] {
            let refresh = Rc::clone(&refresh);
            listeners.push(EventListener::new(&env.window, event_type, move |_| refresh()));
        }
        // image load does not bubble, so catch it on the way down
        listeners.push(EventListener::new_with_options(
            &env.document,
            "load",
            EventListenerOptions::run_in_capture_phase(),
            move |event| {
                if is_image_event(event) {
                    refresh();
                }
            },
        ));
        Some(Self {
            _listeners: listeners,
        })
    }
}

fn is_image_event(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map_or(false, |element| element.tag_name().eq_ignore_ascii_case("img"))
}

/// Swaps in the deferred source. Returns false if there was none.
pub fn promote_deferred_source(image: &Element) -> Result<bool> {
    let Some(src) = image.get_attribute(DEFERRED_SRC_ATTR) else {
        return Ok(false);
    };
    image.set_attribute("src", &src)?;
    image.remove_attribute(DEFERRED_SRC_ATTR)?;
    Ok(true)
}

/// One-shot lazy loading for `img[data-src]`.
pub struct LazyImages {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl LazyImages {
    pub fn init(env: &Env) -> Result<Self> {
        let images = dom::query_all(&env.document, LAZY_IMAGE_SELECTOR);
        if images.is_empty() {
            return Err(PageError::MissingElement(LAZY_IMAGE_SELECTOR));
        }

        let supported = Reflect::has(&env.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            debug!("IntersectionObserver unavailable, loading {} images now", images.len());
            for image in &images {
                promote_deferred_source(image)?;
            }
            return Ok(Self {
                observer: None,
                _callback: None,
            });
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let image = entry.target();
                    match promote_deferred_source(&image) {
                        Ok(true) => observer.unobserve(&image),
                        Ok(false) => {}
                        Err(e) => e.log("lazy image"),
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image);
        }
        debug!("Observing {} lazy images", images.len());
        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for LazyImages {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub fn mark_reduced_motion(env: &Env) -> Result<()> {
    if !env.motion.is_reduced() {
        return Ok(());
    }
    let root = env
        .document
        .document_element()
        .ok_or(PageError::MissingElement("html"))?;
    dom::set_class(&root, REDUCE_MOTION_CLASS, true)
}

/// Stops rubber-band overscroll on touch devices.
pub fn apply_touch_tweaks(env: &Env) -> Result<()> {
    let touch = Reflect::has(&env.window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    if !touch {
        return Ok(());
    }
    let body = env.document.body().ok_or(PageError::MissingElement("body"))?;
    body.style().set_property("overscroll-behavior", "none")?;
    Ok(())
}

/// `#try-demo-btn` scrolls the demo section into view.
pub fn wire_try_demo(env: &Env) -> Result<EventListener> {
    let button = dom::by_id(&env.document, TRY_DEMO_ID)?;
    let env = env.clone();
    Ok(EventListener::new(&button, "click", move |event| {
        let Some(section) = dom::query(&env.document, DEMO_SECTION_SELECTOR) else {
            debug!("No demo section to scroll to");
            return;
        };
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if env.motion.is_reduced() {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        });
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }))
}
