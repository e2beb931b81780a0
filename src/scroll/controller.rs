use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::{Element, Window};

use super::trigger::{Layout, ScrollTrigger, TriggerEvent};

struct Binding {
    element: Element,
    trigger: ScrollTrigger,
    on_event: Box<dyn FnMut(TriggerEvent)>,
}

struct Inner {
    window: Window,
    bindings: RefCell<Vec<Binding>>,
}

/// Owns the page's scroll triggers and feeds them window scroll positions.
/// Dropping it removes the scroll listener.
pub struct ScrollController {
    inner: Rc<Inner>,
    _listener: EventListener,
}

impl ScrollController {
    pub fn new(window: &Window) -> Self {
        let inner = Rc::new(Inner {
            window: window.clone(),
            bindings: RefCell::new(Vec::new()),
        });
        let listener = {
            let inner = Rc::downgrade(&inner);
            EventListener::new(window, "scroll", move |_| {
                if let Some(inner) = inner.upgrade() {
                    update(&inner);
                }
            })
        };
        Self {
            inner,
            _listener: listener,
        }
    }

    /// Registers a trigger and immediately reports where the page already is,
    /// so elements above the fold enter straight away.
    pub fn add<F>(&self, element: Element, mut trigger: ScrollTrigger, mut on_event: F)
    where
        F: FnMut(TriggerEvent) + 'static,
    {
        trigger.refresh(layout_of(&self.inner.window, &element));
        for event in trigger.update(scroll_y(&self.inner.window)) {
            on_event(event);
        }
        self.inner.bindings.borrow_mut().push(Binding {
            element,
            trigger,
            on_event: Box::new(on_event),
        });
    }

    /// Recomputes every trigger's scroll range from current layout.
    pub fn refresh(&self) {
        {
            let mut bindings = self.inner.bindings.borrow_mut();
            for binding in bindings.iter_mut() {
                let layout = layout_of(&self.inner.window, &binding.element);
                binding.trigger.refresh(layout);
            }
            debug!("Refreshed {} scroll triggers", bindings.len());
        }
        update(&self.inner);
    }

    /// Cached scroll ranges, in the order the triggers were added.
    pub fn bounds(&self) -> Vec<Option<(f64, f64)>> {
        self.inner
            .bindings
            .borrow()
            .iter()
            .map(|binding| binding.trigger.bounds())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn update(inner: &Inner) {
    let y = scroll_y(&inner.window);
    for binding in inner.bindings.borrow_mut().iter_mut() {
        for event in binding.trigger.update(y) {
            (binding.on_event)(event);
        }
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn layout_of(window: &Window, element: &Element) -> Layout {
    let rect = element.get_bounding_client_rect();
    Layout {
        element_top: rect.top() + scroll_y(window),
        element_height: rect.height(),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0),
    }
}
