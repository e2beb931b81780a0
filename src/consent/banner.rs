use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlElement;

use super::gate::{ConsentGate, ConsentState, GateAction};
use super::storage::LocalStorageStore;
use super::tracking;
use crate::dom;
use crate::error::Result;
use crate::page::Env;

pub const BANNER_ID: &str = "cookie-banner";
pub const ACCEPT_ID: &str = "cookie-accept";
pub const REJECT_ID: &str = "cookie-reject";
pub const VISIBLE_CLASS: &str = "visible";

struct Inner {
    env: Env,
    gate: RefCell<ConsentGate<LocalStorageStore>>,
    banner: Option<HtmlElement>,
    timer: RefCell<Option<Timeout>>,
}

/// Cookie banner plus the tracking it gates. Dropping it cancels a pending
/// banner timer and removes the button listeners.
pub struct ConsentBanner {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl ConsentBanner {
    /// Always runs the gate, so a stored acceptance loads tracking even on
    /// pages without the banner markup.
    pub fn init(env: &Env) -> Result<Self> {
        let store = LocalStorageStore::new(&env.window, &env.config.storage_key);
        let banner = dom::by_id(&env.document, BANNER_ID)
            .map_err(|e| e.log("cookie banner"))
            .ok();
        let inner = Rc::new(Inner {
            env: env.clone(),
            gate: RefCell::new(ConsentGate::open(store)),
            banner,
            timer: RefCell::new(None),
        });
        debug!("Consent state at load: {:?}", inner.gate.borrow().state());

        let actions = inner.gate.borrow_mut().on_load();
        perform(&inner, &actions);

        let mut listeners = Vec::new();
        for (id, accept) in [(ACCEPT_ID, true), (REJECT_ID, false)] {
            let Ok(button) = dom::by_id(&env.document, id) else {
                continue;
            };
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(&button, "click", move |_| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let actions = {
                    let mut gate = inner.gate.borrow_mut();
                    if accept {
                        gate.accept()
                    } else {
                        gate.reject()
                    }
                };
                info!("Cookie consent {}", if accept { "accepted" } else { "rejected" });
                perform(&inner, &actions);
            }));
        }

        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn state(&self) -> ConsentState {
        self.inner.gate.borrow().state()
    }

    pub fn tracking_loaded(&self) -> bool {
        self.inner.gate.borrow().tracking_loaded()
    }
}

fn perform(inner: &Rc<Inner>, actions: &[GateAction]) {
    for action in actions {
        match action {
            GateAction::ScheduleBanner => {
                let Some(banner) = inner.banner.clone() else {
                    continue;
                };
                let timeout = Timeout::new(inner.env.config.banner_delay_ms, move || {
                    dom::log_err(dom::set_class(&banner, VISIBLE_CLASS, true), "cookie banner");
                });
                *inner.timer.borrow_mut() = Some(timeout);
            }
            GateAction::HideBanner => {
                inner.timer.borrow_mut().take();
                if let Some(banner) = &inner.banner {
                    dom::log_err(dom::set_class(banner, VISIBLE_CLASS, false), "cookie banner");
                }
            }
            GateAction::LoadTracking => {
                let snippets = tracking::tracking_snippets(&inner.env.config);
                if let Err(e) = tracking::inject(&inner.env.document, &snippets) {
                    e.log("tracking");
                }
            }
        }
    }
}
