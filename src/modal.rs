use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Object;
use web_sys::{HtmlElement, KeyboardEvent};

use crate::dom;
use crate::error::{PageError, Result};
use crate::page::Env;

pub const PRIVACY_TOGGLE_ID: &str = "privacy-toggle";
pub const PRIVACY_MODAL_ID: &str = "privacy-modal";
pub const PRIVACY_CLOSE_ID: &str = "privacy-close";
pub const BOOKING_MODAL_ID: &str = "booking-modal";
pub const BOOKING_CLOSE_ID: &str = "booking-close";
pub const BOOKING_OPENER_IDS: [&str; 2] = ["hero-book-call-link", "pricing-book-btn"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    Privacy,
    Booking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalChange {
    Show(ModalId),
    Hide(ModalId),
    LockScroll,
    UnlockScroll,
}

/// Which modal is open. Opening one closes the other, so page scroll is
/// locked exactly while some modal is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalSet {
    open: Option<ModalId>,
}

impl ModalSet {
    pub fn current(&self) -> Option<ModalId> {
        self.open
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    /// Re-opening the open modal re-applies the same state.
    pub fn open(&mut self, id: ModalId) -> Vec<ModalChange> {
        let mut changes = Vec::new();
        if let Some(other) = self.open.filter(|other| *other != id) {
            changes.push(ModalChange::Hide(other));
        }
        self.open = Some(id);
        changes.push(ModalChange::Show(id));
        changes.push(ModalChange::LockScroll);
        changes
    }

    /// Closing a modal that is not open only makes sure it is hidden.
    pub fn close(&mut self, id: ModalId) -> Vec<ModalChange> {
        if self.open == Some(id) {
            self.open = None;
            vec![ModalChange::Hide(id), ModalChange::UnlockScroll]
        } else {
            vec![ModalChange::Hide(id)]
        }
    }
}

struct Inner {
    env: Env,
    set: RefCell<ModalSet>,
    privacy: Option<HtmlElement>,
    booking: Option<HtmlElement>,
}

impl Inner {
    fn element(&self, id: ModalId) -> Option<&HtmlElement> {
        match id {
            ModalId::Privacy => self.privacy.as_ref(),
            ModalId::Booking => self.booking.as_ref(),
        }
    }

    fn open(&self, id: ModalId) {
        let changes = self.set.borrow_mut().open(id);
        self.apply(&changes);
    }

    fn close(&self, id: ModalId) {
        let changes = self.set.borrow_mut().close(id);
        self.apply(&changes);
    }

    fn apply(&self, changes: &[ModalChange]) {
        for change in changes {
            let result = match change {
                ModalChange::Show(id) => self.display(*id, "flex"),
                ModalChange::Hide(id) => self.display(*id, "none"),
                ModalChange::LockScroll => self.body_overflow("hidden"),
                ModalChange::UnlockScroll => self.body_overflow(""),
            };
            dom::log_err(result, "modal");
        }
    }

    fn display(&self, id: ModalId, display: &str) -> Result<()> {
        match self.element(id) {
            Some(modal) => dom::set_styles(modal, &[("display", display)]),
            None => Ok(()),
        }
    }

    fn body_overflow(&self, overflow: &str) -> Result<()> {
        let body = self.env.document.body().ok_or(PageError::MissingElement("body"))?;
        body.style().set_property("overflow", overflow)?;
        Ok(())
    }
}

/// Privacy and booking dialogs.
pub struct Modals {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

impl Modals {
    pub fn init(env: &Env) -> Result<Self> {
        let privacy = privacy_parts(env)
            .map_err(|e| e.log("privacy modal"))
            .ok();
        let booking = booking_parts(env)
            .map_err(|e| e.log("booking modal"))
            .ok();
        if privacy.is_none() && booking.is_none() {
            return Err(PageError::MissingElement(PRIVACY_MODAL_ID));
        }

        let inner = Rc::new(Inner {
            env: env.clone(),
            set: RefCell::new(ModalSet::default()),
            privacy: privacy.as_ref().map(|parts| parts.modal.clone()),
            booking: booking.as_ref().map(|parts| parts.modal.clone()),
        });

        let mut listeners = Vec::new();
        if let Some(parts) = privacy {
            wire(&inner, ModalId::Privacy, parts, &mut listeners);
        }
        if let Some(parts) = booking {
            wire(&inner, ModalId::Booking, parts, &mut listeners);
            listeners.push(escape_listener(&inner));
        }
        debug!("Modals wired with {} listeners", listeners.len());
        Ok(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn open(&self, id: ModalId) {
        self.inner.open(id);
    }

    pub fn close(&self, id: ModalId) {
        self.inner.close(id);
    }

    pub fn current(&self) -> Option<ModalId> {
        self.inner.set.borrow().current()
    }
}

struct ModalParts {
    modal: HtmlElement,
    close: HtmlElement,
    openers: Vec<HtmlElement>,
}

fn privacy_parts(env: &Env) -> Result<ModalParts> {
    Ok(ModalParts {
        openers: vec![dom::by_id(&env.document, PRIVACY_TOGGLE_ID)?],
        modal: dom::by_id(&env.document, PRIVACY_MODAL_ID)?,
        close: dom::by_id(&env.document, PRIVACY_CLOSE_ID)?,
    })
}

fn booking_parts(env: &Env) -> Result<ModalParts> {
    let modal = dom::by_id(&env.document, BOOKING_MODAL_ID)?;
    let close = dom::by_id(&env.document, BOOKING_CLOSE_ID)
        .map_err(|_| PageError::MissingCloseButton(BOOKING_MODAL_ID))?;
    let openers = BOOKING_OPENER_IDS
        .into_iter()
        .filter_map(|id| dom::by_id(&env.document, id).ok())
        .collect();
    Ok(ModalParts {
        modal,
        close,
        openers,
    })
}

fn wire(inner: &Rc<Inner>, id: ModalId, parts: ModalParts, listeners: &mut Vec<EventListener>) {
    for opener in &parts.openers {
        let weak = Rc::downgrade(inner);
        listeners.push(EventListener::new(opener, "click", move |event| {
            event.prevent_default();
            if let Some(inner) = weak.upgrade() {
                inner.open(id);
            }
        }));
    }

    let weak = Rc::downgrade(inner);
    listeners.push(EventListener::new(&parts.close, "click", move |_| {
        if let Some(inner) = weak.upgrade() {
            inner.close(id);
        }
    }));

    let weak = Rc::downgrade(inner);
    let backdrop = parts.modal.clone();
    listeners.push(EventListener::new(&parts.modal, "click", move |event| {
        let on_backdrop = event
            .target()
            .map_or(false, |target| Object::is(&target, &backdrop));
        if !on_backdrop {
            return;
        }
        if let Some(inner) = weak.upgrade() {
            inner.close(id);
        }
    }));
}

fn escape_listener(inner: &Rc<Inner>) -> EventListener {
    let weak = Rc::downgrade(inner);
    EventListener::new(&inner.env.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() != "Escape" {
            return;
        }
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let displayed = inner
            .booking
            .as_ref()
            .map_or(false, |modal| dom::is_displayed(&inner.env.window, modal));
        if displayed {
            inner.close(ModalId::Booking);
        }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Open(ModalId),
        Close(ModalId),
    }

    fn op() -> impl Strategy<Value = Op> {
        let id = prop_oneof![Just(ModalId::Privacy), Just(ModalId::Booking)];
        (any::<bool>(), id).prop_map(|(open, id)| if open { Op::Open(id) } else { Op::Close(id) })
    }

    proptest! {
        #[test]
        fn one_modal_at_most_and_scroll_locked_exactly_while_open(
            ops in prop::collection::vec(op(), 0..100),
        ) {
            let mut set = ModalSet::default();
            let mut shown: Vec<ModalId> = Vec::new();
            let mut locked = false;
            for op in ops {
                let changes = match op {
                    Op::Open(id) => set.open(id),
                    Op::Close(id) => set.close(id),
                };
                for change in changes {
                    match change {
                        ModalChange::Show(id) => {
                            if !shown.contains(&id) {
                                shown.push(id);
                            }
                        }
                        ModalChange::Hide(id) => shown.retain(|other| *other != id),
                        ModalChange::LockScroll => locked = true,
                        ModalChange::UnlockScroll => locked = false,
                    }
                }
                prop_assert!(shown.len() <= 1);
                prop_assert_eq!(shown.first().copied(), set.current());
                prop_assert_eq!(locked, set.current().is_some());
            }
        }
    }
}
