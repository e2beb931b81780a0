use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::Element;

use crate::accordion::{Accordion, Change};
use crate::dom;
use crate::error::{PageError, Result};
use crate::page::Env;

pub const DEMO_PANEL_ID: &str = "demo-panel";
pub const DEMO_TOGGLE_ID: &str = "demo-toggle";
pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";
pub const OPEN_CLASS: &str = "open";

/// Expand/collapse toggle for the demo panel.
pub struct DemoPanel {
    _listener: EventListener,
}

impl DemoPanel {
    pub fn init(env: &Env) -> Result<Self> {
        let panel = dom::by_id(&env.document, DEMO_PANEL_ID)?;
        let toggle = dom::by_id(&env.document, DEMO_TOGGLE_ID)?;

        dom::set_class(&panel, "ready", true)?;
        dom::set_expanded(&toggle, false)?;

        let target = toggle.clone();
        let listener = EventListener::new(&target, "click", move |_| {
            let result = panel
                .class_list()
                .toggle(OPEN_CLASS)
                .map_err(PageError::from)
                .and_then(|open| dom::set_expanded(&toggle, open));
            dom::log_err(result, "demo panel");
        });
        Ok(Self {
            _listener: listener,
        })
    }
}

struct FaqEntry {
    question: Element,
    item: Element,
}

/// FAQ accordion over every `.faq-question` that sits inside a `.faq-item`.
pub struct Faq {
    accordion: Rc<RefCell<Accordion>>,
    _listeners: Vec<EventListener>,
}

impl Faq {
    pub fn init(env: &Env) -> Result<Self> {
        let entries: Rc<Vec<FaqEntry>> = Rc::new(
            dom::query_all(&env.document, FAQ_QUESTION_SELECTOR)
                .into_iter()
                .filter_map(|question| {
                    let item = question.closest(FAQ_ITEM_SELECTOR).ok().flatten()?;
                    Some(FaqEntry { question, item })
                })
                .collect(),
        );
        if entries.is_empty() {
            return Err(PageError::MissingElement(FAQ_QUESTION_SELECTOR));
        }

        let flags = entries
            .iter()
            .map(|entry| entry.item.class_list().contains(OPEN_CLASS))
            .collect();
        let mut accordion = Accordion::from_flags(flags);
        accordion.normalize();
        for (index, entry) in entries.iter().enumerate() {
            apply(entry, accordion.is_open(index))?;
        }
        let accordion = Rc::new(RefCell::new(accordion));

        let listeners = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let entries = Rc::clone(&entries);
                let accordion = Rc::clone(&accordion);
                EventListener::new(&entry.question, "click", move |_| {
                    let changes = accordion.borrow_mut().toggle(index);
                    apply_changes(&entries, changes);
                })
            })
            .collect();

        debug!("FAQ accordion wired over {} items", entries.len());
        Ok(Self {
            accordion,
            _listeners: listeners,
        })
    }

    pub fn open_count(&self) -> usize {
        self.accordion.borrow().open_count()
    }
}

fn apply(entry: &FaqEntry, open: bool) -> Result<()> {
    dom::set_class(&entry.item, OPEN_CLASS, open)?;
    dom::set_expanded(&entry.question, open)
}

fn apply_changes(entries: &[FaqEntry], changes: Vec<Change>) {
    for (index, open) in changes {
        if let Some(entry) = entries.get(index) {
            dom::log_err(apply(entry, open), "faq");
        }
    }
}
