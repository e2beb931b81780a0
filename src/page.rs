use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use log::{debug, info};
use web_sys::{Document, Window};

use crate::anim::Animation;
use crate::buttons::DemoButtons;
use crate::config::PageConfig;
use crate::consent::ConsentBanner;
use crate::dom;
use crate::effects::ScrollEffects;
use crate::error::Result;
use crate::intro;
use crate::modal::Modals;
use crate::motion::MotionPreference;
use crate::panels::{DemoPanel, Faq};
use crate::performance::{self, LazyImages, ResizeWatcher};

/// What every initializer gets handed: the page, the motion preference and
/// the runtime config.
#[derive(Clone)]
pub struct Env {
    pub window: Window,
    pub document: Document,
    pub motion: MotionPreference,
    pub config: Rc<PageConfig>,
}

impl Env {
    pub fn new(
        window: Window,
        document: Document,
        motion: MotionPreference,
        config: PageConfig,
    ) -> Self {
        Self {
            window,
            document,
            motion,
            config: Rc::new(config),
        }
    }

    pub fn detect() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let motion = MotionPreference::detect(&window);
        let config = PageConfig::from_document(&document);
        Ok(Self::new(window, document, motion, config))
    }
}

/// State the intro hands over to the rest of the page when it finishes.
pub struct Shared {
    env: Env,
    finalized: Cell<bool>,
    intro: RefCell<Option<Animation>>,
    header_pulse: RefCell<Option<Animation>>,
    scroll: RefCell<Option<ScrollEffects>>,
}

impl Shared {
    fn new(env: Env) -> Self {
        Self {
            env,
            finalized: Cell::new(false),
            intro: RefCell::new(None),
            header_pulse: RefCell::new(None),
            scroll: RefCell::new(None),
        }
    }

    fn start_intro(self: &Rc<Self>) {
        if self.env.motion.is_reduced() {
            self.finalize_intro();
            return;
        }
        let weak = Rc::downgrade(self);
        let played = intro::play(&self.env, move || {
            if let Some(shared) = weak.upgrade() {
                shared.finalize_intro();
            }
        });
        match played {
            Ok(animation) => *self.intro.borrow_mut() = Some(animation),
            Err(e) => {
                e.log("intro");
                self.finalize_intro();
            }
        }
    }

    fn finalize_intro(&self) {
        if self.finalized.replace(true) {
            return;
        }
        self.intro.borrow_mut().take();
        intro::reveal(&self.env);
        if !self.env.motion.is_reduced() {
            match intro::start_header_pulse(&self.env) {
                Ok(pulse) => *self.header_pulse.borrow_mut() = Some(pulse),
                Err(e) => e.log("header animation"),
            }
        }
        self.start_scroll_effects();
    }

    /// Idempotent: both the intro and the reduced-motion path ask for this.
    fn start_scroll_effects(&self) {
        if self.scroll.borrow().is_some() {
            return;
        }
        match ScrollEffects::start(&self.env) {
            Ok(effects) => *self.scroll.borrow_mut() = Some(effects),
            Err(e) => e.log("scroll effects"),
        }
    }

    pub fn refresh_scroll(&self) {
        if let Some(effects) = self.scroll.borrow().as_ref() {
            effects.refresh();
        }
    }

    pub fn scroll_bounds(&self) -> Vec<Option<(f64, f64)>> {
        self.scroll
            .borrow()
            .as_ref()
            .map(ScrollEffects::trigger_bounds)
            .unwrap_or_default()
    }

    pub fn header_pulse_running(&self) -> bool {
        self.header_pulse
            .borrow()
            .as_ref()
            .map_or(false, Animation::is_running)
    }

    pub fn scroll_animated(&self) -> bool {
        self.scroll
            .borrow()
            .as_ref()
            .map_or(false, ScrollEffects::is_animated)
    }

    fn teardown(&self) {
        self.intro.borrow_mut().take();
        self.header_pulse.borrow_mut().take();
        self.scroll.borrow_mut().take();
    }
}

fn keep<T>(result: Result<T>, context: &str) -> Option<T> {
    result.map_err(|e| e.log(context)).ok()
}

/// Every interaction on the landing page. Dropping it stops animations,
/// timers and listeners.
pub struct Page {
    shared: Rc<Shared>,
    demo_panel: Option<DemoPanel>,
    buttons: Option<DemoButtons>,
    resize: Option<ResizeWatcher>,
    images: Option<LazyImages>,
    faq: Option<Faq>,
    consent: Option<ConsentBanner>,
    modals: Option<Modals>,
    try_demo: Option<EventListener>,
}

impl Page {
    pub fn init() -> Result<Self> {
        Ok(Self::init_with(Env::detect()?))
    }

    pub fn init_with(env: Env) -> Self {
        info!("Flow Local - Initializing...");
        debug!("Motion preference: {:?}", env.motion);

        let shared = Rc::new(Shared::new(env.clone()));
        shared.start_intro();
        let demo_panel = keep(DemoPanel::init(&env), "demo panel");
        dom::log_err(performance::apply_touch_tweaks(&env), "touch tweaks");
        let buttons = keep(DemoButtons::init(&env), "demo buttons");
        let resize = ResizeWatcher::init(&env, Rc::downgrade(&shared));
        let images = keep(LazyImages::init(&env), "lazy images");
        dom::log_err(performance::mark_reduced_motion(&env), "reduced motion");
        if env.motion.is_reduced() {
            // covers pages where the intro short-circuited before finalizing
            shared.start_scroll_effects();
        }
        let faq = keep(Faq::init(&env), "faq");
        let consent = keep(ConsentBanner::init(&env), "cookie consent");
        let modals = keep(Modals::init(&env), "modals");
        let try_demo = keep(performance::wire_try_demo(&env), "try demo");

        info!("Flow Local - Ready");
        Self {
            shared,
            demo_panel,
            buttons,
            resize,
            images,
            faq,
            consent,
            modals,
            try_demo,
        }
    }

    pub fn shared(&self) -> &Rc<Shared> {
        &self.shared
    }

    pub fn faq(&self) -> Option<&Faq> {
        self.faq.as_ref()
    }

    pub fn consent(&self) -> Option<&ConsentBanner> {
        self.consent.as_ref()
    }

    pub fn modals(&self) -> Option<&Modals> {
        self.modals.as_ref()
    }

    pub fn has_demo_panel(&self) -> bool {
        self.demo_panel.is_some()
    }

    pub fn has_demo_buttons(&self) -> bool {
        self.buttons.is_some()
    }

    pub fn watches_resize(&self) -> bool {
        self.resize.is_some()
    }

    pub fn has_lazy_images(&self) -> bool {
        self.images.is_some()
    }

    pub fn has_try_demo(&self) -> bool {
        self.try_demo.is_some()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.shared.teardown();
        debug!("Page torn down");
    }
}
