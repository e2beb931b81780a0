use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Element;

use super::easing::Easing;
use super::playhead::Playhead;
use super::timeline::Timeline;
use super::tween::{round, Frame, Tween};
use crate::dom;
use crate::error::Result;
use crate::scroll::ToggleAction;

pub fn apply_frame(element: &Element, frame: &Frame) -> Result<()> {
    let Some(style) = dom::style_of(element) else {
        return Ok(());
    };
    if let Some(opacity) = frame.opacity {
        style.set_property("opacity", &round(opacity).to_string())?;
    }
    if let Some(transform) = frame.transform() {
        style.set_property("transform", &transform)?;
    }
    if let Some(offset) = frame.stroke_dashoffset {
        style.set_property("stroke-dashoffset", &round(offset).to_string())?;
    }
    if let Some(filter) = frame.filter() {
        style.set_property("filter", &filter)?;
    }
    Ok(())
}

type Completion = Box<dyn FnOnce()>;

struct Run {
    timeline: Timeline<Element>,
    started_at: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    on_complete: RefCell<Option<Completion>>,
    keep_alive: RefCell<Option<Rc<Run>>>,
}

/// A timeline playing on the page, one sample per animation frame.
///
/// Dropping the handle cancels the animation where it stands. Call
/// [`Animation::detach`] for fire-and-forget animations.
pub struct Animation {
    run: Rc<Run>,
}

impl Animation {
    /// Starts `timeline` on the next frame. `on_complete` always runs from a
    /// frame callback, never synchronously inside `play`.
    pub fn play<F>(timeline: Timeline<Element>, on_complete: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        for (element, frame) in timeline.sample(0.0) {
            dom::log_err(apply_frame(&element, &frame), "animation start");
        }
        let run = Rc::new(Run {
            timeline,
            started_at: Cell::new(None),
            frame: RefCell::new(None),
            on_complete: RefCell::new(Some(Box::new(on_complete))),
            keep_alive: RefCell::new(None),
        });
        schedule(&run);
        Self { run }
    }

    pub fn play_tween<F>(element: Element, tween: Tween, on_complete: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self::play(Timeline::new(Easing::Linear).add(element, tween), on_complete)
    }

    /// Lets the animation run to completion without an owner.
    pub fn detach(self) {
        if self.is_running() {
            *self.run.keep_alive.borrow_mut() = Some(Rc::clone(&self.run));
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.frame.borrow().is_some()
    }
}

fn schedule(run: &Rc<Run>) {
    let weak = Rc::downgrade(run);
    let handle = request_animation_frame(move |timestamp| {
        if let Some(run) = weak.upgrade() {
            tick(&run, timestamp);
        }
    });
    *run.frame.borrow_mut() = Some(handle);
}

fn tick(run: &Rc<Run>, now: f64) {
    run.frame.borrow_mut().take();
    let started = match run.started_at.get() {
        Some(started) => started,
        None => {
            run.started_at.set(Some(now));
            now
        }
    };
    let elapsed = now - started;
    for (element, frame) in run.timeline.sample(elapsed) {
        dom::log_err(apply_frame(&element, &frame), "animation frame");
    }
    if run.timeline.is_finished(elapsed) {
        let done = run.on_complete.borrow_mut().take();
        let keep_alive = run.keep_alive.borrow_mut().take();
        if let Some(done) = done {
            done();
        }
        drop(keep_alive);
    } else {
        schedule(run);
    }
}

struct Scrub {
    element: Element,
    tween: Tween,
    playhead: RefCell<Playhead>,
    last_time: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// A single tween that toggle actions play forwards or backwards.
pub struct ReversibleAnimation {
    scrub: Rc<Scrub>,
}

impl ReversibleAnimation {
    /// Renders the tween's start state right away.
    pub fn new(element: Element, tween: Tween) -> Self {
        let scrub = Rc::new(Scrub {
            playhead: RefCell::new(Playhead::new(tween.duration_ms())),
            element,
            tween,
            last_time: Cell::new(None),
            frame: RefCell::new(None),
        });
        render(&scrub);
        Self { scrub }
    }

    pub fn toggle(&self, action: ToggleAction) {
        self.scrub.playhead.borrow_mut().apply(action);
        render(&self.scrub);
        let playing = self.scrub.playhead.borrow().is_playing();
        if playing && self.scrub.frame.borrow().is_none() {
            self.scrub.last_time.set(None);
            schedule_scrub(&self.scrub);
        }
    }

    pub fn position_ms(&self) -> f64 {
        self.scrub.playhead.borrow().position_ms()
    }
}

fn render(scrub: &Scrub) {
    let position = scrub.playhead.borrow().position_ms();
    let frame = scrub.tween.sample(position);
    dom::log_err(apply_frame(&scrub.element, &frame), "reveal frame");
}

fn schedule_scrub(scrub: &Rc<Scrub>) {
    let weak = Rc::downgrade(scrub);
    let handle = request_animation_frame(move |timestamp| {
        if let Some(scrub) = weak.upgrade() {
            scrub_tick(&scrub, timestamp);
        }
    });
    *scrub.frame.borrow_mut() = Some(handle);
}

fn scrub_tick(scrub: &Rc<Scrub>, now: f64) {
    scrub.frame.borrow_mut().take();
    let delta = scrub.last_time.get().map_or(0.0, |last| now - last);
    scrub.last_time.set(Some(now));
    let playing = scrub.playhead.borrow_mut().advance(delta);
    render(scrub);
    if playing {
        schedule_scrub(scrub);
    } else {
        scrub.last_time.set(None);
    }
}
