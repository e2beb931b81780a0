use std::rc::Rc;

use log::debug;

use crate::anim::{Easing, Property, ReversibleAnimation, Tween};
use crate::dom;
use crate::error::{PageError, Result};
use crate::page::Env;
use crate::scroll::{
    ScrollController, ScrollTrigger, ToggleAction, ToggleActions, TriggerEvent, TriggerPosition,
};

pub const SECTION_SELECTOR: &str = ".section";
pub const FEATURE_SELECTOR: &str = ".feature";
pub const VISIBLE_CLASS: &str = "section--visible";

const SECTION_START: TriggerPosition = TriggerPosition {
    element: 0.0,
    viewport: 0.8,
};
const FEATURE_START: TriggerPosition = TriggerPosition {
    element: 0.0,
    viewport: 0.85,
};
const FEATURE_ACTIONS: ToggleActions = ToggleActions::new([
    ToggleAction::Play,
    ToggleAction::None,
    ToggleAction::None,
    ToggleAction::Reverse,
]);

pub fn feature_reveal() -> Tween {
    Tween::new(800.0)
        .from_to(Property::TranslateY, 40.0, 0.0)
        .from_to(Property::Opacity, 0.0, 1.0)
        .easing(Easing::Power2Out)
}

/// Section and feature reveal wiring. With reduced motion there is no
/// controller and everything has been forced visible.
pub struct ScrollEffects {
    controller: Option<ScrollController>,
}

impl ScrollEffects {
    pub fn start(env: &Env) -> Result<Self> {
        let sections = dom::query_all(&env.document, SECTION_SELECTOR);
        if sections.is_empty() {
            return Err(PageError::MissingElement(SECTION_SELECTOR));
        }

        if env.motion.is_reduced() {
            settle(env)?;
            return Ok(Self { controller: None });
        }

        let controller = ScrollController::new(&env.window);
        let mut sections = sections.into_iter();
        if let Some(first) = sections.next() {
            dom::set_class(&first, VISIBLE_CLASS, true)?;
        }
        for section in sections {
            let target = section.clone();
            controller.add(target, ScrollTrigger::new(SECTION_START), move |event| {
                let visible = matches!(event, TriggerEvent::Enter | TriggerEvent::EnterBack);
                dom::log_err(dom::set_class(&section, VISIBLE_CLASS, visible), "section");
            });
        }

        for feature in dom::query_all(&env.document, FEATURE_SELECTOR) {
            let reveal = Rc::new(ReversibleAnimation::new(feature.clone(), feature_reveal()));
            controller.add(feature, ScrollTrigger::new(FEATURE_START), move |event| {
                reveal.toggle(FEATURE_ACTIONS.action_for(event));
            });
        }

        debug!("Scroll effects bound {} triggers", controller.len());
        Ok(Self {
            controller: Some(controller),
        })
    }

    pub fn refresh(&self) {
        if let Some(controller) = &self.controller {
            controller.refresh();
        }
    }

    pub fn trigger_bounds(&self) -> Vec<Option<(f64, f64)>> {
        self.controller
            .as_ref()
            .map(ScrollController::bounds)
            .unwrap_or_default()
    }

    pub fn is_animated(&self) -> bool {
        self.controller.is_some()
    }
}

/// Puts every section and feature in its fully revealed state.
pub fn settle(env: &Env) -> Result<()> {
    for section in dom::query_all(&env.document, SECTION_SELECTOR) {
        dom::set_class(&section, VISIBLE_CLASS, true)?;
    }
    for feature in dom::query_all(&env.document, FEATURE_SELECTOR) {
        dom::set_styles(&feature, &[("opacity", "1"), ("transform", "none")])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_reveal_rises_into_place() {
        let tween = feature_reveal();
        let start = tween.sample(0.0);
        assert_eq!(start.translate_y, Some(40.0));
        assert_eq!(start.opacity, Some(0.0));
        let end = tween.sample(800.0);
        assert_eq!(end.translate_y, Some(0.0));
        assert_eq!(end.opacity, Some(1.0));
    }

    #[test]
    fn constants_match_their_string_forms() {
        assert_eq!("top 80%".parse::<TriggerPosition>(), Ok(SECTION_START));
        assert_eq!("top 85%".parse::<TriggerPosition>(), Ok(FEATURE_START));
        assert_eq!("play none none reverse".parse::<ToggleActions>(), Ok(FEATURE_ACTIONS));
    }
}
