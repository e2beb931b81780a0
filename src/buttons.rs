use gloo_events::EventListener;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::anim::{Animation, Easing, Property, Track, Tween};
use crate::dom;
use crate::error::{PageError, Result};
use crate::page::Env;

pub const BUTTON_SELECTOR: &str = ".demo-button, .demo-button-large";
pub const ICON_SELECTOR: &str = ".demo-icon, .demo-icon-large";
pub const VOICE_CLASS: &str = "demo-voice";
pub const RIPPLE_CLASS: &str = "demo-ripple";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Ripple circle placement relative to the clicked button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// A circle as large as the button's longer side, centred on the pointer.
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }
}

pub fn ripple_tween() -> Tween {
    Tween::new(600.0)
        .from_to(Property::Scale, 0.0, 2.2)
        .from_to(Property::Opacity, 0.5, 0.0)
        .easing(Easing::OutQuad)
}

pub fn icon_pulse() -> Tween {
    Tween::new(400.0)
        .track(Track::keyframes(Property::Scale, &[1.0, 1.15, 1.0]))
        .easing(Easing::OutElastic {
            amplitude: 1.0,
            period: 0.6,
        })
}

pub const DEMO_ALERT_NOTE: &str = "(Replace this alert with the live demo link.)";

pub fn demo_alert(label: &str, pricing: &str) -> String {
    format!("Flow Local demo via {}\n\n{}\n\n{}", label, pricing, DEMO_ALERT_NOTE)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceOutcome {
    Initialized,
    ChatOpened,
    Fallback,
}

fn global_function(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Hands off to the voice widget: its initializer if loaded, else its chat
/// object, else the fallback site in a new tab.
pub fn open_voice_widget(window: &Window, fallback_url: &str) -> Result<VoiceOutcome> {
    if let Some(init) = global_function(window, "ghlInit") {
        init.call0(window)?;
        return Ok(VoiceOutcome::Initialized);
    }
    let chat = Reflect::get(window, &JsValue::from_str("ghlChat")).unwrap_or(JsValue::UNDEFINED);
    if !chat.is_undefined() && !chat.is_null() {
        if let Some(open) = global_function(&chat, "open") {
            open.call0(&chat)?;
            return Ok(VoiceOutcome::ChatOpened);
        }
    }
    info!("Voice widget not loaded yet, opening fallback");
    window.open_with_url_and_target(fallback_url, "_blank")?;
    Ok(VoiceOutcome::Fallback)
}

/// Adds a ripple under the pointer and removes it once it has faded.
pub fn spawn_ripple(document: &Document, button: &HtmlElement, event: &MouseEvent) -> Result<Element> {
    let bounds = button.get_bounding_client_rect();
    let ripple = Ripple::at(
        Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        },
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let span = document.create_element("span")?;
    span.set_class_name(RIPPLE_CLASS);
    let size = format!("{}px", ripple.size);
    let left = format!("{}px", ripple.left);
    let top = format!("{}px", ripple.top);
    dom::set_styles(
        &span,
        &[
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("left", left.as_str()),
            ("top", top.as_str()),
            ("position", "absolute"),
            ("border-radius", "50%"),
            ("background", "rgba(255, 255, 255, 0.3)"),
            ("pointer-events", "none"),
            ("transform", "scale(0)"),
        ],
    )?;
    dom::set_styles(button, &[("position", "relative"), ("overflow", "hidden")])?;
    button.append_child(&span)?;

    let done = span.clone();
    Animation::play_tween(span.clone(), ripple_tween(), move || done.remove()).detach();
    Ok(span)
}

/// Hover pulse and click ripple for every demo button.
pub struct DemoButtons {
    _listeners: Vec<EventListener>,
}

impl DemoButtons {
    pub fn init(env: &Env) -> Result<Self> {
        let buttons: Vec<HtmlElement> = dom::query_all(&env.document, BUTTON_SELECTOR)
            .into_iter()
            .filter_map(|button| button.dyn_into::<HtmlElement>().ok())
            .collect();
        if buttons.is_empty() {
            return Err(PageError::MissingElement(BUTTON_SELECTOR));
        }

        let mut listeners = Vec::with_capacity(buttons.len() * 2);
        for button in buttons {
            let icon = button.query_selector(ICON_SELECTOR).ok().flatten();
            let reduced = env.motion.is_reduced();
            listeners.push(EventListener::new(&button, "mouseenter", move |_| {
                if reduced {
                    return;
                }
                if let Some(icon) = &icon {
                    Animation::play_tween(icon.clone(), icon_pulse(), || ()).detach();
                }
            }));

            let env = env.clone();
            let target = button.clone();
            listeners.push(EventListener::new(&target, "click", move |event| {
                event.prevent_default();
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    dom::log_err(
                        spawn_ripple(&env.document, &button, mouse).map(|_| ()),
                        "ripple",
                    );
                }
                handle_click(&env, &button);
            }));
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn handle_click(env: &Env, button: &HtmlElement) {
    if button.class_list().contains(VOICE_CLASS) {
        info!("Triggering voice widget");
        let result = open_voice_widget(&env.window, &env.config.voice_fallback_url);
        dom::log_err(result.map(|_| ()), "voice widget");
        return;
    }
    let label = button.text_content().unwrap_or_default();
    let label = label.trim();
    info!("Demo button clicked: {}", label);
    let message = demo_alert(label, &env.config.pricing_message);
    dom::log_err(
        env.window.alert_with_message(&message).map_err(PageError::from),
        "demo alert",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_centres_on_pointer() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 60.0,
        };
        let ripple = Ripple::at(rect, 150.0, 80.0);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -50.0);
        assert_eq!(ripple.top, -70.0);
    }

    #[test]
    fn ripple_uses_longer_side() {
        let rect = Rect {
            left: 0.0,
            top: 0.0,
            width: 40.0,
            height: 90.0,
        };
        assert_eq!(Ripple::at(rect, 0.0, 0.0).size, 90.0);
    }

    #[test]
    fn ripple_expands_and_fades() {
        let tween = ripple_tween();
        assert_eq!(tween.total_ms(), Some(600.0));
        let start = tween.sample(0.0);
        assert_eq!(start.scale, Some(0.0));
        assert_eq!(start.opacity, Some(0.5));
        let end = tween.sample(600.0);
        assert_eq!(end.scale, Some(2.2));
        assert_eq!(end.opacity, Some(0.0));
    }

    #[test]
    fn icon_pulse_returns_to_rest() {
        let end = icon_pulse().sample(400.0).scale.unwrap();
        assert!((end - 1.0).abs() < 1e-9);
    }

    #[test]
    fn alert_names_the_channel() {
        let message = demo_alert("WhatsApp", "£300/mo");
        assert_eq!(
            message,
            "Flow Local demo via WhatsApp\n\n£300/mo\n\n(Replace this alert with the live demo link.)"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ripple_is_centred_on_any_pointer_inside_the_button(
            left in -500.0f64..500.0,
            top in -500.0f64..500.0,
            width in 1.0f64..600.0,
            height in 1.0f64..600.0,
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
        ) {
            let rect = Rect { left, top, width, height };
            let x = left + fx * width;
            let y = top + fy * height;
            let ripple = Ripple::at(rect, x, y);
            prop_assert_eq!(ripple.size, width.max(height));
            prop_assert!((ripple.left + ripple.size / 2.0 - (x - left)).abs() < 1e-9);
            prop_assert!((ripple.top + ripple.size / 2.0 - (y - top)).abs() < 1e-9);
        }
    }
}
