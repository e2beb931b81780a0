use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, SvgGeometryElement};

use crate::anim::{Animation, Easing, Offset, Property, Repeat, Timeline, Track, Tween};
use crate::dom;
use crate::error::{PageError, Result};
use crate::page::Env;

pub const INTRO_ID: &str = "intro";
pub const CONTAINER_SELECTOR: &str = ".intro-logo-container";
pub const LOGO_ID: &str = "intro-logo";
pub const STROKE_SELECTOR: &str = "#intro-logo path";
pub const HEADER_ID: &str = "header";
pub const HEADER_LOGO_ID: &str = "header-logo";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroTarget {
    Container,
    Logo,
    Stroke,
    Overlay,
}

/// Logo fades and scales in, optionally draws its outline, pulses twice, then
/// shrinks away while the overlay fades out over the last 200ms.
pub fn intro_timeline(stroke_length: Option<f64>) -> Timeline<IntroTarget> {
    let mut timeline = Timeline::new(Easing::OutQuad).add(
        IntroTarget::Container,
        Tween::new(520.0)
            .from_to(Property::Opacity, 0.0, 1.0)
            .from_to(Property::Scale, 0.85, 1.0),
    );
    if let Some(length) = stroke_length {
        timeline = timeline.add(
            IntroTarget::Stroke,
            Tween::new(700.0)
                .from_to(Property::StrokeDashoffset, length, 0.0)
                .from_to(Property::Glow, 0.0, 12.0)
                .easing(Easing::InOutSine),
        );
    }
    timeline
        .add(
            IntroTarget::Logo,
            Tween::new(320.0)
                .from_to(Property::Scale, 1.0, 1.06)
                .alternate()
                .repeat(Repeat::Times(2))
                .easing(Easing::InOutSine),
        )
        .add(
            IntroTarget::Container,
            Tween::new(260.0)
                .from_to(Property::Scale, 1.0, 0.92)
                .from_to(Property::Opacity, 1.0, 0.0)
                .easing(Easing::InOutQuad),
        )
        .add_at(
            IntroTarget::Overlay,
            Tween::new(360.0)
                .from_to(Property::Opacity, 1.0, 0.0)
                .easing(Easing::InOutQuad),
            Offset::Relative(-200.0),
        )
}

pub fn header_pulse() -> Tween {
    Tween::new(2800.0)
        .track(Track::keyframes(Property::Scale, &[1.0, 1.08, 1.0]))
        .track(Track::keyframes(Property::Opacity, &[1.0, 0.9, 1.0]))
        .easing(Easing::InOutSine)
        .repeat(Repeat::Forever)
}

/// Prepares the logo outline for drawing and returns its length.
fn prepare_stroke(path: &Element) -> Option<f64> {
    let geometry = path.dyn_ref::<SvgGeometryElement>()?;
    let length = f64::from(geometry.get_total_length());
    if length <= 0.0 {
        return None;
    }
    let length_str = length.to_string();
    dom::log_err(
        dom::set_styles(
            path,
            &[
                ("stroke-dasharray", length_str.as_str()),
                ("stroke-dashoffset", length_str.as_str()),
            ],
        ),
        "intro stroke",
    );
    Some(length)
}

/// Plays the intro over `#intro`. `on_complete` runs once the overlay has
/// faded out.
pub fn play<F>(env: &Env, on_complete: F) -> Result<Animation>
where
    F: FnOnce() + 'static,
{
    let overlay: Element = dom::by_id(&env.document, INTRO_ID)?.into();
    let container = dom::query(&env.document, CONTAINER_SELECTOR);
    let logo = env.document.get_element_by_id(LOGO_ID);
    let stroke = dom::query(&env.document, STROKE_SELECTOR);
    let stroke_length = stroke.as_ref().and_then(prepare_stroke);

    let timeline = intro_timeline(stroke_length).filter_map_targets(|target| match target {
        IntroTarget::Container => container.clone(),
        IntroTarget::Logo => logo.clone(),
        IntroTarget::Stroke => stroke.clone(),
        IntroTarget::Overlay => Some(overlay.clone()),
    });
    debug!("Intro timeline runs {}ms", timeline.duration_ms());
    Ok(Animation::play(timeline, on_complete))
}

/// Hides the overlay (when present) and reveals the header.
pub fn reveal(env: &Env) {
    if let Ok(overlay) = dom::by_id(&env.document, INTRO_ID) {
        dom::log_err(
            dom::set_styles(
                &overlay,
                &[("opacity", "0"), ("pointer-events", "none"), ("display", "none")],
            ),
            "intro overlay",
        );
    }
    if let Ok(header) = dom::by_id(&env.document, HEADER_ID) {
        dom::log_err(dom::set_class(&header, "visible", true), "header");
    }
}

/// Starts the header logo's endless pulse. The returned handle stops it.
pub fn start_header_pulse(env: &Env) -> Result<Animation> {
    let logo = env
        .document
        .get_element_by_id(HEADER_LOGO_ID)
        .ok_or(PageError::MissingElement(HEADER_LOGO_ID))?;
    Ok(Animation::play_tween(logo, header_pulse(), || ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_for_the_planned_duration() {
        // 520 + 2 * 320 + 260, then the overlay overlaps by 200 and lasts 360
        assert_eq!(intro_timeline(None).duration_ms(), 1580.0);
        assert_eq!(intro_timeline(Some(300.0)).duration_ms(), 2280.0);
    }

    #[test]
    fn overlay_fade_overlaps_container_exit() {
        let timeline = intro_timeline(None);
        assert_eq!(timeline.start_of(&IntroTarget::Overlay), Some(1220.0));
        assert_eq!(timeline.start_of(&IntroTarget::Stroke), None);
    }

    #[test]
    fn starts_hidden_and_ends_hidden() {
        let timeline = intro_timeline(Some(300.0));
        let start = timeline.sample(0.0);
        assert_eq!(start.len(), 1);
        assert_eq!(start[0].0, IntroTarget::Container);
        assert_eq!(start[0].1.opacity, Some(0.0));
        assert_eq!(start[0].1.scale, Some(0.85));

        let end = timeline.sample(timeline.duration_ms());
        let overlay = end.iter().find(|(t, _)| *t == IntroTarget::Overlay).unwrap();
        assert_eq!(overlay.1.opacity, Some(0.0));
        let stroke = end.iter().find(|(t, _)| *t == IntroTarget::Stroke).unwrap();
        assert_eq!(stroke.1.stroke_dashoffset, Some(0.0));
        assert_eq!(stroke.1.glow, Some(12.0));
    }

    #[test]
    fn header_pulse_loops() {
        let pulse = header_pulse();
        assert_eq!(pulse.total_ms(), None);
        let peak = pulse.sample(1400.0);
        assert_eq!(peak.scale, Some(1.08));
        assert_eq!(peak.opacity, Some(0.9));
    }
}
