use super::easing::Easing;
use super::tween::{Frame, Tween};

/// Where a step starts, relative to the end of the previously added step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    AfterPrevious,
    /// Negative values overlap the previous step, e.g. `Relative(-200.0)`.
    Relative(f64),
}

#[derive(Clone, Debug)]
struct Step<T> {
    target: T,
    tween: Tween,
    start_ms: f64,
}

/// Ordered tween steps against targets of type `T`.
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
    cursor_ms: f64,
    easing: Easing,
}

impl<T: Clone + PartialEq> Timeline<T> {
    pub fn new(easing: Easing) -> Self {
        Self {
            steps: Vec::new(),
            cursor_ms: 0.0,
            easing,
        }
    }

    pub fn add(self, target: T, tween: Tween) -> Self {
        self.add_at(target, tween, Offset::AfterPrevious)
    }

    pub fn add_at(mut self, target: T, tween: Tween, offset: Offset) -> Self {
        let start_ms = match offset {
            Offset::AfterPrevious => self.cursor_ms,
            Offset::Relative(delta) => (self.cursor_ms + delta).max(0.0),
        };
        let tween = tween.with_default_easing(self.easing);
        self.cursor_ms = tween
            .total_ms()
            .map_or(f64::INFINITY, |total| start_ms + total);
        self.steps.push(Step {
            target,
            tween,
            start_ms,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn duration_ms(&self) -> f64 {
        self.steps
            .iter()
            .map(|step| {
                step.tween
                    .total_ms()
                    .map_or(f64::INFINITY, |total| step.start_ms + total)
            })
            .fold(0.0, f64::max)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms()
    }

    /// Start time of the first step aimed at `target`.
    pub fn start_of(&self, target: &T) -> Option<f64> {
        self.steps
            .iter()
            .find(|step| &step.target == target)
            .map(|step| step.start_ms)
    }

    /// Frames for every target touched by a step that has started by
    /// `elapsed_ms`. Later steps override earlier ones for the same property.
    pub fn sample(&self, elapsed_ms: f64) -> Vec<(T, Frame)> {
        let mut frames: Vec<(T, Frame)> = Vec::new();
        for step in self.steps.iter().filter(|step| step.start_ms <= elapsed_ms) {
            let frame = step.tween.sample(elapsed_ms - step.start_ms);
            match frames.iter_mut().find(|(target, _)| *target == step.target) {
                Some((_, existing)) => existing.merge(&frame),
                None => frames.push((step.target.clone(), frame)),
            }
        }
        frames
    }

    /// Rebinds every step to a new target, dropping steps whose target
    /// cannot be resolved. Start times are kept as planned.
    pub fn filter_map_targets<U, F>(self, mut resolve: F) -> Timeline<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        Timeline {
            steps: self
                .steps
                .into_iter()
                .filter_map(|step| {
                    resolve(&step.target).map(|target| Step {
                        target,
                        tween: step.tween,
                        start_ms: step.start_ms,
                    })
                })
                .collect(),
            cursor_ms: self.cursor_ms,
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::tween::{Property, Repeat};

    #[derive(Clone, Debug, PartialEq)]
    enum Target {
        A,
        B,
    }

    fn fade(duration: f64) -> Tween {
        Tween::new(duration).from_to(Property::Opacity, 0.0, 1.0)
    }

    #[test]
    fn steps_run_back_to_back() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(100.0))
            .add(Target::B, fade(200.0));
        assert_eq!(timeline.start_of(&Target::B), Some(100.0));
        assert_eq!(timeline.duration_ms(), 300.0);
    }

    #[test]
    fn negative_offset_overlaps_previous_step() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(260.0))
            .add_at(Target::B, fade(360.0), Offset::Relative(-200.0));
        assert_eq!(timeline.start_of(&Target::B), Some(60.0));
        assert_eq!(timeline.duration_ms(), 420.0);
    }

    #[test]
    fn later_steps_override_same_target() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(100.0))
            .add(
                Target::A,
                Tween::new(100.0).from_to(Property::Opacity, 1.0, 0.0),
            );
        let frames = timeline.sample(150.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].1.opacity, Some(0.5));
    }

    #[test]
    fn unstarted_steps_are_not_sampled() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(100.0))
            .add(Target::B, fade(100.0));
        let frames = timeline.sample(50.0);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].0, Target::A);
    }

    #[test]
    fn default_easing_applies_to_plain_tweens() {
        let timeline = Timeline::new(Easing::OutQuad).add(Target::A, fade(100.0));
        let opacity = timeline.sample(50.0)[0].1.opacity.unwrap();
        assert!((opacity - 0.75).abs() < 1e-9);
    }

    #[test]
    fn forever_step_never_finishes() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(100.0).repeat(Repeat::Forever));
        assert!(!timeline.is_finished(1e12));
    }

    #[test]
    fn filter_map_drops_unresolved_targets() {
        let timeline = Timeline::new(Easing::Linear)
            .add(Target::A, fade(100.0))
            .add(Target::B, fade(100.0));
        let only_b = timeline.filter_map_targets(|t| (*t == Target::B).then_some("b"));
        assert_eq!(only_b.start_of(&"b"), Some(100.0));
        assert_eq!(only_b.duration_ms(), 200.0);
        assert!(only_b.sample(50.0).is_empty());
    }
}
