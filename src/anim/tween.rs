use super::easing::Easing;

/// Style properties a tween can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    Scale,
    /// Vertical offset in pixels.
    TranslateY,
    StrokeDashoffset,
    /// Drop-shadow blur radius in pixels.
    Glow,
}

/// Keyframe values for one property. Keyframes split the duration evenly and
/// each segment is eased on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    keyframes: Vec<f64>,
}

impl Track {
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self {
            property,
            keyframes: vec![from, to],
        }
    }

    pub fn keyframes(property: Property, values: &[f64]) -> Self {
        let keyframes = match values {
            [] => vec![0.0, 0.0],
            [only] => vec![*only, *only],
            many => many.to_vec(),
        };
        Self {
            property,
            keyframes,
        }
    }

    fn value_at(&self, progress: f64, easing: Easing) -> f64 {
        let segments = self.keyframes.len() - 1;
        let scaled = progress.clamp(0.0, 1.0) * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f64;
        let from = self.keyframes[index];
        let to = self.keyframes[index + 1];
        from + (to - from) * easing.apply(local)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Normal,
    /// Every odd iteration plays backwards.
    Alternate,
}

/// Number of iterations, counting the first play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Forever,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Times(1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    tracks: Vec<Track>,
    duration_ms: f64,
    easing: Option<Easing>,
    direction: Direction,
    repeat: Repeat,
}

impl Tween {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            tracks: Vec::new(),
            duration_ms: duration_ms.max(0.0),
            easing: None,
            direction: Direction::Normal,
            repeat: Repeat::default(),
        }
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn from_to(self, property: Property, from: f64, to: f64) -> Self {
        self.track(Track::new(property, from, to))
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn alternate(mut self) -> Self {
        self.direction = Direction::Alternate;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Fills in the easing when the tween did not pick one itself.
    pub(crate) fn with_default_easing(mut self, easing: Easing) -> Self {
        self.easing.get_or_insert(easing);
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Total running time across all iterations; `None` when it loops forever.
    pub fn total_ms(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Times(n) => Some(self.duration_ms * n.max(1) as f64),
            Repeat::Forever => None,
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.total_ms().map_or(false, |total| elapsed_ms >= total)
    }

    pub fn sample(&self, elapsed_ms: f64) -> Frame {
        let progress = self.progress_at(elapsed_ms.max(0.0));
        let easing = self.easing.unwrap_or_default();
        let mut frame = Frame::default();
        for track in &self.tracks {
            frame.set(track.property, track.value_at(progress, easing));
        }
        frame
    }

    fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.end_progress();
        }
        if self.is_finished(elapsed_ms) {
            return self.end_progress();
        }
        let iteration = (elapsed_ms / self.duration_ms).floor();
        let local = (elapsed_ms - iteration * self.duration_ms) / self.duration_ms;
        if self.direction == Direction::Alternate && iteration as u64 % 2 == 1 {
            1.0 - local
        } else {
            local
        }
    }

    fn end_progress(&self) -> f64 {
        match (self.direction, self.repeat) {
            (Direction::Alternate, Repeat::Times(n)) if n.max(1) % 2 == 0 => 0.0,
            _ => 1.0,
        }
    }
}

/// Sampled property values. Unset properties are left untouched on the element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub translate_y: Option<f64>,
    pub stroke_dashoffset: Option<f64>,
    pub glow: Option<f64>,
}

impl Frame {
    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::Scale => &mut self.scale,
            Property::TranslateY => &mut self.translate_y,
            Property::StrokeDashoffset => &mut self.stroke_dashoffset,
            Property::Glow => &mut self.glow,
        };
        *slot = Some(value);
    }

    /// Overlays the properties `other` sets on top of this frame.
    pub fn merge(&mut self, other: &Frame) {
        self.opacity = other.opacity.or(self.opacity);
        self.scale = other.scale.or(self.scale);
        self.translate_y = other.translate_y.or(self.translate_y);
        self.stroke_dashoffset = other.stroke_dashoffset.or(self.stroke_dashoffset);
        self.glow = other.glow.or(self.glow);
    }

    pub fn transform(&self) -> Option<String> {
        match (self.translate_y, self.scale) {
            (None, None) => None,
            (Some(y), None) => Some(format!("translateY({}px)", round(y))),
            (None, Some(s)) => Some(format!("scale({})", round(s))),
            (Some(y), Some(s)) => Some(format!("translateY({}px) scale({})", round(y), round(s))),
        }
    }

    pub fn filter(&self) -> Option<String> {
        self.glow.map(|radius| {
            format!("drop-shadow(0 0 {}px rgba(94, 234, 212, 0.85))", round(radius))
        })
    }
}

/// Four decimals is plenty for CSS and keeps the style strings short.
pub(crate) fn round(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_endpoints() {
        let tween = Tween::new(500.0).from_to(Property::Opacity, 0.0, 1.0);
        assert_eq!(tween.sample(0.0).opacity, Some(0.0));
        assert_eq!(tween.sample(250.0).opacity, Some(0.5));
        assert_eq!(tween.sample(500.0).opacity, Some(1.0));
        assert_eq!(tween.sample(9_000.0).opacity, Some(1.0));
    }

    #[test]
    fn keyframes_split_duration_evenly() {
        let tween = Tween::new(2800.0)
            .track(Track::keyframes(Property::Scale, &[1.0, 1.08, 1.0]))
            .easing(Easing::InOutSine);
        assert_eq!(tween.sample(1400.0).scale, Some(1.08));
        let end = tween.sample(2800.0).scale.unwrap();
        assert!((end - 1.0).abs() < 1e-9);
    }

    #[test]
    fn alternate_with_even_iterations_ends_at_start() {
        let tween = Tween::new(320.0)
            .from_to(Property::Scale, 1.0, 1.06)
            .alternate()
            .repeat(Repeat::Times(2));
        assert_eq!(tween.total_ms(), Some(640.0));
        assert_eq!(tween.sample(320.0).scale, Some(1.06));
        let mid_back = tween.sample(480.0).scale.unwrap();
        assert!(mid_back > 1.0 && mid_back < 1.06);
        assert_eq!(tween.sample(640.0).scale, Some(1.0));
    }

    #[test]
    fn forever_never_finishes() {
        let tween = Tween::new(100.0)
            .from_to(Property::Opacity, 1.0, 0.0)
            .repeat(Repeat::Forever);
        assert_eq!(tween.total_ms(), None);
        assert!(!tween.is_finished(1e9));
        assert_eq!(tween.sample(150.0).opacity, Some(0.5));
    }

    #[test]
    fn explicit_easing_wins_over_default() {
        let tween = Tween::new(100.0)
            .from_to(Property::Opacity, 0.0, 1.0)
            .easing(Easing::Linear)
            .with_default_easing(Easing::OutQuad);
        assert_eq!(tween.sample(50.0).opacity, Some(0.5));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let tween = Tween::new(0.0).from_to(Property::TranslateY, 40.0, 0.0);
        assert_eq!(tween.sample(0.0).translate_y, Some(0.0));
        assert!(tween.is_finished(0.0));
    }

    #[test]
    fn frame_formats_transform_and_filter() {
        let mut frame = Frame::default();
        assert_eq!(frame.transform(), None);
        frame.set(Property::Scale, 0.85);
        assert_eq!(frame.transform().as_deref(), Some("scale(0.85)"));
        frame.set(Property::TranslateY, 40.0);
        assert_eq!(frame.transform().as_deref(), Some("translateY(40px) scale(0.85)"));
        frame.set(Property::Glow, 12.0);
        assert_eq!(
            frame.filter().as_deref(),
            Some("drop-shadow(0 0 12px rgba(94, 234, 212, 0.85))")
        );
    }

    #[test]
    fn merge_keeps_untouched_properties() {
        let mut base = Frame::default();
        base.set(Property::Opacity, 0.0);
        base.set(Property::Scale, 0.85);
        let mut later = Frame::default();
        later.set(Property::Scale, 1.0);
        base.merge(&later);
        assert_eq!(base.opacity, Some(0.0));
        assert_eq!(base.scale, Some(1.0));
    }
}
