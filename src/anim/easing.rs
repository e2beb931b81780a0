use std::f64::consts::PI;

/// Easing curves used by the page animations.
///
/// `apply` maps linear progress in `[0, 1]` to eased progress. Every curve
/// returns exactly 0 at 0 and exactly 1 at 1; the elastic curve overshoots in
/// between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    OutQuad,
    InOutQuad,
    InOutSine,
    /// Cubic ease-out.
    Power2Out,
    OutElastic { amplitude: f64, period: f64 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::OutElastic { amplitude, period } => {
                1.0 - elastic_in(1.0 - t, amplitude, period)
            }
        }
    }
}

fn elastic_in(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let a = amplitude.clamp(1.0, 10.0);
    let p = period.clamp(0.1, 2.0);
    let shift = p / (2.0 * PI) * (1.0 / a).asin();
    -a * 2f64.powf(10.0 * (t - 1.0)) * (((t - 1.0) - shift) * (2.0 * PI) / p).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InOutSine,
        Easing::Power2Out,
        Easing::OutElastic { amplitude: 1.0, period: 0.6 },
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn out_curves_run_ahead_of_linear() {
        assert!(Easing::OutQuad.apply(0.5) > 0.5);
        assert!(Easing::Power2Out.apply(0.5) > Easing::OutQuad.apply(0.5));
    }

    #[test]
    fn in_out_curves_are_symmetric() {
        for easing in [Easing::InOutQuad, Easing::InOutSine] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-9);
            let a = easing.apply(0.2);
            let b = easing.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn elastic_overshoots() {
        let easing = Easing::OutElastic { amplitude: 1.0, period: 0.6 };
        let peak = (1..100)
            .map(|i| easing.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::OutQuad.apply(3.0), 1.0);
    }
}
