use web_sys::Window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// The user's motion preference, read once at startup and handed to every
/// component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn detect(window: &Window) -> Self {
        let reduced = window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map_or(false, |query| query.matches());
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}
